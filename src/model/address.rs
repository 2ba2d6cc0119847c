//! Email address display formatting.

/// A structured email address as extracted from a message header.
///
/// # Examples
/// - `"Juan García <juan@ejemplo.com>"` → `display_name = "Juan García"`, `address = "juan@ejemplo.com"`
/// - `"user@example.com"` → `display_name = ""`, `address = "user@example.com"`
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmailAddress {
    /// Human-readable display name (may be empty).
    pub display_name: String,
    /// The bare email address (`user@domain`).
    pub address: String,
}

impl EmailAddress {
    pub fn new(display_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            address: address.into(),
        }
    }

    /// Format for export: `"Display Name <address>"`.
    ///
    /// Always the angle form, even when the display name is empty.
    /// Embedded commas or quotes are left alone; quoting them is the
    /// CSV layer's job.
    pub fn display(&self) -> String {
        format!("{} <{}>", self.display_name, self.address)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a list of addresses as a single `;`-joined field.
///
/// Order is preserved; no deduplication or validation. An empty list
/// formats as the empty string.
pub fn format_address_list(addresses: &[EmailAddress]) -> String {
    addresses
        .iter()
        .map(EmailAddress::display)
        .collect::<Vec<_>>()
        .join(";")
}
