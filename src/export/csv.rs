//! Serialize conversion records to the output CSV.
//!
//! Output is UTF-8 with BOM for Excel compatibility. Quoting and escaping
//! (RFC 4180) are handled by the `csv` crate.

use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::model::message::CsvRecord;

/// UTF-8 byte-order mark, prepended so spreadsheet applications detect
/// the encoding.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Column order of the exported document.
///
/// Must match the field order of [`CsvRecord`].
const COLUMNS: [&str; 8] = ["subject", "date", "from", "to", "cc", "bcc", "text", "path"];

/// Serialize all records and write the document to `output` in one shot,
/// overwriting any existing file.
///
/// The header row is always present, so an empty record list produces a
/// header-only document.
pub fn write_csv(records: &[CsvRecord], output: &Path) -> Result<()> {
    let data = serialize(records, output)?;

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + data.len());
    bytes.extend_from_slice(&UTF8_BOM);
    bytes.extend_from_slice(&data);

    std::fs::write(output, bytes).map_err(|e| ConvertError::write(output, e))
}

/// Render the CSV text (header plus one line per record) as bytes.
fn serialize(records: &[CsvRecord], output: &Path) -> Result<Vec<u8>> {
    let csv_err = |source| ConvertError::Csv {
        path: output.to_path_buf(),
        source,
    };

    // The header is written explicitly rather than via serde so it appears
    // even when there are no records.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS).map_err(csv_err)?;
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ConvertError::write(output, e))?;

    writer
        .into_inner()
        .map_err(|e| ConvertError::write(output, std::io::Error::other(e.to_string())))
}
