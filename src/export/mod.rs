//! Export functionality: CSV document serialization and output writing.

pub mod csv;
