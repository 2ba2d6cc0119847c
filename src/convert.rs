//! The conversion pipeline: walk, parse, flatten, export.

use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::export;
use crate::model::message::CsvRecord;
use crate::scan::EmlWalker;

/// Summary of a completed conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Number of messages converted (equals the number of rows written).
    pub files_converted: usize,
}

/// Convert every `.eml` file under `input_dir` into one CSV at `output_csv`.
///
/// Files are processed strictly sequentially in discovery order, one row
/// per message; the document is written once, after the last file. Any
/// failure (unreadable file, unparseable message, unwritable destination)
/// aborts the run and leaves no output file behind.
pub fn convert(input_dir: &Path, output_csv: &Path) -> Result<ConvertStats> {
    let walker = EmlWalker::new(input_dir)?;

    let mut records: Vec<CsvRecord> = Vec::new();
    for path in walker {
        let path = path?;
        println!("Open {}", path.display());
        debug!(path = %path.display(), "reading message");

        let raw = std::fs::read(&path).map_err(|e| ConvertError::io(&path, e))?;
        let parsed = crate::parser::eml::parse_eml(&raw, &path)?;
        records.push(CsvRecord::from_parsed(parsed, &path));
    }

    export::csv::write_csv(&records, output_csv)?;
    println!("output to {}", output_csv.display());

    Ok(ConvertStats {
        files_converted: records.len(),
    })
}
