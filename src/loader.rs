//! Delimited-text loading.
//!
//! Reads a CSV (or other single-byte delimited) source into a [`Table`].
//! The first record is the header; ragged records are accepted as-is so the
//! statistics layer can treat missing trailing fields as blanks.

use crate::error::{AnalyzerError, Result};
use crate::models::Table;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: char = '\u{feff}';

/// Parse delimited records from `reader` into a table.
///
/// `source` is only used for error context. Fails with
/// [`AnalyzerError::EmptySource`] when there is not even a header record.
pub fn parse_table<R: Read>(reader: R, delimiter: u8, source: &Path) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.byte_records();

    let mut header = match records.next() {
        Some(record) => decode_fields(&record.map_err(|e| AnalyzerError::csv(source, e))?),
        None => {
            return Err(AnalyzerError::EmptySource {
                path: source.to_path_buf(),
            });
        }
    };

    if let Some(first) = header.first_mut() {
        if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
            *first = stripped.to_string();
        }
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| AnalyzerError::csv(source, e))?;
        rows.push(decode_fields(&record));
    }

    debug!(
        "Parsed {}: {} columns, {} data rows",
        source.display(),
        header.len(),
        rows.len()
    );

    Ok(Table::new(header, rows))
}

/// Decode raw fields, replacing invalid UTF-8 so one bad cell cannot sink the file
fn decode_fields(record: &csv::ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

/// Load a table from disk
pub fn load_table(path: &Path, delimiter: u8) -> Result<Table> {
    if !path.exists() {
        return Err(AnalyzerError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Loading CSV file: {}", path.display());
    let file = std::fs::File::open(path)?;
    parse_table(std::io::BufReader::new(file), delimiter, path)
}

/// Load a table from disk without blocking the runtime's worker threads
pub async fn load_table_async(path: &Path, delimiter: u8) -> Result<Table> {
    if !tokio::fs::try_exists(path).await? {
        return Err(AnalyzerError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Loading CSV file: {}", path.display());
    let bytes = tokio::fs::read(path).await?;
    parse_table(bytes.as_slice(), delimiter, path)
}
