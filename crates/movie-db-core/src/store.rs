//! CSV persistence of the final record set

use std::path::Path;

use crate::error::Result;
use crate::types::{MovieRecord, CSV_HEADER};

/// Write `records` to `path` as CSV, replacing any existing file.
///
/// The header row is always written, even for an empty record set. Unset
/// metadata fields become empty cells.
///
/// # Errors
/// Returns `MovieDbError::CsvError` if the file cannot be created or written.
pub fn save(records: &[MovieRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    tracing::info!("Data successfully saved to '{}'", path.display());
    Ok(())
}
