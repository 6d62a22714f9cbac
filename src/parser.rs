use csv::ReaderBuilder;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};
use crate::schedule::RosterSource;

/// Reads every row of a CSV file as trimmed strings.
///
/// Rows may have different widths; fixed-width sheets padded with empty cells
/// come through unchanged apart from trimming.
pub fn load_rows<P: AsRef<Path>>(csv_path: P, skip_header: bool) -> Result<Vec<Vec<String>>> {
    let csv_path = csv_path.as_ref();
    if !csv_path.exists() {
        return Err(RosterError::MissingInput(csv_path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(skip_header)
        .flexible(true)
        .from_path(csv_path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();

        // Blank lines at the end of an exported sheet
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(row);
    }

    tracing::debug!(path = %csv_path.display(), rows = rows.len(), "Loaded CSV rows");
    Ok(rows)
}

/// Duty and member sheets stored as CSV files
#[derive(Debug, Clone)]
pub struct CsvSource {
    pub duties_path: PathBuf,
    pub members_path: PathBuf,
    pub skip_header: bool,
}

impl CsvSource {
    pub fn new(duties_path: impl Into<PathBuf>, members_path: impl Into<PathBuf>) -> Self {
        Self {
            duties_path: duties_path.into(),
            members_path: members_path.into(),
            skip_header: true,
        }
    }
}

impl RosterSource for CsvSource {
    fn duty_rows(&self) -> Result<Vec<Vec<String>>> {
        load_rows(&self.duties_path, self.skip_header)
    }

    fn member_rows(&self) -> Result<Vec<Vec<String>>> {
        load_rows(&self.members_path, self.skip_header)
    }
}
