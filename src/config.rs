use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Default offset of the run label, matching the sheet owners' local time
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// Settings for a duty run.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// CSV with `(day, duty1, duty2, ...)` rows
    pub duties_path: PathBuf,
    /// CSV with `(name, count)` rows; rewritten after every successful run
    pub members_path: PathBuf,
    /// Directory receiving `roster_<label>.csv` and `.json`
    pub output_dir: PathBuf,
    /// Offset applied to the run label
    pub utc_offset_hours: i32,
    /// Fixed tie-break seed. Random when unset.
    pub seed: Option<u64>,
    /// Whether both CSV files start with a header row
    pub skip_header: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            duties_path: PathBuf::from("data/duties.csv"),
            members_path: PathBuf::from("data/members.csv"),
            output_dir: PathBuf::from("output"),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            seed: None,
            skip_header: true,
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(RosterError::validation(format!(
                "UTC offset must be between -23 and 23 hours, got {}",
                self.utc_offset_hours
            )));
        }
        Ok(())
    }
}
