use csv::WriterBuilder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::schedule::{RunReport, RunSink};

/// Writes run output next to the member sheet it updates.
///
/// Each run produces `roster_<label>.csv` and `roster_<label>.json` in
/// `output_dir`, then rewrites the member sheet with the new counts.
/// Nothing is left behind in `output_dir` when any of the writes fail.
#[derive(Debug, Clone)]
pub struct CsvSink {
    pub output_dir: PathBuf,
    pub members_path: PathBuf,
    /// Must match how the member sheet is read back
    pub write_header: bool,
}

impl CsvSink {
    pub fn new(output_dir: impl Into<PathBuf>, members_path: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            members_path: members_path.into(),
            write_header: true,
        }
    }

    pub fn roster_csv_path(&self, label: &str) -> PathBuf {
        self.output_dir.join(format!("roster_{}.csv", label))
    }

    pub fn roster_json_path(&self, label: &str) -> PathBuf {
        self.output_dir.join(format!("roster_{}.json", label))
    }

    fn write_rosters(&self, report: &RunReport, roster_path: &Path, json_path: &Path) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        export_roster_to_csv(report, roster_path)?;
        serde_json::to_writer_pretty(File::create(json_path)?, report)?;
        Ok(())
    }
}

impl RunSink for CsvSink {
    fn persist(&mut self, report: &RunReport) -> Result<()> {
        // Stage the member sheet first so a bad members path fails before any roster exists
        let staged = stage_counts_csv(report, &self.members_path, self.write_header)?;

        let roster_path = self.roster_csv_path(&report.label);
        let json_path = self.roster_json_path(&report.label);

        let written = self
            .write_rosters(report, &roster_path, &json_path)
            .and_then(|()| fs::rename(&staged, &self.members_path).map_err(Into::into));

        if let Err(e) = written {
            let _ = fs::remove_file(&staged);
            let _ = fs::remove_file(&roster_path);
            let _ = fs::remove_file(&json_path);
            tracing::error!(error = %e, run = %report.label, "Persisting run failed");
            return Err(e);
        }

        tracing::info!(
            roster = %roster_path.display(),
            members = %self.members_path.display(),
            "Run persisted"
        );
        Ok(())
    }
}

/// Writes one `day,duty,assignee` line per filled duty
pub fn export_roster_to_csv(report: &RunReport, csv_path: &Path) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(csv_path)?;
    wtr.write_record(["day", "duty", "assignee"])?;

    for day in &report.days {
        for assignment in &day.assignments {
            wtr.write_record([
                day.day.as_str(),
                assignment.duty.as_str(),
                assignment.assignee.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Replaces the member sheet with the report's counts.
///
/// The new sheet is written beside the old one and renamed over it, so a
/// failed write leaves the previous counts readable.
pub fn export_counts_to_csv(report: &RunReport, csv_path: &Path, write_header: bool) -> Result<()> {
    let staged = stage_counts_csv(report, csv_path, write_header)?;
    fs::rename(&staged, csv_path)?;
    Ok(())
}

/// Writes the counts to `<csv_path>.tmp` and returns that path
fn stage_counts_csv(report: &RunReport, csv_path: &Path, write_header: bool) -> Result<PathBuf> {
    let mut tmp_path = csv_path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let mut wtr = WriterBuilder::new().from_path(&tmp_path)?;
    if write_header {
        wtr.write_record(["name", "count"])?;
    }
    for candidate in &report.candidates {
        wtr.write_record([candidate.name(), candidate.count().to_string().as_str()])?;
    }
    wtr.flush()?;

    Ok(tmp_path)
}

/// Keeps persisted reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: Vec<RunReport>,
}

impl RunSink for MemorySink {
    fn persist(&mut self, report: &RunReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}
