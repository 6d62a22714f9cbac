use rand::Rng;

use super::candidate::CandidatePool;
use super::engine::AssignmentEngine;
use super::slots::DutySlotSet;
use super::types::{DayRoster, RunReport};
use crate::clock::Clock;
use crate::error::Result;

/// Raw rows a run is built from
pub trait RosterSource {
    fn duty_rows(&self) -> Result<Vec<Vec<String>>>;
    fn member_rows(&self) -> Result<Vec<Vec<String>>>;
}

/// Destination of a completed run
pub trait RunSink {
    fn persist(&mut self, report: &RunReport) -> Result<()>;
}

/// Fills every day of a run against one shared pool.
///
/// All rows are validated before the first assignment, so bad input never
/// leaves a half-filled run behind.
pub fn run<S, R>(
    duty_rows: &[Vec<S>],
    member_rows: &[Vec<S>],
    label: impl Into<String>,
    engine: &mut AssignmentEngine<R>,
) -> Result<RunReport>
where
    S: AsRef<str>,
    R: Rng,
{
    let label = label.into();

    let mut pool = CandidatePool::from_rows(member_rows)?;
    let mut days = duty_rows
        .iter()
        .map(|row| DutySlotSet::from_row(row))
        .collect::<Result<Vec<_>>>()?;

    let initial_total = pool.total_count();
    tracing::info!(
        run = %label,
        days = days.len(),
        candidates = pool.len(),
        "Starting duty run"
    );

    for slots in &mut days {
        engine.fill(slots, &mut pool)?;
    }

    let report = RunReport {
        label,
        days: days.iter().map(DayRoster::from).collect(),
        candidates: pool.into_candidates(),
        initial_total,
    };

    tracing::info!(
        run = %report.label,
        assignments = report.assignments_made(),
        "Duty run complete"
    );
    Ok(report)
}

/// Loads, runs, and persists. The sink is only reached after a successful run.
pub fn execute<R: Rng>(
    source: &impl RosterSource,
    sink: &mut impl RunSink,
    clock: &impl Clock,
    engine: &mut AssignmentEngine<R>,
) -> Result<RunReport> {
    let duty_rows = source.duty_rows()?;
    let member_rows = source.member_rows()?;
    tracing::debug!(duties = ?duty_rows, members = ?member_rows, "Loaded input rows");

    let report = run(&duty_rows, &member_rows, clock.run_label(), engine)?;
    sink.persist(&report)?;
    Ok(report)
}
