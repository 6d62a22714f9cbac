pub mod types;
pub mod candidate;
pub mod slots;
pub mod engine;
pub mod run;

pub use types::{DayRoster, DutyAssignment, RunReport};
pub use candidate::{Candidate, CandidatePool};
pub use slots::DutySlotSet;
pub use engine::AssignmentEngine;
pub use run::{execute, run, RosterSource, RunSink};
