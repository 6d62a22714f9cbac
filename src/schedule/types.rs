use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::slots::DutySlotSet;

/// One filled duty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyAssignment {
    pub duty: String,
    pub assignee: String,
}

/// Roster for a single day, in duty order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRoster {
    pub day: String,
    pub assignments: Vec<DutyAssignment>,
}

impl From<&DutySlotSet> for DayRoster {
    fn from(slots: &DutySlotSet) -> Self {
        Self {
            day: slots.day_label().to_string(),
            assignments: slots
                .assignments()
                .map(|(duty, assignee)| DutyAssignment {
                    duty: duty.to_string(),
                    assignee: assignee.to_string(),
                })
                .collect(),
        }
    }
}

/// Everything a completed run hands to the persister
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub label: String,
    pub days: Vec<DayRoster>,
    pub candidates: Vec<Candidate>,
    pub initial_total: u64,
}

impl RunReport {
    pub fn assignments_made(&self) -> usize {
        self.days.iter().map(|d| d.assignments.len()).sum()
    }

    pub fn final_total(&self) -> u64 {
        self.candidates.iter().map(|c| u64::from(c.count())).sum()
    }

    pub fn count_of(&self, name: &str) -> Option<u32> {
        self.candidates
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.count())
    }
}
