use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A person eligible for duties, with the number of duties they have served so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    name: String,
    count: u32,
}

impl Candidate {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Owns every candidate of a run and the only counter per person
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Builds a pool from `(name, count, ...)` rows, keeping input order.
    ///
    /// Fields past the count are ignored. Duplicate names are rejected so that
    /// every person has exactly one counter.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let mut candidates: Vec<Candidate> = Vec::new();
        let mut seen = HashSet::new();

        for (index, row) in rows.iter().enumerate() {
            if row.len() < 2 {
                return Err(RosterError::validation(format!(
                    "candidate row {} has {} field(s), expected name and count",
                    index + 1,
                    row.len()
                )));
            }

            let name = row[0].as_ref().trim();
            let count = row[1].as_ref().trim();

            if name.is_empty() {
                return Err(RosterError::validation(format!(
                    "candidate row {} has an empty name",
                    index + 1
                )));
            }
            if count.is_empty() {
                return Err(RosterError::validation(format!(
                    "candidate '{}' has no count",
                    name
                )));
            }
            let count: u32 = count.parse().map_err(|_| {
                RosterError::validation(format!(
                    "candidate '{}' has an invalid count '{}'",
                    name, count
                ))
            })?;

            if !seen.insert(name.to_string()) {
                return Err(RosterError::validation(format!(
                    "duplicate candidate name '{}'",
                    name
                )));
            }

            candidates.push(Candidate::new(name, count));
        }

        Ok(Self { candidates })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sum of every candidate's count
    pub fn total_count(&self) -> u64 {
        self.candidates.iter().map(|c| u64::from(c.count)).sum()
    }

    /// Candidates outside `excluding` whose count equals the minimum among them.
    /// Empty when everyone is excluded.
    pub fn least_loaded(&self, excluding: &HashSet<String>) -> Vec<&Candidate> {
        let eligible: Vec<&Candidate> = self
            .candidates
            .iter()
            .filter(|c| !excluding.contains(&c.name))
            .collect();

        let Some(min) = eligible.iter().map(|c| c.count).min() else {
            return Vec::new();
        };

        eligible.into_iter().filter(|c| c.count == min).collect()
    }

    /// Adds one served duty to the named candidate
    pub fn record_assignment(&mut self, name: &str) -> Result<()> {
        let index = self
            .candidates
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))?;

        let candidate = &mut self.candidates[index];
        candidate.count = candidate.count.checked_add(1).ok_or_else(|| {
            RosterError::validation(format!(
                "count for '{}' cannot go past {}",
                candidate.name,
                u32::MAX
            ))
        })?;
        tracing::debug!(candidate = %candidate.name, count = candidate.count, "Count recorded");
        Ok(())
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
