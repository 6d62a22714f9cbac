use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::candidate::CandidatePool;
use super::slots::DutySlotSet;
use crate::error::{Result, RosterError};

/// Fills duty slot sets from a candidate pool.
///
/// Every pick comes from the least-loaded candidates that have not yet served
/// in the current slot set. Ties are broken with the injected generator, so a
/// seeded engine is fully deterministic.
#[derive(Debug)]
pub struct AssignmentEngine<R = StdRng> {
    rng: R,
}

impl AssignmentEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> AssignmentEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fills every open duty of `slots`, recording each pick in `pool`.
    ///
    /// Counts already recorded stay recorded if a later pick fails.
    pub fn fill(&mut self, slots: &mut DutySlotSet, pool: &mut CandidatePool) -> Result<()> {
        if pool.is_empty() {
            return Err(RosterError::validation(format!(
                "no candidates available to fill '{}'",
                slots.day_label()
            )));
        }

        let mut used: HashSet<String> = slots.assignees().iter().cloned().collect();

        while !slots.is_full() {
            let chosen = match self.pick(pool, &used) {
                Some(name) => name,
                None => {
                    // Everyone has served in this set already; start reusing
                    tracing::warn!(
                        day = %slots.day_label(),
                        remaining = slots.remaining(),
                        candidates = pool.len(),
                        "Fewer candidates than duties, reusing candidates"
                    );
                    used.clear();
                    self.pick(pool, &used).ok_or_else(|| {
                        RosterError::validation(format!(
                            "no eligible candidate for '{}'",
                            slots.day_label()
                        ))
                    })?
                }
            };

            let duty = slots.duty_names()[slots.assignees().len()].clone();
            slots.assign(&chosen)?;
            pool.record_assignment(&chosen)?;
            tracing::debug!(day = %slots.day_label(), duty = %duty, assignee = %chosen, "Duty assigned");
            used.insert(chosen);
        }

        Ok(())
    }

    fn pick(&mut self, pool: &CandidatePool, used: &HashSet<String>) -> Option<String> {
        let tied = pool.least_loaded(used);
        match tied.as_slice() {
            [] => None,
            [only] => Some(only.name().to_string()),
            _ => tied.choose(&mut self.rng).map(|c| c.name().to_string()),
        }
    }
}
