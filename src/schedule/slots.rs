use crate::error::{Result, RosterError};

/// One day's duties and the people filled into them so far.
///
/// Assignees are positional: the name at index `i` serves `duty_names[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutySlotSet {
    day_label: String,
    duty_names: Vec<String>,
    assignees: Vec<String>,
}

impl DutySlotSet {
    /// Parses a `(day, duty1, duty2, ...)` row. Duties end at the first empty cell.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Result<Self> {
        if row.len() < 2 {
            return Err(RosterError::validation(format!(
                "duty row needs a day label and at least one duty, got {} field(s)",
                row.len()
            )));
        }

        let day_label = row[0].as_ref().trim().to_string();
        let duty_names: Vec<String> = row[1..]
            .iter()
            .map(|d| d.as_ref().trim())
            .take_while(|d| !d.is_empty())
            .map(str::to_string)
            .collect();

        if duty_names.is_empty() {
            return Err(RosterError::validation(format!(
                "no duties listed for '{}'",
                day_label
            )));
        }

        Ok(Self {
            day_label,
            duty_names,
            assignees: Vec::new(),
        })
    }

    pub fn day_label(&self) -> &str {
        &self.day_label
    }

    pub fn duty_names(&self) -> &[String] {
        &self.duty_names
    }

    pub fn assignees(&self) -> &[String] {
        &self.assignees
    }

    /// Duties still waiting for an assignee
    pub fn remaining(&self) -> usize {
        self.duty_names.len() - self.assignees.len()
    }

    pub fn is_full(&self) -> bool {
        self.assignees.len() == self.duty_names.len()
    }

    /// Fills the next open duty with `name`
    pub fn assign(&mut self, name: &str) -> Result<()> {
        if self.assignees.len() >= self.duty_names.len() {
            return Err(RosterError::Capacity {
                day: self.day_label.clone(),
                duties: self.duty_names.len(),
            });
        }
        self.assignees.push(name.to_string());
        Ok(())
    }

    /// (duty, assignee) pairs for the duties filled so far
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.duty_names
            .iter()
            .zip(self.assignees.iter())
            .map(|(duty, name)| (duty.as_str(), name.as_str()))
    }
}
