use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{Result, RosterError};

/// Format of the label that names every run's output
pub const RUN_LABEL_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Source of the run label
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    fn run_label(&self) -> String {
        self.now().format(RUN_LABEL_FORMAT).to_string()
    }
}

/// Wall clock shifted to a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn with_offset_hours(hours: i32) -> Result<Self> {
        let offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| RosterError::validation(format!("invalid UTC offset {}h", hours)))?;
        Ok(Self { offset })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
