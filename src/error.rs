use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Too many assignees for available duties on {day} ({duties} duties)")]
    Capacity { day: String, duties: usize },

    #[error("Candidate not found: {0}")]
    NotFound(String),

    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
