pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod parser;
pub mod schedule;
pub mod trigger;

pub use error::{Result, RosterError};
