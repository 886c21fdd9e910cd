//! Bracket schedule files for the PAYE estimator.

mod loader;

pub use loader::{BracketRecord, ScheduleLoader, ScheduleLoaderError};
