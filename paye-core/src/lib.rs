//! PAYE withholding estimates for Zimbabwean payroll.
//!
//! [`TaxSchedule`] holds the validated bracket tables, [`calculations`]
//! turns a salary and its benefits and deductions into a [`TaxResult`], and
//! [`session::PayrollSession`] keeps the mutable item list for one user.

pub mod calculations;
pub mod display;
pub mod models;
pub mod presets;
pub mod schedule;
pub mod session;
pub mod validation;

pub use calculations::TaxEngine;
pub use models::*;
pub use schedule::{BracketTable, ScheduleError, TaxSchedule};
pub use session::PayrollSession;
pub use validation::ValidationError;
