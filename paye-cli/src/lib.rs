//! Command-line front end for the PAYE estimator.

pub mod app;
pub mod logging;
pub mod utils;
