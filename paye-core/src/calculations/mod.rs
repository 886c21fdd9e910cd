//! PAYE calculation logic.
//!
//! The engine combines the aggregator and the bracket resolver; both are
//! also usable on their own.

pub mod aggregate;
pub mod common;
pub mod engine;
pub mod resolver;

pub use aggregate::{Aggregate, aggregate};
pub use engine::{AIDS_LEVY_RATE, TaxEngine};
pub use resolver::{bracket_tax, resolve, tax_for};
