use std::str::FromStr;

use thiserror::Error;

/// Error returned when an item argument is not in `NAME=AMOUNT` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected NAME=AMOUNT, got '{input}'")]
pub struct ParseItemArgError {
    input: String,
}

/// A benefit or deduction given on the command line as `NAME=AMOUNT`.
///
/// Both halves are kept as text; the session validates them so that errors
/// name the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub name: String,
    pub amount: String,
}

impl FromStr for ItemArg {
    type Err = ParseItemArgError;

    /// Splits on the last `=`, so names may themselves contain one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, amount) = s.rsplit_once('=').ok_or_else(|| {
            tracing::warn!(input = %s, "item argument without '='");
            ParseItemArgError {
                input: s.to_string(),
            }
        })?;
        Ok(Self {
            name: name.trim().to_string(),
            amount: amount.trim().to_string(),
        })
    }
}
