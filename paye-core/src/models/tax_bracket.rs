use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal-rate band of a PAYE table.
///
/// `deduction` is the closed-form shortcut for the tax accumulated in the
/// lower bands, so the tax for any amount inside the band is
/// `amount * rate - deduction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Exclusive lower bound.
    pub min: Decimal,
    /// Inclusive upper bound; `None` for the open-ended top band.
    pub max: Option<Decimal>,
    pub rate: Decimal,
    pub deduction: Decimal,
}

impl TaxBracket {
    pub const fn new(
        min: Decimal,
        max: Option<Decimal>,
        rate: Decimal,
        deduction: Decimal,
    ) -> Self {
        Self {
            min,
            max,
            rate,
            deduction,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Whether `amount` falls inside `(min, max]`.
    pub fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        amount > self.min && self.max.is_none_or(|max| amount <= max)
    }
}
