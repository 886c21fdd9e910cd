//! Benefit and deduction totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ItemKind, LineItem};

/// Line items summed by kind and tax treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Benefits added to taxable income.
    pub taxable_benefits: Decimal,
    /// Benefits paid out tax free.
    pub non_taxable_benefits: Decimal,
    /// Deductions taken off taxable income.
    pub tax_deductions: Decimal,
    /// Deductions that only reduce net pay.
    pub non_tax_deductions: Decimal,
}

impl Aggregate {
    pub fn total_benefits(&self) -> Decimal {
        self.taxable_benefits + self.non_taxable_benefits
    }

    pub fn total_deductions(&self) -> Decimal {
        self.tax_deductions + self.non_tax_deductions
    }
}

/// Partitions `items` into the four [`Aggregate`] sums.
///
/// Items are assumed to be validated already, so every amount is at most
/// [`crate::validation::MAX_AMOUNT`] and the sums cannot overflow. The
/// result does not depend on item order.
pub fn aggregate(items: &[LineItem]) -> Aggregate {
    items
        .iter()
        .fold(Aggregate::default(), |mut totals, item| {
            let bucket = match (item.kind, item.taxable) {
                (ItemKind::Benefit, true) => &mut totals.taxable_benefits,
                (ItemKind::Benefit, false) => &mut totals.non_taxable_benefits,
                (ItemKind::Deduction, true) => &mut totals.tax_deductions,
                (ItemKind::Deduction, false) => &mut totals.non_tax_deductions,
            };
            *bucket += item.amount;
            totals
        })
}
