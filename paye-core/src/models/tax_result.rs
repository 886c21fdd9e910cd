use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Currency, PayPeriod};

/// Snapshot of one PAYE computation.
///
/// Every field is derived from the engine inputs; values are unrounded.
/// Round with [`crate::calculations::common::round_half_up`] or the helpers
/// in [`crate::display`] when presenting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub currency: Currency,
    pub period: PayPeriod,

    /// Basic salary for the period.
    pub gross_income: Decimal,
    /// Benefits added to the tax base.
    pub taxable_benefits: Decimal,
    /// Benefits paid out but exempt from tax.
    pub non_taxable_benefits: Decimal,
    /// Taxable plus non-taxable benefits.
    pub total_benefits: Decimal,
    /// All deductions, tax-deductible or not.
    pub total_deductions: Decimal,

    /// Gross income plus taxable benefits minus tax-deductible deductions.
    pub taxable_income: Decimal,
    /// Bracket tax on the taxable income.
    pub income_tax: Decimal,
    /// 3% levy on the income tax.
    pub aids_levy: Decimal,
    /// Income tax plus levy.
    pub total_tax: Decimal,

    /// Take-home pay after benefits, deductions and tax.
    pub net_income: Decimal,
    /// Total tax as a percentage of gross income plus benefits.
    pub effective_tax_rate: Decimal,
}
