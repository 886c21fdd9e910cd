//! PAYE computation for one pay period.
//!
//! # Steps
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Sum line items by kind and tax treatment |
//! | 2    | Total deductions (deductible + non-deductible) |
//! | 3    | Taxable income (gross + taxable benefits - deductible deductions) |
//! | 4    | Resolve the bracket for taxable income |
//! | 5    | Income tax (`income * rate - deduction`, minimum 0) |
//! | 6    | AIDS levy (3% of income tax) |
//! | 7    | Total tax (income tax + levy) |
//! | 8    | Total benefits |
//! | 9    | Net income (gross + benefits - deductions - total tax) |
//! | 10   | Effective tax rate (total tax over gross + benefits, in %) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::calculations::TaxEngine;
//! use paye_core::{Currency, PayPeriod, TaxSchedule};
//!
//! let schedule = TaxSchedule::builtin().unwrap();
//! let engine = TaxEngine::new(schedule);
//!
//! let result = engine
//!     .compute(dec!(500), Currency::Usd, PayPeriod::Monthly, &[])
//!     .unwrap();
//!
//! assert_eq!(result.income_tax, dec!(90));
//! assert_eq!(result.aids_levy, dec!(2.70));
//! assert_eq!(result.net_income, dec!(407.30));
//! assert_eq!(result.effective_tax_rate, dec!(18.54));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::aggregate::aggregate;
use crate::calculations::common::percentage_of;
use crate::calculations::resolver::{bracket_tax, resolve};
use crate::schedule::TaxSchedule;
use crate::validation::{self, ValidationError};
use crate::{Currency, LineItem, PayPeriod, TaxResult};

/// Levy charged on top of income tax, as a fraction of the income tax.
pub const AIDS_LEVY_RATE: Decimal = dec!(0.03);

/// Stateless PAYE calculator over a [`TaxSchedule`].
#[derive(Debug, Clone, Copy)]
pub struct TaxEngine<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> TaxEngine<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule this engine resolves brackets against.
    pub fn schedule(&self) -> &'a TaxSchedule {
        self.schedule
    }

    /// Computes tax, levy and net pay for one period.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if:
    /// - `gross_income` is zero, negative or above [`validation::MAX_AMOUNT`]
    /// - the schedule has no table for `currency` and `period`
    /// - any item has a blank name or an amount outside `(0, MAX_AMOUNT]`
    pub fn compute(
        &self,
        gross_income: Decimal,
        currency: Currency,
        period: PayPeriod,
        items: &[LineItem],
    ) -> Result<TaxResult, ValidationError> {
        let gross_income = validation::positive_gross_income(gross_income)?;
        let table = self
            .schedule
            .table(currency, period)
            .ok_or(ValidationError::MissingSchedule { currency, period })?;
        for item in items {
            item.validate()?;
        }

        let totals = aggregate(items);
        let total_deductions = totals.total_deductions();
        let taxable_income = gross_income + totals.taxable_benefits - totals.tax_deductions;

        let income_tax = resolve(table, taxable_income)
            .map(|bracket| bracket_tax(bracket, taxable_income))
            .unwrap_or(Decimal::ZERO);
        let aids_levy = income_tax * AIDS_LEVY_RATE;
        let total_tax = income_tax + aids_levy;

        let total_benefits = totals.total_benefits();
        let net_income = gross_income + total_benefits - total_deductions - total_tax;
        let effective_tax_rate = percentage_of(total_tax, gross_income + total_benefits);

        debug!(
            %currency,
            %period,
            %taxable_income,
            %income_tax,
            %total_tax,
            items = items.len(),
            "computed PAYE"
        );

        Ok(TaxResult {
            currency,
            period,
            gross_income,
            taxable_benefits: totals.taxable_benefits,
            non_taxable_benefits: totals.non_taxable_benefits,
            total_benefits,
            total_deductions,
            taxable_income,
            income_tax,
            aids_levy,
            total_tax,
            net_income,
            effective_tax_rate,
        })
    }
}
