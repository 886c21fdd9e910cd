//! Human-readable rendering of amounts and results.

use std::fmt;

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::schedule::BracketTable;
use crate::{Currency, TaxResult};

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `amount` to cents with thousands separators and the currency
/// symbol, e.g. `$1,981.15` or `ZWG 2,800.00`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::Currency;
/// use paye_core::display::format_money;
///
/// assert_eq!(format_money(Currency::Usd, dec!(1981.154)), "$1,981.15");
/// assert_eq!(format_money(Currency::Zwg, dec!(-10)), "-ZWG 10.00");
/// ```
pub fn format_money(
    currency: Currency,
    amount: Decimal,
) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!(
        "{sign}{}{}.{cents}",
        currency.symbol(),
        group_thousands(whole)
    )
}

/// Formats a percentage to two decimals, e.g. `18.54%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", round_half_up(value))
}

impl fmt::Display for TaxResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let money = |amount| format_money(self.currency, amount);
        writeln!(
            f,
            "PAYE estimate ({} {})",
            self.currency,
            self.period.label()
        )?;
        writeln!(f, "  Gross income         {:>16}", money(self.gross_income))?;
        writeln!(f, "  Taxable benefits     {:>16}", money(self.taxable_benefits))?;
        writeln!(f, "  Non-taxable benefits {:>16}", money(self.non_taxable_benefits))?;
        writeln!(f, "  Total deductions     {:>16}", money(self.total_deductions))?;
        writeln!(f, "  Taxable income       {:>16}", money(self.taxable_income))?;
        writeln!(f, "  Income tax           {:>16}", money(self.income_tax))?;
        writeln!(f, "  AIDS levy (3%)       {:>16}", money(self.aids_levy))?;
        writeln!(f, "  Total tax            {:>16}", money(self.total_tax))?;
        writeln!(f, "  Net income           {:>16}", money(self.net_income))?;
        write!(
            f,
            "  Effective tax rate   {:>16}",
            format_percent(self.effective_tax_rate)
        )
    }
}

impl fmt::Display for BracketTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}:", self.currency(), self.period())?;
        for bracket in self.brackets() {
            let upper = bracket
                .max
                .map(|max| max.to_string())
                .unwrap_or_else(|| "∞".to_string());
            write!(
                f,
                "\n  ({}, {}] @ {} less {}",
                bracket.min,
                upper,
                format_percent(bracket.rate * Decimal::ONE_HUNDRED),
                bracket.deduction
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::TaxEngine;
    use crate::{PayPeriod, TaxSchedule};

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(Currency::Usd, dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn format_money_pads_cents() {
        assert_eq!(format_money(Currency::Usd, dec!(2.7)), "$2.70");
    }

    #[test]
    fn format_money_rounds_into_next_thousand() {
        assert_eq!(format_money(Currency::Zwg, dec!(999.995)), "ZWG 1,000.00");
        assert_eq!(format_money(Currency::Zwg, dec!(0)), "ZWG 0.00");
    }

    #[test]
    fn format_money_drops_sign_of_rounded_zero() {
        assert_eq!(format_money(Currency::Usd, dec!(-0.001)), "$0.00");
    }

    #[test]
    fn format_percent_rounds_to_two_places() {
        assert_eq!(format_percent(dec!(27.295)), "27.30%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
    }

    #[test]
    fn tax_result_report_lists_every_figure() {
        let engine = TaxEngine::new(TaxSchedule::builtin().unwrap());
        let result = engine
            .compute(dec!(500), Currency::Usd, PayPeriod::Monthly, &[])
            .unwrap();

        let report = result.to_string();

        assert!(report.starts_with("PAYE estimate (USD Monthly)"));
        assert!(report.contains("$90.00"));
        assert!(report.contains("$2.70"));
        assert!(report.contains("$407.30"));
        assert!(report.ends_with("18.54%"));
    }

    #[test]
    fn bracket_table_display_shows_open_top_band() {
        let schedule = TaxSchedule::builtin().unwrap();
        let table = schedule.table(Currency::Usd, PayPeriod::Monthly).unwrap();

        let text = table.to_string();

        assert!(text.starts_with("USD monthly:"));
        assert!(text.contains("(3000, ∞] @ 40.00% less 335"));
    }
}
