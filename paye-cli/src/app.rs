//! Estimate workflow behind the `paye` binary: turn command-line input into
//! a calculated [`PayrollSession`] and render it.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use paye_core::display::format_money;
use paye_core::presets::COMMON_ITEMS;
use paye_core::{
    Currency, ItemKind, LineItem, PayPeriod, PayrollSession, TaxEngine, TaxResult, TaxSchedule,
    ValidationError,
};
use paye_data::ScheduleLoader;
use serde::Serialize;
use tracing::debug;

use crate::utils::ItemArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything needed for one estimate, still as raw text where the user
/// typed it.
#[derive(Debug, Clone)]
pub struct EstimateRequest {
    pub income: String,
    pub currency: Currency,
    pub period: PayPeriod,
    /// Taxable benefits.
    pub benefits: Vec<ItemArg>,
    pub exempt_benefits: Vec<ItemArg>,
    /// Tax-deductible deductions.
    pub deductions: Vec<ItemArg>,
    /// Deductions taken from pay without reducing the tax base.
    pub cash_deductions: Vec<ItemArg>,
    /// Preset items, looked up by name.
    pub common: Vec<ItemArg>,
}

impl EstimateRequest {
    pub fn new(
        income: impl Into<String>,
        currency: Currency,
        period: PayPeriod,
    ) -> Self {
        Self {
            income: income.into(),
            currency,
            period,
            benefits: Vec::new(),
            exempt_benefits: Vec::new(),
            deductions: Vec::new(),
            cash_deductions: Vec::new(),
            common: Vec::new(),
        }
    }
}

#[derive(Serialize)]
struct EstimateReport<'a> {
    items: &'a [LineItem],
    result: &'a TaxResult,
}

/// Adds every item in `request` to a fresh session. Stops at the first
/// invalid item.
pub fn build_session(request: &EstimateRequest) -> Result<PayrollSession, ValidationError> {
    let mut session = PayrollSession::new();

    let groups = [
        (&request.benefits, ItemKind::Benefit, true),
        (&request.exempt_benefits, ItemKind::Benefit, false),
        (&request.deductions, ItemKind::Deduction, true),
        (&request.cash_deductions, ItemKind::Deduction, false),
    ];
    for (args, kind, taxable) in groups {
        for arg in args {
            session.add_item(&arg.name, &arg.amount, kind, taxable)?;
        }
    }
    for arg in &request.common {
        session.add_common_item(&arg.name, &arg.amount)?;
    }

    debug!(items = session.items().len(), "session built");
    Ok(session)
}

/// Builds the session and calculates it against `engine`.
pub fn run_estimate(
    engine: &TaxEngine<'_>,
    request: &EstimateRequest,
) -> Result<PayrollSession, ValidationError> {
    let mut session = build_session(request)?;
    session.calculate(engine, &request.income, request.currency, request.period)?;
    Ok(session)
}

/// Wraps a validation failure so the message leads with the field at fault.
pub fn input_error(err: ValidationError) -> anyhow::Error {
    let field = err.field();
    anyhow::Error::new(err).context(format!("invalid {field}"))
}

/// Loads a replacement bracket schedule from a CSV file.
pub fn load_schedule(path: &Path) -> Result<TaxSchedule> {
    ScheduleLoader::load_from_path(path)
        .with_context(|| format!("failed to load schedule from '{}'", path.display()))
}

fn treatment(
    kind: ItemKind,
    taxable: bool,
) -> &'static str {
    match (kind, taxable) {
        (ItemKind::Benefit, true) => "taxable",
        (ItemKind::Benefit, false) => "exempt",
        (ItemKind::Deduction, true) => "deductible",
        (ItemKind::Deduction, false) => "not deductible",
    }
}

/// Renders the session's items and last result.
pub fn render(
    session: &PayrollSession,
    format: OutputFormat,
) -> Result<String> {
    let result = session
        .last_result()
        .context("no estimate has been calculated")?;

    match format {
        OutputFormat::Json => {
            let report = EstimateReport {
                items: session.items(),
                result,
            };
            serde_json::to_string_pretty(&report).context("failed to serialize estimate")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            if !session.items().is_empty() {
                writeln!(out, "Items")?;
                for item in session.items() {
                    writeln!(
                        out,
                        "  {:<28} {:<10} {:<15} {:>14}",
                        item.name,
                        item.kind.as_str(),
                        treatment(item.kind, item.taxable),
                        format_money(result.currency, item.amount)
                    )?;
                }
                writeln!(out)?;
            }
            write!(out, "{result}")?;
            Ok(out)
        }
    }
}

/// One line per preset item, for `--list-common`.
pub fn common_items_listing() -> String {
    let mut out = String::from("Common items (use with --common NAME=AMOUNT)\n");
    for item in COMMON_ITEMS {
        out.push_str(&format!(
            "  {:<28} {:<10} {}\n",
            item.name,
            item.kind.as_str(),
            treatment(item.kind, item.taxable)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn engine() -> TaxEngine<'static> {
        TaxEngine::new(TaxSchedule::builtin().unwrap())
    }

    fn arg(s: &str) -> ItemArg {
        s.parse().unwrap()
    }

    fn housing_and_pension() -> EstimateRequest {
        let mut request = EstimateRequest::new("2500", Currency::Usd, PayPeriod::Monthly);
        request.benefits.push(arg("Housing Allowance=500"));
        request.deductions.push(arg("Pension=200"));
        request
    }

    // =========================================================================
    // build_session tests
    // =========================================================================

    #[test]
    fn build_session_maps_each_flag_to_its_treatment() {
        let mut request = EstimateRequest::new("1000", Currency::Usd, PayPeriod::Monthly);
        request.benefits.push(arg("Bonus=10"));
        request.exempt_benefits.push(arg("Gift=20"));
        request.deductions.push(arg("Pension=30"));
        request.cash_deductions.push(arg("Loan=40"));
        request.common.push(arg("education allowance=50"));

        let session = build_session(&request).unwrap();
        let summary: Vec<_> = session
            .items()
            .iter()
            .map(|item| (item.name.as_str(), item.kind, item.taxable))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Bonus", ItemKind::Benefit, true),
                ("Gift", ItemKind::Benefit, false),
                ("Pension", ItemKind::Deduction, true),
                ("Loan", ItemKind::Deduction, false),
                ("Education Allowance", ItemKind::Benefit, false),
            ]
        );
    }

    #[test]
    fn build_session_stops_at_first_invalid_item() {
        let mut request = EstimateRequest::new("1000", Currency::Usd, PayPeriod::Monthly);
        request.benefits.push(arg("Bonus=abc"));
        request.common.push(arg("Lottery=5"));

        let err = build_session(&request).unwrap_err();

        assert_eq!(err.field(), "item_amount");
    }

    // =========================================================================
    // run_estimate tests
    // =========================================================================

    #[test]
    fn run_estimate_calculates_housing_and_pension_scenario() {
        let session = run_estimate(&engine(), &housing_and_pension()).unwrap();
        let result = session.last_result().unwrap();

        assert_eq!(result.taxable_income, dec!(2800));
        assert_eq!(result.net_income, dec!(1981.15));
    }

    #[test]
    fn run_estimate_rejects_zero_income() {
        let request = EstimateRequest::new("0", Currency::Zwg, PayPeriod::Weekly);

        let err = run_estimate(&engine(), &request).unwrap_err();

        assert_eq!(err.field(), "gross_income");
    }

    #[test]
    fn run_estimate_rejects_amounts_too_large_to_sum() {
        let mut request = EstimateRequest::new(
            "70000000000000000000000000000",
            Currency::Usd,
            PayPeriod::Monthly,
        );
        request
            .exempt_benefits
            .push(arg("X=70000000000000000000000000000"));

        let err = run_estimate(&engine(), &request).unwrap_err();

        assert_eq!(err.field(), "item_amount");
    }

    #[test]
    fn input_error_names_the_field() {
        let err = input_error(ValidationError::EmptyItemName);

        assert_eq!(err.to_string(), "invalid item_name");
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn render_text_lists_items_then_report() {
        let session = run_estimate(&engine(), &housing_and_pension()).unwrap();

        let text = render(&session, OutputFormat::Text).unwrap();

        assert!(text.starts_with("Items\n"));
        assert!(text.contains("Housing Allowance"));
        assert!(text.contains("deductible"));
        assert!(!text.contains("not deductible"));
        assert!(text.contains("PAYE estimate (USD Monthly)"));
        assert!(text.contains("$1,981.15"));
    }

    #[test]
    fn render_text_without_items_is_just_the_report() {
        let request = EstimateRequest::new("500", Currency::Usd, PayPeriod::Monthly);
        let session = run_estimate(&engine(), &request).unwrap();

        let text = render(&session, OutputFormat::Text).unwrap();

        assert!(text.starts_with("PAYE estimate"));
        assert!(text.ends_with("18.54%"));
    }

    #[test]
    fn render_json_round_trips_result() {
        let session = run_estimate(&engine(), &housing_and_pension()).unwrap();

        let json = render(&session, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let result: TaxResult = serde_json::from_value(value["result"].clone()).unwrap();

        assert_eq!(value["items"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["result"]["currency"], "USD");
        assert_eq!(value["result"]["period"], "monthly");
        assert_eq!(&result, session.last_result().unwrap());
    }

    #[test]
    fn render_without_result_fails() {
        let session = PayrollSession::new();

        assert!(render(&session, OutputFormat::Text).is_err());
    }

    #[test]
    fn common_items_listing_covers_catalogue() {
        let listing = common_items_listing();

        assert_eq!(listing.lines().count(), COMMON_ITEMS.len() + 1);
        assert!(listing.contains("Education Allowance"));
        assert!(listing.contains("exempt"));
    }
}
