use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use paye_cli::app::{self, EstimateRequest, OutputFormat};
use paye_cli::logging;
use paye_cli::utils::ItemArg;
use paye_core::{Currency, PayPeriod, TaxEngine, TaxSchedule};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// PAYE withholding estimator for Zimbabwean payroll.
///
/// Computes income tax, AIDS levy and net pay for one pay period from a
/// gross salary plus any benefits and deductions.
#[derive(Debug, Parser)]
#[command(name = "paye", version)]
struct Cli {
    /// Gross income for the period, e.g. `2500` or `1,250.00`.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "list_common")]
    income: Option<String>,

    /// Currency of all amounts: USD or ZWG.
    #[arg(long, default_value = "USD")]
    currency: Currency,

    /// Pay period: daily, weekly, fortnightly, monthly or annual.
    #[arg(long, default_value = "monthly")]
    period: PayPeriod,

    /// Taxable benefit.
    #[arg(long = "benefit", value_name = "NAME=AMOUNT")]
    benefits: Vec<ItemArg>,

    /// Tax-exempt benefit.
    #[arg(long = "exempt-benefit", value_name = "NAME=AMOUNT")]
    exempt_benefits: Vec<ItemArg>,

    /// Tax-deductible deduction.
    #[arg(long = "deduction", value_name = "NAME=AMOUNT")]
    deductions: Vec<ItemArg>,

    /// Deduction from pay that does not reduce taxable income.
    #[arg(long = "cash-deduction", value_name = "NAME=AMOUNT")]
    cash_deductions: Vec<ItemArg>,

    /// Common payroll item by name (see --list-common).
    #[arg(long = "common", value_name = "NAME=AMOUNT")]
    common: Vec<ItemArg>,

    /// Bracket schedule CSV to use instead of the built-in tables.
    #[arg(long, value_name = "CSV")]
    schedule: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the common payroll items and exit.
    #[arg(long)]
    list_common: bool,

    /// Log filter, e.g. `debug` or `paye_core=trace`. Overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn request(&self) -> anyhow::Result<EstimateRequest> {
        let income = self.income.clone().context("--income is required")?;
        let mut request = EstimateRequest::new(income, self.currency, self.period);
        request.benefits = self.benefits.clone();
        request.exempt_benefits = self.exempt_benefits.clone();
        request.deductions = self.deductions.clone();
        request.cash_deductions = self.cash_deductions.clone();
        request.common = self.common.clone();
        Ok(request)
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    if cli.list_common {
        print!("{}", app::common_items_listing());
        return Ok(());
    }

    let loaded;
    let schedule = match &cli.schedule {
        Some(path) => {
            loaded = app::load_schedule(path)?;
            &loaded
        }
        None => TaxSchedule::builtin().context("built-in bracket schedule is invalid")?,
    };
    let engine = TaxEngine::new(schedule);
    debug!(tables = engine.schedule().tables().count(), "schedule ready");
    let request = cli.request()?;
    let session = app::run_estimate(&engine, &request).map_err(app::input_error)?;

    println!("{}", app::render(&session, cli.format)?);

    Ok(())
}
