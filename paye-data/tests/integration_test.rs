//! Integration tests for schedule loading against the shipped CSV fixture.

use std::path::{Path, PathBuf};

use paye_core::{Currency, PayPeriod, ScheduleError, TaxEngine, TaxSchedule};
use paye_data::{ScheduleLoader, ScheduleLoaderError};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const ZIMRA_2025_CSV: &str = include_str!("../test-data/zimra_2025.csv");

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("zimra_2025.csv")
}

#[test]
fn test_fixture_parses_all_rows() {
    let records = ScheduleLoader::parse(ZIMRA_2025_CSV.as_bytes()).expect("Failed to parse CSV");

    // 2 currencies x 5 periods x 6 bands
    assert_eq!(records.len(), 60);
}

#[test]
fn test_fixture_matches_builtin_schedule() {
    let loaded = ScheduleLoader::load_from_path(&fixture_path()).expect("Failed to load fixture");

    assert_eq!(&loaded, TaxSchedule::builtin().unwrap());
}

#[test]
fn test_loaded_schedule_drives_engine() {
    let schedule = ScheduleLoader::load(ZIMRA_2025_CSV.as_bytes()).unwrap();
    let engine = TaxEngine::new(&schedule);

    let result = engine
        .compute(dec!(500), Currency::Usd, PayPeriod::Monthly, &[])
        .unwrap();

    assert_eq!(result.income_tax, dec!(90));
    assert_eq!(result.total_tax, dec!(92.70));
}

#[test]
fn test_loaded_zwg_monthly_brackets() {
    let schedule = ScheduleLoader::load(ZIMRA_2025_CSV.as_bytes()).unwrap();
    let table = schedule.table(Currency::Zwg, PayPeriod::Monthly).unwrap();
    let brackets = table.brackets();

    assert_eq!(brackets.len(), 6);
    assert_eq!(brackets[0].min, dec!(0));
    assert_eq!(brackets[0].max, Some(dec!(2800)));
    assert_eq!(brackets[0].rate, dec!(0));
    assert_eq!(brackets[5].min, dec!(84000));
    assert_eq!(brackets[5].max, None);
    assert_eq!(brackets[5].rate, dec!(0.40));
    assert_eq!(brackets[5].deduction, dec!(9380));
}

#[test]
fn test_fixture_with_one_table_dropped_is_incomplete() {
    let trimmed: String = ZIMRA_2025_CSV
        .lines()
        .filter(|line| !line.starts_with("ZWG,daily,"))
        .map(|line| format!("{line}\n"))
        .collect();

    let result = ScheduleLoader::load(trimmed.as_bytes());

    assert!(matches!(
        result,
        Err(ScheduleLoaderError::Schedule(ScheduleError::MissingTable {
            currency: Currency::Zwg,
            period: PayPeriod::Daily,
        }))
    ));
}

#[test]
fn test_fixture_with_tampered_deduction_is_discontinuous() {
    let tampered = ZIMRA_2025_CSV.replace(
        "USD,monthly,1000,2000,0.30,85",
        "USD,monthly,1000,2000,0.30,95",
    );

    let result = ScheduleLoader::load(tampered.as_bytes());

    assert!(matches!(
        result,
        Err(ScheduleLoaderError::Schedule(ScheduleError::Discontinuous {
            currency: Currency::Usd,
            period: PayPeriod::Monthly,
            index: 3,
            ..
        }))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ScheduleLoader::load_from_path(Path::new("does/not/exist.csv"));

    assert!(matches!(result, Err(ScheduleLoaderError::Io(_))));
}
