//! CSV import and export of PAYE bracket schedules.
//!
//! ## CSV Format
//!
//! | Column      | Type    | Notes                                          |
//! |-------------|---------|------------------------------------------------|
//! | `currency`  | string  | `USD` or `ZWG`                                 |
//! | `period`    | string  | `daily`, `weekly`, `fortnightly`, `monthly`, `annual` |
//! | `min`       | decimal | Exclusive lower bound; equals the previous `max` |
//! | `max`       | decimal | Inclusive upper bound; empty for the top band  |
//! | `rate`      | decimal | Marginal rate as a fraction, e.g. `0.25`       |
//! | `deduction` | decimal | Constant subtracted from `amount * rate`       |
//!
//! Rows for one currency and period must be in ascending order. A complete
//! file has a table for every currency and period.
//!
//! ```csv
//! currency,period,min,max,rate,deduction
//! USD,monthly,0,100,0,0
//! USD,monthly,100,300,0.20,20
//! USD,monthly,300,,0.25,35
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use paye_core::{BracketTable, Currency, PayPeriod, ScheduleError, TaxBracket, TaxSchedule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading a bracket schedule.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("cannot read schedule file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unsupported currency '{value}' on row {row}")]
    InvalidCurrency { value: String, row: usize },

    #[error("unsupported pay period '{value}' on row {row}")]
    InvalidPeriod { value: String, row: usize },

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of the schedule CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketRecord {
    pub currency: String,
    pub period: String,
    pub min: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max: Option<Decimal>,
    pub rate: Decimal,
    pub deduction: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Reads, validates and writes bracket schedules in CSV form.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse bracket records from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        debug!(records = records.len(), "parsed schedule CSV");
        Ok(records)
    }

    /// Group records into tables and validate them as a complete schedule.
    ///
    /// Rows keep their file order within each (currency, period) group.
    pub fn build(records: &[BracketRecord]) -> Result<TaxSchedule, ScheduleLoaderError> {
        let mut groups: BTreeMap<(Currency, PayPeriod), Vec<TaxBracket>> = BTreeMap::new();

        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;
            let currency = Currency::parse(&record.currency).ok_or_else(|| {
                ScheduleLoaderError::InvalidCurrency {
                    value: record.currency.clone(),
                    row,
                }
            })?;
            let period = PayPeriod::parse(&record.period).ok_or_else(|| {
                ScheduleLoaderError::InvalidPeriod {
                    value: record.period.clone(),
                    row,
                }
            })?;

            groups.entry((currency, period)).or_default().push(TaxBracket::new(
                record.min,
                record.max,
                record.rate,
                record.deduction,
            ));
        }

        let tables = groups
            .into_iter()
            .map(|((currency, period), brackets)| BracketTable::new(currency, period, brackets))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TaxSchedule::new(tables)?)
    }

    /// Parse and build in one step.
    pub fn load<R: Read>(reader: R) -> Result<TaxSchedule, ScheduleLoaderError> {
        let records = Self::parse(reader)?;
        Self::build(&records)
    }

    /// Load a schedule from a file on disk.
    pub fn load_from_path(path: &Path) -> Result<TaxSchedule, ScheduleLoaderError> {
        let file = File::open(path)?;
        let schedule = Self::load(file)?;
        info!(path = %path.display(), "loaded bracket schedule");
        Ok(schedule)
    }

    /// Flatten a schedule back into CSV records, ordered by currency, then
    /// period, then band.
    pub fn records(schedule: &TaxSchedule) -> Vec<BracketRecord> {
        schedule
            .tables()
            .flat_map(|table| {
                table.brackets().iter().map(move |bracket| BracketRecord {
                    currency: table.currency().as_str().to_string(),
                    period: table.period().as_str().to_string(),
                    min: bracket.min,
                    max: bracket.max,
                    rate: bracket.rate,
                    deduction: bracket.deduction,
                })
            })
            .collect()
    }

    /// Write a schedule as CSV, including the header row.
    pub fn write<W: Write>(
        schedule: &TaxSchedule,
        writer: W,
    ) -> Result<usize, ScheduleLoaderError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let records = Self::records(schedule);

        for record in &records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;

        Ok(records.len())
    }
}
