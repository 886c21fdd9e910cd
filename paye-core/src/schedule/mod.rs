//! Validated PAYE bracket tables.
//!
//! A [`BracketTable`] holds the bands for one currency and pay period and
//! refuses to exist unless its bands are ordered, contiguous, capped by a
//! single open-ended band, and monotonic in both rate and deduction. A
//! [`TaxSchedule`] is the complete set of tables, one for every
//! [`Currency`] × [`PayPeriod`] combination.
//!
//! Both are immutable after construction and safe to share between threads.

mod zimra;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{Currency, PayPeriod, TaxBracket};

/// Largest jump allowed in the tax function at a band boundary. Published
/// deduction constants are rounded to the cent, so adjacent bands rarely
/// agree exactly.
pub const CONTINUITY_TOLERANCE: Decimal = dec!(0.02);

/// A bracket table that breaks one of the schedule invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{currency} {period}: table has no brackets")]
    Empty {
        currency: Currency,
        period: PayPeriod,
    },

    #[error("{currency} {period}: bracket {index} lower bound {min} is below the previous bracket's")]
    Unsorted {
        currency: Currency,
        period: PayPeriod,
        index: usize,
        min: Decimal,
    },

    #[error(
        "{currency} {period}: bracket {index} starts at {min} but the previous bracket ends at {previous_max}"
    )]
    Gap {
        currency: Currency,
        period: PayPeriod,
        index: usize,
        min: Decimal,
        previous_max: Decimal,
    },

    #[error("{currency} {period}: bracket {index} has no upper bound but is not the last bracket")]
    UnboundedNotLast {
        currency: Currency,
        period: PayPeriod,
        index: usize,
    },

    #[error("{currency} {period}: last bracket must have no upper bound")]
    NoUnboundedBracket {
        currency: Currency,
        period: PayPeriod,
    },

    #[error("{currency} {period}: bracket {index} upper bound does not exceed its lower bound")]
    EmptyRange {
        currency: Currency,
        period: PayPeriod,
        index: usize,
    },

    #[error("{currency} {period}: bracket {index} rate {rate} is outside [0, 1]")]
    RateOutOfRange {
        currency: Currency,
        period: PayPeriod,
        index: usize,
        rate: Decimal,
    },

    #[error("{currency} {period}: bracket {index} rate {rate} is below the previous rate {previous}")]
    DecreasingRate {
        currency: Currency,
        period: PayPeriod,
        index: usize,
        rate: Decimal,
        previous: Decimal,
    },

    #[error("{currency} {period}: bracket {index} deduction {deduction} is negative")]
    NegativeDeduction {
        currency: Currency,
        period: PayPeriod,
        index: usize,
        deduction: Decimal,
    },

    #[error(
        "{currency} {period}: bracket {index} deduction {deduction} is below the previous deduction {previous}"
    )]
    DecreasingDeduction {
        currency: Currency,
        period: PayPeriod,
        index: usize,
        deduction: Decimal,
        previous: Decimal,
    },

    #[error("{currency} {period}: tax jumps by {jump} at boundary {boundary} (bracket {index})")]
    Discontinuous {
        currency: Currency,
        period: PayPeriod,
        index: usize,
        boundary: Decimal,
        jump: Decimal,
    },

    #[error("schedule has no table for {currency} {period}")]
    MissingTable {
        currency: Currency,
        period: PayPeriod,
    },

    #[error("schedule has more than one table for {currency} {period}")]
    DuplicateTable {
        currency: Currency,
        period: PayPeriod,
    },
}

/// Bands for one currency and pay period, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    currency: Currency,
    period: PayPeriod,
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validates `brackets` and wraps them in a table.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] found, scanning bands in order.
    pub fn new(
        currency: Currency,
        period: PayPeriod,
        brackets: Vec<TaxBracket>,
    ) -> Result<Self, ScheduleError> {
        validate(currency, period, &brackets)?;
        Ok(Self {
            currency,
            period,
            brackets,
        })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn period(&self) -> PayPeriod {
        self.period
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// The open-ended top band.
    pub fn top_bracket(&self) -> &TaxBracket {
        // Non-empty by construction.
        &self.brackets[self.brackets.len() - 1]
    }
}

fn validate(
    currency: Currency,
    period: PayPeriod,
    brackets: &[TaxBracket],
) -> Result<(), ScheduleError> {
    let Some(last) = brackets.last() else {
        return Err(ScheduleError::Empty { currency, period });
    };
    if !last.is_unbounded() {
        return Err(ScheduleError::NoUnboundedBracket { currency, period });
    }

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(ScheduleError::RateOutOfRange {
                currency,
                period,
                index,
                rate: bracket.rate,
            });
        }
        if bracket.deduction < Decimal::ZERO {
            return Err(ScheduleError::NegativeDeduction {
                currency,
                period,
                index,
                deduction: bracket.deduction,
            });
        }
        if bracket.max.is_some_and(|max| max <= bracket.min) {
            return Err(ScheduleError::EmptyRange {
                currency,
                period,
                index,
            });
        }
    }

    for (index, pair) in brackets.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let index = index + 1;

        let Some(previous_max) = previous.max else {
            return Err(ScheduleError::UnboundedNotLast {
                currency,
                period,
                index: index - 1,
            });
        };
        if current.min < previous.min {
            return Err(ScheduleError::Unsorted {
                currency,
                period,
                index,
                min: current.min,
            });
        }
        if current.min != previous_max {
            return Err(ScheduleError::Gap {
                currency,
                period,
                index,
                min: current.min,
                previous_max,
            });
        }
        if current.rate < previous.rate {
            return Err(ScheduleError::DecreasingRate {
                currency,
                period,
                index,
                rate: current.rate,
                previous: previous.rate,
            });
        }
        if current.deduction < previous.deduction {
            return Err(ScheduleError::DecreasingDeduction {
                currency,
                period,
                index,
                deduction: current.deduction,
                previous: previous.deduction,
            });
        }

        let below = previous_max * previous.rate - previous.deduction;
        let above = previous_max * current.rate - current.deduction;
        let jump = (above - below).abs();
        if jump > CONTINUITY_TOLERANCE {
            return Err(ScheduleError::Discontinuous {
                currency,
                period,
                index,
                boundary: previous_max,
                jump,
            });
        }
    }

    Ok(())
}

/// Every bracket table the engine can use, keyed by currency and period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    tables: BTreeMap<(Currency, PayPeriod), BracketTable>,
}

impl TaxSchedule {
    /// Assembles a schedule from validated tables.
    ///
    /// # Errors
    ///
    /// * [`ScheduleError::DuplicateTable`] if two tables share a currency
    ///   and period.
    /// * [`ScheduleError::MissingTable`] if any currency/period pair has no
    ///   table.
    pub fn new(tables: Vec<BracketTable>) -> Result<Self, ScheduleError> {
        let mut by_key = BTreeMap::new();
        for table in tables {
            let key = (table.currency, table.period);
            if by_key.insert(key, table).is_some() {
                return Err(ScheduleError::DuplicateTable {
                    currency: key.0,
                    period: key.1,
                });
            }
        }

        for &currency in Currency::all() {
            for &period in PayPeriod::all() {
                if !by_key.contains_key(&(currency, period)) {
                    return Err(ScheduleError::MissingTable { currency, period });
                }
            }
        }

        debug!(tables = by_key.len(), "tax schedule validated");
        Ok(Self { tables: by_key })
    }

    /// The 2025 ZIMRA PAYE tables for USD and ZWG earnings.
    ///
    /// # Errors
    ///
    /// Fails only if the compiled-in constants break an invariant.
    pub fn zimra_2025() -> Result<Self, ScheduleError> {
        zimra::tables().and_then(Self::new)
    }

    /// Process-wide copy of [`TaxSchedule::zimra_2025`], validated on first
    /// use.
    pub fn builtin() -> Result<&'static TaxSchedule, ScheduleError> {
        static BUILTIN: OnceLock<Result<TaxSchedule, ScheduleError>> = OnceLock::new();
        BUILTIN
            .get_or_init(TaxSchedule::zimra_2025)
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn table(
        &self,
        currency: Currency,
        period: PayPeriod,
    ) -> Option<&BracketTable> {
        self.tables.get(&(currency, period))
    }

    /// Tables ordered by currency, then period.
    pub fn tables(&self) -> impl Iterator<Item = &BracketTable> {
        self.tables.values()
    }
}
