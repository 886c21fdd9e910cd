//! ZIMRA PAYE tables for 2025.
//!
//! The published tables start each band one cent (or one dollar, for the
//! annual tables) above the previous band's ceiling, e.g. "100.01 - 300".
//! Bands here start exactly at the previous ceiling instead; with the
//! exclusive lower bound the result is the same for every published figure
//! and amounts between the printed bounds still land in a band.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{BracketTable, ScheduleError};
use crate::models::{Currency, PayPeriod, TaxBracket};

type Row = (Decimal, Option<Decimal>, Decimal, Decimal);

fn table(
    currency: Currency,
    period: PayPeriod,
    rows: &[Row],
) -> Result<BracketTable, ScheduleError> {
    let brackets = rows
        .iter()
        .map(|&(min, max, rate, deduction)| TaxBracket::new(min, max, rate, deduction))
        .collect();
    BracketTable::new(currency, period, brackets)
}

pub(super) fn tables() -> Result<Vec<BracketTable>, ScheduleError> {
    [
        table(
            Currency::Usd,
            PayPeriod::Daily,
            &[
                (dec!(0), Some(dec!(3.29)), dec!(0), dec!(0)),
                (dec!(3.29), Some(dec!(9.86)), dec!(0.20), dec!(0.66)),
                (dec!(9.86), Some(dec!(32.88)), dec!(0.25), dec!(1.15)),
                (dec!(32.88), Some(dec!(65.75)), dec!(0.30), dec!(2.79)),
                (dec!(65.75), Some(dec!(98.63)), dec!(0.35), dec!(6.08)),
                (dec!(98.63), None, dec!(0.40), dec!(11.01)),
            ],
        ),
        table(
            Currency::Usd,
            PayPeriod::Weekly,
            &[
                (dec!(0), Some(dec!(23.08)), dec!(0), dec!(0)),
                (dec!(23.08), Some(dec!(69.23)), dec!(0.20), dec!(4.62)),
                (dec!(69.23), Some(dec!(230.77)), dec!(0.25), dec!(8.08)),
                (dec!(230.77), Some(dec!(461.54)), dec!(0.30), dec!(19.62)),
                (dec!(461.54), Some(dec!(692.31)), dec!(0.35), dec!(42.69)),
                (dec!(692.31), None, dec!(0.40), dec!(77.31)),
            ],
        ),
        table(
            Currency::Usd,
            PayPeriod::Fortnightly,
            &[
                (dec!(0), Some(dec!(46.15)), dec!(0), dec!(0)),
                (dec!(46.15), Some(dec!(138.46)), dec!(0.20), dec!(9.23)),
                (dec!(138.46), Some(dec!(461.54)), dec!(0.25), dec!(16.15)),
                (dec!(461.54), Some(dec!(923.08)), dec!(0.30), dec!(39.23)),
                (dec!(923.08), Some(dec!(1384.62)), dec!(0.35), dec!(85.38)),
                (dec!(1384.62), None, dec!(0.40), dec!(154.62)),
            ],
        ),
        table(
            Currency::Usd,
            PayPeriod::Monthly,
            &[
                (dec!(0), Some(dec!(100)), dec!(0), dec!(0)),
                (dec!(100), Some(dec!(300)), dec!(0.20), dec!(20)),
                (dec!(300), Some(dec!(1000)), dec!(0.25), dec!(35)),
                (dec!(1000), Some(dec!(2000)), dec!(0.30), dec!(85)),
                (dec!(2000), Some(dec!(3000)), dec!(0.35), dec!(185)),
                (dec!(3000), None, dec!(0.40), dec!(335)),
            ],
        ),
        table(
            Currency::Usd,
            PayPeriod::Annual,
            &[
                (dec!(0), Some(dec!(1200)), dec!(0), dec!(0)),
                (dec!(1200), Some(dec!(3600)), dec!(0.20), dec!(240)),
                (dec!(3600), Some(dec!(12000)), dec!(0.25), dec!(420)),
                (dec!(12000), Some(dec!(24000)), dec!(0.30), dec!(1020)),
                (dec!(24000), Some(dec!(36000)), dec!(0.35), dec!(2220)),
                (dec!(36000), None, dec!(0.40), dec!(4020)),
            ],
        ),
        table(
            Currency::Zwg,
            PayPeriod::Daily,
            &[
                (dec!(0), Some(dec!(92.05)), dec!(0), dec!(0)),
                (dec!(92.05), Some(dec!(276.16)), dec!(0.20), dec!(18.41)),
                (dec!(276.16), Some(dec!(920.55)), dec!(0.25), dec!(32.22)),
                (dec!(920.55), Some(dec!(1841.1)), dec!(0.30), dec!(78.25)),
                (dec!(1841.1), Some(dec!(2761.64)), dec!(0.35), dec!(170.3)),
                (dec!(2761.64), None, dec!(0.40), dec!(308.38)),
            ],
        ),
        table(
            Currency::Zwg,
            PayPeriod::Weekly,
            &[
                (dec!(0), Some(dec!(646.15)), dec!(0), dec!(0)),
                (dec!(646.15), Some(dec!(1938.46)), dec!(0.20), dec!(129.23)),
                (dec!(1938.46), Some(dec!(6461.54)), dec!(0.25), dec!(226.15)),
                (dec!(6461.54), Some(dec!(12923.08)), dec!(0.30), dec!(549.23)),
                (dec!(12923.08), Some(dec!(19384.62)), dec!(0.35), dec!(1195.38)),
                (dec!(19384.62), None, dec!(0.40), dec!(2164.62)),
            ],
        ),
        table(
            Currency::Zwg,
            PayPeriod::Fortnightly,
            &[
                (dec!(0), Some(dec!(1292.31)), dec!(0), dec!(0)),
                (dec!(1292.31), Some(dec!(3876.92)), dec!(0.20), dec!(258.46)),
                (dec!(3876.92), Some(dec!(12923.08)), dec!(0.25), dec!(452.31)),
                (dec!(12923.08), Some(dec!(25846.15)), dec!(0.30), dec!(1098.46)),
                (dec!(25846.15), Some(dec!(38769.23)), dec!(0.35), dec!(2390.77)),
                (dec!(38769.23), None, dec!(0.40), dec!(4329.23)),
            ],
        ),
        table(
            Currency::Zwg,
            PayPeriod::Monthly,
            &[
                (dec!(0), Some(dec!(2800)), dec!(0), dec!(0)),
                (dec!(2800), Some(dec!(8400)), dec!(0.20), dec!(560)),
                (dec!(8400), Some(dec!(28000)), dec!(0.25), dec!(980)),
                (dec!(28000), Some(dec!(56000)), dec!(0.30), dec!(2380)),
                (dec!(56000), Some(dec!(84000)), dec!(0.35), dec!(5180)),
                (dec!(84000), None, dec!(0.40), dec!(9380)),
            ],
        ),
        table(
            Currency::Zwg,
            PayPeriod::Annual,
            &[
                (dec!(0), Some(dec!(33600)), dec!(0), dec!(0)),
                (dec!(33600), Some(dec!(100800)), dec!(0.20), dec!(6720)),
                (dec!(100800), Some(dec!(336000)), dec!(0.25), dec!(11760)),
                (dec!(336000), Some(dec!(672000)), dec!(0.30), dec!(28560)),
                (dec!(672000), Some(dec!(1008000)), dec!(0.35), dec!(62160)),
                (dec!(1008000), None, dec!(0.40), dec!(112560)),
            ],
        ),
    ]
    .into_iter()
    .collect()
}
