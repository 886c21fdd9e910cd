//! Bracket selection.
//!
//! A band matches an amount when `min < amount <= max`, or `min < amount`
//! for the open-ended top band. Because the lower bound is exclusive, an
//! amount sitting exactly on a boundary belongs to the band below it, and
//! an amount of zero (or less) matches nothing and owes no tax.

use rust_decimal::Decimal;
use tracing::trace;

use crate::TaxBracket;
use crate::calculations::common::max;
use crate::schedule::BracketTable;

/// Returns the band `amount` falls in, if any.
pub fn resolve(
    table: &BracketTable,
    amount: Decimal,
) -> Option<&TaxBracket> {
    let bracket = table.brackets().iter().find(|b| b.contains(amount));
    trace!(
        currency = %table.currency(),
        period = %table.period(),
        %amount,
        rate = ?bracket.map(|b| b.rate),
        "resolved bracket"
    );
    bracket
}

/// Tax owed on `amount` inside `bracket`, never negative.
pub fn bracket_tax(
    bracket: &TaxBracket,
    amount: Decimal,
) -> Decimal {
    max(amount * bracket.rate - bracket.deduction, Decimal::ZERO)
}

/// Tax owed on `amount` under `table`; zero when no band matches.
pub fn tax_for(
    table: &BracketTable,
    amount: Decimal,
) -> Decimal {
    resolve(table, amount)
        .map(|bracket| bracket_tax(bracket, amount))
        .unwrap_or(Decimal::ZERO)
}
