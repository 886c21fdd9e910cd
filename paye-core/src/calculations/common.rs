//! Arithmetic helpers shared by the PAYE calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents, with exact halves rounded away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.7049)), dec!(2.70));
/// assert_eq!(round_half_up(dec!(23.845)), dec!(23.85));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// `part` as a percentage of `whole`, or zero when `whole` is zero.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::common::percentage_of;
///
/// assert_eq!(percentage_of(dec!(92.70), dec!(500)), dec!(18.54));
/// assert_eq!(percentage_of(dec!(10), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn percentage_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}
