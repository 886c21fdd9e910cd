//! Input validation shared by the engine and the session.
//!
//! Raw user input arrives as text. Amounts accept a comma as thousands
//! separator (`"1,234.56"`); anything that does not parse as a decimal is
//! rejected rather than coerced.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::warn;

use crate::models::{Currency, PayPeriod};

/// Largest accepted gross income or item amount. Keeps every sum and
/// product in the engine well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// A rejected input. Rejections never modify session state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Gross income text is empty or not a number.
    #[error("gross income '{input}' is not a valid amount")]
    InvalidGrossIncome { input: String },

    /// Gross income parsed but is zero or negative.
    #[error("gross income must be greater than zero, got {0}")]
    NonPositiveGrossIncome(Decimal),

    #[error("gross income {0} exceeds the maximum of 1,000,000,000,000")]
    GrossIncomeTooLarge(Decimal),

    #[error("item name must not be empty")]
    EmptyItemName,

    /// Item amount text is empty or not a number.
    #[error("item amount '{input}' is not a valid amount")]
    InvalidItemAmount { input: String },

    #[error("item amount must be greater than zero, got {0}")]
    NonPositiveItemAmount(Decimal),

    #[error("item amount {0} exceeds the maximum of 1,000,000,000,000")]
    ItemAmountTooLarge(Decimal),

    #[error("unsupported currency '{0}' (expected USD or ZWG)")]
    UnsupportedCurrency(String),

    #[error(
        "unsupported pay period '{0}' (expected daily, weekly, fortnightly, monthly or annual)"
    )]
    UnsupportedPeriod(String),

    /// The schedule in use has no table for this combination.
    #[error("no bracket table for {currency} {period}")]
    MissingSchedule {
        currency: Currency,
        period: PayPeriod,
    },

    #[error("unknown common item '{0}'")]
    UnknownCommonItem(String),
}

impl ValidationError {
    /// Name of the input field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidGrossIncome { .. }
            | Self::NonPositiveGrossIncome(_)
            | Self::GrossIncomeTooLarge(_) => "gross_income",
            Self::EmptyItemName | Self::UnknownCommonItem(_) => "item_name",
            Self::InvalidItemAmount { .. }
            | Self::NonPositiveItemAmount(_)
            | Self::ItemAmountTooLarge(_) => "item_amount",
            Self::UnsupportedCurrency(_) => "currency",
            Self::UnsupportedPeriod(_) => "period",
            Self::MissingSchedule { .. } => "schedule",
        }
    }
}

fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses an amount typed by a user. Empty input is `None`, as is anything
/// that is not a decimal number.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

/// Parses and checks a gross income entry.
pub fn gross_income(input: &str) -> Result<Decimal, ValidationError> {
    let Some(amount) = parse_amount(input) else {
        warn!(input, "rejected gross income");
        return Err(ValidationError::InvalidGrossIncome {
            input: input.to_string(),
        });
    };
    positive_gross_income(amount)
}

pub fn positive_gross_income(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        warn!(%amount, "rejected non-positive gross income");
        return Err(ValidationError::NonPositiveGrossIncome(amount));
    }
    if amount > MAX_AMOUNT {
        warn!(%amount, "rejected oversized gross income");
        return Err(ValidationError::GrossIncomeTooLarge(amount));
    }
    Ok(amount)
}

/// Parses and checks a benefit or deduction amount.
pub fn item_amount(input: &str) -> Result<Decimal, ValidationError> {
    let Some(amount) = parse_amount(input) else {
        warn!(input, "rejected item amount");
        return Err(ValidationError::InvalidItemAmount {
            input: input.to_string(),
        });
    };
    positive_item_amount(amount)
}

pub fn positive_item_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        warn!(%amount, "rejected non-positive item amount");
        return Err(ValidationError::NonPositiveItemAmount(amount));
    }
    if amount > MAX_AMOUNT {
        warn!(%amount, "rejected oversized item amount");
        return Err(ValidationError::ItemAmountTooLarge(amount));
    }
    Ok(amount)
}

/// Trims an item name and rejects it if nothing is left.
pub fn item_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyItemName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_amount("1,234,567.89"), Some(dec!(1234567.89)));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  500.00  "), Some(dec!(500.00)));
    }

    #[test]
    fn parse_amount_empty_is_none() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn parse_amount_rejects_text_and_non_finite_spellings() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("Infinity"), None);
    }

    // =========================================================================
    // gross_income tests
    // =========================================================================

    #[test]
    fn gross_income_accepts_positive_amount() {
        assert_eq!(gross_income("2,500"), Ok(dec!(2500)));
    }

    #[test]
    fn gross_income_rejects_negative_amount() {
        assert_eq!(
            gross_income("-5"),
            Err(ValidationError::NonPositiveGrossIncome(dec!(-5)))
        );
    }

    #[test]
    fn gross_income_rejects_zero() {
        assert_eq!(
            gross_income("0"),
            Err(ValidationError::NonPositiveGrossIncome(dec!(0)))
        );
    }

    #[test]
    fn gross_income_accepts_the_maximum() {
        assert_eq!(gross_income("1,000,000,000,000"), Ok(MAX_AMOUNT));
    }

    #[test]
    fn gross_income_rejects_amount_above_maximum() {
        let err = gross_income("70000000000000000000000000000").unwrap_err();

        assert_eq!(
            err,
            ValidationError::GrossIncomeTooLarge(dec!(70000000000000000000000000000))
        );
        assert_eq!(err.field(), "gross_income");
    }

    #[test]
    fn gross_income_rejects_empty_input() {
        assert_eq!(
            gross_income(""),
            Err(ValidationError::InvalidGrossIncome {
                input: String::new()
            })
        );
    }

    // =========================================================================
    // item tests
    // =========================================================================

    #[test]
    fn item_amount_rejects_text() {
        let err = item_amount("abc").unwrap_err();

        assert_eq!(
            err,
            ValidationError::InvalidItemAmount {
                input: "abc".to_string()
            }
        );
        assert_eq!(err.field(), "item_amount");
    }

    #[test]
    fn item_amount_rejects_amount_above_maximum() {
        let err = item_amount("1000000000000.01").unwrap_err();

        assert_eq!(err, ValidationError::ItemAmountTooLarge(dec!(1000000000000.01)));
        assert_eq!(err.field(), "item_amount");
    }

    #[test]
    fn item_name_rejects_whitespace_only() {
        assert_eq!(item_name(" \t"), Err(ValidationError::EmptyItemName));
    }

    #[test]
    fn field_names_identify_inputs() {
        assert_eq!(
            ValidationError::NonPositiveGrossIncome(dec!(0)).field(),
            "gross_income"
        );
        assert_eq!(ValidationError::EmptyItemName.field(), "item_name");
        assert_eq!(
            ValidationError::UnsupportedCurrency("EUR".into()).field(),
            "currency"
        );
        assert_eq!(
            ValidationError::UnsupportedPeriod("hourly".into()).field(),
            "period"
        );
    }
}
