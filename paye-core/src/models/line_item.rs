use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Session-scoped identifier for a [`LineItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Benefit,
    Deduction,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Benefit => "benefit",
            Self::Deduction => "deduction",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A benefit or deduction attached to a salary.
///
/// For a benefit, `taxable` adds the amount to taxable income. For a
/// deduction, `taxable` means tax-deductible: the amount is taken off
/// taxable income rather than only off net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub amount: Decimal,
    pub kind: ItemKind,
    pub taxable: bool,
}

impl LineItem {
    /// Builds a validated item. The name is trimmed; it must not be empty
    /// and the amount must be strictly positive.
    pub fn new(
        id: ItemId,
        name: &str,
        amount: Decimal,
        kind: ItemKind,
        taxable: bool,
    ) -> Result<Self, ValidationError> {
        let name = validation::item_name(name)?;
        let amount = validation::positive_item_amount(amount)?;

        Ok(Self {
            id,
            name,
            amount,
            kind,
            taxable,
        })
    }

    /// Re-checks the invariants `new` establishes, for items built by hand.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::item_name(&self.name)?;
        validation::positive_item_amount(self.amount)?;
        Ok(())
    }
}
