use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Currency a salary is paid in. Each currency has its own bracket schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    /// Foreign currency earnings, taxed on the USD schedule.
    #[serde(rename = "USD")]
    Usd,
    /// Zimbabwe Gold earnings.
    #[serde(rename = "ZWG")]
    Zwg,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Zwg]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Zwg => "ZWG",
        }
    }

    /// Symbol used when rendering amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Zwg => "ZWG ",
        }
    }

    /// Case-insensitive code lookup.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "ZWG" => Some(Self::Zwg),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnsupportedCurrency(s.to_string()))
    }
}

/// How often the salary is paid. Brackets are published per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    Daily,
    Weekly,
    Fortnightly,
    Monthly,
    Annual,
}

impl PayPeriod {
    pub fn all() -> &'static [PayPeriod] {
        &[
            PayPeriod::Daily,
            PayPeriod::Weekly,
            PayPeriod::Fortnightly,
            PayPeriod::Monthly,
            PayPeriod::Annual,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Fortnightly => "fortnightly",
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Fortnightly => "Fortnightly",
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }

    /// Case-insensitive code lookup.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "fortnightly" => Some(Self::Fortnightly),
            "monthly" => Some(Self::Monthly),
            "annual" => Some(Self::Annual),
            _ => None,
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnsupportedPeriod(s.to_string()))
    }
}
