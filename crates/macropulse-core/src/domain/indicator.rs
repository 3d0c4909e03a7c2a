use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Tracked economic indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Foreign exchange rate, scoped per counter currency.
    ExchangeRate,
    /// Central-bank policy interest rate.
    PolicyRate,
    /// Consumer price index, year-over-year percent change.
    Cpi,
}

impl Indicator {
    pub const ALL: [Self; 3] = [Self::ExchangeRate, Self::PolicyRate, Self::Cpi];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExchangeRate => "exchange_rate",
            Self::PolicyRate => "policy_rate",
            Self::Cpi => "cpi",
        }
    }

    /// Whether observations of this indicator carry a currency scope.
    pub const fn is_scoped(self) -> bool {
        matches!(self, Self::ExchangeRate)
    }
}

impl Display for Indicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Indicator {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exchange_rate" => Ok(Self::ExchangeRate),
            "policy_rate" => Ok(Self::PolicyRate),
            "cpi" => Ok(Self::Cpi),
            other => Err(ValidationError::InvalidIndicator {
                value: other.to_owned(),
            }),
        }
    }
}
