use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Discrete aggregation period for bucketed series.
///
/// Ordering is chronological within a single granularity; an aggregation
/// never mixes months and quarters in one result, so cross-variant order
/// is irrelevant in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKey {
    Month { year: i32, month: u8 },
    Quarter { year: i32, quarter: u8 },
}

impl PeriodKey {
    pub fn month(year: i32, month: u8) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange { month });
        }
        Ok(Self::Month { year, month })
    }

    pub fn quarter(year: i32, quarter: u8) -> Result<Self, ValidationError> {
        if !(1..=4).contains(&quarter) {
            return Err(ValidationError::QuarterOutOfRange { quarter });
        }
        Ok(Self::Quarter { year, quarter })
    }

    pub const fn year(self) -> i32 {
        match self {
            Self::Month { year, .. } | Self::Quarter { year, .. } => year,
        }
    }
}

impl Display for PeriodKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Quarter { year, quarter } => write!(f, "{year:04}Q{quarter}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_month_range() {
        assert!(PeriodKey::month(2024, 12).is_ok());
        let err = PeriodKey::month(2024, 13).expect_err("must fail");
        assert!(matches!(err, ValidationError::MonthOutOfRange { month: 13 }));
    }

    #[test]
    fn validates_quarter_range() {
        assert!(PeriodKey::quarter(2024, 4).is_ok());
        let err = PeriodKey::quarter(2024, 0).expect_err("must fail");
        assert!(matches!(err, ValidationError::QuarterOutOfRange { quarter: 0 }));
    }

    #[test]
    fn orders_chronologically_within_granularity() {
        let january = PeriodKey::month(2024, 1).expect("valid");
        let december_prior = PeriodKey::month(2023, 12).expect("valid");
        assert!(december_prior < january);

        let q1 = PeriodKey::quarter(2024, 1).expect("valid");
        let q4 = PeriodKey::quarter(2024, 4).expect("valid");
        assert!(q1 < q4);
    }

    #[test]
    fn formats_display_labels() {
        assert_eq!(PeriodKey::month(2024, 3).expect("valid").to_string(), "2024-03");
        assert_eq!(
            PeriodKey::quarter(2024, 1).expect("valid").to_string(),
            "2024Q1"
        );
    }
}
