use serde::{Deserialize, Serialize};

use crate::{CurrencyCode, Indicator, ObservationDate, ValidationError};

/// One timestamped scalar reading for an indicator.
///
/// Immutable once recorded. `scope` carries the counter currency for
/// exchange-rate readings and is `None` for the single-valued indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: ObservationDate,
    pub indicator: Indicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<CurrencyCode>,
    pub value: f64,
}

impl Observation {
    pub fn new(
        date: ObservationDate,
        indicator: Indicator,
        scope: Option<CurrencyCode>,
        value: f64,
    ) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "value" });
        }

        Ok(Self {
            date,
            indicator,
            scope,
            value,
        })
    }
}
