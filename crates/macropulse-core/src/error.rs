use thiserror::Error;

/// Validation and contract errors exposed by `macropulse-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown indicator '{value}', expected one of exchange_rate, policy_rate, cpi")]
    InvalidIndicator { value: String },

    #[error("currency must be a 3-letter uppercase ISO code: '{value}'")]
    InvalidCurrency { value: String },

    #[error("date must be a calendar date in YYYY-MM-DD form: '{value}'")]
    InvalidDate { value: String },
    #[error("month {month} is out of range 1..=12")]
    MonthOutOfRange { month: u8 },
    #[error("quarter {quarter} is out of range 1..=4")]
    QuarterOutOfRange { quarter: u8 },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("band set must contain at least one band")]
    EmptyBandSet,
    #[error("band '{name}' must have low bound strictly below high bound")]
    BandEmptyInterval { name: String },
    #[error("band '{name}' must start exactly where the previous band ends")]
    BandNotContiguous { name: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
