//! # Domain Models
//!
//! Canonical domain types for macropulse economic series.
//!
//! All models are strongly typed with validation at construction time:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Indicator`] | Tracked economic indicator (exchange rate, policy rate, CPI) |
//! | [`CurrencyCode`] | Validated 3-letter ISO currency code |
//! | [`ObservationDate`] | Calendar date in `YYYY-MM-DD` form |
//! | [`PeriodKey`] | Month or quarter aggregation period |
//! | [`Observation`] | One dated scalar reading for an indicator |

mod currency;
mod date;
mod indicator;
mod observation;
mod period;

pub use currency::CurrencyCode;
pub use date::ObservationDate;
pub use indicator::Indicator;
pub use observation::Observation;
pub use period::PeriodKey;
