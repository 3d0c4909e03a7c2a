//! Core contracts for macropulse.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Tolerant numeric parsing for the supplier boundary
//! - Structured error types shared across the workspace

pub mod domain;
pub mod error;
pub mod numeric;

pub use domain::{CurrencyCode, Indicator, Observation, ObservationDate, PeriodKey};
pub use error::{CoreError, ValidationError};
