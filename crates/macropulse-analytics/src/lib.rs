//! # Macropulse Analytics
//!
//! Display-side transforms over raw economic observations.
//!
//! Three cooperating, side-effect-free components share the core data
//! model and feed the rendering layer with plain data:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bucket`] | Period aggregation (daily→monthly, monthly→quarterly) and period-over-period changes |
//! | [`axis`] | Padded, rounded chart axis scales with tick labels |
//! | [`band`] | Named classification bands with per-call widening |
//!
//! None of the components call each other; each takes values in and hands
//! plain results out.

pub mod axis;
pub mod band;
pub mod bucket;

pub use axis::{build_axis, format_tick, AxisScale};
pub use band::{Band, BandSet, Classification};
pub use bucket::{
    aggregate, monthly_averages, quarterly_averages, with_changes, PeriodChange, ScopedAverages,
};
