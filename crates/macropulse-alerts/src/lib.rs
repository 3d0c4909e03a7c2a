//! # Macropulse Alerts
//!
//! Crossing detection between consecutive observations of an economic
//! series, with a pluggable baseline store.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`rule`] | User threshold rules and the read-only rule store seam |
//! | [`store`] | Baseline state records and key-value store implementations |
//! | [`engine`] | The crossing detector itself |
//!
//! The engine is the sole mutator of baseline state; rules are read-only
//! input and crossing events are plain output for the notification layer.

pub mod engine;
pub mod rule;
pub mod store;

pub use engine::{AlertEngine, CrossingEvent};
pub use rule::{AlertRule, AlertRuleStore, MemoryRuleStore};
pub use store::{
    series_key, AlertState, AlertStateStore, JsonFileStateStore, MemoryStateStore, StoreError,
};
