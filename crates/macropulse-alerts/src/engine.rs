//! Threshold crossing detection.
//!
//! A crossing fires when a user threshold lies between the previous and
//! current observation of a series: traversal, not membership. A value
//! sitting continuously on one side of a threshold across many checks
//! never re-fires; only actually passing over it does.

use std::sync::Arc;

use serde::Serialize;

use macropulse_core::{numeric, CurrencyCode, Indicator};

use crate::rule::AlertRule;
use crate::store::{AlertState, AlertStateStore};

/// Detected traversal of one rule's threshold between two consecutive
/// observations. Ephemeral: handed to the notification collaborator,
/// never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossingEvent {
    pub indicator: Indicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<CurrencyCode>,
    pub threshold: f64,
    pub previous: f64,
    pub current: f64,
}

/// Per-series crossing detector over a pluggable baseline store.
///
/// A series is *unseeded* until its first check records a baseline; the
/// first observation for a series therefore never raises an alert. Checks
/// for the same series must not run concurrently: the read-then-overwrite
/// sequence is not atomic, and overlapping callers can duplicate or lose
/// an alert. Multi-caller deployments serialize per series key.
pub struct AlertEngine {
    store: Arc<dyn AlertStateStore>,
}

impl AlertEngine {
    pub fn new(store: Arc<dyn AlertStateStore>) -> Self {
        Self { store }
    }

    /// Evaluate every applicable rule against the newly observed value and
    /// advance the baseline.
    ///
    /// Degradation rules:
    /// - a non-finite observation is nothing to evaluate: no events, the
    ///   stored baseline stays untouched;
    /// - a failed baseline read is treated as unseeded, suppressing a
    ///   possibly-duplicate alert;
    /// - a rule with a non-finite threshold is skipped, the others still
    ///   evaluate;
    /// - a failed baseline write is logged and swallowed; events already
    ///   computed are still returned.
    pub async fn check(
        &self,
        indicator: Indicator,
        scope: Option<CurrencyCode>,
        current: f64,
        rules: &[AlertRule],
    ) -> Vec<CrossingEvent> {
        let Some(current) = numeric::finite(current) else {
            return Vec::new();
        };

        let previous = match self.store.get(indicator, scope.as_ref()).await {
            Ok(state) => state.map(|state| state.last_observed),
            Err(error) => {
                tracing::warn!(
                    %indicator,
                    error = %error,
                    "baseline read failed, treating series as unseeded"
                );
                None
            }
        };

        let events = match previous {
            None => Vec::new(),
            Some(previous) => rules
                .iter()
                .filter(|rule| rule.enabled && rule.matches(indicator, scope.as_ref()))
                .filter_map(|rule| {
                    let threshold = numeric::finite(rule.threshold)?;
                    let low = previous.min(current);
                    let high = previous.max(current);

                    (low <= threshold && threshold <= high).then(|| CrossingEvent {
                        indicator,
                        scope: scope.clone(),
                        threshold,
                        previous,
                        current,
                    })
                })
                .collect(),
        };

        let baseline = AlertState::new(indicator, scope, current);
        if let Err(error) = self.store.set(baseline).await {
            tracing::warn!(%indicator, error = %error, "baseline write failed");
        }

        events
    }
}
