use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use macropulse_core::{CurrencyCode, Indicator};

use crate::StoreError;

/// User-authored threshold rule, persisted outside this crate and
/// read-only here.
///
/// The threshold is carried as-is; an unparseable or non-finite threshold
/// is skipped at evaluation time rather than rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub indicator: Indicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<CurrencyCode>,
    pub threshold: f64,
    pub enabled: bool,
}

impl AlertRule {
    pub fn new(
        indicator: Indicator,
        scope: Option<CurrencyCode>,
        threshold: f64,
        enabled: bool,
    ) -> Self {
        Self {
            indicator,
            scope,
            threshold,
            enabled,
        }
    }

    /// Whether this rule applies to the given series.
    pub fn matches(&self, indicator: Indicator, scope: Option<&CurrencyCode>) -> bool {
        self.indicator == indicator && self.scope.as_ref() == scope
    }
}

/// Read-only seam to wherever rules are persisted.
pub trait AlertRuleStore: Send + Sync {
    /// Rules applying to one (indicator, scope) series.
    fn rules_for<'a>(
        &'a self,
        indicator: Indicator,
        scope: Option<&'a CurrencyCode>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<AlertRule>, StoreError>> + Send + 'a>>;

    /// Every persisted rule.
    fn all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<AlertRule>, StoreError>> + Send + 'a>>;
}

/// Rule snapshot held in memory, for tests and embedded consumers.
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleStore {
    rules: Vec<AlertRule>,
}

impl MemoryRuleStore {
    pub fn new(rules: Vec<AlertRule>) -> Self {
        Self { rules }
    }
}

impl AlertRuleStore for MemoryRuleStore {
    fn rules_for<'a>(
        &'a self,
        indicator: Indicator,
        scope: Option<&'a CurrencyCode>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<AlertRule>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            Ok(self
                .rules
                .iter()
                .filter(|rule| rule.matches(indicator, scope))
                .cloned()
                .collect())
        })
    }

    fn all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<AlertRule>, StoreError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.rules.clone()) })
    }
}
