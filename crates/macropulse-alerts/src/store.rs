//! Alert baseline persistence.
//!
//! The engine keeps exactly one record per (indicator, scope) series: the
//! value seen at the previous check. The store seam is the only stateful
//! surface in the workspace; everything behind it is a plain key-value
//! contract so device-local storage, a file, or memory can back it.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use macropulse_core::{CurrencyCode, Indicator};

/// Baseline record for one (indicator, scope) series.
///
/// Created on first observation, overwritten on every subsequent check
/// whether or not an alert fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertState {
    pub indicator: Indicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<CurrencyCode>,
    pub last_observed: f64,
}

impl AlertState {
    pub fn new(indicator: Indicator, scope: Option<CurrencyCode>, last_observed: f64) -> Self {
        Self {
            indicator,
            scope,
            last_observed,
        }
    }

    /// Key the record is stored under: `exchange_rate:USD`, `cpi`, ...
    pub fn storage_key(&self) -> String {
        series_key(self.indicator, self.scope.as_ref())
    }
}

/// Storage key for an (indicator, scope) series.
pub fn series_key(indicator: Indicator, scope: Option<&CurrencyCode>) -> String {
    match scope {
        Some(currency) => format!("{indicator}:{currency}"),
        None => indicator.to_string(),
    }
}

/// Errors surfaced by state store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("state store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value seam for alert baselines.
///
/// `set` overwrites unconditionally; there is no compare-and-swap, so
/// callers must not run checks for the same series concurrently.
pub trait AlertStateStore: Send + Sync {
    fn get<'a>(
        &'a self,
        indicator: Indicator,
        scope: Option<&'a CurrencyCode>,
    ) -> Pin<Box<dyn Future<Output = Result<Option<AlertState>, StoreError>> + Send + 'a>>;

    fn set<'a>(
        &'a self,
        state: AlertState,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>>;
}

/// Thread-safe in-memory baseline store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    inner: Arc<tokio::sync::RwLock<HashMap<String, AlertState>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        let map = self.inner.read().await;
        map.len()
    }
}

impl AlertStateStore for MemoryStateStore {
    fn get<'a>(
        &'a self,
        indicator: Indicator,
        scope: Option<&'a CurrencyCode>,
    ) -> Pin<Box<dyn Future<Output = Result<Option<AlertState>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let map = self.inner.read().await;
            Ok(map.get(&series_key(indicator, scope)).cloned())
        })
    }

    fn set<'a>(
        &'a self,
        state: AlertState,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let mut map = self.inner.write().await;
            map.insert(state.storage_key(), state);
            Ok(())
        })
    }
}

/// Write-through baseline store backed by a single JSON file.
///
/// Mirrors the device-local key-value storage the product keeps baselines
/// in. The whole map is rewritten on every `set`; reads are served from
/// the in-memory copy loaded at open time.
#[derive(Debug, Clone)]
pub struct JsonFileStateStore {
    path: PathBuf,
    inner: Arc<tokio::sync::RwLock<HashMap<String, AlertState>>>,
}

impl JsonFileStateStore {
    /// Open a store at `path`, loading any existing snapshot.
    ///
    /// A missing file starts empty; a corrupt one is logged and discarded
    /// rather than propagated, losing baselines but never failing open.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let snapshot = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, AlertState>>(&bytes) {
                Ok(map) => map,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %error,
                        "discarding unreadable alert baseline snapshot"
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            inner: Arc::new(tokio::sync::RwLock::new(snapshot)),
        }
    }

    async fn persist(&self, map: &HashMap<String, AlertState>) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(map)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}

impl AlertStateStore for JsonFileStateStore {
    fn get<'a>(
        &'a self,
        indicator: Indicator,
        scope: Option<&'a CurrencyCode>,
    ) -> Pin<Box<dyn Future<Output = Result<Option<AlertState>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let map = self.inner.read().await;
            Ok(map.get(&series_key(indicator, scope)).cloned())
        })
    }

    fn set<'a>(
        &'a self,
        state: AlertState,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let mut map = self.inner.write().await;
            map.insert(state.storage_key(), state);
            self.persist(&map).await
        })
    }
}
