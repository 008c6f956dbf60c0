use crate::config::{ConfigPatch, FallbackConfig};
use crate::handler::OperationError;
use crate::report::FailureReport;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle to the process-wide failure-reporting record.
///
/// Created once at startup and handed to everything that reads or overrides
/// the configuration. All clones share one record; writes apply in
/// invocation order, last write wins.
pub struct ConfigStore<V> {
    inner: Arc<RwLock<FallbackConfig<V>>>,
}

impl<V> ConfigStore<V> {
    pub fn new() -> Self {
        Self::with_config(FallbackConfig::default())
    }

    /// Start from an explicit record instead of the defaults.
    pub fn with_config(config: FallbackConfig<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Current record, as a snapshot. The installed handler itself stays
    /// shared between snapshots.
    pub fn snapshot(&self) -> FallbackConfig<V> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Merge a partial record into the shared one.
    pub fn apply(&self, patch: ConfigPatch<V>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(patch);
    }

    /// Resolve the user-visible message for one failure occurrence.
    ///
    /// The record is read fresh on every call, so overrides applied between
    /// failures take effect for the next occurrence. The handler runs
    /// against a snapshot, outside the lock, so it may itself apply patches.
    pub fn resolve_message(&self, id: &str, error: &OperationError, value: Option<&V>) -> String {
        self.snapshot().resolve_message(id, error, value)
    }

    /// Resolve and package one failure occurrence for the engine's
    /// notification stream.
    pub fn report(&self, id: &str, error: &OperationError, value: Option<&V>) -> FailureReport {
        FailureReport::new(id, self.resolve_message(id, error, value), error)
    }
}

impl<V> Clone for ConfigStore<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for ConfigStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ConfigStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.snapshot())
            .finish()
    }
}
