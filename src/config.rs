use crate::handler::{ErrorHandler, OperationError};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Failure-reporting configuration consumed by a cache engine when an
/// operation fails. `V` is the engine's cached value type.
pub struct FallbackConfig<V> {
    /// Fallback message shown when no handler overrides it.
    pub generic_error: String,
    /// Optional hook producing a custom message per failure occurrence.
    pub error_handler: Option<Arc<dyn ErrorHandler<V>>>,
}

impl<V> FallbackConfig<V> {
    pub const DEFAULT_GENERIC_ERROR: &'static str = "An error has occurred";

    /// Merge a partial record into this one. Fields absent from the patch
    /// keep their current values; no validation is applied to the ones
    /// present.
    pub fn merge(&mut self, patch: ConfigPatch<V>) {
        if let Some(message) = patch.generic_error {
            debug!("Generic error message set to '{}'", message);
            self.generic_error = message;
        }
        if let Some(handler) = patch.error_handler {
            match handler {
                Some(_) => debug!("Custom error handler installed"),
                None => debug!("Custom error handler cleared"),
            }
            self.error_handler = handler;
        }
    }

    /// Resolve the user-visible message for one failure occurrence.
    ///
    /// A handler returning a non-empty string wins; anything else falls
    /// back to the current generic message.
    pub fn resolve_message(&self, id: &str, error: &OperationError, value: Option<&V>) -> String {
        if let Some(handler) = &self.error_handler {
            if let Some(custom) = handler.resolve(id, error, value) {
                if !custom.is_empty() {
                    debug!("Custom message resolved for failed operation '{}'", id);
                    return custom;
                }
            }
        }
        self.generic_error.clone()
    }
}

impl<V> Default for FallbackConfig<V> {
    fn default() -> Self {
        Self {
            generic_error: Self::DEFAULT_GENERIC_ERROR.to_string(),
            error_handler: None,
        }
    }
}

impl<V> Clone for FallbackConfig<V> {
    fn clone(&self) -> Self {
        Self {
            generic_error: self.generic_error.clone(),
            error_handler: self.error_handler.clone(),
        }
    }
}

impl<V> fmt::Debug for FallbackConfig<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackConfig")
            .field("generic_error", &self.generic_error)
            .field(
                "error_handler",
                if self.error_handler.is_some() {
                    &"<handler>"
                } else {
                    &"<none>"
                },
            )
            .finish()
    }
}

/// Partial configuration record, merged field-by-field into the current one.
///
/// The handler slot is tri-state: leaving it untouched keeps the current
/// handler, `error_handler` installs one, `clear_error_handler` removes it.
pub struct ConfigPatch<V> {
    generic_error: Option<String>,
    error_handler: Option<Option<Arc<dyn ErrorHandler<V>>>>,
}

impl<V> ConfigPatch<V> {
    pub fn new() -> Self {
        Self {
            generic_error: None,
            error_handler: None,
        }
    }

    /// Replace the fallback message. Accepted as-is, including an empty
    /// string.
    pub fn generic_error(mut self, message: impl Into<String>) -> Self {
        self.generic_error = Some(message.into());
        self
    }

    /// Install a custom error handler, replacing any current one.
    pub fn error_handler(mut self, handler: impl ErrorHandler<V> + 'static) -> Self {
        self.error_handler = Some(Some(Arc::new(handler)));
        self
    }

    /// Remove the current handler; subsequent failures fall back to the
    /// generic message.
    pub fn clear_error_handler(mut self) -> Self {
        self.error_handler = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.generic_error.is_none() && self.error_handler.is_none()
    }
}

impl<V> Default for ConfigPatch<V> {
    fn default() -> Self {
        Self::new()
    }
}
