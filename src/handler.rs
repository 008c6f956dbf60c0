use std::error::Error;

/// Error value carried by a failed cache operation.
///
/// Kept as a plain error object so handlers can `downcast_ref` to the
/// engine's concrete error type when they need more than `Display`.
pub type OperationError = dyn Error + Send + Sync + 'static;

/// Hook that resolves a custom user-visible message for a failed cache
/// operation. Invoked by the cache engine once per failure occurrence.
///
/// Implementations must not panic; a panic unwinds straight into the
/// engine's failure path.
pub trait ErrorHandler<V>: Send + Sync {
    /// Return the message to show for this occurrence, or `None` to defer
    /// to the configured generic message. An empty string defers as well.
    fn resolve(&self, id: &str, error: &OperationError, value: Option<&V>) -> Option<String>;
}

impl<V, F> ErrorHandler<V> for F
where
    F: Fn(&str, &OperationError, Option<&V>) -> Option<String> + Send + Sync,
{
    fn resolve(&self, id: &str, error: &OperationError, value: Option<&V>) -> Option<String> {
        self(id, error, value)
    }
}
