use crate::handler::OperationError;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// One resolved failure occurrence, ready for an engine's notification
/// stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    pub occurrence_id: Uuid,
    pub operation_id: String,
    pub message: String,
    pub error: String,
    pub timestamp: u64,
}

impl FailureReport {
    pub fn new(
        operation_id: impl Into<String>,
        message: impl Into<String>,
        error: &OperationError,
    ) -> Self {
        Self {
            occurrence_id: Uuid::new_v4(),
            operation_id: operation_id.into(),
            message: message.into(),
            error: error.to_string(),
            timestamp: now_timestamp(),
        }
    }
}

/// Helper to get current timestamp in seconds since UNIX epoch
pub fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
