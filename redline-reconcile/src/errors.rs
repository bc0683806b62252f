//! Error types for reconciliation.

use thiserror::Error;

/// The persisted metadata blob exists but cannot be parsed.
///
/// Callers that merely want history treat this as "no history" via
/// [`crate::PersistedState::load_or_empty`]; the error type exists for
/// codec-side callers that need to distinguish corrupt from missing.
#[derive(Debug, Clone, Error)]
#[error("persisted analysis state unreadable: {message}")]
pub struct PersistedStateUnreadable {
    pub message: String,
}
