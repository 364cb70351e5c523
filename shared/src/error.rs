//! Wire error envelopes
//!
//! The backend speaks two error shapes: the `/v1` API returns a
//! structured `{"error": {"code", "message"}}` body, while the legacy
//! endpoints raise `{"detail": "..."}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured `/v1` API error
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Machine-readable code (e.g. `UNAUTHORIZED`, `VALIDATION_ERROR`,
    /// `EMPLOYEE_NOT_FOUND`, `NO_SHIFTS_FOR_DATE`)
    pub code: String,
    pub message: String,
}

/// `/v1` error envelope: `{"error": {"code", "message"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiError,
}

/// Legacy endpoint error envelope: `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRejection {
    pub detail: String,
}
