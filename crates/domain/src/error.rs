//! Common error types used across the workspace.
//!
//! The core performs no IO, so the only expected failure is a
//! [`ValidationError`]. [`InternalError`] covers the impossible-in-practice
//! cases (a lock poisoned by a panic) so they still surface as typed errors.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("internal error")]
    Internal(#[from] InternalError),
}

/// Malformed or out-of-contract input. Always detected before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field `{field}` must be a boolean")]
    NotBoolean { field: &'static str },

    #[error("field `{field}` must be an integer")]
    NotInteger { field: &'static str },

    #[error("field `intensity` must be between 0 and 255, got {value}")]
    IntensityOutOfRange { value: i128 },

    #[error("field `heartbeat` is missing or falsy")]
    MissingHeartbeat,
}

/// Unexpected failure inside the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
    #[error("{resource} lock poisoned")]
    LockPoisoned { resource: &'static str },
}
