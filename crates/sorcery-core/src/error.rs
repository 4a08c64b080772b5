//! Error types shared across the reward engine.
//!
//! Scoring itself never fails; these errors only arise at the edges, where
//! the engine is configured or where it calls back into the host.

use thiserror::Error;

/// Top-level error type for the reward engine.
#[derive(Debug, Error)]
pub enum SorceryError {
    /// Configuration values that cannot be used.
    #[error("validation error: {0}")]
    Validation(String),

    /// The host refused or failed an XP grant or overlay notice.
    #[error("collaborator error: {0}")]
    Collaborator(String),

    /// Internal state could not be accessed (e.g. a poisoned lock).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
