//! Syntax Sorcery replay — error types.

use sorcery_core::error::SorceryError;
use thiserror::Error;

/// Startup and runtime errors for the replay tool.
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration variable is present but unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A line of input is not a valid replay event.
    #[error("invalid input on line {line}: {source}")]
    Input {
        /// 1-based input line number.
        line: usize,
        /// The underlying parse failure.
        source: serde_json::Error,
    },

    /// An outcome could not be written.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The reward engine failed.
    #[error(transparent)]
    Domain(#[from] SorceryError),
}
