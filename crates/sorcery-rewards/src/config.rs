//! Tunable reward thresholds.

use serde::Deserialize;
use sorcery_core::error::SorceryError;

/// Commands shorter than this never earn XP.
pub const DEFAULT_MIN_COMMAND_LEN: usize = 3;

/// A command must differ from the previous one by at least this many edits.
pub const DEFAULT_MIN_EDIT_DISTANCE: usize = 4;

/// Maximum number of players whose last command is remembered.
pub const DEFAULT_STORE_CAPACITY: usize = 10_000;

/// Reward engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Minimum trimmed command length, in characters.
    pub min_command_len: usize,
    /// Minimum Levenshtein distance from the previous command.
    pub min_edit_distance: usize,
    /// Capacity of the per-player last-command store.
    pub store_capacity: usize,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            min_command_len: DEFAULT_MIN_COMMAND_LEN,
            min_edit_distance: DEFAULT_MIN_EDIT_DISTANCE,
            store_capacity: DEFAULT_STORE_CAPACITY,
        }
    }
}

impl RewardConfig {
    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns `SorceryError::Validation` if `min_command_len` or
    /// `store_capacity` is zero.
    pub fn validate(&self) -> Result<(), SorceryError> {
        if self.min_command_len == 0 {
            return Err(SorceryError::Validation(
                "min_command_len must be greater than zero".to_owned(),
            ));
        }
        if self.store_capacity == 0 {
            return Err(SorceryError::Validation(
                "store_capacity must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}
