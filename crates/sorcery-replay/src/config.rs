//! Configuration read from the environment.

use sorcery_rewards::config::RewardConfig;

use crate::error::AppError;

/// Minimum command length override.
pub const MIN_COMMAND_LEN_VAR: &str = "SORCERY_MIN_COMMAND_LEN";
/// Minimum edit distance override.
pub const MIN_EDIT_DISTANCE_VAR: &str = "SORCERY_MIN_EDIT_DISTANCE";
/// Store capacity override.
pub const STORE_CAPACITY_VAR: &str = "SORCERY_STORE_CAPACITY";

/// Reads the reward configuration from process environment variables.
///
/// # Errors
///
/// Returns `AppError::Config` if a variable is set but not a valid number,
/// or if the resulting configuration is invalid.
pub fn from_env() -> Result<RewardConfig, AppError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Builds the reward configuration from `lookup`, falling back to defaults
/// for missing keys.
///
/// # Errors
///
/// Returns `AppError::Config` if a value is not a valid number or the
/// resulting configuration is invalid.
pub fn from_lookup<F>(lookup: F) -> Result<RewardConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = RewardConfig::default();
    let read = |key: &str, default: usize| -> Result<usize, AppError> {
        lookup(key).map_or(Ok(default), |raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{key} must be a non-negative integer: {e}")))
        })
    };

    let config = RewardConfig {
        min_command_len: read(MIN_COMMAND_LEN_VAR, defaults.min_command_len)?,
        min_edit_distance: read(MIN_EDIT_DISTANCE_VAR, defaults.min_edit_distance)?,
        store_capacity: read(STORE_CAPACITY_VAR, defaults.store_capacity)?,
    };
    config
        .validate()
        .map_err(|e| AppError::Config(e.to_string()))?;
    Ok(config)
}
