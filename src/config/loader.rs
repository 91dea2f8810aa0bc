//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{BonusTrackError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the store, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
///
/// # Errors
/// * `InvalidJson` - If config.json is malformed
/// * `ConfigError` - If a value is out of range
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    if config.notification_capacity == 0 {
        return Err(BonusTrackError::ConfigError(
            "notification_capacity must be at least 1".to_string(),
        ));
    }
    Ok(config)
}
