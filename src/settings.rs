//! Loading the game configuration from disk.

use std::path::Path;
use strictly_hangman::{ConfigError, HangmanConfig};
use tracing::{debug, info, instrument};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "hangman.toml";

/// Loads and validates a configuration file.
///
/// A missing file yields [`HangmanConfig::default`]. Keys left out of the
/// file keep their default values.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_config(path: impl AsRef<Path>) -> Result<HangmanConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("Config file not found, using defaults");
        return Ok(HangmanConfig::default());
    }

    debug!("Loading config from file");
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

    let config: HangmanConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

    config.validate()?;
    info!(lives = config.lives(), "Config loaded successfully");
    Ok(config)
}

/// Applies command-line overrides and re-validates.
#[instrument(skip(config))]
pub fn apply_overrides(
    config: HangmanConfig,
    lives: Option<u32>,
) -> Result<HangmanConfig, ConfigError> {
    let config = match lives {
        Some(lives) => config.with_lives(lives),
        None => config,
    };
    config.validate()?;
    Ok(config)
}

/// Renders a configuration as TOML.
#[instrument(skip(config))]
pub fn to_toml(config: &HangmanConfig) -> Result<String, ConfigError> {
    toml::to_string(config)
        .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
}
