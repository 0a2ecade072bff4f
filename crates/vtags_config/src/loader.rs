//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::VtagsConfig;
use std::path::Path;
use vtags_scanner::TagKind;

/// Loads and validates a `vtags.toml` configuration from a directory.
///
/// Reads `<dir>/vtags.toml`, parses it, and validates the kind names.
pub fn load_config(dir: &Path) -> Result<VtagsConfig, ConfigError> {
    let config_path = dir.join("vtags.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `vtags.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<VtagsConfig, ConfigError> {
    let config: VtagsConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that every configured kind name resolves to a tag kind.
fn validate_config(config: &VtagsConfig) -> Result<(), ConfigError> {
    for name in &config.scan.kinds {
        if TagKind::from_name(name).is_none() {
            return Err(ConfigError::UnknownKind(name.clone()));
        }
    }
    Ok(())
}
