//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `vtags.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A configured kind name does not name a tag kind.
    #[error("unknown tag kind '{0}'")]
    UnknownKind(String),
}
