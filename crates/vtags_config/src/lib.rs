//! `vtags.toml` configuration loading.
//!
//! Provides the configuration types deserialized from `vtags.toml`
//! ([`VtagsConfig`]), the loader with validation ([`load_config`],
//! [`load_config_from_str`]), and the [`ConfigError`] type.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{OutputConfig, ScanConfig, TagFormat, VtagsConfig};
