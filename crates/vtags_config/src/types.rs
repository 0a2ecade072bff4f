//! Configuration types deserialized from `vtags.toml`.

use serde::Deserialize;
use vtags_scanner::TagKind;

/// The top-level configuration parsed from `vtags.toml`.
///
/// Every section is optional; an empty file (or no file at all) yields the
/// defaults: every kind recorded, classic ctags output written to `tags`.
#[derive(Debug, Default, Deserialize)]
pub struct VtagsConfig {
    /// Output settings (tag file path, format).
    #[serde(default)]
    pub output: OutputConfig,
    /// Scan settings (which kinds to record).
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Output settings.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Path of the tag file to write (`-` means standard output).
    #[serde(default = "default_output_file")]
    pub file: String,
    /// Format of the tag file.
    #[serde(default)]
    pub format: TagFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            format: TagFormat::default(),
        }
    }
}

fn default_output_file() -> String {
    "tags".to_string()
}

/// Tag file format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagFormat {
    /// Classic sorted ctags format.
    #[default]
    Ctags,
    /// One JSON object per line.
    Json,
}

/// Scan settings.
#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    /// Singular kind names to record. Defaults to every kind.
    #[serde(default = "default_kind_names")]
    pub kinds: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            kinds: default_kind_names(),
        }
    }
}

fn default_kind_names() -> Vec<String> {
    TagKind::ALL.iter().map(|k| k.name().to_string()).collect()
}

impl ScanConfig {
    /// Resolves the configured kind names into [`TagKind`] values.
    ///
    /// The loader validates names up front, so this only fails for configs
    /// constructed without going through it.
    pub fn enabled_kinds(&self) -> Result<Vec<TagKind>, crate::ConfigError> {
        self.kinds
            .iter()
            .map(|name| {
                TagKind::from_name(name).ok_or_else(|| crate::ConfigError::UnknownKind(name.clone()))
            })
            .collect()
    }
}
