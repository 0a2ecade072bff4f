//! Source file representation and Verilog extension recognition.

use crate::file_id::FileId;
use std::path::{Path, PathBuf};

/// A source file loaded into the scanning session.
pub struct SourceFile {
    /// The unique identifier for this file within the [`SourceDb`](crate::SourceDb).
    pub id: FileId,
    /// The filesystem path of this file (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
}

impl SourceFile {
    /// Creates a new `SourceFile`.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        Self { id, path, content }
    }
}

/// Returns `true` if the path carries the recognized Verilog extension (`.v`).
///
/// The check is exact: `.sv` and `.vhd` files belong to other languages and
/// are not picked up when walking directories.
pub fn is_verilog_path(path: &Path) -> bool {
    matches!(path.extension().and_then(|ext| ext.to_str()), Some("v"))
}
