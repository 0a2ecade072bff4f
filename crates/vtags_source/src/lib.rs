//! Source file management for tag scanning sessions.
//!
//! This crate provides the [`SourceDb`] for loading and owning source files,
//! the [`FileId`] type that emitted tags use to refer back to their file,
//! and recognition of the Verilog file extension via [`is_verilog_path`].

#![warn(missing_docs)]

pub mod file_id;
pub mod source_db;
pub mod source_file;

pub use file_id::FileId;
pub use source_db::SourceDb;
pub use source_file::{is_verilog_path, SourceFile};
