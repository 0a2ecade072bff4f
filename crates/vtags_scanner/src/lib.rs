//! Single-pass declaration tag extraction for Verilog source text.
//!
//! Converts a raw character stream into a sequence of classified declaration
//! names, emitted one at a time into a [`TagSink`]. The scanner is a
//! hand-written single pass with one character of pushback: comments and
//! string-literal bodies are elided before any classification happens,
//! keyword recognition is gated to statement start, and kind-specific
//! sub-grammars skip width specifiers, parameter lists, and initializers.
//! No syntax tree is built and malformed input is never a hard failure:
//! a truncated file simply yields the tags found before the truncation.
//!
//! # Architecture
//!
//! - **Reader** ([`reader`]): Wraps a [`CharSource`] with one-character
//!   pushback, comment/string elision, and end-of-input signalling.
//! - **Keywords** ([`keyword`]): Exact-match classification of identifier
//!   text into declaration kinds.
//! - **Scanner** ([`scanner`]): The statement driver, declaration
//!   dispatcher, and name-list scanner.
//! - **Tags** ([`tag`]): The emitted [`Tag`] record and the [`TagSink`]
//!   trait scans report through.

#![warn(missing_docs)]

pub mod keyword;
pub mod reader;
pub mod scanner;
pub mod tag;

pub use keyword::lookup_keyword;
pub use reader::{CharSource, EndOfInput, Reader, ScanResult, StrSource};
pub use scanner::{is_identifier_char, Scanner};
pub use tag::{Tag, TagKind, TagSink};

use vtags_source::FileId;

/// Scans Verilog source text, emitting one tag per declared name.
///
/// Tags arrive in the sink in source left-to-right order within each
/// declaration list, each stamped with `file` and a 1-based line number.
/// This is the convenience entry point for in-memory text; hosts with their
/// own character stream can implement [`CharSource`] and drive a
/// [`Scanner`] directly.
pub fn scan(source: &str, file: FileId, sink: &mut dyn TagSink) {
    Scanner::new(StrSource::new(source), file, sink).run();
}
