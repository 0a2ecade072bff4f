//! Tag records, declaration kinds, and the sink interface scans emit through.

use serde::{Deserialize, Serialize};
use vtags_source::FileId;

/// The declaration category of a tag.
///
/// [`Undefined`](TagKind::Undefined) is the classification of identifiers
/// that match no declaration keyword; it never appears on an emitted tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// `` `define ``, `parameter`, `specparam`.
    Constant,
    /// Named events.
    Event,
    /// Functions.
    Function,
    /// Modules.
    Module,
    /// Net data types (`wire`, `tri`, `supply0`, ...).
    Net,
    /// Ports (`input`, `output`, `inout`).
    Port,
    /// Register data types (`reg`, `integer`, `real`, `time`, ...).
    Register,
    /// Tasks.
    Task,
    /// Not a declaration keyword.
    Undefined,
}

impl TagKind {
    /// Every kind that can appear on an emitted tag, in kind-table order.
    pub const ALL: [TagKind; 8] = [
        TagKind::Constant,
        TagKind::Event,
        TagKind::Function,
        TagKind::Module,
        TagKind::Net,
        TagKind::Port,
        TagKind::Register,
        TagKind::Task,
    ];

    /// The one-letter code used in tag file output.
    pub fn letter(self) -> char {
        match self {
            TagKind::Constant => 'c',
            TagKind::Event => 'e',
            TagKind::Function => 'f',
            TagKind::Module => 'm',
            TagKind::Net => 'n',
            TagKind::Port => 'p',
            TagKind::Register => 'r',
            TagKind::Task => 't',
            TagKind::Undefined => '?',
        }
    }

    /// The singular kind name used in configuration and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Constant => "constant",
            TagKind::Event => "event",
            TagKind::Function => "function",
            TagKind::Module => "module",
            TagKind::Net => "net",
            TagKind::Port => "port",
            TagKind::Register => "register",
            TagKind::Task => "task",
            TagKind::Undefined => "undefined",
        }
    }

    /// A human-readable description of what the kind covers.
    pub fn description(self) -> &'static str {
        match self {
            TagKind::Constant => "constants (define, parameter, specparam)",
            TagKind::Event => "events",
            TagKind::Function => "functions",
            TagKind::Module => "modules",
            TagKind::Net => "net data types",
            TagKind::Port => "ports",
            TagKind::Register => "register data types",
            TagKind::Task => "tasks",
            TagKind::Undefined => "unclassified identifiers",
        }
    }

    /// Parses an emittable kind from its singular name.
    ///
    /// `"undefined"` is not selectable and returns `None`.
    pub fn from_name(name: &str) -> Option<TagKind> {
        TagKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// A discovered declaration: the sole observable output of a scan.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Tag {
    /// The declared name.
    pub name: String,
    /// The declaration category.
    pub kind: TagKind,
    /// The file the declaration was found in.
    pub file: FileId,
    /// The 1-based line number of the declared name.
    pub line: u32,
}

/// Receives tags as they are discovered, in source order.
///
/// The scanner keeps no history of what it has emitted: repeated
/// declarations of the same name each produce a separate tag.
pub trait TagSink {
    /// Called once per discovered declaration.
    fn tag(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn tag(&mut self, tag: Tag) {
        self.push(tag);
    }
}
