//! The scanning engine: statement driver, declaration dispatcher, and
//! name-list scanner.
//!
//! One [`Scanner`] performs one scan. All mutable state (the reader with
//! its pushback slot, the identifier buffer, and the statement flag) lives
//! on the scanner, so independent scans are reentrant and can run
//! concurrently over different inputs. There is no grammar here: declaration lists are
//! recognized with ad-hoc lookahead and bracket balancing, and anything the
//! scanner does not understand is skipped without losing statement context.

use crate::keyword::lookup_keyword;
use crate::reader::{CharSource, Reader, ScanResult};
use crate::tag::{Tag, TagKind, TagSink};
use vtags_source::FileId;

/// Returns `true` for characters that can form part of an identifier.
///
/// The backtick qualifies so that compiler directives (`` `define ``) read
/// as ordinary identifiers.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '`'
}

/// A single-pass scan over one character source.
pub struct Scanner<'s, S> {
    reader: Reader<S>,
    ident: String,
    file: FileId,
    sink: &'s mut dyn TagSink,
}

impl<'s, S: CharSource> Scanner<'s, S> {
    /// Creates a scanner that reads from `source` and emits into `sink`,
    /// stamping every tag with `file`.
    pub fn new(source: S, file: FileId, sink: &'s mut dyn TagSink) -> Self {
        Self {
            reader: Reader::new(source),
            ident: String::new(),
            file,
            sink,
        }
    }

    /// Runs the scan to end of input.
    pub fn run(mut self) {
        // End of input is the normal termination signal: it propagates as
        // `Err` from whatever depth the reader hit it at, and every tag
        // emitted before it stays emitted.
        let _ = self.statement_loop();
    }

    /// Statement driver.
    ///
    /// Keyword classification is only attempted at statement start; `;` and
    /// newline reset to statement start, other non-blank characters leave
    /// the driver mid-statement. This keeps a declaration keyword reused
    /// later in a statement (say, inside an expression) from being taken
    /// for a declaration.
    fn statement_loop(&mut self) -> ScanResult<()> {
        let mut new_statement = true;
        loop {
            let c = self.reader.next()?;
            match c {
                ';' | '\n' => new_statement = true,
                ' ' | '\t' => {}
                _ => {
                    if new_statement && self.read_identifier(c)? {
                        self.find_tag()?;
                    }
                    new_statement = false;
                }
            }
        }
    }

    /// Accumulates a run of identifier characters into the buffer.
    ///
    /// `first` is the character already in hand. If it does not qualify,
    /// the buffer is cleared, nothing is consumed, and `false` is returned.
    /// Otherwise the terminating character is pushed back.
    fn read_identifier(&mut self, first: char) -> ScanResult<bool> {
        self.ident.clear();
        let mut c = first;
        if is_identifier_char(c) {
            while is_identifier_char(c) {
                self.ident.push(c);
                c = self.reader.next()?;
            }
            self.reader.push_back(c);
        }
        Ok(!self.ident.is_empty())
    }

    /// Consumes whitespace starting from `c`, returning the first
    /// non-whitespace character.
    fn skip_white(&mut self, mut c: char) -> ScanResult<char> {
        while c.is_whitespace() {
            c = self.reader.next()?;
        }
        Ok(c)
    }

    /// Skips past the close of a bracket pair whose open has already been
    /// consumed, returning the character after the close.
    ///
    /// Nested pairs adjust the depth; one routine serves `()`, `[]`, `{}`.
    fn skip_past_match(&mut self, open: char, close: char) -> ScanResult<char> {
        let mut depth = 1u32;
        while depth > 0 {
            let c = self.reader.next()?;
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
            }
        }
        self.reader.next()
    }

    fn emit(&mut self, kind: TagKind, line: u32) {
        self.sink.tag(Tag {
            name: self.ident.clone(),
            kind,
            file: self.file,
            line,
        });
    }

    /// Declaration dispatcher.
    ///
    /// Classifies the identifier sitting in the buffer and consumes its
    /// kind-specific trailing syntax before handing off to the name list.
    fn find_tag(&mut self) -> ScanResult<()> {
        let kind = lookup_keyword(&self.ident);
        if kind == TagKind::Constant && self.ident.starts_with('`') {
            // Compiler directives are line-scoped, not statement-scoped:
            // tag the directive name, then discard the rest of the line.
            let c = self.reader.next()?;
            let c = self.skip_white(c)?;
            let line = self.reader.line();
            if self.read_identifier(c)? {
                self.emit(kind, line);
            }
            loop {
                let c = self.reader.next()?;
                if c == '\n' {
                    self.reader.push_back(c);
                    break;
                }
            }
        } else if kind != TagKind::Undefined {
            // Many keywords can carry width specifiers before the first name:
            //   reg [3:0] net_name;
            //   inout [(`DBUSWIDTH-1):0] databus;
            // and modules a parameter list:  module top #(...) ...
            let c = self.reader.next()?;
            let mut c = self.skip_white(c)?;
            if c == '(' {
                c = self.skip_past_match('(', ')')?;
            }
            c = self.skip_white(c)?;
            if c == '[' {
                c = self.skip_past_match('[', ']')?;
            }
            c = self.skip_white(c)?;
            if c == '#' {
                c = self.reader.next()?;
                if c == '(' {
                    c = self.skip_past_match('(', ')')?;
                }
            }
            c = self.skip_white(c)?;
            if is_identifier_char(c) {
                self.tag_name_list(kind, c)?;
            }
        }
        Ok(())
    }

    /// Name-list scanner.
    ///
    /// Scans comma-separated declared names with optional array dimensions
    /// and initializers, emitting one tag per name as soon as it is read.
    /// On stop the terminating character is pushed back so the driver
    /// observes it.
    fn tag_name_list(&mut self, kind: TagKind, first: char) -> ScanResult<()> {
        let mut c = first;
        while is_identifier_char(c) {
            let line = self.reader.line();
            self.read_identifier(c)?;
            self.emit(kind, line);
            c = self.reader.next()?;
            c = self.skip_white(c)?;
            if c == '[' {
                c = self.skip_past_match('[', ']')?;
            }
            c = self.skip_white(c)?;
            if c == '=' {
                c = self.reader.next()?;
                c = self.skip_white(c)?;
                if c == '{' {
                    c = self.skip_past_match('{', '}')?;
                } else {
                    while c != ',' && c != ';' {
                        c = self.reader.next()?;
                    }
                }
            }
            if c == ',' {
                c = self.reader.next()?;
                c = self.skip_white(c)?;
            } else {
                break;
            }
        }
        self.reader.push_back(c);
        Ok(())
    }
}
