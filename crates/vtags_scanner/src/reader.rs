//! Character source adaptation: pushback, comment/string elision, and
//! end-of-input signalling.
//!
//! The [`Reader`] sits between the host's raw character stream and the
//! scanning logic. Everything downstream of it sees a clean stream: `//`
//! and `/* */` comments are discarded, string-literal bodies collapse to a
//! single placeholder character, and end of input arrives as an explicit
//! [`EndOfInput`] value that propagates with `?` through every layer of
//! the scan.

/// The placeholder character substituted for an elided string literal.
const STRING_PLACEHOLDER: char = '@';

/// Signal that the character source is exhausted.
///
/// This is the normal termination of a scan, not an error: it unwinds to
/// the statement driver, and every tag emitted before it remains valid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EndOfInput;

/// Result type for scanning operations that may hit end of input.
pub type ScanResult<T> = Result<T, EndOfInput>;

/// A raw character stream with a single slot of raw pushback.
///
/// This is the interface the scanner consumes from its host. The raw
/// pushback slot is used only to disambiguate `/` from the start of a
/// comment; it is distinct from the [`Reader`]'s own cooked pushback slot.
pub trait CharSource {
    /// Returns the next raw character, or `None` at end of input.
    fn raw_next(&mut self) -> Option<char>;

    /// Stores one character to be returned by the next [`raw_next`](Self::raw_next).
    ///
    /// # Panics
    ///
    /// Panics if a pushed-back character is already pending.
    fn raw_push_back(&mut self, c: char);
}

/// A [`CharSource`] over an in-memory string.
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
    pending: Option<char>,
}

impl<'a> StrSource<'a> {
    /// Creates a source over the given text.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            pending: None,
        }
    }
}

impl CharSource for StrSource<'_> {
    fn raw_next(&mut self) -> Option<char> {
        self.pending.take().or_else(|| self.chars.next())
    }

    fn raw_push_back(&mut self, c: char) {
        assert!(self.pending.is_none(), "raw pushback slot already occupied");
        self.pending = Some(c);
    }
}

/// The cooked character stream the scanner reads from.
///
/// Adds one character of cooked pushback on top of a [`CharSource`], elides
/// comments and string bodies, and counts consumed newlines so emitted tags
/// can carry line numbers.
pub struct Reader<S> {
    source: S,
    pending: Option<char>,
    line: u32,
}

impl<S: CharSource> Reader<S> {
    /// Creates a reader over the given raw source, positioned at line 1.
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: None,
            line: 1,
        }
    }

    /// The 1-based line number of the most recently read character.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Reads one raw character, counting newlines.
    fn raw(&mut self) -> Option<char> {
        let c = self.source.raw_next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn raw_or_end(&mut self) -> ScanResult<char> {
        self.raw().ok_or(EndOfInput)
    }

    /// Returns the next logical character.
    ///
    /// Transformations applied, in order:
    /// - `//` discards through end of line (exclusive), yielding the `\n`;
    /// - `/*` discards through the matching `*/`, yielding the character
    ///   after it (which is not itself re-examined);
    /// - a lone `/` pushes the peeked character back raw and yields `/`;
    /// - `"` discards through the closing quote (or end of input) and
    ///   yields a single `@` placeholder;
    /// - end of input, wherever resolved, is `Err(EndOfInput)`.
    ///
    /// A character delivered from the cooked pushback slot goes through
    /// these transformations again.
    pub fn next(&mut self) -> ScanResult<char> {
        let mut c = match self.pending.take() {
            Some(c) => Some(c),
            None => self.raw(),
        };
        if c == Some('/') {
            let c2 = self.raw_or_end()?;
            match c2 {
                '/' => loop {
                    match self.raw() {
                        None => {
                            c = None;
                            break;
                        }
                        Some('\n') => {
                            c = Some('\n');
                            break;
                        }
                        Some(_) => {}
                    }
                },
                '*' => c = Some(self.skip_block_comment()?),
                _ => {
                    // Not a comment after all; un-read the peeked character.
                    if c2 == '\n' {
                        self.line -= 1;
                    }
                    self.source.raw_push_back(c2);
                }
            }
        } else if c == Some('"') {
            loop {
                match self.raw() {
                    None | Some('"') => break,
                    Some(_) => {}
                }
            }
            c = Some(STRING_PLACEHOLDER);
        }
        c.ok_or(EndOfInput)
    }

    /// Discards through the matching `*/`, returning the character after it.
    fn skip_block_comment(&mut self) -> ScanResult<char> {
        let mut prev = '\0';
        loop {
            let c = self.raw_or_end()?;
            if prev == '*' && c == '/' {
                return self.raw_or_end();
            }
            prev = c;
        }
    }

    /// Stores exactly one character for the next [`next`](Self::next) call.
    ///
    /// # Panics
    ///
    /// Panics if a pushed-back character is already pending. Holding two is
    /// a contract violation in the caller.
    pub fn push_back(&mut self, c: char) {
        assert!(self.pending.is_none(), "pushback slot already occupied");
        self.pending = Some(c);
    }
}
