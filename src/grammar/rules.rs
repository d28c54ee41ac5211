//! Comment and string rule types.

use smol_str::SmolStr;

/// Where a comment ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentEnd {
    /// The comment runs to the end of the line; the newline itself is not
    /// part of the comment token.
    ToLineEnd,
    /// The comment runs to a closing delimiter (non-nesting). An
    /// unterminated comment extends to the end of the input.
    Delimited(SmolStr),
}

/// One comment form: a literal start delimiter plus an end mode.
///
/// Rules are tried in declaration order at each cursor position; the first
/// rule whose start delimiter matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRule {
    pub(crate) start: SmolStr,
    pub(crate) end: CommentEnd,
    pub(crate) doc_markup: bool,
}

impl CommentRule {
    /// A line comment: `start` to end of line.
    pub fn line(start: &str) -> Self {
        Self {
            start: SmolStr::new(start),
            end: CommentEnd::ToLineEnd,
            doc_markup: false,
        }
    }

    /// A delimited block comment, e.g. `/* ... */`.
    pub fn block(start: &str, end: &str) -> Self {
        Self {
            start: SmolStr::new(start),
            end: CommentEnd::Delimited(SmolStr::new(end)),
            doc_markup: false,
        }
    }

    /// Enable doc markup inside this comment: `@word` doctags,
    /// `<...>` type spans and `[...]` keyword spans (delimiters stay
    /// comment text; only the interior gets the nested scope).
    pub fn with_doc_markup(mut self) -> Self {
        self.doc_markup = true;
        self
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn has_doc_markup(&self) -> bool {
        self.doc_markup
    }
}

/// One quoted-string form, identified by its delimiter character.
///
/// A backslash escapes the following character (so an escaped delimiter
/// does not terminate the literal). An unterminated string extends to the
/// end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRule {
    pub(crate) delimiter: char,
}

impl StringRule {
    pub fn quoted(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}
