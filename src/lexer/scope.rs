//! Scope tags applied to classified tokens.

use std::fmt;

/// Classification tag for a token.
///
/// Names follow the scope vocabulary of the highlighting stylesheets the
/// tokens feed into ([`Scope::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Keyword,
    Type,
    Literal,
    BuiltIn,
    Comment,
    /// An `@word` annotation inside a doc-markup comment.
    Doctag,
    Number,
    String,
    /// Unclassified text, including whitespace and punctuation.
    Text,
}

impl Scope {
    /// Stylesheet class name for this scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Literal => "literal",
            Self::BuiltIn => "built_in",
            Self::Comment => "comment",
            Self::Doctag => "doctag",
            Self::Number => "number",
            Self::String => "string",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
