//! Error types for grammar construction.

use thiserror::Error;

/// Errors raised while building a [`GrammarSpec`](super::GrammarSpec).
///
/// All of these are construction-time errors; tokenization itself is total
/// and has no failure path.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A number rule failed to compile.
    #[error("invalid number pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule list that must contain at least one entry was empty.
    #[error("{kind} rule list must not be empty")]
    EmptyRuleSet { kind: &'static str },

    /// A comment rule with an empty start delimiter.
    #[error("comment start delimiter must not be empty")]
    EmptyDelimiter,
}
