//! Grammar descriptions for the classifier.
//!
//! A [`GrammarSpec`] is the immutable configuration for one language
//! variant: case-insensitive keyword/type/literal/built-in vocabularies
//! plus ordered comment, number, and string rules. Specs are built through
//! [`GrammarBuilder`], which validates eagerly, since a malformed spec is a
//! programmer error, not a runtime condition.

mod error;
mod rules;
mod spec;

pub use error::GrammarError;
pub use rules::{CommentEnd, CommentRule, StringRule};
pub use spec::{GrammarBuilder, GrammarSpec};
