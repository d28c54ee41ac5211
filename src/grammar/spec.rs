//! GrammarSpec and its builder.

use regex::Regex;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::rules::{CommentRule, StringRule};
use super::GrammarError;

/// Immutable description of one language variant.
///
/// Vocabulary matching is case-insensitive: words are stored lowercased and
/// callers look them up with a lowercased key. The four vocabularies are
/// intended to be disjoint, but this is not enforced; the classifier's
/// priority order (keyword → type → literal → built-in) decides overlaps.
///
/// Construction goes through [`GrammarSpec::builder`]; a spec is never
/// mutated afterwards, so it is freely shareable across threads.
#[derive(Debug, Clone)]
pub struct GrammarSpec {
    keywords: FxHashSet<SmolStr>,
    types: FxHashSet<SmolStr>,
    literals: FxHashSet<SmolStr>,
    builtins: FxHashSet<SmolStr>,
    comments: Vec<CommentRule>,
    numbers: Vec<Regex>,
    strings: Vec<StringRule>,
}

impl GrammarSpec {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    /// Membership tests take the already-lowercased word.
    pub fn is_keyword(&self, lower: &str) -> bool {
        self.keywords.contains(lower)
    }

    pub fn is_type(&self, lower: &str) -> bool {
        self.types.contains(lower)
    }

    pub fn is_literal(&self, lower: &str) -> bool {
        self.literals.contains(lower)
    }

    pub fn is_builtin(&self, lower: &str) -> bool {
        self.builtins.contains(lower)
    }

    pub fn comment_rules(&self) -> &[CommentRule] {
        &self.comments
    }

    pub fn number_rules(&self) -> &[Regex] {
        &self.numbers
    }

    pub fn string_rules(&self) -> &[StringRule] {
        &self.strings
    }
}

/// Builder for [`GrammarSpec`].
///
/// Vocabulary words are lowercased on insertion. Rule lists keep their
/// declaration order; the classifier tries them in that order.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    keywords: FxHashSet<SmolStr>,
    types: FxHashSet<SmolStr>,
    literals: FxHashSet<SmolStr>,
    builtins: FxHashSet<SmolStr>,
    comments: Vec<CommentRule>,
    number_patterns: Vec<String>,
    strings: Vec<StringRule>,
}

fn lowercased<I, S>(words: I) -> FxHashSet<SmolStr>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| SmolStr::new(w.as_ref().to_ascii_lowercase()))
        .collect()
}

impl GrammarBuilder {
    pub fn keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = lowercased(words);
        self
    }

    pub fn types<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.types = lowercased(words);
        self
    }

    pub fn literals<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.literals = lowercased(words);
        self
    }

    pub fn builtins<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.builtins = lowercased(words);
        self
    }

    pub fn comment(mut self, rule: CommentRule) -> Self {
        self.comments.push(rule);
        self
    }

    /// Append one number rule; alternatives are evaluated in declaration
    /// order with longest-match-wins.
    pub fn number(mut self, pattern: impl Into<String>) -> Self {
        self.number_patterns.push(pattern.into());
        self
    }

    pub fn string(mut self, rule: StringRule) -> Self {
        self.strings.push(rule);
        self
    }

    /// Validate and compile the spec.
    ///
    /// Empty vocabularies are fine (corn-lite ships without built-ins), but
    /// a grammar without number or string rules is malformed, as is an
    /// unparsable number pattern or an empty comment delimiter.
    pub fn build(self) -> Result<GrammarSpec, GrammarError> {
        if self.number_patterns.is_empty() {
            return Err(GrammarError::EmptyRuleSet { kind: "number" });
        }
        if self.strings.is_empty() {
            return Err(GrammarError::EmptyRuleSet { kind: "string" });
        }
        if self.comments.iter().any(|c| c.start.is_empty()) {
            return Err(GrammarError::EmptyDelimiter);
        }

        let numbers = self
            .number_patterns
            .into_iter()
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| GrammarError::Pattern { pattern, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GrammarSpec {
            keywords: self.keywords,
            types: self.types,
            literals: self.literals,
            builtins: self.builtins,
            comments: self.comments,
            numbers,
            strings: self.strings,
        })
    }
}
