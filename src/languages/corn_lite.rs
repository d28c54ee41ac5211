//! The C-like Corn subset.

use crate::grammar::{CommentRule, GrammarSpec, StringRule};

/// Registry name of this variant.
pub const NAME: &str = "corn-lite";

pub const CORN_LITE_KEYWORDS: &[&str] = &[
    "asm",
    "auto",
    "break",
    "case",
    "continue",
    "default",
    "do",
    "else",
    "enum",
    "extern",
    "for",
    "goto",
    "if",
    "interface",
    "inline",
    "register",
    "restrict",
    "return",
    "sizeof",
    "struct",
    "switch",
    "this",
    "typeof",
    "type",
    "union",
    "volatile",
    "while",
];

pub const CORN_LITE_TYPES: &[&str] = &[
    "char",
    "float",
    "int",
    "long",
    "short",
    "signed",
    "unsigned",
    "void",
    // modifiers
    "const",
    "static",
    "complex",
    "bool",
    "imaginary",
];

pub const CORN_LITE_LITERALS: &[&str] = &["true", "false", "null"];

/// Build the `corn-lite` grammar.
///
/// A simplified subset of [`corn`](super::corn): C-like vocabulary, no
/// built-ins, plain hash comments, and a single catch-all numeric pattern
/// with loose boundary rules, kept as shipped rather than unified with
/// the canonical rule set.
pub fn grammar() -> GrammarSpec {
    GrammarSpec::builder()
        .keywords(CORN_LITE_KEYWORDS)
        .types(CORN_LITE_TYPES)
        .literals(CORN_LITE_LITERALS)
        .string(StringRule::quoted('\''))
        .string(StringRule::quoted('"'))
        .comment(CommentRule::line("//"))
        .comment(CommentRule::block("/*", "*/"))
        .comment(CommentRule::line("#"))
        .number(r"(-?)(\b0[xX][a-fA-F0-9]+|(\b\d+(\.\d*)?|\.\d+)([eE][-+]?\d+)?)")
        .build()
        .expect("corn-lite grammar tables are well-formed")
}
