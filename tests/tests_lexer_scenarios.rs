//! Lexer Tests - End-to-End Scenarios
//!
//! Exact token sequences for representative inputs against the shipped
//! `corn` grammar: keyword/number classification, line comments,
//! unterminated strings, separator-heavy numeric literals, and doc-markup
//! hash comments.

use corn_syntax::languages::corn;
use corn_syntax::{GrammarSpec, Scope, tokenize};
use once_cell::sync::Lazy;

static CORN: Lazy<GrammarSpec> = Lazy::new(corn::grammar);

fn classified(input: &str) -> Vec<(Scope, &str)> {
    tokenize(&CORN, input)
        .into_iter()
        .map(|t| (t.scope, t.text))
        .collect()
}

#[test]
fn test_keywords_and_number_in_statement() {
    assert_eq!(
        classified("if (x) { return 1; }"),
        vec![
            (Scope::Keyword, "if"),
            (Scope::Text, " ("),
            (Scope::Text, "x"),
            (Scope::Text, ") { "),
            (Scope::Keyword, "return"),
            (Scope::Text, " "),
            (Scope::Number, "1"),
            (Scope::Text, "; }"),
        ]
    );
}

#[test]
fn test_line_comment_then_declaration() {
    assert_eq!(
        classified("// comment\nint x;"),
        vec![
            (Scope::Comment, "// comment"),
            (Scope::Text, "\n"),
            (Scope::Type, "int"),
            (Scope::Text, " "),
            (Scope::Text, "x"),
            (Scope::Text, ";"),
        ]
    );
}

#[test]
fn test_unterminated_string_spans_remainder() {
    assert_eq!(
        classified("\"unterminated"),
        vec![(Scope::String, "\"unterminated")]
    );
}

#[test]
fn test_hex_literal_with_separator_and_bigint_suffix() {
    assert_eq!(classified("0x1F_2An"), vec![(Scope::Number, "0x1F_2An")]);
}

#[test]
fn test_doc_markup_hash_comment() {
    assert_eq!(
        classified("# @param <int> [value] description\n"),
        vec![
            (Scope::Comment, "# "),
            (Scope::Doctag, "@param"),
            (Scope::Comment, " <"),
            (Scope::Type, "int"),
            (Scope::Comment, "> ["),
            (Scope::Keyword, "value"),
            (Scope::Comment, "] description"),
            (Scope::Text, "\n"),
        ]
    );
}

#[test]
fn test_block_comment_does_not_nest() {
    assert_eq!(
        classified("/* a /* b */ c */"),
        vec![(Scope::Comment, "/* a /* b */"), (Scope::Text, " c */"),]
    );
}

#[test]
fn test_string_wins_over_comment_start() {
    assert_eq!(
        classified("'//not a comment'"),
        vec![(Scope::String, "'//not a comment'")]
    );
}

#[test]
fn test_mixed_program_fragment() {
    let input = "module demo;\nint8 n = 0b1010n; // tail\nprint('ok');";
    assert_eq!(
        classified(input),
        vec![
            (Scope::Keyword, "module"),
            (Scope::Text, " "),
            (Scope::Text, "demo"),
            (Scope::Text, ";\n"),
            (Scope::Type, "int8"),
            (Scope::Text, " "),
            (Scope::Text, "n"),
            (Scope::Text, " = "),
            (Scope::Number, "0b1010n"),
            (Scope::Text, "; "),
            (Scope::Comment, "// tail"),
            (Scope::Text, "\n"),
            (Scope::BuiltIn, "print"),
            (Scope::Text, "("),
            (Scope::String, "'ok'"),
            (Scope::Text, ");"),
        ]
    );
}
