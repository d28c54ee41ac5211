//! The full Corn dialect.

use crate::grammar::{CommentRule, GrammarSpec, StringRule};

/// Registry name of this variant.
pub const NAME: &str = "corn";

pub const CORN_KEYWORDS: &[&str] = &[
    "asm",
    "auto",
    "break",
    "case",
    "const",
    "continue",
    "default",
    "do",
    "else",
    "for",
    "goto",
    "if",
    "inline",
    "register",
    "return",
    "sizeof",
    "switch",
    "this",
    "typeof",
    "type",
    "union",
    "volatile",
    "while",
    // memory
    "alloc",
    "delete",
    "new",
    "purge",
    // encapsulation
    "external",
    "internal",
    "restrict",
    // reserved
    "private",
    "protected",
    "public",
    // module
    "import",
    "module",
];

pub const CORN_TYPES: &[&str] = &[
    "char",
    "string",
    "utf8",
    "utf16",
    "utf32",
    "float",
    "float16",
    "float32",
    "float64",
    "int",
    "uint",
    "int8",
    "uint8",
    "int16",
    "uint16",
    "int32",
    "uint32",
    "int64",
    "uint64",
    "void",
    "bool",
    "complex",
    "imaginary",
    // abstract
    "enum",
    "struct",
    "contract",
];

pub const CORN_LITERALS: &[&str] = &["true", "false", "null"];

pub const CORN_BUILTINS: &[&str] = &["std", "math", "print", "printn"];

/// Build the `corn` grammar.
///
/// The numeric rules follow the JavaScript numeric grammar: decimal with
/// mandatory exponent, decimal integer with optional fraction, `n`-suffixed
/// big integers, prefixed hex/binary/octal with `_` digit-group separators,
/// and legacy octal. The legacy-octal-to-decimal transition
/// (`0` + octal digits + an `8`/`9` digit) is kept verbatim.
pub fn grammar() -> GrammarSpec {
    let decimal_digits = "[0-9](_?[0-9])*";
    let frac = format!(r"\.({decimal_digits})");
    let decimal_integer = "0|[1-9](_?[0-9])*|0[0-7]*[89][0-9]*";

    GrammarSpec::builder()
        .keywords(CORN_KEYWORDS)
        .types(CORN_TYPES)
        .literals(CORN_LITERALS)
        .builtins(CORN_BUILTINS)
        .string(StringRule::quoted('\''))
        .string(StringRule::quoted('"'))
        .comment(CommentRule::line("//"))
        .comment(CommentRule::block("/*", "*/"))
        .comment(CommentRule::line("#").with_doc_markup())
        // decimal with mandatory exponent
        .number(format!(
            r"(\b({decimal_integer})(({frac})|\.)?|({frac}))[eE][+-]?({decimal_digits})\b"
        ))
        // decimal integer with optional fraction
        .number(format!(r"\b({decimal_integer})\b(({frac})\b|\.)?|({frac})\b"))
        // decimal big integer
        .number(r"\b(0|[1-9](_?[0-9])*)n\b")
        // prefixed integer literals
        .number(r"\b0[xX][0-9a-fA-F](_?[0-9a-fA-F])*n?\b")
        .number(r"\b0[bB][0-1](_?[0-1])*n?\b")
        .number(r"\b0[oO][0-7](_?[0-7])*n?\b")
        // legacy octal (no separators)
        .number(r"\b0[0-7]+n?\b")
        .build()
        .expect("corn grammar tables are well-formed")
}
