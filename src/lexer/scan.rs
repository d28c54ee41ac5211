//! The scanning engine.

use text_size::{TextRange, TextSize};
use tracing::trace;

use super::scope::Scope;
use crate::grammar::{CommentEnd, GrammarSpec};

/// A classified span of the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub scope: Scope,
    pub text: &'a str,
    pub range: TextRange,
}

/// Tokenize `text` against `spec`, consuming the entire input.
///
/// Single pass, left to right. At each position the match attempts run in
/// fixed priority order: string rules, comment rules, number rules, then a
/// generic word scan classified against the vocabularies. Characters that
/// match nothing coalesce into plain `text` runs.
pub fn tokenize<'a>(spec: &GrammarSpec, text: &'a str) -> Vec<Token<'a>> {
    let mut scanner = Scanner {
        spec,
        text,
        pos: 0,
        run_start: None,
        out: Vec::new(),
    };
    scanner.run();
    trace!(
        input_len = text.len(),
        tokens = scanner.out.len(),
        "tokenized input"
    );
    scanner.out
}

struct Scanner<'s, 'a> {
    spec: &'s GrammarSpec,
    text: &'a str,
    pos: usize,
    /// Start of the pending plain-text run, if one is open.
    run_start: Option<usize>,
    out: Vec<Token<'a>>,
}

impl<'a> Scanner<'_, 'a> {
    fn run(&mut self) {
        while self.pos < self.text.len() {
            if self.scan_string() || self.scan_comment() || self.scan_number() || self.scan_word()
            {
                continue;
            }
            // Plain character: open or extend the pending text run.
            if self.run_start.is_none() {
                self.run_start = Some(self.pos);
            }
            match self.rest().chars().next() {
                Some(c) => self.pos += c.len_utf8(),
                None => break,
            }
        }
        self.flush_run(self.text.len());
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Emit the pending plain-text run, if any, up to `upto`.
    fn flush_run(&mut self, upto: usize) {
        if let Some(start) = self.run_start.take() {
            if start < upto {
                self.push(Scope::Text, start, upto);
            }
        }
    }

    fn push(&mut self, scope: Scope, start: usize, end: usize) {
        self.out.push(Token {
            scope,
            text: &self.text[start..end],
            range: TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32)),
        });
    }

    /// Flush the pending run, push one token, and advance the cursor.
    fn emit(&mut self, scope: Scope, start: usize, end: usize) {
        self.flush_run(start);
        self.push(scope, start, end);
        self.pos = end;
    }

    /// Quoted literal: consume to the matching unescaped closing delimiter,
    /// or to the end of the input when unterminated.
    fn scan_string(&mut self) -> bool {
        let spec = self.spec;
        let rest = self.rest();
        for rule in spec.string_rules() {
            let delim = rule.delimiter();
            if !rest.starts_with(delim) {
                continue;
            }
            let start = self.pos;
            let mut end = self.text.len();
            let mut chars = rest.char_indices();
            chars.next(); // opening delimiter
            let mut escaped = false;
            for (i, c) in chars {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == delim {
                    end = start + i + c.len_utf8();
                    break;
                }
            }
            self.emit(Scope::String, start, end);
            return true;
        }
        false
    }

    fn scan_comment(&mut self) -> bool {
        let spec = self.spec;
        let rest = self.rest();
        for rule in spec.comment_rules() {
            if !rest.starts_with(rule.start.as_str()) {
                continue;
            }
            let start = self.pos;
            let end = match &rule.end {
                // Newline stays outside the comment token.
                CommentEnd::ToLineEnd => start + rest.find('\n').unwrap_or(rest.len()),
                CommentEnd::Delimited(close) => {
                    let body = &rest[rule.start.len()..];
                    match body.find(close.as_str()) {
                        Some(i) => start + rule.start.len() + i + close.len(),
                        // Unterminated: recoverable, extend to end of input.
                        None => self.text.len(),
                    }
                }
            };
            self.flush_run(start);
            if rule.doc_markup {
                self.emit_doc_comment(start, end);
            } else {
                self.push(Scope::Comment, start, end);
            }
            self.pos = end;
            return true;
        }
        false
    }

    /// Re-scan a doc-markup comment body for `@word` doctags, `<...>` type
    /// spans and `[...]` keyword spans. Delimiters stay comment text; only
    /// the span interior gets the nested scope. Unmatched openers and
    /// everything else remain scope `comment`.
    fn emit_doc_comment(&mut self, start: usize, end: usize) {
        let text = self.text;
        let bytes = text.as_bytes();
        let mut run = start;
        let mut i = start;
        while i < end {
            match bytes[i] {
                b'@' if i + 1 < end && is_word_byte(bytes[i + 1]) => {
                    let mut j = i + 1;
                    while j < end && is_word_byte(bytes[j]) {
                        j += 1;
                    }
                    self.push_comment_text(run, i);
                    self.push(Scope::Doctag, i, j);
                    run = j;
                    i = j;
                }
                open @ (b'<' | b'[') => {
                    let (close, scope) = if open == b'<' {
                        (b'>', Scope::Type)
                    } else {
                        (b']', Scope::Keyword)
                    };
                    match find_byte(bytes, i + 1, end, close) {
                        Some(k) if k > i + 1 => {
                            self.push_comment_text(run, i + 1);
                            self.push(scope, i + 1, k);
                            run = k;
                            i = k + 1;
                        }
                        _ => i += 1,
                    }
                }
                _ => i += 1,
            }
        }
        self.push_comment_text(run, end);
    }

    fn push_comment_text(&mut self, start: usize, end: usize) {
        if start < end {
            self.push(Scope::Comment, start, end);
        }
    }

    /// Try every number rule anchored at the cursor; longest match wins,
    /// ties break toward the earlier alternative.
    fn scan_number(&mut self) -> bool {
        let spec = self.spec;
        let rest = self.rest();
        // Number rules describe numeric literals: they can only begin at a
        // digit, a dot, or a sign.
        match rest.as_bytes().first() {
            Some(b) if b.is_ascii_digit() || *b == b'.' || *b == b'-' => {}
            _ => return false,
        }
        let mut best = 0;
        for re in spec.number_rules() {
            if let Some(m) = re.find(rest) {
                if m.start() == 0 && m.end() > best {
                    best = m.end();
                }
            }
        }
        if best == 0 {
            return false;
        }
        let start = self.pos;
        self.emit(Scope::Number, start, start + best);
        true
    }

    /// Maximal identifier, classified case-insensitively against the
    /// vocabularies in priority order. An unclassified word is emitted as
    /// its own `text` token, never merged into adjacent punctuation runs.
    fn scan_word(&mut self) -> bool {
        let spec = self.spec;
        let rest = self.rest();
        let bytes = rest.as_bytes();
        match bytes.first() {
            Some(&b) if b == b'_' || b.is_ascii_alphabetic() => {}
            _ => return false,
        }
        let mut len = 1;
        while len < bytes.len() && is_word_byte(bytes[len]) {
            len += 1;
        }
        let lower = rest[..len].to_ascii_lowercase();
        let scope = if spec.is_keyword(&lower) {
            Scope::Keyword
        } else if spec.is_type(&lower) {
            Scope::Type
        } else if spec.is_literal(&lower) {
            Scope::Literal
        } else if spec.is_builtin(&lower) {
            Scope::BuiltIn
        } else {
            Scope::Text
        };
        let start = self.pos;
        self.emit(scope, start, start + len);
        true
    }
}

fn is_word_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

fn find_byte(bytes: &[u8], from: usize, to: usize, needle: u8) -> Option<usize> {
    bytes[from..to].iter().position(|&b| b == needle).map(|i| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{CommentRule, StringRule};

    fn spec() -> GrammarSpec {
        GrammarSpec::builder()
            .keywords(["if", "return"])
            .types(["int"])
            .literals(["true"])
            .builtins(["print"])
            .comment(CommentRule::line("//"))
            .comment(CommentRule::block("/*", "*/"))
            .comment(CommentRule::line("#").with_doc_markup())
            .number(r"\b0[xX][0-9a-fA-F](_?[0-9a-fA-F])*n?\b")
            .number(r"\b[0-9]+\b")
            .string(StringRule::quoted('\''))
            .string(StringRule::quoted('"'))
            .build()
            .unwrap()
    }

    fn scopes(tokens: &[Token<'_>]) -> Vec<Scope> {
        tokens.iter().map(|t| t.scope).collect()
    }

    #[test]
    fn test_keyword_and_word_classification() {
        let spec = spec();
        let tokens = tokenize(&spec, "if x print true");
        assert_eq!(
            scopes(&tokens),
            vec![
                Scope::Keyword,
                Scope::Text, // " "
                Scope::Text, // "x"
                Scope::Text, // " "
                Scope::BuiltIn,
                Scope::Text, // " "
                Scope::Literal,
            ]
        );
    }

    #[test]
    fn test_punctuation_coalesces_into_one_run() {
        let spec = spec();
        let tokens = tokenize(&spec, "( { ; } )");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::Text);
        assert_eq!(tokens[0].text, "( { ; } )");
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        let spec = spec();
        let tokens = tokenize(&spec, "// note\nint");
        assert_eq!(tokens[0].scope, Scope::Comment);
        assert_eq!(tokens[0].text, "// note");
        assert_eq!(tokens[1].text, "\n");
        assert_eq!(tokens[2].scope, Scope::Type);
    }

    #[test]
    fn test_unterminated_block_comment_extends_to_end() {
        let spec = spec();
        let tokens = tokenize(&spec, "/* open");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::Comment);
        assert_eq!(tokens[0].text, "/* open");
    }

    #[test]
    fn test_unterminated_string_extends_to_end() {
        let spec = spec();
        let tokens = tokenize(&spec, "\"no close");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::String);
    }

    #[test]
    fn test_escaped_delimiter_does_not_close() {
        let spec = spec();
        let tokens = tokenize(&spec, r"'a\'b' x");
        assert_eq!(tokens[0].scope, Scope::String);
        assert_eq!(tokens[0].text, r"'a\'b'");
    }

    #[test]
    fn test_hex_number_with_separator_and_suffix() {
        let spec = spec();
        let tokens = tokenize(&spec, "0x1F_2An");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::Number);
    }

    #[test]
    fn test_doc_comment_markup() {
        let spec = spec();
        let tokens = tokenize(&spec, "# @param <int> [value] rest");
        let kinds: Vec<_> = tokens.iter().map(|t| (t.scope, t.text)).collect();
        assert_eq!(
            kinds,
            vec![
                (Scope::Comment, "# "),
                (Scope::Doctag, "@param"),
                (Scope::Comment, " <"),
                (Scope::Type, "int"),
                (Scope::Comment, "> ["),
                (Scope::Keyword, "value"),
                (Scope::Comment, "] rest"),
            ]
        );
    }

    #[test]
    fn test_unclosed_markup_stays_comment_text() {
        let spec = spec();
        let tokens = tokenize(&spec, "# a < b [ c");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].scope, Scope::Comment);
    }

    #[test]
    fn test_ranges_tile_input() {
        let spec = spec();
        let input = "if (x) { return 0x1F; } // done";
        let tokens = tokenize(&spec, input);
        let mut offset = 0u32;
        for token in &tokens {
            assert_eq!(u32::from(token.range.start()), offset);
            offset = token.range.end().into();
        }
        assert_eq!(offset as usize, input.len());
    }

    #[test]
    fn test_empty_input() {
        let spec = spec();
        assert!(tokenize(&spec, "").is_empty());
    }
}
