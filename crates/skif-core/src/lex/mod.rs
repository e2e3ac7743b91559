// SKIF - SUO-KIF to TPTP Translation Toolkit
//
// Copyright (c) 2025 The SKIF contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lexical analysis for SUO-KIF.
//!
//! [`tokenize`] converts source text into a flat token stream with exact
//! line/column/offset tracking. It never fails: every lexical problem is
//! collected as a [`LexError`] while a best-effort token is still emitted,
//! so the parser and converter stay total over arbitrary input.
//!
//! # Examples
//!
//! ```
//! use skif_core::lex::{tokenize, TokenKind};
//!
//! let (tokens, errors) = tokenize("(instance Foo Bar)", "test.kif");
//! assert!(errors.is_empty());
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind, TokenKind::LParen);
//! assert_eq!(tokens[1].text, "instance");
//! ```

mod error;
mod span;
mod tokens;

pub use error::LexError;
pub use span::{SourcePos, Span};
pub use tokens::{is_number_literal, is_operator_spelling, Token, TokenKind, OPERATORS};

use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

/// Characters that terminate a symbol run.
fn is_kif_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | '\u{0C}')
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    pos: SourcePos,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            pos: SourcePos::start(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.pos.advance(ch);
        Some(ch)
    }
}

/// Tokenizes SUO-KIF source text.
///
/// Returns the complete token stream together with all lexical errors found
/// along the way. `file` is a label (path or buffer name) attached to every
/// token and error for diagnostics.
pub fn tokenize(text: &str, file: &str) -> (Vec<Token>, Vec<LexError>) {
    let file: Arc<str> = Arc::from(file);
    let mut scanner = Scanner::new(text);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(ch) = scanner.peek() {
        if is_kif_whitespace(ch) {
            scanner.bump();
            continue;
        }
        if ch == ';' {
            // Line comment: consume to end of line.
            while let Some(c) = scanner.peek() {
                if c == '\n' {
                    break;
                }
                scanner.bump();
            }
            continue;
        }
        let start = scanner.pos;
        match ch {
            '(' => {
                scanner.bump();
                tokens.push(Token {
                    kind: TokenKind::LParen,
                    text: "(".to_string(),
                    span: Span::new(start, scanner.pos),
                    file: file.clone(),
                });
            }
            ')' => {
                scanner.bump();
                tokens.push(Token {
                    kind: TokenKind::RParen,
                    text: ")".to_string(),
                    span: Span::new(start, scanner.pos),
                    file: file.clone(),
                });
            }
            '"' => {
                scanner.bump();
                let (value, terminated) = scan_string(&mut scanner);
                if !terminated {
                    errors.push(LexError::UnterminatedString {
                        pos: start,
                        file: file.to_string(),
                    });
                }
                tokens.push(Token {
                    kind: TokenKind::String,
                    text: value,
                    span: Span::new(start, scanner.pos),
                    file: file.clone(),
                });
            }
            _ => {
                let mut text = String::new();
                while let Some(c) = scanner.peek() {
                    if is_kif_whitespace(c) || c == '(' || c == ')' || c == '"' {
                        break;
                    }
                    text.push(c);
                    scanner.bump();
                }
                let kind = classify_symbol(&text, start, &file, &mut errors);
                tokens.push(Token {
                    kind,
                    text,
                    span: Span::new(start, scanner.pos),
                    file: file.clone(),
                });
            }
        }
    }

    (tokens, errors)
}

/// Scans a string body after the opening quote has been consumed.
///
/// A backslash consumes the following character as a pair (both kept
/// verbatim); embedded newlines are folded to single spaces. Returns the
/// stored value and whether a closing quote was found.
fn scan_string(scanner: &mut Scanner<'_>) -> (String, bool) {
    let mut value = String::new();
    loop {
        match scanner.bump() {
            None => return (value, false),
            Some('"') => return (value, true),
            Some('\\') => {
                value.push('\\');
                match scanner.bump() {
                    None => return (value, false),
                    Some(c) => value.push(c),
                }
            }
            Some('\n') => value.push(' '),
            Some('\r') => {
                // CRLF folds to one space; a bare CR folds on its own.
                if scanner.peek() != Some('\n') {
                    value.push(' ');
                }
            }
            Some(c) => value.push(c),
        }
    }
}

/// Classifies a symbol run, recording a lexical error for malformed shapes.
///
/// Malformed variables keep their variable kind and anything unrecognized
/// degrades to an atom, so every lexeme yields a usable token.
fn classify_symbol(
    text: &str,
    pos: SourcePos,
    file: &Arc<str>,
    errors: &mut Vec<LexError>,
) -> TokenKind {
    if is_number_literal(text) {
        return TokenKind::Number;
    }
    let mut chars = text.chars();
    let first = chars.next();
    match first {
        Some('?') => {
            if !chars.next().is_some_and(|c| c.is_alphabetic()) {
                errors.push(LexError::InvalidVariable {
                    text: text.to_string(),
                    pos,
                    file: file.to_string(),
                });
            }
            TokenKind::Variable
        }
        Some('@') => {
            if !chars.next().is_some_and(|c| c.is_alphabetic()) {
                errors.push(LexError::InvalidRowVariable {
                    text: text.to_string(),
                    pos,
                    file: file.to_string(),
                });
            }
            TokenKind::RowVariable
        }
        _ => {
            if is_operator_spelling(text) {
                TokenKind::Operator
            } else if first.is_some_and(|c| c.is_alphabetic()) {
                TokenKind::Atom
            } else {
                errors.push(LexError::UnrecognizedToken {
                    text: text.to_string(),
                    pos,
                    file: file.to_string(),
                });
                TokenKind::Atom
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text, "test.kif").0.into_iter().map(|t| t.kind).collect()
    }

    // ==================== basic scanning ====================

    #[test]
    fn test_empty_input() {
        let (tokens, errors) = tokenize("", "test.kif");
        assert!(tokens.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_simple_formula() {
        let (tokens, errors) = tokenize("(instance Foo Bar)", "test.kif");
        assert!(errors.is_empty());
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::LParen,
                TokenKind::Atom,
                TokenKind::Atom,
                TokenKind::Atom,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_whitespace_varieties() {
        let (tokens, errors) = tokenize("a\tb\rc\nd\u{0C}e", "test.kif");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_line_comment() {
        let (tokens, errors) = tokenize("; header comment\n(a) ; trailing\n(b)", "test.kif");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 6);
    }

    // ==================== classification ====================

    #[test]
    fn test_operator_classification() {
        let (tokens, errors) = tokenize("and or not exists forall => <=> equal", "t");
        assert!(errors.is_empty());
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_number_classification() {
        assert_eq!(kinds("42 -5 0.001 1.5e-3"), vec![TokenKind::Number; 4]);
    }

    #[test]
    fn test_variable_classification() {
        let (tokens, errors) = tokenize("?X ?my-var @ROW", "t");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(tokens[1].kind, TokenKind::Variable);
        assert_eq!(tokens[2].kind, TokenKind::RowVariable);
    }

    #[test]
    fn test_invalid_variable_still_emitted() {
        let (tokens, errors) = tokenize("?3x", "t");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexError::InvalidVariable { .. }));
    }

    #[test]
    fn test_invalid_row_variable_still_emitted() {
        let (tokens, errors) = tokenize("@1", "t");
        assert_eq!(tokens[0].kind, TokenKind::RowVariable);
        assert!(matches!(errors[0], LexError::InvalidRowVariable { .. }));
    }

    #[test]
    fn test_unrecognized_symbol_degrades_to_atom() {
        // Bare comparison operators are not reserved spellings; they are
        // flagged but still flow through as atoms for the translator.
        let (tokens, errors) = tokenize("<= =", "t");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Atom));
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], LexError::UnrecognizedToken { .. }));
    }

    #[test]
    fn test_hyphenated_atom() {
        let (tokens, errors) = tokenize("my-term", "t");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Atom);
        assert_eq!(tokens[0].text, "my-term");
    }

    // ==================== strings ====================

    #[test]
    fn test_string_excludes_quotes() {
        let (tokens, errors) = tokenize("\"hello world\"", "t");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "hello world");
    }

    #[test]
    fn test_string_preserves_escapes() {
        let (tokens, _) = tokenize(r#""a \" quote""#, "t");
        assert_eq!(tokens[0].text, r#"a \" quote"#);
    }

    #[test]
    fn test_string_folds_newlines_to_spaces() {
        let (tokens, errors) = tokenize("\"line one\nline two\"", "t");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].text, "line one line two");
    }

    #[test]
    fn test_string_folds_crlf_to_single_space() {
        let (tokens, _) = tokenize("\"a\r\nb\"", "t");
        assert_eq!(tokens[0].text, "a b");
    }

    #[test]
    fn test_unterminated_string_runs_to_eof() {
        let (tokens, errors) = tokenize("\"never closed", "t");
        assert_eq!(tokens[0].text, "never closed");
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_parens_split_symbols() {
        let (tokens, _) = tokenize("(a)(b)", "t");
        assert_eq!(tokens.len(), 6);
    }

    // ==================== position tracking ====================

    #[test]
    fn test_offsets_contiguous_with_source() {
        let src = "(subclass\n  Human Animal)";
        let (tokens, errors) = tokenize(src, "t");
        assert!(errors.is_empty());
        for tok in &tokens {
            if tok.kind == TokenKind::String {
                continue;
            }
            let start = tok.span.start().offset();
            let end = tok.span.end().offset();
            assert_eq!(&src[start..end], tok.text);
        }
    }

    #[test]
    fn test_offsets_monotonic() {
        let (tokens, _) = tokenize("(a \"s\" ?X 1.5)", "t");
        let mut last = 0;
        for tok in &tokens {
            assert!(tok.span.start().offset() >= last);
            last = tok.span.end().offset();
        }
    }

    #[test]
    fn test_line_and_column_tracking() {
        let (tokens, _) = tokenize("(a\n  b)", "t");
        let b = &tokens[2];
        assert_eq!(b.text, "b");
        assert_eq!(b.span.start().line(), 2);
        assert_eq!(b.span.start().column(), 3);
    }

    #[test]
    fn test_file_label_attached() {
        let (tokens, _) = tokenize("(a)", "Merge.kif");
        assert!(tokens.iter().all(|t| &*t.file == "Merge.kif"));
    }
}
