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

//! Recursive-descent parser from token streams to SUO-KIF syntax trees.
//!
//! A parse error is fatal only to the top-level expression it occurs in;
//! sibling expressions still parse. The parser is restartable: [`Parser`]
//! keeps an explicit cursor and yields one top-level [`Formula`] at a time.
//!
//! # Examples
//!
//! ```
//! use skif_core::parse;
//!
//! let (formulas, errors) = parse("(subclass Human Animal)\n(instance Sam Human)", "t.kif");
//! assert!(errors.is_empty());
//! assert_eq!(formulas.len(), 2);
//! assert_eq!(formulas[1].source, "(instance Sam Human)");
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::ast::{AstNode, TermKind};
use crate::formula::Formula;
use crate::lex::{tokenize, SourcePos, Span, Token, TokenKind};

/// A fatal structural error in one top-level expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// End of input reached while a list was still open.
    #[error("{file}: line {}, column {}: unclosed parenthesis", .pos.line(), .pos.column())]
    UnclosedParen { pos: SourcePos, file: String },

    /// A `)` with no matching open parenthesis.
    #[error("{file}: line {}, column {}: dangling right parenthesis", .pos.line(), .pos.column())]
    DanglingParen { pos: SourcePos, file: String },
}

impl ParseError {
    /// The position where this error occurred.
    pub fn position(&self) -> SourcePos {
        match self {
            ParseError::UnclosedParen { pos, .. } => *pos,
            ParseError::DanglingParen { pos, .. } => *pos,
        }
    }
}

/// A restartable cursor over a token stream, yielding one top-level
/// expression per call to [`Parser::next_formula`].
pub struct Parser<'a> {
    tokens: &'a [Token],
    source: &'a str,
    file: Arc<str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`, which must have been produced from
    /// `source` so that span offsets index into it.
    pub fn new(tokens: &'a [Token], source: &'a str, file: &str) -> Self {
        Self {
            tokens,
            source,
            file: Arc::from(file),
            pos: 0,
        }
    }

    /// The current cursor position in the token stream.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Parses the next top-level expression, or `None` at end of input.
    ///
    /// On error the cursor still advances, so subsequent expressions can be
    /// parsed after a malformed one.
    pub fn next_formula(&mut self) -> Option<Result<Formula, ParseError>> {
        let token = self.tokens.get(self.pos)?;
        match token.kind {
            TokenKind::RParen => {
                let err = ParseError::DanglingParen {
                    pos: token.span.start(),
                    file: token.file.to_string(),
                };
                self.pos += 1;
                Some(Err(err))
            }
            TokenKind::LParen => Some(self.parse_list().map(|node| self.make_formula(node))),
            _ => {
                let node = leaf(token);
                self.pos += 1;
                Some(Ok(self.make_formula(node)))
            }
        }
    }

    fn make_formula(&self, node: AstNode) -> Formula {
        let span = node.span();
        let slice = &self.source[span.start().offset()..span.end().offset()];
        Formula::new(node, slice, self.file.clone())
    }

    /// Parses a list whose opening parenthesis is at the cursor.
    fn parse_list(&mut self) -> Result<AstNode, ParseError> {
        let open = &self.tokens[self.pos];
        debug_assert_eq!(open.kind, TokenKind::LParen);
        self.pos += 1;

        let mut children = Vec::new();
        loop {
            let Some(token) = self.tokens.get(self.pos) else {
                return Err(ParseError::UnclosedParen {
                    pos: open.span.start(),
                    file: open.file.to_string(),
                });
            };
            match token.kind {
                TokenKind::RParen => {
                    let span = Span::new(open.span.start(), token.span.end());
                    self.pos += 1;
                    return Ok(AstNode::List { children, span });
                }
                TokenKind::LParen => children.push(self.parse_list()?),
                _ => {
                    children.push(leaf(token));
                    self.pos += 1;
                }
            }
        }
    }
}

/// Maps a non-paren token to a leaf node. Operator tokens become atoms; the
/// converter dispatches on their text, not their token kind.
fn leaf(token: &Token) -> AstNode {
    let kind = match token.kind {
        TokenKind::Number => TermKind::Number,
        TokenKind::Variable => TermKind::Variable,
        TokenKind::RowVariable => TermKind::RowVariable,
        TokenKind::String => TermKind::String,
        _ => TermKind::Atom,
    };
    AstNode::Term {
        kind,
        value: token.text.clone(),
        span: token.span,
    }
}

/// Parses every top-level expression in an already-tokenized stream.
pub fn parse_tokens(tokens: &[Token], source: &str, file: &str) -> (Vec<Formula>, Vec<ParseError>) {
    let mut parser = Parser::new(tokens, source, file);
    let mut formulas = Vec::new();
    let mut errors = Vec::new();
    while let Some(result) = parser.next_formula() {
        match result {
            Ok(formula) => formulas.push(formula),
            Err(err) => errors.push(err),
        }
    }
    (formulas, errors)
}

/// Tokenizes and parses SUO-KIF source text in one step.
///
/// Lexical errors are not reported here; malformed lexemes degrade to atom
/// tokens (see [`crate::lex::tokenize`]). Callers that need lexical
/// diagnostics should tokenize first and then use [`parse_tokens`].
pub fn parse(text: &str, file: &str) -> (Vec<Formula>, Vec<ParseError>) {
    let (tokens, _) = tokenize(text, file);
    parse_tokens(&tokens, text, file)
}
