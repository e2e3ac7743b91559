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

//! Token model and lexeme classification for SUO-KIF.
//!
//! Classification follows the reference SUO-KIF grammar: numbers, `?`
//! variables, `@` row variables, reserved logical operators, and plain
//! atoms, in that order of precedence.

use std::sync::Arc;

use crate::lex::span::Span;

/// The reserved logical operator spellings of SUO-KIF.
pub const OPERATORS: [&str; 8] = ["and", "or", "not", "exists", "forall", "=>", "<=>", "equal"];

/// The kind of a SUO-KIF token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A constant or functor symbol.
    Atom,
    /// A reserved logical operator (`and`, `or`, `not`, `exists`, `forall`,
    /// `=>`, `<=>`, `equal`).
    Operator,
    /// A quoted string literal (text stored without the quotes).
    String,
    /// A numeric literal.
    Number,
    /// A `?` variable.
    Variable,
    /// A `@` row variable (variadic argument sequence).
    RowVariable,
}

/// A single SUO-KIF token with its source location.
///
/// For `String` tokens, `text` excludes the delimiting quotes but preserves
/// embedded escape pairs; newlines inside the literal are folded to single
/// spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The token's text (see kind-specific notes above).
    pub text: String,
    /// Where the token sits in the source.
    pub span: Span,
    /// Label of the source file or buffer the token came from.
    pub file: Arc<str>,
}

impl Token {
    /// Returns `true` if this token is the given operator spelling.
    #[inline]
    pub fn is_operator(&self, spelling: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == spelling
    }
}

/// Checks whether a lexeme is a numeric literal:
/// `-?digits(.digits)?(e-?digits)?`.
///
/// # Examples
///
/// ```
/// use skif_core::lex::is_number_literal;
///
/// assert!(is_number_literal("42"));
/// assert!(is_number_literal("-5"));
/// assert!(is_number_literal("0.001"));
/// assert!(is_number_literal("1.5e-3"));
///
/// assert!(!is_number_literal("-"));
/// assert!(!is_number_literal("1.")); // digits required after the point
/// assert!(!is_number_literal("x1"));
/// assert!(!is_number_literal("1e")); // digits required in the exponent
/// ```
pub fn is_number_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i = 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < bytes.len() && bytes[i] == b'e' {
        i += 1;
        if i < bytes.len() && bytes[i] == b'-' {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Checks whether a lexeme is a reserved operator spelling.
///
/// # Examples
///
/// ```
/// use skif_core::lex::is_operator_spelling;
///
/// assert!(is_operator_spelling("and"));
/// assert!(is_operator_spelling("=>"));
/// assert!(is_operator_spelling("<=>"));
///
/// assert!(!is_operator_spelling("And"));
/// assert!(!is_operator_spelling("=")); // bare equality is not reserved
/// ```
#[inline]
pub fn is_operator_spelling(s: &str) -> bool {
    OPERATORS.contains(&s)
}
