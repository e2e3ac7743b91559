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

//! Error types for SUO-KIF lexical analysis.
//!
//! Lexical errors are never fatal: the tokenizer collects them and still
//! emits a token for every malformed lexeme, so downstream stages remain
//! total functions over arbitrary input.

use thiserror::Error;

pub use crate::lex::span::SourcePos;

/// A non-fatal problem found while tokenizing SUO-KIF source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// A `?` variable whose sigil is not followed by a letter.
    #[error("{file}: line {}, column {}: variable '{text}' must start with a letter after '?'", .pos.line(), .pos.column())]
    InvalidVariable {
        text: String,
        pos: SourcePos,
        file: String,
    },

    /// A `@` row variable whose sigil is not followed by a letter.
    #[error("{file}: line {}, column {}: row variable '{text}' must start with a letter after '@'", .pos.line(), .pos.column())]
    InvalidRowVariable {
        text: String,
        pos: SourcePos,
        file: String,
    },

    /// A symbol that matches no recognized token shape. The lexeme is still
    /// emitted as an atom token.
    #[error("{file}: line {}, column {}: unrecognized token '{text}'", .pos.line(), .pos.column())]
    UnrecognizedToken {
        text: String,
        pos: SourcePos,
        file: String,
    },

    /// A string literal that ran to end of input without a closing quote.
    #[error("{file}: line {}, column {}: unterminated string literal", .pos.line(), .pos.column())]
    UnterminatedString { pos: SourcePos, file: String },
}

impl LexError {
    /// The position where this error occurred.
    #[inline]
    pub fn position(&self) -> SourcePos {
        match self {
            LexError::InvalidVariable { pos, .. } => *pos,
            LexError::InvalidRowVariable { pos, .. } => *pos,
            LexError::UnrecognizedToken { pos, .. } => *pos,
            LexError::UnterminatedString { pos, .. } => *pos,
        }
    }

    /// The source file label this error was reported against.
    #[inline]
    pub fn file(&self) -> &str {
        match self {
            LexError::InvalidVariable { file, .. } => file,
            LexError::InvalidRowVariable { file, .. } => file,
            LexError::UnrecognizedToken { file, .. } => file,
            LexError::UnterminatedString { file, .. } => file,
        }
    }
}
