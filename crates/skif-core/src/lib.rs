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

//! Tokenizer, parser and syntax tree for SUO-KIF, the LISP-like first-order
//! logic notation used by the SUMO ontology.
//!
//! The pipeline is strictly left to right: text → tokens → syntax trees.
//! Both stages are total: lexical problems are collected alongside a
//! best-effort token stream, and a parse error is fatal only to the one
//! top-level expression it occurs in.
//!
//! ```
//! use skif_core::{parse, lex::tokenize};
//!
//! let src = "(=> (instance ?X Human) (attribute ?X Mortal))";
//! let (tokens, lex_errors) = tokenize(src, "demo.kif");
//! assert!(lex_errors.is_empty());
//! assert_eq!(tokens.len(), 13);
//!
//! let (formulas, parse_errors) = parse(src, "demo.kif");
//! assert!(parse_errors.is_empty());
//! assert_eq!(formulas[0].node.head_text(), Some("=>"));
//! ```

mod ast;
mod formula;
pub mod lex;
mod parser;

pub use ast::{AstNode, TermKind};
pub use formula::Formula;
pub use parser::{parse, parse_tokens, ParseError, Parser};
