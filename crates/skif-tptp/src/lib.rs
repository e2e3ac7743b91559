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

//! Translation of SUO-KIF formulas into TPTP (`fof`/`tff`/`thf`) syntax.
//!
//! The pipeline is pure and strictly left to right: a parsed syntax tree
//! (from `skif-core`) is rewritten into one TPTP formula body, and the
//! knowledge-base assembler drives that rewrite over a batch to produce a
//! complete document. Formulas that require higher-order logic (a logical
//! connective or quantifier used as a term) are rejected with a
//! distinguishable error instead of being emitted.
//!
//! # Examples
//!
//! ```
//! use skif_tptp::{convert_text, Closure, ConversionOptions};
//!
//! let options = ConversionOptions::default();
//! let body = convert_text(
//!     "(=> (instance ?X Human) (attribute ?X Mortal))",
//!     &options,
//!     Closure::Universal,
//! )
//! .unwrap();
//! assert_eq!(
//!     body,
//!     "! [V__X] : (s__instance(V__X,s__Human) => s__attribute(V__X,s__Mortal))"
//! );
//! ```

mod convert;
mod error;
mod kb;
mod options;
pub mod scope;
pub mod symbols;

pub use convert::{convert_formula, convert_text, Closure, Converter};
pub use error::{TptpError, TptpResult};
pub use kb::{
    convert_formulas, is_excluded_predicate, KbDocument, SkippedFormula, EXCLUDED_PREDICATES,
};
pub use options::{ConversionOptions, OutputLanguage};
