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

//! Error taxonomy for TPTP conversion.

use skif_core::lex::Span;
use skif_core::ParseError;
use thiserror::Error;

/// An error produced while converting a formula to TPTP.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TptpError {
    /// A first-order-inexpressible shape: a logical formula used as an
    /// individual in argument position.
    #[error("higher-order construct is not expressible in first-order TPTP: {formula}")]
    Hol {
        /// The offending sub-formula, re-printed as KIF.
        formula: String,
        /// Where the sub-formula sits in source.
        span: Span,
    },

    /// A formula that is structurally unusable for conversion (wrong arity,
    /// non-atomic head, conjecture that fails to parse, ...).
    #[error("bad formula: {reason}")]
    BadFormula { reason: String },

    /// A formula text that failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TptpError {
    /// Shorthand for a [`TptpError::BadFormula`].
    pub fn bad(reason: impl Into<String>) -> Self {
        TptpError::BadFormula {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a higher-order-logic rejection.
    #[inline]
    pub fn is_hol(&self) -> bool {
        matches!(self, TptpError::Hol { .. })
    }
}

/// Result type for conversion operations.
pub type TptpResult<T> = Result<T, TptpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hol_display_carries_formula() {
        let err = TptpError::Hol {
            formula: "(and (p ?X) (q ?X))".to_string(),
            span: Span::default(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("higher-order"));
        assert!(msg.contains("(and (p ?X) (q ?X))"));
        assert!(err.is_hol());
    }

    #[test]
    fn test_bad_formula_shorthand() {
        let err = TptpError::bad("'not' expects exactly one argument");
        assert!(matches!(err, TptpError::BadFormula { .. }));
        assert!(!err.is_hol());
    }

    #[test]
    fn test_parse_error_wraps() {
        let (_, errors) = skif_core::parse("(a", "t");
        let err: TptpError = errors[0].clone().into();
        assert!(matches!(err, TptpError::Parse(_)));
    }
}
