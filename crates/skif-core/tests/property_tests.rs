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

//! Property tests: the lexer and parser are total over arbitrary input,
//! and token offsets reconstruct the source.

use proptest::prelude::*;
use skif_core::lex::{tokenize, TokenKind};
use skif_core::parse;

proptest! {
    /// Tokenizing arbitrary text never panics and always terminates.
    #[test]
    fn tokenize_is_total(input in ".{0,200}") {
        let _ = tokenize(&input, "fuzz.kif");
    }

    /// Parsing arbitrary text never panics; errors are values, not unwinds.
    #[test]
    fn parse_is_total(input in ".{0,200}") {
        let _ = parse(&input, "fuzz.kif");
    }

    /// Non-string token offsets slice the original lexeme back out of the
    /// source, and offsets never go backwards.
    #[test]
    fn offsets_roundtrip(input in "[a-zA-Z0-9?@()=<>\\-. \n\t]{0,200}") {
        let (tokens, _) = tokenize(&input, "fuzz.kif");
        let mut last_end = 0;
        for tok in &tokens {
            let start = tok.span.start().offset();
            let end = tok.span.end().offset();
            prop_assert!(start >= last_end);
            prop_assert!(end >= start);
            if tok.kind != TokenKind::String {
                prop_assert_eq!(&input[start..end], tok.text.as_str());
            }
            last_end = end;
        }
    }

    /// A parsed formula's re-printed KIF parses back to an identical tree.
    #[test]
    fn display_reparses(depth in 0usize..3) {
        // Build a small balanced expression of the given depth.
        let mut src = String::from("(p ?X");
        for _ in 0..depth {
            src.push_str(" (f a 1.5 \"s\")");
        }
        src.push(')');

        let (formulas, errors) = parse(&src, "gen.kif");
        prop_assert!(errors.is_empty());
        let printed = formulas[0].node.to_string();
        let (reparsed, errors2) = parse(&printed, "gen2.kif");
        prop_assert!(errors2.is_empty());
        prop_assert_eq!(
            reparsed[0].node.to_string(),
            formulas[0].node.to_string()
        );
    }
}
