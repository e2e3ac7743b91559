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

//! Knowledge-base assembly: turning a list of SUO-KIF formula texts into a
//! complete TPTP document.
//!
//! The assembler filters excluded lexicographic predicates, deduplicates by
//! exact source text, numbers and names axioms, optionally appends a
//! conjecture or question, and wraps everything in header and stats
//! comments. A formula that fails conversion (higher-order shape, parse
//! error) is skipped and recorded; the rest of the batch is still emitted.
//! A failing conjecture aborts the whole call, since the resulting document
//! would be useless for the query that motivated it.

use std::collections::HashSet;

use skif_core::parse;

use crate::convert::{Closure, Converter};
use crate::error::{TptpError, TptpResult};
use crate::options::ConversionOptions;

/// Predicates that carry lexicographic or documentary content only; they
/// are dropped from TPTP output without an error.
pub const EXCLUDED_PREDICATES: [&str; 12] = [
    "documentation",
    "domain",
    "domainSubclass",
    "format",
    "termFormat",
    "externalImage",
    "relatedExternalConcept",
    "relatedInternalConcept",
    "formerName",
    "abbreviation",
    "conventionalShortName",
    "conventionalLongName",
];

/// Returns `true` if a head predicate is excluded from TPTP output.
#[inline]
pub fn is_excluded_predicate(name: &str) -> bool {
    EXCLUDED_PREDICATES.contains(&name)
}

/// A formula that could not be converted, recorded against the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFormula {
    /// The original source text of the formula.
    pub source: String,
    /// Why it was skipped.
    pub error: TptpError,
}

/// A complete assembled TPTP document with its statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct KbDocument {
    /// The document text, one formula per line plus comments.
    pub content: String,
    /// Number of axiom-role lines emitted (the conjecture/question line is
    /// not counted here).
    pub axiom_count: usize,
    /// Axioms emitted in the `fof` dialect.
    pub fof_count: usize,
    /// Axioms emitted in the `tff` dialect.
    pub tff_count: usize,
    /// Axioms emitted in the `thf` dialect.
    pub thf_count: usize,
    /// Formulas that failed conversion and were skipped.
    pub skipped: Vec<SkippedFormula>,
}

/// Assembles a TPTP document from a list of SUO-KIF formula texts.
///
/// Each text is parsed independently; excluded predicates are dropped
/// silently, exact duplicates contribute one axiom, and every surviving
/// formula is converted with universal closure over its free variables.
/// `conjecture`, when given, is converted with existential closure and
/// appended with role `question` or `conjecture`.
///
/// # Examples
///
/// ```
/// use skif_tptp::{convert_formulas, ConversionOptions};
///
/// let formulas = vec![
///     "(instance Foo Bar)".to_string(),
///     "(subclass Human Animal)".to_string(),
/// ];
/// let doc = convert_formulas(&formulas, "Demo", None, false, &ConversionOptions::default())
///     .unwrap();
/// assert_eq!(doc.axiom_count, 2);
/// assert!(doc.content.contains("fof(kb_Demo_1,axiom,"));
/// ```
pub fn convert_formulas(
    formulas: &[String],
    kb_name: &str,
    conjecture: Option<&str>,
    is_question: bool,
    options: &ConversionOptions,
) -> TptpResult<KbDocument> {
    let mut converter = Converter::new(options.clone());
    let keyword = options.language.keyword();
    let name_tag = sanitize_name(kb_name);

    let mut content = String::new();
    content.push_str(&format!(
        "% SKIF {}: SUO-KIF to TPTP translation\n% KB: {}\n\n",
        env!("CARGO_PKG_VERSION"),
        kb_name
    ));

    let mut seen: HashSet<&str> = HashSet::new();
    let mut skipped = Vec::new();
    let mut axiom_count = 0usize;

    for text in formulas {
        if !seen.insert(text.as_str()) {
            continue;
        }
        let (parsed, errors) = parse(text, kb_name);
        if let Some(err) = errors.into_iter().next() {
            skipped.push(SkippedFormula {
                source: text.clone(),
                error: TptpError::Parse(err),
            });
            continue;
        }
        let formula = match parsed.as_slice() {
            [] => continue,
            [formula] => formula,
            _ => {
                skipped.push(SkippedFormula {
                    source: text.clone(),
                    error: TptpError::bad("expected exactly one formula per entry"),
                });
                continue;
            }
        };
        if formula
            .node
            .head_text()
            .is_some_and(is_excluded_predicate)
        {
            continue;
        }
        match converter.convert(formula, Closure::Universal) {
            Ok(body) => {
                axiom_count += 1;
                content.push_str(&format!("% f: {}\n", fold_lines(&formula.source)));
                content.push_str(&format!(
                    "{}(kb_{}_{},axiom,({})).\n",
                    keyword, name_tag, axiom_count, body
                ));
            }
            Err(error) => {
                skipped.push(SkippedFormula {
                    source: text.clone(),
                    error,
                });
            }
        }
    }

    if let Some(query) = conjecture {
        let (parsed, errors) = parse(query, kb_name);
        let formula = match (parsed.as_slice(), errors.first()) {
            ([formula], None) => formula,
            (_, Some(err)) => {
                return Err(TptpError::bad(format!("conjecture failed to parse: {}", err)));
            }
            _ => {
                return Err(TptpError::bad("conjecture must be exactly one formula"));
            }
        };
        let body = converter
            .convert(formula, Closure::Existential)
            .map_err(|err| TptpError::bad(format!("conjecture failed to convert: {}", err)))?;
        let role = if is_question { "question" } else { "conjecture" };
        content.push_str(&format!("% f: {}\n", fold_lines(&formula.source)));
        content.push_str(&format!(
            "{}(prove_from_{},{},({})).\n",
            keyword, name_tag, role, body
        ));
    }

    let (fof_count, tff_count, thf_count) = match options.language {
        crate::options::OutputLanguage::Fof => (axiom_count, 0, 0),
        crate::options::OutputLanguage::Tff => (0, axiom_count, 0),
        crate::options::OutputLanguage::Thf => (0, 0, axiom_count),
    };
    content.push_str(&format!(
        "\n% Axioms: {} (fof: {}, tff: {}, thf: {})\n",
        axiom_count, fof_count, tff_count, thf_count
    ));

    Ok(KbDocument {
        content,
        axiom_count,
        fof_count,
        tff_count,
        thf_count,
        skipped,
    })
}

/// Folds a formula's source onto one line for a `% f:` trace comment.
fn fold_lines(source: &str) -> String {
    source.replace(['\r', '\n'], " ")
}

/// Maps a knowledge-base name onto the identifier alphabet so that emitted
/// formula names stay valid TPTP words. The original name is kept verbatim
/// in the `% KB:` header comment.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
