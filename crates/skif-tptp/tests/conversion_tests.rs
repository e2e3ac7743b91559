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

//! End-to-end conversion tests over realistic SUMO-style input.

use skif_tptp::{
    convert_formulas, convert_text, Closure, ConversionOptions, OutputLanguage, TptpError,
};

fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn full_document_from_mixed_batch() {
    let formulas = strings(&[
        "(instance instance BinaryPredicate)",
        "(documentation instance EnglishLanguage \"The most basic relation.\")",
        "(=> (and (instance ?REL TransitiveRelation) (?REL ?A ?B) (?REL ?B ?C)) (?REL ?A ?C))",
        "(subclass Human Hominid)",
        "(subclass Human Hominid)",
        "(equal (SubtractionFn 8 3) 5)",
    ]);
    let doc = convert_formulas(&formulas, "Merge", None, false, &ConversionOptions::default())
        .unwrap();

    // documentation dropped, one duplicate collapsed: four axioms remain.
    assert_eq!(doc.axiom_count, 4);
    assert_eq!(doc.fof_count, 4);
    assert!(doc.skipped.is_empty());

    // Mention suffix on the argument occurrence only.
    assert!(doc.content.contains("s__instance(s__instance__m,s__BinaryPredicate)"));
    // Math function renamed, numbers hidden.
    assert!(doc.content.contains("s__difference(n__8,n__3) = n__5"));
    // Every axiom line is named in sequence.
    for k in 1..=4 {
        assert!(doc.content.contains(&format!("fof(kb_Merge_{},axiom,(", k)));
    }
}

#[test]
fn kappa_fn_formula_rejected_but_batch_survives() {
    let formulas = strings(&[
        "(instance Killing Process)",
        "(capability (KappaFn ?K (and (instance ?K Killing) (patient ?K ?O))) instrument ?GUN)",
    ]);
    let doc = convert_formulas(&formulas, "Hol", None, false, &ConversionOptions::default())
        .unwrap();
    assert_eq!(doc.axiom_count, 1);
    assert_eq!(doc.skipped.len(), 1);
    assert!(matches!(doc.skipped[0].error, TptpError::Hol { .. }));
    assert!(!doc.content.contains("KappaFn"));
}

#[test]
fn conjecture_closure_differs_from_axiom_closure() {
    let formulas = strings(&["(parent ?X ?Y)"]);
    let doc = convert_formulas(
        &formulas,
        "Fam",
        Some("(parent Sam ?WHO)"),
        true,
        &ConversionOptions::default(),
    )
    .unwrap();
    assert!(doc.content.contains("! [V__X,V__Y]"));
    assert!(doc.content.contains("? [V__WHO]"));
    assert!(doc.content.contains(",question,("));
}

#[test]
fn document_conversion_is_deterministic() {
    let formulas = strings(&[
        "(=> (instance ?X Human) (exists (?Y) (mother ?Y ?X)))",
        "(names \"Socrates\" Socrates)",
        "(instance Socrates Human)",
    ]);
    let options = ConversionOptions::default();
    let first = convert_formulas(&formulas, "Det", None, false, &options).unwrap();
    let second = convert_formulas(&formulas, "Det", None, false, &options).unwrap();
    assert_eq!(first.content, second.content);
}

#[test]
fn options_are_explicit_not_shared() {
    // Two conversions with different options interleave without affecting
    // each other; options travel with the call.
    let hidden = ConversionOptions::default();
    let plain = ConversionOptions::default().with_hide_numbers(false);
    let a = convert_text("(measure ?X 0.001)", &hidden, Closure::Open).unwrap();
    let b = convert_text("(measure ?X 0.001)", &plain, Closure::Open).unwrap();
    let c = convert_text("(measure ?X 0.001)", &hidden, Closure::Open).unwrap();
    assert_eq!(a, "s__measure(V__X,n__0_001)");
    assert_eq!(b, "s__measure(V__X,0.001)");
    assert_eq!(a, c);
}

#[test]
fn thf_dialect_selected_by_options() {
    let options = ConversionOptions::default().with_language(OutputLanguage::Thf);
    let doc = convert_formulas(
        &strings(&["(instance A B)"]),
        "T",
        None,
        false,
        &options,
    )
    .unwrap();
    assert!(doc.content.contains("thf(kb_T_1,axiom,("));
    assert_eq!(doc.thf_count, 1);
    assert_eq!(doc.axiom_count, 1);
}

#[test]
fn row_variables_close_like_ordinary_variables() {
    let body = convert_text("(holds ?REL @ARGS)", &ConversionOptions::default(), Closure::Universal)
        .unwrap();
    assert_eq!(body, "! [V__REL,V__ARGS] : (s__holds(V__REL,V__ARGS))");
}

#[test]
fn hyphenated_terms_are_quoted_in_output() {
    let body = convert_text(
        "(instance my-term Entity)",
        &ConversionOptions::default(),
        Closure::Open,
    )
    .unwrap();
    assert_eq!(body, "s__instance('s__my-term',s__Entity)");
}

#[test]
fn remove_strings_elides_only_string_arguments() {
    let options = ConversionOptions::default().with_remove_strings(true);
    let body = convert_text(
        "(comment Entity \"the root\" Sam)",
        &options,
        Closure::Open,
    )
    .unwrap();
    assert_eq!(body, "s__comment(s__Entity,s__Sam)");
}
