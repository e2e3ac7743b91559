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

//! Free-variable analysis for SUO-KIF formulas.
//!
//! Walks a syntax tree with an explicit bound-variable set, producing the
//! variables a standalone formula must close over with a synthesized outer
//! quantifier. The result preserves first-occurrence order, which is the
//! documented ordering for synthesized quantifier lists.

use std::collections::HashSet;

use skif_core::{AstNode, TermKind};

/// Collects the free variables of `node` in first-occurrence order.
///
/// Variables and row variables both participate; lexemes are returned with
/// their sigil, as they appear in source.
///
/// # Examples
///
/// ```
/// use skif_core::parse;
/// use skif_tptp::scope::free_variables;
///
/// let (formulas, _) = parse("(=> (instance ?X ?CLASS) (exists (?Y) (part ?Y ?X)))", "t");
/// assert_eq!(free_variables(&formulas[0].node), vec!["?X", "?CLASS"]);
/// ```
pub fn free_variables(node: &AstNode) -> Vec<String> {
    let mut free = Vec::new();
    let bound = HashSet::new();
    walk(node, &bound, &mut free);
    free
}

fn walk(node: &AstNode, bound: &HashSet<String>, free: &mut Vec<String>) {
    match node {
        AstNode::Term { kind, value, .. } => {
            if matches!(*kind, TermKind::Variable | TermKind::RowVariable)
                && !bound.contains(value.as_str())
                && !free.iter().any(|v| v == value)
            {
                free.push(value.clone());
            }
        }
        AstNode::List { children, .. } => {
            if let Some(vars) = quantifier_variables(node) {
                let mut extended = bound.clone();
                extended.extend(vars.iter().map(|v| v.to_string()));
                for child in &children[2..] {
                    walk(child, &extended, free);
                }
            } else {
                for child in children {
                    walk(child, bound, free);
                }
            }
        }
    }
}

/// Returns the variables bound by a quantifier list, when `node` is a
/// `forall`/`exists` list with a well-formed variable-list second child.
pub(crate) fn quantifier_variables(node: &AstNode) -> Option<Vec<&str>> {
    let head = node.head_text()?;
    if head != "forall" && head != "exists" {
        return None;
    }
    let var_list = node.children().get(1)?;
    if !var_list.is_list() || node.children().len() < 3 {
        return None;
    }
    let mut vars = Vec::with_capacity(var_list.children().len());
    for child in var_list.children() {
        if !child.is_variable() {
            return None;
        }
        let (_, value) = child.as_term()?;
        vars.push(value);
    }
    Some(vars)
}
