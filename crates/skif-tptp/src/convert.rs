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

//! Recursive rewrite of SUO-KIF syntax trees into TPTP formula bodies.
//!
//! The converter walks the tree once, threading an explicit sentence/term
//! position through every call. Sentence position is a logical slot (the
//! node asserts something); term position is an argument slot expected to
//! denote an individual. A logical connective or quantifier found in term
//! position is a higher-order construct and is rejected with
//! [`TptpError::Hol`] rather than emitted.
//!
//! # Examples
//!
//! ```
//! use skif_tptp::{convert_text, Closure, ConversionOptions};
//!
//! let options = ConversionOptions::default();
//! let body = convert_text("(instance ?X Human)", &options, Closure::Universal).unwrap();
//! assert_eq!(body, "! [V__X] : (s__instance(V__X,s__Human))");
//! ```

use std::collections::HashMap;

use skif_core::{parse, AstNode, Formula, TermKind};

use crate::error::{TptpError, TptpResult};
use crate::options::ConversionOptions;
use crate::scope::{self, quantifier_variables};
use crate::symbols::{translate_atom, translate_number, translate_variable, SymbolRole};

/// The logical operators whose appearance in term position makes a formula
/// higher-order.
const LOGICAL_OPERATORS: [&str; 7] = ["and", "or", "not", "=>", "<=>", "forall", "exists"];

/// How the free variables of a standalone formula are closed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    /// Wrap free variables in an outer `!` quantifier (axiom context).
    Universal,
    /// Wrap free variables in an outer `?` quantifier (question/conjecture
    /// context).
    Existential,
    /// Leave free variables open (sub-expression context).
    Open,
}

/// Whether a node occupies a logical slot or an argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Sentence,
    Term,
}

/// A rendered fragment, tracking whether it needs parentheses as an operand
/// of an enclosing connective.
#[derive(Debug, Clone)]
enum Rendered {
    /// A leaf or application; never needs extra parentheses.
    Atomic(String),
    /// An infix or quantified form; parenthesized when used as an operand.
    Compound(String),
    /// A string literal removed by `remove_strings`.
    Elided,
}

impl Rendered {
    fn operand(&self) -> TptpResult<String> {
        match self {
            Rendered::Atomic(s) => Ok(s.clone()),
            Rendered::Compound(s) => Ok(format!("({})", s)),
            Rendered::Elided => Err(TptpError::bad(
                "string literal removed from a position that requires a term",
            )),
        }
    }

    fn bare(&self) -> TptpResult<String> {
        match self {
            Rendered::Atomic(s) | Rendered::Compound(s) => Ok(s.clone()),
            Rendered::Elided => Err(TptpError::bad(
                "string literal removed from a position that requires a term",
            )),
        }
    }
}

/// A stateful converter for one conversion run.
///
/// The only state is the string-literal intern table, which keeps `str_N`
/// constants stable across all formulas of a run (a knowledge-base assembly
/// shares one converter). Everything else is a pure function of the input
/// tree and the options.
#[derive(Debug)]
pub struct Converter {
    options: ConversionOptions,
    strings: HashMap<String, usize>,
}

impl Converter {
    /// Creates a converter for a fresh run.
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            strings: HashMap::new(),
        }
    }

    /// The options this converter was built with.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Converts one formula into a TPTP body, closing over its free
    /// variables according to `closure`.
    pub fn convert(&mut self, formula: &Formula, closure: Closure) -> TptpResult<String> {
        let body = self.node(&formula.node, Position::Sentence)?.bare()?;
        let free = scope::free_variables(&formula.node);
        if free.is_empty() || closure == Closure::Open {
            return Ok(body);
        }
        let quantifier = match closure {
            Closure::Universal => "!",
            Closure::Existential => "?",
            Closure::Open => unreachable!(),
        };
        let vars: Vec<String> = free.iter().map(|v| translate_variable(v)).collect();
        Ok(format!("{} [{}] : ({})", quantifier, vars.join(","), body))
    }

    fn node(&mut self, node: &AstNode, pos: Position) -> TptpResult<Rendered> {
        match node {
            AstNode::Term { kind, value, .. } => Ok(self.leaf(*kind, value, pos)),
            AstNode::List { children, .. } => {
                if children.is_empty() {
                    return Err(TptpError::bad("empty list"));
                }
                let head = node.head_text();
                if let Some(op) = head {
                    if LOGICAL_OPERATORS.contains(&op) {
                        if pos == Position::Term {
                            return Err(TptpError::Hol {
                                formula: node.to_string(),
                                span: node.span(),
                            });
                        }
                        return self.logical(op, node);
                    }
                    if (op == "=" || op == "equal") && pos == Position::Sentence {
                        return self.equality(node);
                    }
                }
                self.application(node)
            }
        }
    }

    fn leaf(&mut self, kind: TermKind, value: &str, pos: Position) -> Rendered {
        match kind {
            TermKind::Variable | TermKind::RowVariable => {
                Rendered::Atomic(translate_variable(value))
            }
            TermKind::Number => {
                Rendered::Atomic(translate_number(value, self.options.hide_numbers))
            }
            TermKind::String => {
                if self.options.remove_strings && pos == Position::Term {
                    Rendered::Elided
                } else {
                    Rendered::Atomic(self.intern(value))
                }
            }
            TermKind::Atom => {
                let role = match pos {
                    Position::Term => SymbolRole::Mentioned,
                    Position::Sentence => SymbolRole::Applied,
                };
                Rendered::Atomic(translate_atom(value, role, &self.options))
            }
        }
    }

    /// Dispatches the logical connectives and quantifiers. Only called in
    /// sentence position.
    fn logical(&mut self, op: &str, node: &AstNode) -> TptpResult<Rendered> {
        let args = &node.children()[1..];
        match op {
            "and" => self.junction(args, " & ", "$true"),
            "or" => self.junction(args, " | ", "$false"),
            "not" => {
                let [arg] = args else {
                    return Err(TptpError::bad("'not' expects exactly one argument"));
                };
                let inner = self.node(arg, Position::Sentence)?.bare()?;
                Ok(Rendered::Atomic(format!("~({})", inner)))
            }
            "=>" => {
                let [antecedent, consequent] = args else {
                    return Err(TptpError::bad("'=>' expects exactly two arguments"));
                };
                let a = self.node(antecedent, Position::Sentence)?.operand()?;
                let b = self.node(consequent, Position::Sentence)?.operand()?;
                Ok(Rendered::Compound(format!("{} => {}", a, b)))
            }
            "<=>" => {
                // Expanded into the conjunction of both implications.
                let [left, right] = args else {
                    return Err(TptpError::bad("'<=>' expects exactly two arguments"));
                };
                let a = self.node(left, Position::Sentence)?.operand()?;
                let b = self.node(right, Position::Sentence)?.operand()?;
                Ok(Rendered::Compound(format!(
                    "({} => {}) & ({} => {})",
                    a, b, b, a
                )))
            }
            "forall" | "exists" => self.quantifier(op, node),
            _ => unreachable!("logical() called with non-logical head"),
        }
    }

    /// `and`/`or` with binary joining, identity element for zero children,
    /// and single-child unwrapping.
    fn junction(&mut self, args: &[AstNode], sep: &str, identity: &str) -> TptpResult<Rendered> {
        match args {
            [] => Ok(Rendered::Atomic(identity.to_string())),
            [only] => self.node(only, Position::Sentence),
            _ => {
                let mut parts = Vec::with_capacity(args.len());
                for arg in args {
                    parts.push(self.node(arg, Position::Sentence)?.operand()?);
                }
                Ok(Rendered::Compound(parts.join(sep)))
            }
        }
    }

    fn quantifier(&mut self, op: &str, node: &AstNode) -> TptpResult<Rendered> {
        let Some(vars) = quantifier_variables(node) else {
            return Err(TptpError::bad(format!(
                "'{}' expects a variable list and a body",
                op
            )));
        };
        // Variable order is as declared in source.
        let translated: Vec<String> = vars.iter().map(|v| translate_variable(v)).collect();
        let symbol = if op == "forall" { "!" } else { "?" };
        let mut body_parts = Vec::with_capacity(node.children().len() - 2);
        for child in &node.children()[2..] {
            body_parts.push(self.node(child, Position::Sentence)?.operand()?);
        }
        let body = body_parts.join(" & ");
        Ok(Rendered::Compound(format!(
            "{} [{}] : ({})",
            symbol,
            translated.join(","),
            body
        )))
    }

    /// `(= a b)` / `(equal a b)` asserted as a sentence: infix equality over
    /// two individuals.
    fn equality(&mut self, node: &AstNode) -> TptpResult<Rendered> {
        let [left, right] = &node.children()[1..] else {
            return Err(TptpError::bad("equality expects exactly two arguments"));
        };
        let a = self.node(left, Position::Term)?.operand()?;
        let b = self.node(right, Position::Term)?.operand()?;
        Ok(Rendered::Compound(format!("{} = {}", a, b)))
    }

    /// An ordinary predicate or function application. Also covers `equal`
    /// used as a term, which is emitted as `s__equal(a,b)` rather than the
    /// infix operator.
    fn application(&mut self, node: &AstNode) -> TptpResult<Rendered> {
        let head = match node.head() {
            Some(AstNode::Term { kind, value, .. }) => match kind {
                TermKind::Atom => translate_atom(value, SymbolRole::Applied, &self.options),
                TermKind::Variable | TermKind::RowVariable => translate_variable(value),
                TermKind::Number | TermKind::String => {
                    return Err(TptpError::bad(format!("'{}' cannot head a list", value)));
                }
            },
            _ => return Err(TptpError::bad("list head must be atomic")),
        };
        let mut args = Vec::with_capacity(node.children().len() - 1);
        for child in &node.children()[1..] {
            match self.node(child, Position::Term)? {
                Rendered::Elided => continue,
                rendered => args.push(rendered.bare()?),
            }
        }
        if args.is_empty() {
            Ok(Rendered::Atomic(head))
        } else {
            Ok(Rendered::Atomic(format!("{}({})", head, args.join(","))))
        }
    }

    /// Interns a string literal as a `str_N` constant, stable per run.
    fn intern(&mut self, literal: &str) -> String {
        let next = self.strings.len() + 1;
        let id = *self.strings.entry(literal.to_string()).or_insert(next);
        format!("str_{}", id)
    }
}

/// Converts a single already-parsed formula with fresh run state.
pub fn convert_formula(
    formula: &Formula,
    options: &ConversionOptions,
    closure: Closure,
) -> TptpResult<String> {
    Converter::new(options.clone()).convert(formula, closure)
}

/// Parses and converts a single formula text with fresh run state.
///
/// The text must contain exactly one top-level expression.
pub fn convert_text(
    text: &str,
    options: &ConversionOptions,
    closure: Closure,
) -> TptpResult<String> {
    let (formulas, errors) = parse(text, "<text>");
    if let Some(err) = errors.into_iter().next() {
        return Err(TptpError::Parse(err));
    }
    match formulas.as_slice() {
        [formula] => convert_formula(formula, options, closure),
        [] => Err(TptpError::bad("no formula found")),
        _ => Err(TptpError::bad("expected exactly one formula")),
    }
}
