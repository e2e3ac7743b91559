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

//! Stateless translation of single SUO-KIF lexemes into TPTP lexical form.
//!
//! These functions reproduce the symbol-encoding conventions of the
//! reference SUMO translator: `V__` variable prefixing, `s__` term
//! prefixing, `n__` number encoding, the `__m` mention suffix for relations
//! used as arguments, mathematical-function renaming, comparison-operator
//! aliasing, and single-quote wrapping of names that are not bare TPTP
//! identifiers.

use crate::options::ConversionOptions;

/// SUMO mathematical function names and their TPTP spellings.
pub const MATH_FUNCTIONS: [(&str, &str); 8] = [
    ("AdditionFn", "sum"),
    ("PlusFn", "sum"),
    ("SubtractionFn", "difference"),
    ("MinusFn", "difference"),
    ("MultiplicationFn", "product"),
    ("TimesFn", "product"),
    ("DivisionFn", "quotient"),
    ("DivideFn", "quotient"),
];

/// Bare comparison operators and their named-predicate spellings. The
/// spelled-out forms (`lessThan` etc.) pass through unchanged.
pub const COMPARISON_OPERATORS: [(&str, &str); 4] = [
    ("<", "less"),
    ("<=", "lesseq"),
    (">", "greater"),
    (">=", "greatereq"),
];

/// How a symbol occurs at its use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolRole {
    /// Applied as the head of a list, or asserted alone as a sentence.
    Applied,
    /// Mentioned as a term in an argument position.
    Mentioned,
}

/// Translates a `?` variable or `@` row variable lexeme (sigil included).
///
/// Row variables denote variadic argument sequences at the KIF level but
/// are emitted as a single TPTP variable.
///
/// # Examples
///
/// ```
/// use skif_tptp::symbols::translate_variable;
///
/// assert_eq!(translate_variable("?X"), "V__X");
/// assert_eq!(translate_variable("?my-var"), "V__MY_VAR");
/// assert_eq!(translate_variable("@ROW"), "V__ROW");
/// ```
pub fn translate_variable(lexeme: &str) -> String {
    let name = lexeme
        .strip_prefix('?')
        .or_else(|| lexeme.strip_prefix('@'))
        .unwrap_or(lexeme);
    let mut out = String::with_capacity(name.len() + 3);
    out.push_str("V__");
    for ch in name.chars() {
        if ch == '-' {
            out.push('_');
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out
}

/// Translates a numeric literal.
///
/// With `hide_numbers` the literal is encoded as an `n__` constant: a
/// leading minus becomes `neg_`, the decimal point and any interior minus
/// (exponent sign) become `_`. Without it the literal passes through
/// unchanged.
///
/// # Examples
///
/// ```
/// use skif_tptp::symbols::translate_number;
///
/// assert_eq!(translate_number("0.001", true), "n__0_001");
/// assert_eq!(translate_number("-5", true), "n__neg_5");
/// assert_eq!(translate_number("1.5e-3", true), "n__1_5e_3");
/// assert_eq!(translate_number("-5", false), "-5");
/// ```
pub fn translate_number(lexeme: &str, hide_numbers: bool) -> String {
    if !hide_numbers {
        return lexeme.to_string();
    }
    let mut out = String::with_capacity(lexeme.len() + 3);
    out.push_str("n__");
    let rest = match lexeme.strip_prefix('-') {
        Some(rest) => {
            out.push_str("neg_");
            rest
        }
        None => lexeme,
    };
    for ch in rest.chars() {
        match ch {
            '.' | '-' => out.push('_'),
            _ => out.push(ch),
        }
    }
    out
}

/// Looks up the TPTP spelling for a SUMO mathematical function name.
pub fn math_alias(name: &str) -> Option<&'static str> {
    MATH_FUNCTIONS
        .iter()
        .find(|(kif, _)| *kif == name)
        .map(|(_, tptp)| *tptp)
}

/// Looks up the named-predicate spelling for a bare comparison operator.
pub fn comparison_alias(name: &str) -> Option<&'static str> {
    COMPARISON_OPERATORS
        .iter()
        .find(|(kif, _)| *kif == name)
        .map(|(_, tptp)| *tptp)
}

/// Relations from the SUMO upper ontology. Only these (plus the comparison
/// and mathematical-function spellings) take the `__m` mention suffix when
/// they appear in argument position; an arbitrary lowercase atom is an
/// ordinary constant and must keep the same name in argument and head
/// occurrences.
pub const KNOWN_RELATIONS: [&str; 26] = [
    "agent",
    "attribute",
    "believes",
    "between",
    "capability",
    "disjoint",
    "domain",
    "domainSubclass",
    "equal",
    "experiencer",
    "greaterThan",
    "greaterThanOrEqualTo",
    "holds",
    "instance",
    "instrument",
    "knows",
    "lessThan",
    "lessThanOrEqualTo",
    "located",
    "member",
    "part",
    "partition",
    "patient",
    "range",
    "subclass",
    "subrelation",
];

/// Decides whether a symbol denotes something callable (relation, operator
/// or function), which takes the `__m` mention suffix when used as a term.
///
/// Bare comparison operators, the mathematical function names, and the
/// known SUMO relations are callable; everything else is treated as an
/// ordinary constant.
///
/// # Examples
///
/// ```
/// use skif_tptp::symbols::is_callable_symbol;
///
/// assert!(is_callable_symbol("instance"));
/// assert!(is_callable_symbol("equal"));
/// assert!(is_callable_symbol("<="));
/// assert!(is_callable_symbol("AdditionFn"));
///
/// assert!(!is_callable_symbol("BinaryPredicate"));
/// assert!(!is_callable_symbol("Entity"));
/// assert!(!is_callable_symbol("my-term"));
/// ```
pub fn is_callable_symbol(name: &str) -> bool {
    comparison_alias(name).is_some()
        || math_alias(name).is_some()
        || KNOWN_RELATIONS.contains(&name)
}

/// Wraps a produced name in single quotes when it contains characters that
/// are illegal in a bare TPTP identifier.
pub fn quote_if_needed(name: String) -> String {
    let bare = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        name
    } else {
        format!("'{}'", name)
    }
}

/// Translates an atom lexeme into its TPTP form.
///
/// Applies, in order: boolean-constant handling, comparison aliasing,
/// mathematical-function renaming, the `s__` prefix, the `__m` mention
/// suffix for callable symbols in argument position, and quoting.
///
/// # Examples
///
/// ```
/// use skif_tptp::symbols::{translate_atom, SymbolRole};
/// use skif_tptp::ConversionOptions;
///
/// let options = ConversionOptions::default();
/// assert_eq!(translate_atom("instance", SymbolRole::Applied, &options), "s__instance");
/// assert_eq!(translate_atom("equal", SymbolRole::Mentioned, &options), "s__equal__m");
/// assert_eq!(translate_atom("BinaryPredicate", SymbolRole::Mentioned, &options), "s__BinaryPredicate");
/// assert_eq!(translate_atom("AdditionFn", SymbolRole::Applied, &options), "s__sum");
/// assert_eq!(translate_atom("my-term", SymbolRole::Mentioned, &options), "'s__my-term'");
/// assert_eq!(translate_atom("True", SymbolRole::Applied, &options), "$true");
/// ```
pub fn translate_atom(lexeme: &str, role: SymbolRole, options: &ConversionOptions) -> String {
    if lexeme == "True" || lexeme == "False" {
        let constant = if lexeme == "True" { "$true" } else { "$false" };
        return match role {
            SymbolRole::Applied => constant.to_string(),
            SymbolRole::Mentioned => format!("'{}__m'", constant),
        };
    }

    let name = comparison_alias(lexeme)
        .or_else(|| math_alias(lexeme))
        .unwrap_or(lexeme);

    let mut out = if options.add_prefixes {
        format!("s__{}", name)
    } else {
        name.to_string()
    };
    if role == SymbolRole::Mentioned && is_callable_symbol(lexeme) {
        out.push_str("__m");
    }
    quote_if_needed(out)
}
