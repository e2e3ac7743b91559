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

//! Syntax tree for SUO-KIF expressions.
//!
//! The tree is a closed sum type: a node is either a parenthesized list or
//! a leaf term, and leaf terms carry one of five kinds. Nodes are immutable
//! once built; a list exclusively owns its children.

use std::fmt;

use crate::lex::Span;

/// The kind of a leaf term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TermKind {
    /// A constant, functor, or operator symbol.
    Atom,
    /// A string literal (stored without quotes).
    String,
    /// A numeric literal.
    Number,
    /// A `?` variable.
    Variable,
    /// A `@` row variable.
    RowVariable,
}

/// A node in a SUO-KIF syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstNode {
    /// A parenthesized list `( child* )`.
    List { children: Vec<AstNode>, span: Span },
    /// A leaf term; `value` keeps the original lexeme (with sigil for
    /// variables, without quotes for strings).
    Term {
        kind: TermKind,
        value: String,
        span: Span,
    },
}

impl AstNode {
    /// The source span this node covers.
    pub fn span(&self) -> Span {
        match self {
            AstNode::List { span, .. } => *span,
            AstNode::Term { span, .. } => *span,
        }
    }

    /// Returns `true` if this node is a list.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, AstNode::List { .. })
    }

    /// The children of a list node, or an empty slice for a leaf.
    pub fn children(&self) -> &[AstNode] {
        match self {
            AstNode::List { children, .. } => children,
            AstNode::Term { .. } => &[],
        }
    }

    /// The first child of a list node, if any.
    pub fn head(&self) -> Option<&AstNode> {
        self.children().first()
    }

    /// The text of this list's head, when the head is a leaf term.
    ///
    /// ```
    /// use skif_core::parse;
    ///
    /// let (formulas, _) = parse("(instance Foo Bar)", "t");
    /// assert_eq!(formulas[0].node.head_text(), Some("instance"));
    /// ```
    pub fn head_text(&self) -> Option<&str> {
        match self.head() {
            Some(AstNode::Term { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// The kind and value of a leaf term, or `None` for a list.
    pub fn as_term(&self) -> Option<(TermKind, &str)> {
        match self {
            AstNode::Term { kind, value, .. } => Some((*kind, value)),
            AstNode::List { .. } => None,
        }
    }

    /// Returns `true` if this leaf is a variable or row variable.
    pub fn is_variable(&self) -> bool {
        matches!(
            self,
            AstNode::Term {
                kind: TermKind::Variable | TermKind::RowVariable,
                ..
            }
        )
    }
}

impl fmt::Display for AstNode {
    /// Re-prints the node as canonical KIF (single spaces, quotes restored).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::List { children, .. } => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            AstNode::Term { kind, value, .. } => match kind {
                TermKind::String => write!(f, "\"{}\"", value),
                _ => write!(f, "{}", value),
            },
        }
    }
}
