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

//! A parsed top-level SUO-KIF formula.

use std::sync::Arc;

use crate::ast::AstNode;

/// One top-level SUO-KIF expression together with the exact source slice it
/// was parsed from. The original text is kept for trace comments in emitted
/// TPTP documents and for dedup keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// The parsed syntax tree.
    pub node: AstNode,
    /// The exact source text of this expression.
    pub source: String,
    /// Label of the file or buffer the formula came from.
    pub file: Arc<str>,
}

impl Formula {
    /// Creates a formula from a node and its source slice.
    pub fn new(node: AstNode, source: impl Into<String>, file: Arc<str>) -> Self {
        Self {
            node,
            source: source.into(),
            file,
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
