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

//! Conversion configuration.
//!
//! Options are an explicit value passed into every conversion entry point,
//! never module-level state, so independent conversions are safe to run
//! concurrently.

use std::fmt;

/// The TPTP dialect to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputLanguage {
    /// First-order form (`fof`). The default.
    #[default]
    Fof,
    /// Typed first-order form (`tff`).
    Tff,
    /// Typed higher-order form (`thf`).
    Thf,
}

impl OutputLanguage {
    /// The formula-line keyword for this dialect.
    pub fn keyword(&self) -> &'static str {
        match self {
            OutputLanguage::Fof => "fof",
            OutputLanguage::Tff => "tff",
            OutputLanguage::Thf => "thf",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Options for a single conversion run.
///
/// # Examples
///
/// ```
/// use skif_tptp::{ConversionOptions, OutputLanguage};
///
/// let options = ConversionOptions::default()
///     .with_hide_numbers(false)
///     .with_language(OutputLanguage::Tff);
/// assert!(!options.hide_numbers);
/// assert_eq!(options.language, OutputLanguage::Tff);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionOptions {
    /// Encode numeric literals as `n__` constants instead of passing them
    /// through unchanged.
    pub hide_numbers: bool,
    /// Apply the `s__` prefix to constants and predicates. Variables always
    /// get `V__` since TPTP requires uppercase-initial variable names.
    pub add_prefixes: bool,
    /// Elide string-literal arguments instead of interning them as `str_N`
    /// constants. Only for contexts where literal text is not load-bearing.
    pub remove_strings: bool,
    /// TPTP dialect for emitted formula lines.
    pub language: OutputLanguage,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            hide_numbers: true,
            add_prefixes: true,
            remove_strings: false,
            language: OutputLanguage::Fof,
        }
    }
}

impl ConversionOptions {
    /// Sets whether numbers are hidden behind `n__` constants.
    pub fn with_hide_numbers(mut self, hide: bool) -> Self {
        self.hide_numbers = hide;
        self
    }

    /// Sets whether the `s__` prefix is applied.
    pub fn with_add_prefixes(mut self, add: bool) -> Self {
        self.add_prefixes = add;
        self
    }

    /// Sets whether string literals are elided.
    pub fn with_remove_strings(mut self, remove: bool) -> Self {
        self.remove_strings = remove;
        self
    }

    /// Sets the output dialect.
    pub fn with_language(mut self, language: OutputLanguage) -> Self {
        self.language = language;
        self
    }
}
