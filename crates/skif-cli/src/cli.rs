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

//! CLI command definitions and argument parsing.

use std::fmt;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use skif_tptp::{ConversionOptions, OutputLanguage};

use crate::commands;
use crate::error::CliError;

/// The TPTP dialect flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LanguageArg {
    /// First-order form.
    #[default]
    Fof,
    /// Typed first-order form.
    Tff,
    /// Typed higher-order form.
    Thf,
}

impl fmt::Display for LanguageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LanguageArg::Fof => "fof",
            LanguageArg::Tff => "tff",
            LanguageArg::Thf => "thf",
        })
    }
}

impl From<LanguageArg> for OutputLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Fof => OutputLanguage::Fof,
            LanguageArg::Tff => OutputLanguage::Tff,
            LanguageArg::Thf => OutputLanguage::Thf,
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert SUO-KIF files into one TPTP document.
    Convert(ConvertArgs),
    /// Check SUO-KIF files for lexical and structural problems.
    Validate(ValidateArgs),
    /// Dump the token stream of a SUO-KIF file (debugging aid).
    Tokens(TokensArgs),
}

/// Arguments for `skif convert`.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// SUO-KIF input files, combined into a single knowledge base.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Knowledge-base name used in axiom names (default: first file stem).
    #[arg(long)]
    pub kb_name: Option<String>,

    /// A SUO-KIF conjecture to append, existentially closed.
    #[arg(long)]
    pub conjecture: Option<String>,

    /// Give the conjecture the `question` role instead of `conjecture`.
    #[arg(long, requires = "conjecture")]
    pub question: bool,

    /// TPTP dialect to emit.
    #[arg(long, value_enum, default_value_t)]
    pub language: LanguageArg,

    /// Pass numeric literals through instead of hiding them as `n__`
    /// constants.
    #[arg(long)]
    pub show_numbers: bool,

    /// Elide string-literal arguments instead of interning them.
    #[arg(long)]
    pub remove_strings: bool,

    /// Do not apply the `s__` prefix to constants and predicates.
    #[arg(long)]
    pub no_prefixes: bool,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ConvertArgs {
    /// Conversion options derived from the flags.
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions::default()
            .with_hide_numbers(!self.show_numbers)
            .with_add_prefixes(!self.no_prefixes)
            .with_remove_strings(self.remove_strings)
            .with_language(self.language.into())
    }
}

/// Arguments for `skif validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// SUO-KIF files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `skif tokens`.
#[derive(clap::Args)]
pub struct TokensArgs {
    /// SUO-KIF file to tokenize.
    pub file: PathBuf,
}

impl Commands {
    /// Executes the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Convert(args) => commands::convert(args),
            Commands::Validate(args) => commands::validate(args),
            Commands::Tokens(args) => commands::tokens(args),
        }
    }
}
