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

//! Validate command - SUO-KIF file syntax checking

use colored::Colorize;
use skif_core::lex::tokenize;
use skif_core::parse_tokens;

use super::read_file;
use crate::cli::ValidateArgs;
use crate::error::CliError;

/// Checks SUO-KIF files for lexical and structural problems.
///
/// Every diagnostic is printed with its file, line and column. The command
/// succeeds only when every file is clean.
pub fn validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut problems = 0;

    for path in &args.files {
        let text = read_file(path)?;
        let file_name = path.to_string_lossy();
        let (tokens, lex_errors) = tokenize(&text, &file_name);
        let (formulas, parse_errors) = parse_tokens(&tokens, &text, &file_name);

        for err in &lex_errors {
            println!("{} {}", "✗".red().bold(), err);
        }
        for err in &parse_errors {
            println!("{} {}", "✗".red().bold(), err);
        }

        if lex_errors.is_empty() && parse_errors.is_empty() {
            println!("{} {}", "✓".green().bold(), file_name);
            println!("  Formulas: {}", formulas.len());
        }
        problems += lex_errors.len() + parse_errors.len();
    }

    if problems > 0 {
        return Err(CliError::ValidationFailed { problems });
    }
    Ok(())
}
