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

//! Tokens command - token stream dump for debugging

use colored::Colorize;
use skif_core::lex::tokenize;

use super::read_file;
use crate::cli::TokensArgs;
use crate::error::CliError;

/// Prints the token stream of a SUO-KIF file, one token per line.
pub fn tokens(args: TokensArgs) -> Result<(), CliError> {
    let text = read_file(&args.file)?;
    let file_name = args.file.to_string_lossy();
    let (tokens, errors) = tokenize(&text, &file_name);

    for token in &tokens {
        println!("{} {:?} {:?}", token.span, token.kind, token.text);
    }
    for err in &errors {
        eprintln!("{} {}", "✗".red().bold(), err);
    }
    Ok(())
}
