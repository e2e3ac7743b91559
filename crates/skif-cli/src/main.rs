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

//! SKIF Command Line Interface

use clap::Parser;
use skif_cli::cli::Commands;
use std::process::ExitCode;

/// SKIF - SUO-KIF to TPTP translation toolkit
///
/// Translates SUO-KIF knowledge bases (the LISP-like notation used by the
/// SUMO ontology) into TPTP problem files suitable for automated theorem
/// provers.
///
/// # Examples
///
/// ```bash
/// # Convert a knowledge base
/// skif convert Merge.kif --kb-name SUMO -o sumo.tptp
///
/// # Convert with a query
/// skif convert Merge.kif --conjecture "(instance ?X Human)" --question
///
/// # Check files for syntax problems
/// skif validate Merge.kif Mid-level-ontology.kif
/// ```
#[derive(Parser)]
#[command(name = "skif")]
#[command(author, version, about = "SKIF - SUO-KIF to TPTP translation toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
