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

//! Convert command - SUO-KIF files to a TPTP document

use colored::Colorize;
use skif_core::parse;
use skif_tptp::convert_formulas;

use super::{read_file, write_output};
use crate::cli::ConvertArgs;
use crate::error::CliError;

/// Converts one or more SUO-KIF files into a single TPTP document.
///
/// Each file is split into its top-level formulas; the batch is then
/// translated as one knowledge base. Formulas that cannot be translated
/// (higher-order constructs, parse errors) are reported on stderr and
/// skipped, matching the assembler's policy. A conjecture failure is fatal.
pub fn convert(args: ConvertArgs) -> Result<(), CliError> {
    let kb_name = match &args.kb_name {
        Some(name) => name.clone(),
        None => args.files[0]
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "kb".to_string()),
    };

    let mut sources = Vec::new();
    for path in &args.files {
        let text = read_file(path)?;
        let file_name = path.to_string_lossy();
        let (formulas, errors) = parse(&text, &file_name);
        for err in &errors {
            eprintln!("{} {}", "warning:".yellow().bold(), err);
        }
        sources.extend(formulas.into_iter().map(|f| f.source));
    }

    let doc = convert_formulas(
        &sources,
        &kb_name,
        args.conjecture.as_deref(),
        args.question,
        &args.options(),
    )?;

    for skipped in &doc.skipped {
        eprintln!(
            "{} skipped formula: {}",
            "warning:".yellow().bold(),
            skipped.error
        );
        eprintln!("  {}", skipped.source);
    }

    write_output(&doc.content, args.output.as_deref())?;

    eprintln!(
        "{} {} axiom(s), {} skipped",
        "done:".green().bold(),
        doc.axiom_count,
        doc.skipped.len()
    );
    Ok(())
}
