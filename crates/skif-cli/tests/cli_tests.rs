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

//! Integration tests for the `skif` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Test helper to create a skif command
fn skif_cmd() -> Command {
    Command::cargo_bin("skif").expect("Failed to find skif binary")
}

fn write_kif(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path.to_str().unwrap().to_string()
}

// ==================== convert ====================

#[test]
fn test_convert_emits_fof_document() {
    let dir = tempdir().unwrap();
    let file = write_kif(
        &dir,
        "tiny.kif",
        "(instance Socrates Human)\n(=> (instance ?X Human) (attribute ?X Mortal))\n",
    );

    skif_cmd()
        .args(["convert", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("% KB: tiny"))
        .stdout(predicate::str::contains(
            "fof(kb_tiny_1,axiom,(s__instance(s__Socrates,s__Human))).",
        ))
        .stdout(predicate::str::contains(
            "! [V__X] : (s__instance(V__X,s__Human) => s__attribute(V__X,s__Mortal))",
        ));
}

#[test]
fn test_convert_kb_name_flag() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "in.kif", "(subclass Human Hominid)\n");

    skif_cmd()
        .args(["convert", &file, "--kb-name", "SUMO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fof(kb_SUMO_1,axiom,("));
}

#[test]
fn test_convert_conjecture_question() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "fam.kif", "(parent Abel Adam)\n");

    skif_cmd()
        .args([
            "convert",
            &file,
            "--kb-name",
            "Fam",
            "--conjecture",
            "(parent Abel ?WHO)",
            "--question",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fof(prove_from_Fam,question,(? [V__WHO] :",
        ));
}

#[test]
fn test_convert_bad_conjecture_fails() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "kb.kif", "(instance A B)\n");

    skif_cmd()
        .args(["convert", &file, "--conjecture", "(instance A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_convert_skips_hol_with_warning() {
    let dir = tempdir().unwrap();
    let file = write_kif(
        &dir,
        "hol.kif",
        "(instance A B)\n(believes Sam (forall (?X) (instance ?X Entity)))\n",
    );

    skif_cmd()
        .args(["convert", &file])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped formula"))
        .stdout(predicate::str::contains("% Axioms: 1"));
}

#[test]
fn test_convert_output_file() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "kb.kif", "(instance A B)\n");
    let out = dir.path().join("kb.tptp");

    skif_cmd()
        .args(["convert", &file, "-o", out.to_str().unwrap()])
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("fof(kb_kb_1,axiom,(s__instance(s__A,s__B)))."));
}

#[test]
fn test_convert_language_tff() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "kb.kif", "(instance A B)\n");

    skif_cmd()
        .args(["convert", &file, "--language", "tff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tff(kb_kb_1,axiom,("));
}

#[test]
fn test_convert_show_numbers() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "num.kif", "(measure Rod 2.5)\n");

    skif_cmd()
        .args(["convert", &file, "--show-numbers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.5"))
        .stdout(predicate::str::contains("n__2_5").not());
}

#[test]
fn test_convert_missing_file_fails() {
    skif_cmd()
        .args(["convert", "does-not-exist.kif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.kif"));
}

// ==================== validate ====================

#[test]
fn test_validate_clean_file() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "ok.kif", "(instance A B)\n(subclass B C)\n");

    skif_cmd()
        .args(["validate", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Formulas: 2"));
}

#[test]
fn test_validate_reports_unclosed_paren() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "bad.kif", "(instance A\n");

    skif_cmd()
        .args(["validate", &file])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("problem(s) found"));
}

#[test]
fn test_validate_multiple_files() {
    let dir = tempdir().unwrap();
    let good = write_kif(&dir, "good.kif", "(instance A B)\n");
    let bad = write_kif(&dir, "bad.kif", ")\n");

    skif_cmd()
        .args(["validate", &good, &bad])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("✗"));
}

// ==================== tokens ====================

#[test]
fn test_tokens_dumps_stream() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "t.kif", "(instance ?X Human)\n");

    skif_cmd()
        .args(["tokens", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("LParen"))
        .stdout(predicate::str::contains("Variable"))
        .stdout(predicate::str::contains("\"?X\""));
}

// ==================== misc ====================

#[test]
fn test_help_lists_subcommands() {
    skif_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("tokens"));
}

#[test]
fn test_question_requires_conjecture() {
    let dir = tempdir().unwrap();
    let file = write_kif(&dir, "kb.kif", "(instance A B)\n");

    skif_cmd()
        .args(["convert", &file, "--question"])
        .assert()
        .failure();
}
