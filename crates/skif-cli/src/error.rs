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

//! Structured error types for the SKIF CLI.

use std::path::PathBuf;

use skif_tptp::TptpError;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (file read or write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// Validation found lexical or structural problems.
    #[error("{problems} problem(s) found")]
    ValidationFailed {
        /// Number of diagnostics reported.
        problems: usize,
    },

    /// Conversion to TPTP failed at the batch level.
    #[error("conversion failed: {0}")]
    Conversion(#[from] TptpError),
}

impl CliError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_path() {
        let err = CliError::io(
            "missing.kif",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("missing.kif"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_conversion_error_converts() {
        let err: CliError = TptpError::bad("oops").into();
        assert!(format!("{}", err).contains("oops"));
    }
}
