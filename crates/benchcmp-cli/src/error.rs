// Dweve BenchCmp - Benchmark Run Comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Structured error types for the BenchCmp CLI.

use benchcmp_core::CompareError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchcmp_cli::error::CliError;
///
/// fn write_report(path: &str, report: &str) -> Result<(), CliError> {
///     std::fs::write(path, report).map_err(|e| CliError::write_error(path, e))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Loading, aligning or rendering failed.
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// Writing the report failed.
    #[error("Failed to write '{}': {message}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Writing to stdout failed.
    #[error("Failed to write to stdout: {0}")]
    Stdout(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create a write error with file path context.
    pub fn write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
