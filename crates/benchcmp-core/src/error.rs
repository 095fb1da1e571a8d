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

//! Error types for benchmark log comparison.
//!
//! Malformed log lines are never errors: the parsers return `Option` and the
//! line is skipped or passed through. Only whole-run failures end up here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors raised while loading, aligning or rendering benchmark results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    /// Input file does not exist.
    #[error("File not found at {}", .path.display())]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// Any other I/O failure (permissions, invalid UTF-8, write errors).
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)", .path.display())]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// One or both inputs produced no parsable benchmark lines.
    #[error("Could not load results from one or both files")]
    EmptyResults,

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization failed.
    #[error("JSON format error: {0}")]
    Json(String),
}

impl CompareError {
    /// Create an I/O error with file path context.
    ///
    /// `NotFound` errors are mapped to [`CompareError::NotFound`] so callers
    /// can report a missing input distinctly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use benchcmp_core::CompareError;
    /// use std::io;
    ///
    /// let err = CompareError::io_error("old.txt", io::Error::from(io::ErrorKind::NotFound));
    /// assert_eq!(err.to_string(), "File not found at old.txt");
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io {
                path,
                message: source.to_string(),
            },
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CompareError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}
