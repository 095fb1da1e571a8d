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

//! Whole-file reads with a size limit.

use crate::config::{DEFAULT_MAX_FILE_SIZE, MAX_FILE_SIZE_ENV};
use crate::error::{CompareError, Result};
use std::fs;
use std::path::Path;

/// Get the maximum file size from the environment or use the default.
fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a benchmark log from disk into memory.
///
/// The size is checked before reading; files above the limit (default 1 GB,
/// overridable via `BENCHCMP_MAX_FILE_SIZE`) are rejected.
///
/// # Errors
///
/// - [`CompareError::NotFound`] if the file does not exist
/// - [`CompareError::FileTooLarge`] if the file exceeds the size limit
/// - [`CompareError::Io`] for any other read failure, including invalid UTF-8
///
/// # Examples
///
/// ```no_run
/// use benchcmp_core::read_file;
///
/// # fn main() -> Result<(), benchcmp_core::CompareError> {
/// let content = read_file("baseline.txt")?;
/// println!("{} lines", content.lines().count());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CompareError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(CompareError::file_too_large(path, metadata.len(), max));
    }

    let content = fs::read_to_string(path).map_err(|e| CompareError::io_error(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read input file");
    Ok(content)
}
