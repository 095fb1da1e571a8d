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

//! Positional command - line-by-line comparison of two logs

use super::write_output;
use crate::error::CliError;
use benchcmp_core::{compare_logs, read_file};
use std::path::Path;

/// Printed when fewer than two logs are given.
pub const POSITIONAL_USAGE: &str = "Usage: benchcmp positional <FILE_A> <FILE_B>";

/// Compare two logs positionally.
///
/// Writes file A's header, one comparison row per bench-block index, and
/// file A's footer to `output` (stdout when `None`).
///
/// # Errors
///
/// Returns `Err` if either log cannot be read or the output cannot be
/// written.
///
/// # Examples
///
/// ```no_run
/// use benchcmp_cli::commands::positional;
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchcmp_cli::error::CliError> {
/// positional(Path::new("cpu.txt"), Path::new("cuda.txt"), None)?;
/// # Ok(())
/// # }
/// ```
pub fn positional(file_a: &Path, file_b: &Path, output: Option<&Path>) -> Result<(), CliError> {
    tracing::debug!(a = %file_a.display(), b = %file_b.display(), "positional comparison");

    let text_a = read_file(file_a)?;
    let text_b = read_file(file_b)?;

    write_output(&compare_logs(&text_a, &text_b), output)
}
