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

//! CLI command implementations

mod completion;
mod keyed;
mod positional;

pub use completion::generate_completion_for_command;
pub use keyed::{keyed, KeyedOptions};
pub use positional::{positional, POSITIONAL_USAGE};

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file cannot be written, or stdout is closed.
///
/// # Examples
///
/// ```no_run
/// use benchcmp_cli::commands::write_output;
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchcmp_cli::error::CliError> {
/// write_output("report\n", None)?;
/// write_output("report\n", Some(Path::new("report.txt")))?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::write_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::Stdout(e.to_string())),
    }
}
