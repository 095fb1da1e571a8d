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

//! CLI command definitions and argument parsing.
//!
//! - [`compare`]: the two comparison commands (positional, keyed)
//! - [`utility`]: utility commands (completion)

mod compare;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use compare::CompareCommands;
pub use utility::UtilityCommands;

/// BenchCmp - compare two benchmark-run logs
///
/// Aligns the results of a baseline run and a candidate run and reports the
/// throughput change per test.
#[derive(Parser)]
#[command(name = "benchcmp")]
#[command(author, version, about = "BenchCmp - compare two benchmark-run logs", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Compare (positional, keyed)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Comparison commands - flattened to appear at top level
    #[command(flatten)]
    Compare(CompareCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input cannot be read, the report cannot be
    /// written, or an argument is invalid.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Compare(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_keyed_defaults() {
        let cli = Cli::try_parse_from(["benchcmp", "keyed", "old.txt", "new.txt"]).unwrap();
        match cli.command {
            Commands::Compare(CompareCommands::Keyed { output, format, .. }) => {
                assert_eq!(output.to_str(), Some("comparison_report.txt"));
                assert_eq!(format, "text");
            }
            _ => panic!("expected keyed command"),
        }
    }

    #[test]
    fn test_parse_positional_without_files() {
        let cli = Cli::try_parse_from(["benchcmp", "positional"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Compare(CompareCommands::Positional { file_a: None, .. })
        ));
    }

    #[test]
    fn test_keyed_requires_both_files() {
        assert!(Cli::try_parse_from(["benchcmp", "keyed", "old.txt"]).is_err());
    }
}
