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

//! Comparison commands.

use crate::commands::{self, KeyedOptions};
use crate::error::CliError;
use benchcmp_core::config::DEFAULT_REPORT_PATH;
use clap::Subcommand;
use std::path::PathBuf;

/// Comparison commands.
#[derive(Subcommand)]
pub enum CompareCommands {
    /// Compare two logs line by line
    ///
    /// Splits each log into header, bench block (the first run of lines
    /// containing "GB/s") and footer, then pairs bench lines by position.
    /// Prints file A's header, one row per pair, and file A's footer.
    /// Each row ends in 0 if A is faster, 1 if B is faster or equal, x if
    /// a value is missing.
    #[command(visible_alias = "ops")]
    Positional {
        /// First log (A)
        #[arg(value_name = "FILE_A")]
        file_a: Option<PathBuf>,

        /// Second log (B)
        #[arg(value_name = "FILE_B")]
        file_b: Option<PathBuf>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two logs by test key and write a GFLOPS report
    ///
    /// Parses every "key: ... <value> GFLOPS|TFLOPS|MFLOPS" line, normalizes
    /// to GFLOPS, aligns the two runs by key and writes old, new and
    /// percentage change per key.
    #[command(visible_alias = "flops")]
    Keyed {
        /// Baseline results file
        #[arg(value_name = "OLD_FILE")]
        old_file: PathBuf,

        /// Candidate results file
        #[arg(value_name = "NEW_FILE")]
        new_file: PathBuf,

        /// Report file path
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Report format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

impl CompareCommands {
    /// Execute the comparison command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CompareCommands::Positional {
                file_a,
                file_b,
                output,
            } => match (file_a, file_b) {
                (Some(a), Some(b)) => commands::positional(&a, &b, output.as_deref()),
                _ => {
                    println!("{}", commands::POSITIONAL_USAGE);
                    Ok(())
                }
            },
            CompareCommands::Keyed {
                old_file,
                new_file,
                output,
                format,
            } => {
                let options = KeyedOptions {
                    old_file,
                    new_file,
                    output,
                    format: format.parse()?,
                };
                commands::keyed(&options)
            }
        }
    }
}
