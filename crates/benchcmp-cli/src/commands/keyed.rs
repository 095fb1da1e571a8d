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

//! Keyed command - GFLOPS report aligned by test key

use super::write_output;
use crate::error::CliError;
use benchcmp_core::config::DEFAULT_REPORT_PATH;
use benchcmp_core::report::render;
use benchcmp_core::{
    align, load_results, CompareError, ComparisonSummary, ReportConfig, ReportFormat,
};
use colored::Colorize;
use std::path::PathBuf;

/// Printed when either input yields no results.
pub const EMPTY_RESULTS_MESSAGE: &str = "Could not load results from one or both files. Exiting.";

/// Options for [`keyed`].
#[derive(Debug, Clone)]
pub struct KeyedOptions {
    /// Baseline results file
    pub old_file: PathBuf,
    /// Candidate results file
    pub new_file: PathBuf,
    /// Report destination
    pub output: PathBuf,
    /// Report format
    pub format: ReportFormat,
}

impl KeyedOptions {
    /// Options with the default report path and text format.
    pub fn new(old_file: impl Into<PathBuf>, new_file: impl Into<PathBuf>) -> Self {
        Self {
            old_file: old_file.into(),
            new_file: new_file.into(),
            output: PathBuf::from(DEFAULT_REPORT_PATH),
            format: ReportFormat::Text,
        }
    }

    /// Set the report destination.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the report format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Compare two results files by key and write the report.
///
/// If either file yields no results, prints a message and returns `Ok`
/// without writing anything.
///
/// # Errors
///
/// Returns `Err` if an input is missing or unreadable, or the report cannot
/// be written.
///
/// # Output
///
/// Progress lines on stdout:
/// - `Loading old results from: <path>`
/// - `Loading new results from: <path>`
/// - `✓ Comparison report successfully generated at: <path>`
/// - a summary of improved / regressed / unchanged keys
pub fn keyed(options: &KeyedOptions) -> Result<(), CliError> {
    println!("Loading old results from: {}", options.old_file.display());
    let old = load_results(&options.old_file)?;
    println!("Loading new results from: {}", options.new_file.display());
    let new = load_results(&options.new_file)?;

    let entries = match align(&old, &new) {
        Ok(entries) => entries,
        Err(CompareError::EmptyResults) => {
            println!("{}", EMPTY_RESULTS_MESSAGE);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let config = ReportConfig::default().with_format(options.format);
    let report = render(
        &entries,
        &options.old_file.to_string_lossy(),
        &options.new_file.to_string_lossy(),
        &config,
    )?;
    write_output(&report, Some(&options.output))?;

    println!(
        "{} Comparison report successfully generated at: {}",
        "✓".green().bold(),
        options.output.display()
    );
    print_summary(&ComparisonSummary::from_entries(
        &entries,
        config.change_threshold,
    ));
    Ok(())
}

fn print_summary(summary: &ComparisonSummary) {
    println!("  Compared: {}", summary.total);
    println!("  Improved: {}", summary.improved.to_string().green());
    println!("  Regressed: {}", summary.regressed.to_string().red());
    println!("  Unchanged: {}", summary.unchanged);
    if summary.only_old > 0 {
        println!("  Only in old: {}", summary.only_old.to_string().yellow());
    }
    if summary.only_new > 0 {
        println!("  Only in new: {}", summary.only_new.to_string().yellow());
    }
}
