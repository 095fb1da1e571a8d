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

//! Centralized comparison configuration.
//!
//! Every literal that is part of the parsing or rendering contract lives here
//! as a named constant, so the exact output format can be tested directly.

use crate::error::CompareError;
use std::fmt;
use std::str::FromStr;

/// Substring that marks a benchmark line in positional mode.
pub const BENCH_LINE_MARKER: &str = "GB/s";

/// Literal that terminates a test signature.
pub const SIGNATURE_TERMINATOR: &str = "):";

/// Placeholder for an absent value in positional rows.
pub const MISSING_VALUE: &str = "x";

/// Placeholder for an absent value in keyed reports.
pub const MISSING_CELL: &str = "N/A";

/// Width of the key column in keyed report rows.
///
/// Fixed, independent of the longest key. The report header uses
/// `longest key + HEADER_KEY_PADDING` instead, so the two disagree.
pub const KEY_COLUMN_WIDTH: usize = 95;

/// Width of the old/new/change columns in keyed reports.
pub const VALUE_COLUMN_WIDTH: usize = 15;

/// Padding added to the longest key when sizing the report header.
pub const HEADER_KEY_PADDING: usize = 2;

/// Changes with magnitude at or below this percentage render as ` ~0.00%`.
pub const CHANGE_THRESHOLD_PERCENT: f64 = 0.1;

/// GFLOPS in one TFLOPS (TFLOPS values are multiplied by this).
pub const GFLOPS_PER_TFLOPS: f64 = 1000.0;

/// MFLOPS in one GFLOPS (MFLOPS values are divided by this).
pub const MFLOPS_PER_GFLOPS: f64 = 1000.0;

/// Default path of the keyed report file.
pub const DEFAULT_REPORT_PATH: &str = "comparison_report.txt";

/// Default maximum input file size (1 GB).
/// Can be overridden via the `BENCHCMP_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "BENCHCMP_MAX_FILE_SIZE";

/// Output format of the keyed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Fixed-width text table.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CompareError::invalid_input(format!(
                "Unsupported report format: '{}'. Supported formats: text, json",
                other
            ))),
        }
    }
}

/// Keyed report rendering configuration.
///
/// `ReportConfig::default()` reproduces the exact report layout; the builder
/// methods exist for callers that want wider columns or a different
/// "no change" band.
///
/// # Example
///
/// ```
/// use benchcmp_core::config::{ReportConfig, ReportFormat, KEY_COLUMN_WIDTH};
///
/// let config = ReportConfig::default().with_format(ReportFormat::Json);
/// assert_eq!(config.key_width, KEY_COLUMN_WIDTH);
/// assert_eq!(config.format, ReportFormat::Json);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Width of the key column in data rows.
    pub key_width: usize,
    /// Width of each numeric column.
    pub value_width: usize,
    /// Half-width of the band rendered as ` ~0.00%`.
    pub change_threshold: f64,
    /// Output format.
    pub format: ReportFormat,
}

impl ReportConfig {
    /// Sets the key column width used for data rows.
    pub fn with_key_width(mut self, width: usize) -> Self {
        self.key_width = width;
        self
    }

    /// Sets the numeric column width.
    pub fn with_value_width(mut self, width: usize) -> Self {
        self.value_width = width;
        self
    }

    /// Sets the "no change" threshold in percent.
    pub fn with_change_threshold(mut self, threshold: f64) -> Self {
        self.change_threshold = threshold;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            key_width: KEY_COLUMN_WIDTH,
            value_width: VALUE_COLUMN_WIDTH,
            change_threshold: CHANGE_THRESHOLD_PERCENT,
            format: ReportFormat::Text,
        }
    }
}
