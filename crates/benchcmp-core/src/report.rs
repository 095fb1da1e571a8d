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

//! Keyed report rendering (text table and JSON).
//!
//! # Text layout
//!
//! ```text
//! Test Configuration      Old GFLOPS      New GFLOPS      Change (%)
//! ------------------------------------------------------------------
//! <key padded to 95>      10.00           20.00           +100.00%
//! ```
//!
//! The header's key column is `longest key + 2` wide while data rows always
//! use [`KEY_COLUMN_WIDTH`](crate::config::KEY_COLUMN_WIDTH) (95), so the
//! header and divider usually do not line up with the rows. Both widths are
//! part of the report format and must not be unified.

use crate::compare::{ComparisonEntry, ComparisonSummary};
use crate::config::{
    ReportConfig, ReportFormat, CHANGE_THRESHOLD_PERCENT, HEADER_KEY_PADDING, MISSING_CELL,
};
use crate::error::Result;
use serde::Serialize;

/// Format a percentage change with the default threshold.
///
/// # Examples
///
/// ```
/// use benchcmp_core::format_change;
///
/// assert_eq!(format_change(5.0), "+5.00%");
/// assert_eq!(format_change(-5.0), "-5.00%");
/// assert_eq!(format_change(0.05), " ~0.00%");
/// ```
pub fn format_change(change: f64) -> String {
    format_change_with(change, CHANGE_THRESHOLD_PERCENT)
}

/// Format a percentage change; values in `[-threshold, threshold]` render
/// as ` ~0.00%` (leading space included).
pub fn format_change_with(change: f64, threshold: f64) -> String {
    if change > threshold {
        format!("+{:.2}%", change)
    } else if change < -threshold {
        format!("{:.2}%", change)
    } else {
        " ~0.00%".to_string()
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => MISSING_CELL.to_string(),
    }
}

/// Header line sized by the longest key, and a matching dash divider.
fn header_lines(entries: &[ComparisonEntry], config: &ReportConfig) -> (String, String) {
    let key_width = entries
        .iter()
        .map(|e| e.key.chars().count())
        .max()
        .unwrap_or(0)
        + HEADER_KEY_PADDING;
    let vw = config.value_width;

    let header = format!(
        "{:<key_width$} {:>vw$} {:>vw$} {:>vw$}",
        "Test Configuration", "Old GFLOPS", "New GFLOPS", "Change (%)"
    );
    let divider = "-".repeat(header.chars().count());
    (header, divider)
}

/// Render one data row (without trailing newline).
pub fn render_row(entry: &ComparisonEntry, config: &ReportConfig) -> String {
    let kw = config.key_width;
    let vw = config.value_width;
    format!(
        "{:<kw$} {:>vw$} {:>vw$} {:>vw$}",
        entry.key,
        format_value(entry.old),
        format_value(entry.new),
        format_change_with(entry.change_percent, config.change_threshold)
    )
}

/// Render the fixed-width text report: header, divider, one row per entry.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{render_text, ComparisonEntry, ReportConfig};
///
/// let entries = vec![ComparisonEntry::new("A", Some(10.0), Some(20.0))];
/// let report = render_text(&entries, &ReportConfig::default());
/// let lines: Vec<&str> = report.lines().collect();
///
/// assert_eq!(lines.len(), 3);
/// assert!(lines[0].starts_with("Test Configuration"));
/// assert!(lines[2].ends_with("+100.00%"));
/// ```
pub fn render_text(entries: &[ComparisonEntry], config: &ReportConfig) -> String {
    let (header, divider) = header_lines(entries, config);

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    for entry in entries {
        out.push_str(&render_row(entry, config));
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    old_file: &'a str,
    new_file: &'a str,
    threshold_percent: f64,
    summary: ComparisonSummary,
    entries: &'a [ComparisonEntry],
}

/// Render the report as pretty-printed JSON.
///
/// Missing values serialize as `null`.
pub fn render_json(
    entries: &[ComparisonEntry],
    old_file: &str,
    new_file: &str,
    config: &ReportConfig,
) -> Result<String> {
    let report = JsonReport {
        old_file,
        new_file,
        threshold_percent: config.change_threshold,
        summary: ComparisonSummary::from_entries(entries, config.change_threshold),
        entries,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Render in the format selected by `config`.
pub fn render(
    entries: &[ComparisonEntry],
    old_file: &str,
    new_file: &str,
    config: &ReportConfig,
) -> Result<String> {
    match config.format {
        ReportFormat::Text => Ok(render_text(entries, config)),
        ReportFormat::Json => render_json(entries, old_file, new_file, config),
    }
}
