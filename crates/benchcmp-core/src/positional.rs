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

//! Positional comparison: lines are paired by their index in each log's
//! bench block, not by key.
//!
//! A row looks like
//!
//! ```text
//! MUL_MAT(type_a=f32,type_b=f32): 81.01 GB/s  95.2 GB/s  1
//! ```
//!
//! i.e. `{signature} {value_a} {unit_a}  {value_b} {unit_b}  {winner}`.

use crate::config::{BENCH_LINE_MARKER, MISSING_VALUE};
use crate::section::{is_bench_line, LogSections};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// A number followed by whitespace and one non-space token.
static VALUE_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s+(\S+)").expect("valid value/unit regex"));

/// Shortest prefix ending in `):`, after leading whitespace.
static SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(.*?\):)").expect("valid signature regex"));

/// A throughput value and its unit as written in the log.
///
/// An absent value is distinct from zero and renders as `x`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThroughputReading {
    /// Parsed value, if the line had one.
    pub value: Option<f64>,
    /// Unit token, verbatim. Empty when the value is absent.
    pub unit: String,
}

impl ThroughputReading {
    /// A reading with a value.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            unit: unit.into(),
        }
    }

    /// A reading with no value and an empty unit.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Returns `true` if a value was extracted.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The value cell: the number (always with a fractional part, e.g.
    /// `100.0`) or `x`.
    pub fn value_cell(&self) -> String {
        match self.value {
            Some(v) => format!("{:?}", v),
            None => MISSING_VALUE.to_string(),
        }
    }

    /// The unit cell: the unit, or empty when the value is absent.
    pub fn unit_cell(&self) -> &str {
        if self.value.is_some() {
            &self.unit
        } else {
            ""
        }
    }
}

/// Which side of a positional row had the higher throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// Line A was strictly higher.
    A,
    /// Line B was higher or equal. Ties go to B.
    B,
    /// At least one side had no value.
    Undecided,
}

impl Winner {
    /// Decide the winner between two optional values.
    pub fn decide(a: Option<f64>, b: Option<f64>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) if a > b => Self::A,
            (Some(_), Some(_)) => Self::B,
            _ => Self::Undecided,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "0"),
            Self::B => write!(f, "1"),
            Self::Undecided => write!(f, "{}", MISSING_VALUE),
        }
    }
}

/// Extract the throughput from a benchmark line.
///
/// Lines carry several number/unit pairs (runs, time, FLOP count,
/// throughput); the rightmost pair is the throughput. The unit is returned
/// verbatim.
///
/// # Examples
///
/// ```
/// use benchcmp_core::extract_throughput;
///
/// let r = extract_throughput("744 runs - 1660.11 us/run - 134.48 MFLOP/run - 81.01 GFLOPS");
/// assert_eq!(r.value, Some(81.01));
/// assert_eq!(r.unit, "GFLOPS");
///
/// assert!(!extract_throughput("no numbers here").is_present());
/// ```
pub fn extract_throughput(line: &str) -> ThroughputReading {
    let Some(caps) = VALUE_UNIT.captures_iter(line).last() else {
        return ThroughputReading::absent();
    };

    match caps[1].parse::<f64>() {
        Ok(value) => ThroughputReading::new(value, &caps[2]),
        Err(_) => ThroughputReading::absent(),
    }
}

/// Extract the test signature: everything up to and including the first `):`,
/// with leading whitespace removed.
///
/// # Examples
///
/// ```
/// use benchcmp_core::extract_signature;
///
/// assert_eq!(
///     extract_signature("  MUL_MAT(type_a=f32,type_b=f32):  some stats").as_deref(),
///     Some("MUL_MAT(type_a=f32,type_b=f32):")
/// );
/// assert_eq!(extract_signature("no signature"), None);
/// ```
pub fn extract_signature(line: &str) -> Option<String> {
    SIGNATURE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Build one comparison row from the lines at the same index in both logs.
///
/// If neither line is a bench line, line A is passed through with trailing
/// whitespace removed. Otherwise the signature comes from line A, then
/// line B, then line A's full text.
pub fn build_row(line_a: &str, line_b: &str) -> String {
    let a_is_bench = is_bench_line(line_a);
    let b_is_bench = is_bench_line(line_b);

    if !a_is_bench && !b_is_bench {
        return line_a.trim_end().to_string();
    }

    let signature = extract_signature(line_a)
        .or_else(|| extract_signature(line_b))
        .unwrap_or_else(|| line_a.trim_end().to_string());

    let reading_a = side_reading(line_a, a_is_bench);
    let reading_b = side_reading(line_b, b_is_bench);
    let winner = Winner::decide(reading_a.value, reading_b.value);

    format!(
        "{} {} {}  {} {}  {}",
        signature,
        reading_a.value_cell(),
        reading_a.unit_cell(),
        reading_b.value_cell(),
        reading_b.unit_cell(),
        winner
    )
}

fn side_reading(line: &str, is_bench: bool) -> ThroughputReading {
    if is_bench {
        extract_throughput(line)
    } else {
        ThroughputReading::absent()
    }
}

/// Compare two raw logs positionally.
///
/// Output: log A's header verbatim, one blank line, one row per bench-block
/// index (the shorter block is padded with empty lines), then log A's footer
/// verbatim. Log B's header and footer are ignored.
pub fn compare_logs(text_a: &str, text_b: &str) -> String {
    let sections_a = LogSections::from_text(text_a);
    let sections_b = LogSections::from_text(text_b);

    tracing::debug!(
        bench_a = sections_a.bench.len(),
        bench_b = sections_b.bench.len(),
        marker = BENCH_LINE_MARKER,
        "split logs"
    );
    if sections_a.bench.len() != sections_b.bench.len() {
        tracing::warn!(
            bench_a = sections_a.bench.len(),
            bench_b = sections_b.bench.len(),
            "bench blocks differ in length, padding the shorter one"
        );
    }

    let mut out = String::new();
    for line in &sections_a.header {
        out.push_str(line);
    }
    out.push('\n');

    let rows = sections_a.bench.len().max(sections_b.bench.len());
    for i in 0..rows {
        let line_a = sections_a.bench.get(i).copied().unwrap_or("");
        let line_b = sections_b.bench.get(i).copied().unwrap_or("");
        out.push_str(&build_row(line_a, line_b));
        out.push('\n');
    }

    for line in &sections_a.footer {
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "  MUL_MAT(type_a=f32,type_b=f32): 744 runs - 1660.11 us/run - 81.01 GB/s";

    fn bench(sig: &str, value: &str) -> String {
        format!("  {}: 10 runs - {} GB/s", sig, value)
    }

    #[test]
    fn test_extract_throughput_last_match_wins() {
        let r = extract_throughput("744 runs - 1660.11 us/run - 134.48 MFLOP/run - 81.01 GFLOPS");
        assert_eq!(r, ThroughputReading::new(81.01, "GFLOPS"));
    }

    #[test]
    fn test_extract_throughput_absent() {
        assert_eq!(extract_throughput(""), ThroughputReading::absent());
        assert_eq!(extract_throughput("GB/s only"), ThroughputReading::absent());
        assert_eq!(extract_throughput("42"), ThroughputReading::absent());
    }

    #[test]
    fn test_extract_throughput_integer() {
        let r = extract_throughput("ADD: 7 GB/s");
        assert_eq!(r.value, Some(7.0));
        assert_eq!(r.value_cell(), "7.0");
    }

    #[test]
    fn test_extract_signature() {
        assert_eq!(
            extract_signature(LINE).as_deref(),
            Some("MUL_MAT(type_a=f32,type_b=f32):")
        );
        assert_eq!(extract_signature("A(x): B(y): rest").as_deref(), Some("A(x):"));
        assert_eq!(extract_signature("no close paren: here"), None);
        assert_eq!(extract_signature(""), None);
    }

    #[test]
    fn test_winner_a_higher() {
        let row = build_row(&bench("OP(a)", "100"), &bench("OP(a)", "50"));
        assert_eq!(row, "OP(a): 100.0 GB/s  50.0 GB/s  0");
    }

    #[test]
    fn test_winner_b_higher() {
        let row = build_row(&bench("OP(a)", "50"), &bench("OP(a)", "100"));
        assert!(row.ends_with("  1"));
    }

    #[test]
    fn test_tie_goes_to_b() {
        let row = build_row(&bench("OP(a)", "50"), &bench("OP(a)", "50"));
        assert_eq!(row, "OP(a): 50.0 GB/s  50.0 GB/s  1");
    }

    #[test]
    fn test_missing_side() {
        let row = build_row(&bench("OP(a)", "50"), "");
        assert_eq!(row, "OP(a): 50.0 GB/s  x   x");
    }

    #[test]
    fn test_signature_falls_back_to_line_b() {
        let row = build_row("", &bench("OP(b)", "3.5"));
        assert_eq!(row, "OP(b): x   3.5 GB/s  x");
    }

    #[test]
    fn test_signature_falls_back_to_raw_line() {
        let row = build_row("plain 4 GB/s\n", "plain 5 GB/s\n");
        assert_eq!(row, "plain 4 GB/s 4.0 GB/s  5.0 GB/s  1");
    }

    #[test]
    fn test_passthrough_non_bench_lines() {
        assert_eq!(build_row("just text  \n", "other"), "just text");
        assert_eq!(build_row("", ""), "");
    }

    #[test]
    fn test_winner_decide() {
        assert_eq!(Winner::decide(Some(2.0), Some(1.0)), Winner::A);
        assert_eq!(Winner::decide(Some(1.0), Some(1.0)), Winner::B);
        assert_eq!(Winner::decide(None, Some(1.0)), Winner::Undecided);
        assert_eq!(Winner::Undecided.to_string(), "x");
    }

    #[test]
    fn test_compare_logs() {
        let a = "backend: CPU\n  ADD(f32): 1 runs - 10.5 GB/s\n  MUL(f32): 1 runs - 20 GB/s\nPassed\n";
        let b = "backend: GPU\n  ADD(f32): 1 runs - 11 GB/s\n";
        let out = compare_logs(a, b);
        assert_eq!(
            out,
            "backend: CPU\n\nADD(f32): 10.5 GB/s  11.0 GB/s  1\nMUL(f32): 20.0 GB/s  x   x\nPassed\n"
        );
    }
}
