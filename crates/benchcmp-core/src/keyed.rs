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

//! Keyed benchmark results: `key: ... <value> GFLOPS|TFLOPS|MFLOPS`.
//!
//! Example input line:
//!
//! ```text
//! MUL_MAT(type_a=f16,...): 744 runs - 1660.11 us/run - 134.48 MFLOP/run - 81.01 GFLOPS
//! ```
//!
//! Values are normalized to GFLOPS on load.

use crate::config::{GFLOPS_PER_TFLOPS, MFLOPS_PER_GFLOPS};
use crate::error::Result;
use crate::io::read_file;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Trailing `<number> <unit>` anchored at the end of the data part.
static TRAILING_FLOPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\d\.]+)\s+(GFLOPS|TFLOPS|MFLOPS)$").expect("valid FLOPS regex")
});

/// Supported throughput units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlopsUnit {
    /// 10^6 floating-point operations per second
    Mflops,
    /// 10^9 floating-point operations per second
    Gflops,
    /// 10^12 floating-point operations per second
    Tflops,
}

impl FlopsUnit {
    /// Convert a value in this unit to GFLOPS.
    pub fn to_gflops(self, value: f64) -> f64 {
        match self {
            Self::Mflops => value / MFLOPS_PER_GFLOPS,
            Self::Gflops => value,
            Self::Tflops => value * GFLOPS_PER_TFLOPS,
        }
    }
}

impl fmt::Display for FlopsUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mflops => write!(f, "MFLOPS"),
            Self::Gflops => write!(f, "GFLOPS"),
            Self::Tflops => write!(f, "TFLOPS"),
        }
    }
}

impl FromStr for FlopsUnit {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "MFLOPS" => Ok(Self::Mflops),
            "GFLOPS" => Ok(Self::Gflops),
            "TFLOPS" => Ok(Self::Tflops),
            _ => Err(()),
        }
    }
}

/// Parse one keyed benchmark line into `(key, gflops)`.
///
/// The key is the trimmed text before the first `:`. The text after it must
/// end in a number and a supported unit. Lines that don't fit, including
/// ones with an empty key or an unparsable number such as `1.2.3`, yield
/// `None`.
///
/// # Examples
///
/// ```
/// use benchcmp_core::parse_line;
///
/// assert_eq!(parse_line("FOO: 5 runs - 2.00 TFLOPS"), Some(("FOO".to_string(), 2000.0)));
/// assert_eq!(parse_line("BAR: 500 MFLOPS"), Some(("BAR".to_string(), 0.5)));
/// assert_eq!(parse_line("BAZ: 12 GB/s"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(String, f64)> {
    let (key, data) = line.trim().split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let caps = TRAILING_FLOPS.captures(data.trim())?;
    let value = caps[1].parse::<f64>().ok()?;
    let unit = caps[2].parse::<FlopsUnit>().ok()?;

    Some((key.to_string(), unit.to_gflops(value)))
}

/// Parsed results of one run: test key to GFLOPS.
///
/// Keys are kept sorted. Inserting a key that already exists replaces the
/// earlier value (last occurrence in the file wins); nothing is merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlopsResults {
    entries: BTreeMap<String, f64>,
}

impl FlopsResults {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every line of `text`, skipping lines that don't parse.
    pub fn from_text(text: &str) -> Self {
        let mut results = Self::new();
        let mut skipped = 0usize;
        for line in text.lines() {
            match parse_line(line) {
                Some((key, gflops)) => {
                    results.insert(key, gflops);
                }
                None => skipped += 1,
            }
        }
        tracing::debug!(parsed = results.len(), skipped, "parsed keyed results");
        results
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, gflops: f64) -> Option<f64> {
        let key = key.into();
        let previous = self.entries.insert(key.clone(), gflops);
        if let Some(old) = previous {
            tracing::debug!(key = %key, old, new = gflops, "duplicate key, keeping last value");
        }
        previous
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.entries.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FlopsResults {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FlopsResults {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (key, gflops) in iter {
            results.insert(key, gflops);
        }
        results
    }
}

/// Load and parse a keyed results file.
///
/// # Errors
///
/// Returns [`CompareError::NotFound`](crate::CompareError::NotFound) if the
/// file does not exist, or another [`CompareError`](crate::CompareError) if
/// it cannot be read. Lines that fail to parse are skipped, never errors.
pub fn load_results(path: impl AsRef<Path>) -> Result<FlopsResults> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let results = FlopsResults::from_text(&content);
    tracing::info!(path = %path.display(), entries = results.len(), "loaded results");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;
    use std::io::Write;

    #[test]
    fn test_parse_tflops() {
        assert_eq!(
            parse_line("FOO: 5 runs - 2.00 TFLOPS"),
            Some(("FOO".to_string(), 2000.0))
        );
    }

    #[test]
    fn test_parse_mflops() {
        assert_eq!(parse_line("BAR: 500 MFLOPS"), Some(("BAR".to_string(), 0.5)));
    }

    #[test]
    fn test_parse_full_line() {
        let line = "  MUL_MAT(type_a=f16,type_b=f32,m=4096,n=512,k=14336): 744 runs - 1660.11 us/run - 134.48 MFLOP/run - 81.01 GFLOPS\n";
        let (key, gflops) = parse_line(line).unwrap();
        assert_eq!(key, "MUL_MAT(type_a=f16,type_b=f32,m=4096,n=512,k=14336)");
        assert_eq!(gflops, 81.01);
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_line("no colon 5 GFLOPS"), None);
        assert_eq!(parse_line("KEY: 5 GFLOPS extra"), None);
        assert_eq!(parse_line("KEY: 5 gflops"), None);
        assert_eq!(parse_line("KEY: 1.2.3 GFLOPS"), None);
        assert_eq!(parse_line(": 5 GFLOPS"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        assert_eq!(
            parse_line("OP: a: 3 GFLOPS"),
            Some(("OP".to_string(), 3.0))
        );
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(FlopsUnit::Tflops.to_gflops(1.5), 1500.0);
        assert_eq!(FlopsUnit::Gflops.to_gflops(1.5), 1.5);
        assert_eq!(FlopsUnit::Mflops.to_gflops(1500.0), 1.5);
        assert_eq!("TFLOPS".parse::<FlopsUnit>(), Ok(FlopsUnit::Tflops));
        assert!("GB/s".parse::<FlopsUnit>().is_err());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let results = FlopsResults::from_text("A: 1 GFLOPS\nB: 2 GFLOPS\nA: 3 GFLOPS\n");
        assert_eq!(results.len(), 2);
        assert_eq!(results.get("A"), Some(3.0));
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut results = FlopsResults::new();
        assert_eq!(results.insert("A", 1.0), None);
        assert_eq!(results.insert("A", 2.0), Some(1.0));
        assert_eq!(results.get("A"), Some(2.0));
    }

    #[test]
    fn test_keys_sorted() {
        let results: FlopsResults = vec![("b", 1.0), ("a", 2.0), ("c", 3.0)].into_iter().collect();
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_results() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header line").unwrap();
        writeln!(file, "X(a): 1 runs - 1.5 TFLOPS").unwrap();
        writeln!(file, "Y(b): 1 runs - 250 MFLOPS").unwrap();

        let results = load_results(file.path()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results.get("X(a)"), Some(1500.0));
        assert_eq!(results.get("Y(b)"), Some(0.25));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_results("/nonexistent/results.txt").unwrap_err();
        assert!(matches!(err, CompareError::NotFound { .. }));
    }
}
