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

//! Log splitting into header, bench block and footer.
//!
//! # First block only
//!
//! The bench block is the *first* maximal run of lines containing
//! [`BENCH_LINE_MARKER`]. Scanning never backtracks: benchmark-looking lines
//! that reappear after the run has ended stay in the footer. This is a
//! single-block splitter, not a general log parser.

use crate::config::BENCH_LINE_MARKER;

/// Returns `true` if the line is a positional-mode benchmark line.
#[inline]
pub fn is_bench_line(line: &str) -> bool {
    line.contains(BENCH_LINE_MARKER)
}

/// Split text into lines, keeping each line's terminator.
///
/// Concatenating the returned slices yields the input unchanged.
pub fn lines_with_terminators(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// One log partitioned into three contiguous, ordered sections.
///
/// `header ++ bench ++ footer` is always the original line sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSections<'a> {
    /// Lines before the first bench line.
    pub header: Vec<&'a str>,
    /// The first contiguous run of bench lines.
    pub bench: Vec<&'a str>,
    /// Everything after the bench block, whatever it contains.
    pub footer: Vec<&'a str>,
}

impl<'a> LogSections<'a> {
    /// Split raw log text, preserving line terminators.
    pub fn from_text(text: &'a str) -> Self {
        split(&lines_with_terminators(text))
    }

    /// Total number of lines across all sections.
    pub fn len(&self) -> usize {
        self.header.len() + self.bench.len() + self.footer.len()
    }

    /// Returns `true` if the log had no lines at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition lines into header / bench block / footer in a single pass.
///
/// # Examples
///
/// ```
/// use benchcmp_core::split;
///
/// let lines = ["intro", "a 1 GB/s", "b 2 GB/s", "outro", "c 3 GB/s"];
/// let sections = split(&lines);
/// assert_eq!(sections.header, vec!["intro"]);
/// assert_eq!(sections.bench, vec!["a 1 GB/s", "b 2 GB/s"]);
/// assert_eq!(sections.footer, vec!["outro", "c 3 GB/s"]);
/// ```
pub fn split<'a>(lines: &[&'a str]) -> LogSections<'a> {
    let header_end = lines
        .iter()
        .position(|line| is_bench_line(line))
        .unwrap_or(lines.len());
    let bench_end = lines[header_end..]
        .iter()
        .position(|line| !is_bench_line(line))
        .map_or(lines.len(), |offset| header_end + offset);

    LogSections {
        header: lines[..header_end].to_vec(),
        bench: lines[header_end..bench_end].to_vec(),
        footer: lines[bench_end..].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bench_lines() {
        let lines = ["one", "two", "three"];
        let sections = split(&lines);
        assert_eq!(sections.header, lines.to_vec());
        assert!(sections.bench.is_empty());
        assert!(sections.footer.is_empty());
    }

    #[test]
    fn test_bench_from_first_line() {
        let lines = ["x 1 GB/s", "y 2 GB/s", "done"];
        let sections = split(&lines);
        assert!(sections.header.is_empty());
        assert_eq!(sections.bench.len(), 2);
        assert_eq!(sections.footer, vec!["done"]);
    }

    #[test]
    fn test_bench_to_end() {
        let lines = ["intro", "x 1 GB/s"];
        let sections = split(&lines);
        assert_eq!(sections.header, vec!["intro"]);
        assert_eq!(sections.bench, vec!["x 1 GB/s"]);
        assert!(sections.footer.is_empty());
    }

    #[test]
    fn test_later_bench_lines_stay_in_footer() {
        let lines = ["a 1 GB/s", "", "b 2 GB/s", "c 3 GB/s"];
        let sections = split(&lines);
        assert_eq!(sections.bench, vec!["a 1 GB/s"]);
        assert_eq!(sections.footer, vec!["", "b 2 GB/s", "c 3 GB/s"]);
    }

    #[test]
    fn test_empty_input() {
        let sections = split(&[]);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_from_text_reconstructs_input() {
        let text = "Testing backend\n  ADD(f32): 10 GB/s\n  MUL(f32): 20 GB/s\nOK\n";
        let sections = LogSections::from_text(text);
        assert_eq!(sections.header, vec!["Testing backend\n"]);
        assert_eq!(sections.bench.len(), 2);
        assert_eq!(sections.footer, vec!["OK\n"]);

        let rebuilt: String = sections
            .header
            .iter()
            .chain(&sections.bench)
            .chain(&sections.footer)
            .copied()
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_from_text_without_trailing_newline() {
        let sections = LogSections::from_text("head\nx 1 GB/s");
        assert_eq!(sections.header, vec!["head\n"]);
        assert_eq!(sections.bench, vec!["x 1 GB/s"]);
    }
}
