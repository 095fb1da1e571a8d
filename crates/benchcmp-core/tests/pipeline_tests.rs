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

//! End-to-end tests for both comparison pipelines.

use benchcmp_core::{
    align, build_row, compare_logs, load_results, render_text, CompareError, FlopsResults,
    ReportConfig,
};
use std::fs;
use tempfile::NamedTempFile;

fn create_temp_file(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// =============================================================================
// Keyed pipeline
// =============================================================================

#[test]
fn test_keyed_single_key_end_to_end() {
    let old_file = create_temp_file("A: 10 GFLOPS\n");
    let new_file = create_temp_file("A: 20 GFLOPS\n");

    let old = load_results(old_file.path()).unwrap();
    let new = load_results(new_file.path()).unwrap();
    let entries = align(&old, &new).unwrap();
    let report = render_text(&entries, &ReportConfig::default());

    let row = report.lines().nth(2).unwrap();
    assert!(row.starts_with("A "));
    let cells: Vec<&str> = row.split_whitespace().collect();
    assert_eq!(cells, vec!["A", "10.00", "20.00", "+100.00%"]);
}

#[test]
fn test_keyed_asymmetric_keys() {
    let old = FlopsResults::from_text("A: 10 GFLOPS\n");
    let new = FlopsResults::from_text("A: 10 GFLOPS\nONLY_NEW: 1 TFLOPS\n");

    let entries = align(&old, &new).unwrap();
    let report = render_text(&entries, &ReportConfig::default());
    let row = report
        .lines()
        .find(|l| l.starts_with("ONLY_NEW"))
        .unwrap();

    let cells: Vec<&str> = row.split_whitespace().collect();
    assert_eq!(cells, vec!["ONLY_NEW", "N/A", "1000.00", "~0.00%"]);
}

#[test]
fn test_keyed_mixed_units() {
    let log = "\
ggml backend ops benchmark
  MUL_MAT(type_a=f16,n=1): 744 runs - 1660.11 us/run - 134.48 MFLOP/run - 81.01 GFLOPS
  MUL_MAT(type_a=f16,n=2): 12 runs - 9.00 ms/run - 1.20 TFLOP/run - 1.33 TFLOPS
  ADD(type=f32): 8192 runs - 1.22 us/run - 950.00 MFLOPS
  Backend CPU: OK
";
    let results = FlopsResults::from_text(log);
    assert_eq!(results.len(), 3);
    assert_eq!(results.get("MUL_MAT(type_a=f16,n=1)"), Some(81.01));
    assert_eq!(results.get("MUL_MAT(type_a=f16,n=2)"), Some(1330.0));
    assert_eq!(results.get("ADD(type=f32)"), Some(0.95));
}

#[test]
fn test_keyed_empty_side_aborts() {
    let old = FlopsResults::from_text("A: 10 GFLOPS\n");
    let new = FlopsResults::from_text("nothing useful here\n");
    assert_eq!(align(&old, &new), Err(CompareError::EmptyResults));
}

#[test]
fn test_keyed_missing_file() {
    let err = load_results("/nonexistent/old_results.txt").unwrap_err();
    assert_eq!(
        err.to_string(),
        "File not found at /nonexistent/old_results.txt"
    );
}

// =============================================================================
// Positional pipeline
// =============================================================================

#[test]
fn test_positional_full_log() {
    let a = "\
Testing 2 devices

Backend 1/2: CPU
  ADD(type=f32,ne=[10,5,4,3]): 163840 runs - 6.10 us/run - 2.34 kB/run - 366.21 GB/s
  MUL(type=f32,ne=[10,5,4,3]): 163840 runs - 5.10 us/run - 2.34 kB/run - 438.00 GB/s
  Backend CPU: OK
";
    let b = "\
Testing 2 devices

Backend 1/2: CUDA0
  ADD(type=f32,ne=[10,5,4,3]): 163840 runs - 5.00 us/run - 2.34 kB/run - 400.50 GB/s
  MUL(type=f32,ne=[10,5,4,3]): 163840 runs - 6.00 us/run - 2.34 kB/run - 300 GB/s
  Backend CUDA0: OK
";

    let out = compare_logs(a, b);
    let expected = "\
Testing 2 devices

Backend 1/2: CPU

ADD(type=f32,ne=[10,5,4,3]): 366.21 GB/s  400.5 GB/s  1
MUL(type=f32,ne=[10,5,4,3]): 438.0 GB/s  300.0 GB/s  0
  Backend CPU: OK
";
    assert_eq!(out, expected);
}

#[test]
fn test_positional_uneven_blocks() {
    let a = "x(1): 1 GB/s\n";
    let b = "x(1): 2 GB/s\ny(2): 3 GB/s\n";

    let out = compare_logs(a, b);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["", "x(1): 1.0 GB/s  2.0 GB/s  1", "y(2): x   3.0 GB/s  x"]);
}

#[test]
fn test_positional_row_winners() {
    let line = |v: &str| format!("OP(k): 1 runs - {} GB/s", v);
    assert!(build_row(&line("100"), &line("50")).ends_with("  0"));
    assert!(build_row(&line("50"), &line("100")).ends_with("  1"));
    assert!(build_row(&line("50"), &line("50")).ends_with("  1"));
    assert!(build_row(&line("50"), "").ends_with("  x"));
}
