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

//! BenchCmp Core
//!
//! Parsing, alignment and rendering for comparing two benchmark-run logs
//! (a baseline "old" run and a candidate "new" run).
//!
//! Two independent pipelines are provided:
//!
//! - **Positional**: logs are split into header / bench block / footer
//!   ([`section::split`]), and the bench blocks are compared line by line
//!   ([`positional::compare_logs`]). Each row shows the throughput on both
//!   sides and which side won.
//! - **Keyed**: every `key: ... <value> GFLOPS|TFLOPS|MFLOPS` line is parsed
//!   into a [`keyed::FlopsResults`] map, the two maps are aligned by key
//!   ([`compare::align`]), and a fixed-width report is rendered
//!   ([`report::render_text`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use benchcmp_core::{align, parse_line, render_text, FlopsResults, ReportConfig};
//!
//! let old = FlopsResults::from_text("MUL_MAT(f32): 744 runs - 81.01 GFLOPS\n");
//! let new = FlopsResults::from_text("MUL_MAT(f32): 812 runs - 0.09 TFLOPS\n");
//!
//! let entries = align(&old, &new).unwrap();
//! let report = render_text(&entries, &ReportConfig::default());
//! assert!(report.contains("MUL_MAT(f32)"));
//!
//! assert_eq!(parse_line("BAR: 500 MFLOPS"), Some(("BAR".to_string(), 0.5)));
//! ```
//!
//! ## Positional comparison
//!
//! ```rust
//! use benchcmp_core::{build_row, compare_logs};
//!
//! let row = build_row(
//!     "  ADD(type=f32): 100 runs - 12.50 GB/s",
//!     "  ADD(type=f32): 100 runs - 14.00 GB/s",
//! );
//! assert_eq!(row, "ADD(type=f32): 12.5 GB/s  14.0 GB/s  1");
//!
//! let out = compare_logs("header\n", "header\n");
//! assert_eq!(out, "header\n\n");
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod io;
pub mod keyed;
pub mod positional;
pub mod report;
pub mod section;

pub use compare::{align, ComparisonEntry, ComparisonSummary};
pub use config::{ReportConfig, ReportFormat};
pub use error::{CompareError, Result};
pub use io::read_file;
pub use keyed::{load_results, parse_line, FlopsResults, FlopsUnit};
pub use positional::{
    build_row, compare_logs, extract_signature, extract_throughput, ThroughputReading, Winner,
};
pub use report::{format_change, render, render_json, render_text};
pub use section::{split, LogSections};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
