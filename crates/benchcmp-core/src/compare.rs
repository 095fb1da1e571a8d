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

//! Key alignment and percentage change between two runs.

use crate::error::{CompareError, Result};
use crate::keyed::FlopsResults;
use serde::Serialize;
use std::collections::BTreeSet;

/// One aligned test key.
///
/// `change_percent` is `(new - old) / old * 100` when both sides are present
/// and `old` is non-zero; otherwise it stays at `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    /// Test key, verbatim.
    pub key: String,
    /// Baseline GFLOPS.
    pub old: Option<f64>,
    /// Candidate GFLOPS.
    pub new: Option<f64>,
    /// Percentage change, `0.0` when either side is missing.
    #[serde(rename = "change")]
    pub change_percent: f64,
}

impl ComparisonEntry {
    /// Build an entry, computing the change when both values exist.
    pub fn new(key: impl Into<String>, old: Option<f64>, new: Option<f64>) -> Self {
        let key = key.into();
        let change_percent = match (old, new) {
            (Some(o), Some(_)) if o == 0.0 => {
                tracing::warn!(key = %key, "baseline value is zero, change left at 0");
                0.0
            }
            (Some(o), Some(n)) => (n - o) / o * 100.0,
            _ => 0.0,
        };

        Self {
            key,
            old,
            new,
            change_percent,
        }
    }

    /// Returns `true` if both runs have a value for this key.
    pub fn is_paired(&self) -> bool {
        self.old.is_some() && self.new.is_some()
    }
}

/// Align two result sets by key.
///
/// Produces one entry per key in the sorted union of both key sets.
///
/// # Errors
///
/// Returns [`CompareError::EmptyResults`] if either side is empty; no
/// comparison is attempted in that case.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{align, FlopsResults};
///
/// let old = FlopsResults::from_text("A: 10 GFLOPS\n");
/// let new = FlopsResults::from_text("A: 20 GFLOPS\nB: 1 GFLOPS\n");
/// let entries = align(&old, &new).unwrap();
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].change_percent, 100.0);
/// assert_eq!(entries[1].old, None);
/// ```
pub fn align(old: &FlopsResults, new: &FlopsResults) -> Result<Vec<ComparisonEntry>> {
    if old.is_empty() || new.is_empty() {
        return Err(CompareError::EmptyResults);
    }

    let keys: BTreeSet<&str> = old.keys().chain(new.keys()).collect();
    let entries: Vec<ComparisonEntry> = keys
        .into_iter()
        .map(|key| ComparisonEntry::new(key, old.get(key), new.get(key)))
        .collect();

    tracing::info!(
        keys = entries.len(),
        paired = entries.iter().filter(|e| e.is_paired()).count(),
        "aligned results"
    );
    Ok(entries)
}

/// Counts over a set of aligned entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    /// Keys present in both runs.
    pub total: usize,
    /// Paired keys whose change is above the threshold.
    pub improved: usize,
    /// Paired keys whose change is below the negative threshold.
    pub regressed: usize,
    /// Paired keys within the threshold band.
    pub unchanged: usize,
    /// Keys only in the old run.
    pub only_old: usize,
    /// Keys only in the new run.
    pub only_new: usize,
}

impl ComparisonSummary {
    /// Summarize entries using `threshold` (percent) as the "no change" band.
    pub fn from_entries(entries: &[ComparisonEntry], threshold: f64) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            match (entry.old, entry.new) {
                (Some(_), Some(_)) => {
                    summary.total += 1;
                    if entry.change_percent > threshold {
                        summary.improved += 1;
                    } else if entry.change_percent < -threshold {
                        summary.regressed += 1;
                    } else {
                        summary.unchanged += 1;
                    }
                }
                (Some(_), None) => summary.only_old += 1,
                (None, Some(_)) => summary.only_new += 1,
                (None, None) => {}
            }
        }
        summary
    }
}
