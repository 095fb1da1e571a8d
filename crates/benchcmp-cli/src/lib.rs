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

//! BenchCmp CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **positional**: pair the bench blocks of two logs line by line and
//!   print throughput for both sides plus a winner column
//! - **keyed**: align two logs by test key and write a GFLOPS change report
//! - **completion**: generate shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use benchcmp_cli::commands::{keyed, KeyedOptions};
//!
//! # fn main() -> Result<(), benchcmp_cli::error::CliError> {
//! keyed(&KeyedOptions::new("before.txt", "after.txt"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Commands return `Result<(), CliError>`. The binary prints the error to
//! stderr and exits with a failure status.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
