// Dweve Benchtab - Benchmark Comparison Tables
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

//! Benchtab - comparison tables for benchmark results
//!
//! Turns the line-delimited JSON messages of a benchmark harness into one
//! table per benchmark, comparing every implementation across every input
//! size and marking the best result of each column.
//!
//! ## Pipeline
//!
//! 1. **Parse**: [`harness::events::SampleReader`] decodes `benchmark-complete`
//!    messages into [`Sample`]s.
//! 2. **Aggregate**: [`harness::aggregator::aggregate`] groups samples into
//!    [`ResultSet`]s, keeping first-seen order of functions and cases.
//! 3. **Render**: [`reporters::build_tables`] orders result sets by the
//!    [`Registry`] and marks best cells; [`reporters::render`] emits Markdown
//!    or JSON.
//!
//! Every stage fails fast. A run either yields a complete report or an error.
//!
//! ## Usage
//!
//! ```rust
//! use benchtab::{generate_report, ExportFormat, Registry};
//! use std::io::Cursor;
//!
//! let input = r#"{"reason":"benchmark-complete","id":"hex-decode/impl-a/v1/1024","typical":{"estimate":2000}}
//! {"reason":"benchmark-complete","id":"hex-decode/impl-a/v2/1024","typical":{"estimate":1000}}
//! "#;
//!
//! let report = generate_report(Cursor::new(input), Registry::builtin(), ExportFormat::Markdown).unwrap();
//! assert!(report.starts_with("#### hex-decode (GiB/s)"));
//! assert!(report.contains("| impl-a/v2 | **0.954** |"));
//! ```

pub mod core;
pub mod error;
pub mod harness;
pub mod reporters;

pub use crate::core::{BenchDeclaration, ExportFormat, MetricKind, Registry, ReportConfig};
pub use error::{BenchError, ErrorKind, Result};
pub use harness::{AggregatedResults, ResultSet, Sample};
pub use reporters::ComparisonTable;

use std::io::BufRead;

/// Runs the full pipeline over `input` and returns the rendered report.
///
/// The whole input is parsed before aggregation starts, and aggregation
/// finishes before anything is rendered.
///
/// # Errors
///
/// Returns the first decode, lookup, format, or incomplete-result error.
pub fn generate_report<R: BufRead>(
    input: R,
    registry: &Registry,
    format: ExportFormat,
) -> Result<String> {
    let mut reader = harness::SampleReader::new(input);
    let samples = reader.by_ref().collect::<Result<Vec<Sample>>>()?;

    let results = harness::aggregate(registry, &samples)?;
    let tables = reporters::build_tables(&results, registry)?;

    tracing::info!(
        records = reader.records(),
        samples = samples.len(),
        benchmarks = tables.len(),
        format = format.as_str(),
        "report built"
    );

    reporters::render(&tables, format)
}

/// Resolves the registry from `config` and runs [`generate_report`].
pub fn run<R: BufRead>(input: R, config: &ReportConfig) -> Result<String> {
    let registry = config.registry()?;
    generate_report(input, &registry, config.format)
}
