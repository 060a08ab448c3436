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

//! Comparison table model shared by all reporters.
//!
//! A [`ComparisonTable`] is a dense, fully validated view of one result set:
//! every row has a value for every case, and each cell knows whether it is
//! the best value of its column.

use crate::core::registry::{MetricKind, Registry};
use crate::error::{BenchError, Result};
use crate::harness::aggregator::{AggregatedResults, ResultSet};
use serde::Serialize;

/// One cell of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    /// Column label.
    pub case: String,
    /// Metric value in the table's unit.
    pub value: f64,
    /// Whether this is the best value of its column.
    pub best: bool,
}

/// One row of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Function id, `implementation/variant`.
    pub function: String,
    /// Cells in column order.
    pub cells: Vec<TableCell>,
}

/// Rendered-ready comparison of all functions across all cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    /// Benchmark name.
    pub name: String,
    /// Metric kind.
    pub metric: MetricKind,
    /// Unit label for the metric.
    pub unit: &'static str,
    /// Column labels in first-seen order.
    pub cases: Vec<String>,
    /// Rows in first-seen order.
    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    /// Builds a table from a result set and marks the best cells.
    ///
    /// The best value of a column is the maximum for throughput and the
    /// minimum for latency. Every cell equal to it is marked.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::IncompleteResult`] if any function lacks a
    /// value for any case.
    pub fn from_result_set(set: &ResultSet) -> Result<Self> {
        let cases = set.cases().to_vec();

        let mut values: Vec<Vec<f64>> = Vec::with_capacity(set.functions().len());
        for function in set.functions() {
            let row = cases
                .iter()
                .map(|case| {
                    set.value(function, case)
                        .ok_or_else(|| BenchError::incomplete(set.name(), function, case))
                })
                .collect::<Result<Vec<f64>>>()?;
            values.push(row);
        }

        let best: Vec<f64> = (0..cases.len())
            .map(|col| column_best(set.metric(), values.iter().map(|row| row[col])))
            .collect();

        let rows = set
            .functions()
            .iter()
            .zip(values)
            .map(|(function, row)| TableRow {
                function: function.clone(),
                cells: row
                    .into_iter()
                    .enumerate()
                    .map(|(col, value)| TableCell {
                        case: cases[col].clone(),
                        value,
                        best: value == best[col],
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            name: set.name().to_string(),
            metric: set.metric(),
            unit: set.metric().unit(),
            cases,
            rows,
        })
    }

    /// Returns the report title, e.g. `hex-decode (GiB/s)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

fn column_best(metric: MetricKind, column: impl Iterator<Item = f64>) -> f64 {
    match metric {
        MetricKind::Throughput => column.fold(f64::NEG_INFINITY, f64::max),
        MetricKind::Latency => column.fold(f64::INFINITY, f64::min),
    }
}

/// Builds one table per result set, in registry display order.
///
/// # Errors
///
/// Returns the first [`BenchError::IncompleteResult`] encountered.
pub fn build_tables(results: &AggregatedResults, registry: &Registry) -> Result<Vec<ComparisonTable>> {
    results
        .in_registry_order(registry)?
        .into_iter()
        .map(ComparisonTable::from_result_set)
        .collect()
}
