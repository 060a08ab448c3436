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

//! Grouping of samples into per-benchmark result sets.
//!
//! Functions and cases keep the order in which they first appear in the
//! input. That order is what the rendered tables show, so it is part of the
//! output contract rather than an implementation detail.

use crate::core::registry::{MetricKind, Registry};
use crate::error::{BenchError, Result};
use crate::harness::events::Sample;
use std::collections::{HashMap, HashSet};

const GIB: f64 = (1u64 << 30) as f64;

/// Sequence of unique strings in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` unless already present. Returns whether it was added.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.seen.contains(item) {
            return false;
        }
        self.seen.insert(item.to_string());
        self.items.push(item.to_string());
        true
    }

    /// Returns whether `item` is present.
    pub fn contains(&self, item: &str) -> bool {
        self.seen.contains(item)
    }

    /// Returns the items in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Comparison matrix for one benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    name: String,
    metric: MetricKind,
    functions: OrderedSet,
    cases: OrderedSet,
    cells: HashMap<String, HashMap<String, f64>>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new(name: impl Into<String>, metric: MetricKind) -> Self {
        Self {
            name: name.into(),
            metric,
            functions: OrderedSet::new(),
            cases: OrderedSet::new(),
            cells: HashMap::new(),
        }
    }

    /// Benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Metric kind, fixed at creation.
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Function ids in first-seen order.
    pub fn functions(&self) -> &[String] {
        self.functions.as_slice()
    }

    /// Case labels in first-seen order.
    pub fn cases(&self) -> &[String] {
        self.cases.as_slice()
    }

    /// Returns the value recorded for `(function, case)`, if any.
    pub fn value(&self, function: &str, case: &str) -> Option<f64> {
        self.cells.get(function).and_then(|row| row.get(case)).copied()
    }

    /// Records a value, registering the function and case if new.
    ///
    /// Returns the value this replaced, if the cell was already filled.
    pub fn record(&mut self, function: &str, case: &str, value: f64) -> Option<f64> {
        self.functions.insert(function);
        self.cases.insert(case);
        self.cells
            .entry(function.to_string())
            .or_default()
            .insert(case.to_string(), value)
    }

    /// Number of recorded cells.
    pub fn cell_count(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }
}

/// Computes the table value of a sample under `metric`.
///
/// Throughput is GiB/s with the case label read as a byte count; latency is
/// the elapsed time unchanged.
///
/// # Errors
///
/// Returns [`BenchError::Format`] if a throughput case is not a `u64`, and
/// [`BenchError::ZeroDuration`] if a throughput sample took no time.
///
/// # Examples
///
/// ```rust
/// use benchtab::core::MetricKind;
/// use benchtab::harness::aggregator::compute_value;
/// use benchtab::harness::events::Sample;
///
/// let sample = Sample {
///     benchmark: "uuid-parse".into(),
///     function: "uuid/simple".into(),
///     case: "v4".into(),
///     elapsed_ns: 42.5,
/// };
/// assert_eq!(compute_value(MetricKind::Latency, &sample).unwrap(), 42.5);
/// assert!(compute_value(MetricKind::Throughput, &sample).is_err());
/// ```
pub fn compute_value(metric: MetricKind, sample: &Sample) -> Result<f64> {
    match metric {
        MetricKind::Throughput => {
            let bytes: u64 = sample
                .case
                .parse()
                .map_err(|_| BenchError::format(&sample.benchmark, &sample.case))?;
            if sample.elapsed_ns == 0.0 {
                return Err(BenchError::zero_duration(
                    &sample.benchmark,
                    &sample.function,
                    &sample.case,
                ));
            }
            Ok(bytes as f64 / sample.elapsed_ns * 1e9 / GIB)
        }
        MetricKind::Latency => Ok(sample.elapsed_ns),
    }
}

/// Finalized result sets keyed by benchmark name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedResults {
    sets: HashMap<String, ResultSet>,
    samples: usize,
}

impl AggregatedResults {
    /// Returns the result set for `name`.
    pub fn get(&self, name: &str) -> Option<&ResultSet> {
        self.sets.get(name)
    }

    /// Number of result sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns whether no samples were aggregated.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Number of samples folded in, duplicates included.
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Iterates result sets in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &ResultSet> {
        self.sets.values()
    }

    /// Returns result sets in registry display order.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Lookup`] if a set is not declared in `registry`,
    /// which can only happen when a different registry was used to aggregate.
    pub fn in_registry_order(&self, registry: &Registry) -> Result<Vec<&ResultSet>> {
        let mut ordered = self
            .sets
            .values()
            .map(|set| registry.position(set.name()).map(|pos| (pos, set)))
            .collect::<Result<Vec<_>>>()?;
        ordered.sort_by_key(|(pos, _)| *pos);
        Ok(ordered.into_iter().map(|(_, set)| set).collect())
    }
}

/// Single-pass fold of samples into result sets.
pub struct Aggregator<'r> {
    registry: &'r Registry,
    results: AggregatedResults,
}

impl<'r> Aggregator<'r> {
    /// Creates an aggregator checking names against `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            results: AggregatedResults::default(),
        }
    }

    /// Folds one sample in.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Lookup`] for an undeclared benchmark and
    /// [`BenchError::Format`] for a non-numeric throughput case.
    pub fn push(&mut self, sample: &Sample) -> Result<()> {
        let metric = self.registry.metric(&sample.benchmark)?;
        let value = compute_value(metric, sample)?;

        let set = self
            .results
            .sets
            .entry(sample.benchmark.clone())
            .or_insert_with(|| {
                tracing::debug!(benchmark = %sample.benchmark, metric = metric.as_str(), "new result set");
                ResultSet::new(&sample.benchmark, metric)
            });

        if let Some(previous) = set.record(&sample.function, &sample.case, value) {
            tracing::warn!(
                benchmark = %sample.benchmark,
                function = %sample.function,
                case = %sample.case,
                previous,
                value,
                "duplicate sample overwrites earlier value"
            );
        }
        self.results.samples += 1;
        Ok(())
    }

    /// Returns the finalized results.
    pub fn finish(self) -> AggregatedResults {
        self.results
    }
}

/// Aggregates `samples` in order.
///
/// # Examples
///
/// ```rust
/// use benchtab::core::Registry;
/// use benchtab::harness::aggregator::aggregate;
/// use benchtab::harness::events::Sample;
///
/// let samples = vec![Sample {
///     benchmark: "hex-decode".into(),
///     function: "impl-a/v1".into(),
///     case: "1024".into(),
///     elapsed_ns: 2000.0,
/// }];
/// let results = aggregate(Registry::builtin(), &samples).unwrap();
/// assert_eq!(results.get("hex-decode").unwrap().functions(), ["impl-a/v1"]);
/// ```
pub fn aggregate<'a, I>(registry: &Registry, samples: I) -> Result<AggregatedResults>
where
    I: IntoIterator<Item = &'a Sample>,
{
    let mut aggregator = Aggregator::new(registry);
    for sample in samples {
        aggregator.push(sample)?;
    }
    Ok(aggregator.finish())
}
