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

//! Benchmark declarations and the ordered registry.
//!
//! The registry maps each benchmark name to its metric kind and fixes the
//! order in which benchmarks appear in a report. It is built once and never
//! mutated afterwards.

use crate::error::{BenchError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// How the raw timing of a benchmark is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Bytes processed per unit time; higher is better.
    Throughput,
    /// Elapsed time per call; lower is better.
    Latency,
}

impl MetricKind {
    /// Returns the metric as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Throughput => "throughput",
            MetricKind::Latency => "latency",
        }
    }

    /// Returns the unit label shown in report titles.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Throughput => "GiB/s",
            MetricKind::Latency => "ns",
        }
    }
}

/// A declared benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchDeclaration {
    /// Display name, also the first segment of harness ids.
    pub name: String,
    /// Metric kind for every result of this benchmark.
    pub metric: MetricKind,
}

impl BenchDeclaration {
    /// Creates a new declaration.
    pub fn new(name: impl Into<String>, metric: MetricKind) -> Self {
        Self {
            name: name.into(),
            metric,
        }
    }
}

const BUILTIN_BENCHES: &[(&str, MetricKind)] = &[
    ("base64-check", MetricKind::Throughput),
    ("base64-decode", MetricKind::Throughput),
    ("base64-encode", MetricKind::Throughput),
    ("base64-forgiving-decode", MetricKind::Throughput),
    ("hex-check", MetricKind::Throughput),
    ("hex-decode", MetricKind::Throughput),
    ("hex-encode", MetricKind::Throughput),
    ("base32-check", MetricKind::Throughput),
    ("base32-decode", MetricKind::Throughput),
    ("base32-encode", MetricKind::Throughput),
    ("uuid-format", MetricKind::Latency),
    ("uuid-parse", MetricKind::Latency),
    ("ascii-check", MetricKind::Throughput),
];

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::default();
    for (name, metric) in BUILTIN_BENCHES {
        registry.push(BenchDeclaration::new(*name, *metric));
    }
    registry
});

/// Ordered, read-only set of benchmark declarations.
///
/// # Example
///
/// ```rust
/// use benchtab::core::registry::{MetricKind, Registry};
///
/// let registry = Registry::builtin();
/// assert_eq!(registry.metric("hex-decode").unwrap(), MetricKind::Throughput);
/// assert_eq!(registry.metric("uuid-parse").unwrap(), MetricKind::Latency);
/// assert!(registry.lookup("foo").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    declarations: Vec<BenchDeclaration>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Builds a registry from declarations in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Config`] if a name is declared twice.
    pub fn new(declarations: Vec<BenchDeclaration>) -> Result<Self> {
        let mut registry = Registry::default();
        for decl in declarations {
            if registry.index.contains_key(&decl.name) {
                return Err(BenchError::config(format!(
                    "benchmark '{}' is declared more than once",
                    decl.name
                )));
            }
            registry.push(decl);
        }
        Ok(registry)
    }

    /// Returns the process-wide built-in registry.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Parses a registry from a JSON array of `{"name", "metric"}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let declarations: Vec<BenchDeclaration> = serde_json::from_str(json)
            .map_err(|e| BenchError::config(format!("invalid registry: {}", e)))?;
        Self::new(declarations)
    }

    /// Loads a registry file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            BenchError::config(format!(
                "failed to read registry '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    fn push(&mut self, decl: BenchDeclaration) {
        self.index.insert(decl.name.clone(), self.declarations.len());
        self.declarations.push(decl);
    }

    /// Looks up a declaration by name.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Lookup`] if the name is not declared.
    pub fn lookup(&self, name: &str) -> Result<&BenchDeclaration> {
        self.index
            .get(name)
            .map(|&i| &self.declarations[i])
            .ok_or_else(|| BenchError::lookup(name))
    }

    /// Returns the metric kind declared for `name`.
    pub fn metric(&self, name: &str) -> Result<MetricKind> {
        self.lookup(name).map(|decl| decl.metric)
    }

    /// Returns the display position of `name`.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| BenchError::lookup(name))
    }

    /// Returns all declarations in display order.
    pub fn declarations(&self) -> &[BenchDeclaration] {
        &self.declarations
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns whether the registry declares nothing.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
