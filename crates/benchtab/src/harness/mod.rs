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

//! Harness output ingestion.
//!
//! # Modules
//!
//! - `events`: Decoding of line-delimited harness messages into samples
//! - `aggregator`: Folding samples into per-benchmark result sets

pub mod aggregator;
pub mod events;

pub use aggregator::{aggregate, AggregatedResults, Aggregator, OrderedSet, ResultSet};
pub use events::{parse_line, Sample, SampleReader, BENCHMARK_COMPLETE};
