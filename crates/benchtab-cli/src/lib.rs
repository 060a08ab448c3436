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

//! Benchtab CLI library.
//!
//! Backs the `benchtab` binary, which turns benchmark harness output into
//! comparison tables:
//!
//! ```bash
//! cargo bench --bench codecs -- --message-format=json > bench.jsonl
//! benchtab bench.jsonl --output results.md
//! ```
//!
//! # Modules
//!
//! - [`cli`]: Argument definitions
//! - [`commands`]: Input loading, report generation, output writing
//! - [`error`]: CLI error type

pub mod cli;
pub mod commands;
pub mod error;
