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

//! Report rendering.
//!
//! # Modules
//!
//! - `types`: Comparison table model and best-cell marking
//! - `markdown`: Markdown export
//! - `json`: JSON export

pub mod json;
pub mod markdown;
pub mod types;

pub use json::render_json;
pub use markdown::render_markdown;
pub use types::{build_tables, ComparisonTable, TableCell, TableRow};

use crate::core::config::ExportFormat;
use crate::error::Result;

/// Renders tables in the requested format.
pub fn render(tables: &[ComparisonTable], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(render_markdown(tables)),
        ExportFormat::Json => render_json(tables),
    }
}
