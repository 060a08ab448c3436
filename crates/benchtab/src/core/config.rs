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

//! Report configuration.
//!
//! Selects the output format and the registry a run is checked against.

use crate::core::registry::Registry;
use crate::error::Result;
use std::borrow::Cow;
use std::path::PathBuf;

/// Export format options for comparison reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Markdown tables for documentation.
    #[default]
    Markdown,
    /// JSON for machine-readable reports.
    Json,
}

impl ExportFormat {
    /// Returns the format as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Json => "json",
        }
    }
}

/// Configuration for a single report run.
///
/// # Example
///
/// ```no_run
/// use benchtab::core::config::{ExportFormat, ReportConfig};
///
/// let config = ReportConfig::default()
///     .with_format(ExportFormat::Json)
///     .with_registry_path("benches/registry.json");
/// let registry = config.registry().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Output format.
    pub format: ExportFormat,
    /// Registry file to use instead of the built-in declarations.
    pub registry_path: Option<PathBuf>,
}

impl ReportConfig {
    /// Creates a configuration with the given format and built-in registry.
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            registry_path: None,
        }
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a registry file path.
    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = Some(path.into());
        self
    }

    /// Resolves the registry for this run.
    ///
    /// Borrows the built-in registry unless a file path is configured.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BenchError::Config`] if the registry file cannot be
    /// read or is malformed.
    pub fn registry(&self) -> Result<Cow<'static, Registry>> {
        match &self.registry_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading registry file");
                Registry::load(path).map(Cow::Owned)
            }
            None => Ok(Cow::Borrowed(Registry::builtin())),
        }
    }
}
