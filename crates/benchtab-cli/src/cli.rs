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

//! Command-line arguments.

use crate::commands;
use crate::error::CliError;
use benchtab::{ExportFormat, ReportConfig};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One Markdown table per benchmark
    #[default]
    Markdown,
    /// Pretty-printed JSON array of tables
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => ExportFormat::Markdown,
            Format::Json => ExportFormat::Json,
        }
    }
}

/// Arguments of a report run.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Benchmark harness output (line-delimited JSON), or `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    pub format: Format,

    /// JSON registry file declaring benchmark names and metrics
    #[arg(short, long, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ReportArgs {
    /// Builds the library configuration for this run.
    pub fn config(&self) -> ReportConfig {
        let config = ReportConfig::new(self.format.into());
        match &self.registry {
            Some(path) => config.with_registry_path(path),
            None => config,
        }
    }

    /// Default log directives when `RUST_LOG` is not set.
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "benchtab=debug,benchtab_cli=debug"
        } else {
            "benchtab=warn,benchtab_cli=warn"
        }
    }

    /// Execute the report.
    pub fn execute(&self) -> Result<(), CliError> {
        commands::report(&self.file, self.output.as_deref(), &self.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ReportArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["benchtab", "bench.jsonl"]);
        assert_eq!(cli.args.file, "bench.jsonl");
        assert_eq!(cli.args.format, Format::Markdown);
        assert!(cli.args.output.is_none());
        assert!(cli.args.registry.is_none());
        assert_eq!(cli.args.log_directives(), "benchtab=warn,benchtab_cli=warn");
    }

    #[test]
    fn test_all_flags() {
        let cli = TestCli::parse_from([
            "benchtab", "-f", "json", "-o", "out.json", "-r", "benches.json", "-v", "-",
        ]);
        assert_eq!(cli.args.file, "-");
        assert_eq!(cli.args.output.as_deref(), Some("out.json"));
        assert_eq!(cli.args.log_directives(), "benchtab=debug,benchtab_cli=debug");

        let config = cli.args.config();
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.registry_path, Some(PathBuf::from("benches.json")));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(TestCli::try_parse_from(["benchtab", "-f", "html", "x"]).is_err());
    }
}
