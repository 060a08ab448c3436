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

//! Benchtab Command Line Interface

use benchtab_cli::cli::ReportArgs;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Benchtab - comparison tables for benchmark results
///
/// Reads line-delimited JSON from a benchmark harness and prints one table
/// per benchmark, marking the best implementation for every input size.
///
/// # Examples
///
/// ```bash
/// # Markdown report on stdout
/// benchtab bench.jsonl
///
/// # JSON report from stdin into a file
/// cat bench.jsonl | benchtab - --format json --output report.json
/// ```
#[derive(Parser)]
#[command(name = "benchtab")]
#[command(author, version, about = "Benchtab - comparison tables for benchmark results", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: ReportArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.args.log_directives()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
