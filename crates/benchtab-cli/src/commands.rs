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

//! CLI command implementations

use crate::error::CliError;
use benchtab::ReportConfig;
use std::fs;
use std::io::{self, Read, Write};

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Default maximum input size (1 GB).
/// Can be overridden via the BENCHTAB_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Maximum input size from `BENCHTAB_MAX_FILE_SIZE`, or the default when the
/// variable is unset or not a number.
pub fn max_file_size() -> u64 {
    std::env::var("BENCHTAB_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read the whole harness output from a file, or from stdin when `path` is `-`.
///
/// The bytes are returned undecoded; UTF-8 problems surface as decode errors
/// with a line number once the report is generated.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The input exceeds the maximum allowed size
/// - The input cannot be read
pub fn read_input(path: &str) -> Result<Vec<u8>, CliError> {
    let max = max_file_size();

    if path == STDIN_PATH {
        let mut content = Vec::new();
        io::stdin()
            .lock()
            .take(max.saturating_add(1))
            .read_to_end(&mut content)
            .map_err(|e| CliError::io_error("<stdin>", e))?;
        let actual = content.len() as u64;
        if actual > max {
            return Err(CliError::file_too_large("<stdin>", actual, max));
        }
        return Ok(content);
    }

    // Check size first so oversized files are never loaded
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}

/// Generate a report from `file` and write it to `output` (stdout if `None`).
///
/// The report is fully rendered before anything is written, so a failing run
/// leaves no partial output behind.
///
/// # Examples
///
/// ```no_run
/// use benchtab::{ExportFormat, ReportConfig};
/// use benchtab_cli::commands::report;
///
/// # fn main() -> Result<(), benchtab_cli::error::CliError> {
/// let config = ReportConfig::new(ExportFormat::Json);
/// report("target/bench.jsonl", Some("report.json"), &config)?;
/// # Ok(())
/// # }
/// ```
pub fn report(file: &str, output: Option<&str>, config: &ReportConfig) -> Result<(), CliError> {
    if file.is_empty() {
        return Err(CliError::invalid_input("FILE must not be empty"));
    }

    let content = read_input(file)?;
    tracing::debug!(file, bytes = content.len(), "input loaded");

    let rendered = benchtab::run(content.as_slice(), config)?;
    write_output(&rendered, output)
}
