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

//! Structured error types for the Benchtab CLI.
//!
//! All CLI operations return `Result<T, CliError>` so `main` has a single
//! place to print the message and pick the exit status.

use benchtab::{BenchError, ErrorKind};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Benchtab CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchtab_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (input read, output write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Report generation failed.
    ///
    /// Carries the kind and message of the [`BenchError`] raised while
    /// parsing, aggregating, or rendering.
    #[error("{message}")]
    Report {
        /// Kind of the underlying report error
        kind: ErrorKind,
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// ```rust
    /// use benchtab_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("bench.jsonl", 3 * 1024 * 1024, 1024 * 1024);
    /// assert!(err.to_string().contains("(1 MB)"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Kind of the report error, if this error came from report generation.
    pub fn report_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Report { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<BenchError> for CliError {
    fn from(source: BenchError) -> Self {
        Self::Report {
            kind: source.kind(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "bench.jsonl",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bench.jsonl"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.jsonl", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.jsonl"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
    }

    #[test]
    fn test_report_error_keeps_message() {
        let err: CliError = BenchError::lookup("foo").into();
        assert_eq!(err.report_kind(), Some(ErrorKind::Lookup));
        assert_eq!(err.to_string(), BenchError::lookup("foo").to_string());

        let err = CliError::invalid_input("x");
        assert_eq!(err.report_kind(), None);
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("FILE must not be empty");
        assert_eq!(err.to_string(), "Invalid input: FILE must not be empty");
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::io_error("a.jsonl", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), err.clone().to_string());
    }
}
