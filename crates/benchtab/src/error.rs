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

//! Error types for report generation.
//!
//! Every stage of the pipeline returns [`Result`]. Nothing recovers locally:
//! the first error stops the run and no report is produced.
//!
//! # Error Categories
//!
//! - **Decode**: an input line is not a well-formed harness record
//! - **Lookup**: a benchmark name has no registry entry
//! - **Format**: a throughput case label is not an integer byte count
//! - **ZeroDuration**: a throughput sample took no measurable time
//! - **IncompleteResult**: a table cell has no recorded value
//! - **Config / Io / Serialize**: environment failures around the pipeline

use thiserror::Error;

/// Result type for report generation.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while building a comparison report.
///
/// # Examples
///
/// ```rust
/// use benchtab::error::{BenchError, ErrorKind};
///
/// let err = BenchError::decode(7, "expected value");
/// assert_eq!(err.kind(), ErrorKind::Decode);
/// assert!(err.to_string().contains("line 7"));
/// ```
#[derive(Error, Debug)]
pub enum BenchError {
    /// A non-blank input line is not a valid harness record.
    #[error("Decode error at line {line}: {message}")]
    Decode {
        /// 1-based input line number.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// A benchmark name is absent from the registry.
    #[error("Unknown benchmark '{name}': not declared in the registry")]
    Lookup {
        /// The benchmark name that failed lookup.
        name: String,
    },

    /// A throughput case label does not parse as a byte count.
    #[error("Case '{case}' of throughput benchmark '{benchmark}' is not an integer byte count")]
    Format {
        /// Benchmark the case belongs to.
        benchmark: String,
        /// The offending case label.
        case: String,
    },

    /// A throughput sample has a zero elapsed time, so no rate exists.
    #[error("Benchmark '{benchmark}' reports zero elapsed time for function '{function}' in case '{case}'")]
    ZeroDuration {
        /// Throughput benchmark of the sample.
        benchmark: String,
        /// Function of the sample.
        function: String,
        /// Case of the sample.
        case: String,
    },

    /// A function has no value for one of the cases in its table.
    #[error("Benchmark '{benchmark}' has no result for function '{function}' in case '{case}'")]
    IncompleteResult {
        /// Benchmark whose table is incomplete.
        benchmark: String,
        /// Row missing the value.
        function: String,
        /// Column missing the value.
        case: String,
    },

    /// Registry configuration is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Coarse classification of a [`BenchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BenchError::Decode`].
    Decode,
    /// See [`BenchError::Lookup`].
    Lookup,
    /// See [`BenchError::Format`].
    Format,
    /// See [`BenchError::ZeroDuration`].
    ZeroDuration,
    /// See [`BenchError::IncompleteResult`].
    IncompleteResult,
    /// See [`BenchError::Config`].
    Config,
    /// See [`BenchError::Io`].
    Io,
    /// See [`BenchError::Serialize`].
    Serialize,
}

impl BenchError {
    /// Create a decode error for the given input line.
    pub fn decode(line: usize, message: impl Into<String>) -> Self {
        Self::Decode {
            line,
            message: message.into(),
        }
    }

    /// Create a lookup error for an undeclared benchmark.
    pub fn lookup(name: impl Into<String>) -> Self {
        Self::Lookup { name: name.into() }
    }

    /// Create a format error for a non-numeric throughput case.
    pub fn format(benchmark: impl Into<String>, case: impl Into<String>) -> Self {
        Self::Format {
            benchmark: benchmark.into(),
            case: case.into(),
        }
    }

    /// Create a zero-duration error for a throughput sample.
    pub fn zero_duration(
        benchmark: impl Into<String>,
        function: impl Into<String>,
        case: impl Into<String>,
    ) -> Self {
        Self::ZeroDuration {
            benchmark: benchmark.into(),
            function: function.into(),
            case: case.into(),
        }
    }

    /// Create an incomplete-result error for a missing table cell.
    pub fn incomplete(
        benchmark: impl Into<String>,
        function: impl Into<String>,
        case: impl Into<String>,
    ) -> Self {
        Self::IncompleteResult {
            benchmark: benchmark.into(),
            function: function.into(),
            case: case.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BenchError::Decode { .. } => ErrorKind::Decode,
            BenchError::Lookup { .. } => ErrorKind::Lookup,
            BenchError::Format { .. } => ErrorKind::Format,
            BenchError::ZeroDuration { .. } => ErrorKind::ZeroDuration,
            BenchError::IncompleteResult { .. } => ErrorKind::IncompleteResult,
            BenchError::Config(_) => ErrorKind::Config,
            BenchError::Io(_) => ErrorKind::Io,
            BenchError::Serialize(_) => ErrorKind::Serialize,
        }
    }

    /// Returns the input line number, if this error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            BenchError::Decode { line, .. } => Some(*line),
            _ => None,
        }
    }
}
