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

//! Harness message decoding.
//!
//! The benchmark harness writes one JSON message per line. Only
//! `benchmark-complete` messages carry a measurement; everything else is
//! skipped. A completed measurement looks like:
//!
//! ```json
//! {"reason":"benchmark-complete","id":"hex-decode/hex-simd/auto/1024","typical":{"estimate":812.4,"unit":"ns"}}
//! ```
//!
//! The id is `benchmark/implementation/variant/case[/...]`; only the first
//! four segments are used.

use crate::error::{BenchError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, BufRead};

/// Discriminator value of a completed measurement.
pub const BENCHMARK_COMPLETE: &str = "benchmark-complete";

/// One observed measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Benchmark name (first id segment).
    pub benchmark: String,
    /// `implementation/variant`.
    pub function: String,
    /// Case label, usually an input size.
    pub case: String,
    /// Typical elapsed time in nanoseconds.
    pub elapsed_ns: f64,
}

impl Sample {
    /// Builds a sample from a slash-delimited harness id.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Decode`] if the id has fewer than four segments.
    pub fn from_id(id: &str, elapsed_ns: f64, line: usize) -> Result<Self> {
        let mut parts = id.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(benchmark), Some(implementation), Some(variant), Some(case)) => Ok(Self {
                benchmark: benchmark.to_string(),
                function: format!("{}/{}", implementation, variant),
                case: case.to_string(),
                elapsed_ns,
            }),
            _ => Err(BenchError::decode(
                line,
                format!(
                    "id '{}' must have the form benchmark/implementation/variant/case",
                    id
                ),
            )),
        }
    }
}

#[derive(Deserialize)]
struct CompletedRecord {
    id: String,
    typical: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    estimate: f64,
}

/// Decodes a single input line.
///
/// Returns `Ok(None)` for blank lines and for messages that are not
/// completed measurements.
///
/// # Errors
///
/// Returns [`BenchError::Decode`] if the line is not a JSON object with a
/// string `reason`, or if a completed measurement lacks a usable `id` or
/// `typical.estimate`.
///
/// # Examples
///
/// ```rust
/// use benchtab::harness::events::parse_line;
///
/// let line = r#"{"reason":"benchmark-complete","id":"hex-check/faster-hex/fallback/16","typical":{"estimate":4.5}}"#;
/// let sample = parse_line(line, 1).unwrap().unwrap();
/// assert_eq!(sample.function, "faster-hex/fallback");
/// assert_eq!(sample.case, "16");
///
/// assert!(parse_line("", 2).unwrap().is_none());
/// assert!(parse_line(r#"{"reason":"group-complete"}"#, 3).unwrap().is_none());
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Sample>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| BenchError::decode(line_number, e.to_string()))?;
    if !value.is_object() {
        return Err(BenchError::decode(line_number, "expected a JSON object"));
    }

    let reason = value
        .get("reason")
        .and_then(Value::as_str)
        .ok_or_else(|| BenchError::decode(line_number, "record has no string `reason` field"))?;
    if reason != BENCHMARK_COMPLETE {
        tracing::debug!(line = line_number, reason, "skipping record");
        return Ok(None);
    }

    let record: CompletedRecord = serde_json::from_value(value)
        .map_err(|e| BenchError::decode(line_number, e.to_string()))?;

    let elapsed_ns = record.typical.estimate;
    if !elapsed_ns.is_finite() || elapsed_ns < 0.0 {
        return Err(BenchError::decode(
            line_number,
            format!("typical estimate must be a non-negative duration, got {}", elapsed_ns),
        ));
    }

    Sample::from_id(&record.id, elapsed_ns, line_number).map(Some)
}

/// Lazy reader of samples from line-delimited harness output.
///
/// Yields samples in input order. Iteration stops after the first error,
/// and the reader cannot be rewound.
///
/// # Examples
///
/// ```rust
/// use benchtab::harness::events::SampleReader;
/// use std::io::Cursor;
///
/// let input = "\n{\"reason\":\"benchmark-complete\",\"id\":\"uuid-parse/uuid/simple/v4\",\"typical\":{\"estimate\":21.0}}\n";
/// let samples: Vec<_> = SampleReader::new(Cursor::new(input))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(samples.len(), 1);
/// assert_eq!(samples[0].benchmark, "uuid-parse");
/// ```
pub struct SampleReader<R: BufRead> {
    reader: R,
    buffer: String,
    line_number: usize,
    records: usize,
    finished: bool,
}

impl<R: BufRead> SampleReader<R> {
    /// Create a new sample reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_number: 0,
            records: 0,
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Number of non-blank records decoded so far.
    #[inline]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Read the next completed measurement.
    pub fn next_sample(&mut self) -> Result<Option<Sample>> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => self.line_number += 1,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(BenchError::decode(self.line_number + 1, "invalid UTF-8"));
                }
                Err(e) => return Err(BenchError::Io(e)),
            }

            if self.buffer.trim().is_empty() {
                continue;
            }
            self.records += 1;

            if let Some(sample) = parse_line(&self.buffer, self.line_number)? {
                return Ok(Some(sample));
            }
        }
    }
}

impl<R: BufRead> Iterator for SampleReader<R> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_sample() {
            Ok(Some(sample)) => Some(Ok(sample)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
