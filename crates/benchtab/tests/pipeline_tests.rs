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

//! End-to-end tests of the parse → aggregate → render pipeline.
//!
//! Covers:
//! - Report ordering (registry order, first-seen rows and columns)
//! - Metric computation and best-cell marking
//! - Fail-fast behaviour for every error kind
//! - Determinism across repeated runs

use benchtab::harness::{aggregate, Sample, SampleReader};
use benchtab::reporters::build_tables;
use benchtab::{generate_report, BenchError, ErrorKind, ExportFormat, Registry};
use proptest::prelude::*;
use std::io::Cursor;

fn complete(id: &str, estimate: f64) -> String {
    format!(
        r#"{{"reason":"benchmark-complete","id":"{}","typical":{{"estimate":{},"unit":"ns"}}}}"#,
        id, estimate
    )
}

fn markdown(input: &str) -> Result<String, BenchError> {
    generate_report(Cursor::new(input), Registry::builtin(), ExportFormat::Markdown)
}

// ============================================================================
// Report contents
// ============================================================================

#[test]
fn test_hex_decode_scenario() {
    let input = [
        complete("hex-decode/impl-a/v1/1024", 2000.0),
        complete("hex-decode/impl-a/v2/1024", 1000.0),
    ]
    .join("\n");

    let expected = "\
#### hex-decode (GiB/s)

|           | 1024      |
|-----------|-----------|
| impl-a/v1 |   0.477   |
| impl-a/v2 | **0.954** |

";
    assert_eq!(markdown(&input).unwrap(), expected);
}

#[test]
fn test_one_gib_per_second() {
    let input = complete("base64-encode/base64-simd/auto/1073741824", 1e9);
    let report = markdown(&input).unwrap();
    assert!(report.contains("**1.000**"), "report was:\n{}", report);
}

#[test]
fn test_latency_values_unchanged() {
    let input = [
        complete("uuid-format/uuid-simd/auto/hyphenated", 42.5),
        complete("uuid-format/uuid/fallback/hyphenated", 97.25),
    ]
    .join("\n");

    let report = markdown(&input).unwrap();
    assert!(report.starts_with("#### uuid-format (ns)\n"));
    assert!(report.contains("| uuid-simd/auto | **42.500** |"));
    assert!(report.contains("| uuid/fallback  |   97.250   |"));
}

#[test]
fn test_zero_latency_rendered() {
    let input = [
        complete("uuid-parse/a/x/v4", 0.0),
        complete("uuid-parse/b/x/v4", 12.0),
    ]
    .join("\n");

    let report = markdown(&input).unwrap();
    assert!(report.contains("| a/x | **0.000** |"), "report was:\n{}", report);
}

#[test]
fn test_pipe_in_case_label_keeps_columns() {
    let input = complete("uuid-parse/a/x/v|4", 5.0);
    let report = markdown(&input).unwrap();
    let header = report.lines().nth(2).unwrap();
    assert!(header.contains("v\\|4"), "header was: {}", header);
}

#[test]
fn test_tied_maximum_marks_both() {
    let input = [
        complete("hex-encode/a/x/4096", 500.0),
        complete("hex-encode/b/x/4096", 500.0),
        complete("hex-encode/c/x/4096", 900.0),
    ]
    .join("\n");

    let report = markdown(&input).unwrap();
    assert_eq!(report.matches("**").count(), 4);
    assert!(report.contains("| a/x | **"));
    assert!(report.contains("| b/x | **"));
    assert!(report.contains("| c/x |   "));
}

#[test]
fn test_tables_follow_registry_order() {
    let input = [
        complete("ascii-check/std/is_ascii/64", 5.0),
        complete("uuid-parse/uuid/simple/v4", 20.0),
        complete("base64-check/base64-simd/auto/64", 5.0),
        complete("hex-check/hex-simd/auto/64", 5.0),
    ]
    .join("\n");

    let report = markdown(&input).unwrap();
    let titles: Vec<&str> = report.lines().filter(|l| l.starts_with("####")).collect();
    assert_eq!(
        titles,
        [
            "#### base64-check (GiB/s)",
            "#### hex-check (GiB/s)",
            "#### uuid-parse (ns)",
            "#### ascii-check (GiB/s)",
        ]
    );
}

#[test]
fn test_first_seen_columns_and_rows() {
    let input = [
        complete("base32-encode/zz/v/4096", 10.0),
        complete("base32-encode/aa/v/4096", 10.0),
        complete("base32-encode/zz/v/16", 10.0),
        complete("base32-encode/aa/v/16", 10.0),
    ]
    .join("\n");

    let report = markdown(&input).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert!(lines[2].contains("4096") && lines[2].find("4096") < lines[2].find("16"));
    assert!(lines[4].starts_with("| zz/v"));
    assert!(lines[5].starts_with("| aa/v"));
}

#[test]
fn test_non_measurement_records_ignored() {
    let input = [
        r#"{"reason":"group-complete","group_name":"hex-decode","benchmarks":["a"]}"#.to_string(),
        String::new(),
        complete("hex-decode/a/x/16", 10.0),
        "   ".to_string(),
    ]
    .join("\n");

    let report = markdown(&input).unwrap();
    assert_eq!(report.matches("####").count(), 1);
}

#[test]
fn test_result_set_names_match_input() {
    let input = [
        complete("hex-decode/a/x/16", 10.0),
        complete("uuid-parse/a/x/v4", 10.0),
        complete("hex-decode/b/x/16", 10.0),
    ]
    .join("\n");

    let samples: Vec<Sample> = SampleReader::new(Cursor::new(input))
        .collect::<Result<_, _>>()
        .unwrap();
    let results = aggregate(Registry::builtin(), &samples).unwrap();

    let mut names: Vec<&str> = results.iter().map(|set| set.name()).collect();
    names.sort_unstable();
    assert_eq!(names, ["hex-decode", "uuid-parse"]);
}

#[test]
fn test_json_format() {
    let input = complete("hex-decode/a/x/1024", 1000.0);
    let json = generate_report(Cursor::new(input), Registry::builtin(), ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["name"], "hex-decode");
    assert_eq!(value[0]["unit"], "GiB/s");
    assert_eq!(value[0]["rows"][0]["cells"][0]["best"], true);
}

#[test]
fn test_custom_registry() {
    let registry =
        Registry::from_json(r#"[{"name": "crc32", "metric": "throughput"}]"#).unwrap();
    let input = complete("crc32/crc32fast/auto/1024", 100.0);

    let report = generate_report(Cursor::new(input), &registry, ExportFormat::Markdown).unwrap();
    assert!(report.starts_with("#### crc32 (GiB/s)"));

    let input = complete("hex-decode/a/x/1024", 100.0);
    let err = generate_report(Cursor::new(input), &registry, ExportFormat::Markdown).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}

// ============================================================================
// Fail-fast errors
// ============================================================================

#[test]
fn test_unknown_benchmark_fails() {
    let input = [complete("hex-decode/a/x/16", 1.0), complete("foo/a/x/16", 1.0)].join("\n");
    let err = markdown(&input).unwrap_err();
    assert!(matches!(err, BenchError::Lookup { ref name } if name == "foo"));
}

#[test]
fn test_non_integer_case_fails() {
    let input = complete("hex-encode/a/x/abc", 1.0);
    let err = markdown(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_malformed_line_fails() {
    let input = format!("{}\nthis is not json\n", complete("hex-decode/a/x/16", 1.0));
    let err = markdown(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_decode_error_wins_over_later_lookup_error() {
    let input = format!("{}\n{{broken\n", complete("foo/a/x/16", 1.0));
    let err = markdown(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_zero_elapsed_throughput_fails() {
    let input = complete("hex-encode/a/x/64", 0.0);
    let err = markdown(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ZeroDuration);
}

#[test]
fn test_incomplete_table_fails() {
    let input = [
        complete("hex-check/a/x/16", 1.0),
        complete("hex-check/b/x/16", 1.0),
        complete("hex-check/a/x/32", 1.0),
    ]
    .join("\n");
    let err = markdown(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteResult);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_repeated_runs_identical() {
    let input = [
        complete("hex-decode/a/x/16", 3.0),
        complete("hex-decode/b/x/16", 2.0),
        complete("uuid-parse/a/x/v4", 7.0),
        complete("uuid-parse/b/x/v4", 7.0),
        complete("base64-decode/a/x/64", 9.0),
        complete("base64-decode/b/x/64", 1.0),
    ]
    .join("\n");

    let first = markdown(&input).unwrap();
    let second = markdown(&input).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_report_is_deterministic(
        estimates in prop::collection::vec(1.0f64..1e6, 12)
    ) {
        let mut lines = Vec::new();
        let mut i = 0;
        for bench in ["hex-encode", "uuid-format"] {
            for function in ["b/x", "a/y", "c/z"] {
                for case in ["4096", "64"] {
                    lines.push(complete(&format!("{}/{}/{}", bench, function, case), estimates[i]));
                    i += 1;
                }
            }
        }
        let input = lines.join("\n");

        let first = markdown(&input).unwrap();
        let second = markdown(&input).unwrap();
        prop_assert_eq!(&first, &second);

        let samples: Vec<Sample> = SampleReader::new(Cursor::new(input.as_str()))
            .collect::<Result<_, _>>()
            .unwrap();
        let results = aggregate(Registry::builtin(), &samples).unwrap();
        let tables = build_tables(&results, Registry::builtin()).unwrap();
        prop_assert_eq!(tables.len(), 2);
        for table in &tables {
            prop_assert_eq!(table.rows.len(), 3);
            for col in 0..table.cases.len() {
                prop_assert!(table.rows.iter().any(|row| row.cells[col].best));
            }
        }
    }
}
