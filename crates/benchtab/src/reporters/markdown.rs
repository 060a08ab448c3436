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

//! Markdown rendering of comparison tables.
//!
//! Each table becomes a `####` heading followed by a GitHub-style grid.
//! Best cells are wrapped in `**`; other cells are padded by the same width
//! so columns line up in the raw text.

use crate::reporters::types::{ComparisonTable, TableCell};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Formats a single cell value with its emphasis.
pub fn format_cell(cell: &TableCell) -> String {
    if cell.best {
        format!("**{:5.3}**", cell.value)
    } else {
        format!("  {:5.3}  ", cell.value)
    }
}

/// Escapes characters that would break the grid structure.
pub fn escape_label(label: &str) -> String {
    label.replace('|', "\\|")
}

/// Renders the grid of one table, without its heading.
pub fn render_table(table: &ComparisonTable) -> String {
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(table.cases.iter().map(|case| escape_label(case)));
    builder.push_record(header);

    for row in &table.rows {
        let mut record = vec![escape_label(&row.function)];
        record.extend(row.cells.iter().map(format_cell));
        builder.push_record(record);
    }

    let mut grid = builder.build().with(Style::markdown()).to_string();
    grid.push('\n');
    grid
}

/// Renders all tables as one Markdown document.
pub fn render_markdown(tables: &[ComparisonTable]) -> String {
    let mut md = String::new();
    for table in tables {
        md.push_str(&format!("#### {}\n\n", table.title()));
        md.push_str(&render_table(table));
        md.push('\n');
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::MetricKind;
    use crate::harness::aggregator::ResultSet;

    fn hex_decode_table() -> ComparisonTable {
        let mut set = ResultSet::new("hex-decode", MetricKind::Throughput);
        set.record("impl-a/v1", "1024", 0.476837158203125);
        set.record("impl-a/v2", "1024", 0.95367431640625);
        ComparisonTable::from_result_set(&set).unwrap()
    }

    #[test]
    fn test_format_cell() {
        let plain = TableCell {
            case: "16".to_string(),
            value: 1.23456,
            best: false,
        };
        let best = TableCell {
            best: true,
            ..plain.clone()
        };
        assert_eq!(format_cell(&plain), "  1.235  ");
        assert_eq!(format_cell(&best), "**1.235**");
    }

    #[test]
    fn test_format_cell_wide_value() {
        let cell = TableCell {
            case: "v4".to_string(),
            value: 12345.6789,
            best: false,
        };
        assert_eq!(format_cell(&cell), "  12345.679  ");
    }

    #[test]
    fn test_render_table() {
        let expected = "\
|           | 1024      |
|-----------|-----------|
| impl-a/v1 |   0.477   |
| impl-a/v2 | **0.954** |
";
        assert_eq!(render_table(&hex_decode_table()), expected);
    }

    #[test]
    fn test_pipe_in_labels_escaped() {
        let mut set = ResultSet::new("uuid-parse", MetricKind::Latency);
        set.record("a|b/x", "v|4", 1.0);
        let table = ComparisonTable::from_result_set(&set).unwrap();

        let grid = render_table(&table);
        let lines: Vec<&str> = grid.lines().collect();
        assert!(lines[0].contains("v\\|4"), "header was: {}", lines[0]);
        assert!(lines[2].starts_with("| a\\|b/x |"), "row was: {}", lines[2]);

        // Every row has the same number of unescaped separators
        let columns = |line: &str| line.replace("\\|", "").matches('|').count();
        assert!(lines.iter().all(|line| columns(line) == 3));
    }

    #[test]
    fn test_render_markdown_blocks() {
        let md = render_markdown(&[hex_decode_table()]);
        assert!(md.starts_with("#### hex-decode (GiB/s)\n\n|"));
        assert!(md.ends_with("| **0.954** |\n\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_markdown(&[]), "");
    }
}
