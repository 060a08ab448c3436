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

//! JSON export for comparison tables.

use crate::error::{BenchError, Result};
use crate::reporters::types::ComparisonTable;

/// Serializes tables as a pretty-printed JSON array.
pub fn render_json(tables: &[ComparisonTable]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(tables).map_err(|e| BenchError::Serialize(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::MetricKind;
    use crate::harness::aggregator::ResultSet;
    use serde_json::Value;

    #[test]
    fn test_render_json() {
        let mut set = ResultSet::new("uuid-format", MetricKind::Latency);
        set.record("uuid-simd/auto", "hyphenated", 12.5);
        set.record("uuid/fallback", "hyphenated", 40.0);
        let table = ComparisonTable::from_result_set(&set).unwrap();

        let json = render_json(&[table]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "uuid-format");
        assert_eq!(value[0]["metric"], "latency");
        assert_eq!(value[0]["unit"], "ns");
        assert_eq!(value[0]["cases"][0], "hyphenated");
        assert_eq!(value[0]["rows"][0]["function"], "uuid-simd/auto");
        assert_eq!(value[0]["rows"][0]["cells"][0]["value"], 12.5);
        assert_eq!(value[0]["rows"][0]["cells"][0]["best"], true);
        assert_eq!(value[0]["rows"][1]["cells"][0]["best"], false);
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]\n");
    }
}
