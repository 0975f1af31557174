// Copyright (c) 2025 ClickHouse Adapter Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parsing of catalog type strings and catalog row sets.
//!
//! The type-string parser never fails: input that does not match the
//! expected `Name` / `Name(params)` shape degenerates to "the whole string
//! is the base name, no parameters". Catalog rows are likewise extracted
//! best-effort; a missing or oddly typed field becomes an empty string
//! rather than an error.

use crate::client::{Row, RowSet};
use crate::schema::types::NativeType;
use regex::Regex;
use std::sync::LazyLock;

/// `BaseName` optionally followed by one parenthesized parameter blob.
/// No nested parentheses: `Nullable(FixedString(16))` does not match and
/// takes the degenerate path.
static TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w ]+)(?:\(([^)]+)\))?$").expect("static pattern compiles"));

/// One row of `system.columns`, reduced to the fields the builder uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRow {
    /// Database the table belongs to.
    pub database: String,
    /// Table name.
    pub table: String,
    /// Column name.
    pub name: String,
    /// Raw native type string, e.g. `Nullable(FixedString(16))`.
    pub type_name: String,
    /// Default kind: empty, or e.g. `DEFAULT`, `MATERIALIZED`, `ALIAS`.
    pub default_type: String,
    /// Default expression text, meaningful only when `default_type` is empty.
    pub default_expression: String,
}

/// Parse a raw catalog type string into its structured form.
///
/// The parameter blob, if present, is kept as a single opaque string and
/// reattaches verbatim, so [`NativeType::reconstruct`] round-trips the
/// input exactly.
pub fn parse_type_string(raw: &str) -> NativeType {
    if let Some(caps) = TYPE_PATTERN.captures(raw) {
        let name = caps[1].to_string();
        let parameters = caps
            .get(2)
            .map(|m| vec![m.as_str().to_string()])
            .unwrap_or_default();
        NativeType {
            name,
            parameters,
            raw: raw.to_string(),
        }
    } else {
        NativeType {
            name: raw.to_string(),
            parameters: Vec::new(),
            raw: raw.to_string(),
        }
    }
}

/// Get a string field from a row, tolerating absence and non-string values.
///
/// Missing fields and nulls become the empty string; scalar non-strings are
/// rendered to text so a numeric default expression still comes through.
pub fn str_field(row: &Row, name: &str) -> String {
    match row.get(name) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Extract [`ColumnRow`]s from a `system.columns` row set, in server order.
///
/// Never fails; malformed rows produce best-effort entries.
pub fn parse_column_rows(rows: &RowSet) -> Vec<ColumnRow> {
    rows.iter()
        .map(|row| ColumnRow {
            database: str_field(row, "database"),
            table: str_field(row, "table"),
            name: str_field(row, "name"),
            type_name: str_field(row, "type"),
            default_type: str_field(row, "default_type"),
            default_expression: str_field(row, "default_expression"),
        })
        .collect()
}

/// Extract the `name` column from a `SHOW TABLES` row set, in server order.
pub fn parse_table_names(rows: &RowSet) -> Vec<String> {
    rows.iter().map(|row| str_field(row, "name")).collect()
}
