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

//! Assembly of column and table descriptors from catalog rows.
//!
//! [`build_column`] is deliberately infallible: unexpected catalog rows
//! produce best-effort descriptors rather than errors, since a schema load
//! that fails on one odd column would take the whole table with it.

use crate::schema::parse::{parse_type_string, ColumnRow};
use crate::schema::type_mapping::{
    abstract_type_for, app_type_for, is_unsigned, DEFAULT_ABSTRACT_TYPE,
};
use crate::schema::types::{ColumnSchema, TableSchema};

/// Build one column descriptor from a catalog row.
///
/// Lookup order matters: the full raw type string is tried against the
/// type map first, then the parsed base name, with the base-name entry
/// overriding only the abstract type. The unsigned check runs on the
/// original, unparsed string.
pub fn build_column(row: &ColumnRow) -> ColumnSchema {
    let raw = row.type_name.as_str();

    let mut abstract_type = abstract_type_for(raw).unwrap_or(DEFAULT_ABSTRACT_TYPE);
    let native_type = parse_type_string(raw);
    if let Some(by_base) = abstract_type_for(&native_type.name) {
        abstract_type = by_base;
    }

    let default_value = if row.default_type.is_empty() && !row.default_expression.is_empty() {
        Some(row.default_expression.clone())
    } else {
        // An explicit default kind (MATERIALIZED, ALIAS, ...) suppresses
        // the literal default.
        None
    };

    ColumnSchema {
        name: row.name.clone(),
        abstract_type,
        app_type: app_type_for(abstract_type),
        is_unsigned: is_unsigned(raw),
        native_type,
        default_value,
    }
}

/// Build a table descriptor from catalog rows, in catalog order.
///
/// Returns `None` for an empty row set — the documented "table not found"
/// signal. The schema name comes from the first row's `database` field.
pub fn build_table(table: &str, rows: &[ColumnRow]) -> Option<TableSchema> {
    let first = rows.first()?;
    let columns = rows.iter().map(build_column).collect();
    Some(TableSchema::new(first.database.clone(), table, columns))
}
