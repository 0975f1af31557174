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

//! SQL text construction and quoting.
//!
//! Builds the catalog query, `SHOW TABLES`, and `INSERT` statements, and
//! provides the identifier/value quoting rules the ORM boundary exposes.
//!
//! Identifier quoting knowingly skips escaping of embedded backticks: a
//! name that already contains a backtick is returned unmodified instead of
//! being double-wrapped.

use serde_json::Value;

/// Builds statement text for the adapter's catalog and insert operations.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Create a builder.
    pub fn new() -> Self {
        Self
    }

    /// Catalog query for every column of one table in one database.
    pub fn build_column_query(&self, database: &str, table: &str) -> String {
        format!(
            "SELECT * FROM system.columns WHERE table = {} AND database = {}",
            quote_string_literal(table),
            quote_string_literal(database)
        )
    }

    /// `SHOW TABLES`, optionally scoped to a database. An empty database
    /// name means the connection's active database.
    pub fn build_show_tables(&self, database: &str) -> String {
        if database.is_empty() {
            "SHOW TABLES".to_string()
        } else {
            format!("SHOW TABLES FROM {}", quote_simple_table_name(database))
        }
    }

    /// `INSERT INTO t (cols) VALUES (...)` with quoted literals.
    ///
    /// Values are expected to be typecast already; this only renders them.
    pub fn build_insert(&self, table: &str, columns: &[(String, Value)]) -> String {
        let names: Vec<String> = columns
            .iter()
            .map(|(name, _)| quote_simple_column_name(name))
            .collect();
        let values: Vec<String> = columns.iter().map(|(_, value)| quote_value(value)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_simple_table_name(table),
            names.join(", "),
            values.join(", ")
        )
    }
}

/// Wrap a table name in backticks.
///
/// A name that already contains a backtick is returned unmodified; embedded
/// backticks are not escaped.
pub fn quote_simple_table_name(name: &str) -> String {
    if name.contains('`') {
        name.to_string()
    } else {
        format!("`{name}`")
    }
}

/// Wrap a column name in backticks, with the same backtick rule as
/// [`quote_simple_table_name`].
pub fn quote_simple_column_name(name: &str) -> String {
    quote_simple_table_name(name)
}

/// Render a value as a SQL literal.
///
/// Non-strings pass through unchanged (rendered bare); strings go through
/// [`quote_string_literal`]. Arrays and objects are rendered as quoted JSON
/// text.
pub fn quote_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_string_literal(s),
        other => quote_string_literal(&other.to_string()),
    }
}

/// Quote a string for safe interpolation into statement text.
///
/// Embedded single quotes are doubled, then NUL, LF, CR, backslash, and
/// SUB are backslash-escaped, and the result is wrapped in single quotes.
pub fn quote_string_literal(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for ch in s.replace('\'', "''").chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\0' => quoted.push_str("\\0"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\x1a' => quoted.push_str("\\Z"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_simple_table_name() {
        assert_eq!(quote_simple_table_name("events"), "`events`");
        assert_eq!(quote_simple_table_name(""), "``");
    }

    #[test]
    fn test_quote_simple_table_name_backtick_passthrough() {
        // No double-wrapping and no escaping of embedded backticks
        assert_eq!(quote_simple_table_name("my`table"), "my`table");
        assert_eq!(quote_simple_table_name("`events`"), "`events`");
    }

    #[test]
    fn test_quote_simple_column_name() {
        assert_eq!(quote_simple_column_name("user_id"), "`user_id`");
        assert_eq!(quote_simple_column_name("a`b"), "a`b");
    }

    #[test]
    fn test_quote_value_non_strings_bare() {
        assert_eq!(quote_value(&json!(null)), "NULL");
        assert_eq!(quote_value(&json!(true)), "1");
        assert_eq!(quote_value(&json!(false)), "0");
        assert_eq!(quote_value(&json!(42)), "42");
        assert_eq!(quote_value(&json!(-3.5)), "-3.5");
    }

    #[test]
    fn test_quote_value_string() {
        assert_eq!(quote_value(&json!("plain")), "'plain'");
        assert_eq!(quote_value(&json!("O'Brien")), "'O''Brien'");
    }

    #[test]
    fn test_quote_string_literal_doubles_quotes() {
        assert_eq!(quote_string_literal("O'Brien"), "'O''Brien'");
        assert_eq!(quote_string_literal("''"), "''''''");
    }

    #[test]
    fn test_quote_string_literal_escapes_control_characters() {
        assert_eq!(quote_string_literal("a\nb"), "'a\\nb'");
        assert_eq!(quote_string_literal("a\rb"), "'a\\rb'");
        assert_eq!(quote_string_literal("a\x1ab"), "'a\\Zb'");
        assert_eq!(quote_string_literal("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_quote_string_literal_backslash_nul_sequence() {
        // Both characters escape independently
        assert_eq!(quote_string_literal("\\\0"), "'\\\\\\0'");
    }

    #[test]
    fn test_quote_string_literal_backslash_quote_sequence() {
        // Quote doubling happens first, then the backslash is escaped
        assert_eq!(quote_string_literal("\\'"), "'\\\\'''");
    }

    #[test]
    fn test_build_column_query() {
        let sql = QueryBuilder::new().build_column_query("analytics", "events");
        assert_eq!(
            sql,
            "SELECT * FROM system.columns WHERE table = 'events' AND database = 'analytics'"
        );
    }

    #[test]
    fn test_build_column_query_quotes_values() {
        let sql = QueryBuilder::new().build_column_query("db", "ta'ble");
        assert_eq!(
            sql,
            "SELECT * FROM system.columns WHERE table = 'ta''ble' AND database = 'db'"
        );
    }

    #[test]
    fn test_build_show_tables() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.build_show_tables(""), "SHOW TABLES");
        assert_eq!(
            builder.build_show_tables("analytics"),
            "SHOW TABLES FROM `analytics`"
        );
    }

    #[test]
    fn test_build_insert() {
        let sql = QueryBuilder::new().build_insert(
            "events",
            &[
                ("id".to_string(), json!(5)),
                ("name".to_string(), json!("page'view")),
                ("payload".to_string(), json!(null)),
            ],
        );
        assert_eq!(
            sql,
            "INSERT INTO `events` (`id`, `name`, `payload`) VALUES (5, 'page''view', NULL)"
        );
    }
}
