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

//! Descriptor types for tables, columns, and the two type systems.
//!
//! [`NativeType`] is the structured form of a raw catalog type string
//! (e.g. `FixedString(16)`). [`AbstractType`] is the ORM-level category the
//! surrounding framework keys generic behavior on, and [`AppType`] is the
//! coercion hint derived from it. A [`TableSchema`] owns its
//! [`ColumnSchema`]s exclusively; there is no sharing between tables.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// ORM-level type category, independent of ClickHouse's native type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractType {
    /// 8-bit integer.
    TinyInt,
    /// 16-bit integer.
    SmallInt,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Floating point surfaced as text to preserve precision.
    BigFloat,
    /// Variable-length string. Also the designated default for unmapped
    /// native types.
    String,
    /// Fixed-length string.
    FixedString,
    /// Calendar date.
    Date,
    /// Date with time of day.
    DateTime,
    /// Boolean.
    Boolean,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Opaque byte string.
    Binary,
    /// JSON document.
    Json,
    /// Opaque handle passed through untouched.
    Resource,
}

impl AbstractType {
    /// Stable lowercase name used by the ORM layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            AbstractType::TinyInt => "tinyint",
            AbstractType::SmallInt => "smallint",
            AbstractType::Integer => "integer",
            AbstractType::BigInt => "bigint",
            AbstractType::BigFloat => "bigfloat",
            AbstractType::String => "string",
            AbstractType::FixedString => "char",
            AbstractType::Date => "date",
            AbstractType::DateTime => "datetime",
            AbstractType::Boolean => "boolean",
            AbstractType::Float => "float",
            AbstractType::Double => "double",
            AbstractType::Binary => "binary",
            AbstractType::Json => "json",
            AbstractType::Resource => "resource",
        }
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-level coercion hint derived from an [`AbstractType`].
///
/// Drives [`ColumnSchema::typecast`] on the insert path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppType {
    /// Cast to a native integer.
    Integer,
    /// Cast to a double-precision float.
    Double,
    /// Cast to a boolean.
    Boolean,
    /// Cast to a string.
    String,
    /// Opaque value, passed through untouched.
    Resource,
}

impl AppType {
    /// Stable lowercase name of the hint.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Integer => "integer",
            AppType::Double => "double",
            AppType::Boolean => "boolean",
            AppType::String => "string",
            AppType::Resource => "resource",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured form of a raw catalog type string.
///
/// Invariant: when `parameters` is non-empty, `raw` equals
/// `name + "(" + parameters.join(",") + ")"`, else `raw == name`. The
/// parser captures the parameter blob verbatim, so reconstruction
/// round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeType {
    /// Base type name, e.g. `FixedString`.
    pub name: String,
    /// Parameter blob(s) from the parenthesized group. Not split further;
    /// `FixedString(16)` yields `["16"]` and `Decimal(18, 4)` yields
    /// `["18, 4"]`.
    pub parameters: Vec<String>,
    /// The original catalog text, kept for display.
    pub raw: String,
}

impl NativeType {
    /// Rebuild the catalog text from the parsed parts.
    pub fn reconstruct(&self) -> String {
        if self.parameters.is_empty() {
            self.name.clone()
        } else {
            format!("{}({})", self.name, self.parameters.join(","))
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Descriptor for one table column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSchema {
    /// Column name as reported by the catalog.
    pub name: String,
    /// Parsed native type.
    pub native_type: NativeType,
    /// ORM-level type category.
    pub abstract_type: AbstractType,
    /// Coercion hint for application values.
    pub app_type: AppType,
    /// `true` iff the unparsed native type string is exactly one of the
    /// `UInt8`/`UInt16`/`UInt32`/`UInt64` family.
    pub is_unsigned: bool,
    /// Literal default expression, present only when the catalog reported
    /// no explicit default kind (a `MATERIALIZED`/`ALIAS` default kind
    /// suppresses it).
    pub default_value: Option<String>,
}

impl ColumnSchema {
    /// Coerce an application value into the form this column's native type
    /// expects on the wire.
    ///
    /// Numeric strings become numbers for integer and float columns,
    /// numbers become strings for string-typed columns, and opaque values
    /// pass through untouched. Values that cannot be coerced are returned
    /// unchanged rather than failing; the server is the final authority.
    pub fn typecast(&self, value: Value) -> Value {
        if value.is_null() {
            return value;
        }
        match self.app_type {
            AppType::Integer => match value {
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Value::from(i)
                    } else if let Some(u) = n.as_u64() {
                        Value::from(u)
                    } else if let Some(f) = n.as_f64() {
                        Value::from(f as i64)
                    } else {
                        Value::Number(n)
                    }
                }
                Value::String(s) => match s.trim().parse::<i64>() {
                    Ok(i) => Value::from(i),
                    Err(_) => match s.trim().parse::<u64>() {
                        Ok(u) => Value::from(u),
                        Err(_) => Value::String(s),
                    },
                },
                Value::Bool(b) => Value::from(b as i64),
                other => other,
            },
            AppType::Double => match value {
                Value::Number(n) => Value::Number(n),
                Value::String(s) => match s.trim().parse::<f64>() {
                    Ok(f) => Value::from(f),
                    Err(_) => Value::String(s),
                },
                Value::Bool(b) => Value::from(if b { 1.0 } else { 0.0 }),
                other => other,
            },
            AppType::Boolean => match value {
                Value::Bool(b) => Value::Bool(b),
                Value::Number(n) => Value::Bool(n.as_f64().map(|f| f != 0.0).unwrap_or(false)),
                Value::String(s) => match s.as_str() {
                    "1" | "true" => Value::Bool(true),
                    "0" | "false" => Value::Bool(false),
                    _ => Value::String(s),
                },
                other => other,
            },
            AppType::String => match value {
                Value::String(s) => Value::String(s),
                Value::Number(n) => Value::String(n.to_string()),
                Value::Bool(b) => Value::String((if b { "1" } else { "0" }).to_string()),
                other => other,
            },
            // Binary stays opaque; the command layer ships it as-is.
            AppType::Resource => value,
        }
    }
}

/// Descriptor for one table, with columns in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    /// Database the table lives in.
    pub schema_name: String,
    /// Table name.
    pub name: String,
    /// `schema_name.name`.
    pub full_name: String,
    columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Assemble a table descriptor. Column order is preserved.
    pub fn new(
        schema_name: impl Into<String>,
        name: impl Into<String>,
        columns: Vec<ColumnSchema>,
    ) -> Self {
        let schema_name = schema_name.into();
        let name = name.into();
        let full_name = format!("{schema_name}.{name}");
        Self {
            schema_name,
            name,
            full_name,
            columns,
        }
    }

    /// The column descriptors, in catalog order.
    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    /// Look up one column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The column names, in catalog order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column(name: &str, abstract_type: AbstractType, app_type: AppType) -> ColumnSchema {
        ColumnSchema {
            name: name.to_string(),
            native_type: NativeType {
                name: "Int32".to_string(),
                parameters: Vec::new(),
                raw: "Int32".to_string(),
            },
            abstract_type,
            app_type,
            is_unsigned: false,
            default_value: None,
        }
    }

    #[test]
    fn test_native_type_reconstruct_with_parameters() {
        let native = NativeType {
            name: "FixedString".to_string(),
            parameters: vec!["16".to_string()],
            raw: "FixedString(16)".to_string(),
        };
        assert_eq!(native.reconstruct(), "FixedString(16)");
        assert_eq!(native.to_string(), "FixedString(16)");
    }

    #[test]
    fn test_native_type_reconstruct_bare() {
        let native = NativeType {
            name: "UInt64".to_string(),
            parameters: Vec::new(),
            raw: "UInt64".to_string(),
        };
        assert_eq!(native.reconstruct(), "UInt64");
    }

    #[test]
    fn test_typecast_integer_from_string() {
        let col = column("id", AbstractType::Integer, AppType::Integer);
        assert_eq!(col.typecast(json!("5")), json!(5));
        assert_eq!(col.typecast(json!(" 42 ")), json!(42));
        assert_eq!(col.typecast(json!(7)), json!(7));
        assert_eq!(col.typecast(json!(true)), json!(1));
        // Not a number: left for the server to reject
        assert_eq!(col.typecast(json!("abc")), json!("abc"));
    }

    #[test]
    fn test_typecast_integer_from_float_truncates() {
        let col = column("id", AbstractType::Integer, AppType::Integer);
        assert_eq!(col.typecast(json!(3.9)), json!(3));
    }

    #[test]
    fn test_typecast_integer_u64_range() {
        let col = column("id", AbstractType::BigInt, AppType::Integer);
        assert_eq!(
            col.typecast(json!("18446744073709551615")),
            json!(18446744073709551615u64)
        );
    }

    #[test]
    fn test_typecast_double_from_string() {
        let col = column("ratio", AbstractType::Double, AppType::Double);
        assert_eq!(col.typecast(json!("2.5")), json!(2.5));
        assert_eq!(col.typecast(json!(1.25)), json!(1.25));
    }

    #[test]
    fn test_typecast_string_from_number() {
        let col = column("label", AbstractType::String, AppType::String);
        assert_eq!(col.typecast(json!(12)), json!("12"));
        assert_eq!(col.typecast(json!("x")), json!("x"));
        assert_eq!(col.typecast(json!(true)), json!("1"));
    }

    #[test]
    fn test_typecast_null_passthrough() {
        let col = column("id", AbstractType::Integer, AppType::Integer);
        assert_eq!(col.typecast(Value::Null), Value::Null);
    }

    #[test]
    fn test_typecast_resource_opaque() {
        let col = column("blob", AbstractType::Binary, AppType::Resource);
        assert_eq!(col.typecast(json!("\u{1}\u{2}")), json!("\u{1}\u{2}"));
    }

    #[test]
    fn test_table_schema_full_name_and_lookup() {
        let table = TableSchema::new(
            "analytics",
            "events",
            vec![
                column("id", AbstractType::Integer, AppType::Integer),
                column("name", AbstractType::String, AppType::String),
            ],
        );
        assert_eq!(table.full_name, "analytics.events");
        assert_eq!(table.columns().len(), 2);
        assert!(table.column("id").is_some());
        assert!(table.column("missing").is_none());
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn test_abstract_type_names() {
        assert_eq!(AbstractType::BigFloat.as_str(), "bigfloat");
        assert_eq!(AbstractType::FixedString.as_str(), "char");
        assert_eq!(AppType::Resource.to_string(), "resource");
    }
}
