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

//! ClickHouse schema-introspection and query-building adapter.
//!
//! This crate lets an ORM layer talk to ClickHouse's non-relational type
//! system: it discovers table and column metadata from `system.columns`,
//! maps native type strings (e.g. `FixedString(16)`) to abstract ORM type
//! categories, quotes identifiers and values, and coerces application
//! values into wire-safe form on inserts.
//!
//! ## Overview
//!
//! - [`Schema`] - the adapter surface: table lookup, descriptor cache, inserts
//! - [`CommandExecutor`] - the seam to the external command-execution layer
//! - [`TableSchema`] / [`ColumnSchema`] - immutable descriptors in catalog order
//! - [`schema::parse`] / [`schema::type_mapping`] - the type-string parser
//!   and static type maps driving everything above
//!
//! Connection handling, retries, timeouts, and the wire protocol are *not*
//! part of this crate; the embedding application supplies them through its
//! [`CommandExecutor`] implementation.
//!
//! ## Example
//!
//! ```ignore
//! use clickhouse_adapter::{CommandExecutor, Schema};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let executor: Arc<dyn CommandExecutor> = Arc::new(MyHttpExecutor::new(url));
//! let mut schema = Schema::new(executor, "analytics");
//!
//! for name in schema.find_table_names("")? {
//!     println!("{name}");
//! }
//!
//! if let Some(table) = schema.table_schema("events")? {
//!     println!("{} has {} columns", table.full_name, table.columns().len());
//! }
//!
//! schema.insert("events", &[
//!     ("id".to_string(), json!("5")),       // coerced to 5
//!     ("name".to_string(), json!("click")),
//! ])?;
//! ```

pub mod client;
pub mod error;
pub mod logging;
pub mod schema;

// Re-export main types
pub use client::{CommandExecutor, Row, RowSet};
pub use error::{Error, Result};
pub use logging::{init_logging, LogConfig};
pub use schema::{AbstractType, AppType, ColumnSchema, NativeType, Schema, SchemaCache, TableSchema};

// Re-export the quoting surface for callers that build their own statements
pub use schema::sql::{quote_simple_column_name, quote_simple_table_name, quote_value};
