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

//! The schema adapter: catalog introspection, descriptor cache, inserts.
//!
//! [`Schema`] is the ORM-facing surface. It builds statement text via
//! [`QueryBuilder`], runs it through the external [`CommandExecutor`], and
//! parses row sets into descriptors. One instance is meant to serve one
//! request scope; nothing here is synchronized. Callers sharing an
//! instance across threads must synchronize externally or use per-request
//! instances.

use crate::client::CommandExecutor;
use crate::error::{Error, Result};
use crate::schema::builder::build_table;
use crate::schema::parse::{parse_column_rows, parse_table_names};
use crate::schema::sql::QueryBuilder;
use crate::schema::types::TableSchema;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Table-descriptor cache, populated lazily by [`Schema::table_schema`].
///
/// Descriptors are immutable once built; invalidation is the only way an
/// entry changes. [`SchemaCache::invalidate`] drops one table after DDL,
/// [`SchemaCache::clear`] drops everything.
#[derive(Debug, Default)]
pub struct SchemaCache {
    tables: HashMap<String, Arc<TableSchema>>,
}

impl SchemaCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a cached descriptor.
    pub fn get(&self, table: &str) -> Option<Arc<TableSchema>> {
        self.tables.get(table).cloned()
    }

    /// Store a descriptor.
    pub fn put(&mut self, table: impl Into<String>, schema: Arc<TableSchema>) {
        self.tables.insert(table.into(), schema);
    }

    /// Drop one table's descriptor, e.g. after `ALTER TABLE`.
    pub fn invalidate(&mut self, table: &str) {
        self.tables.remove(table);
    }

    /// Drop every cached descriptor.
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// ClickHouse schema adapter.
///
/// # Example
///
/// ```ignore
/// use clickhouse_adapter::Schema;
///
/// let mut schema = Schema::new(executor, "analytics");
/// let table = schema.table_schema("events")?.expect("events exists");
/// schema.insert("events", &[("id".to_string(), serde_json::json!("5"))])?;
/// ```
#[derive(Debug)]
pub struct Schema {
    executor: Arc<dyn CommandExecutor>,
    database: String,
    builder: QueryBuilder,
    cache: SchemaCache,
}

impl Schema {
    /// Create an adapter bound to one executor and one active database.
    pub fn new(executor: Arc<dyn CommandExecutor>, database: impl Into<String>) -> Self {
        Self {
            executor,
            database: database.into(),
            builder: QueryBuilder::new(),
            cache: SchemaCache::new(),
        }
    }

    /// The active database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// List table names via `SHOW TABLES`, in server order.
    ///
    /// An empty `schema` means the connection's active database.
    pub fn find_table_names(&self, schema: &str) -> Result<Vec<String>> {
        let sql = self.builder.build_show_tables(schema);
        debug!(%sql, "listing tables");
        let rows = self.executor.query(&sql)?;
        let names = parse_table_names(&rows);
        debug!(count = names.len(), "found tables");
        Ok(names)
    }

    /// Load one table's schema from the catalog, bypassing the cache.
    ///
    /// Returns `Ok(None)` when the catalog has no rows for the table; a
    /// missing table is not an error. A single query returns the full
    /// column set.
    pub fn load_table_schema(&self, table: &str) -> Result<Option<TableSchema>> {
        let sql = self.builder.build_column_query(&self.database, table);
        debug!(table, %sql, "loading table schema");
        let rows = self.executor.query(&sql)?;
        if rows.is_empty() {
            debug!(table, "table not found in catalog");
            return Ok(None);
        }
        let parsed = parse_column_rows(&rows);
        Ok(build_table(table, &parsed))
    }

    /// Cached variant of [`Schema::load_table_schema`].
    pub fn table_schema(&mut self, table: &str) -> Result<Option<Arc<TableSchema>>> {
        if let Some(cached) = self.cache.get(table) {
            return Ok(Some(cached));
        }
        match self.load_table_schema(table)? {
            Some(schema) => {
                let schema = Arc::new(schema);
                self.cache.put(table, Arc::clone(&schema));
                Ok(Some(schema))
            }
            None => Ok(None),
        }
    }

    /// Reload one table's schema, replacing any cached descriptor.
    pub fn refresh_table_schema(&mut self, table: &str) -> Result<Option<Arc<TableSchema>>> {
        self.cache.invalidate(table);
        self.table_schema(table)
    }

    /// Drop one table's cached descriptor.
    pub fn invalidate_table_schema(&mut self, table: &str) {
        self.cache.invalidate(table);
    }

    /// Drop every cached descriptor.
    pub fn clear_schema_cache(&mut self) {
        self.cache.clear();
    }

    /// Insert one row, coercing each value to its column's native type.
    ///
    /// Every supplied column must exist in the table's schema; an unknown
    /// column fails with [`Error::UnknownColumn`] rather than silently
    /// writing. ClickHouse generates no server-side keys, so there are no
    /// primary-key values to return.
    pub fn insert(&mut self, table: &str, values: &[(String, Value)]) -> Result<()> {
        let schema = self
            .table_schema(table)?
            .ok_or_else(|| Error::TableNotFound(table.to_string()))?;

        let mut cast = Vec::with_capacity(values.len());
        for (name, value) in values {
            let column = schema.column(name).ok_or_else(|| Error::UnknownColumn {
                table: table.to_string(),
                column: name.clone(),
            })?;
            cast.push((name.clone(), column.typecast(value.clone())));
        }

        let sql = self.builder.build_insert(table, &cast);
        debug!(table, columns = cast.len(), "executing insert");
        self.executor.execute(&sql)
    }
}
