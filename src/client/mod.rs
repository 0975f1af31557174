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

//! Command-execution seam between the adapter and the connection layer.
//!
//! The adapter never talks to the network itself. Connection management,
//! timeouts, retries, and wire formats all belong to the embedding
//! application, which plugs in a [`CommandExecutor`]. The adapter only
//! builds statement text and consumes [`RowSet`]s.
//!
//! Rows are JSON objects (column name → value), which is how ClickHouse
//! serializes row sets over its HTTP interface (`FORMAT JSONEachRow`).

use crate::error::Result;
use serde_json::{Map, Value};

/// A single result row: column name → JSON value.
pub type Row = Map<String, Value>;

/// Ordered set of rows returned by a row-returning statement.
///
/// Row order is the order the server returned them in; the schema loader
/// relies on this for catalog-ordered column descriptors.
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    /// Wrap a sequence of rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows in the set.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the statement returned no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, in server order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate over the rows in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl From<Vec<Row>> for RowSet {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// Abstract interface to the external command-execution layer.
///
/// Implementations run the given statement text against a ClickHouse
/// server and surface failures as [`Error::Command`]. The adapter calls
/// these methods synchronously and never retries.
///
/// [`Error::Command`]: crate::error::Error::Command
pub trait CommandExecutor: Send + Sync + std::fmt::Debug {
    /// Execute a row-returning statement and collect the full row set.
    ///
    /// A single call must return every row; the adapter performs no
    /// pagination.
    fn query(&self, sql: &str) -> Result<RowSet>;

    /// Execute a statement that returns no rows (e.g. `INSERT`).
    fn execute(&self, sql: &str) -> Result<()>;
}
