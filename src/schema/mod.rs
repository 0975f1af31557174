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

//! Schema introspection for ClickHouse.
//!
//! Discovers table and column metadata from `system.columns`, maps native
//! type strings to the ORM's abstract categories, and drives value
//! coercion on the insert path.
//!
//! ## Module Structure
//!
//! - `types`: descriptor types (abstract/native types, columns, tables)
//! - `type_mapping`: native → abstract and abstract → application maps
//! - `parse`: type-string parser and catalog row-set extraction
//! - `builder`: catalog rows → column/table descriptors
//! - `sql`: statement text construction and quoting
//! - `service`: the [`Schema`] adapter and its descriptor cache

pub mod builder;
pub mod parse;
pub mod service;
pub mod sql;
pub mod type_mapping;
pub mod types;

// Re-export commonly used types
pub use parse::ColumnRow;
pub use service::{Schema, SchemaCache};
pub use sql::QueryBuilder;
pub use types::{AbstractType, AppType, ColumnSchema, NativeType, TableSchema};
