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

//! Error types for the ClickHouse adapter.
//!
//! A missing table is *not* an error: [`Schema::load_table_schema`] returns
//! `Ok(None)` for it. Malformed catalog type strings never fail either;
//! they degrade to best-effort descriptors. The error cases that remain are
//! writes naming unknown columns and failures reported by the external
//! command layer.
//!
//! [`Schema::load_table_schema`]: crate::schema::Schema::load_table_schema

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the adapter or forwarded from the command layer.
#[derive(Debug, Error)]
pub enum Error {
    /// An insert supplied a column that is not part of the table's schema.
    ///
    /// Writes to unknown columns must not silently succeed, so this fails
    /// loudly instead of dropping the value.
    #[error("unknown column `{column}` in table `{table}`")]
    UnknownColumn {
        /// The table the insert targeted.
        table: String,
        /// The column name that has no descriptor.
        column: String,
    },

    /// An insert targeted a table the catalog does not know about.
    #[error("table `{0}` not found")]
    TableNotFound(String),

    /// A statement failed in the external command-execution layer.
    ///
    /// The adapter never retries; executor implementations construct this
    /// variant and it propagates unmodified.
    #[error("command execution failed: {message}")]
    Command {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying cause, when the executor has one.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a [`Error::Command`] with a message and no underlying cause.
    pub fn command(message: impl Into<String>) -> Self {
        Error::Command {
            message: message.into(),
            source: None,
        }
    }

    /// Create a [`Error::Command`] wrapping an underlying error.
    pub fn command_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Command {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_column_display() {
        let err = Error::UnknownColumn {
            table: "events".to_string(),
            column: "extra".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "unknown column `extra` in table `events`"
        );
    }

    #[test]
    fn test_table_not_found_display() {
        let err = Error::TableNotFound("missing".to_string());
        assert_eq!(format!("{err}"), "table `missing` not found");
    }

    #[test]
    fn test_command_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::command_with_source("connection failed", io);
        assert!(format!("{err}").contains("connection failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_command_error_without_source() {
        let err = Error::command("timeout");
        assert!(std::error::Error::source(&err).is_none());
    }
}
