// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use std::{num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Failures while resolving a key to its oracle pattern.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The key has no entry in the lookup table.
    #[error("Invalid key! There is no {key}")]
    KeyNotFound { key: String },

    /// The lookup file could not be opened or is not well-formed delimited text.
    #[error("Failed to load lookup table '{}': {source}", .path.display())]
    TableLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row lacks a required column.
    #[error("Lookup table '{}' has no {column} column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A row carries a value that is not an integer.
    #[error("Lookup table '{}' line {line}: value '{value}' for '{name}' is not an integer", .path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl OracleError {
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, OracleError::KeyNotFound { .. })
    }
}
