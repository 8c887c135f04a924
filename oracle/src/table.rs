// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::{error::OracleError, mask::Uint4};

/// Column holding the searchable key.
pub const NAME_COLUMN: &str = "name";

/// Field separator of lookup files.
pub const DELIMITER: u8 = b';';

/// Mapping from entry name to its masked value, read from a `;`-delimited file with a header row.
/// The header must contain a `name` column; the first other column holds the integer values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: FxHashMap<String, Uint4>,
}

impl LookupTable {
    /// Reads the whole lookup file at `path`. The file is closed before returning. When a name
    /// appears more than once, the last row wins.
    /// # Errors
    ///
    /// Will return `Err` if
    /// - `path` does not exist or cannot be read.
    /// - the file is not well-formed delimited text (e.g. rows of differing length).
    /// - the header has no `name` column or no value column.
    /// - a value is not an integer.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OracleError> {
        let path = path.as_ref();
        let table_load = |source: csv::Error| OracleError::TableLoad {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(table_load)?;

        let headers = reader.headers().map_err(table_load)?.clone();
        let name_idx = headers
            .iter()
            .position(|h| h == NAME_COLUMN)
            .ok_or_else(|| OracleError::MissingColumn {
                path: path.to_path_buf(),
                column: NAME_COLUMN,
            })?;
        let value_idx = (0..headers.len())
            .find(|&idx| idx != name_idx)
            .ok_or_else(|| OracleError::MissingColumn {
                path: path.to_path_buf(),
                column: "value",
            })?;

        let mut entries = FxHashMap::default();
        for record in reader.records() {
            let record = record.map_err(table_load)?;
            // Rows are length-checked against the header by the reader, so both fields exist.
            let name = record.get(name_idx).unwrap_or_default();
            let value = record.get(value_idx).unwrap_or_default();
            let masked = Uint4::parse(value).map_err(|source| OracleError::InvalidValue {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                name: name.to_owned(),
                value: value.to_owned(),
                source,
            })?;
            entries.insert(name.to_owned(), masked);
        }

        tracing::trace!(path = %path.display(), entries = entries.len(), "loaded lookup table");
        Ok(Self { entries })
    }

    /// Builds a table from in-memory `(name, value)` rows, masking each value.
    #[must_use]
    pub fn from_entries<K, V>(rows: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Uint4>,
    {
        Self {
            entries: rows
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Looks up the masked value for `key`.
    /// # Errors
    ///
    /// Returns [`OracleError::KeyNotFound`] if the table has no entry named `key`.
    pub fn get(&self, key: &str) -> Result<Uint4, OracleError> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| OracleError::KeyNotFound {
                key: key.to_owned(),
            })
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
