//! In-memory tabular data produced by loaders.

use std::collections::HashMap;

use serde::Serialize;

/// A fully materialized table of nullable string cells.
///
/// Rows always have exactly `column_names.len()` cells; loaders reject
/// ragged input before constructing a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    column_names: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create a table from a header and its rows.
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { column_names, rows }
    }

    /// Column names in file order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Rows in file order.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Cells of the column at `index`, top to bottom.
    pub fn column(&self, index: usize) -> Option<Vec<Option<&str>>> {
        if index >= self.num_columns() {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).and_then(|c| c.as_deref()))
                .collect(),
        )
    }

    /// Replace all column names, keeping the data untouched.
    ///
    /// Returns `false` (and leaves the table unchanged) if the number of
    /// names does not match the number of columns.
    #[must_use]
    pub fn rename_columns(&mut self, names: Vec<String>) -> bool {
        if names.len() != self.column_names.len() {
            return false;
        }
        self.column_names = names;
        true
    }

    /// Whether any column name appears more than once.
    pub fn has_duplicate_columns(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.column_names.len());
        !self.column_names.iter().all(|name| seen.insert(name.as_str()))
    }
}

/// Number repeated column names.
///
/// The first occurrence of a name is kept as-is; the k-th repeat becomes
/// `{name}_{k}`. Generated names are not checked against existing ones, so
/// `a,a,a_1` becomes `a,a_1,a_1`.
pub fn dedupe_column_names(names: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(names.len());
    names
        .iter()
        .map(|name| {
            let count = seen.entry(name.as_str()).or_insert(0);
            let renamed = if *count == 0 {
                name.clone()
            } else {
                format!("{name}_{count}")
            };
            *count += 1;
            renamed
        })
        .collect()
}

/// Metadata describing how a file was imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Short format label (e.g., "csv", "tsv")
    pub format: String,
    /// Source path as given to the loader
    pub path: String,
    /// Rows in the resulting table
    pub rows: usize,
    /// Columns in the resulting table
    pub cols: usize,
    /// Free-form details about the import
    pub notes: Vec<String>,
}
