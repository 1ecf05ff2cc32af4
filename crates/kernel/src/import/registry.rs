//! Loader registry - maps file extensions to format loaders.
//!
//! Adding a format means writing a loader and registering it under its
//! extension; [`LoaderRegistry::load`] never changes.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::delimited::load_csv;
use super::error::ImportError;
use super::table::{ImportReport, Table, dedupe_column_names};

/// Note appended when repeated column names were renamed.
pub const DEDUPE_NOTE: &str = "deduped column names";

/// A format-specific loader.
pub trait Loader: Send + Sync {
    /// Parse the file at `path` into a table and a report.
    fn load(&self, path: &Path) -> Result<(Table, ImportReport), ImportError>;
}

impl<F> Loader for F
where
    F: Fn(&Path) -> Result<(Table, ImportReport), ImportError> + Send + Sync,
{
    fn load(&self, path: &Path) -> Result<(Table, ImportReport), ImportError> {
        self(path)
    }
}

/// Lower-cased extension of `path` including the leading dot.
///
/// Returns an empty string when the path has no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Registry of loaders keyed by extension (e.g., ".csv").
#[derive(Clone)]
pub struct LoaderRegistry {
    loaders: HashMap<String, Arc<dyn Loader>>,
}

impl std::fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderRegistry")
            .field("extensions", &self.extensions())
            .finish()
    }
}

impl LoaderRegistry {
    /// Create a registry with no loaders.
    pub fn empty() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Register a loader, replacing any existing loader for the extension.
    ///
    /// The extension may be given with or without the leading dot and in
    /// any case.
    pub fn register(&mut self, ext: &str, loader: impl Loader + 'static) {
        let ext = normalize_extension(ext);
        debug!(%ext, "registered loader");
        self.loaders.insert(ext, Arc::new(loader));
    }

    /// Whether a loader is registered for the extension.
    pub fn supports(&self, ext: &str) -> bool {
        self.loaders.contains_key(&normalize_extension(ext))
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.loaders.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// Load a file through the loader registered for its extension.
    ///
    /// Repeated column names in the result are numbered and noted in
    /// the report.
    pub fn load(&self, path: &Path) -> Result<(Table, ImportReport), ImportError> {
        if !path.exists() {
            return Err(ImportError::NotFound(path.to_path_buf()));
        }

        let ext = extension_of(path);
        let loader = self
            .loaders
            .get(&ext)
            .ok_or_else(|| ImportError::UnsupportedType(ext.clone()))?;

        let (mut table, mut report) = loader.load(path)?;

        if table.has_duplicate_columns() {
            let renamed = dedupe_column_names(table.column_names());
            if table.rename_columns(renamed) {
                report.notes.push(DEDUPE_NOTE.to_string());
            }
        }

        info!(
            path = %path.display(),
            format = %report.format,
            rows = report.rows,
            cols = report.cols,
            "file imported"
        );

        Ok((table, report))
    }
}

impl Default for LoaderRegistry {
    /// The built-in formats: `.csv` and `.tsv`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(".csv", load_csv);
        registry.register(".tsv", load_csv);
        registry
    }
}

/// Load a file using the built-in loaders.
pub fn load_table(path: impl AsRef<Path>) -> Result<(Table, ImportReport), ImportError> {
    LoaderRegistry::default().load(path.as_ref())
}
