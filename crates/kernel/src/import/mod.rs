//! Tabular file import.
//!
//! Single entry point for ingestion: [`load_table`] picks a loader by file
//! extension, runs it, and numbers repeated column names. Every loader returns
//! the same `(Table, ImportReport)` pair, so callers never care which format
//! was read.

mod delimited;
mod error;
mod registry;
mod table;

pub use delimited::load_csv;
pub use error::ImportError;
pub use registry::{DEDUPE_NOTE, Loader, LoaderRegistry, extension_of, load_table};
pub use table::{ImportReport, Table, dedupe_column_names};
