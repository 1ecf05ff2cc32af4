//! CSV/TSV loader.
//!
//! Reads the whole file into memory in one pass. The delimiter is chosen
//! by extension: tab for `.tsv`, comma for everything else.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::error::ImportError;
use super::registry::extension_of;
use super::table::{ImportReport, Table};

/// Note attached to every report produced by this loader.
pub const ONE_SHOT_NOTE: &str = "CSV read in one shot";

/// Load a CSV or TSV file into a [`Table`].
pub fn load_csv(path: &Path) -> Result<(Table, ImportReport), ImportError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ImportError::NotFound(path.to_path_buf()),
        _ => ImportError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let is_tsv = extension_of(path) == ".tsv";
    let delimiter = if is_tsv { b'\t' } else { b',' };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(file);

    let parse_err = |details: String| ImportError::Parse {
        path: path.to_path_buf(),
        details,
    };

    let column_names: Vec<String> = reader
        .headers()
        .map_err(|e| parse_err(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    if column_names.is_empty() {
        return Err(parse_err("empty file, no header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_err(e.to_string()))?;
        rows.push(
            record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect(),
        );
    }

    let table = Table::new(column_names, rows);
    debug!(
        path = %path.display(),
        rows = table.num_rows(),
        cols = table.num_columns(),
        "parsed delimited file"
    );

    let report = ImportReport {
        format: if is_tsv { "tsv" } else { "csv" }.to_string(),
        path: path.display().to_string(),
        rows: table.num_rows(),
        cols: table.num_columns(),
        notes: vec![ONE_SHOT_NOTE.to_string()],
    };

    Ok((table, report))
}
