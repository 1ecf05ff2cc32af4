//! Integration tests for tabular file import.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use edamorph_kernel::import::{
    DEDUPE_NOTE, ImportError, ImportReport, LoaderRegistry, Table, load_table,
};
use edamorph_test_utils::{Fixtures, sample_measurements, test_file};

#[test]
fn csv_and_tsv_produce_the_same_table() {
    let fixtures = Fixtures::new().unwrap();
    let csv = fixtures.write(&sample_measurements("m.csv")).unwrap();
    let tsv = fixtures.write(&sample_measurements("m.tsv")).unwrap();

    let (csv_table, csv_report) = load_table(&csv).unwrap();
    let (tsv_table, tsv_report) = load_table(&tsv).unwrap();

    assert_eq!(csv_table, tsv_table);
    assert_eq!(csv_report.format, "csv");
    assert_eq!(tsv_report.format, "tsv");
    assert_eq!(csv_table.column(1).unwrap(), vec![Some("3.5"), None, Some("3.0")]);
}

#[test]
fn uppercase_extension_is_accepted() {
    let fixtures = Fixtures::new().unwrap();
    let path = fixtures.write(&sample_measurements("LOUD.CSV")).unwrap();

    let (_, report) = load_table(&path).unwrap();
    assert_eq!(report.format, "csv");
    assert_eq!(report.rows, 3);
}

#[test]
fn dedupe_keeps_data_aligned() {
    let fixtures = Fixtures::new().unwrap();
    let file = test_file("wide.csv")
        .with_header(&["x", "x", "x", "y"])
        .with_row(&["1", "2", "3", "4"]);
    let path = fixtures.write(&file).unwrap();

    let (table, report) = load_table(&path).unwrap();
    assert_eq!(table.column_names(), ["x", "x_1", "x_2", "y"]);
    assert_eq!(table.column(2).unwrap(), vec![Some("3")]);
    assert!(report.notes.iter().any(|n| n == DEDUPE_NOTE));
}

#[test]
fn semicolon_file_reads_as_single_column() {
    let fixtures = Fixtures::new().unwrap();
    let file = test_file("euro.csv")
        .with_delimiter(';')
        .with_header(&["a", "b"])
        .with_row(&["1", "2"]);
    let path = fixtures.write(&file).unwrap();

    let (table, _) = load_table(&path).unwrap();
    assert_eq!(table.column_names(), ["a;b"]);
}

#[test]
fn errors_name_the_problem() {
    let fixtures = Fixtures::new().unwrap();

    let missing = fixtures.missing("absent.tsv");
    assert!(matches!(
        load_table(&missing).unwrap_err(),
        ImportError::NotFound(p) if p == missing
    ));

    let json = fixtures.write(&test_file("data.json").with_raw("{}")).unwrap();
    assert_eq!(
        load_table(&json).unwrap_err().to_string(),
        "Unsupported file type: .json"
    );
}

#[test]
fn registry_can_be_extended() {
    fn load_lines(path: &Path) -> Result<(Table, ImportReport), ImportError> {
        let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rows: Vec<Vec<Option<String>>> =
            text.lines().map(|l| vec![Some(l.to_string())]).collect();
        let table = Table::new(vec!["line".to_string()], rows);
        let report = ImportReport {
            format: "lines".to_string(),
            path: path.display().to_string(),
            rows: table.num_rows(),
            cols: table.num_columns(),
            notes: Vec::new(),
        };
        Ok((table, report))
    }

    let fixtures = Fixtures::new().unwrap();
    let path = fixtures
        .write(&test_file("notes.txt").with_raw("first\nsecond\n"))
        .unwrap();

    let mut registry = LoaderRegistry::default();
    assert!(!registry.supports(".txt"));
    registry.register("txt", load_lines);

    let (table, report) = registry.load(&path).unwrap();
    assert_eq!(report.format, "lines");
    assert_eq!(table.num_rows(), 2);
    assert_eq!(registry.extensions(), [".csv", ".tsv", ".txt"]);
}
