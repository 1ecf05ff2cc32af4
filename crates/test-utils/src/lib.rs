//! EdaMorph test utilities.
//!
//! Fixture builders for delimited data files written into a temporary
//! directory that is removed when dropped.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a test file builder for `name` (e.g., "iris.csv").
///
/// The delimiter defaults to a tab when the name ends in `.tsv` and a
/// comma otherwise.
pub fn test_file(name: &str) -> TestFile {
    let delimiter = if name.to_lowercase().ends_with(".tsv") {
        '\t'
    } else {
        ','
    };
    TestFile {
        name: name.to_string(),
        delimiter,
        header: Vec::new(),
        rows: Vec::new(),
        raw: None,
    }
}

/// A delimited file fixture.
#[derive(Debug, Clone)]
pub struct TestFile {
    pub name: String,
    pub delimiter: char,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    raw: Option<String>,
}

impl TestFile {
    /// Set the header row.
    pub fn with_header(mut self, columns: &[&str]) -> Self {
        self.header = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add a data row. Empty strings produce empty cells.
    pub fn with_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Override the delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write these exact bytes instead of the header and rows.
    pub fn with_raw(mut self, contents: &str) -> Self {
        self.raw = Some(contents.to_string());
        self
    }

    /// Render the file contents.
    pub fn contents(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let sep = self.delimiter.to_string();
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .filter(|line| !line.is_empty())
            .map(|line| format!("{}\n", line.join(&sep)))
            .collect()
    }

    /// Write the file into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.name);
        std::fs::write(&path, self.contents())?;
        Ok(path)
    }
}

/// A temporary directory holding written fixtures.
#[derive(Debug)]
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    /// Create an empty fixture directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Directory root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a fixture and return its path.
    pub fn write(&self, file: &TestFile) -> io::Result<PathBuf> {
        file.write_to(self.dir.path())
    }

    /// Path inside the fixture directory that is never written.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// A small numeric dataset with a header and three rows.
pub fn sample_measurements(name: &str) -> TestFile {
    test_file(name)
        .with_header(&["sepal_length", "sepal_width", "species"])
        .with_row(&["5.1", "3.5", "setosa"])
        .with_row(&["6.2", "", "versicolor"])
        .with_row(&["7.7", "3.0", "virginica"])
}
