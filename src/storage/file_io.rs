//! File I/O utilities with atomic writes
//!
//! Provides safe CSV file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read every row of a headed CSV file, returning an empty list if the file doesn't exist
///
/// The callback receives each row with its 1-based line number in the file
/// (the header is line 1).
pub fn read_csv<T, U, P, F>(path: P, mut convert: F) -> Result<Vec<U>, LedgerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnMut(T, usize) -> Result<U, LedgerError>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<T>().enumerate() {
        let line = i + 2;
        let row = result.map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to parse {} at line {}: {}",
                path.display(),
                line,
                e
            ))
        })?;
        rows.push(convert(row, line)?);
    }

    Ok(rows)
}

/// Write a header and rows to a CSV file atomically (write to temp, then rename)
///
/// The target is either completely replaced or not modified at all.
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], rows: &[T]) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let result = write_rows(&temp_path, header, rows).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| LedgerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_rows<T: Serialize>(temp_path: &Path, header: &[&str], rows: &[T]) -> Result<(), LedgerError> {
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer
        .write_record(header)
        .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| LedgerError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    let mut buffered = writer
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    buffered
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRow {
        name: String,
        value: i32,
    }

    fn identity(row: TestRow, _line: usize) -> Result<TestRow, LedgerError> {
        Ok(row)
    }

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let rows: Vec<TestRow> = read_csv(&path, identity).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![
            TestRow {
                name: "one, with comma".into(),
                value: 1,
            },
            TestRow {
                name: "two".into(),
                value: 2,
            },
        ];

        write_csv_atomic(&path, &["name", "value"], &rows).unwrap();
        let loaded: Vec<TestRow> = read_csv(&path, identity).unwrap();
        assert_eq!(rows, loaded);
    }

    #[test]
    fn test_empty_rows_still_write_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic::<TestRow, _>(&path, &["name", "value"], &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_csv_atomic::<TestRow, _>(&path, &["name", "value"], &[]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_csv_atomic::<TestRow, _>(&path, &["name", "value"], &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_parse_error_names_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        fs::write(&path, "name,value\nok,1\nbad,not-a-number\n").unwrap();

        let err = read_csv::<TestRow, TestRow, _, _>(&path, identity).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
