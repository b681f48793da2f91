//! Reads dataset files back for inspection.

use crate::error::ReaderError;
use crate::writer::text_schema;
use arrow::array::{Array, AsArray};
use arrow::ipc::reader::FileReader;
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Statistics about a dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Number of record batches in the file.
    pub batches: u64,
    /// Total number of rows.
    pub rows: u64,
    /// Sum of the UTF-8 byte lengths of all rows.
    pub text_bytes: u64,
    /// Number of distinct row values.
    pub distinct_values: u64,
    /// Byte length of the longest row.
    pub max_row_bytes: u64,
    /// Size of the file on disk.
    pub file_size_bytes: u64,
}

/// Reader for dataset files written by [`DatasetWriter`](crate::DatasetWriter).
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetReader;

impl DatasetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every row of the `text` column, across all batches, in order.
    pub fn read_rows<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, ReaderError> {
        let mut rows = Vec::new();
        for batch in self.open(path.as_ref())? {
            let batch = batch?;
            let column = text_column(&batch)?;
            rows.extend(column.iter().flatten().map(str::to_string));
        }
        Ok(rows)
    }

    /// Compute summary statistics for a dataset file.
    pub fn summarize<P: AsRef<Path>>(&self, path: P) -> Result<DatasetSummary, ReaderError> {
        let path = path.as_ref();
        let mut summary = DatasetSummary {
            file_size_bytes: std::fs::metadata(path)?.len(),
            ..Default::default()
        };
        let mut distinct = HashSet::new();

        for batch in self.open(path)? {
            let batch = batch?;
            let column = text_column(&batch)?;
            summary.batches += 1;
            summary.rows += column.len() as u64;

            for value in column.iter().flatten() {
                let len = value.len() as u64;
                summary.text_bytes += len;
                summary.max_row_bytes = summary.max_row_bytes.max(len);
                if !distinct.contains(value) {
                    distinct.insert(value.to_string());
                }
            }
        }

        summary.distinct_values = distinct.len() as u64;
        debug!("Summarized '{}': {:?}", path.display(), summary);
        Ok(summary)
    }

    fn open(&self, path: &Path) -> Result<FileReader<BufReader<File>>, ReaderError> {
        let file = File::open(path)?;
        let reader = FileReader::try_new(BufReader::new(file), None)?;

        let expected = text_schema();
        let found = reader.schema();
        if found.fields() != expected.fields() {
            return Err(ReaderError::SchemaMismatch(format!(
                "expected {expected}, found {found}"
            )));
        }

        Ok(reader)
    }
}

fn text_column(batch: &RecordBatch) -> Result<&arrow::array::StringArray, ReaderError> {
    batch.column(0).as_string_opt::<i32>().ok_or_else(|| {
        ReaderError::SchemaMismatch(format!(
            "column 'text' has type {}",
            batch.column(0).data_type()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::DatasetWriter;
    use arrow::array::{ArrayRef, Int32Array};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::ipc::writer::FileWriter;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_read_back_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.rb");
        let rows: Vec<String> = ["taxi", "Teratide diving subsurface", "", "taxi", "ünïcode"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        DatasetWriter::new().write_rows(&rows, &path).unwrap();

        assert_eq!(DatasetReader::new().read_rows(&path).unwrap(), rows);
    }

    #[test]
    fn test_summarize() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.rb");
        let rows: Vec<String> = ["a", "bb", "a", "cccc"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        DatasetWriter::new().write_rows(&rows, &path).unwrap();
        let summary = DatasetReader::new().summarize(&path).unwrap();

        assert_eq!(summary.batches, 1);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.text_bytes, 8);
        assert_eq!(summary.distinct_values, 3);
        assert_eq!(summary.max_row_bytes, 4);
        assert_eq!(
            summary.file_size_bytes,
            std::fs::metadata(&path).unwrap().len()
        );
    }

    #[test]
    fn test_schema_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numbers.rb");

        let schema = Arc::new(Schema::new(vec![Field::new("match", DataType::Int32, false)]));
        let column: ArrayRef = Arc::new(Int32Array::from(vec![1, 2, 3]));
        let batch = RecordBatch::try_new(schema.clone(), vec![column]).unwrap();
        let file = File::create(&path).unwrap();
        let mut writer = FileWriter::try_new(file, &schema).unwrap();
        writer.write(&batch).unwrap();
        writer.finish().unwrap();

        let result = DatasetReader::new().summarize(&path);
        assert!(matches!(result, Err(ReaderError::SchemaMismatch(_))));
    }

    #[test]
    fn test_not_an_arrow_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.rb");
        std::fs::write(&path, b"definitely not arrow").unwrap();

        let result = DatasetReader::new().read_rows(&path);
        assert!(matches!(result, Err(ReaderError::Arrow(_))));
    }
}
