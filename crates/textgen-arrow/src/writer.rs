//! Arrow IPC writer for generated datasets.

use crate::error::WriterError;
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use textgen_generator::Dataset;
use tracing::{debug, info};

/// Default buffer size for IPC writing.
pub const DEFAULT_BUFFER_SIZE: usize = 1 << 20;

/// Name of the only column in a dataset file.
pub const TEXT_COLUMN: &str = "text";

/// Schema of a dataset file: one non-nullable UTF-8 column named `text`.
pub fn text_schema() -> Schema {
    Schema::new(vec![Field::new(TEXT_COLUMN, DataType::Utf8, false)])
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// UTF-8 bytes of text written (excluding Arrow framing).
    pub text_bytes: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes a [`Dataset`] as a single-batch Arrow IPC file.
///
/// The file is written to a temporary sibling of the destination and renamed
/// into place only once the IPC footer is written and synced, so a failed
/// write never leaves a truncated file at the destination. On Unix the
/// directory is synced after the rename so the new entry survives a crash.
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    buffer_size: usize,
}

impl Default for DatasetWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetWriter {
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Write `dataset` to `output_path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(
        &self,
        dataset: &Dataset,
        output_path: P,
    ) -> Result<WriteMetrics, WriterError> {
        self.write_rows(dataset.rows(), output_path)
    }

    /// Write `rows` as the `text` column of a single record batch.
    pub fn write_rows<P: AsRef<Path>>(
        &self,
        rows: &[String],
        output_path: P,
    ) -> Result<WriteMetrics, WriterError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();

        let text_bytes: u64 = rows.iter().map(|row| row.len() as u64).sum();
        let max = i32::MAX as u64;
        if text_bytes > max {
            return Err(WriterError::ColumnTooLarge {
                bytes: text_bytes,
                max,
            });
        }

        info!(
            "Converting {} rows ({} bytes) to record batch...",
            rows.len(),
            text_bytes
        );

        let schema = Arc::new(text_schema());
        let column: ArrayRef = Arc::new(StringArray::from_iter_values(rows));
        let batch = RecordBatch::try_new(schema.clone(), vec![column])?;

        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::Builder::new()
            .prefix(".textgen-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        debug!("Writing record batch to {}", temp_file.path().display());

        info!("Writing file '{}'...", output_path.display());
        {
            let buf_writer = BufWriter::with_capacity(self.buffer_size, temp_file.as_file_mut());
            let mut writer = FileWriter::try_new(buf_writer, &schema)?;
            writer.write(&batch)?;
            writer.finish()?;
            let mut buf_writer = writer.into_inner()?;
            buf_writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(output_path)?;
        sync_dir(dir)?;

        let metrics = WriteMetrics {
            rows_written: rows.len() as u64,
            text_bytes,
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "Wrote '{}': {} rows, {} bytes in {:?} ({:.2} MB/sec)",
            output_path.display(),
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.bytes_per_second() / 1_000_000.0
        );

        Ok(metrics)
    }
}

/// Flush the directory entry for a freshly renamed file.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
