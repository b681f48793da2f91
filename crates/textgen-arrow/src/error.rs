//! Error types for Arrow dataset files.

use arrow::error::ArrowError;
use thiserror::Error;

/// Errors that can occur while writing a dataset file.
#[derive(Error, Debug)]
pub enum WriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow encoding error.
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// The finished temporary file could not be moved into place.
    #[error("Failed to publish output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The rows do not fit in a single UTF-8 column.
    #[error("Dataset holds {bytes} bytes of text; a single Utf8 column holds at most {max} bytes")]
    ColumnTooLarge { bytes: u64, max: u64 },
}

/// Errors that can occur while reading a dataset file back.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow decoding error.
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// The file does not have the single non-nullable `text` column.
    #[error("Unexpected schema: {0}")]
    SchemaMismatch(String),
}
