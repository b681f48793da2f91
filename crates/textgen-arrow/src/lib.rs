//! Arrow IPC output for textgen datasets.
//!
//! Datasets are stored as an Arrow IPC file ("record batch file") holding a
//! single record batch with one non-nullable UTF-8 column named `text`.
//!
//! # Example
//!
//! ```ignore
//! use textgen_arrow::{DatasetReader, DatasetWriter};
//!
//! let metrics = DatasetWriter::new().write(&dataset, "input.rb")?;
//! let summary = DatasetReader::new().summarize("input.rb")?;
//! assert_eq!(summary.rows, metrics.rows_written);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ReaderError, WriterError};
pub use reader::{DatasetReader, DatasetSummary};
pub use writer::{text_schema, DatasetWriter, WriteMetrics, DEFAULT_BUFFER_SIZE, TEXT_COLUMN};
