//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found or not a regular file.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The workbook could not be opened or parsed.
    #[error("failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A worksheet range could not be read.
    #[error("failed to read worksheet '{sheet}' in {path}: {source}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::IngestError;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/book.xlsx"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/book.xlsx");
    }
}
