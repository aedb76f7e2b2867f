use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the usage report pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file exists but contains no data at all.
    #[error("Report file is empty: {0}")]
    EmptyReport(PathBuf),

    /// The CSV reader rejected the input.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one of the required logical columns.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row could not be converted into a usage record.
    #[error("Row {line}: {reason}")]
    RowParse { line: u64, reason: String },

    /// A per-unit price string could not be interpreted.
    #[error("Row {line}: invalid per-unit price {value:?}")]
    PriceParse { line: u64, value: String },

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
