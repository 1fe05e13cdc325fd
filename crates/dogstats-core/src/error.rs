use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by dogstats.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The requested breed is absent from the filtered table.
    ///
    /// This is the only recoverable kind: the prompt loop prints it and asks
    /// again.
    #[error("Dog breed not found in the data. Please try again.")]
    BreedNotFound(String),

    /// The input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be decoded into a registration record.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one or more required columns.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A spreadsheet cell could not be read as the column's type.
    #[error("Invalid {column} value {value:?} in row {row}")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
    },

    /// No record survived the minimum-total filter.
    #[error("No registrations above {threshold} found in {path}")]
    EmptyDataset { path: PathBuf, threshold: u64 },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Errors from third-party readers (e.g. the workbook parser), with
    /// context attached via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StatsError {
    /// `true` for errors the interactive loop recovers from by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StatsError::BreedNotFound(_))
    }
}

/// Convenience alias used throughout the dogstats crates.
pub type Result<T> = std::result::Result<T, StatsError>;
