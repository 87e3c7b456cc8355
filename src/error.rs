use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or analysing a traffic log.
#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("File '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid format at line {line}: {content}")]
    Format { line: usize, content: String },

    #[error("Car count cannot be negative at line {line}: {content} (got {count})")]
    NegativeCount {
        line: usize,
        content: String,
        count: i128,
    },

    #[error("Car count is too large at line {line}: {content}")]
    CountOutOfRange { line: usize, content: String },

    #[error("Car count total exceeds {}", u64::MAX)]
    CountOverflow,

    #[error("Not enough records: got {actual}, need at least {required}")]
    InsufficientRecords { actual: usize, required: usize },

    #[error("Window size must be greater than 0")]
    InvalidWindowSize,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrafficError>;
