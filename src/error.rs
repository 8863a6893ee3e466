//! Error types for trace loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected at least 7 fields, found {found}")]
    ShortRow { line: usize, found: usize },

    #[error("line {line}: invalid timestamp {value:?}")]
    BadTimestamp { line: usize, value: String },

    #[error("line {line}: invalid MCS value {value:?}")]
    BadMcs { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, TraceError>;
