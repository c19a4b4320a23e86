use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("line {line}: expected 10 tab-separated columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: invalid token id '{value}'")]
    InvalidId { line: usize, value: String },

    #[error("line {line}: invalid head '{value}'")]
    InvalidHead { line: usize, value: String },

    #[error("line {line}: token id {found} out of order, expected {expected}")]
    OutOfOrder { line: usize, expected: u32, found: u32 },

    #[error("treebank archive is corrupt: {0}")]
    Archive(String),

    #[error("treebank archive version {found} is not supported (expected {expected})")]
    VersionMismatch { expected: u32, found: u32 },
}
