//! Error types for tabsheet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabsheet-core
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown page margin selector
    #[error("Unknown margin constant: {0}")]
    InvalidMargin(String),

    /// Out-of-domain argument for an enumerated selector
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Worksheet capability that has no implementation yet
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error reports a capability that is declared but not implemented
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Error::Unimplemented(_))
    }
}
