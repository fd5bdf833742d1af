use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    #[error("invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("data error: {0}")]
    DataError(String),

    #[error("scan cancelled")]
    Cancelled,
}

/// Type alias for Result with SearchError
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Create a new InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SearchError::InvalidInput(message.into())
    }

    /// Create a new InvalidSymbol error
    pub fn invalid_symbol(position: usize, symbol: char) -> Self {
        SearchError::InvalidSymbol { position, symbol }
    }
}
