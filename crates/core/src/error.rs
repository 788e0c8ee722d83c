//! Error types for fecsim Core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid frame: symbol {symbol:?} at position {position} is not '0' or '1'")]
    InvalidFrame { position: usize, symbol: char },

    #[error("Invalid frame: the frame must contain at least one bit")]
    EmptyFrame,
}

/// Result type for fecsim Core operations
pub type Result<T> = std::result::Result<T, CoreError>;
