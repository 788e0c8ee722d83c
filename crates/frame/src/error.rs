//! Error types for fecsim Frame

use thiserror::Error;

/// Pipeline error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Invalid parameter {name}: {value} (must be at least 1)")]
    InvalidParameter { name: &'static str, value: usize },

    #[error("Group size overflow: word length {word_length} x depth {depth}")]
    GroupSizeOverflow { word_length: usize, depth: usize },

    #[error("Frame too large: more than {limit} bits after coding and padding")]
    FrameTooLarge { limit: usize },

    #[error("Group size mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Core error: {0}")]
    Core(#[from] fecsim_core::CoreError),
}

/// Result type for fecsim Frame operations
pub type Result<T> = std::result::Result<T, FrameError>;
