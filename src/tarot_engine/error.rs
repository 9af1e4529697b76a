//! Error types for the draw engine.

use thiserror::Error;

use crate::tarot_engine::cards::DECK_SIZE;

/// Result type for draw engine operations.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors that can occur while drawing or serialising a reading.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Requested spread size is not one of 1, 3, 5, 10.
    #[error("unsupported spread size {size} (supported: 1, 3, 5, 10)")]
    UnsupportedSpread { size: usize },

    /// No spread is registered under this id.
    #[error("unknown spread id: {0}")]
    UnknownSpread(String),

    /// A numeric parameter is out of range.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Card id outside the catalogue. Unreachable with a well-formed registry.
    #[error("card id {id} is outside the deck (0..{max})", max = DECK_SIZE)]
    Lookup { id: usize },

    /// Reading record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Engine configuration could not be loaded or is invalid.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl DrawError {
    /// True for errors caused by caller input rather than engine state.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DrawError::UnsupportedSpread { .. }
                | DrawError::UnknownSpread(_)
                | DrawError::InvalidParameter { .. }
        )
    }
}
