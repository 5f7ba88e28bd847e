//! Error types for asset lookup

use thiserror::Error;

/// Asset layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("texture not loaded: {0}")]
    TextureNotFound(String),
}

/// Result type alias
pub type AssetResult<T> = Result<T, AssetError>;
