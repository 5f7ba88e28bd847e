//! Error types for the reel motion core

use rw_assets::AssetError;
use thiserror::Error;

/// Reel error type
///
/// Only construction can fail; the motion operations are total.
#[derive(Error, Debug)]
pub enum ReelError {
    #[error("Invalid reel config: {0}")]
    InvalidConfig(String),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Result type alias
pub type ReelResult<T> = Result<T, ReelError>;
