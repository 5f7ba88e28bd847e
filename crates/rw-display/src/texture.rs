//! Texture handles

use serde::{Deserialize, Serialize};

/// Opaque handle to a loaded texture
///
/// Handles are minted by the asset layer; the display layer only carries
/// them around. The native size is kept on the handle so a sprite can adopt
/// it without a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureHandle {
    /// Registry-assigned texture ID
    pub id: u32,
    /// Native width in pixels
    pub width: f32,
    /// Native height in pixels
    pub height: f32,
}

impl TextureHandle {
    /// Create a handle with an explicit native size
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}
