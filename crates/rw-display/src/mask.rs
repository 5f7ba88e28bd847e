//! Rectangular clip masks

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangular clip region
///
/// Anything outside the rect is culled by the renderer during composition;
/// the mask itself never draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectMask {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectMask {
    /// Create a clip rect
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point falls inside the visible region
    ///
    /// Left/top edges are inclusive, right/bottom exclusive, so adjacent
    /// masks tile without double-covering a pixel.
    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}
