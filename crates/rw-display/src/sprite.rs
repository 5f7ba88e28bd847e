//! Textured sprite quads

use serde::{Deserialize, Serialize};

use crate::texture::TextureHandle;

/// A single textured tile
///
/// Position is relative to the owning container. A fresh sprite adopts its
/// texture's native size; callers that need a different footprint set it
/// once with [`Sprite::set_size`] right after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    texture: TextureHandle,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Sprite {
    /// Create a sprite at the origin with the texture's native size
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            x: 0.0,
            y: 0.0,
            width: texture.width,
            height: texture.height,
        }
    }

    /// Texture this sprite samples from
    #[inline]
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Horizontal offset within the container
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Set the horizontal offset
    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Vertical offset within the container
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Set both position components
    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Rendered width
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Rendered height
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Override the rendered size (one-time, at creation)
    #[inline]
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_adopts_native_size() {
        let sprite = Sprite::new(TextureHandle::new(1, 96.0, 96.0));
        assert_eq!(sprite.width(), 96.0);
        assert_eq!(sprite.height(), 96.0);
        assert_eq!(sprite.x(), 0.0);
        assert_eq!(sprite.y(), 0.0);
    }

    #[test]
    fn test_sprite_size_override() {
        let mut sprite = Sprite::new(TextureHandle::new(1, 96.0, 96.0));
        sprite.set_size(100.0, 100.0);
        assert_eq!(sprite.width(), 100.0);
        assert_eq!(sprite.height(), 100.0);
    }

    #[test]
    fn test_sprite_position() {
        let mut sprite = Sprite::new(TextureHandle::new(1, 32.0, 32.0));
        sprite.set_position(300.0, 0.0);
        assert_eq!(sprite.x(), 300.0);

        sprite.set_x(-12.5);
        assert_eq!(sprite.x(), -12.5);
        assert_eq!(sprite.y(), 0.0);
    }
}
