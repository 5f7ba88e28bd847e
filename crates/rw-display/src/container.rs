//! Sprite containers and clip masking

use serde::{Deserialize, Serialize};

use crate::mask::RectMask;
use crate::sprite::Sprite;

/// A display-list node that owns an ordered set of sprite children
///
/// Children render in insertion order. The optional [`RectMask`] clips all
/// of them; it is container state rather than a child, so `children()` is
/// exactly the set of drawable sprites.
///
/// Child positions are container-relative. Where the container itself lands
/// on screen is the host compositor's concern, tracked in its own scene
/// graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    children: Vec<Sprite>,
    mask: Option<RectMask>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child; returns its index in render order
    pub fn add_child(&mut self, sprite: Sprite) -> usize {
        self.children.push(sprite);
        self.children.len() - 1
    }

    /// Read view of the children, in render order
    #[inline]
    pub fn children(&self) -> &[Sprite] {
        &self.children
    }

    /// Mutable view of the children
    #[inline]
    pub fn children_mut(&mut self) -> &mut [Sprite] {
        &mut self.children
    }

    /// Number of children
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container has no children
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Install the clip mask
    pub fn set_mask(&mut self, mask: RectMask) {
        self.mask = Some(mask);
    }

    /// Current clip mask, if any
    #[inline]
    pub fn mask(&self) -> Option<&RectMask> {
        self.mask.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureHandle;

    fn sprite(id: u32) -> Sprite {
        Sprite::new(TextureHandle::new(id, 64.0, 64.0))
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut container = Container::new();
        assert_eq!(container.add_child(sprite(1)), 0);
        assert_eq!(container.add_child(sprite(2)), 1);
        assert_eq!(container.add_child(sprite(3)), 2);

        let ids: Vec<u32> = container.children().iter().map(|s| s.texture().id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(container.len(), 3);
    }

    #[test]
    fn test_mask_is_not_a_child() {
        let mut container = Container::new();
        container.add_child(sprite(1));
        container.set_mask(RectMask::new(0.0, 0.0, 500.0, 100.0));

        assert_eq!(container.len(), 1);
        assert!(container.mask().is_some());
        assert_eq!(container.mask().unwrap().width, 500.0);
    }

    #[test]
    fn test_empty_container() {
        let container = Container::new();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
        assert!(container.mask().is_none());
    }
}
