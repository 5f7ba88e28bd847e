//! Name-keyed texture registry

use std::collections::HashMap;

use rw_display::TextureHandle;

use crate::error::{AssetError, AssetResult};

/// Name → texture handle lookup service
///
/// The registry owns the mapping only; decoding and GPU upload belong to the
/// host. Registration is idempotent so startup code can list the same asset
/// from several manifests without minting duplicate handles.
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    textures: HashMap<String, TextureHandle>,
    next_id: u32,
}

impl TextureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture under `name` with its native size
    ///
    /// Returns the existing handle unchanged if the name is already
    /// registered.
    pub fn register(&mut self, name: impl Into<String>, width: f32, height: f32) -> TextureHandle {
        let name = name.into();
        if let Some(existing) = self.textures.get(&name) {
            return *existing;
        }

        let handle = TextureHandle::new(self.next_id, width, height);
        self.next_id += 1;
        log::debug!("registered texture '{}' as id {}", name, handle.id);
        self.textures.insert(name, handle);
        handle
    }

    /// Look up a texture by name
    pub fn get(&self, name: &str) -> AssetResult<TextureHandle> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::TextureNotFound(name.to_string()))
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = TextureRegistry::new();
        let handle = registry.register("symbol1.png", 128.0, 128.0);

        let found = registry.get("symbol1.png").unwrap();
        assert_eq!(found, handle);
        assert_eq!(found.width, 128.0);
        assert!(registry.contains("symbol1.png"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TextureRegistry::new();
        let first = registry.register("symbol1.png", 128.0, 128.0);
        let second = registry.register("symbol1.png", 256.0, 256.0);

        // Original registration wins, including its size
        assert_eq!(first, second);
        assert_eq!(registry.get("symbol1.png").unwrap().width, 128.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_texture_is_reported() {
        let registry = TextureRegistry::new();
        let err = registry.get("symbol9.png").unwrap_err();
        assert_eq!(err, AssetError::TextureNotFound("symbol9.png".into()));
    }

    #[test]
    fn test_handles_are_distinct() {
        let mut registry = TextureRegistry::new();
        let a = registry.register("symbol1.png", 128.0, 128.0);
        let b = registry.register("symbol2.png", 128.0, 128.0);
        assert_ne!(a.id, b.id);
    }
}
