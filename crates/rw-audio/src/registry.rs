//! Alias-keyed sound registry and its command queue

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::command::AudioCommand;

/// Description of a playable resource (url or file path)
///
/// Opaque to this crate; only the host backend interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSource {
    pub path: String,
}

impl SoundSource {
    /// Create a source from its url/path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Alias → sound source registry with a drainable command queue
///
/// Lifecycle: `new` (empty) → `add` during setup → `play`/`stop` from game
/// logic → `take_commands` once per frame by the owning loop.
#[derive(Debug, Clone, Default)]
pub struct SoundRegistry {
    sounds: HashMap<String, SoundSource>,
    pending: Vec<AudioCommand>,
}

impl SoundRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source under `alias`
    ///
    /// Idempotent: an alias keeps its first source, later `add` calls for
    /// the same alias are dropped.
    pub fn add(&mut self, alias: impl Into<String>, source: SoundSource) {
        let alias = alias.into();
        if self.sounds.contains_key(&alias) {
            return;
        }
        self.sounds.insert(alias, source);
    }

    /// Request playback of `alias`
    ///
    /// An unknown alias is a soft failure: it is logged and no command is
    /// queued.
    pub fn play(&mut self, alias: &str) {
        if !self.sounds.contains_key(alias) {
            log::warn!("sound '{}' not found", alias);
            return;
        }
        self.pending.push(AudioCommand::Play {
            alias: alias.to_string(),
        });
    }

    /// Request stop of `alias`; unknown aliases are ignored
    pub fn stop(&mut self, alias: &str) {
        if !self.sounds.contains_key(alias) {
            return;
        }
        self.pending.push(AudioCommand::Stop {
            alias: alias.to_string(),
        });
    }

    /// Drain the pending commands, oldest first
    pub fn take_commands(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Pending commands not yet drained
    pub fn pending(&self) -> &[AudioCommand] {
        &self.pending
    }

    /// Source registered under `alias`, if any
    pub fn get(&self, alias: &str) -> Option<&SoundSource> {
        self.sounds.get(alias)
    }

    /// Whether `alias` is registered
    pub fn contains(&self, alias: &str) -> bool {
        self.sounds.contains_key(alias)
    }

    /// Number of registered aliases
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Whether no aliases are registered
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
