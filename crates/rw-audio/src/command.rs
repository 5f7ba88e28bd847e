//! Playback commands handed to the host audio backend

use serde::{Deserialize, Serialize};

/// One playback request, keyed by registered alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AudioCommand {
    /// Start the sound registered under `alias`
    Play { alias: String },
    /// Stop every instance of the sound registered under `alias`
    Stop { alias: String },
}

impl AudioCommand {
    /// Alias this command targets
    pub fn alias(&self) -> &str {
        match self {
            AudioCommand::Play { alias } => alias,
            AudioCommand::Stop { alias } => alias,
        }
    }
}
