//! # rw-audio — Sound registry for ReelWorks
//!
//! An explicit, injected registry instead of a process-wide sound map:
//! whoever needs playback receives `&mut SoundRegistry`, registers aliases
//! during setup, and calls `play`/`stop` from game logic.
//!
//! Playback itself stays external. `play`/`stop` enqueue [`AudioCommand`]s
//! and the owning frame loop drains them once per tick with
//! [`SoundRegistry::take_commands`], handing them to whatever audio backend
//! the host runs.

pub mod command;
pub mod registry;

pub use command::*;
pub use registry::*;
