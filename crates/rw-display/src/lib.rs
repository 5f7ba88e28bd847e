//! # rw-display — Retained display-list primitives for ReelWorks
//!
//! The widget core never talks to a renderer directly. It builds and mutates
//! a small retained scene of sprites inside a masked container, and the host
//! engine reads that scene back between frames to composite it.
//!
//! Ownership doubles as the write discipline: whoever owns a [`Container`]
//! is its only writer; renderers get `&Container` after the frame update.

pub mod container;
pub mod mask;
pub mod sprite;
pub mod texture;

pub use container::*;
pub use mask::*;
pub use sprite::*;
pub use texture::*;
