//! # rw-assets — Texture lookup for ReelWorks
//!
//! Widgets never load pixels. They ask the [`TextureRegistry`] for a handle
//! by name, and whatever actually decoded the asset (host engine, loader
//! task, test fixture) is the thing that registered it beforehand.
//!
//! A missing name is the asset layer's only failure, and it is reported, not
//! swallowed: widget constructors propagate [`AssetError`] to their caller.

pub mod error;
pub mod registry;

pub use error::*;
pub use registry::*;
