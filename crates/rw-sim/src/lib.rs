//! # rw-sim — Headless spin driver for ReelWorks
//!
//! Drives a [`rw_reel::Reel`] through one complete spin cycle without a
//! renderer: build the collaborators, spin for a fixed number of frames,
//! request a stop, then keep updating until the reel snaps back to idle.
//! Sound cues fire through an injected [`rw_audio::SoundRegistry`] and every
//! drained command lands in the report, so a run is fully inspectable.
//!
//! The binary wraps [`run`] behind a small CLI; tests call [`run`] directly
//! with a fixed seed.

pub mod driver;

pub use driver::*;
