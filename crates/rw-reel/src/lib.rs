//! # rw-reel — Reel motion core for ReelWorks
//!
//! The one piece of the widget with real per-frame logic: a [`Reel`] owns a
//! strip of symbol sprites inside a masked container, scrolls them leftward
//! while spinning, decays speed after a stop request, and snaps every symbol
//! back onto the grid once the spin dies out.
//!
//! The reel decides nothing about *when* to spin. Game logic calls
//! [`Reel::start_spin`] / [`Reel::stop_spin`], the host frame loop calls
//! [`Reel::update`] once per tick, and renderers read the container back in
//! between.

pub mod config;
pub mod error;
pub mod reel;

pub use config::*;
pub use error::*;
pub use reel::*;
