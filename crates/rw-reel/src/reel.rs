//! Reel state machine and per-frame update

use rand::Rng;
use rw_assets::TextureRegistry;
use rw_display::{Container, RectMask, Sprite};
use serde::{Deserialize, Serialize};

use crate::config::ReelConfig;
use crate::error::ReelResult;

/// Texture names a fresh reel samples symbols from
pub const SYMBOL_TEXTURES: [&str; 5] = [
    "symbol1.png",
    "symbol2.png",
    "symbol3.png",
    "symbol4.png",
    "symbol5.png",
];

/// Horizontal speed while spinning, in pixels per unit delta
pub const SPIN_SPEED: f32 = 10.0;

/// Speed multiplier applied once per update while decelerating
pub const SLOWDOWN_RATE: f32 = 0.95;

/// Speed below which a decelerating reel snaps to the grid and stops
pub const SNAP_THRESHOLD: f32 = 0.5;

/// Motion phase of a reel
///
/// Derived from the spinning flag and the current speed; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReelPhase {
    /// At rest, every symbol on its grid slot
    #[default]
    Idle,
    /// Scrolling at full speed
    Spinning,
    /// Stop requested, speed decaying toward the snap threshold
    Decelerating,
}

/// A single reel: a strip of symbol sprites scrolling inside a masked band
///
/// The reel owns its [`Container`] and is its only writer. Symbols scroll
/// leftward; any symbol drifting past the left edge of the wrap band is
/// cycled to the right edge, so a fixed pool of sprites reads as an
/// endless strip.
///
/// Control flow per frame: game logic may call [`Reel::start_spin`] or
/// [`Reel::stop_spin`] at any time, the frame loop calls [`Reel::update`]
/// exactly once, and the renderer then reads [`Reel::container`].
#[derive(Debug, Clone)]
pub struct Reel {
    config: ReelConfig,
    container: Container,
    speed: f32,
    spinning: bool,
}

impl Reel {
    /// Build a reel with `config.symbol_count` randomly textured symbols
    ///
    /// Each symbol's texture is drawn independently and uniformly from
    /// [`SYMBOL_TEXTURES`] via the registry; a name the registry does not
    /// know fails construction. Symbol `i` starts at `(i * symbol_size, 0)`
    /// and the container is masked to the visible band
    /// `[0, 0]..[symbol_count * symbol_size, symbol_size]`.
    pub fn new(
        config: ReelConfig,
        textures: &TextureRegistry,
        rng: &mut impl Rng,
    ) -> ReelResult<Self> {
        config.validate()?;

        let mut container = Container::new();
        for i in 0..config.symbol_count {
            let name = SYMBOL_TEXTURES[rng.random_range(0..SYMBOL_TEXTURES.len())];
            let mut sprite = Sprite::new(textures.get(name)?);
            sprite.set_size(config.symbol_size, config.symbol_size);
            sprite.set_position(i as f32 * config.symbol_size, 0.0);
            container.add_child(sprite);
        }
        container.set_mask(RectMask::new(
            0.0,
            0.0,
            config.band_width(),
            config.symbol_size,
        ));

        log::debug!(
            "reel built: {} symbols at {}px pitch",
            config.symbol_count,
            config.symbol_size
        );

        Ok(Self {
            config,
            container,
            speed: 0.0,
            spinning: false,
        })
    }

    /// Start spinning at full speed
    ///
    /// Idempotent; also restarts a decelerating reel.
    pub fn start_spin(&mut self) {
        self.spinning = true;
        self.speed = SPIN_SPEED;
        log::debug!("spin started");
    }

    /// Request a stop
    ///
    /// Clears the spinning flag only; speed decays inside subsequent
    /// [`Reel::update`] calls until the reel snaps. Idempotent.
    pub fn stop_spin(&mut self) {
        self.spinning = false;
        log::debug!("spin stop requested");
    }

    /// Advance the reel by one frame
    ///
    /// `delta` is the elapsed-time scale factor, 1.0 at the target frame
    /// rate. Speed decay during deceleration is applied once per call, not
    /// scaled by `delta`, so stop duration is tied to frame count rather
    /// than wall-clock time.
    pub fn update(&mut self, delta: f32) {
        if !self.spinning && self.speed == 0.0 {
            return;
        }

        if self.spinning {
            // Spin speed is constant, never ramping
            self.speed = SPIN_SPEED;
        }

        let advance = self.speed * delta;
        let band = self.config.band_width();
        let floor = -self.config.symbol_size;
        for sprite in self.container.children_mut() {
            let mut x = sprite.x() - advance;
            while x < floor {
                x += band;
            }
            while x >= band {
                x -= band;
            }
            sprite.set_x(x);
        }

        if !self.spinning && self.speed > 0.0 {
            self.speed *= SLOWDOWN_RATE;
            if self.speed < SNAP_THRESHOLD {
                self.speed = 0.0;
                self.snap_to_grid();
                log::debug!("reel stopped");
            }
        }
    }

    /// Force every symbol onto an exact grid slot
    ///
    /// Computes the by-offset ordering first, then applies slot positions
    /// through it; storage order is never rearranged. The sort is stable,
    /// so equal offsets keep their storage order.
    fn snap_to_grid(&mut self) {
        let offsets: Vec<f32> = self.container.children().iter().map(Sprite::x).collect();
        let mut order: Vec<usize> = (0..offsets.len()).collect();
        order.sort_by(|&a, &b| offsets[a].total_cmp(&offsets[b]));

        let pitch = self.config.symbol_size;
        let children = self.container.children_mut();
        for (slot, &index) in order.iter().enumerate() {
            children[index].set_x(slot as f32 * pitch);
        }
    }

    /// Whether a spin is in progress (deceleration excluded)
    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Current speed in pixels per unit delta
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current motion phase
    pub fn phase(&self) -> ReelPhase {
        if self.spinning {
            ReelPhase::Spinning
        } else if self.speed > 0.0 {
            ReelPhase::Decelerating
        } else {
            ReelPhase::Idle
        }
    }

    /// Layout this reel was built with
    #[inline]
    pub fn config(&self) -> ReelConfig {
        self.config
    }

    /// Display container owning the symbol sprites
    ///
    /// Renderers read this between updates; nothing else writes it.
    #[inline]
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Symbol offsets in storage order
    pub fn offsets(&self) -> Vec<f32> {
        self.container.children().iter().map(Sprite::x).collect()
    }
}
