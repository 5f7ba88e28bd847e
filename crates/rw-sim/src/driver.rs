//! Frame-loop driver: one complete spin cycle, headless

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rw_assets::TextureRegistry;
use rw_audio::{AudioCommand, SoundRegistry, SoundSource};
use rw_reel::{Reel, ReelConfig, ReelPhase, SYMBOL_TEXTURES};
use serde::{Deserialize, Serialize};

/// Cue fired when a spin starts
pub const SPIN_CUE: &str = "reel-spin";
/// Cue fired when the reel lands
pub const LANDED_CUE: &str = "reel-landed";

/// Parameters for one simulated spin cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub reel: ReelConfig,
    /// Frames between `start_spin` and `stop_spin`
    pub spin_frames: u32,
    /// Hard cap on total frames; exceeding it fails the run
    pub max_frames: u32,
    /// Per-frame delta scale (1.0 = target frame rate)
    pub delta: f32,
    /// RNG seed for symbol textures; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            reel: ReelConfig::default(),
            spin_frames: 60,
            max_frames: 600,
            delta: 1.0,
            seed: None,
        }
    }
}

/// Everything observable from a finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    /// Frames spent in the spinning phase
    pub spin_frames: u32,
    /// Frames from the stop request to the snap
    pub decel_frames: u32,
    /// Total update calls
    pub total_frames: u32,
    /// Texture ids of the landed symbols, in storage order
    pub symbols: Vec<u32>,
    /// Final symbol offsets, in storage order
    pub final_offsets: Vec<f32>,
    /// Audio commands drained over the whole run, in order
    pub audio: Vec<AudioCommand>,
}

/// Run one full spin cycle and report it
///
/// The loop mirrors a host frame loop: control call, then `update`, then a
/// drain of the sound registry's queued commands, once per frame.
pub fn run(config: &SimConfig) -> Result<SimReport> {
    if config.spin_frames >= config.max_frames {
        bail!(
            "max_frames ({}) must exceed spin_frames ({})",
            config.max_frames,
            config.spin_frames
        );
    }

    let mut textures = TextureRegistry::new();
    for name in SYMBOL_TEXTURES {
        textures.register(name, config.reel.symbol_size, config.reel.symbol_size);
    }

    let mut sounds = SoundRegistry::new();
    sounds.add(SPIN_CUE, SoundSource::new("assets/sounds/reel-spin.mp3"));
    sounds.add(LANDED_CUE, SoundSource::new("assets/sounds/reel-landed.mp3"));

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let mut reel = Reel::new(config.reel, &textures, &mut rng)?;

    let mut audio = Vec::new();
    let mut total_frames = 0u32;

    reel.start_spin();
    sounds.play(SPIN_CUE);
    log::info!(
        "spin started ({} frames at delta {})",
        config.spin_frames,
        config.delta
    );

    for _ in 0..config.spin_frames {
        step(&mut reel, &mut sounds, &mut audio, config.delta);
        total_frames += 1;
    }

    reel.stop_spin();
    log::info!("stop requested after {} frames", total_frames);

    let mut decel_frames = 0u32;
    while reel.phase() != ReelPhase::Idle {
        if total_frames >= config.max_frames {
            bail!("reel failed to stop within {} frames", config.max_frames);
        }
        step(&mut reel, &mut sounds, &mut audio, config.delta);
        total_frames += 1;
        decel_frames += 1;
    }

    sounds.stop(SPIN_CUE);
    sounds.play(LANDED_CUE);
    audio.extend(sounds.take_commands());
    log::info!("reel landed after {} deceleration frames", decel_frames);

    Ok(SimReport {
        spin_frames: config.spin_frames,
        decel_frames,
        total_frames,
        symbols: reel
            .container()
            .children()
            .iter()
            .map(|s| s.texture().id)
            .collect(),
        final_offsets: reel.offsets(),
        audio,
    })
}

/// One frame: update the reel, then drain that frame's audio commands
fn step(reel: &mut Reel, sounds: &mut SoundRegistry, audio: &mut Vec<AudioCommand>, delta: f32) {
    reel.update(delta);
    audio.extend(sounds.take_commands());
}
