//! ReelWorks Spin Driver
//!
//! Usage:
//!   rw-sim                          - One spin cycle, OS-seeded textures
//!   rw-sim --seed 7 --json          - Deterministic run, JSON report
//!   rw-sim --symbols 8 --spin-frames 120

use anyhow::Result;
use clap::Parser;

use rw_reel::ReelConfig;
use rw_sim::{SimConfig, run};

#[derive(Parser)]
#[command(name = "rw-sim", about = "Headless spin driver for the ReelWorks reel")]
struct Cli {
    /// Number of symbol slots on the reel
    #[arg(long, default_value_t = 5)]
    symbols: usize,

    /// Symbol size in pixels (width, height, and pitch)
    #[arg(long, default_value_t = 100.0)]
    symbol_size: f32,

    /// RNG seed for symbol textures (omit for an OS-seeded run)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to spin before the stop request
    #[arg(long, default_value_t = 60)]
    spin_frames: u32,

    /// Hard cap on total frames
    #[arg(long, default_value_t = 600)]
    max_frames: u32,

    /// Per-frame delta scale (1.0 = target frame rate)
    #[arg(long, default_value_t = 1.0)]
    delta: f32,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SimConfig {
        reel: ReelConfig::new(cli.symbols, cli.symbol_size),
        spin_frames: cli.spin_frames,
        max_frames: cli.max_frames,
        delta: cli.delta,
        seed: cli.seed,
    };

    let report = run(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("spin frames:   {}", report.spin_frames);
        println!("decel frames:  {}", report.decel_frames);
        println!("total frames:  {}", report.total_frames);
        println!("symbols:       {:?}", report.symbols);
        println!("final offsets: {:?}", report.final_offsets);
        println!("audio:         {} commands", report.audio.len());
    }

    Ok(())
}
