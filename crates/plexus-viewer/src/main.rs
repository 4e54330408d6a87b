//! Plexus Viewer - animated network-particle background
//!
//! Opens a window with the drifting-dot field. The scene constants can be
//! overridden from a TOML config file.
//!
//! Usage:
//!   plexus-viewer [--config <plexus.toml>] [--width N] [--height N]
//!                 [--seed N] [--fullscreen] [--force]

use anyhow::{Context, Result};
use clap::Parser;
use plexus_field::{DeviceProfile, FieldConfig, FieldSimulator};
use plexus_viewer::FieldApp;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "plexus-viewer")]
#[command(about = "Animated network-particle field", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a TOML config overriding the scene constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial window width in pixels (also feeds the particle-count policy)
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// RNG seed for a reproducible field; random when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Launch in borderless fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Run the animation even on a low-end device profile
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FieldConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FieldConfig::default(),
    };

    // Capability gate: skip the animation entirely on low-end machines.
    // Nothing is scheduled, so zero frames render.
    let profile = DeviceProfile::detect();
    if profile.is_low_end() && !args.force {
        println!(
            "Low-end device profile (memory: {:?} GiB, cpus: {:?}); \
             skipping the animation. Pass --force to run it anyway.",
            profile.memory_gib, profile.logical_cpus
        );
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(entropy_seed);
    let simulator = FieldSimulator::new(config, args.width as f32, seed);

    println!(
        "Plexus field: {} particles at {}x{}, seed {}",
        simulator.particle_count(),
        args.width,
        args.height,
        seed
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = FieldApp::new(simulator, args.width, args.height, args.fullscreen);
    event_loop.run_app(&mut app)?;

    Ok(())
}

/// A throwaway seed from the wall clock, for when none was requested
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0xDEAD_BEEF)
}
