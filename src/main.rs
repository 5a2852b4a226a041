//! Disk CCD headless driver
//!
//! Loads a config (optional JSON path as the first argument), builds the
//! scene, runs a fixed number of frames and prints the final render view as
//! JSON on stdout.

use std::process::ExitCode;

use disk_ccd::SimConfig;
use disk_ccd::scene::build_scene;

fn run() -> disk_ccd::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => {
            log::info!("No config given, using defaults");
            SimConfig::default()
        }
    };

    let mut sim = build_scene(&config)?;
    let e0 = sim.kinetic_energy();

    let mut truncated_frames = 0u32;
    for frame in 0..config.frames {
        let report = sim.advance_frame(config.frame_dt);
        if report.truncated {
            truncated_frames += 1;
        }
        log::debug!(
            "frame {frame}: {} events ({} pair, {} wall)",
            report.events,
            report.pair_events,
            report.boundary_events
        );
    }

    let e1 = sim.kinetic_energy();
    log::info!(
        "Simulated {:.3} s over {} frames: {} events, {} truncated frames, energy drift {:.3e}",
        sim.time,
        config.frames,
        sim.total_events,
        truncated_frames,
        if e0 > 0.0 { (e1 - e0) / e0 } else { 0.0 }
    );
    if let Some(gap) = sim.min_gap() {
        log::info!("Closest pair gap: {gap:.6}");
    }

    println!("{}", serde_json::to_string_pretty(&sim.render_view())?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Disk CCD starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
