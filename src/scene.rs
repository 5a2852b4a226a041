//! Initial scene construction
//!
//! Scene setup sits outside the kernel: it only has to hand the simulation
//! disks that start inside the box and don't overlap. The scatter layout is
//! seeded so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::Vec2;
use crate::error::{Error, Result};
use crate::settings::{ScenePreset, SimConfig};
use crate::sim::{Color, Simulation};

/// Small disk radius range for the scatter scene
pub const SCATTER_RADIUS: (f64, f64) = (10.0, 30.0);
/// Per-component speed range for the scatter scene
pub const SCATTER_SPEED: f64 = 200.0;
/// The heavy disk dropped into the scatter scene
pub const HEAVY_RADIUS: f64 = 200.0;
pub const HEAVY_VELOCITY: Vec2 = Vec2::new(-2000.0, 2000.0);

/// Rejection-sampling attempts per disk before giving up
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Build a ready-to-step simulation for `config.scene`
pub fn build_scene(config: &SimConfig) -> Result<Simulation> {
    config.validate()?;
    let mut sim = Simulation::new(config);

    match config.scene {
        ScenePreset::Scatter => scatter(&mut sim, config.disk_count, config.seed)?,
        ScenePreset::HeadOn => head_on(&mut sim)?,
        ScenePreset::Trio => trio(&mut sim)?,
        ScenePreset::Empty => {}
    }

    log::info!(
        "Built {} scene: {} disks in {}x{} box",
        config.scene.as_str(),
        sim.num_disks(),
        sim.bounds.width,
        sim.bounds.height
    );
    Ok(sim)
}

/// `count` random small disks plus one heavy, fast disk
fn scatter(sim: &mut Simulation, count: usize, seed: u64) -> Result<()> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut placed: Vec<(Vec2, f64)> = Vec::with_capacity(count + 1);

    // The heavy disk is placed first so the small ones fit around it
    let heavy_pos = place(sim, &placed, HEAVY_RADIUS, &mut rng)?;
    placed.push((heavy_pos, HEAVY_RADIUS));

    for _ in 0..count {
        let radius = rng.random_range(SCATTER_RADIUS.0..SCATTER_RADIUS.1);
        let pos = place(sim, &placed, radius, &mut rng)?;
        placed.push((pos, radius));

        let vel = Vec2::new(
            rng.random_range(-SCATTER_SPEED..SCATTER_SPEED),
            rng.random_range(-SCATTER_SPEED..SCATTER_SPEED),
        );
        sim.spawn_disk(pos, vel, radius, Color::from_gray(rng.random()));
    }

    sim.spawn_disk(heavy_pos, HEAVY_VELOCITY, HEAVY_RADIUS, Color::from_gray(rng.random()));
    Ok(())
}

/// Sample a center inside `(r, W - r) x (r, H - r)` that clears every placed disk
fn place(sim: &Simulation, placed: &[(Vec2, f64)], radius: f64, rng: &mut Pcg32) -> Result<Vec2> {
    let (w, h) = (sim.bounds.width, sim.bounds.height);
    if w <= 2.0 * radius || h <= 2.0 * radius {
        return Err(Error::Placement(format!(
            "disk of radius {radius} does not fit in {w}x{h} box"
        )));
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = Vec2::new(
            rng.random_range(radius..w - radius),
            rng.random_range(radius..h - radius),
        );
        let clear = placed.iter().all(|&(p, r)| {
            let min = r + radius;
            (p - pos).length_squared() > min * min
        });
        if clear {
            return Ok(pos);
        }
    }

    Err(Error::Placement(format!(
        "no free spot for disk of radius {radius} after {MAX_PLACEMENT_ATTEMPTS} attempts; \
         try fewer disks or a larger box"
    )))
}

/// Two radius-20 disks 100 apart, closing at 100/s (contact at t = 0.6)
fn head_on(sim: &mut Simulation) -> Result<()> {
    let center = Vec2::new(sim.bounds.width / 2.0, sim.bounds.height / 2.0);
    let specs = [
        (center - Vec2::new(50.0, 0.0), Vec2::new(50.0, 0.0), Color::from_rgb(0, 0, 255)),
        (center + Vec2::new(50.0, 0.0), Vec2::new(-50.0, 0.0), Color::from_rgb(255, 0, 0)),
    ];
    for (pos, vel, color) in specs {
        sim.try_spawn_disk(pos, vel, 20.0, color)?;
    }
    fits(sim)
}

/// Fast outer disks closing on a slow middle one
fn trio(sim: &mut Simulation) -> Result<()> {
    let specs = [
        (Vec2::new(300.0, 500.0), Vec2::new(80.0, 0.0), Color::from_rgb(0, 0, 255)),
        (Vec2::new(500.0, 500.0), Vec2::new(1.0, 0.0), Color::from_rgb(255, 0, 0)),
        (Vec2::new(700.0, 500.0), Vec2::new(-80.0, 0.0), Color::from_rgb(0, 128, 0)),
    ];
    for (pos, vel, color) in specs {
        sim.try_spawn_disk(pos, vel, 20.0, color)?;
    }
    fits(sim)
}

fn fits(sim: &Simulation) -> Result<()> {
    if sim.is_contained(0.0) {
        Ok(())
    } else {
        Err(Error::Placement(format!(
            "preset does not fit in {}x{} box",
            sim.bounds.width, sim.bounds.height
        )))
    }
}
