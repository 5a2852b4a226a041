//! Simulation state
//!
//! The disk collection is owned by an explicit [`Simulation`] value so that
//! several independent simulations can coexist and tests can build exact
//! scenes. Disks are referenced by [`DiskId`], their index in `disks`.

use serde::{Deserialize, Serialize};

use super::disk::{Color, Disk, DiskId};
use super::step::{StepReport, step};
use crate::consts::*;
use crate::error::{Error, Result};
use crate::settings::SimConfig;
use crate::{Vec2, total_momentum};

/// Axis-aligned box `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a disk of `radius` centered at `pos` lies inside the box (with slack `eps`)
    pub fn contains_disk(&self, pos: Vec2, radius: f64, eps: f64) -> bool {
        pos.x - radius >= -eps
            && pos.x + radius <= self.width + eps
            && pos.y - radius >= -eps
            && pos.y + radius <= self.height + eps
    }

    /// Clamp a center so the disk's edge lies inside the box
    pub fn clamp_center(&self, pos: Vec2, radius: f64) -> Vec2 {
        // min/max rather than clamp: a disk wider than the box must not panic
        Vec2::new(
            pos.x.max(radius).min(self.width - radius),
            pos.y.max(radius).min(self.height - radius),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(BOX_WIDTH, BOX_HEIGHT)
    }
}

/// Read-only projection handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskView {
    pub position: Vec2,
    pub radius: f64,
    pub color: Color,
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub bounds: Bounds,
    /// Disks, indexed by `DiskId` (iteration order is the tie-break order)
    disks: Vec<Disk>,
    /// Magnitude of the zero-time tolerance (seconds)
    pub tolerance: f64,
    /// Resolved-event cap per step
    pub max_events_per_step: u32,
    /// Multiplier applied to frame time by [`Simulation::advance_frame`]
    pub speed: f64,
    /// Total simulated time
    pub time: f64,
    /// Total resolved events since creation
    pub total_events: u64,
}

impl Simulation {
    /// Create an empty simulation from a config
    pub fn new(config: &SimConfig) -> Self {
        Self {
            bounds: Bounds::new(config.width, config.height),
            disks: Vec::new(),
            tolerance: config.time_tolerance,
            max_events_per_step: config.max_events_per_step,
            speed: config.speed,
            time: 0.0,
            total_events: 0,
        }
    }

    /// Empty simulation in a box of the given size, default tuning
    pub fn with_bounds(width: f64, height: f64) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            ..Self::new(&SimConfig::default())
        }
    }

    /// Add a disk, returning its stable id
    pub fn spawn_disk(&mut self, position: Vec2, velocity: Vec2, radius: f64, color: Color) -> DiskId {
        let id = DiskId(self.disks.len());
        self.disks.push(Disk::new(id, position, velocity, radius, color));
        id
    }

    /// Like [`Simulation::spawn_disk`] but validates the inputs
    pub fn try_spawn_disk(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        radius: f64,
        color: Color,
    ) -> Result<DiskId> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(self.spawn_disk(position, velocity, radius, color))
    }

    #[inline]
    pub fn disk(&self, id: DiskId) -> &Disk {
        &self.disks[id.index()]
    }

    #[inline]
    pub fn disk_mut(&mut self, id: DiskId) -> &mut Disk {
        &mut self.disks[id.index()]
    }

    #[inline]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Mutable access for the kernel (the set itself never grows or shrinks during a step)
    #[inline]
    pub(crate) fn disks_mut(&mut self) -> &mut [Disk] {
        &mut self.disks
    }

    pub fn num_disks(&self) -> usize {
        self.disks.len()
    }

    /// Advance by exactly `dt` seconds of simulated time
    pub fn step(&mut self, dt: f64) -> StepReport {
        step(self, dt)
    }

    /// Advance by one wall-clock frame, scaled by the speed multiplier
    pub fn advance_frame(&mut self, frame_dt: f64) -> StepReport {
        self.step(frame_dt * self.speed)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.disks.iter().map(Disk::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> Vec2 {
        total_momentum(self.disks.iter().map(|d| (d.mass(), d.velocity)))
    }

    /// Smallest edge-to-edge gap over all pairs (`None` with fewer than two disks)
    pub fn min_gap(&self) -> Option<f64> {
        let mut best: Option<f64> = None;
        for (i, a) in self.disks.iter().enumerate() {
            for b in &self.disks[i + 1..] {
                let g = a.gap(b);
                best = Some(best.map_or(g, |cur| cur.min(g)));
            }
        }
        best
    }

    /// Whether every disk lies inside the box (with slack `eps`)
    pub fn is_contained(&self, eps: f64) -> bool {
        self.disks
            .iter()
            .all(|d| self.bounds.contains_disk(d.position, d.radius(), eps))
    }

    /// Position/radius/color of every disk, in id order
    pub fn render_view(&self) -> Vec<DiskView> {
        self.disks
            .iter()
            .map(|d| DiskView {
                position: d.position,
                radius: d.radius(),
                color: d.color,
            })
            .collect()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}
