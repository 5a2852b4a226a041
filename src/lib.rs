//! Disk CCD - event-driven continuous collision detection for elastic disks
//!
//! Core modules:
//! - `sim`: Collision kernel (time of impact, event selection, resolution, stepping)
//! - `settings`: Data-driven simulation configuration
//! - `scene`: Initial disk placement (seeded, for demos and tests)
//! - `error`: Error type for the configuration and scene surfaces

pub mod error;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{ScenePreset, SimConfig};

/// 2D vector used throughout the kernel (f64 so the time tolerance stays meaningful)
pub type Vec2 = glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Default magnitude of the zero-time tolerance (seconds).
    ///
    /// Roots in `[-TIME_TOLERANCE, 0)` are clamped to exactly zero.
    pub const TIME_TOLERANCE: f64 = 1e-10;
    /// Maximum resolved events in a single step before the stepper gives up
    pub const MAX_EVENTS_PER_STEP: u32 = 10_000;

    /// Default box dimensions
    pub const BOX_WIDTH: f64 = 2400.0;
    pub const BOX_HEIGHT: f64 = 1600.0;

    /// Default driver frame time (60 Hz)
    pub const FRAME_DT: f64 = 1.0 / 60.0;
}

/// Rate of change of squared separation at t = 0: `d/dt |dp + t*dv|^2 = 2 (dv . dp)`
///
/// Negative means the two points are getting closer.
#[inline]
pub fn approach_rate(dp: Vec2, dv: Vec2) -> f64 {
    2.0 * dv.dot(dp)
}

/// Total momentum of a set of (mass, velocity) pairs
#[inline]
pub fn total_momentum(bodies: impl IntoIterator<Item = (f64, Vec2)>) -> Vec2 {
    bodies.into_iter().fold(Vec2::ZERO, |acc, (m, v)| acc + v * m)
}
