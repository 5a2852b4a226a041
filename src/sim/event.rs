//! Collision events and the earliest-event selector
//!
//! The selector scans every disk against the four walls and every unordered
//! pair of disks, and keeps the single earliest valid event within the
//! budget. Scan order is fixed:
//!
//! 1. disks in id order;
//! 2. for each disk `i`: `Left`, `Right`, `Top`, `Bottom`, then pairs `(i, j)` for `j > i`.
//!
//! A candidate replaces the current best only if its time is *strictly*
//! smaller, so among exactly simultaneous events the first one found in this
//! order wins. The other simultaneous events are picked up by the next scan
//! at `t = 0` if they are still valid after the first is resolved.

use serde::{Deserialize, Serialize};

use super::disk::{Disk, DiskId};
use super::filter::{boundary_is_approaching, pair_is_approaching};
use super::state::Bounds;
use super::toi::{boundary_time_of_impact, pair_time_of_impact};
use crate::Vec2;

/// A wall of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// x = 0
    Left,
    /// x = width
    Right,
    /// y = 0
    Top,
    /// y = height
    Bottom,
}

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Side {
    /// Scan order of the selector
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Axis perpendicular to this wall
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::X,
            Side::Top | Side::Bottom => Axis::Y,
        }
    }

    /// Unit normal pointing into the box
    #[inline]
    pub fn normal(self) -> Vec2 {
        match self {
            Side::Left => Vec2::X,
            Side::Right => Vec2::NEG_X,
            Side::Top => Vec2::Y,
            Side::Bottom => Vec2::NEG_Y,
        }
    }

    /// Coordinate the center of a disk of `radius` reaches when its edge touches this wall
    #[inline]
    pub fn target(self, bounds: &Bounds, radius: f64) -> f64 {
        match self {
            Side::Left | Side::Top => radius,
            Side::Right => bounds.width - radius,
            Side::Bottom => bounds.height - radius,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// Time of the collision between a disk and one wall, if any
pub fn side_time_of_impact(disk: &Disk, side: Side, bounds: &Bounds, tolerance: f64) -> Option<f64> {
    let (p, v) = match side.axis() {
        Axis::X => (disk.position.x, disk.velocity.x),
        Axis::Y => (disk.position.y, disk.velocity.y),
    };
    boundary_time_of_impact(p, v, side.target(bounds, disk.radius()), tolerance)
}

/// A resolved-to-be collision; `time` is relative to the start of the current sub-step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionEvent {
    DiskPair { a: DiskId, b: DiskId, time: f64 },
    Boundary { disk: DiskId, side: Side, time: f64 },
}

impl CollisionEvent {
    #[inline]
    pub fn time(&self) -> f64 {
        match *self {
            CollisionEvent::DiskPair { time, .. } | CollisionEvent::Boundary { time, .. } => time,
        }
    }

    /// Whether the disk takes part in this event
    pub fn involves(&self, id: DiskId) -> bool {
        match *self {
            CollisionEvent::DiskPair { a, b, .. } => a == id || b == id,
            CollisionEvent::Boundary { disk, .. } => disk == id,
        }
    }
}

/// Earliest valid event in `[0, dt]`, or `None` if the disks fly freely for all of `dt`
pub fn select_earliest(disks: &[Disk], bounds: &Bounds, dt: f64, tolerance: f64) -> Option<CollisionEvent> {
    let mut best: Option<CollisionEvent> = None;
    let mut best_time = f64::INFINITY;

    // Keeps the candidate only if it's inside the budget and strictly earlier
    let beats = |t: f64, best_time: f64| t <= dt && t < best_time;

    for (i, a) in disks.iter().enumerate() {
        for side in Side::ALL {
            let Some(t) = side_time_of_impact(a, side, bounds, tolerance) else {
                continue;
            };
            if !beats(t, best_time) || !boundary_is_approaching(a, side) {
                continue;
            }
            best_time = t;
            best = Some(CollisionEvent::Boundary {
                disk: a.id,
                side,
                time: t,
            });
        }

        for b in &disks[i + 1..] {
            let Some(t) = pair_time_of_impact(a, b, tolerance) else {
                continue;
            };
            if !beats(t, best_time) || !pair_is_approaching(a, b) {
                continue;
            }
            best_time = t;
            best = Some(CollisionEvent::DiskPair {
                a: a.id,
                b: b.id,
                time: t,
            });
        }
    }

    if best.is_none() {
        log::trace!("no event within dt={dt}");
    }
    best
}
