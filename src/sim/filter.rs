//! Validity filters for candidate events
//!
//! A root at (or near) `t = 0` doesn't always mean an impending collision:
//! bodies already in contact may be moving apart. These checks keep only
//! candidates where the bodies are actually closing.

use super::disk::Disk;
use super::event::Side;
use crate::approach_rate;

/// True when the separation between `a` and `b` is currently shrinking
#[inline]
pub fn pair_is_approaching(a: &Disk, b: &Disk) -> bool {
    approach_rate(a.position - b.position, a.velocity - b.velocity) < 0.0
}

/// True when the disk is moving toward `side`
#[inline]
pub fn boundary_is_approaching(disk: &Disk, side: Side) -> bool {
    match side {
        Side::Left => disk.velocity.x < 0.0,
        Side::Right => disk.velocity.x > 0.0,
        Side::Top => disk.velocity.y < 0.0,
        Side::Bottom => disk.velocity.y > 0.0,
    }
}
