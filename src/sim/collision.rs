//! Collision response
//!
//! Disk-disk contacts get an elastic impulse along the line of centers, using
//! positions at the moment of contact. Wall contacts reflect the velocity
//! component perpendicular to the wall (frictionless).

use super::disk::Disk;
use super::event::CollisionEvent;
use crate::Vec2;

/// Velocity of body 1 after a 2D elastic collision with body 2
///
/// `v1' = v1 - 2 m2 / (m1 + m2) * ((v1 - v2) . (x1 - x2)) / |x1 - x2|^2 * (x1 - x2)`
///
/// Returns `v1` unchanged when the centers coincide (no defined normal).
pub fn elastic_velocity(x1: Vec2, x2: Vec2, v1: Vec2, v2: Vec2, m1: f64, m2: f64) -> Vec2 {
    let x = x1 - x2;
    let x_sq = x.length_squared();
    if x_sq == 0.0 {
        return v1;
    }
    let k = 2.0 * m2 / (m1 + m2) * (v1 - v2).dot(x) / x_sq;
    v1 - x * k
}

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Apply the response for `event` to the disks it names
pub fn resolve(disks: &mut [Disk], event: &CollisionEvent) {
    match *event {
        CollisionEvent::DiskPair { a, b, .. } => {
            let (ia, ib) = (a.index(), b.index());
            let (da, db) = (&disks[ia], &disks[ib]);
            if da.position == db.position {
                log::warn!("disks {ia} and {ib} share a center; skipping impulse");
                return;
            }

            // Both velocities computed from the pre-collision state
            let va = elastic_velocity(da.position, db.position, da.velocity, db.velocity, da.mass(), db.mass());
            let vb = elastic_velocity(db.position, da.position, db.velocity, da.velocity, db.mass(), da.mass());

            disks[ia].velocity = va;
            disks[ib].velocity = vb;
        }
        CollisionEvent::Boundary { disk, side, .. } => {
            // Axis-aligned normal: flips exactly one component
            let d = &mut disks[disk.index()];
            d.velocity = reflect_velocity(d.velocity, side.normal());
        }
    }
}
