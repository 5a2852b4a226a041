//! Time of impact solvers
//!
//! Both solvers assume constant velocities over the query interval and report
//! times relative to "now". A root slightly below zero (within `tolerance`)
//! is treated as a contact happening right now and clamped to `0.0`, so disks
//! resting in exact contact aren't lost to roundoff.
//!
//! Degenerate inputs (no relative motion, no real root, non-finite results)
//! are reported as `None` rather than errors.

use super::disk::Disk;

/// Earliest `t >= 0` at which the edges of `a` and `b` touch.
///
/// Solves `|dp + t*dv|^2 = R^2` with `dp = p_a - p_b`, `dv = v_a - v_b`,
/// `R = r_a + r_b`, normalized by `|dv|^2`:
///
/// ```text
/// a = (dv . dp) / |dv|^2
/// b = (|dp|^2 - R^2) / |dv|^2
/// t = -a -/+ sqrt(a^2 - b)
/// ```
pub fn pair_time_of_impact(a: &Disk, b: &Disk, tolerance: f64) -> Option<f64> {
    let dv = a.velocity - b.velocity;
    let dp = a.position - b.position;

    let v_sq = dv.length_squared();
    if v_sq == 0.0 {
        // Parallel motion, separation never changes
        return None;
    }

    let r = a.radius() + b.radius();
    let half_b = dv.dot(dp) / v_sq;
    let c = (dp.length_squared() - r * r) / v_sq;
    let disc = half_b * half_b - c;

    if disc < 0.0 || disc.is_nan() {
        // Paths never bring the edges together
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let t0 = -half_b - sqrt_disc;
    let t1 = -half_b + sqrt_disc;

    accept_root(t0, tolerance).or_else(|| accept_root(t1, tolerance))
}

/// Time for a scalar coordinate `p` moving at `v` to reach `target`.
///
/// `target` is the wall plane already offset inward by the disk's radius.
pub fn boundary_time_of_impact(p: f64, v: f64, target: f64, tolerance: f64) -> Option<f64> {
    if v == 0.0 {
        return None;
    }
    accept_root((target - p) / v, tolerance)
}

#[inline]
fn accept_root(t: f64, tolerance: f64) -> Option<f64> {
    if t.is_finite() && t >= -tolerance {
        Some(t.max(0.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;
    use crate::consts::TIME_TOLERANCE;
    use crate::sim::disk::{Color, DiskId};

    fn disk(id: usize, p: (f64, f64), v: (f64, f64), r: f64) -> Disk {
        Disk::new(DiskId(id), Vec2::new(p.0, p.1), Vec2::new(v.0, v.1), r, Color::default())
    }

    #[test]
    fn test_head_on_pair() {
        // Gap of 60 closing at 100/s
        let a = disk(0, (0.0, 0.0), (50.0, 0.0), 20.0);
        let b = disk(1, (100.0, 0.0), (-50.0, 0.0), 20.0);
        let t = pair_time_of_impact(&a, &b, TIME_TOLERANCE).expect("should collide");
        assert!((t - 0.6).abs() < 1e-12);
        // Symmetric in argument order
        let t2 = pair_time_of_impact(&b, &a, TIME_TOLERANCE).expect("should collide");
        assert!((t - t2).abs() < 1e-12);
    }

    #[test]
    fn test_pair_miss() {
        // Passing with 100 lateral offset, radius sum 40
        let a = disk(0, (0.0, 0.0), (50.0, 0.0), 20.0);
        let b = disk(1, (100.0, 100.0), (-50.0, 0.0), 20.0);
        assert_eq!(pair_time_of_impact(&a, &b, TIME_TOLERANCE), None);
    }

    #[test]
    fn test_pair_same_velocity() {
        let a = disk(0, (0.0, 0.0), (10.0, 5.0), 20.0);
        let b = disk(1, (100.0, 0.0), (10.0, 5.0), 20.0);
        assert_eq!(pair_time_of_impact(&a, &b, TIME_TOLERANCE), None);
    }

    #[test]
    fn test_pair_receding() {
        // Both roots negative
        let a = disk(0, (0.0, 0.0), (-50.0, 0.0), 20.0);
        let b = disk(1, (100.0, 0.0), (50.0, 0.0), 20.0);
        assert_eq!(pair_time_of_impact(&a, &b, TIME_TOLERANCE), None);
    }

    #[test]
    fn test_pair_touching_clamps_to_zero() {
        let a = disk(0, (0.0, 0.0), (10.0, 0.0), 20.0);
        let b = disk(1, (40.0, 0.0), (-10.0, 0.0), 20.0);
        assert_eq!(pair_time_of_impact(&a, &b, TIME_TOLERANCE), Some(0.0));
    }

    #[test]
    fn test_pair_touching_and_separating_reports_zero_root() {
        // Raw solver still reports t = 0 here; rejecting it is the filter's job
        let a = disk(0, (0.0, 0.0), (-10.0, 0.0), 20.0);
        let b = disk(1, (40.0, 0.0), (10.0, 0.0), 20.0);
        assert_eq!(pair_time_of_impact(&a, &b, TIME_TOLERANCE), Some(0.0));
    }

    #[test]
    fn test_pair_overlapping_returns_exit_root() {
        // Centers 20 apart, need 40: t0 < 0 so the later root is used
        let a = disk(0, (0.0, 0.0), (10.0, 0.0), 20.0);
        let b = disk(1, (20.0, 0.0), (-10.0, 0.0), 20.0);
        let t = pair_time_of_impact(&a, &b, TIME_TOLERANCE).expect("root");
        assert!((t - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_time() {
        // 5 units from the plane at x = 10, closing at 20/s
        let t = boundary_time_of_impact(15.0, -20.0, 10.0, TIME_TOLERANCE).expect("hit");
        assert!((t - 0.25).abs() < 1e-12);
        // Already past the plane and still moving out: root is in the past
        assert_eq!(boundary_time_of_impact(5.0, -20.0, 10.0, TIME_TOLERANCE), None);
    }

    #[test]
    fn test_boundary_zero_velocity() {
        assert_eq!(boundary_time_of_impact(50.0, 0.0, 10.0, TIME_TOLERANCE), None);
    }

    #[test]
    fn test_boundary_within_tolerance_clamps() {
        let p = 10.0 + 1e-12;
        // Sitting on the plane up to roundoff: the root is a hair below zero
        assert_eq!(boundary_time_of_impact(p, 20.0, 10.0, TIME_TOLERANCE), Some(0.0));
    }
}
