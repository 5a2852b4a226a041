//! Event-driven stepper
//!
//! Advances the simulation by a time budget, stopping exactly at each
//! collision instead of sampling at fixed ticks:
//!
//! 1. find the earliest valid event within the remaining budget;
//! 2. none: drift every disk for the rest of the budget and stop;
//! 3. otherwise drift every disk to the event, resolve it, shrink the budget, repeat.
//!
//! The loop is capped at `max_events_per_step` resolutions. Hitting the cap
//! (roundoff ping-pong between near-zero events, or a pathologically dense
//! scene) spends the rest of the budget in free flight, clamps disks back into
//! the box and flags the report as truncated.

use serde::Serialize;

use super::collision::resolve;
use super::disk::Disk;
use super::event::{CollisionEvent, select_earliest};
use super::state::Simulation;

/// What happened during one call to [`step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StepReport {
    /// Resolved events (pair + boundary)
    pub events: u32,
    pub pair_events: u32,
    pub boundary_events: u32,
    /// Simulated time covered; equals the requested `dt`
    pub advanced: f64,
    /// The event cap was hit and the tail of the budget was not collision-checked
    pub truncated: bool,
}

impl StepReport {
    fn record(&mut self, event: &CollisionEvent) {
        self.events += 1;
        match event {
            CollisionEvent::DiskPair { .. } => self.pair_events += 1,
            CollisionEvent::Boundary { .. } => self.boundary_events += 1,
        }
    }
}

/// Free flight for every disk
fn drift_all(disks: &mut [Disk], t: f64) {
    if t == 0.0 {
        return;
    }
    for d in disks {
        d.advance(t);
    }
}

/// Advance `sim` by exactly `dt` seconds, resolving every collision on the way
pub fn step(sim: &mut Simulation, dt: f64) -> StepReport {
    let mut report = StepReport::default();

    // Never fails: a bad budget is a no-op
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("step called with invalid dt={dt}; treating as 0");
        0.0
    };

    let bounds = sim.bounds;
    let tolerance = sim.tolerance;
    let cap = sim.max_events_per_step;
    let mut remaining = dt;

    loop {
        if report.events >= cap {
            log::warn!(
                "event cap ({cap}) reached with {remaining} s left; finishing step without collision checks"
            );
            let disks = sim.disks_mut();
            drift_all(disks, remaining);
            for d in disks.iter_mut() {
                d.position = bounds.clamp_center(d.position, d.radius());
            }
            report.advanced += remaining;
            report.truncated = true;
            break;
        }

        let Some(event) = select_earliest(sim.disks(), &bounds, remaining, tolerance) else {
            drift_all(sim.disks_mut(), remaining);
            report.advanced += remaining;
            break;
        };

        let t_hit = event.time();
        let disks = sim.disks_mut();
        drift_all(disks, t_hit);
        resolve(disks, &event);
        log::debug!("resolved {event:?} with {} s left", remaining - t_hit);

        remaining -= t_hit;
        report.advanced += t_hit;
        report.record(&event);
    }

    sim.time += dt;
    sim.total_events += u64::from(report.events);
    report
}
