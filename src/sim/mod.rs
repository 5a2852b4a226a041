//! Collision kernel
//!
//! Everything that moves disks lives here. This module must stay total and
//! deterministic:
//! - No errors from the physics path (degenerate numerics mean "no event")
//! - Stable iteration order (by disk id) for tie-breaking
//! - No rendering or platform dependencies

pub mod collision;
pub mod disk;
pub mod event;
pub mod filter;
pub mod state;
pub mod step;
pub mod toi;

pub use collision::{elastic_velocity, reflect_velocity, resolve};
pub use disk::{Color, Disk, DiskId};
pub use event::{Axis, CollisionEvent, Side, select_earliest, side_time_of_impact};
pub use filter::{boundary_is_approaching, pair_is_approaching};
pub use state::{Bounds, DiskView, Simulation};
pub use step::{StepReport, step};
pub use toi::{boundary_time_of_impact, pair_time_of_impact};
