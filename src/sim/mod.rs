//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Time steps are passed in, never read from a clock
//! - Geometry is reached only through `CollisionQuery`
//! - No rendering, input or platform dependencies

pub mod collision;
pub mod launch;
pub mod motion;
pub mod state;
pub mod surface;
pub mod trajectory;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use collision::{CollisionQuery, OpenSky, SurfaceHit, reflect_velocity};
pub use launch::{Contact, LaunchSimulator, TickReport, tick};
pub use state::{DragGesture, ProjectileState, ShotBudget};
pub use surface::{SurfaceKind, classify};
pub use trajectory::{StopReason, Trajectory, TrajectoryPredictor, predict};
pub use world::{Segment, SegmentWorld};
