//! Drag Shot - drag, aim and launch a bouncing projectile
//!
//! Core modules:
//! - `sim`: Deterministic simulation (launch physics, trajectory preview, collisions)
//! - `controller`: Drag gesture to launch velocity
//! - `session`: Per-frame game loop (aiming, shots, win/lose reporting)
//! - `params`: Data-driven launch tuning

pub mod controller;
pub mod params;
pub mod session;
pub mod sim;

pub use controller::LaunchController;
pub use params::{ConfigError, LaunchParameters, SessionConfig};
pub use session::{FrameInput, Session, SessionEvent};

/// Game configuration constants
pub mod consts {
    /// Dot-product threshold for matching a normal to an axis (~45.6°)
    pub const SURFACE_THRESHOLD: f32 = 0.7;
    /// Distance a contact point is pushed off its surface
    pub const SURFACE_PUSH_OUT: f32 = 0.01;
    /// Preview start velocity relative to the real launch
    pub const PREVIEW_VELOCITY_SCALE: f32 = 2.0;
    /// Fixed preview timestep (50 Hz)
    pub const PREVIEW_STEP: f32 = 1.0 / 50.0;
    /// Drags must start this close to the projectile
    pub const GRAB_RADIUS: f32 = 1.0;
    /// Shots allowed per session
    pub const DEFAULT_MAX_SHOTS: u32 = 6;
}
