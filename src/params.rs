//! Launch tuning and session configuration
//!
//! Loaded once at session start from JSON and immutable afterwards. Missing
//! fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_MAX_SHOTS, GRAB_RADIUS, PREVIEW_STEP};

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid JSON for this schema
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot use
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Physics tuning shared by the launch and the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    /// Launch speed per unit of drag distance
    pub launch_force_multiplier: f32,
    /// Downward acceleration before scaling
    pub gravity: f32,
    pub gravity_scale: f32,
    /// Drag distance is clamped to this
    pub max_drag_distance: f32,
    /// Below this speed after a contact the projectile stops
    pub velocity_threshold: f32,
    /// Speed multiplier applied after a wall or ceiling bounce
    pub bounce_damping_factor: f32,
    /// Maximum number of preview points
    pub trajectory_resolution: usize,
    /// Preview stops once the bounce count exceeds this
    pub max_trajectory_bounces: u32,
    /// Preview stops once its path is this long
    pub max_trajectory_length: f32,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            launch_force_multiplier: 5.0,
            gravity: 9.8,
            gravity_scale: 0.5,
            max_drag_distance: 3.0,
            velocity_threshold: 0.05,
            bounce_damping_factor: 0.7,
            trajectory_resolution: 20,
            max_trajectory_bounces: 3,
            max_trajectory_length: 6.0,
        }
    }
}

impl LaunchParameters {
    /// Set the drag clamp and the preview length derived from it (twice the drag)
    pub fn with_max_drag_distance(mut self, distance: f32) -> Self {
        self.max_drag_distance = distance;
        self.max_trajectory_length = distance * 2.0;
        self
    }

    /// Gravity actually applied per second
    #[inline]
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * self.gravity_scale
    }

    /// Check every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("launch_force_multiplier", self.launch_force_multiplier)?;
        non_negative("gravity", self.gravity)?;
        non_negative("gravity_scale", self.gravity_scale)?;
        non_negative("max_drag_distance", self.max_drag_distance)?;
        non_negative("velocity_threshold", self.velocity_threshold)?;
        non_negative("max_trajectory_length", self.max_trajectory_length)?;
        non_negative("bounce_damping_factor", self.bounce_damping_factor)?;
        if self.bounce_damping_factor > 1.0 {
            return Err(ConfigError::Invalid {
                field: "bounce_damping_factor",
                reason: "must not exceed 1.0",
            });
        }
        if self.trajectory_resolution == 0 {
            return Err(ConfigError::Invalid {
                field: "trajectory_resolution",
                reason: "must allow at least the start point",
            });
        }
        Ok(())
    }

    /// Parse and validate from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let params = Self::from_json_str(&json)?;
        log::info!("Loaded launch parameters from {}", path.display());
        Ok(params)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

/// Per-session knobs that sit outside the physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub launch: LaunchParameters,
    /// Shots allowed before the session is lost
    pub max_shots: u32,
    /// A drag only starts this close to the projectile
    pub grab_radius: f32,
    /// Fixed step used by the trajectory preview (seconds)
    pub preview_step: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            launch: LaunchParameters::default(),
            max_shots: DEFAULT_MAX_SHOTS,
            grab_radius: GRAB_RADIUS,
            preview_step: PREVIEW_STEP,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.launch.validate()?;
        non_negative("grab_radius", self.grab_radius)?;
        non_negative("preview_step", self.preview_step)?;
        if self.preview_step == 0.0 {
            return Err(ConfigError::Invalid {
                field: "preview_step",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }
}
