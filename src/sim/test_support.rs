//! Scripted collision worlds for unit tests

use glam::Vec2;

use super::collision::{CollisionQuery, SurfaceHit};
use crate::params::LaunchParameters;

/// Every cast reports the same contact
#[derive(Debug, Clone, Copy)]
pub struct FixedHit(pub SurfaceHit);

impl CollisionQuery for FixedHit {
    fn raycast(&self, _origin: Vec2, _direction: Vec2, _max_distance: f32) -> Option<SurfaceHit> {
        Some(self.0)
    }
}

/// A wall at `x` facing back toward the origin side, infinite in y
#[derive(Debug, Clone, Copy)]
pub struct VerticalWall {
    pub x: f32,
}

impl CollisionQuery for VerticalWall {
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<SurfaceHit> {
        if direction.x.abs() < 1e-9 {
            return None;
        }
        let t = (self.x - origin.x) / direction.x;
        if t < 0.0 || t > max_distance {
            return None;
        }
        let normal = if origin.x < self.x { Vec2::NEG_X } else { Vec2::X };
        Some(SurfaceHit::new(origin + direction * t, normal))
    }
}

/// Default tuning with gravity switched off
pub fn weightless() -> LaunchParameters {
    LaunchParameters {
        gravity: 0.0,
        ..Default::default()
    }
}
