//! Collision queries and reflection response
//!
//! The simulation never owns geometry. It asks a [`CollisionQuery`] to cast a
//! ray and gets back the nearest contact, if any.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Nearest contact returned by a raycast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceHit {
    /// Contact point in world space
    pub point: Vec2,
    /// Unit surface normal, pointing away from the surface
    pub normal: Vec2,
}

impl SurfaceHit {
    pub fn new(point: Vec2, normal: Vec2) -> Self {
        Self { point, normal }
    }
}

/// Synchronous raycast against the physics world
pub trait CollisionQuery {
    /// Cast a ray from `origin` along unit `direction` up to `max_distance`.
    ///
    /// Must return the nearest hit along the ray, or `None`.
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<SurfaceHit>;
}

impl<F> CollisionQuery for F
where
    F: Fn(Vec2, Vec2, f32) -> Option<SurfaceHit>,
{
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<SurfaceHit> {
        self(origin, direction, max_distance)
    }
}

/// An empty world: every raycast misses
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSky;

impl CollisionQuery for OpenSky {
    fn raycast(&self, _origin: Vec2, _direction: Vec2, _max_distance: f32) -> Option<SurfaceHit> {
        None
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Point just off the surface, so the next query does not start inside it
#[inline]
pub fn push_out(hit: &SurfaceHit) -> Vec2 {
    hit.point + hit.normal * crate::consts::SURFACE_PUSH_OUT
}
