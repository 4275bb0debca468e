//! Surface classification from collision normals
//!
//! A contact normal is compared against the four axis directions. Floor is
//! tested first, then walls, then the ceiling, so a normal that leans both up
//! and sideways is always a floor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SURFACE_THRESHOLD;

/// Kind of surface a projectile touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Normal points up: the projectile lands
    Floor,
    /// Normal points left or right
    Wall,
    /// Normal points down
    Ceiling,
    /// No axis is close enough (degenerate or non-unit normal)
    Unknown,
}

impl SurfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceKind::Floor => "floor",
            SurfaceKind::Wall => "wall",
            SurfaceKind::Ceiling => "ceiling",
            SurfaceKind::Unknown => "unknown",
        }
    }

    /// Whether the real launch reflects off this surface
    pub fn bounces(&self) -> bool {
        matches!(self, SurfaceKind::Wall | SurfaceKind::Ceiling)
    }
}

/// Classify a collision normal
///
/// Comparisons are strict: a dot product of exactly the threshold does not
/// match that axis.
pub fn classify(normal: Vec2) -> SurfaceKind {
    if normal.dot(Vec2::Y) > SURFACE_THRESHOLD {
        SurfaceKind::Floor
    } else if normal.dot(Vec2::NEG_X) > SURFACE_THRESHOLD
        || normal.dot(Vec2::X) > SURFACE_THRESHOLD
    {
        SurfaceKind::Wall
    } else if normal.dot(Vec2::NEG_Y) > SURFACE_THRESHOLD {
        SurfaceKind::Ceiling
    } else {
        SurfaceKind::Unknown
    }
}
