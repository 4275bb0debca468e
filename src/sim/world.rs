//! Static line-segment geometry
//!
//! A small collision world made of two-sided segments. Normals are flipped to
//! face the ray origin, so a segment can be hit from either side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionQuery, SurfaceHit};

/// A single straight collider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Unit normal facing `from` (zero for a degenerate segment)
    pub fn normal_facing(&self, from: Vec2) -> Vec2 {
        let edge = self.end - self.start;
        let normal = Vec2::new(-edge.y, edge.x).normalize_or_zero();
        if normal.dot(from - self.start) < 0.0 {
            -normal
        } else {
            normal
        }
    }
}

fn cross_2d(a: Vec2, b: Vec2) -> f32 {
    (a.x * b.y) - (a.y * b.x)
}

/// Intersect ray `origin + direction * t` with a segment
///
/// Returns the ray distance `t` of the crossing, if any.
fn ray_segment(origin: Vec2, direction: Vec2, segment: &Segment) -> Option<f32> {
    let s = segment.end - segment.start;
    let rxs = cross_2d(direction, s);
    if rxs.abs() < 1e-6 {
        // Parallel (or degenerate); grazing contacts are ignored
        return None;
    }

    let qmp = segment.start - origin;
    let t = cross_2d(qmp, s) / rxs;
    let u = cross_2d(qmp, direction) / rxs;
    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

/// Collision world of static segments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentWorld {
    pub segments: Vec<Segment>,
}

impl SegmentWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment (builder style)
    pub fn with_segment(mut self, start: Vec2, end: Vec2) -> Self {
        self.segments.push(Segment::new(start, end));
        self
    }

    /// Closed box: floor, two walls and a ceiling
    pub fn enclosure(min: Vec2, max: Vec2) -> Self {
        let top_left = Vec2::new(min.x, max.y);
        let bottom_right = Vec2::new(max.x, min.y);
        Self::new()
            .with_segment(min, bottom_right)
            .with_segment(bottom_right, max)
            .with_segment(max, top_left)
            .with_segment(top_left, min)
    }
}

impl CollisionQuery for SegmentWorld {
    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<SurfaceHit> {
        if max_distance <= 0.0 || direction.length_squared() < 1e-12 {
            return None;
        }

        self.segments
            .iter()
            .filter_map(|segment| {
                ray_segment(origin, direction, segment)
                    .filter(|&t| t <= max_distance)
                    .map(|t| (t, segment))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(t, segment)| {
                SurfaceHit::new(origin + direction * t, segment.normal_facing(origin))
            })
    }
}
