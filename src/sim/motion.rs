//! Shared integrate-and-sweep primitive
//!
//! Both the real launch and the preview advance a body the same way: gravity
//! first, then position, then a swept raycast over the step. What they do with
//! a contact is up to each caller.

use glam::Vec2;

use super::collision::{CollisionQuery, SurfaceHit};

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Position before the step
    pub from: Vec2,
    /// Position after the step
    pub to: Vec2,
    /// Velocity after gravity was applied
    pub velocity: Vec2,
}

impl Step {
    /// Displacement covered by this step
    pub fn displacement(&self) -> Vec2 {
        self.to - self.from
    }
}

/// Apply gravity to the velocity, then move by the new velocity
#[inline]
pub fn integrate(position: Vec2, velocity: Vec2, gravity: f32, dt: f32) -> Step {
    let velocity = Vec2::new(velocity.x, velocity.y - gravity * dt);
    Step {
        from: position,
        to: position + velocity * dt,
        velocity,
    }
}

/// Cast from `origin` along `direction` for `distance`
///
/// A zero direction or zero distance has nothing to sweep and never hits.
pub fn sweep<Q>(query: &Q, origin: Vec2, direction: Vec2, distance: f32) -> Option<SurfaceHit>
where
    Q: CollisionQuery + ?Sized,
{
    let direction = direction.normalize_or_zero();
    if direction == Vec2::ZERO || distance.is_nan() || distance <= 0.0 {
        return None;
    }
    query.raycast(origin, direction, distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::OpenSky;
    use std::cell::Cell;

    #[test]
    fn test_integrate_gravity_before_position() {
        let step = integrate(Vec2::ZERO, Vec2::new(1.0, 0.0), 10.0, 0.1);
        assert!((step.velocity - Vec2::new(1.0, -1.0)).length() < 1e-6);
        // Position uses the post-gravity velocity
        assert!((step.to - Vec2::new(0.1, -0.1)).length() < 1e-6);
        assert!((step.displacement() - step.to).length() < 1e-6);
    }

    #[test]
    fn test_sweep_skips_degenerate_casts() {
        let calls = Cell::new(0);
        let counting = |_: Vec2, _: Vec2, _: f32| -> Option<SurfaceHit> {
            calls.set(calls.get() + 1);
            None
        };
        assert!(sweep(&counting, Vec2::ZERO, Vec2::ZERO, 1.0).is_none());
        assert!(sweep(&counting, Vec2::ZERO, Vec2::X, 0.0).is_none());
        assert_eq!(calls.get(), 0);

        assert!(sweep(&counting, Vec2::ZERO, Vec2::new(3.0, 0.0), 1.0).is_none());
        assert_eq!(calls.get(), 1);
        assert!(sweep(&OpenSky, Vec2::ZERO, Vec2::X, 1.0).is_none());
    }
}
