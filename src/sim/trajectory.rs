//! Trajectory preview shown while aiming
//!
//! Runs the same gravity step as the launch, but at a fixed step and with its
//! own rules: the start velocity is doubled, every contact simply reflects
//! (no damping, floors included), and three independent guards bound the
//! output.

use glam::Vec2;

use super::collision::{CollisionQuery, push_out, reflect_velocity};
use super::motion::{integrate, sweep};
use crate::consts::PREVIEW_VELOCITY_SCALE;
use crate::params::LaunchParameters;

/// Why a preview stopped growing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Accumulated path length reached the limit
    Length,
    /// More bounces than allowed
    Bounces,
    /// Point budget used up
    Resolution,
}

/// A finished preview polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Start point, every step start and every contact point, in order
    pub points: Vec<Vec2>,
    pub bounces: u32,
    pub stop: StopReason,
}

/// Fixed-step forecaster for a candidate launch
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPredictor {
    pub params: LaunchParameters,
    /// Simulation step in seconds, independent of frame rate
    pub fixed_step: f32,
}

impl TrajectoryPredictor {
    pub fn new(params: LaunchParameters, fixed_step: f32) -> Self {
        Self { params, fixed_step }
    }

    /// Forecast the path of a launch from `origin` with `velocity`
    pub fn predict<Q>(&self, origin: Vec2, velocity: Vec2, query: &Q) -> Vec<Vec2>
    where
        Q: CollisionQuery + ?Sized,
    {
        self.trace(origin, velocity, query).points
    }

    /// Forecast and report which guard ended the preview
    pub fn trace<Q>(&self, origin: Vec2, velocity: Vec2, query: &Q) -> Trajectory
    where
        Q: CollisionQuery + ?Sized,
    {
        let params = &self.params;
        // The start point is always kept
        let limit = params.trajectory_resolution.max(1);
        let gravity = params.effective_gravity();

        let mut points = Vec::with_capacity(limit);
        let mut position = origin;
        let mut velocity = velocity * PREVIEW_VELOCITY_SCALE;
        let mut bounces = 0u32;
        let mut length = 0.0f32;

        let stop = loop {
            if bounces > params.max_trajectory_bounces {
                break StopReason::Bounces;
            }
            if points.len() >= limit {
                break StopReason::Resolution;
            }

            points.push(position);

            let step = integrate(position, velocity, gravity, self.fixed_step);
            let displacement = step.displacement();
            let distance = displacement.length();
            length += distance;
            if length >= params.max_trajectory_length {
                break StopReason::Length;
            }

            match sweep(query, position, displacement, distance) {
                Some(hit) => {
                    if points.len() < limit {
                        points.push(hit.point);
                    }
                    velocity = reflect_velocity(step.velocity, hit.normal);
                    position = push_out(&hit);
                    bounces += 1;
                }
                None => {
                    position = step.to;
                    velocity = step.velocity;
                }
            }
        };

        Trajectory {
            points,
            bounces,
            stop,
        }
    }
}

/// Forecast a launch preview with the given tuning and fixed step
pub fn predict<Q>(
    origin: Vec2,
    velocity: Vec2,
    params: &LaunchParameters,
    fixed_step: f32,
    query: &Q,
) -> Vec<Vec2>
where
    Q: CollisionQuery + ?Sized,
{
    TrajectoryPredictor::new(params.clone(), fixed_step).predict(origin, velocity, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PREVIEW_STEP;
    use crate::sim::collision::{OpenSky, SurfaceHit};
    use crate::sim::test_support::{FixedHit, VerticalWall, weightless};
    use crate::sim::world::SegmentWorld;
    use proptest::prelude::*;

    fn ping_pong() -> SegmentWorld {
        SegmentWorld::new()
            .with_segment(Vec2::new(-1.0, -100.0), Vec2::new(-1.0, 100.0))
            .with_segment(Vec2::new(1.0, -100.0), Vec2::new(1.0, 100.0))
    }

    #[test]
    fn test_first_point_is_origin() {
        let origin = Vec2::new(3.0, -2.0);
        let points = predict(
            origin,
            Vec2::new(4.0, 7.0),
            &LaunchParameters::default(),
            PREVIEW_STEP,
            &OpenSky,
        );
        assert_eq!(points[0], origin);
        assert!(points.len() <= 20);
    }

    #[test]
    fn test_start_velocity_is_doubled() {
        let points = predict(Vec2::ZERO, Vec2::new(1.0, 0.0), &weightless(), 0.25, &OpenSky);
        assert_eq!(points[1], Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_length_guard() {
        let params = LaunchParameters {
            trajectory_resolution: 1000,
            ..weightless()
        };
        // 0.5 per step against a limit of 6.0
        let trajectory = TrajectoryPredictor::new(params, 0.25).trace(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            &OpenSky,
        );
        assert_eq!(trajectory.stop, StopReason::Length);
        assert_eq!(trajectory.points.len(), 12);
    }

    #[test]
    fn test_bounce_guard_stops_parallel_wall_ping_pong() {
        let params = LaunchParameters {
            max_trajectory_length: 1000.0,
            ..weightless()
        };
        let trajectory = TrajectoryPredictor::new(params, PREVIEW_STEP).trace(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            &ping_pong(),
        );
        assert_eq!(trajectory.stop, StopReason::Bounces);
        assert_eq!(trajectory.bounces, 4);
        // Each bounce contributes a step start and a contact point
        assert_eq!(trajectory.points.len(), 8);
        assert!((trajectory.points[1] - Vec2::new(1.0, 0.0)).length() < 1e-5);
        assert!((trajectory.points[3] - Vec2::new(-1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_resolution_guard_caps_points() {
        let params = LaunchParameters {
            max_trajectory_length: 1000.0,
            max_trajectory_bounces: 100,
            trajectory_resolution: 5,
            ..weightless()
        };
        let trajectory = TrajectoryPredictor::new(params, PREVIEW_STEP).trace(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            &ping_pong(),
        );
        assert_eq!(trajectory.stop, StopReason::Resolution);
        assert_eq!(trajectory.points.len(), 5);
    }

    #[test]
    fn test_floor_reflects_instead_of_stopping() {
        let world = SegmentWorld::new().with_segment(Vec2::new(-100.0, 0.0), Vec2::new(100.0, 0.0));
        let params = LaunchParameters {
            max_trajectory_length: 1000.0,
            ..Default::default()
        };
        let trajectory = TrajectoryPredictor::new(params, PREVIEW_STEP).trace(
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, -5.0),
            &world,
        );
        assert_eq!(trajectory.bounces, 1);
        let contact = trajectory
            .points
            .iter()
            .position(|p| p.y.abs() < 1e-5)
            .expect("floor contact should be recorded");
        assert!(contact + 1 < trajectory.points.len());
        // Keeps climbing after the floor
        let last = trajectory.points[trajectory.points.len() - 1];
        assert!(last.y > 0.5);
    }

    #[test]
    fn test_wall_bounce_is_undamped() {
        let params = LaunchParameters {
            max_trajectory_length: 1000.0,
            ..weightless()
        };
        // Wall at x = 1.1: the second step crosses it
        let trajectory = TrajectoryPredictor::new(params, 0.25).trace(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            &VerticalWall { x: 1.1 },
        );
        let points = &trajectory.points;
        assert!((points[3] - Vec2::new(1.1, 0.0)).length() < 1e-5);
        // Pushed out to 1.09, then travels a full 0.5 back
        assert!((points[4] - Vec2::new(1.09, 0.0)).length() < 1e-5);
        assert!((points[5] - Vec2::new(0.59, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_every_step_hitting_still_terminates() {
        let floor = FixedHit(SurfaceHit::new(Vec2::ZERO, Vec2::Y));
        let trajectory = TrajectoryPredictor::new(LaunchParameters::default(), PREVIEW_STEP)
            .trace(Vec2::new(0.0, 0.5), Vec2::new(1.0, -1.0), &floor);
        assert_eq!(trajectory.stop, StopReason::Bounces);
        assert!(trajectory.points.len() <= 20);
    }

    #[test]
    fn test_zero_resolution_still_yields_origin() {
        let params = LaunchParameters {
            trajectory_resolution: 0,
            ..Default::default()
        };
        let origin = Vec2::new(-1.0, 2.0);
        let points = predict(origin, Vec2::new(2.0, 3.0), &params, PREVIEW_STEP, &OpenSky);
        assert_eq!(points, vec![origin]);
    }

    #[test]
    fn test_zero_velocity_without_gravity() {
        let points = predict(Vec2::ONE, Vec2::ZERO, &weightless(), PREVIEW_STEP, &OpenSky);
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| *p == Vec2::ONE));
    }

    proptest! {
        #[test]
        fn predict_is_bounded_and_starts_at_origin(
            vx in -200.0f32..200.0,
            vy in -200.0f32..200.0,
            ox in -4.0f32..4.0,
            oy in 0.5f32..4.0,
        ) {
            let world = SegmentWorld::enclosure(Vec2::new(-5.0, 0.0), Vec2::new(5.0, 5.0));
            let params = LaunchParameters::default();
            let origin = Vec2::new(ox, oy);
            let points = predict(origin, Vec2::new(vx, vy), &params, PREVIEW_STEP, &world);
            prop_assert!(!points.is_empty());
            prop_assert!(points.len() <= params.trajectory_resolution);
            prop_assert_eq!(points[0], origin);
        }
    }
}
