//! Launch physics: the real flight of a released projectile
//!
//! One call advances one frame. Floors stop the projectile, walls and
//! ceilings reflect it with damping, and any contact that leaves it too slow
//! ends the flight.

use super::collision::{CollisionQuery, SurfaceHit, push_out, reflect_velocity};
use super::motion::{integrate, sweep};
use super::state::ProjectileState;
use super::surface::{SurfaceKind, classify};
use crate::params::LaunchParameters;

/// Contact resolved during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub kind: SurfaceKind,
    pub hit: SurfaceHit,
}

/// Outcome of one simulator tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub state: ProjectileState,
    /// Surface touched this tick, if any
    pub contact: Option<Contact>,
}

impl TickReport {
    /// Whether this tick brought the projectile to rest
    pub fn landed(&self, before: &ProjectileState) -> bool {
        before.is_launched && !self.state.is_launched
    }
}

/// Variable-step simulator for a launched projectile
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSimulator {
    pub params: LaunchParameters,
}

impl LaunchSimulator {
    pub fn new(params: LaunchParameters) -> Self {
        Self { params }
    }

    /// Advance `state` by `dt` seconds
    pub fn tick<Q>(&self, state: ProjectileState, dt: f32, query: &Q) -> ProjectileState
    where
        Q: CollisionQuery + ?Sized,
    {
        self.step(state, dt, query).state
    }

    /// Advance `state` by `dt` seconds and report the contact, if any
    pub fn step<Q>(&self, state: ProjectileState, dt: f32, query: &Q) -> TickReport
    where
        Q: CollisionQuery + ?Sized,
    {
        if !state.is_launched {
            return TickReport {
                state,
                contact: None,
            };
        }

        let params = &self.params;
        let motion = integrate(
            state.position,
            state.velocity,
            params.effective_gravity(),
            dt,
        );
        let mut next = ProjectileState {
            position: motion.to,
            velocity: motion.velocity,
            is_launched: true,
        };

        // Swept from the already-advanced position over this frame's travel
        let travel = next.velocity.length() * dt;
        let Some(hit) = sweep(query, next.position, next.velocity, travel) else {
            return TickReport {
                state: next,
                contact: None,
            };
        };

        let kind = classify(hit.normal);
        match kind {
            SurfaceKind::Floor => {
                log::debug!("Hit the floor at {:?}, stopping", hit.point);
                next = next.stopped();
            }
            SurfaceKind::Wall | SurfaceKind::Ceiling => {
                next.velocity =
                    reflect_velocity(next.velocity, hit.normal) * params.bounce_damping_factor;
                log::debug!("Hit a {}, reflecting to {:?}", kind.as_str(), next.velocity);
            }
            SurfaceKind::Unknown => {
                log::warn!(
                    "Unclassified surface normal {:?} at {:?}, keeping velocity",
                    hit.normal,
                    hit.point
                );
            }
        }

        next.position = push_out(&hit);

        if next.is_launched && next.velocity.length() < params.velocity_threshold {
            log::debug!("Velocity {:?} below threshold, stopping", next.velocity);
            next = next.stopped();
        }

        TickReport {
            state: next,
            contact: Some(Contact { kind, hit }),
        }
    }
}

/// Advance a projectile one frame with the given tuning
pub fn tick<Q>(
    state: ProjectileState,
    params: &LaunchParameters,
    dt: f32,
    query: &Q,
) -> ProjectileState
where
    Q: CollisionQuery + ?Sized,
{
    LaunchSimulator::new(params.clone()).tick(state, dt, query)
}
