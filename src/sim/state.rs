//! Projectile, drag and shot-budget state
//!
//! Plain data. The simulator produces new [`ProjectileState`] values; nothing
//! here mutates itself behind the caller's back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_SHOTS;

/// Position and velocity of the single launched object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// In flight; while false the velocity is zero and nothing steps
    pub is_launched: bool,
}

impl ProjectileState {
    /// A projectile sitting still at `position`
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            is_launched: false,
        }
    }

    /// Launch from the current position
    ///
    /// A zero velocity does not launch: the projectile stays at rest.
    pub fn launched(self, velocity: Vec2) -> Self {
        if velocity == Vec2::ZERO {
            return Self::at_rest(self.position);
        }
        Self {
            position: self.position,
            velocity,
            is_launched: true,
        }
    }

    /// Bring the projectile to rest where it is
    pub fn stopped(self) -> Self {
        Self::at_rest(self.position)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Default for ProjectileState {
    fn default() -> Self {
        Self::at_rest(Vec2::ZERO)
    }
}

/// An in-progress pointer drag, in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    /// Pointer position when the drag started
    pub origin: Vec2,
    /// Latest pointer position
    pub current: Vec2,
}

impl DragGesture {
    pub fn start(origin: Vec2) -> Self {
        Self {
            origin,
            current: origin,
        }
    }

    /// Move the pointer end of the drag
    pub fn update(&mut self, current: Vec2) {
        self.current = current;
    }

    /// Pull-back vector: launch goes opposite to the pointer motion
    pub fn drag_vector(&self) -> Vec2 {
        self.origin - self.current
    }
}

/// Shots taken, shots allowed and whether the goal was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotBudget {
    pub shots_used: u32,
    pub max_shots: u32,
    pub game_won: bool,
}

impl ShotBudget {
    pub fn new(max_shots: u32) -> Self {
        Self {
            shots_used: 0,
            max_shots,
            game_won: false,
        }
    }

    /// Whether a new drag may start
    pub fn allows_shot(&self) -> bool {
        !self.game_won && self.shots_used < self.max_shots
    }

    pub fn shots_remaining(&self) -> u32 {
        self.max_shots.saturating_sub(self.shots_used)
    }

    pub fn is_exhausted(&self) -> bool {
        self.shots_used >= self.max_shots
    }

    pub fn record_shot(&mut self) {
        self.shots_used = self.shots_used.saturating_add(1);
    }

    pub fn mark_won(&mut self) {
        self.game_won = true;
    }
}

impl Default for ShotBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SHOTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_velocity_never_launches() {
        let state = ProjectileState::at_rest(Vec2::new(1.0, 2.0)).launched(Vec2::ZERO);
        assert!(!state.is_launched);
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(state.position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_launch_and_stop() {
        let state = ProjectileState::default().launched(Vec2::new(3.0, 4.0));
        assert!(state.is_launched);
        assert!((state.speed() - 5.0).abs() < 1e-6);

        let state = state.stopped();
        assert!(!state.is_launched);
        assert_eq!(state.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_drag_vector_points_back_to_origin() {
        let mut drag = DragGesture::start(Vec2::new(1.0, 1.0));
        assert_eq!(drag.drag_vector(), Vec2::ZERO);
        drag.update(Vec2::new(0.0, -1.0));
        assert_eq!(drag.drag_vector(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_shot_budget_gate() {
        let mut budget = ShotBudget::new(2);
        assert!(budget.allows_shot());
        budget.record_shot();
        assert_eq!(budget.shots_remaining(), 1);
        budget.record_shot();
        assert!(budget.is_exhausted());
        assert!(!budget.allows_shot());

        let mut budget = ShotBudget::new(2);
        budget.mark_won();
        assert!(!budget.allows_shot());
    }
}
