//! Launch controller: turns a pointer drag into a launch velocity
//!
//! The launch goes opposite the pull, like a slingshot. Drag length is
//! clamped to `max_drag_distance` before it is scaled into a speed.

use glam::Vec2;

use crate::params::LaunchParameters;
use crate::sim::{DragGesture, ShotBudget};

/// Clamp a drag vector to the maximum drag distance, keeping its direction
pub fn clamp_drag(drag_vector: Vec2, max_drag_distance: f32) -> Vec2 {
    let magnitude = drag_vector.length().min(max_drag_distance);
    drag_vector.normalize_or_zero() * magnitude
}

/// Launch velocity for a drag gesture
///
/// A zero-length drag yields a zero velocity.
pub fn compute_launch_velocity(drag: &DragGesture, params: &LaunchParameters) -> Vec2 {
    clamp_drag(drag.drag_vector(), params.max_drag_distance) * params.launch_force_multiplier
}

/// Whether `point` is close enough to `anchor` to grab it
#[inline]
pub fn is_within_grab_radius(point: Vec2, anchor: Vec2, radius: f32) -> bool {
    point.distance(anchor) < radius
}

/// Tracks the active drag, if any
#[derive(Debug, Clone)]
pub struct LaunchController {
    pub params: LaunchParameters,
    pub grab_radius: f32,
    drag: Option<DragGesture>,
}

impl LaunchController {
    pub fn new(params: LaunchParameters, grab_radius: f32) -> Self {
        Self {
            params,
            grab_radius,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    /// Start a drag at `point` if it grabs `anchor` and a shot is available
    pub fn begin_drag(&mut self, point: Vec2, anchor: Vec2, budget: &ShotBudget) -> bool {
        if !budget.allows_shot() || !is_within_grab_radius(point, anchor, self.grab_radius) {
            return false;
        }
        log::debug!("Drag started at {:?}", point);
        self.drag = Some(DragGesture::start(point));
        true
    }

    /// Move the active drag; returns the velocity it would launch with
    pub fn update_drag(&mut self, point: Vec2) -> Option<Vec2> {
        let drag = self.drag.as_mut()?;
        drag.update(point);
        Some(compute_launch_velocity(drag, &self.params))
    }

    /// End of the aim line drawn from `anchor` for the active drag
    pub fn aim_point(&self, anchor: Vec2) -> Option<Vec2> {
        self.drag
            .map(|drag| anchor + clamp_drag(drag.drag_vector(), self.params.max_drag_distance))
    }

    /// Finish the drag at `point`; returns the launch velocity
    pub fn release(&mut self, point: Vec2) -> Option<Vec2> {
        let mut drag = self.drag.take()?;
        drag.update(point);
        Some(compute_launch_velocity(&drag, &self.params))
    }

    /// Drop the active drag without launching
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
