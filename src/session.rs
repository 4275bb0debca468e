//! Per-frame game loop
//!
//! Wires pointer input to the launch controller, keeps the trajectory preview
//! fresh while aiming, steps the projectile while it flies and counts shots.
//! Win detection lives outside; callers report it through [`Session::mark_won`].

use glam::Vec2;

use crate::controller::LaunchController;
use crate::params::SessionConfig;
use crate::sim::{
    CollisionQuery, LaunchSimulator, ProjectileState, ShotBudget, TrajectoryPredictor,
};

/// Pointer state for a single frame, in world space
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position, if known this frame
    pub pointer: Option<Vec2>,
    /// Button went down this frame
    pub pressed: bool,
    /// Button is down
    pub held: bool,
    /// Button went up this frame
    pub released: bool,
}

/// Things the UI layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A drag grabbed the projectile
    DragStarted,
    /// The projectile left with this velocity
    Launched { velocity: Vec2 },
    /// The projectile came to rest
    Stopped { position: Vec2 },
    /// Last shot was used without winning
    OutOfShots,
    /// The win zone was reached
    Won,
}

/// One play session: a projectile, a shot budget and the aiming state
#[derive(Debug, Clone)]
pub struct Session {
    pub config: SessionConfig,
    controller: LaunchController,
    simulator: LaunchSimulator,
    predictor: TrajectoryPredictor,
    projectile: ProjectileState,
    budget: ShotBudget,
    /// Polyline for the renderer; empty means nothing to draw
    preview: Vec<Vec2>,
}

impl Session {
    /// Start a session with the projectile at rest at `start`
    pub fn new(config: SessionConfig, start: Vec2) -> Self {
        let params = config.launch.clone();
        Self {
            controller: LaunchController::new(params.clone(), config.grab_radius),
            simulator: LaunchSimulator::new(params.clone()),
            predictor: TrajectoryPredictor::new(params, config.preview_step),
            projectile: ProjectileState::at_rest(start),
            budget: ShotBudget::new(config.max_shots),
            preview: Vec::new(),
            config,
        }
    }

    pub fn projectile(&self) -> &ProjectileState {
        &self.projectile
    }

    pub fn budget(&self) -> &ShotBudget {
        &self.budget
    }

    pub fn preview(&self) -> &[Vec2] {
        &self.preview
    }

    pub fn is_aiming(&self) -> bool {
        self.controller.is_dragging()
    }

    /// End of the clamped aim line while dragging
    pub fn aim_point(&self) -> Option<Vec2> {
        self.controller.aim_point(self.projectile.position)
    }

    /// Report that the win zone was entered
    pub fn mark_won(&mut self) -> Option<SessionEvent> {
        if self.budget.game_won {
            return None;
        }
        self.budget.mark_won();
        self.controller.cancel();
        self.preview.clear();
        log::info!("You win! ({} shots used)", self.budget.shots_used);
        Some(SessionEvent::Won)
    }

    /// Advance one frame
    ///
    /// A drag starts only when the pointer grabs the projectile, a shot is
    /// left and the projectile is at rest. The at-rest gate is stricter than
    /// the classic drag-and-shoot loop, which let a projectile be re-aimed
    /// mid-flight.
    pub fn update<Q>(&mut self, input: &FrameInput, dt: f32, world: &Q) -> Vec<SessionEvent>
    where
        Q: CollisionQuery + ?Sized,
    {
        let mut events = Vec::new();
        if self.budget.game_won {
            return events;
        }

        let anchor = self.projectile.position;

        if let (true, false, Some(point)) =
            (input.pressed, self.projectile.is_launched, input.pointer)
        {
            if self.controller.begin_drag(point, anchor, &self.budget) {
                self.preview = vec![anchor, anchor];
                events.push(SessionEvent::DragStarted);
            }
        }

        if let (true, Some(point)) = (input.held, input.pointer) {
            if let Some(velocity) = self.controller.update_drag(point) {
                self.preview = self.predictor.predict(anchor, velocity, world);
            }
        }

        if input.released && self.controller.is_dragging() {
            self.preview.clear();
            let point = input
                .pointer
                .or_else(|| self.controller.drag().map(|drag| drag.current))
                .unwrap_or(anchor);
            if let Some(velocity) = self.controller.release(point) {
                self.launch(velocity, &mut events);
            }
        }

        if self.projectile.is_launched {
            let before = self.projectile;
            let report = self.simulator.step(before, dt, world);
            self.projectile = report.state;
            if report.landed(&before) {
                log::info!("Projectile at rest at {:?}", self.projectile.position);
                events.push(SessionEvent::Stopped {
                    position: self.projectile.position,
                });
            }
        }

        events
    }

    fn launch(&mut self, velocity: Vec2, events: &mut Vec<SessionEvent>) {
        if velocity == Vec2::ZERO {
            log::debug!("Zero-length drag, shot cancelled");
            return;
        }

        self.projectile = self.projectile.launched(velocity);
        self.budget.record_shot();
        log::info!(
            "Launched with {:?} ({} shots left)",
            velocity,
            self.budget.shots_remaining()
        );
        events.push(SessionEvent::Launched { velocity });

        if self.budget.is_exhausted() && !self.budget.game_won {
            log::info!("Out of shots! You lose.");
            events.push(SessionEvent::OutOfShots);
        }
    }
}
