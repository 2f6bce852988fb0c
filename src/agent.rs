//! Point-and-click agent navigation.
//!
//! The agent walks in a straight line toward the most recent floor click,
//! accelerating and decelerating smoothly and turning to face its heading
//! before it gets up to speed. There is no pathfinding and no collision —
//! targets are clamped into a navigable rectangle and the walk is direct.
//!
//! State machine: **Idle** (no target, speed decaying to zero) → **Moving**
//! (target set) → **Idle** (arrived or stopped). Arrival is terminal; a new
//! [`AgentController::move_to`] is required to move again.

use glam::Vec3;

use crate::camera::pose::lerp_angle;
use crate::options::AgentOptions;

/// The agent's externally visible pose and motion state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    /// World position.
    pub position: Vec3,
    /// Facing, radians around +Y. `atan2(dir.x, dir.z)` convention.
    pub yaw: f32,
    /// Current scalar speed in world units per second.
    pub speed: f32,
    /// Set when the last walk ended by arrival; cleared by `move_to`.
    pub arrived: bool,
}

/// Walks an agent toward clicked floor points with smoothed speed and
/// facing.
#[derive(Debug)]
pub struct AgentController {
    state: AgentState,
    target: Option<Vec3>,
    options: AgentOptions,
}

impl AgentController {
    /// Create an idle agent standing at `position`.
    #[must_use]
    pub fn new(position: Vec3, options: AgentOptions) -> Self {
        Self {
            state: AgentState {
                position,
                yaw: 0.0,
                speed: 0.0,
                arrived: false,
            },
            target: None,
            options,
        }
    }

    /// Current pose and motion state.
    #[must_use]
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// The active navigation target, if any.
    #[must_use]
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Whether a target is set and not yet reached.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    /// Replace the controller tuning.
    pub fn set_options(&mut self, options: AgentOptions) {
        self.options = options;
    }

    /// Begin walking toward `point`.
    ///
    /// X and Z are clamped into the navigable rectangle — out-of-range
    /// clicks are never rejected, just pulled to the nearest reachable
    /// spot. Y passes through (the host hands us a point on the floor
    /// plane).
    pub fn move_to(&mut self, point: Vec3) {
        let o = &self.options;
        let clamped = Vec3::new(
            point.x.clamp(o.nav_min_x, o.nav_max_x),
            point.y,
            point.z.clamp(o.nav_min_z, o.nav_max_z),
        );
        log::debug!("agent target set: {clamped:?}");
        self.target = Some(clamped);
        self.state.arrived = false;
    }

    /// Hard stop: clear the target and zero the speed immediately.
    pub fn stop(&mut self) {
        if self.target.take().is_some() {
            log::debug!("agent stopped at {:?}", self.state.position);
        }
        self.state.speed = 0.0;
    }

    /// Advance one tick.
    pub fn tick(&mut self, dt: f32) {
        match self.target {
            Some(target) => self.tick_moving(target, dt),
            None => {
                // Idle: stay put, let residual speed bleed off.
                let t = (dt * self.options.accel_rate).min(1.0);
                self.state.speed += (0.0 - self.state.speed) * t;
            }
        }
    }

    fn tick_moving(&mut self, target: Vec3, dt: f32) {
        let o = &self.options;
        let to_target = target - self.state.position;
        let distance = to_target.length();

        if distance < o.arrival_epsilon {
            log::debug!("agent arrived at {:?}", self.state.position);
            self.target = None;
            self.state.arrived = true;
            return;
        }

        // Ramp toward a speed that tapers with remaining distance.
        let desired = (distance * o.approach_gain).min(o.max_speed);
        let t = (dt * o.accel_rate).min(1.0);
        self.state.speed += (desired - self.state.speed) * t;
        self.state.speed = self.state.speed.clamp(0.0, o.max_speed);

        // Never step past the target in a single tick.
        let step = (self.state.speed * dt).min(distance);
        let direction = to_target / distance;
        self.state.position += direction * step;

        // Turn faster than we translate so the agent visibly faces its
        // heading while starting to walk.
        let heading = direction.x.atan2(direction.z);
        let turn = (dt * o.turn_rate).min(1.0);
        self.state.yaw = lerp_angle(self.state.yaw, heading, turn);
    }
}
