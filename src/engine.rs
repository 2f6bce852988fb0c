//! The per-tick orchestrator owning the camera pose and tick ordering.
//!
//! `RoamEngine` wires the subsystems together the way a host wants to
//! consume them: forward raw events between frames, call
//! [`tick`](RoamEngine::tick) once per render frame, then read the camera
//! pose and agent state back for the render transforms.
//!
//! Within one tick, input is consumed exactly once at the top, then every
//! controller reads the same snapshot. The camera pose has one writer per
//! tick: the transition director while a glide is in flight (the free-fly
//! controller is gated off entirely), the free-fly controller otherwise.
//! The agent owns its own pose and always ticks.

use std::time::Duration;

use glam::Vec3;

use crate::agent::{AgentController, AgentState};
use crate::camera::{
    CameraPose, FreeFlyCamera, LockState, TransitionDirector,
    TransitionHandle,
};
use crate::error::RoamError;
use crate::input::{InputEvent, InputTracker};
use crate::layout::{self, GeneratedItem, LayoutSeed};
use crate::options::Options;

/// Where the agent stands when the scene opens.
const AGENT_SPAWN: Vec3 = Vec3::new(-2.0, 0.1, 3.0);

/// Height above the floor plane at which the agent walks.
const AGENT_FLOOR_Y: f32 = 0.1;

/// Orchestrates the navigation core: input tracking, both camera
/// controllers, and the agent, under a single `tick(dt)`.
pub struct RoamEngine {
    options: Options,
    tracker: InputTracker,
    freefly: FreeFlyCamera,
    director: TransitionDirector,
    agent: AgentController,
    camera: CameraPose,
}

impl RoamEngine {
    /// Create an engine with the default opening camera pose and agent
    /// spawn.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let freefly = FreeFlyCamera::new(options.camera.clone());
        let agent = AgentController::new(AGENT_SPAWN, options.agent.clone());
        Self {
            options,
            tracker: InputTracker::new(),
            freefly,
            director: TransitionDirector::new(),
            agent,
            camera: CameraPose::default(),
        }
    }

    // ── Event intake ────────────────────────────────────────────────────

    /// Forward a platform-agnostic input event into the tracker.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.tracker.handle_event(event);
    }

    /// Forward a key press/release by physical key string. Unrecognized
    /// codes are ignored.
    pub fn handle_key_code(&mut self, code: &str, pressed: bool) {
        self.tracker.set_key_code(code, pressed);
    }

    /// Route a floor click. Clicks inside the exhibit footprint belong to
    /// the exhibit and are left alone; everywhere else the agent starts
    /// walking to the clicked spot. Returns whether navigation consumed
    /// the click.
    pub fn click_floor(&mut self, point: Vec3) -> bool {
        if self.options.exhibit.contains(point.x, point.z) {
            return false;
        }
        self.agent
            .move_to(Vec3::new(point.x, AGENT_FLOOR_Y, point.z));
        true
    }

    // ── Per-frame update ────────────────────────────────────────────────

    /// Advance one frame. `dt` is the elapsed time in seconds.
    pub fn tick(&mut self, dt: f32) {
        // One consistent snapshot per tick; stale deltas read as zero.
        let input = self.tracker.consume_frame();

        if self.director.is_active() {
            // Single-writer gate: the director owns the pose until its
            // handle resolves.
            let _in_flight = self.director.tick(&mut self.camera, dt);
        } else {
            self.freefly.tick(&mut self.camera, &input, dt);
        }

        self.agent.tick(dt);
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Begin an eased glide to `dest`, using the configured default
    /// duration when none is given.
    ///
    /// # Errors
    ///
    /// [`RoamError::TransitionBusy`] while a glide is in flight;
    /// [`RoamError::NonFinitePose`] for a non-finite destination.
    pub fn begin_transition(
        &mut self,
        dest: CameraPose,
        duration: Option<Duration>,
    ) -> Result<TransitionHandle, RoamError> {
        let duration = duration.unwrap_or_else(|| {
            Duration::from_millis(self.options.transition.duration_ms)
        });
        self.director.begin(&self.camera, dest, duration)
    }

    /// Cancel the active glide, leaving the camera where it is.
    pub fn cancel_transition(&mut self) {
        self.director.cancel();
    }

    /// Whether a glide currently owns the camera pose.
    #[must_use]
    pub fn transition_active(&self) -> bool {
        self.director.is_active()
    }

    // ── Agent passthrough ───────────────────────────────────────────────

    /// Walk the agent to `point` (clamped to the navigable rectangle),
    /// bypassing the exhibit exclusion.
    pub fn move_agent_to(&mut self, point: Vec3) {
        self.agent.move_to(point);
    }

    /// Hard-stop the agent.
    pub fn stop_agent(&mut self) {
        self.agent.stop();
    }

    // ── Layout ──────────────────────────────────────────────────────────

    /// Generate the deterministic item run for one fixture slot using the
    /// configured layout parameters.
    #[must_use]
    pub fn generate_run(&self, variant: u32, slot: u32) -> Vec<GeneratedItem> {
        layout::generate(
            LayoutSeed { variant, slot },
            self.options.layout.region_width,
            &self.options.layout,
        )
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The camera pose for the render camera.
    #[must_use]
    pub fn camera_pose(&self) -> &CameraPose {
        &self.camera
    }

    /// The agent's pose and motion state for the character transform.
    #[must_use]
    pub fn agent(&self) -> &AgentState {
        self.agent.state()
    }

    /// The free-fly controller's capture lock state.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.freefly.lock_state()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options and push the new tuning into the controllers.
    pub fn set_options(&mut self, options: Options) {
        self.freefly.set_options(options.camera.clone());
        self.agent.set_options(options.agent.clone());
        self.options = options;
    }
}

impl Default for RoamEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
