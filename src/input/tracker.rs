//! Converts raw device events into a once-per-tick input snapshot.
//!
//! The `InputTracker` owns all transient input state: the six movement
//! flags, the pointer-delta accumulator, and the exclusive-capture flag.
//! Event callbacks mutate it between frames; [`InputTracker::consume_frame`]
//! is called exactly once at the top of each tick and hands every
//! controller the same consistent [`FrameInput`].

use glam::Vec2;

use super::event::{InputEvent, MoveKey};

/// The input snapshot consumed by the controllers each tick.
///
/// Movement flags persist across frames until the key is released; the
/// pointer delta is frame-local and reads as zero after consumption.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Move along the view direction.
    pub forward: bool,
    /// Move against the view direction.
    pub backward: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Ascend.
    pub up: bool,
    /// Descend.
    pub down: bool,
    /// Accumulated pointer motion since the previous consumption.
    pub pointer_delta: Vec2,
    /// Whether exclusive pointer capture is currently held.
    pub capture_active: bool,
}

impl FrameInput {
    /// Whether any movement flag is set.
    #[must_use]
    pub fn any_movement(&self) -> bool {
        self.forward
            || self.backward
            || self.left
            || self.right
            || self.up
            || self.down
    }
}

/// Accumulates raw input events into per-tick [`FrameInput`] snapshots.
#[derive(Debug, Default)]
pub struct InputTracker {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    pointer_delta: Vec2,
    capture_active: bool,
}

impl InputTracker {
    /// Create a tracker with no keys held and no capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement key press or release.
    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Backward => self.backward = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
            MoveKey::Up => self.up = pressed,
            MoveKey::Down => self.down = pressed,
        }
    }

    /// Record a key press or release by physical key string.
    ///
    /// Unrecognized codes are ignored — the host may forward its entire
    /// keyboard stream without filtering.
    pub fn set_key_code(&mut self, code: &str, pressed: bool) {
        if let Some(key) = MoveKey::from_code(code) {
            self.set_key(key, pressed);
        }
    }

    /// Accumulate relative pointer motion.
    pub fn add_pointer_delta(&mut self, dx: f32, dy: f32) {
        self.pointer_delta += Vec2::new(dx, dy);
    }

    /// Record an exclusive-capture grant or revocation.
    ///
    /// The host's capture API reports both edges through this callback;
    /// a denied request simply never reports `active = true`.
    pub fn set_capture_active(&mut self, active: bool) {
        self.capture_active = active;
    }

    /// Route a platform-agnostic event to the matching accumulator.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => self.set_key(key, pressed),
            InputEvent::PointerDelta { dx, dy } => {
                self.add_pointer_delta(dx, dy);
            }
            InputEvent::CaptureChanged { active } => {
                self.set_capture_active(active);
            }
        }
    }

    /// Take the current snapshot and reset the pointer-delta accumulator.
    ///
    /// Movement flags and the capture flag persist; deltas are defined as
    /// zero for the remainder of the tick.
    pub fn consume_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            pointer_delta: self.pointer_delta,
            capture_active: self.capture_active,
        };
        self.pointer_delta = Vec2::ZERO;
        frame
    }
}
