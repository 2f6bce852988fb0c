//! Free-fly camera controller driven by movement keys and pointer deltas.
//!
//! The controller is a two-state machine. **Unlocked**: the camera ignores
//! input entirely — the host's click handler is responsible for requesting
//! exclusive capture, and a denied request simply leaves the controller
//! here. **Locked**: pointer deltas steer yaw/pitch and the movement flags
//! translate the camera. Capture grant and loss both arrive through the
//! input snapshot, so the controller itself never talks to the platform.

use glam::Vec3;

use super::pose::CameraPose;
use crate::input::FrameInput;
use crate::options::CameraOptions;

/// Whether the controller currently owns pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// Inert; waiting for the host to obtain exclusive capture.
    Unlocked,
    /// Exclusive capture held; pointer and keys drive the pose.
    Locked,
}

/// First-person free-fly controller. Writes the camera pose each tick
/// unless the transition director holds the write gate.
#[derive(Debug)]
pub struct FreeFlyCamera {
    state: LockState,
    options: CameraOptions,
}

impl FreeFlyCamera {
    /// Create an unlocked controller with the given tuning.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        Self {
            state: LockState::Unlocked,
            options,
        }
    }

    /// Current lock state.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.state
    }

    /// Replace the controller tuning.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;
    }

    /// Advance one tick: sync lock state with the capture flag, then while
    /// locked apply pointer look and key translation to `pose`.
    pub fn tick(&mut self, pose: &mut CameraPose, input: &FrameInput, dt: f32) {
        self.sync_lock_state(input.capture_active);
        if self.state != LockState::Locked {
            return;
        }

        self.apply_look(pose, input);
        self.apply_translation(pose, input, dt);
    }

    /// Follow capture grant/loss notifications from the host.
    fn sync_lock_state(&mut self, capture_active: bool) {
        let next = if capture_active {
            LockState::Locked
        } else {
            LockState::Unlocked
        };
        if next != self.state {
            log::debug!("camera lock state: {:?} -> {next:?}", self.state);
            self.state = next;
        }
    }

    /// Pointer deltas steer yaw and pitch; pitch is clamped away from the
    /// poles.
    fn apply_look(&self, pose: &mut CameraPose, input: &FrameInput) {
        let sensitivity = self.options.look_sensitivity;
        pose.yaw -= input.pointer_delta.x * sensitivity;
        pose.pitch -= input.pointer_delta.y * sensitivity;
        pose.clamp_pitch();
    }

    /// Assemble a camera-local direction from the movement flags, rotate
    /// it into world space by yaw only (vertical look must not tilt
    /// strafing), and advance the position inside the world envelope.
    fn apply_translation(
        &self,
        pose: &mut CameraPose,
        input: &FrameInput,
        dt: f32,
    ) {
        let mut direction = Vec3::ZERO;
        if input.forward {
            direction.z -= 1.0;
        }
        if input.backward {
            direction.z += 1.0;
        }
        if input.left {
            direction.x -= 1.0;
        }
        if input.right {
            direction.x += 1.0;
        }
        if input.up {
            direction.y += 1.0;
        }
        if input.down {
            direction.y -= 1.0;
        }

        if direction == Vec3::ZERO {
            return;
        }

        let (sin_yaw, cos_yaw) = pose.yaw.sin_cos();
        let world = Vec3::new(
            direction.x * cos_yaw + direction.z * sin_yaw,
            direction.y,
            -direction.x * sin_yaw + direction.z * cos_yaw,
        );

        let step = world * self.options.fly_speed * dt;
        let min = Vec3::from(self.options.bounds_min);
        let max = Vec3::from(self.options.bounds_max);
        pose.position = (pose.position + step).clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn locked_input() -> FrameInput {
        FrameInput {
            capture_active: true,
            ..FrameInput::default()
        }
    }

    #[test]
    fn unlocked_camera_ignores_everything() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::default();
        let before = pose;

        let input = FrameInput {
            forward: true,
            pointer_delta: glam::Vec2::new(100.0, 100.0),
            capture_active: false,
            ..FrameInput::default()
        };
        camera.tick(&mut pose, &input, 1.0 / 60.0);

        assert_eq!(pose, before);
        assert_eq!(camera.lock_state(), LockState::Unlocked);
    }

    #[test]
    fn capture_grant_locks_and_loss_unlocks() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::default();

        camera.tick(&mut pose, &locked_input(), 1.0 / 60.0);
        assert_eq!(camera.lock_state(), LockState::Locked);

        camera.tick(&mut pose, &FrameInput::default(), 1.0 / 60.0);
        assert_eq!(camera.lock_state(), LockState::Unlocked);
    }

    #[test]
    fn pitch_clamped_for_any_delta_sequence() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::default();

        for dy in [-10_000.0, 10_000.0, -500.0, 123.0, -0.5] {
            let input = FrameInput {
                pointer_delta: glam::Vec2::new(0.0, dy),
                capture_active: true,
                ..FrameInput::default()
            };
            camera.tick(&mut pose, &input, 1.0 / 60.0);
            assert!(pose.pitch.abs() <= FRAC_PI_2 - 0.1 + 1e-6);
        }
    }

    #[test]
    fn forward_moves_along_view_heading() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::at(Vec3::new(0.0, 2.0, 0.0));

        let input = FrameInput {
            forward: true,
            ..locked_input()
        };
        camera.tick(&mut pose, &input, 1.0);

        // Yaw 0 faces -Z
        assert!(pose.position.z < -0.9);
        assert!(pose.position.x.abs() < 1e-5);
    }

    #[test]
    fn strafe_rotates_with_yaw_only() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::at(Vec3::new(0.0, 2.0, 0.0));
        pose.yaw = FRAC_PI_2; // facing -X
        pose.pitch = 1.0; // steep look up must not tilt movement

        let input = FrameInput {
            forward: true,
            ..locked_input()
        };
        camera.tick(&mut pose, &input, 1.0);

        assert!(pose.position.x < -0.9);
        assert!((pose.position.y - 2.0).abs() < 1e-5);
        assert!(pose.position.z.abs() < 1e-4);
    }

    #[test]
    fn position_clamped_to_world_envelope() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::at(Vec3::new(0.0, 2.0, 0.0));

        let input = FrameInput {
            down: true,
            backward: true,
            ..locked_input()
        };
        // Long enough to slam into the floor and the far wall.
        for _ in 0..10_000 {
            camera.tick(&mut pose, &input, 1.0 / 60.0);
        }

        let opts = CameraOptions::default();
        assert!(pose.position.y >= opts.bounds_min[1]);
        assert!(pose.position.z <= opts.bounds_max[2]);
    }

    #[test]
    fn opposed_keys_cancel() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::default();
        let before = pose.position;

        let input = FrameInput {
            left: true,
            right: true,
            forward: true,
            backward: true,
            ..locked_input()
        };
        camera.tick(&mut pose, &input, 1.0);
        assert_eq!(pose.position, before);
    }

    #[test]
    fn yaw_wraps_without_exploding() {
        let mut camera = FreeFlyCamera::new(CameraOptions::default());
        let mut pose = CameraPose::default();

        let input = FrameInput {
            pointer_delta: glam::Vec2::new(2.0 * PI / 0.002, 0.0),
            ..locked_input()
        };
        camera.tick(&mut pose, &input, 1.0 / 60.0);
        assert!(pose.yaw.is_finite());
    }
}
