//! The camera pose written once per tick by exactly one controller.

use std::f32::consts::PI;

use glam::Vec3;

/// Margin keeping pitch strictly inside ±90° so the view never flips over
/// the vertical axis.
pub const PITCH_MARGIN: f32 = 0.1;

/// Camera pose: world position plus yaw/pitch orientation in radians.
///
/// Yaw 0 looks down −Z; positive yaw turns left. Pitch is held inside
/// [−π/2 + [`PITCH_MARGIN`], π/2 − [`PITCH_MARGIN`]] by every writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Heading around +Y, radians.
    pub yaw: f32,
    /// Elevation, radians, clamped away from ±π/2.
    pub pitch: f32,
}

impl CameraPose {
    /// Pose at the given position looking down −Z.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Unit view direction for the current yaw/pitch.
    #[must_use]
    pub fn look_dir(&self) -> Vec3 {
        Vec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// The point one unit along the view direction — what a look-at
    /// style host camera should target.
    #[must_use]
    pub fn look_target(&self) -> Vec3 {
        self.position + self.look_dir()
    }

    /// Clamp pitch to just inside ±90°.
    pub fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(
            -PI / 2.0 + PITCH_MARGIN,
            PI / 2.0 - PITCH_MARGIN,
        );
    }

    /// Whether every component is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.yaw.is_finite()
            && self.pitch.is_finite()
    }

    /// Blend two poses. Position interpolates linearly; yaw takes the
    /// shortest arc so a transition never spins the long way around.
    #[must_use]
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self {
            position: a.position.lerp(b.position, t),
            yaw: lerp_angle(a.yaw, b.yaw, t),
            pitch: a.pitch + (b.pitch - a.pitch) * t,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        // The original viewing position: standing height, back from center.
        Self::at(Vec3::new(0.0, 2.0, 5.0))
    }
}

/// Wrap an angle to (−π, π].
#[must_use]
pub fn wrap_angle(a: f32) -> f32 {
    let mut a = a % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    } else if a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Interpolate between two angles along the shortest arc.
#[must_use]
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + wrap_angle(to - from) * t
}
