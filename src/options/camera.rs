use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Free-fly camera control parameters.
pub struct CameraOptions {
    /// Pointer-look sensitivity in radians per count.
    #[schemars(title = "Look Sensitivity", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub look_sensitivity: f32,
    /// Fly speed in world units per second.
    #[schemars(title = "Fly Speed", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub fly_speed: f32,
    /// Lower corner of the world envelope the camera may occupy.
    #[schemars(skip)]
    pub bounds_min: [f32; 3],
    /// Upper corner of the world envelope the camera may occupy.
    #[schemars(skip)]
    pub bounds_max: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            look_sensitivity: 0.002,
            fly_speed: 6.0,
            bounds_min: [-50.0, 0.5, -50.0],
            bounds_max: [50.0, 30.0, 50.0],
        }
    }
}
