use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Agent", inline)]
#[serde(default)]
/// Point-and-click agent movement parameters.
pub struct AgentOptions {
    /// Top walking speed in world units per second.
    #[schemars(title = "Max Speed", range(min = 0.5, max = 6.0), extend("step" = 0.1))]
    pub max_speed: f32,
    /// Distance-to-speed gain: desired speed = distance × gain, capped at
    /// the max. Higher values brake later.
    #[schemars(title = "Approach Gain", range(min = 0.5, max = 6.0), extend("step" = 0.1))]
    pub approach_gain: f32,
    /// Speed smoothing rate (per second) for acceleration and the idle
    /// decay.
    #[schemars(title = "Acceleration Rate", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub accel_rate: f32,
    /// Facing smoothing rate (per second); faster than translation so the
    /// agent turns before it strides.
    #[schemars(title = "Turn Rate", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub turn_rate: f32,
    /// Distance below which the agent counts as arrived.
    #[schemars(skip)]
    pub arrival_epsilon: f32,
    /// Navigable rectangle, minimum X.
    #[schemars(skip)]
    pub nav_min_x: f32,
    /// Navigable rectangle, maximum X.
    #[schemars(skip)]
    pub nav_max_x: f32,
    /// Navigable rectangle, minimum Z.
    #[schemars(skip)]
    pub nav_min_z: f32,
    /// Navigable rectangle, maximum Z.
    #[schemars(skip)]
    pub nav_max_z: f32,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            approach_gain: 2.0,
            accel_rate: 5.0,
            turn_rate: 8.0,
            arrival_epsilon: 0.1,
            nav_min_x: -8.0,
            nav_max_x: 8.0,
            nav_min_z: -8.0,
            nav_max_z: 8.0,
        }
    }
}
