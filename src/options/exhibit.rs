use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Exhibit", inline)]
#[serde(default)]
/// Floor-plane footprint of the interactive exhibit board.
///
/// Floor clicks inside this rectangle belong to the exhibit, not to agent
/// navigation — the engine's click router leaves them alone.
pub struct ExhibitOptions {
    /// Exhibit footprint, minimum X.
    #[schemars(skip)]
    pub min_x: f32,
    /// Exhibit footprint, maximum X.
    #[schemars(skip)]
    pub max_x: f32,
    /// Exhibit footprint, minimum Z.
    #[schemars(skip)]
    pub min_z: f32,
    /// Exhibit footprint, maximum Z.
    #[schemars(skip)]
    pub max_z: f32,
}

impl ExhibitOptions {
    /// Whether a floor point falls inside the exhibit footprint.
    #[must_use]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }
}

impl Default for ExhibitOptions {
    fn default() -> Self {
        Self {
            min_x: -7.0,
            max_x: 7.0,
            min_z: 8.0,
            max_z: 10.0,
        }
    }
}
