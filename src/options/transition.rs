use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Camera transition timing.
pub struct TransitionOptions {
    /// Default glide duration in milliseconds, used when a transition is
    /// requested without an explicit duration.
    #[schemars(title = "Duration (ms)", range(min = 100, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self { duration_ms: 1000 }
    }
}
