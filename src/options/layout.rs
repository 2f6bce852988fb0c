use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Procedural shelf-run generation parameters.
pub struct LayoutOptions {
    /// Minimum item count drawn per run.
    #[schemars(title = "Min Count", range(min = 1, max = 100))]
    pub count_min: u32,
    /// Item count upper bound (exclusive) drawn per run.
    #[schemars(title = "Max Count", range(min = 1, max = 100))]
    pub count_max: u32,
    /// Sampled packing-extent range along the run axis.
    #[schemars(skip)]
    pub size_range: (f32, f32),
    /// Sampled decorative-height range.
    #[schemars(skip)]
    pub height_range: (f32, f32),
    /// Hard ceiling applied to sampled heights so items never overflow
    /// their compartment.
    #[schemars(skip)]
    pub max_height: f32,
    /// Gap left between adjacent items.
    #[schemars(skip)]
    pub gap: f32,
    /// Default region width for a standard shelf run.
    #[schemars(skip)]
    pub region_width: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            count_min: 25,
            count_max: 40,
            size_range: (0.02, 0.05),
            height_range: (0.2, 0.5),
            max_height: 0.5,
            gap: 0.005,
            region_width: 1.55,
        }
    }
}
