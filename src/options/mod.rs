//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera feel, agent movement, transition timing,
//! layout generation, the exhibit footprint) are consolidated here.
//! Options serialize to/from TOML so hosts can ship tuning presets.

mod agent;
mod camera;
mod exhibit;
mod layout;
mod transition;

use std::path::Path;

pub use agent::AgentOptions;
pub use camera::CameraOptions;
pub use exhibit::ExhibitOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::RoamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[agent]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Free-fly camera control parameters.
    pub camera: CameraOptions,
    /// Point-and-click agent movement parameters.
    pub agent: AgentOptions,
    /// Camera transition timing.
    pub transition: TransitionOptions,
    /// Procedural shelf-run generation parameters.
    #[schemars(skip)]
    pub layout: LayoutOptions,
    /// Interactive exhibit footprint on the floor plane.
    #[schemars(skip)]
    pub exhibit: ExhibitOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RoamError> {
        let content = std::fs::read_to_string(path).map_err(RoamError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RoamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RoamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RoamError::Io)?;
        }
        std::fs::write(path, content).map_err(RoamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
