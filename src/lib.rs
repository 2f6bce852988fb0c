// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Tick-driven navigation and procedural layout core for explorable 3D
//! interior scenes.
//!
//! Roam drives the parts of a walkable scene that change over time: a
//! free-fly camera with exclusive pointer capture, a point-and-click agent
//! that walks to wherever the user clicks on the floor, a transition
//! director that glides the camera into close-up framings, and a seeded
//! layout generator that fills repeated fixtures (shelf runs and the like)
//! with stable variety. Everything else — meshes, materials, lighting,
//! overlays — belongs to the embedding host.
//!
//! # Key entry points
//!
//! - [`engine::RoamEngine`] - the per-tick orchestrator
//! - [`camera::CameraPose`] - the camera pose written each tick
//! - [`agent::AgentController`] - click-to-walk agent movement
//! - [`layout::generate`] - deterministic shelf population
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Execution is single-threaded and cooperative: the host forwards raw
//! input events between frames, then calls [`engine::RoamEngine::tick`]
//! once per render frame with the elapsed delta. Input is consumed exactly
//! once at the top of each tick, after which every controller reads the
//! same snapshot. The camera pose has a single writer per tick — the
//! transition director while a transition is in flight, the free-fly
//! controller otherwise.

pub mod agent;
pub mod camera;
pub mod engine;
mod error;
pub mod input;
pub mod layout;
pub mod options;
pub mod util;

pub use error::RoamError;
