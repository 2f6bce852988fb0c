//! Input handling: platform-agnostic events and the per-tick state tracker
//! that converts raw device callbacks into one snapshot per frame.

/// Platform-agnostic input events and key mapping.
pub mod event;
/// Accumulates events into per-tick snapshots.
pub mod tracker;

pub use event::{InputEvent, MoveKey};
pub use tracker::{FrameInput, InputTracker};
