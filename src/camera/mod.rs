//! Camera system for first-person scene exploration.
//!
//! Provides the camera pose, a free-fly controller with exclusive-capture
//! locking, and a transition director for eased glides into exhibits.

/// Eased pose-to-pose transitions with future-shaped completion.
pub mod director;
/// Free-fly WASD + pointer-look controller.
pub mod freefly;
/// The camera pose and angle helpers.
pub mod pose;

pub use director::{TransitionDirector, TransitionHandle, TransitionStatus};
pub use freefly::{FreeFlyCamera, LockState};
pub use pose::CameraPose;
