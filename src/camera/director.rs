//! Camera transition director: eased glides between two saved poses.
//!
//! While a transition is in flight the director is the sole writer of the
//! camera pose; the engine gates the free-fly controller off until the
//! handle resolves. Completion is future-shaped but never off-thread — the
//! handle resolves from the same per-tick callback that advances the
//! interpolation, and a single pending slot replaces any queue: a second
//! request while one is in flight is rejected as busy.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::pose::CameraPose;
use crate::error::RoamError;
use crate::util::easing::EasingFunction;

/// Resolution state of a requested transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    /// Still interpolating.
    Pending,
    /// Reached the destination pose; the write gate is released.
    Completed,
    /// Cancelled before completion; the camera stays where it was.
    Cancelled,
}

/// Completion handle returned by [`TransitionDirector::begin`].
///
/// Poll [`status`](Self::status) from the host loop; there is no waker
/// machinery because resolution only ever happens inside the host's own
/// tick.
#[derive(Debug, Clone)]
pub struct TransitionHandle {
    status: Rc<Cell<TransitionStatus>>,
}

impl TransitionHandle {
    /// Current resolution state.
    #[must_use]
    pub fn status(&self) -> TransitionStatus {
        self.status.get()
    }

    /// Whether the transition has finished, by completion or cancellation.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status.get() != TransitionStatus::Pending
    }
}

/// One in-flight transition. Elapsed time accumulates from tick deltas so
/// the glide depends only on total ticked time, never on a wall clock.
#[derive(Debug)]
struct ActiveTransition {
    source: CameraPose,
    dest: CameraPose,
    elapsed: Duration,
    duration: Duration,
    status: Rc<Cell<TransitionStatus>>,
}

impl ActiveTransition {
    /// Raw progress in [0, 1]. Zero-duration transitions are complete on
    /// their first tick.
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Drives at most one eased camera transition at a time.
#[derive(Debug, Default)]
pub struct TransitionDirector {
    active: Option<ActiveTransition>,
    easing: EasingFunction,
}

impl TransitionDirector {
    /// Create an idle director using the default cubic ease-out curve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: None,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Whether a transition currently holds the pose write gate.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a glide from `current` (captured now as the source) to `dest`
    /// over `duration`.
    ///
    /// # Errors
    ///
    /// [`RoamError::TransitionBusy`] while another transition is in
    /// flight; [`RoamError::NonFinitePose`] if `dest` contains NaN or
    /// infinities (surfaced, not swallowed — the pose is left untouched).
    pub fn begin(
        &mut self,
        current: &CameraPose,
        dest: CameraPose,
        duration: Duration,
    ) -> Result<TransitionHandle, RoamError> {
        if self.active.is_some() {
            log::warn!("transition rejected: one already in flight");
            return Err(RoamError::TransitionBusy);
        }
        if !dest.is_finite() {
            log::warn!("transition rejected: non-finite destination");
            return Err(RoamError::NonFinitePose);
        }

        log::debug!(
            "transition begin: {:?} -> {:?} over {duration:?}",
            current.position,
            dest.position
        );
        let status = Rc::new(Cell::new(TransitionStatus::Pending));
        self.active = Some(ActiveTransition {
            source: *current,
            dest,
            elapsed: Duration::ZERO,
            duration,
            status: Rc::clone(&status),
        });
        Ok(TransitionHandle { status })
    }

    /// Advance the active transition and write the blended pose.
    ///
    /// Returns `true` while the transition still holds the write gate.
    /// When progress reaches 1 the destination pose is written exactly,
    /// the handle resolves to [`TransitionStatus::Completed`], and the
    /// gate is released.
    pub fn tick(&mut self, pose: &mut CameraPose, dt: f32) -> bool {
        let easing = self.easing;
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        active.elapsed = active
            .elapsed
            .saturating_add(Duration::from_secs_f32(dt.max(0.0)));
        let progress = active.progress();
        let eased = easing.evaluate(progress);
        *pose = CameraPose::lerp(&active.source, &active.dest, eased);

        if progress >= 1.0 {
            *pose = active.dest;
            active.status.set(TransitionStatus::Completed);
            log::debug!("transition complete at {:?}", pose.position);
            self.active = None;
            return false;
        }
        true
    }

    /// Drop the active transition without snapping to the destination.
    ///
    /// The camera stays wherever the last tick left it and the pending
    /// handle resolves to [`TransitionStatus::Cancelled`]. A no-op when
    /// idle.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            active.status.set(TransitionStatus::Cancelled);
            log::debug!("transition cancelled");
        }
    }
}
