//! Frame delta production for hosts that own their own render loop.

use web_time::Instant;

/// Largest delta a single frame may report, in seconds. A tab that was
/// backgrounded for a minute must not produce a one-minute tick.
const MAX_FRAME_DT: f32 = 0.1;

/// Produces clamped per-frame deltas with FPS estimation.
pub struct FrameClock {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Per-frame delta ceiling in seconds.
    max_dt: f32,
}

impl FrameClock {
    /// Create a new frame clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            max_dt: MAX_FRAME_DT,
        }
    }

    /// Call once per frame. Returns the elapsed seconds since the previous
    /// call, clamped to the frame ceiling.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        frame_time.min(self.max_dt)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
