//! Frame-time accumulation that drives every animated mode.

/// Accumulated animation time. Only the frame-driving loop advances it;
/// every pixel of a frame reads the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    time: f32,
    max_delta: f32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    /// Frame deltas above this are clamped so resuming after a stall does not
    /// jump the animation forward.
    pub const DEFAULT_MAX_DELTA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            time: 0.0,
            max_delta: Self::DEFAULT_MAX_DELTA,
        }
    }

    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// `time += min(dt, max_delta) * speed` while `animate` is set. Never
    /// decreases.
    pub fn advance(&mut self, dt: f32, speed: f32, animate: bool) {
        if !animate || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let dt = if dt > self.max_delta {
            log::warn!("frame delta {dt:.3}s clamped to {:.3}s", self.max_delta);
            self.max_delta
        } else {
            dt
        };
        let step = dt * speed.max(0.0);
        if step.is_finite() {
            self.time += step;
        }
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
