//! Time-based animation: easing curves, transitions, and a frame timer.
//!
//! Animations are driven by the host: each frame it calls `advance` with the
//! elapsed milliseconds since the previous frame.

use serde::{Deserialize, Serialize};

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cosine accelerate-decelerate, the usual platform default
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::AccelerateDecelerate => ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5,
        }
    }
}

/// Default duration of a progress transition.
pub const DEFAULT_TRANSITION_MS: u32 = 1000;

/// An integer-valued transition from one value to another over a fixed time.
///
/// Intermediate values are truncated toward zero, so the value only reaches
/// `to` exactly when the transition completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    from: i32,
    to: i32,
    duration_ms: u32,
    elapsed_ms: u32,
    easing: Easing,
}

impl Transition {
    /// Create a transition with the default easing.
    #[must_use]
    pub fn new(from: i32, to: i32, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0,
            easing: Easing::default(),
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start value.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.from
    }

    /// Target value.
    #[must_use]
    pub const fn target(&self) -> i32 {
        self.to
    }

    /// Total duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Milliseconds elapsed so far.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Easing in use.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear time fraction in [0, 1].
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration_ms == 0 {
            1.0
        } else {
            f64::from(self.elapsed_ms) / f64::from(self.duration_ms)
        }
    }

    /// Interpolated value at the current time.
    #[must_use]
    pub fn value(&self) -> i32 {
        if self.is_complete() {
            return self.to;
        }
        let eased = self.easing.apply(self.fraction());
        let delta = f64::from(self.to) - f64::from(self.from);
        eased.mul_add(delta, f64::from(self.from)) as i32
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advance by `delta_ms`, saturating at the duration.
    pub fn advance(&mut self, delta_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms).min(self.duration_ms);
    }
}

/// Frame timer for host render loops.
#[derive(Debug)]
pub struct FrameTimer {
    /// Target frame duration in microseconds (16667 for 60fps)
    target_frame_us: u64,
    /// Last frame timestamp in microseconds
    last_frame_us: Option<u64>,
    /// Ring of recent frame deltas
    frame_times: [u64; 60],
    frame_index: usize,
    delta_count: usize,
    total_frames: u64,
    /// Sub-millisecond remainder not yet reported by [`FrameTimer::frame`]
    carry_us: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameTimer {
    /// Create a new frame timer with target FPS.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let target_frame_us = if target_fps > 0 {
            (1_000_000 / u64::from(target_fps)).max(1)
        } else {
            16_667
        };
        Self {
            target_frame_us,
            last_frame_us: None,
            frame_times: [0; 60],
            frame_index: 0,
            delta_count: 0,
            total_frames: 0,
            carry_us: 0,
        }
    }

    /// Record a frame at `now_us` and return the delta since the previous
    /// frame in milliseconds (0 for the first frame).
    ///
    /// Whole milliseconds are reported; the remainder carries into the next
    /// frame, so the reported deltas sum to the elapsed time.
    pub fn frame(&mut self, now_us: u64) -> u32 {
        let delta = self.last_frame_us.map_or(0, |last| now_us.saturating_sub(last));
        if self.last_frame_us.is_some() {
            self.frame_times[self.frame_index] = delta;
            self.frame_index = (self.frame_index + 1) % self.frame_times.len();
            self.delta_count = (self.delta_count + 1).min(self.frame_times.len());
        }
        self.last_frame_us = Some(now_us);
        self.total_frames += 1;

        let pending = self.carry_us.saturating_add(delta);
        self.carry_us = pending % 1000;
        u32::try_from(pending / 1000).unwrap_or(u32::MAX)
    }

    /// Target frame duration in microseconds.
    #[must_use]
    pub const fn target_frame_us(&self) -> u64 {
        self.target_frame_us
    }

    /// Get the average frame time in microseconds.
    #[must_use]
    pub fn average_frame_time_us(&self) -> u64 {
        if self.delta_count == 0 {
            return self.target_frame_us;
        }
        let sum: u64 = self.frame_times[..self.delta_count].iter().sum();
        sum / self.delta_count as u64
    }

    /// Get the current FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        let avg = self.average_frame_time_us();
        if avg == 0 {
            0.0
        } else {
            1_000_000.0 / avg as f32
        }
    }

    /// Get total frames recorded.
    #[must_use]
    pub const fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
