#![forbid(unsafe_code)]

//! The animation runner: one in-flight eased transition between offsets.
//!
//! Planning an animated scroll yields a [`MotionPlan`]: either a
//! [`ScrollAnimation`] to drive frame by frame, or `Immediate` when the
//! computed duration would be imperceptibly short (below two frame
//! intervals). `Immediate` is a control signal, not an error; callers fall
//! back to applying the destination offsets in one jump.
//!
//! Duration grows with distance in line heights and is capped at the
//! tuned maximum. Distance beyond the 50-line cap is compressed by the
//! curve rather than stretching the duration, so long scrolls do not take
//! proportionally longer.
//!
//! # Invariants
//!
//! 1. At most one `ScrollAnimation` is live per motion controller; the
//!    controller's option slot owns it.
//! 2. `tick` never yields offsets past the end pair, and the final frame
//!    at `elapsed == duration` yields exactly the end pair for uncapped
//!    curves; finalization force-applies the end pair regardless.
//! 3. Completion callbacks run exactly once, in registration order.

use std::time::Duration;

use scrollkit_core::{MotionCurve, Rect, ScrollOffsets, ScrollTuning};

/// Callback run when scrolling finishes.
pub type FinishCallback = Box<dyn FnOnce()>;

/// Lifecycle of a scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Created, no frame produced yet.
    Starting,
    /// At least one frame produced.
    Running,
    /// Ran to the end of its duration.
    Completed,
    /// Stopped before the end of its duration.
    Cancelled,
}

/// Outcome of planning an animated scroll.
#[derive(Debug)]
pub enum MotionPlan {
    /// Drive this animation over wall-clock frames.
    Animate(ScrollAnimation),
    /// Not worth animating; apply the destination offsets directly.
    Immediate,
}

impl MotionPlan {
    /// Plan a transition from `start` to `end` offsets.
    ///
    /// Duration is `clamp(dist_in_lines - 1, 0..=10) / 10` of the tuned
    /// maximum, truncated to whole milliseconds. Anything below two frame
    /// intervals returns [`MotionPlan::Immediate`].
    #[must_use]
    pub fn plan(
        start: ScrollOffsets,
        end: ScrollOffsets,
        line_height: i64,
        tuning: &ScrollTuning,
    ) -> MotionPlan {
        if line_height <= 0 {
            return MotionPlan::Immediate;
        }

        let total_distance = start.distance_to(end);
        let line_distance = total_distance / line_height as f64;
        let portion = ((line_distance - 1.0) / 10.0).min(1.0);
        let duration_ms = (portion * tuning.animation_duration.as_millis() as f64) as i64;
        if duration_ms < tuning.minimum_animatable().as_millis() as i64 {
            return MotionPlan::Immediate;
        }

        let interval_ms = (tuning.frame_interval.as_millis() as i64).max(1);
        let step_count = (duration_ms / interval_ms - 1).max(1);

        let max_distance = (line_height * tuning.distance_cap_lines) as f64;
        let capped_distance = total_distance.min(max_distance);

        // Exponent from the first-frame rule: the first frame covers a
        // small fixed pixel distance, scaled up (and re-capped) when the
        // distance cap compressed the scroll.
        let first_step_time = 1.0 / step_count as f64;
        let mut first_frame_distance = tuning.first_frame_distance;
        if total_distance > capped_distance {
            first_frame_distance *= total_distance / capped_distance;
            first_frame_distance =
                first_frame_distance.min((line_height * tuning.first_frame_cap_lines) as f64);
        }
        let curve = MotionCurve::from_first_step(
            first_step_time,
            first_frame_distance / capped_distance,
            capped_distance / total_distance,
        );

        MotionPlan::Animate(ScrollAnimation {
            start,
            end,
            duration: Duration::from_millis(duration_ms as u64),
            curve,
            elapsed: Duration::ZERO,
            state: AnimationState::Starting,
            callbacks: Vec::new(),
        })
    }
}

/// A single in-flight eased transition between two offset pairs.
pub struct ScrollAnimation {
    start: ScrollOffsets,
    end: ScrollOffsets,
    duration: Duration,
    curve: MotionCurve,
    elapsed: Duration,
    state: AnimationState,
    callbacks: Vec<FinishCallback>,
}

impl std::fmt::Debug for ScrollAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollAnimation")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("state", &self.state)
            .field("callback_count", &self.callbacks.len())
            .finish()
    }
}

impl ScrollAnimation {
    /// Start offsets.
    #[inline]
    #[must_use]
    pub fn start(&self) -> ScrollOffsets {
        self.start
    }

    /// Destination offsets.
    #[inline]
    #[must_use]
    pub fn end(&self) -> ScrollOffsets {
        self.end
    }

    /// Total duration of the transition.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current lifecycle state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Advance the animation and produce the offsets for this frame.
    ///
    /// Elapsed time saturates at the duration; once saturated the
    /// animation reports [`ScrollAnimation::is_finished`].
    pub fn tick(&mut self, dt: Duration) -> ScrollOffsets {
        if self.state == AnimationState::Starting {
            self.state = AnimationState::Running;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.current_offsets()
    }

    /// Whether elapsed time has reached the duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Interpolated offsets at the current elapsed time.
    #[must_use]
    pub fn current_offsets(&self) -> ScrollOffsets {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let fraction = self.curve.fraction_at(t);
        ScrollOffsets::new(
            interpolate(self.start.horizontal, self.end.horizontal, fraction),
            interpolate(self.start.vertical, self.end.vertical, fraction),
        )
    }

    /// The visible rectangle this animation is heading toward, given the
    /// current viewport size.
    #[must_use]
    pub fn target_visible_area(&self, view: Rect) -> Rect {
        Rect::new(self.end.horizontal, self.end.vertical, view.width, view.height)
    }

    /// Register a completion callback. Runs on natural completion, on
    /// snap-to-target cancellation, and on any cancellation while
    /// callbacks are pending.
    pub fn push_callback(&mut self, callback: FinishCallback) {
        self.callbacks.push(callback);
    }

    /// Whether completion callbacks are pending.
    #[must_use]
    pub fn has_callbacks(&self) -> bool {
        !self.callbacks.is_empty()
    }

    /// Drain the pending callbacks in registration order.
    pub(crate) fn take_callbacks(&mut self) -> Vec<FinishCallback> {
        std::mem::take(&mut self.callbacks)
    }

    /// Record the terminal state: `Completed` when the duration elapsed,
    /// `Cancelled` otherwise.
    pub(crate) fn mark_finished(&mut self) {
        self.state = if self.is_finished() {
            AnimationState::Completed
        } else {
            AnimationState::Cancelled
        };
    }
}

/// `a + (b - a) * fraction`, rounded like the frame loop always has:
/// add 0.5 and truncate.
fn interpolate(a: i64, b: i64, fraction: f64) -> i64 {
    (a as f64 + (b - a) as f64 * fraction + 0.5).floor() as i64
}
