#![forbid(unsafe_code)]

//! The eased time-to-distance mapping driving scroll animations.
//!
//! A [`MotionCurve`] maps a fraction of elapsed animation time `t` in
//! `[0, 1]` to the fraction of total distance covered. The curve is a
//! power ease-in mirrored around the midpoint:
//!
//! ```text
//! f(t) = (2t)^p / 2          for t <= 0.5
//! f(t) = 1 - f(1 - t)        for t  > 0.5
//! ```
//!
//! The exponent `p` is chosen so the first animation frame covers a small
//! fixed pixel distance, which gives a smooth start regardless of total
//! distance. For scrolls longer than the distance cap, the lower half of
//! the curve is rescaled by `capped / total`, compressing the middle of
//! the motion so long scrolls do not take proportionally longer.
//!
//! # Invariants
//!
//! 1. `f(0) = 0` and, for uncapped curves, `f(1) = 1`.
//! 2. `f` is monotone non-decreasing on `[0, 1]`.
//! 3. Uncapped curves are symmetric: `f(t) + f(1 - t) = 1`.
//! 4. The exponent never drops below 1 (no ease slower than linear).

/// Eased time-to-distance mapping for one scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCurve {
    exponent: f64,
    /// `capped_distance / total_distance`; 1.0 when no cap applied.
    cap_ratio: f64,
}

impl MotionCurve {
    /// Build a curve from the first-frame rule.
    ///
    /// `first_step_time` is the time fraction of the first frame
    /// (`1 / step_count`); `first_step_fraction` is the distance fraction
    /// that frame should cover. Solves `(2t)^p / 2 = d` for `p`, floored
    /// at 1. `cap_ratio` rescales the curve when the animation distance
    /// was capped (`<= 1.0`, use 1.0 for uncapped scrolls).
    #[must_use]
    pub fn from_first_step(first_step_time: f64, first_step_fraction: f64, cap_ratio: f64) -> Self {
        let exponent = (2.0 * first_step_fraction).ln() / (2.0 * first_step_time).ln();
        Self {
            // max() also catches a NaN exponent from degenerate inputs.
            exponent: exponent.max(1.0),
            cap_ratio,
        }
    }

    /// A plain linear curve (exponent 1, no cap).
    #[must_use]
    pub const fn linear() -> Self {
        Self {
            exponent: 1.0,
            cap_ratio: 1.0,
        }
    }

    /// The easing exponent in use.
    #[inline]
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Map a time fraction in `[0, 1]` to a distance fraction.
    #[must_use]
    pub fn fraction_at(&self, t: f64) -> f64 {
        if t > 0.5 {
            return 1.0 - self.fraction_at(1.0 - t);
        }
        let fraction = (2.0 * t).powf(self.exponent) / 2.0;
        fraction * self.cap_ratio
    }
}
