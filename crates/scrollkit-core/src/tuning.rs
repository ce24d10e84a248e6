#![forbid(unsafe_code)]

//! Tuning knobs for scroll animation behavior.
//!
//! Every constant that shapes a scroll animation lives here with its
//! documented default. The centering fractions (upper-third bias, initial
//! two-thirds trailing-space correction) are deliberately *not* tunable;
//! they are empirically settled ratios kept as named constants next to the
//! code that uses them.

use std::time::Duration;

/// Tuning knobs for scroll animations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTuning {
    /// Maximum duration of one scroll animation. Short scrolls take a
    /// proportional fraction of this; long scrolls are capped here.
    pub animation_duration: Duration,

    /// Interval between animation frames. An animation whose computed
    /// duration is below two intervals is not worth running and is applied
    /// as an immediate jump instead.
    pub frame_interval: Duration,

    /// Distance cap in line heights. Scrolls longer than this are
    /// compressed so they do not take proportionally longer.
    pub distance_cap_lines: i64,

    /// Pixel distance the first animation frame should cover for an
    /// uncapped scroll. Governs the easing exponent: a small first step
    /// gives a smooth start without overshoot.
    pub first_frame_distance: f64,

    /// Cap on the first-frame distance, in line heights, applied when the
    /// distance cap compressed a long scroll.
    pub first_frame_cap_lines: i64,

    /// Horizontal inset in space-widths kept between a left-scrolled
    /// target and the viewport edge.
    pub horizontal_inset_columns: i64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            animation_duration: Duration::from_millis(100),
            frame_interval: Duration::from_millis(10),
            distance_cap_lines: 50,
            first_frame_distance: 5.0,
            first_frame_cap_lines: 5,
            horizontal_inset_columns: 4,
        }
    }
}

impl ScrollTuning {
    /// Shortest duration worth animating: two frame intervals.
    #[must_use]
    pub fn minimum_animatable(&self) -> Duration {
        self.frame_interval * 2
    }
}
