#![forbid(unsafe_code)]

//! Scroll intents: how aggressively to reposition a target once scrolled
//! into view.
//!
//! The planner treats an intent as policy, not a destination. The same
//! target pixel can produce very different offsets depending on whether the
//! caller wants the target centered, merely visible, or moved by the
//! minimal amount.

/// Policy describing where a scroll target should land in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Always place the target at the viewport's center band (biased toward
    /// the upper third so more following content is visible).
    Center,
    /// Center only when the target is outside the acceptable band or the
    /// viewport already sits below the center position. Keeps an upward
    /// caret move from appearing to retreat.
    CenterUp,
    /// Center only when the target is outside the acceptable band or the
    /// viewport already sits above the center position.
    CenterDown,
    /// Move by exactly the overshoot needed to bring the target back into
    /// the acceptable band (minimal scroll).
    Relative,
    /// Center only when the target is outside the acceptable band;
    /// otherwise leave the vertical offset untouched.
    MakeVisible,
}

impl ScrollIntent {
    /// Whether this intent uses the centering horizontal reference
    /// (offset 0) instead of the current viewport edge.
    #[inline]
    #[must_use]
    pub const fn is_centering(self) -> bool {
        matches!(self, Self::Center | Self::CenterUp | Self::CenterDown)
    }
}
