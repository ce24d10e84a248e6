#![forbid(unsafe_code)]

//! Scroll offsets and scrollbar ranges.
//!
//! An offset pair is the engine's unit of motion: every plan, animation
//! frame, and accumulated batch is expressed as a [`ScrollOffsets`]. A
//! [`ScrollRange`] describes one scrollbar axis; a valid offset satisfies
//! `0 <= offset <= max - extent`.

/// Horizontal and vertical scroll positions, in content pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffsets {
    pub horizontal: i64,
    pub vertical: i64,
}

impl ScrollOffsets {
    /// Create a new offset pair.
    #[inline]
    pub const fn new(horizontal: i64, vertical: i64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Straight-line pixel distance to another offset pair.
    #[must_use]
    pub fn distance_to(&self, other: ScrollOffsets) -> f64 {
        let dh = (other.horizontal - self.horizontal) as f64;
        let dv = (other.vertical - self.vertical) as f64;
        (dh * dh + dv * dv).sqrt()
    }
}

/// One scrollbar axis: total scrollable maximum and visible extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRange {
    /// Scrollbar maximum (content size along this axis).
    pub max: i64,
    /// Visible extent (viewport size along this axis).
    pub extent: i64,
}

impl ScrollRange {
    /// Create a new range.
    #[inline]
    pub const fn new(max: i64, extent: i64) -> Self {
        Self { max, extent }
    }

    /// Clamp a requested offset into `[0, max - extent]`.
    ///
    /// The lower bound wins when the range itself is degenerate
    /// (`extent > max`), so the result is never negative.
    #[must_use]
    pub fn clamp(&self, offset: i64) -> i64 {
        offset.min(self.max - self.extent).max(0)
    }
}
