#![forbid(unsafe_code)]

//! Viewport change bookkeeping: the one-time initial correction and the
//! before/after rectangle pairing for listener notifications.

use scrollkit_core::Rect;

/// Fraction of the viewport height allowed to show virtual space past the
/// end of the document when a view is first shown: anything beyond
/// two thirds is clamped back toward content. Empirically settled; do not
/// assume it generalizes.
const TRAILING_SPACE_NUM: i64 = 2;
const TRAILING_SPACE_DEN: i64 = 3;

/// Tracks viewport positioning state across geometry notifications.
#[derive(Debug, Default)]
pub(crate) struct ViewportWatcher {
    /// Set once the viewport has acquired nonzero height.
    positioned: bool,
    /// The rectangle reported by the previous notification.
    last_rect: Option<Rect>,
}

impl ViewportWatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the reported rectangle matches the previous notification
    /// exactly (nothing to forward).
    pub(crate) fn is_unchanged(&self, rect: Rect) -> bool {
        self.last_rect == Some(rect)
    }

    /// Returns `true` exactly once: on the first notification where the
    /// viewport has nonzero height. The caller then runs the initial
    /// vertical offset correction.
    pub(crate) fn needs_initial_adjustment(&mut self, rect: Rect) -> bool {
        if !self.positioned && rect.height > 0 {
            self.positioned = true;
            true
        } else {
            false
        }
    }

    /// Record the rectangle for this notification, returning the previous
    /// one for the before/after event pair.
    pub(crate) fn record(&mut self, rect: Rect) -> Option<Rect> {
        self.last_rect.replace(rect)
    }
}

/// The vertical offset a freshly shown view should use: the current offset,
/// clamped so no more than two thirds of the viewport height falls past the
/// end of the document.
pub(crate) fn initial_vertical_offset(
    current: i64,
    line_height: i64,
    line_count: i64,
    view_height: i64,
) -> i64 {
    let max_y = line_height.max(line_count * line_height);
    let min_preferred = max_y - view_height * TRAILING_SPACE_NUM / TRAILING_SPACE_DEN;
    min_preferred.min(current)
}
