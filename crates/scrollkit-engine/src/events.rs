#![forbid(unsafe_code)]

//! Listener interfaces and event payloads exposed to callers.

use scrollkit_core::{Rect, ScrollIntent};

use crate::host::ScrollPosition;

/// A before/after pair describing one viewport geometry change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleAreaEvent {
    /// The visible rectangle before the change. `None` for the first
    /// notification after the view is shown.
    pub previous: Option<Rect>,
    /// The visible rectangle after the change.
    pub current: Rect,
}

/// Notified whenever the visible rectangle changes, whether from a planned
/// scroll, an animation frame, a user drag, or a resize.
pub trait VisibleAreaListener {
    fn visible_area_changed(&self, event: &VisibleAreaEvent);
}

/// Notified when a scroll to a document position is requested, before any
/// offsets are planned.
pub trait ScrollRequestListener {
    fn scroll_requested(&self, position: ScrollPosition, intent: ScrollIntent);
}
