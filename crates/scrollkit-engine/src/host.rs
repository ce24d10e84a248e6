#![forbid(unsafe_code)]

//! Capability traits connecting the engine to its owning view.
//!
//! The engine never talks to a document, layout engine, viewport, or
//! session directly; it goes through these seams. A [`ScrollHost`] bundles
//! the four collaborators so the motion controller can be handed one value
//! and tests can substitute one fake.

use scrollkit_core::{Point, Rect, ScrollRange};
use web_time::Instant;

/// A scroll target expressed in document terms.
///
/// Logical positions address the document model (line/column before
/// folding and soft wrap); visual positions address rendered rows. Both
/// are resolved to canvas pixels by [`LayoutMap::point_of`]. `Pixel` skips
/// resolution entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    /// A document-model position.
    Logical { line: u32, column: u32 },
    /// A rendered (post-wrap, post-fold) position.
    Visual { row: u32, column: u32 },
    /// An already-resolved canvas pixel.
    Pixel(Point),
}

/// Read access to the document being displayed.
pub trait DocumentInfo {
    /// Number of lines in the document.
    fn line_count(&self) -> i64;

    /// Whether a bulk (non-grouped) update is in progress. Animations are
    /// not trusted across bulk updates: the content under them may no
    /// longer match the animated offsets.
    fn in_bulk_update(&self) -> bool;
}

/// The layout capability: document positions to canvas pixels.
///
/// Resolution is total; out-of-range positions clamp to the nearest valid
/// layout coordinate inside the layout engine.
pub trait LayoutMap {
    /// Pixel location of a scroll target.
    fn point_of(&self, position: ScrollPosition) -> Point;

    /// Height of one rendered line, in pixels.
    fn line_height(&self) -> i64;

    /// Width of one space character, in pixels.
    fn space_width(&self) -> i64;

    /// Extra virtual columns shown past the longest line.
    fn extra_columns(&self) -> i64;
}

/// The viewport capability: visible rectangle and scrollbar state.
pub trait ViewportControl {
    /// The currently visible window into the content canvas.
    fn visible_rect(&self) -> Rect;

    /// Current horizontal scroll offset.
    fn horizontal_offset(&self) -> i64;

    /// Current vertical scroll offset.
    fn vertical_offset(&self) -> i64;

    /// Set the horizontal scroll offset. The viewport owns final clamping.
    fn set_horizontal_offset(&mut self, offset: i64);

    /// Set the vertical scroll offset. The viewport owns final clamping.
    fn set_vertical_offset(&mut self, offset: i64);

    /// Horizontal scrollbar range.
    fn horizontal_range(&self) -> ScrollRange;

    /// Vertical scrollbar range.
    fn vertical_range(&self) -> ScrollRange;
}

/// A grouped (batched) user action currently in progress.
///
/// Used by the animation gate: a scroll issued inside a grouped action only
/// animates when the action has been running for at least the animation
/// duration, so scrolls that are incidental side effects of fast batch
/// operations apply instantly.
#[derive(Debug, Clone, Copy)]
pub struct GroupedAction {
    /// When the current action started.
    pub started: Instant,
    /// When the previous action finished.
    pub previous_finished: Instant,
    /// Whether the owning view was visible when the action started.
    pub view_visible_at_start: bool,
}

/// Session-level policy for scroll behavior.
pub trait SessionPolicy {
    /// Whether animated scrolling is enabled by configuration.
    fn animated_scrolling(&self) -> bool;

    /// Whether this is a remote-desktop/degraded-rendering session.
    fn remote_session(&self) -> bool;

    /// Whether the owning view is currently showing on screen.
    fn is_showing(&self) -> bool;

    /// Whether to refrain from scrolling when the target is already
    /// visible (demotes centering intents to minimal moves).
    fn refrain_from_scrolling(&self) -> bool;

    /// The grouped user action in progress, if any.
    fn grouped_action(&self) -> Option<GroupedAction>;
}

/// Bundle of the four collaborators the engine consumes.
pub trait ScrollHost {
    fn document(&self) -> &dyn DocumentInfo;
    fn layout(&self) -> &dyn LayoutMap;
    fn viewport(&self) -> &dyn ViewportControl;
    fn viewport_mut(&mut self) -> &mut dyn ViewportControl;
    fn policy(&self) -> &dyn SessionPolicy;
}
