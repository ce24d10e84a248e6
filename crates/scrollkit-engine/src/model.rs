#![forbid(unsafe_code)]

//! The motion controller: owns scroll state and decides animate-vs-jump.
//!
//! [`ScrollingModel`] is the engine's public surface. Callers request
//! scrolls (by document position, pixel, or raw offsets); the model plans
//! the destination, gates animation on session policy, and either applies
//! the offsets immediately or drives a [`ScrollAnimation`] through
//! [`ScrollingModel::tick`].
//!
//! # Invariants
//!
//! 1. At most one animation is live; every path producing a new scroll
//!    destination first resolves the old one. Ownership of the
//!    `Option<ScrollAnimation>` slot enforces this.
//! 2. Superseded animations finalize at their *current interpolated
//!    position* unless a snap was requested, so requests never appear to
//!    jump backward.
//! 3. After any cancellation returns, the prior request is finalized and
//!    its callbacks (if any) have run.
//! 4. While batching, `scroll` only records the latest offsets; the flush
//!    applies them as one visible move.
//!
//! # Concurrency
//!
//! Single-threaded cooperative. The model is `!Send`/`!Sync` (listener
//! handles are `Rc`); frames advance only through `tick`, which the host
//! calls from its timer on the owning thread. Tests drive `tick` with a
//! virtual clock.

use std::rc::Rc;
use std::time::Duration;

use scrollkit_core::{
    ListenerSet, Point, Rect, ScrollIntent, ScrollOffsets, ScrollTuning,
};
use tracing::{debug, error, trace};

use crate::animation::{MotionPlan, ScrollAnimation};
use crate::events::{ScrollRequestListener, VisibleAreaEvent, VisibleAreaListener};
use crate::host::{ScrollHost, ScrollPosition};
use crate::planner::{plan_offsets, PlanContext};
use crate::watcher::{initial_vertical_offset, ViewportWatcher};

/// The viewport motion controller.
pub struct ScrollingModel<H: ScrollHost> {
    host: H,
    tuning: ScrollTuning,
    active: Option<ScrollAnimation>,
    animation_disabled: bool,
    accumulating: bool,
    accumulated: Option<ScrollOffsets>,
    watcher: ViewportWatcher,
    visible_area_listeners: ListenerSet<dyn VisibleAreaListener>,
    scroll_request_listeners: ListenerSet<dyn ScrollRequestListener>,
}

impl<H: ScrollHost> ScrollingModel<H> {
    /// Create a model with default tuning.
    pub fn new(host: H) -> Self {
        Self::with_tuning(host, ScrollTuning::default())
    }

    /// Create a model with explicit tuning.
    pub fn with_tuning(host: H, tuning: ScrollTuning) -> Self {
        Self {
            host,
            tuning,
            active: None,
            animation_disabled: false,
            accumulating: false,
            accumulated: None,
            watcher: ViewportWatcher::new(),
            visible_area_listeners: ListenerSet::new(),
            scroll_request_listeners: ListenerSet::new(),
        }
    }

    /// The owning host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the owning host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The tuning in use.
    pub fn tuning(&self) -> &ScrollTuning {
        &self.tuning
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// The currently visible rectangle.
    pub fn visible_area(&self) -> Rect {
        self.host.viewport().visible_rect()
    }

    /// The visible rectangle once scrolling settles: the in-flight
    /// animation's target area, or the current one when idle.
    pub fn visible_area_on_finish(&self) -> Rect {
        match &self.active {
            Some(anim) => anim.target_visible_area(self.visible_area()),
            None => self.visible_area(),
        }
    }

    /// Current horizontal scroll offset.
    pub fn horizontal_offset(&self) -> i64 {
        self.host.viewport().horizontal_offset()
    }

    /// Current vertical scroll offset.
    pub fn vertical_offset(&self) -> i64 {
        self.host.viewport().vertical_offset()
    }

    /// Whether an animation is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.active.is_some()
    }

    /// Whether animation is enabled on this model (session policy still
    /// applies on top).
    pub fn is_animation_enabled(&self) -> bool {
        !self.animation_disabled
    }

    // -----------------------------------------------------------------
    // Scroll requests
    // -----------------------------------------------------------------

    /// Scroll a document position into view according to `intent`.
    ///
    /// Scroll-request listeners are notified with the raw request before
    /// any offsets are planned.
    pub fn scroll_to(&mut self, position: ScrollPosition, intent: ScrollIntent) {
        trace!(?position, ?intent, "scroll requested");
        for listener in self.scroll_request_listeners.snapshot() {
            listener.scroll_requested(position, intent);
        }
        let target = self.host.layout().point_of(position);
        self.scroll_to_point(target, intent);
    }

    /// Scroll a canvas pixel into view according to `intent`.
    pub fn scroll_to_point(&mut self, target: Point, intent: ScrollIntent) {
        // Plan against where the viewport is heading, not where a
        // half-finished animation happens to be right now.
        let cancelled = self.cancel_active(false);
        let view = match &cancelled {
            Some(anim) => anim.target_visible_area(self.visible_area()),
            None => self.visible_area(),
        };
        let offsets = plan_offsets(target, intent, &self.plan_context(view));
        self.scroll(offsets.horizontal, offsets.vertical);
    }

    /// Scroll to raw offsets. The viewport owns final clamping.
    ///
    /// While batching, only records the offsets; see
    /// [`ScrollingModel::flush_accumulated`].
    pub fn scroll(&mut self, h_offset: i64, v_offset: i64) {
        if self.accumulating {
            self.accumulated = Some(ScrollOffsets::new(h_offset, v_offset));
            return;
        }

        self.cancel_active(false);

        let end = ScrollOffsets::new(h_offset, v_offset);
        if !self.should_animate() {
            trace!(?end, "immediate scroll");
            self.apply_offsets(end);
            return;
        }

        let start = ScrollOffsets::new(self.horizontal_offset(), self.vertical_offset());
        if start == end {
            return;
        }

        let line_height = self.host.layout().line_height();
        match MotionPlan::plan(start, end, line_height, &self.tuning) {
            MotionPlan::Animate(anim) => {
                debug!(?start, ?end, duration = ?anim.duration(), "animated scroll");
                self.active = Some(anim);
            }
            MotionPlan::Immediate => {
                trace!(?end, "scroll too short to animate");
                self.apply_offsets(end);
            }
        }
    }

    /// Scroll horizontally, keeping the vertical offset.
    pub fn scroll_horizontally(&mut self, h_offset: i64) {
        self.scroll(h_offset, self.vertical_offset());
    }

    /// Scroll vertically, keeping the horizontal offset.
    pub fn scroll_vertically(&mut self, v_offset: i64) {
        self.scroll(self.horizontal_offset(), v_offset);
    }

    /// Run `action` once scrolling settles: immediately when idle,
    /// otherwise after the in-flight animation finishes (or is cancelled
    /// with callbacks pending, which snaps to the target first).
    pub fn run_when_finished(&mut self, action: impl FnOnce() + 'static) {
        match &mut self.active {
            Some(anim) => anim.push_callback(Box::new(action)),
            None => action(),
        }
    }

    // -----------------------------------------------------------------
    // Animation control
    // -----------------------------------------------------------------

    /// Disable animation for this model until re-enabled.
    pub fn disable_animation(&mut self) {
        self.animation_disabled = true;
    }

    /// Re-enable animation for this model.
    pub fn enable_animation(&mut self) {
        self.animation_disabled = false;
    }

    /// Snap any in-flight animation to its target.
    pub fn finish_animation(&mut self) {
        self.cancel_active(true);
    }

    /// Advance the in-flight animation by `dt` of wall-clock time and
    /// apply the resulting frame. No-op when idle.
    pub fn tick(&mut self, dt: Duration) {
        let Some(anim) = self.active.as_mut() else {
            return;
        };
        let offsets = anim.tick(dt);
        let finished = anim.is_finished();
        self.apply_offsets(offsets);
        if finished {
            if let Some(mut done) = self.active.take() {
                self.finalize(&mut done, true);
            }
        }
    }

    // -----------------------------------------------------------------
    // Batching
    // -----------------------------------------------------------------

    /// Enter batching mode: subsequent `scroll` calls record offsets
    /// without applying them.
    pub fn accumulate_changes(&mut self) {
        self.accumulating = true;
    }

    /// Exit batching mode, applying the last recorded offsets as one
    /// visible move. A flush with nothing recorded is a no-op.
    pub fn flush_accumulated(&mut self) {
        self.accumulating = false;
        if let Some(pending) = self.accumulated.take() {
            debug!(?pending, "flushing accumulated scroll");
            self.scroll(pending.horizontal, pending.vertical);
            // The flush is one visible move; don't leave it animating.
            self.cancel_active(true);
        }
    }

    // -----------------------------------------------------------------
    // Document and session hooks
    // -----------------------------------------------------------------

    /// Called before a document mutation. Outside bulk updates the content
    /// under a running animation is about to shift, so snap it to its
    /// target now.
    pub fn before_document_change(&mut self) {
        if !self.host.document().in_bulk_update() {
            self.cancel_active(true);
        }
    }

    /// Called when a bulk document update begins.
    pub fn on_bulk_update_started(&mut self) {
        self.cancel_active(true);
    }

    /// Called before a modality change (dialogs and the like).
    pub fn before_modality_change(&mut self) {
        self.cancel_active(true);
    }

    // -----------------------------------------------------------------
    // Viewport notifications
    // -----------------------------------------------------------------

    /// Entry point for viewport geometry change notifications (drags,
    /// resizes, and the model's own offset writes).
    ///
    /// The first notification with nonzero height applies the one-time
    /// initial offset correction; when it adjusts, that round's listener
    /// notification is suppressed (the correction itself re-notifies).
    pub fn viewport_changed(&mut self) {
        let rect = self.visible_area();
        if self.watcher.is_unchanged(rect) {
            return;
        }
        if self.watcher.needs_initial_adjustment(rect) && self.adjust_initial_offset() {
            return;
        }
        let previous = self.watcher.record(rect);
        let event = VisibleAreaEvent {
            previous,
            current: rect,
        };
        for listener in self.visible_area_listeners.snapshot() {
            listener.visible_area_changed(&event);
        }
    }

    /// Clamp the initial vertical offset away from trailing virtual
    /// space. Returns whether an adjustment scroll was issued.
    fn adjust_initial_offset(&mut self) -> bool {
        let current = self.vertical_offset();
        let corrected = initial_vertical_offset(
            current,
            self.host.layout().line_height(),
            self.host.document().line_count(),
            self.visible_area().height,
        );
        if corrected != current {
            debug!(current, corrected, "initial viewport correction");
            self.scroll(self.horizontal_offset(), corrected);
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------
    // Listeners
    // -----------------------------------------------------------------

    /// Register a visible-area listener.
    pub fn add_visible_area_listener(&mut self, listener: Rc<dyn VisibleAreaListener>) {
        self.visible_area_listeners.add(listener);
    }

    /// Remove a visible-area listener. Removing an unregistered listener
    /// is a caller bug and is logged.
    pub fn remove_visible_area_listener(&mut self, listener: &Rc<dyn VisibleAreaListener>) {
        if !self.visible_area_listeners.remove(listener) {
            error!("removed a visible-area listener that was never added");
        }
    }

    /// Register a scroll-request listener.
    pub fn add_scroll_request_listener(&mut self, listener: Rc<dyn ScrollRequestListener>) {
        self.scroll_request_listeners.add(listener);
    }

    /// Remove a scroll-request listener.
    pub fn remove_scroll_request_listener(&mut self, listener: &Rc<dyn ScrollRequestListener>) {
        self.scroll_request_listeners.remove(listener);
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    /// Take the active animation, if any, and finalize it.
    ///
    /// With `snap_to_target` the viewport lands on the animation's end
    /// offsets; otherwise it stays at the current interpolated position
    /// (unless callbacks are pending, which force the snap so "scroll
    /// finished" never observes a short offset). Synchronous: when this
    /// returns, callbacks have run.
    fn cancel_active(&mut self, snap_to_target: bool) -> Option<ScrollAnimation> {
        let mut anim = self.active.take()?;
        trace!(snap_to_target, "cancelling animation");
        self.finalize(&mut anim, snap_to_target);
        Some(anim)
    }

    fn finalize(&mut self, anim: &mut ScrollAnimation, snap_to_target: bool) {
        let callbacks = anim.take_callbacks();
        if snap_to_target || !callbacks.is_empty() {
            self.apply_offsets(anim.end());
        }
        anim.mark_finished();
        for callback in callbacks {
            callback();
        }
    }

    /// Write offsets to the viewport and forward the geometry change.
    fn apply_offsets(&mut self, offsets: ScrollOffsets) {
        let viewport = self.host.viewport_mut();
        viewport.set_horizontal_offset(offsets.horizontal);
        viewport.set_vertical_offset(offsets.vertical);
        self.viewport_changed();
    }

    /// All animation gates must pass; any failure means an immediate jump.
    fn should_animate(&self) -> bool {
        let policy = self.host.policy();
        if !policy.animated_scrolling() || self.animation_disabled || policy.remote_session() {
            return false;
        }
        match policy.grouped_action() {
            None => policy.is_showing(),
            Some(action) => {
                // A scroll fired by a fast batch operation is incidental;
                // only animate when the action has been running for at
                // least one full animation's worth of time.
                let running_for = action
                    .started
                    .saturating_duration_since(action.previous_finished);
                if running_for < self.tuning.animation_duration {
                    false
                } else {
                    action.view_visible_at_start
                }
            }
        }
    }

    fn plan_context(&self, view: Rect) -> PlanContext {
        let layout = self.host.layout();
        let viewport = self.host.viewport();
        PlanContext {
            view,
            line_height: layout.line_height(),
            space_width: layout.space_width(),
            extra_columns: layout.extra_columns(),
            inset_columns: self.tuning.horizontal_inset_columns,
            refrain_when_visible: self.host.policy().refrain_from_scrolling(),
            horizontal_range: viewport.horizontal_range(),
            vertical_range: viewport.vertical_range(),
        }
    }
}

impl<H: ScrollHost> std::fmt::Debug for ScrollingModel<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollingModel")
            .field("active", &self.active)
            .field("animation_disabled", &self.animation_disabled)
            .field("accumulating", &self.accumulating)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}
