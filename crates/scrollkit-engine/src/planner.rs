#![forbid(unsafe_code)]

//! The offset planner: target pixel + intent + viewport -> destination
//! offsets.
//!
//! Pure function of its inputs. The planner decides *where* the viewport
//! should end up; whether to animate the move is the motion controller's
//! call.
//!
//! # Vertical band
//!
//! When the viewport is tall enough, an acceptable band
//! `[min_acceptable_y, max_acceptable_y]` keeps at least one line of
//! context above and below the target. A target inside the band needs no
//! vertical motion for the non-forcing intents; a target outside it
//! produces an overshoot (`scroll_up_by` / `scroll_down_by`) that the
//! intent turns into an offset. The band collapses when the viewport is a
//! single line tall or shorter.
//!
//! # Invariants
//!
//! 1. Output offsets satisfy `0 <= offset <= range.max - range.extent`
//!    (lower bound wins for degenerate ranges).
//! 2. `Relative` never moves further than the overshoot past the band.
//! 3. A target inside the band with `MakeVisible` leaves the vertical
//!    offset unchanged (modulo final clamping).

use scrollkit_core::{Point, Rect, ScrollIntent, ScrollOffsets, ScrollRange};

/// Vertical centering places the target this fraction of the viewport
/// height from the top. Biased toward the upper third rather than the
/// exact middle so more following content is visible. Empirically settled;
/// do not assume it generalizes.
pub const CENTER_BIAS_DIVISOR: i64 = 3;

/// Everything the planner needs besides the target and intent.
#[derive(Debug, Clone, Copy)]
pub struct PlanContext {
    /// The currently visible rectangle to plan against. Callers planning
    /// on top of an in-flight animation pass that animation's target
    /// rectangle instead of the live one.
    pub view: Rect,
    /// Height of one rendered line, in pixels.
    pub line_height: i64,
    /// Width of one space character, in pixels.
    pub space_width: i64,
    /// Extra virtual columns past the longest line.
    pub extra_columns: i64,
    /// Horizontal inset, in columns, kept between a left-scrolled target
    /// and the viewport edge.
    pub inset_columns: i64,
    /// Demote centering intents to `Relative` when the target is already
    /// visible.
    pub refrain_when_visible: bool,
    /// Horizontal scrollbar range for final clamping.
    pub horizontal_range: ScrollRange,
    /// Vertical scrollbar range for final clamping.
    pub vertical_range: ScrollRange,
}

/// Compute the destination scroll offsets for a target pixel.
#[must_use]
pub fn plan_offsets(target: Point, intent: ScrollIntent, ctx: &PlanContext) -> ScrollOffsets {
    let view = ctx.view;

    // Already-visible targets don't deserve a centering jump.
    let intent = if ctx.refrain_when_visible && view.contains(target) && intent.is_centering() {
        ScrollIntent::Relative
    } else {
        intent
    };

    ScrollOffsets::new(
        ctx.horizontal_range.clamp(plan_horizontal(target, intent, ctx)),
        ctx.vertical_range.clamp(plan_vertical(target, intent, ctx)),
    )
}

fn plan_horizontal(target: Point, intent: ScrollIntent, ctx: &PlanContext) -> i64 {
    let view = ctx.view;
    let inset = ctx.inset_columns * ctx.space_width;
    let x_insets = ctx.extra_columns * ctx.space_width;

    // Centering intents measure from the canvas origin, not the current
    // viewport edge.
    let mut h_offset = if intent.is_centering() { 0 } else { view.x };

    if target.x < h_offset {
        if intent == ScrollIntent::MakeVisible && target.x < view.width - inset {
            // Scrolling left anyway; the leftmost position still shows the
            // target, so snap to the start of the line.
            h_offset = 0;
        } else {
            h_offset = (target.x - inset).max(0);
        }
    } else if view.width > 0 && target.x >= h_offset + view.width {
        h_offset = target.x - (view.width - x_insets).max(0);
    }

    h_offset
}

fn plan_vertical(target: Point, intent: ScrollIntent, ctx: &PlanContext) -> i64 {
    let view = ctx.view;
    let line_height = ctx.line_height;

    // min_acceptable_y <= max_acceptable_y always, to avoid hysteresis.
    let min_acceptable_y = view.y + line_height.min(view.height - 3 * line_height).max(0);
    let max_acceptable_y = view.y
        + if view.height <= line_height {
            0
        } else {
            view.height
                - if view.height <= 2 * line_height {
                    line_height
                } else {
                    2 * line_height
                }
        };

    let scroll_up_by = min_acceptable_y - target.y;
    let scroll_down_by = target.y - max_acceptable_y;
    let center_position = target.y - view.height / CENTER_BIAS_DIVISOR;

    let mut v_offset = view.y;
    match intent {
        ScrollIntent::Center => {
            v_offset = center_position;
        }
        ScrollIntent::CenterUp => {
            if scroll_up_by > 0 || scroll_down_by > 0 || v_offset > center_position {
                v_offset = center_position;
            }
        }
        ScrollIntent::CenterDown => {
            if scroll_up_by > 0 || scroll_down_by > 0 || v_offset < center_position {
                v_offset = center_position;
            }
        }
        ScrollIntent::Relative => {
            if scroll_up_by > 0 {
                v_offset = view.y - scroll_up_by;
            } else if scroll_down_by > 0 {
                v_offset = view.y + scroll_down_by;
            }
        }
        ScrollIntent::MakeVisible => {
            if scroll_up_by > 0 || scroll_down_by > 0 {
                v_offset = center_position;
            }
        }
    }

    v_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(view: Rect) -> PlanContext {
        PlanContext {
            view,
            line_height: 20,
            space_width: 8,
            extra_columns: 3,
            inset_columns: 4,
            refrain_when_visible: false,
            horizontal_range: ScrollRange::new(10_000, view.width),
            vertical_range: ScrollRange::new(100_000, view.height),
        }
    }

    #[test]
    fn center_uses_upper_third() {
        // height=300, target.y=1000 -> 1000 - 300/3 = 900.
        let c = ctx(Rect::new(0, 0, 800, 300));
        let p = plan_offsets(Point::new(0, 1000), ScrollIntent::Center, &c);
        assert_eq!(p.vertical, 900);
    }

    #[test]
    fn center_result_clamps_to_range() {
        let mut c = ctx(Rect::new(0, 0, 800, 300));
        c.vertical_range = ScrollRange::new(1000, 300);
        let p = plan_offsets(Point::new(0, 1000), ScrollIntent::Center, &c);
        assert_eq!(p.vertical, 700);
    }

    #[test]
    fn make_visible_inside_band_keeps_vertical_offset() {
        // Band for view.y=400, h=300, lh=20: [420, 660].
        let c = ctx(Rect::new(0, 400, 800, 300));
        let p = plan_offsets(Point::new(100, 500), ScrollIntent::MakeVisible, &c);
        assert_eq!(p.vertical, 400);
    }

    #[test]
    fn make_visible_outside_band_centers() {
        let c = ctx(Rect::new(0, 400, 800, 300));
        let p = plan_offsets(Point::new(100, 2000), ScrollIntent::MakeVisible, &c);
        assert_eq!(p.vertical, 2000 - 100);
    }

    #[test]
    fn relative_scrolls_down_by_exact_overshoot() {
        let c = ctx(Rect::new(0, 400, 800, 300));
        // max_acceptable_y = 400 + 300 - 40 = 660; overshoot 40.
        let p = plan_offsets(Point::new(0, 700), ScrollIntent::Relative, &c);
        assert_eq!(p.vertical, 440);
    }

    #[test]
    fn relative_scrolls_up_by_exact_overshoot() {
        let c = ctx(Rect::new(0, 400, 800, 300));
        // min_acceptable_y = 420; target 360 overshoots by 60.
        let p = plan_offsets(Point::new(0, 360), ScrollIntent::Relative, &c);
        assert_eq!(p.vertical, 340);
    }

    #[test]
    fn relative_inside_band_is_a_no_op() {
        let c = ctx(Rect::new(120, 400, 800, 300));
        let p = plan_offsets(Point::new(300, 500), ScrollIntent::Relative, &c);
        assert_eq!(p.vertical, 400);
        assert_eq!(p.horizontal, 120);
    }

    #[test]
    fn center_up_skips_when_already_below_center() {
        // Target inside band, viewport above center position: no move.
        let c = ctx(Rect::new(0, 400, 800, 300));
        // center = 500 - 100 = 400 == view.y, not strictly above.
        let p = plan_offsets(Point::new(0, 500), ScrollIntent::CenterUp, &c);
        assert_eq!(p.vertical, 400);
    }

    #[test]
    fn center_up_jumps_when_viewport_below_center() {
        let c = ctx(Rect::new(0, 450, 800, 300));
        // Target 540 is inside the band [470, 710], but center = 440 and
        // view.y = 450 > 440, so CenterUp recenters.
        let p = plan_offsets(Point::new(0, 540), ScrollIntent::CenterUp, &c);
        assert_eq!(p.vertical, 440);
    }

    #[test]
    fn center_down_jumps_when_viewport_above_center() {
        let c = ctx(Rect::new(0, 400, 800, 300));
        // Target 540: center = 440 > view.y = 400, so CenterDown recenters.
        let p = plan_offsets(Point::new(0, 540), ScrollIntent::CenterDown, &c);
        assert_eq!(p.vertical, 440);
    }

    #[test]
    fn single_line_viewport_collapses_band() {
        // height == line_height: band is [view.y, view.y]; a target above
        // or below still resolves, and an in-place target stays put.
        let c = ctx(Rect::new(0, 400, 800, 20));
        let p = plan_offsets(Point::new(0, 400), ScrollIntent::Relative, &c);
        assert_eq!(p.vertical, 400);
        let p = plan_offsets(Point::new(0, 460), ScrollIntent::Relative, &c);
        assert_eq!(p.vertical, 460);
    }

    #[test]
    fn refrain_demotes_centering_for_visible_targets() {
        let mut c = ctx(Rect::new(0, 400, 800, 300));
        c.refrain_when_visible = true;
        // Target visible and inside the band: Center behaves like Relative.
        let p = plan_offsets(Point::new(100, 500), ScrollIntent::Center, &c);
        assert_eq!(p.vertical, 400);
        // Target not visible: Center still centers.
        let p = plan_offsets(Point::new(100, 2000), ScrollIntent::Center, &c);
        assert_eq!(p.vertical, 1900);
    }

    #[test]
    fn refrain_does_not_demote_non_centering() {
        let mut c = ctx(Rect::new(0, 400, 800, 300));
        c.refrain_when_visible = true;
        let p = plan_offsets(Point::new(100, 700), ScrollIntent::Relative, &c);
        assert_eq!(p.vertical, 440);
    }

    #[test]
    fn horizontal_left_scroll_keeps_inset() {
        let c = ctx(Rect::new(500, 0, 800, 300));
        // inset = 4 * 8 = 32. Relative target left of view.x.
        let p = plan_offsets(Point::new(200, 0), ScrollIntent::Relative, &c);
        assert_eq!(p.horizontal, 200 - 32);
    }

    #[test]
    fn horizontal_left_scroll_floors_at_zero() {
        let c = ctx(Rect::new(500, 0, 800, 300));
        let p = plan_offsets(Point::new(10, 0), ScrollIntent::Relative, &c);
        assert_eq!(p.horizontal, 0);
    }

    #[test]
    fn make_visible_snaps_to_line_start() {
        // Target left of the viewport but within the first screenful:
        // jump to offset 0 instead of a partial left scroll.
        let c = ctx(Rect::new(500, 0, 800, 300));
        let p = plan_offsets(Point::new(200, 0), ScrollIntent::MakeVisible, &c);
        assert_eq!(p.horizontal, 0);
    }

    #[test]
    fn make_visible_far_target_scrolls_normally() {
        // Target further than one screenful minus the inset: the snap
        // heuristic does not apply.
        let mut c = ctx(Rect::new(2000, 0, 800, 300));
        c.horizontal_range = ScrollRange::new(10_000, 800);
        let p = plan_offsets(Point::new(900, 0), ScrollIntent::MakeVisible, &c);
        assert_eq!(p.horizontal, 900 - 32);
    }

    #[test]
    fn horizontal_right_scroll_reserves_extra_columns() {
        let c = ctx(Rect::new(0, 0, 800, 300));
        // x_insets = 3 * 8 = 24. Target past the right edge.
        let p = plan_offsets(Point::new(900, 0), ScrollIntent::Relative, &c);
        assert_eq!(p.horizontal, 900 - (800 - 24));
    }

    #[test]
    fn zero_width_viewport_never_scrolls_right() {
        let mut c = ctx(Rect::new(0, 0, 0, 300));
        c.horizontal_range = ScrollRange::new(10_000, 0);
        let p = plan_offsets(Point::new(900, 0), ScrollIntent::Relative, &c);
        assert_eq!(p.horizontal, 0);
    }

    #[test]
    fn centering_measures_horizontal_from_origin() {
        // With a centering intent the horizontal reference is 0, so a
        // target inside the first screenful produces no horizontal scroll.
        let c = ctx(Rect::new(500, 0, 800, 300));
        let p = plan_offsets(Point::new(300, 1000), ScrollIntent::Center, &c);
        assert_eq!(p.horizontal, 0);
        let p = plan_offsets(Point::new(900, 1000), ScrollIntent::Center, &c);
        assert_eq!(p.horizontal, 900 - (800 - 24));
    }

    #[test]
    fn offsets_never_negative() {
        let mut c = ctx(Rect::new(0, 0, 800, 300));
        c.vertical_range = ScrollRange::new(100, 300); // degenerate
        let p = plan_offsets(Point::new(0, 0), ScrollIntent::Center, &c);
        assert_eq!(p.vertical, 0);
        assert_eq!(p.horizontal, 0);
    }
}
