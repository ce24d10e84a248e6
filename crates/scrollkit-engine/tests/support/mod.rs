#![allow(dead_code)]

//! Fake host and recording listeners shared by the integration suites.

use std::cell::RefCell;
use std::time::Duration;

use scrollkit_engine::{
    DocumentInfo, GroupedAction, LayoutMap, Point, Rect, ScrollHost, ScrollIntent, ScrollPosition,
    ScrollRange, ScrollingModel, SessionPolicy, ViewportControl, VisibleAreaEvent,
    VisibleAreaListener,
};

pub struct FakeDocument {
    pub line_count: i64,
    pub bulk: bool,
}

impl DocumentInfo for FakeDocument {
    fn line_count(&self) -> i64 {
        self.line_count
    }

    fn in_bulk_update(&self) -> bool {
        self.bulk
    }
}

pub struct FakeLayout {
    pub line_height: i64,
    pub space_width: i64,
    pub extra_columns: i64,
}

impl LayoutMap for FakeLayout {
    fn point_of(&self, position: ScrollPosition) -> Point {
        match position {
            ScrollPosition::Logical { line, column } | ScrollPosition::Visual { row: line, column } => {
                Point::new(
                    i64::from(column) * self.space_width,
                    i64::from(line) * self.line_height,
                )
            }
            ScrollPosition::Pixel(p) => p,
        }
    }

    fn line_height(&self) -> i64 {
        self.line_height
    }

    fn space_width(&self) -> i64 {
        self.space_width
    }

    fn extra_columns(&self) -> i64 {
        self.extra_columns
    }
}

pub struct FakeViewport {
    pub width: i64,
    pub height: i64,
    pub h: i64,
    pub v: i64,
    pub h_range: ScrollRange,
    pub v_range: ScrollRange,
}

impl ViewportControl for FakeViewport {
    fn visible_rect(&self) -> Rect {
        Rect::new(self.h, self.v, self.width, self.height)
    }

    fn horizontal_offset(&self) -> i64 {
        self.h
    }

    fn vertical_offset(&self) -> i64 {
        self.v
    }

    fn set_horizontal_offset(&mut self, offset: i64) {
        self.h = self.h_range.clamp(offset);
    }

    fn set_vertical_offset(&mut self, offset: i64) {
        self.v = self.v_range.clamp(offset);
    }

    fn horizontal_range(&self) -> ScrollRange {
        self.h_range
    }

    fn vertical_range(&self) -> ScrollRange {
        self.v_range
    }
}

pub struct FakePolicy {
    pub animated: bool,
    pub remote: bool,
    pub showing: bool,
    pub refrain: bool,
    pub grouped: Option<GroupedAction>,
}

impl SessionPolicy for FakePolicy {
    fn animated_scrolling(&self) -> bool {
        self.animated
    }

    fn remote_session(&self) -> bool {
        self.remote
    }

    fn is_showing(&self) -> bool {
        self.showing
    }

    fn refrain_from_scrolling(&self) -> bool {
        self.refrain
    }

    fn grouped_action(&self) -> Option<GroupedAction> {
        self.grouped
    }
}

pub struct FakeHost {
    pub document: FakeDocument,
    pub layout: FakeLayout,
    pub viewport: FakeViewport,
    pub policy: FakePolicy,
}

impl ScrollHost for FakeHost {
    fn document(&self) -> &dyn DocumentInfo {
        &self.document
    }

    fn layout(&self) -> &dyn LayoutMap {
        &self.layout
    }

    fn viewport(&self) -> &dyn ViewportControl {
        &self.viewport
    }

    fn viewport_mut(&mut self) -> &mut dyn ViewportControl {
        &mut self.viewport
    }

    fn policy(&self) -> &dyn SessionPolicy {
        &self.policy
    }
}

/// A standard host: 800x600 viewport at the origin over a 5000-line
/// document, animation allowed.
pub fn host() -> FakeHost {
    FakeHost {
        document: FakeDocument {
            line_count: 5000,
            bulk: false,
        },
        layout: FakeLayout {
            line_height: 20,
            space_width: 8,
            extra_columns: 3,
        },
        viewport: FakeViewport {
            width: 800,
            height: 600,
            h: 0,
            v: 0,
            h_range: ScrollRange::new(20_000, 800),
            v_range: ScrollRange::new(100_000, 600),
        },
        policy: FakePolicy {
            animated: true,
            remote: false,
            showing: true,
            refrain: false,
            grouped: None,
        },
    }
}

/// Drive the model's frame pump with a virtual clock: `total` wall time in
/// 10ms steps.
pub fn drive(model: &mut ScrollingModel<FakeHost>, total: Duration) {
    let step = Duration::from_millis(10);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        model.tick(step);
        elapsed += step;
    }
}

/// Records every visible-area event it sees.
#[derive(Default)]
pub struct AreaLog {
    pub events: RefCell<Vec<VisibleAreaEvent>>,
}

impl VisibleAreaListener for AreaLog {
    fn visible_area_changed(&self, event: &VisibleAreaEvent) {
        self.events.borrow_mut().push(*event);
    }
}

/// Records every scroll request it sees.
#[derive(Default)]
pub struct RequestLog {
    pub requests: RefCell<Vec<(ScrollPosition, ScrollIntent)>>,
}

impl scrollkit_engine::ScrollRequestListener for RequestLog {
    fn scroll_requested(&self, position: ScrollPosition, intent: ScrollIntent) {
        self.requests.borrow_mut().push((position, intent));
    }
}
