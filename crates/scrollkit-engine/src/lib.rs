#![forbid(unsafe_code)]

//! Engine: the viewport motion controller.
//!
//! # Role in ScrollKit
//! `scrollkit-engine` turns scroll requests into viewport motion. Given a
//! document position (or raw offsets) and a [`ScrollIntent`], it plans the
//! destination, decides animate-vs-jump under session policy, and drives
//! the single in-flight eased animation frame by frame.
//!
//! # Primary responsibilities
//! - **Host seams**: capability traits for the document, layout, viewport,
//!   and session policy ([`host`]).
//! - **Offset planning**: the pure target-to-offsets algorithm
//!   ([`planner`]).
//! - **Animation**: bounded eased transitions with cancellation and
//!   completion callbacks ([`animation`]).
//! - **Control**: request coalescing, batching, document-mutation safety,
//!   and listener notification ([`model`]).
//!
//! # Concurrency
//! Single-threaded cooperative: every operation runs on the owning UI
//! thread, and animation frames are produced by the host's periodic timer
//! calling [`ScrollingModel::tick`]. The model is `!Send`/`!Sync` by
//! construction, so the compiler enforces the threading contract.

pub mod animation;
pub mod events;
pub mod host;
pub mod model;
pub mod planner;

mod watcher;

pub use animation::{AnimationState, FinishCallback, MotionPlan, ScrollAnimation};
pub use events::{ScrollRequestListener, VisibleAreaEvent, VisibleAreaListener};
pub use host::{
    DocumentInfo, GroupedAction, LayoutMap, ScrollHost, ScrollPosition, SessionPolicy,
    ViewportControl,
};
pub use model::ScrollingModel;
pub use planner::{plan_offsets, PlanContext};

pub use scrollkit_core::{
    ListenerSet, MotionCurve, Point, Rect, ScrollIntent, ScrollOffsets, ScrollRange, ScrollTuning,
};
