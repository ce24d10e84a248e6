#![forbid(unsafe_code)]

//! Core: geometry, scroll intents, tuning, and motion curves.
//!
//! # Role in ScrollKit
//! `scrollkit-core` is the leaf layer. It owns the pixel-space primitives
//! and pure math that the engine (`scrollkit-engine`) composes into a
//! viewport motion controller.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`/`Rect` in signed content-pixel space.
//! - **Offsets**: scroll offset pairs and per-axis scrollbar ranges.
//! - **Intents**: the policy enum describing where a target should land.
//! - **Tuning**: every animation constant, with documented defaults.
//! - **Curves**: the eased time-to-distance mapping used by animations.
//! - **Listeners**: a snapshot-on-iterate listener set safe against
//!   mutation during dispatch.
//!
//! # How it fits in the system
//! Nothing here touches a viewport or a clock. The engine reads geometry
//! from its host, plans offsets with these primitives, and drives a
//! [`curve::MotionCurve`] over wall-clock frames.

pub mod curve;
pub mod geometry;
pub mod intent;
pub mod listener;
pub mod offsets;
pub mod tuning;

pub use curve::MotionCurve;
pub use geometry::{Point, Rect};
pub use intent::ScrollIntent;
pub use listener::ListenerSet;
pub use offsets::{ScrollOffsets, ScrollRange};
pub use tuning::ScrollTuning;
