// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=floorplan_widget --heading-base-level=0

//! Floorplan Widget: the event-driven controller tying the model crates
//! together.
//!
//! [`FloorPlan`] owns the widget's entire mutable state — the viewport
//! transform, the in-progress drag (if any), tap tracking, and the active
//! zone — next to the immutable scene. Input events are interpreted
//! synchronously, one at a time: each handler reads the current state,
//! computes the next state, and commits it before the next event arrives.
//! There is exactly one writer and no background work.
//!
//! The controller is headless. A host embedding it is expected to:
//! - Report the widget's on-screen rectangle via [`FloorPlan::set_view_rect`]
//!   once layout is known (until then, pointer and wheel input degrades to
//!   no-ops).
//! - Forward pointer down/move/up/leave and wheel events in window
//!   coordinates.
//! - Honor [`WheelResponse::Captured`] by preventing the surrounding page
//!   or scroll view from consuming the wheel event.
//! - Redraw from [`FloorPlan::viewport`], the scene, and the selection, for
//!   example through `floorplan_svg`.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_scene::laboratorium;
//! use floorplan_widget::FloorPlan;
//! use kurbo::{Point, Rect};
//!
//! let mut plan = FloorPlan::new(laboratorium());
//! plan.set_view_rect(Rect::new(0.0, 0.0, 420.0, 420.0));
//!
//! // Drag to pan.
//! plan.on_pointer_down(Point::new(10.0, 10.0));
//! plan.on_pointer_move(Point::new(40.0, 25.0));
//! plan.on_pointer_up(Point::new(40.0, 25.0));
//!
//! // A quick tap selects the zone under the cursor.
//! plan.on_pointer_down(Point::new(130.0, 85.0));
//! plan.on_pointer_up(Point::new(130.0, 85.0));
//! assert!(plan.selected_zone().is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod widget;

pub use widget::{FloorPlan, FloorPlanDebugInfo, WheelResponse};
