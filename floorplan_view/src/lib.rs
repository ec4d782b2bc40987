// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=floorplan_view --heading-base-level=0

//! Floorplan View: the pan/zoom viewport model for the floor-plan widget.
//!
//! This crate provides a small, headless model of the widget's view
//! transform: a uniform scale plus a view-space offset over a fixed plan
//! coordinate space. It focuses on:
//! - Viewport state (clamped scale + offset).
//! - Anchored zoom, where the plan point under a chosen view-space anchor
//!   stays under that anchor across the rescale.
//! - Coordinate conversion between plan and view/device (pixel) space.
//! - The zoom step factors used by the widget's two zoom input methods.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to:
//! - Maintain their own schematic/scene model.
//! - Use [`PlanViewport`] to derive transforms for rendering and hit testing.
//! - Wire input events into pan/zoom operations at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_view::{PlanViewport, ZoomStep};
//! use kurbo::Point;
//!
//! let mut view = PlanViewport::new();
//!
//! // Wheel zoom in, anchored at the cursor: the plan point under the cursor
//! // stays under the cursor.
//! let cursor = Point::new(100.0, 50.0);
//! let before = view.view_to_plan_point(cursor);
//! view.zoom_about(cursor, ZoomStep::WheelIn.factor());
//! let after = view.view_to_plan_point(cursor);
//! assert!((after - before).hypot() < 1e-9);
//!
//! // Drag pan: offsets accumulate in view space.
//! view.pan_by((30.0, 15.0).into());
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; zone coordinates
//!   are never mutated, the whole plan is transformed in view space.
//! - The scale is clamped on every zoom computation, so no input sequence can
//!   drive it out of its bounds.
//! - All operations are infallible: non-finite or non-positive factors are
//!   ignored rather than signaled.
//!
//! This crate is `no_std`.

#![no_std]

mod steps;
mod viewport;

pub use steps::ZoomStep;
pub use viewport::{PlanViewport, PlanViewportDebugInfo};
