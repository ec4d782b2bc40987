// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a short interaction against the Laboratorium floor plan and
//! prints the resulting SVG document to stdout.
//!
//! Run with `cargo run -p floorplan_demos --bin laboratorium_svg > plan.svg`
//! and open the file in a browser; the marker ring animates via SMIL.

use floorplan_scene::laboratorium;
use floorplan_svg::{MarkerMotion, SvgRenderer};
use floorplan_widget::{FloorPlan, WheelResponse};
use kurbo::{Point, Rect, Size};

fn main() {
    let mut plan = FloorPlan::new(laboratorium());
    plan.set_view_rect(Rect::new(0.0, 0.0, 420.0, 420.0));

    // Two wheel notches in over the seating area, then a short drag left.
    let cursor = Point::new(260.0, 110.0);
    for _ in 0..2 {
        let response = plan.on_wheel(cursor, -120.0);
        assert_eq!(response, WheelResponse::Captured, "wheel over the widget");
    }
    plan.on_pointer_down(Point::new(300.0, 200.0));
    plan.on_pointer_move(Point::new(260.0, 195.0));
    plan.on_pointer_up(Point::new(260.0, 195.0));

    // Tap the lab bench to select it.
    let lab_center_view = plan
        .viewport()
        .plan_to_view_point(Point::new(230.0, 220.0));
    plan.on_pointer_down(lab_center_view);
    plan.on_pointer_up(lab_center_view);

    eprintln!("{:#?}", plan.debug_info());
    if let Some(line) = plan.overlay_selection() {
        eprintln!("{} — {line}", plan.overlay_caption());
    }

    let svg = SvgRenderer::new().render(
        plan.scene(),
        plan.viewport(),
        Size::new(420.0, 420.0),
        plan.selected_zone_id(),
        MarkerMotion::Smil,
    );
    println!("{svg}");
}
