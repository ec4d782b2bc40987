// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Rect, Size};

use crate::marker::Marker;
use crate::scene::Scene;
use crate::zone::Zone;

/// The Laboratorium shop floor: four zones, two walkway connectors, and the
/// street-corner marker, laid out on a 420 × 300 logical canvas.
///
/// Zone ids: `bar`, `seating`, `roaster`, `lab`.
#[must_use]
pub fn laboratorium() -> Scene {
    let mut scene = Scene::new(
        Size::new(420.0, 300.0),
        Marker::new(Point::new(250.0, 120.0), "You are here: Alloy Ave & 9th"),
    );

    scene.add_zone(Zone::new(
        "bar",
        "Brew Bar",
        Rect::from_origin_size((40.0, 40.0), (140.0, 70.0)),
    ));
    scene.add_zone(Zone::new(
        "seating",
        "Seating",
        Rect::from_origin_size((190.0, 40.0), (180.0, 140.0)),
    ));
    scene.add_zone(Zone::new(
        "roaster",
        "Roaster",
        Rect::from_origin_size((40.0, 120.0), (120.0, 60.0)),
    ));
    scene.add_zone(Zone::new(
        "lab",
        "Lab Bench",
        Rect::from_origin_size((170.0, 190.0), (120.0, 60.0)),
    ));

    // Walkway from the bar toward the seating area.
    let mut path = BezPath::new();
    path.move_to((110.0, 110.0));
    path.curve_to((130.0, 130.0), (160.0, 130.0), (190.0, 110.0));
    scene.add_connector(path);

    // Walkway from the seating area down past the lab bench.
    let mut path = BezPath::new();
    path.move_to((260.0, 60.0));
    path.curve_to((270.0, 100.0), (300.0, 120.0), (330.0, 140.0));
    scene.add_connector(path);

    scene
}
