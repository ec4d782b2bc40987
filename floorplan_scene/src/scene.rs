// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Size};

use crate::marker::{Marker, Pulse};
use crate::zone::{Zone, ZoneId};

/// A complete schematic: the fixed logical canvas, its zones, decorative
/// connector paths, and the location marker.
///
/// Scenes are built at configuration time and are immutable for the session;
/// all interactive state (viewport transform, selection) lives elsewhere.
#[derive(Clone, Debug)]
pub struct Scene {
    size: Size,
    zones: Vec<Zone>,
    connectors: Vec<BezPath>,
    marker: Marker,
    pulse: Pulse,
    zone_corner_radius: f64,
}

impl Scene {
    /// Corner radius used for zone outlines unless overridden.
    pub const DEFAULT_ZONE_CORNER_RADIUS: f64 = 10.0;

    /// Creates an empty scene with the given logical canvas size and marker.
    #[must_use]
    pub fn new(size: Size, marker: Marker) -> Self {
        Self {
            size,
            zones: Vec::new(),
            connectors: Vec::new(),
            marker,
            pulse: Pulse::default(),
            zone_corner_radius: Self::DEFAULT_ZONE_CORNER_RADIUS,
        }
    }

    /// Appends a zone. Later zones draw (and therefore hit-test) on top of
    /// earlier ones.
    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// Appends a decorative connector path.
    pub fn add_connector(&mut self, path: BezPath) {
        self.connectors.push(path);
    }

    /// Overrides the pulse configuration for the marker's ring.
    pub fn set_pulse(&mut self, pulse: Pulse) {
        self.pulse = pulse;
    }

    /// Overrides the zone corner radius.
    pub fn set_zone_corner_radius(&mut self, radius: f64) {
        self.zone_corner_radius = radius.max(0.0);
    }

    /// Returns the logical canvas size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the zones in z-order (bottom first).
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Returns the decorative connector paths.
    #[must_use]
    pub fn connectors(&self) -> &[BezPath] {
        &self.connectors
    }

    /// Returns the location marker.
    #[must_use]
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Returns the marker ring's pulse configuration.
    #[must_use]
    pub fn pulse(&self) -> Pulse {
        self.pulse
    }

    /// Returns the corner radius shared by all zone outlines.
    #[must_use]
    pub fn zone_corner_radius(&self) -> f64 {
        self.zone_corner_radius
    }

    /// Looks a zone up by id.
    #[must_use]
    pub fn zone(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id() == id)
    }

    /// Returns the topmost zone containing the plan-space point, if any.
    #[must_use]
    pub fn zone_at(&self, pt: Point) -> Option<&Zone> {
        self.zones
            .iter()
            .rev()
            .find(|zone| zone.contains(pt, self.zone_corner_radius))
    }
}
