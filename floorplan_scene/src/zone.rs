// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, RoundedRect, Shape};

/// Identifier of a zone within a scene.
///
/// Ids are short, human-chosen strings (`"bar"`, `"seating"`). They are
/// compared by equality only; no ordering or hashing constraints are imposed
/// on callers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    /// Creates an id from any string-ish value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable rectangular region of the plan.
///
/// Zones are defined in plan coordinates at configuration time and never
/// move or resize afterwards. They render as rounded rectangles; hit testing
/// uses the same rounded outline so the dead corners outside the rounding do
/// not count as part of the zone.
#[derive(Clone, Debug)]
pub struct Zone {
    id: ZoneId,
    label: String,
    rect: Rect,
}

impl Zone {
    /// Creates a zone from its id, display label, and plan-space rectangle.
    #[must_use]
    pub fn new(id: impl Into<ZoneId>, label: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            rect,
        }
    }

    /// Returns the zone's identifier.
    #[must_use]
    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the zone's rectangle in plan coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns `true` if the point lies inside the zone's rounded outline.
    #[must_use]
    pub fn contains(&self, pt: Point, corner_radius: f64) -> bool {
        RoundedRect::from_rect(self.rect, corner_radius).contains(pt)
    }
}
