// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan state: compute view offsets from pointer movement.
//!
//! A pan is anchored at its starting conditions: the pointer position at
//! press time and the view offset at press time. Every subsequent pointer
//! position maps to `origin + (pointer - start)`, so the plan follows the
//! pointer exactly, independent of how many move events arrive in between.

use kurbo::{Point, Vec2};

/// The record of an in-progress pan drag.
///
/// Created on press and carried until release; holds the pointer position
/// the drag started at and the view offset in effect at that moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanDrag {
    /// Pointer position at press time, in view coordinates.
    pub start: Point,
    /// View offset at press time.
    pub origin: Vec2,
}

impl PanDrag {
    /// Returns the view offset for the given pointer position:
    /// `origin + (pointer - start)`.
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Vec2 {
        self.origin + (pointer - self.start)
    }
}

/// Tracks whether a pan drag is in progress.
///
/// The drag record exists only while the pointer button is held: [`begin`]
/// creates it, [`end`] discards it, and queries on an idle state return
/// `None` so that stray move events degrade to no-ops.
///
/// [`begin`]: PanState::begin
/// [`end`]: PanState::end
#[derive(Clone, Copy, Debug, Default)]
pub struct PanState {
    drag: Option<PanDrag>,
}

impl PanState {
    /// Creates an idle pan state.
    #[must_use]
    pub const fn new() -> Self {
        Self { drag: None }
    }

    /// Starts a drag from the given pointer position and current view offset.
    ///
    /// A begin while a drag is already active restarts the drag from the new
    /// conditions.
    pub fn begin(&mut self, pointer: Point, origin: Vec2) {
        self.drag = Some(PanDrag {
            start: pointer,
            origin,
        });
    }

    /// Returns the offset the view should adopt for this pointer position,
    /// or `None` when no drag is active.
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Option<Vec2> {
        self.drag.map(|drag| drag.offset_for(pointer))
    }

    /// Ends the current drag, if any.
    ///
    /// Called on pointer release and on the pointer leaving the surface, so
    /// a drag can never outlive the button being held.
    pub fn end(&mut self) {
        self.drag = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns the active drag record, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&PanDrag> {
        self.drag.as_ref()
    }
}
