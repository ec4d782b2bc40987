// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=floorplan_scene --heading-base-level=0

//! Floorplan Scene: the schematic model for the floor-plan widget.
//!
//! A scene is a fixed drawing in its own logical coordinate space: a set of
//! selectable rectangular [`Zone`]s, decorative connector paths, and a
//! location [`Marker`] with a continuously pulsing ring. The scene is
//! immutable for the session once configured; only the selection changes.
//!
//! This crate owns:
//! - The scene data model and its construction API.
//! - Zone hit testing against the rounded zone outline, topmost first.
//! - [`ActiveZone`], the at-most-one selection slot.
//! - The marker's [`Pulse`] as a pure function of elapsed time.
//! - [`laboratorium`], the layout shipped with the repository.
//!
//! It does **not** know about viewports or rendering; the viewport transform
//! lives in `floorplan_view` and callers convert pointer positions into plan
//! space before hit testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_scene::{ActiveZone, laboratorium};
//! use kurbo::Point;
//!
//! let scene = laboratorium();
//! let mut selection = ActiveZone::new();
//!
//! // A point inside the "Brew Bar" zone.
//! let zone = scene.zone_at(Point::new(100.0, 70.0)).unwrap();
//! assert_eq!(zone.label(), "Brew Bar");
//!
//! let id = zone.id().clone();
//! assert!(selection.select(&scene, &id));
//! assert_eq!(selection.selected(), Some(&id));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod laboratorium;
mod marker;
mod scene;
mod selection;
mod zone;

pub use laboratorium::laboratorium;
pub use marker::{Marker, Pulse, PulseSample};
pub use scene::Scene;
pub use selection::ActiveZone;
pub use zone::{Zone, ZoneId};
