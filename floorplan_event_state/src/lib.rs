// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=floorplan_event_state --heading-base-level=0

//! Floorplan Event State: pointer interaction state machines for the widget.
//!
//! This crate provides small, focused state machines for the two pointer
//! interactions the floor-plan widget needs to track across multiple events:
//!
//! - [`pan`]: drag-to-pan tracking that turns pointer movement into a view
//!   offset relative to the drag's start.
//! - [`tap`]: spatial click-vs-drag discrimination, so a press-and-release
//!   with little movement selects a zone while a real drag only pans.
//!
//! Each state machine is minimal, stateful but simple, and framework
//! agnostic: it accepts raw pointer positions and produces state queries that
//! a higher layer (the widget controller) interprets. Creation and teardown
//! follow the pointer's button: state exists only while the button is held,
//! and is discarded on release or when the pointer leaves the surface.
//!
//! ## Pan tracking
//!
//! ```rust
//! use floorplan_event_state::pan::PanState;
//! use kurbo::{Point, Vec2};
//!
//! let mut pan = PanState::new();
//!
//! // Press at (10, 10) while the view offset is zero.
//! pan.begin(Point::new(10.0, 10.0), Vec2::ZERO);
//!
//! // Each move yields the offset the view should adopt.
//! let offset = pan.offset_for(Point::new(40.0, 25.0)).unwrap();
//! assert_eq!(offset, Vec2::new(30.0, 15.0));
//!
//! // After release, moves are no-ops again.
//! pan.end();
//! assert!(pan.offset_for(Point::new(50.0, 50.0)).is_none());
//! ```
//!
//! ## Tap recognition
//!
//! ```rust
//! use floorplan_event_state::tap::TapState;
//! use kurbo::Point;
//!
//! let mut tap = TapState::new();
//!
//! tap.on_down(Point::new(100.0, 100.0));
//! tap.on_move(Point::new(101.0, 100.5));
//! // Released close to the press: this was a tap.
//! assert!(tap.on_up(Point::new(101.0, 100.5)).is_some());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
pub mod tap;
