// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition: spatial click-vs-drag discrimination.
//!
//! The widget starts a pan on every press, but a press-and-release that
//! barely moved should count as a click on whatever lies under it. This
//! module tracks a press and the pointer's excursion from it; a release
//! within the tolerance yields the press position, a release after real
//! movement yields nothing.
//!
//! The tolerance is spatial only. There is no clock in this stack, so no
//! temporal limit is applied; a long-held but motionless press still counts
//! as a tap, which matches how the selection gesture behaves in practice.

use kurbo::Point;

#[derive(Clone, Copy, Debug)]
struct Press {
    at: Point,
    moved_beyond: bool,
}

/// Tracks whether the gesture between a press and its release was a tap.
#[derive(Clone, Copy, Debug)]
pub struct TapState {
    tolerance_sq: f64,
    press: Option<Press>,
}

impl TapState {
    /// Default movement tolerance, in view pixels.
    pub const DEFAULT_TOLERANCE: f64 = 4.0;

    /// Creates a tap tracker with the default tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tolerance(Self::DEFAULT_TOLERANCE)
    }

    /// Creates a tap tracker with a custom movement tolerance.
    ///
    /// Negative tolerances are treated as zero.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            0.0
        };
        Self {
            tolerance_sq: tolerance * tolerance,
            press: None,
        }
    }

    /// Records a press at the given position.
    pub fn on_down(&mut self, pos: Point) {
        self.press = Some(Press {
            at: pos,
            moved_beyond: false,
        });
    }

    /// Feeds a pointer move. Once the pointer strays beyond the tolerance
    /// the gesture is committed as a drag and cannot become a tap again,
    /// even if the pointer returns to the press position.
    pub fn on_move(&mut self, pos: Point) {
        if let Some(press) = &mut self.press
            && (pos - press.at).hypot2() > self.tolerance_sq
        {
            press.moved_beyond = true;
        }
    }

    /// Records the release. Returns the press position if the whole gesture
    /// stayed within the tolerance, `None` otherwise. Either way the press
    /// state is cleared.
    pub fn on_up(&mut self, pos: Point) -> Option<Point> {
        let press = self.press.take()?;
        if press.moved_beyond || (pos - press.at).hypot2() > self.tolerance_sq {
            None
        } else {
            Some(press.at)
        }
    }

    /// Abandons the current press, if any. Used when the pointer leaves the
    /// surface mid-gesture.
    pub fn cancel(&mut self) {
        self.press = None;
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

impl Default for TapState {
    fn default() -> Self {
        Self::new()
    }
}
