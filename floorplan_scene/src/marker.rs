// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::Point;

/// The "you are here" marker: a fixed plan coordinate plus a caption shown
/// in the widget's info overlay.
#[derive(Clone, Debug)]
pub struct Marker {
    position: Point,
    caption: String,
}

impl Marker {
    /// Radius of the marker's solid dot, in plan units.
    pub const DOT_RADIUS: f64 = 8.0;

    /// Creates a marker at a plan coordinate with an overlay caption.
    #[must_use]
    pub fn new(position: Point, caption: impl Into<String>) -> Self {
        Self {
            position,
            caption: caption.into(),
        }
    }

    /// Returns the marker's plan coordinate.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the overlay caption.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// The marker's pulsing ring, as a pure function of elapsed time.
///
/// Over each period the ring's radius grows from `min_radius` to
/// `max_radius` and shrinks back, while its opacity fades from
/// `max_opacity` to fully transparent and back, exactly out of phase with
/// the radius: the ring is most opaque when smallest. There is no state;
/// callers sample whenever they redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    /// Full cycle duration in seconds.
    pub period: f64,
    /// Ring radius at the start and end of a cycle, in plan units.
    pub min_radius: f64,
    /// Ring radius at the midpoint of a cycle, in plan units.
    pub max_radius: f64,
    /// Ring stroke opacity at the start and end of a cycle.
    pub max_opacity: f64,
}

/// One sampled pulse state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseSample {
    /// Ring radius in plan units.
    pub radius: f64,
    /// Ring stroke opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Pulse {
    /// Samples the pulse at `t` seconds of elapsed time.
    ///
    /// `t` may be any finite value; it wraps modulo the period, so negative
    /// and very large times are fine. Degenerate configurations (non-finite
    /// `t` or a non-positive period) return the cycle start state.
    #[must_use]
    pub fn sample(&self, t: f64) -> PulseSample {
        let start = PulseSample {
            radius: self.min_radius,
            opacity: self.max_opacity,
        };
        if !t.is_finite() || !(self.period > 0.0) {
            return start;
        }
        let cycles = t / self.period;
        let phase = cycles - cycles.floor();
        // Triangle wave: 0 at the cycle ends, 1 at the midpoint.
        let rise = 1.0 - (1.0 - 2.0 * phase).abs();
        PulseSample {
            radius: self.min_radius + (self.max_radius - self.min_radius) * rise,
            opacity: self.max_opacity * (1.0 - rise),
        }
    }
}

impl Default for Pulse {
    /// The widget's stock pulse: 18 → 34 plan units over a 2.2 s cycle,
    /// fading from 0.45 opacity to transparent.
    fn default() -> Self {
        Self {
            period: 2.2,
            min_radius: 18.0,
            max_radius: 34.0,
            max_opacity: 0.45,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cycle_endpoints() {
        let pulse = Pulse::default();

        let s = pulse.sample(0.0);
        assert!(close(s.radius, 18.0));
        assert!(close(s.opacity, 0.45));

        // Midpoint: fully grown, fully faded.
        let s = pulse.sample(1.1);
        assert!(close(s.radius, 34.0));
        assert!(close(s.opacity, 0.0));

        // End of cycle wraps back to the start state.
        let s = pulse.sample(2.2);
        assert!(close(s.radius, 18.0));
        assert!(close(s.opacity, 0.45));
    }

    #[test]
    fn periodicity() {
        let pulse = Pulse::default();
        for t in [0.3, 0.77, 1.5, 2.0] {
            let a = pulse.sample(t);
            let b = pulse.sample(t + 2.2);
            let c = pulse.sample(t + 22.0);
            assert!(close(a.radius, b.radius) && close(a.opacity, b.opacity));
            assert!(close(a.radius, c.radius) && close(a.opacity, c.opacity));
        }
    }

    #[test]
    fn negative_time_wraps() {
        let pulse = Pulse::default();
        let a = pulse.sample(-0.5);
        let b = pulse.sample(2.2 - 0.5);
        assert!(close(a.radius, b.radius));
        assert!(close(a.opacity, b.opacity));
    }

    #[test]
    fn radius_and_opacity_move_in_opposition() {
        let pulse = Pulse::default();
        let early = pulse.sample(0.2);
        let later = pulse.sample(0.8);
        assert!(later.radius > early.radius);
        assert!(later.opacity < early.opacity);
    }

    #[test]
    fn degenerate_inputs_return_the_start_state() {
        let pulse = Pulse::default();
        let s = pulse.sample(f64::NAN);
        assert!(close(s.radius, 18.0) && close(s.opacity, 0.45));

        let dead = Pulse {
            period: 0.0,
            ..Pulse::default()
        };
        let s = dead.sample(1.0);
        assert!(close(s.radius, 18.0) && close(s.opacity, 0.45));
    }
}
