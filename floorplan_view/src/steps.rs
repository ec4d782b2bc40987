// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A discrete zoom step, keyed by the input method that produced it.
///
/// The widget's two zoom inputs use observably different factors: wheel
/// scrolling applies a gentle continuous factor, while the discrete +/-
/// controls apply a larger one. Both families are kept distinct here rather
/// than unified, since behavior differs per input method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    /// One wheel notch toward the plan (factor 1.06).
    WheelIn,
    /// One wheel notch away from the plan (factor 0.94).
    WheelOut,
    /// The discrete zoom-in control (factor 1.1).
    StepIn,
    /// The discrete zoom-out control (factor 0.9).
    StepOut,
}

impl ZoomStep {
    /// Returns the multiplicative scale factor for this step.
    ///
    /// Factors greater than one zoom in; factors below one zoom out.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::WheelIn => 1.06,
            Self::WheelOut => 0.94,
            Self::StepIn => 1.1,
            Self::StepOut => 0.9,
        }
    }

    /// Maps a wheel delta (positive = scrolling down/away) to a wheel step.
    ///
    /// Returns `None` for zero or non-finite deltas, which carry no motion.
    #[must_use]
    pub fn from_wheel(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        if delta_y < 0.0 {
            Some(Self::WheelIn)
        } else {
            Some(Self::WheelOut)
        }
    }
}
