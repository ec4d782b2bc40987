// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Viewport over the fixed plan coordinate space.
///
/// `PlanViewport` tracks a uniform scale plus a view-space offset and keeps
/// the derived plan↔view transforms in sync. The rendered plan is drawn in
/// its own fixed coordinate space and then transformed by
/// `translate(offset) ∘ scale(scale)` with the origin at the plan's top-left
/// corner; zone geometry is never mutated.
///
/// The scale is clamped into `[min_scale, max_scale]` on every mutation, not
/// just at construction, so no sequence of zoom operations can leave the
/// configured range.
#[derive(Clone, Debug)]
pub struct PlanViewport {
    scale: f64,
    offset: Vec2,
    min_scale: f64,
    max_scale: f64,
    plan_to_view: Affine,
    view_to_plan: Affine,
}

impl PlanViewport {
    /// Default minimum scale.
    pub const DEFAULT_MIN_SCALE: f64 = 0.7;
    /// Default maximum scale.
    pub const DEFAULT_MAX_SCALE: f64 = 2.2;
    /// Default (initial) scale.
    pub const DEFAULT_SCALE: f64 = 1.0;

    /// Creates a viewport with the default scale, zero offset, and the
    /// default scale bounds.
    #[must_use]
    pub fn new() -> Self {
        let mut vp = Self {
            scale: Self::DEFAULT_SCALE,
            offset: Vec2::ZERO,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            plan_to_view: Affine::IDENTITY,
            view_to_plan: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current offset in view pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the minimum allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the maximum allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min <= max`. The current
    /// scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_scale = min;
        self.max_scale = max;
        self.set_scale(self.scale);
    }

    /// Sets the scale, clamping it into the configured range.
    ///
    /// The offset is left untouched, so the fixed point of this rescale is
    /// the plan origin's position in view space.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
    }

    /// Replaces the offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        if !(offset.x.is_finite() && offset.y.is_finite()) {
            return;
        }
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
    }

    /// Pans the view by a delta in view space.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.set_offset(self.offset + delta);
    }

    /// Zooms by `factor` around a given anchor point in view coordinates.
    ///
    /// The plan point currently under `anchor` remains under `anchor` after
    /// the rescale:
    ///
    /// `offset' = anchor - (anchor - offset) * (scale' / scale)`
    ///
    /// The resulting scale is clamped into the configured range; the anchor
    /// invariant holds for any anchor, in both directions, and under
    /// repeated application. Non-finite or non-positive factors are ignored.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        if !(anchor.x.is_finite() && anchor.y.is_finite()) {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }
        let anchor = anchor.to_vec2();
        self.offset = anchor - (anchor - self.offset) * (new_scale / old_scale);
        self.scale = new_scale;
        self.rebuild_transforms();
    }

    /// Returns the plan→view transform, `translate(offset) ∘ scale(scale)`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.plan_to_view
    }

    /// Converts a plan-space point into view coordinates.
    #[must_use]
    pub fn plan_to_view_point(&self, pt: Point) -> Point {
        self.plan_to_view * pt
    }

    /// Converts a view-space point into plan coordinates.
    #[must_use]
    pub fn view_to_plan_point(&self, pt: Point) -> Point {
        self.view_to_plan * pt
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlanViewportDebugInfo {
        PlanViewportDebugInfo {
            scale: self.scale,
            offset: self.offset,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn rebuild_transforms(&mut self) {
        self.plan_to_view = Affine::translate(self.offset) * Affine::scale(self.scale);
        self.view_to_plan = self.plan_to_view.inverse();
    }
}

impl Default for PlanViewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`PlanViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct PlanViewportDebugInfo {
    /// Current uniform scale.
    pub scale: f64,
    /// Current offset in view pixels.
    pub offset: Vec2,
    /// Minimum allowed scale.
    pub min_scale: f64,
    /// Maximum allowed scale.
    pub max_scale: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::PlanViewport;

    #[test]
    fn anchored_zoom_matches_the_closed_form() {
        let mut vp = PlanViewport::new();

        // scale=1, offset=(0,0), cursor (100, 50), factor 1.1:
        // offset' = (100 - 100 * 1.1, 50 - 50 * 1.1) = (-10, -5).
        vp.zoom_about(Point::new(100.0, 50.0), 1.1);

        assert!((vp.scale() - 1.1).abs() < 1e-12);
        assert!((vp.offset().x - -10.0).abs() < 1e-9);
        assert!((vp.offset().y - -5.0).abs() < 1e-9);
    }

    #[test]
    fn anchored_zoom_keeps_the_anchor_fixed_under_the_forward_transform() {
        let mut vp = PlanViewport::new();
        vp.set_offset(Vec2::new(17.0, -6.0));
        vp.zoom_about(Point::new(80.0, 120.0), 1.06);

        let anchor = Point::new(100.0, 50.0);
        let plan_under_anchor = vp.view_to_plan_point(anchor);

        vp.zoom_about(anchor, 1.1);
        let back = vp.plan_to_view_point(plan_under_anchor);
        assert!((back - anchor).hypot() < 1e-9);

        vp.zoom_about(anchor, 0.9);
        let back = vp.plan_to_view_point(plan_under_anchor);
        assert!((back - anchor).hypot() < 1e-9);
    }

    #[test]
    fn scale_never_leaves_the_configured_range() {
        let mut vp = PlanViewport::new();
        let anchor = Point::new(33.0, 44.0);

        for factor in [0.5, 3.0, 1.06, 0.94, 10.0, 0.01, 1.5, 0.9] {
            vp.zoom_about(anchor, factor);
            assert!(
                vp.scale() >= PlanViewport::DEFAULT_MIN_SCALE
                    && vp.scale() <= PlanViewport::DEFAULT_MAX_SCALE,
                "scale {} escaped the clamp range",
                vp.scale()
            );
        }
    }

    #[test]
    fn repeated_zoom_in_converges_to_the_upper_bound() {
        let mut vp = PlanViewport::new();
        let anchor = Point::new(10.0, 10.0);

        for _ in 0..20 {
            vp.zoom_about(anchor, 1.5);
            assert!(
                vp.scale() <= PlanViewport::DEFAULT_MAX_SCALE,
                "scale overshot the maximum"
            );
        }
        assert!((vp.scale() - PlanViewport::DEFAULT_MAX_SCALE).abs() < 1e-12);

        // Once pinned at the bound, further zooming is a no-op, offset included.
        let offset = vp.offset();
        vp.zoom_about(anchor, 1.5);
        assert_eq!(vp.offset(), offset);
    }

    #[test]
    fn repeated_zoom_out_converges_to_the_lower_bound() {
        let mut vp = PlanViewport::new();
        for _ in 0..20 {
            vp.zoom_about(Point::new(0.0, 0.0), 0.5);
        }
        assert!((vp.scale() - PlanViewport::DEFAULT_MIN_SCALE).abs() < 1e-12);
    }

    #[test]
    fn degenerate_factors_are_ignored() {
        let mut vp = PlanViewport::new();
        let before = vp.debug_info();

        vp.zoom_about(Point::new(5.0, 5.0), 0.0);
        vp.zoom_about(Point::new(5.0, 5.0), -1.0);
        vp.zoom_about(Point::new(5.0, 5.0), f64::NAN);
        vp.zoom_about(Point::new(5.0, 5.0), f64::INFINITY);
        vp.zoom_about(Point::new(f64::NAN, 5.0), 1.1);

        assert_eq!(vp.scale(), before.scale);
        assert_eq!(vp.offset(), before.offset);
    }

    #[test]
    fn pan_accumulates_in_view_space() {
        let mut vp = PlanViewport::new();
        vp.pan_by(Vec2::new(30.0, 15.0));
        vp.pan_by(Vec2::new(-10.0, 5.0));
        assert_eq!(vp.offset(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn set_scale_limits_normalizes_and_reclamps() {
        let mut vp = PlanViewport::new();
        vp.set_scale(2.2);
        vp.set_scale_limits(1.5, 0.8);
        assert!((vp.min_scale() - 0.8).abs() < 1e-12);
        assert!((vp.max_scale() - 1.5).abs() < 1e-12);
        assert!((vp.scale() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn plan_view_roundtrip() {
        let mut vp = PlanViewport::new();
        vp.set_offset(Vec2::new(12.0, -7.0));
        vp.set_scale(1.3);

        let plan_pt = Point::new(250.0, 120.0);
        let view_pt = vp.plan_to_view_point(plan_pt);
        let back = vp.view_to_plan_point(view_pt);
        assert!((back - plan_pt).hypot() < 1e-9);
    }
}
