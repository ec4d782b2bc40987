// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect};

use floorplan_event_state::pan::PanState;
use floorplan_event_state::tap::TapState;
use floorplan_scene::{ActiveZone, Scene, Zone, ZoneId};
use floorplan_view::{PlanViewport, PlanViewportDebugInfo, ZoomStep};

/// What the host should do with a wheel event it forwarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelResponse {
    /// The widget consumed the event; prevent the surrounding page from
    /// scrolling.
    Captured,
    /// The event was outside the widget (or the widget is not laid out yet);
    /// let it propagate.
    Passed,
}

/// The floor-plan widget controller.
///
/// Owns the full state tuple `{viewport, drag, tap, selection}` over an
/// immutable [`Scene`], plus the widget's on-screen rectangle once known.
/// All operations are infallible; malformed or premature input degrades to
/// a no-op.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    scene: Scene,
    viewport: PlanViewport,
    pan: PanState,
    tap: TapState,
    selection: ActiveZone,
    view_rect: Option<Rect>,
}

impl FloorPlan {
    /// Creates a controller over the given scene with a default viewport and
    /// no selection. The widget is unmounted until
    /// [`set_view_rect`](Self::set_view_rect) is called.
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            viewport: PlanViewport::new(),
            pan: PanState::new(),
            tap: TapState::new(),
            selection: ActiveZone::new(),
            view_rect: None,
        }
    }

    /// Reports the widget's on-screen rectangle, in window coordinates.
    ///
    /// Until this is called, every pointer and wheel event is a no-op.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = Some(rect);
    }

    /// Returns the widget's on-screen rectangle, if layout has happened.
    #[must_use]
    pub fn view_rect(&self) -> Option<Rect> {
        self.view_rect
    }

    /// Returns the scene this widget presents.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the current viewport transform state.
    #[must_use]
    pub fn viewport(&self) -> &PlanViewport {
        &self.viewport
    }

    /// Pointer button pressed at a window-space position.
    ///
    /// Begins a pan drag anchored at the current offset and arms tap
    /// recognition. No visual effect on its own.
    pub fn on_pointer_down(&mut self, pos: Point) {
        let Some(local) = self.to_local(pos) else {
            return;
        };
        self.pan.begin(local, self.viewport.offset());
        self.tap.on_down(local);
    }

    /// Pointer moved to a window-space position.
    ///
    /// While a drag is active this pans the view so the plan tracks the
    /// pointer; otherwise it is a no-op.
    pub fn on_pointer_move(&mut self, pos: Point) {
        let Some(local) = self.to_local(pos) else {
            return;
        };
        if let Some(offset) = self.pan.offset_for(local) {
            self.viewport.set_offset(offset);
        }
        self.tap.on_move(local);
    }

    /// Pointer button released at a window-space position.
    ///
    /// Ends the drag. If the whole gesture stayed within the tap tolerance,
    /// the zone under the press (through the inverse viewport transform)
    /// becomes the active zone; a tap over empty plan leaves the selection
    /// as it was.
    pub fn on_pointer_up(&mut self, pos: Point) {
        self.pan.end();
        let Some(local) = self.to_local(pos) else {
            self.tap.cancel();
            return;
        };
        if let Some(press) = self.tap.on_up(local) {
            let plan_pt = self.viewport.view_to_plan_point(press);
            let hit = self.scene.zone_at(plan_pt).map(|zone| zone.id().clone());
            if let Some(id) = hit {
                self.selection.select(&self.scene, &id);
            }
        }
    }

    /// Pointer left the widget.
    ///
    /// Treated identically to a release as far as the drag is concerned, so
    /// the widget can never end up with a stuck drag; the pending tap, if
    /// any, is abandoned rather than completed.
    pub fn on_pointer_leave(&mut self) {
        self.pan.end();
        self.tap.cancel();
    }

    /// Wheel scrolled at a window-space position.
    ///
    /// When the pointer is over the mounted widget the event is captured
    /// and, for a non-zero delta, performs an anchored zoom at the cursor
    /// with the wheel factors. Events outside the widget (or before layout)
    /// pass through untouched.
    pub fn on_wheel(&mut self, pos: Point, delta_y: f64) -> WheelResponse {
        let Some(rect) = self.view_rect else {
            return WheelResponse::Passed;
        };
        if !rect.contains(pos) {
            return WheelResponse::Passed;
        }
        if let Some(step) = ZoomStep::from_wheel(delta_y) {
            let local = (pos - rect.origin()).to_point();
            self.viewport.zoom_about(local, step.factor());
        }
        WheelResponse::Captured
    }

    /// The discrete zoom-in control.
    ///
    /// Rescales about the plan origin's screen position, leaving the offset
    /// untouched, with the control factor (1.1).
    pub fn zoom_in(&mut self) {
        self.zoom_step(ZoomStep::StepIn);
    }

    /// The discrete zoom-out control (factor 0.9).
    pub fn zoom_out(&mut self) {
        self.zoom_step(ZoomStep::StepOut);
    }

    fn zoom_step(&mut self, step: ZoomStep) {
        let anchor = self.viewport.offset().to_point();
        self.viewport.zoom_about(anchor, step.factor());
    }

    /// Programmatically selects a zone by id.
    ///
    /// Unknown ids leave the selection unchanged; the return value reports
    /// whether the id was known.
    pub fn select_zone(&mut self, id: &ZoneId) -> bool {
        self.selection.select(&self.scene, id)
    }

    /// Returns the active zone, if any.
    #[must_use]
    pub fn selected_zone(&self) -> Option<&Zone> {
        self.selection
            .selected()
            .and_then(|id| self.scene.zone(id))
    }

    /// Returns the active zone's id, if any.
    #[must_use]
    pub fn selected_zone_id(&self) -> Option<&ZoneId> {
        self.selection.selected()
    }

    /// The info overlay's fixed caption (the marker's).
    #[must_use]
    pub fn overlay_caption(&self) -> &str {
        self.scene.marker().caption()
    }

    /// The info overlay's selection line, present while a zone is active.
    #[must_use]
    pub fn overlay_selection(&self) -> Option<String> {
        self.selected_zone()
            .map(|zone| format!("Selected: {}", zone.label()))
    }

    /// Snapshot of the widget state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> FloorPlanDebugInfo {
        FloorPlanDebugInfo {
            view_rect: self.view_rect,
            viewport: self.viewport.debug_info(),
            panning: self.pan.is_panning(),
            pressed: self.tap.is_pressed(),
            selected: self.selection.selected().cloned(),
            selection_revision: self.selection.revision(),
        }
    }

    fn to_local(&self, pos: Point) -> Option<Point> {
        let rect = self.view_rect?;
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return None;
        }
        Some((pos - rect.origin()).to_point())
    }
}

/// Debug snapshot of a [`FloorPlan`] state.
#[derive(Clone, Debug)]
pub struct FloorPlanDebugInfo {
    /// On-screen rectangle, if layout has happened.
    pub view_rect: Option<Rect>,
    /// Viewport transform state.
    pub viewport: PlanViewportDebugInfo,
    /// Whether a pan drag is in progress.
    pub panning: bool,
    /// Whether a press is being tracked for tap recognition.
    pub pressed: bool,
    /// The active zone id, if any.
    pub selected: Option<ZoneId>,
    /// Selection revision counter.
    pub selection_revision: u64,
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use floorplan_scene::laboratorium;

    use super::*;

    fn mounted_plan() -> FloorPlan {
        let mut plan = FloorPlan::new(laboratorium());
        plan.set_view_rect(Rect::new(0.0, 0.0, 420.0, 420.0));
        plan
    }

    #[test]
    fn drag_pans_by_the_pointer_delta() {
        let mut plan = mounted_plan();

        plan.on_pointer_down(Point::new(10.0, 10.0));
        plan.on_pointer_move(Point::new(40.0, 25.0));
        assert_eq!(plan.viewport().offset(), Vec2::new(30.0, 15.0));

        // Moves track the pointer absolutely, not incrementally.
        plan.on_pointer_move(Point::new(20.0, 10.0));
        assert_eq!(plan.viewport().offset(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn drag_lifecycle() {
        let mut plan = mounted_plan();

        // Move before any press is a no-op.
        plan.on_pointer_move(Point::new(40.0, 25.0));
        assert_eq!(plan.viewport().offset(), Vec2::ZERO);

        plan.on_pointer_down(Point::new(10.0, 10.0));
        plan.on_pointer_move(Point::new(40.0, 25.0));
        plan.on_pointer_up(Point::new(40.0, 25.0));
        let after_release = plan.viewport().offset();

        // Released: further moves change nothing until the next press.
        plan.on_pointer_move(Point::new(200.0, 200.0));
        assert_eq!(plan.viewport().offset(), after_release);
        assert!(!plan.debug_info().panning);
    }

    #[test]
    fn pointer_leave_ends_the_drag_like_a_release() {
        let mut plan = mounted_plan();

        plan.on_pointer_down(Point::new(10.0, 10.0));
        plan.on_pointer_move(Point::new(30.0, 30.0));
        plan.on_pointer_leave();

        let offset = plan.viewport().offset();
        plan.on_pointer_move(Point::new(300.0, 300.0));
        assert_eq!(plan.viewport().offset(), offset);
        assert!(!plan.debug_info().panning);
        assert!(plan.selected_zone().is_none());
    }

    #[test]
    fn tap_selects_the_zone_under_the_cursor() {
        let mut plan = mounted_plan();

        // (130, 85) lies inside "Brew Bar" under the identity transform.
        plan.on_pointer_down(Point::new(130.0, 85.0));
        plan.on_pointer_up(Point::new(130.0, 85.0));

        assert_eq!(plan.selected_zone().unwrap().label(), "Brew Bar");
        assert_eq!(
            plan.overlay_selection().as_deref(),
            Some("Selected: Brew Bar")
        );
    }

    #[test]
    fn tap_hit_testing_respects_the_viewport_transform() {
        let mut plan = mounted_plan();

        // Pan the plan 100 px right; the bar zone now sits 100 px further
        // right in view space.
        plan.on_pointer_down(Point::new(300.0, 400.0));
        plan.on_pointer_move(Point::new(400.0, 400.0));
        plan.on_pointer_up(Point::new(400.0, 400.0));
        assert_eq!(plan.viewport().offset(), Vec2::new(100.0, 0.0));

        // The old position is now empty plan space.
        plan.on_pointer_down(Point::new(130.0, 85.0));
        plan.on_pointer_up(Point::new(130.0, 85.0));
        assert!(plan.selected_zone().is_none());

        // The shifted position hits the bar.
        plan.on_pointer_down(Point::new(230.0, 85.0));
        plan.on_pointer_up(Point::new(230.0, 85.0));
        assert_eq!(plan.selected_zone().unwrap().label(), "Brew Bar");
    }

    #[test]
    fn a_real_drag_does_not_select() {
        let mut plan = mounted_plan();

        plan.on_pointer_down(Point::new(130.0, 85.0));
        plan.on_pointer_move(Point::new(180.0, 120.0));
        plan.on_pointer_up(Point::new(180.0, 120.0));

        assert!(plan.selected_zone().is_none());
    }

    #[test]
    fn tap_on_empty_plan_keeps_the_previous_selection() {
        let mut plan = mounted_plan();
        assert!(plan.select_zone(&ZoneId::new("bar")));

        // (400, 290) is outside every zone.
        plan.on_pointer_down(Point::new(400.0, 290.0));
        plan.on_pointer_up(Point::new(400.0, 290.0));

        assert_eq!(plan.selected_zone_id(), Some(&ZoneId::new("bar")));
    }

    #[test]
    fn selection_is_exclusive_and_ignores_unknown_ids() {
        let mut plan = mounted_plan();

        assert!(plan.select_zone(&ZoneId::new("bar")));
        assert!(plan.select_zone(&ZoneId::new("lab")));
        assert_eq!(plan.selected_zone_id(), Some(&ZoneId::new("lab")));

        assert!(!plan.select_zone(&ZoneId::new("patio")));
        assert_eq!(plan.selected_zone_id(), Some(&ZoneId::new("lab")));
    }

    #[test]
    fn wheel_zoom_is_anchored_at_the_cursor() {
        let mut plan = mounted_plan();

        let response = plan.on_wheel(Point::new(100.0, 50.0), -120.0);
        assert_eq!(response, WheelResponse::Captured);
        assert!((plan.viewport().scale() - 1.06).abs() < 1e-12);

        // offset = cursor - cursor * 1.06 = (-6, -3).
        let offset = plan.viewport().offset();
        assert!((offset.x - -6.0).abs() < 1e-9);
        assert!((offset.y - -3.0).abs() < 1e-9);
    }

    #[test]
    fn wheel_outside_the_widget_passes_through() {
        let mut plan = mounted_plan();
        let response = plan.on_wheel(Point::new(1000.0, 10.0), -120.0);
        assert_eq!(response, WheelResponse::Passed);
        assert!((plan.viewport().scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wheel_with_zero_delta_is_captured_but_does_not_move() {
        let mut plan = mounted_plan();
        let response = plan.on_wheel(Point::new(100.0, 50.0), 0.0);
        assert_eq!(response, WheelResponse::Captured);
        assert!((plan.viewport().scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_controls_use_their_own_factors_and_keep_the_offset() {
        let mut plan = mounted_plan();

        plan.zoom_in();
        assert!((plan.viewport().scale() - 1.1).abs() < 1e-12);
        assert_eq!(plan.viewport().offset(), Vec2::ZERO);

        plan.zoom_out();
        assert!((plan.viewport().scale() - 0.99).abs() < 1e-12);
        assert_eq!(plan.viewport().offset(), Vec2::ZERO);
    }

    #[test]
    fn zoom_controls_keep_the_offset_even_when_panned() {
        let mut plan = mounted_plan();
        plan.on_pointer_down(Point::new(0.0, 0.0));
        plan.on_pointer_move(Point::new(25.0, 40.0));
        plan.on_pointer_up(Point::new(25.0, 40.0));

        let offset = plan.viewport().offset();
        plan.zoom_in();
        assert_eq!(plan.viewport().offset(), offset);
    }

    #[test]
    fn events_before_layout_are_no_ops() {
        let mut plan = FloorPlan::new(laboratorium());
        let before = plan.viewport().debug_info();

        plan.on_pointer_down(Point::new(10.0, 10.0));
        plan.on_pointer_move(Point::new(40.0, 25.0));
        plan.on_pointer_up(Point::new(40.0, 25.0));
        assert_eq!(plan.on_wheel(Point::new(10.0, 10.0), -120.0), WheelResponse::Passed);

        let after = plan.viewport().debug_info();
        assert_eq!(after.scale, before.scale);
        assert_eq!(after.offset, before.offset);
        assert!(plan.selected_zone().is_none());
        assert!(!plan.debug_info().panning);
    }

    #[test]
    fn view_rect_origin_offsets_incoming_positions() {
        let mut plan = FloorPlan::new(laboratorium());
        plan.set_view_rect(Rect::new(50.0, 100.0, 470.0, 520.0));

        // Window (180, 185) is local (130, 85): inside "Brew Bar".
        plan.on_pointer_down(Point::new(180.0, 185.0));
        plan.on_pointer_up(Point::new(180.0, 185.0));
        assert_eq!(plan.selected_zone().unwrap().label(), "Brew Bar");
    }

    #[test]
    fn overlay_strings() {
        let mut plan = mounted_plan();
        assert_eq!(plan.overlay_caption(), "You are here: Alloy Ave & 9th");
        assert_eq!(plan.overlay_selection(), None);

        plan.select_zone(&ZoneId::new("roaster"));
        assert_eq!(
            plan.overlay_selection().as_deref(),
            Some("Selected: Roaster")
        );
    }

    #[test]
    fn scale_stays_clamped_through_the_widget_surface() {
        let mut plan = mounted_plan();
        for _ in 0..50 {
            plan.zoom_in();
            plan.on_wheel(Point::new(100.0, 100.0), -120.0);
        }
        assert!((plan.viewport().scale() - 2.2).abs() < 1e-12);
        for _ in 0..100 {
            plan.zoom_out();
            plan.on_wheel(Point::new(100.0, 100.0), 120.0);
        }
        assert!((plan.viewport().scale() - 0.7).abs() < 1e-12);
    }
}
