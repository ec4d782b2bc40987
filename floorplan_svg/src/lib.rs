// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=floorplan_svg --heading-base-level=0

//! SVG export backend for the Floorplan widget.
//!
//! This crate renders a [`Scene`] as seen through a [`PlanViewport`] into an
//! SVG document string. The schematic is drawn in its fixed logical
//! coordinate space inside a single group carrying the viewport's
//! `translate(offset) scale(scale)` transform, exactly as the interactive
//! widget presents it: zoom and pan never touch zone geometry.
//!
//! The exported document contains:
//! - A hairline grid pattern filling the plan.
//! - Zones as rounded, gradient-filled rectangles with labels; the
//!   highlighted zone gets the accent stroke, with geometry identical to
//!   the others.
//! - Decorative dashed connector paths.
//! - The location marker: a solid accent dot plus the pulsing ring, either
//!   sampled at a fixed time ([`MarkerMotion::At`]) or emitted as SMIL
//!   `<animate>` elements ([`MarkerMotion::Smil`]) so the document animates
//!   on its own.
//!
//! This is intended for snapshots, demos, and host pages that can embed
//! SVG, not for pixel-perfect parity with any particular renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_scene::laboratorium;
//! use floorplan_svg::{MarkerMotion, SvgRenderer};
//! use floorplan_view::PlanViewport;
//! use kurbo::Size;
//!
//! let scene = laboratorium();
//! let viewport = PlanViewport::new();
//! let renderer = SvgRenderer::new();
//!
//! let svg = renderer.render(
//!     &scene,
//!     &viewport,
//!     Size::new(420.0, 420.0),
//!     None,
//!     MarkerMotion::At(0.0),
//! );
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{BezPath, PathEl, Size};
use peniko::Color;

use floorplan_scene::{Scene, Zone, ZoneId};
use floorplan_view::PlanViewport;

/// Spacing of the background grid, in plan units.
const GRID_SPACING: f64 = 20.0;

/// Stroke width of an idle zone outline.
const ZONE_STROKE_WIDTH: f64 = 1.0;
/// Stroke width of the highlighted zone outline.
const ZONE_STROKE_WIDTH_ACTIVE: f64 = 2.5;
/// Zone label offset from the zone's top-left corner.
const LABEL_OFFSET: (f64, f64) = (10.0, 24.0);
/// Zone label font size, in plan units.
const LABEL_FONT_SIZE: f64 = 12.0;

/// Colors used by the exported document.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Accent color: the marker and the highlighted zone stroke.
    pub accent: Color,
    /// Hairline color: the grid and idle zone strokes.
    pub hairline: Color,
    /// Connector path stroke.
    pub connector: Color,
    /// Zone label fill.
    pub label: Color,
    /// Start of the zone panel gradient.
    pub panel_start: Color,
    /// End of the zone panel gradient.
    pub panel_end: Color,
}

impl Default for Theme {
    /// The Laboratorium page palette: cherry accent over gray hairlines.
    fn default() -> Self {
        Self {
            accent: Color::from_rgb8(0x9C, 0x1B, 0x24),
            hairline: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            connector: Color::from_rgb8(0xD1, 0xD5, 0xDB),
            label: Color::from_rgb8(0x37, 0x41, 0x51),
            panel_start: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            panel_end: Color::from_rgb8(0xF9, 0xFA, 0xFB),
        }
    }
}

/// How the marker's pulsing ring is written into the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerMotion {
    /// Sample the pulse at `t` seconds and write a static ring.
    At(f64),
    /// Emit SMIL `<animate>` elements so the exported document pulses on
    /// its own, indefinitely.
    Smil,
}

/// Renders scenes to SVG documents.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    theme: Theme,
}

impl SvgRenderer {
    /// Creates a renderer with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with a custom theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the renderer's theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Exports `scene`, as seen through `viewport`, into an SVG document of
    /// the given view size.
    ///
    /// `highlight` names the zone to draw with the accent stroke (typically
    /// the widget's active zone); ids that match no zone simply highlight
    /// nothing.
    #[must_use]
    pub fn render(
        &self,
        scene: &Scene,
        viewport: &PlanViewport,
        view_size: Size,
        highlight: Option<&ZoneId>,
        motion: MarkerMotion,
    ) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = fmt_f64(view_size.width),
            h = fmt_f64(view_size.height),
        );

        self.write_defs(&mut out);

        // The whole plan is transformed in view space; plan coordinates are
        // never rewritten.
        let _ = write!(
            out,
            "<g transform=\"translate({} {}) scale({})\">",
            fmt_f64(viewport.offset().x),
            fmt_f64(viewport.offset().y),
            fmt_f64(viewport.scale()),
        );

        self.write_grid(&mut out, scene.size());
        for zone in scene.zones() {
            let active = highlight.is_some_and(|id| id == zone.id());
            self.write_zone(&mut out, zone, scene.zone_corner_radius(), active);
        }
        self.write_connectors(&mut out, scene.connectors());
        self.write_marker(&mut out, scene, motion);

        out.push_str("</g></svg>");
        out
    }

    fn write_defs(&self, out: &mut String) {
        out.push_str("<defs>");
        let _ = write!(
            out,
            "<pattern id=\"grid\" width=\"{s}\" height=\"{s}\" patternUnits=\"userSpaceOnUse\">\
             <path d=\"M {s} 0 L 0 0 0 {s}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\
             </pattern>",
            color_hex(self.theme.hairline),
            s = fmt_f64(GRID_SPACING),
        );
        let _ = write!(
            out,
            "<linearGradient id=\"panel\" x1=\"0\" x2=\"1\" y1=\"0\" y2=\"1\">\
             <stop offset=\"0%\" stop-color=\"{}\"/>\
             <stop offset=\"100%\" stop-color=\"{}\"/>\
             </linearGradient>",
            color_hex(self.theme.panel_start),
            color_hex(self.theme.panel_end),
        );
        out.push_str("</defs>");
    }

    fn write_grid(&self, out: &mut String, size: Size) {
        let _ = write!(
            out,
            "<rect width=\"{}\" height=\"{}\" fill=\"url(#grid)\"/>",
            fmt_f64(size.width),
            fmt_f64(size.height),
        );
    }

    fn write_zone(&self, out: &mut String, zone: &Zone, corner_radius: f64, active: bool) {
        let rect = zone.rect();
        let (stroke, stroke_width) = if active {
            (self.theme.accent, ZONE_STROKE_WIDTH_ACTIVE)
        } else {
            (self.theme.hairline, ZONE_STROKE_WIDTH)
        };
        out.push_str("<g>");
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" \
             fill=\"url(#panel)\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_f64(rect.x0),
            fmt_f64(rect.y0),
            fmt_f64(rect.width()),
            fmt_f64(rect.height()),
            fmt_f64(corner_radius),
            color_hex(stroke),
            fmt_f64(stroke_width),
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            fmt_f64(rect.x0 + LABEL_OFFSET.0),
            fmt_f64(rect.y0 + LABEL_OFFSET.1),
            fmt_f64(LABEL_FONT_SIZE),
            color_hex(self.theme.label),
            escape_text(zone.label()),
        );
        out.push_str("</g>");
    }

    fn write_connectors(&self, out: &mut String, connectors: &[BezPath]) {
        if connectors.is_empty() {
            return;
        }
        let _ = write!(
            out,
            "<g stroke=\"{}\" stroke-dasharray=\"4 4\" fill=\"none\">",
            color_hex(self.theme.connector),
        );
        for path in connectors {
            let _ = write!(out, "<path d=\"{}\"/>", bez_path_d(path));
        }
        out.push_str("</g>");
    }

    fn write_marker(&self, out: &mut String, scene: &Scene, motion: MarkerMotion) {
        let marker = scene.marker();
        let pulse = scene.pulse();
        let accent = color_hex(self.theme.accent);

        let _ = write!(
            out,
            "<g transform=\"translate({} {})\">",
            fmt_f64(marker.position().x),
            fmt_f64(marker.position().y),
        );
        let _ = write!(
            out,
            "<circle r=\"{}\" fill=\"{accent}\"/>",
            fmt_f64(floorplan_scene::Marker::DOT_RADIUS),
        );
        match motion {
            MarkerMotion::At(t) => {
                let sample = pulse.sample(t);
                let _ = write!(
                    out,
                    "<circle r=\"{}\" fill=\"none\" stroke=\"{accent}\" stroke-opacity=\"{}\"/>",
                    fmt_f64(sample.radius),
                    fmt_f64(sample.opacity),
                );
            }
            MarkerMotion::Smil => {
                let _ = write!(
                    out,
                    "<circle r=\"{r0}\" fill=\"none\" stroke=\"{accent}\" stroke-opacity=\"{o}\">\
                     <animate attributeName=\"r\" values=\"{r0};{r1};{r0}\" dur=\"{d}s\" repeatCount=\"indefinite\"/>\
                     <animate attributeName=\"stroke-opacity\" values=\"{o};0;{o}\" dur=\"{d}s\" repeatCount=\"indefinite\"/>\
                     </circle>",
                    r0 = fmt_f64(pulse.min_radius),
                    r1 = fmt_f64(pulse.max_radius),
                    o = fmt_f64(pulse.max_opacity),
                    d = fmt_f64(pulse.period),
                );
            }
        }
        out.push_str("</g>");
    }
}

fn bez_path_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_f64(p.x), fmt_f64(p.y));
            }
            PathEl::QuadTo(p1, p) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p.x),
                    fmt_f64(p.y)
                );
            }
            PathEl::CurveTo(p1, p2, p) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                    fmt_f64(p2.x),
                    fmt_f64(p2.y),
                    fmt_f64(p.x),
                    fmt_f64(p.y)
                );
            }
            PathEl::ClosePath => {
                d.push('Z');
            }
        }
    }
    d
}

fn color_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for snapshots.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-9 && diff < 1e-9 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{:.3}", v);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
