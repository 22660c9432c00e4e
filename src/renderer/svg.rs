//! Top-down SVG preview of ring placements
//!
//! The preview looks down the ring axis: every ring is drawn as a guide
//! circle, every object as a labelled marker. Scene +Y points up on screen.
//! Face-center placements also get a short tick along their final heading.

use crate::layout::{ObjectHandle, Placement, Point3, ZRotation};

use super::SvgConfig;

/// Ring colours, cycled by ring index
const RING_COLORS: [&str; 6] = [
    "#2196f3", "#ff9800", "#4caf50", "#f44336", "#9c27b0", "#607d8b",
];

/// Screen-space bounds of the drawing
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn around(x: f64, y: f64, r: f64) -> Self {
        Self {
            min_x: x - r,
            min_y: y - r,
            max_x: x + r,
            max_y: y + r,
        }
    }

    fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    guides: Vec<String>,
    markers: Vec<String>,
    bounds: Option<Bounds>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            guides: vec![],
            markers: vec![],
            bounds: None,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Scene point to screen coordinates (y flipped)
    fn project(&self, point: &Point3) -> (f64, f64) {
        (point.x * self.config.scale, -point.y * self.config.scale)
    }

    fn include(&mut self, bounds: Bounds) {
        self.bounds = Some(match self.bounds {
            Some(existing) => existing.union(&bounds),
            None => bounds,
        });
    }

    /// Add one CSS rule per ring colour
    pub fn add_ring_styles(&mut self, rings: usize) {
        let prefix = self.prefix();
        for ring in 0..rings {
            let color = RING_COLORS[ring % RING_COLORS.len()];
            self.styles.push(format!(
                ".{p}ring-{r} {{ stroke: {c}; }} .{p}marker.{p}ring-{r} {{ fill: {c}; }}",
                p = prefix,
                r = ring,
                c = color
            ));
        }
    }

    /// Add a ring guide circle around `center`
    pub fn add_ring_guide(&mut self, center: &Point3, radius: f64, ring: usize) {
        let prefix = self.prefix();
        let (cx, cy) = self.project(center);
        let r = radius * self.config.scale;
        self.include(Bounds::around(cx, cy, r));
        self.guides.push(format!(
            r#"{}<circle class="{p}guide {p}ring-{}" cx="{}" cy="{}" r="{}" fill="none"/>"#,
            self.indent_str(),
            ring,
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r),
            p = prefix
        ));
    }

    /// Add an object marker with its label and, for absolute rotations, a heading tick
    pub fn add_marker(&mut self, name: &str, position: &Point3, ring: usize, rotation: &ZRotation) {
        let prefix = self.prefix();
        let (cx, cy) = self.project(position);
        let r = self.config.marker_radius;
        self.include(Bounds::around(cx, cy, 2.0 * r));

        let indent = self.indent_str().to_string();
        self.markers.push(format!(
            r#"{}<circle class="{p}marker {p}ring-{}" cx="{}" cy="{}" r="{}"><title>{}</title></circle>"#,
            indent,
            ring,
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r),
            escape_xml(name),
            p = prefix
        ));

        if let ZRotation::Absolute(angle) = rotation {
            let tip_x = cx + 2.0 * r * angle.cos();
            let tip_y = cy - 2.0 * r * angle.sin();
            self.markers.push(format!(
                r#"{}<line class="{p}heading" x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
                indent,
                fmt_num(cx),
                fmt_num(cy),
                fmt_num(tip_x),
                fmt_num(tip_y),
                p = prefix
            ));
        }

        self.markers.push(format!(
            r#"{}<text class="{p}label" x="{}" y="{}" font-size="{}">{}</text>"#,
            indent,
            fmt_num(cx + r * 1.5),
            fmt_num(cy - r * 1.5),
            fmt_num(r * 1.8),
            escape_xml(name),
            p = prefix
        ));
    }

    /// Assemble the final SVG document
    pub fn build(self) -> String {
        let bounds = self.bounds.unwrap_or(Bounds::around(0.0, 0.0, 0.0));
        let padding = self.config.viewbox_padding;
        let vb_x = bounds.min_x - padding;
        let vb_y = bounds.min_y - padding;
        let vb_w = bounds.max_x - bounds.min_x + 2.0 * padding;
        let vb_h = bounds.max_y - bounds.min_y + 2.0 * padding;

        let nl = self.newline();
        let mut svg = String::new();

        if self.config.xml_declaration {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            fmt_num(vb_x),
            fmt_num(vb_y),
            fmt_num(vb_w),
            fmt_num(vb_h)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str(self.indent_str());
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(self.indent_str());
                svg.push_str(self.indent_str());
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(self.indent_str());
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        // Guides first so markers draw on top
        for elem in self.guides.iter().chain(&self.markers) {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a top-down preview of `placements` around `origin`
pub fn render_svg<O: ObjectHandle>(
    placements: &[Placement<O>],
    origin: &Point3,
    config: &SvgConfig,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let rings = placements.iter().map(|p| p.ring + 1).max().unwrap_or(0);
    builder.add_ring_styles(rings);

    // Placements arrive ordered by ring and every slot of a ring shares one
    // radius, so the first placement of each ring sizes its guide
    let mut last_ring = None;
    for placement in placements {
        if last_ring != Some(placement.ring) {
            last_ring = Some(placement.ring);
            let radius = placement.position.planar_distance(origin);
            builder.add_ring_guide(origin, radius, placement.ring);
        }
    }

    for placement in placements {
        builder.add_marker(
            placement.name(),
            &placement.position,
            placement.ring,
            &placement.rotation,
        );
    }

    builder.build()
}

/// Format a coordinate with at most two decimals, without a negative zero
fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
