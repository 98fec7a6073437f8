//! SVG generation from draw primitives

use crate::layout::Point;

use super::config::SvgConfig;
use super::primitives::{Primitive, Stroke};

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
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

    /// Add a polyline element
    pub fn add_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        let prefix = self.prefix();
        let points_str: String = points
            .iter()
            .map(|p| format!("{},{}", fmt(p.x), fmt(p.y)))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polyline class="{}polyline" points="{}" fill="none"{}/>"#,
            self.indent_str(),
            prefix,
            points_str,
            stroke_attrs(stroke)
        ));
    }

    /// Add a line element
    pub fn add_segment(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<line class="{}line" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            prefix,
            fmt(from.x),
            fmt(from.y),
            fmt(to.x),
            fmt(to.y),
            stroke_attrs(stroke)
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, center: Point, radius: f64, fill: &str, stroke: Option<&Stroke>) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}station" cx="{}" cy="{}" r="{}" fill="{}"{}/>"#,
            self.indent_str(),
            prefix,
            fmt(center.x),
            fmt(center.y),
            fmt(radius),
            fill,
            stroke.map(stroke_attrs).unwrap_or_default()
        ));
    }

    /// Add a text element, optionally over a background panel
    pub fn add_text(
        &mut self,
        position: Point,
        content: &str,
        size: f64,
        color: &str,
        background: Option<(&crate::layout::Rect, &str)>,
    ) {
        let prefix = self.prefix();
        if let Some((rect, fill)) = background {
            self.elements.push(format!(
                r#"{}<rect class="{}label-bg" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                self.indent_str(),
                prefix,
                fmt(rect.x),
                fmt(rect.y),
                fmt(rect.width),
                fmt(rect.height),
                fill
            ));
        }
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            fmt(position.x),
            fmt(position.y),
            fmt(size),
            color,
            escape_xml(content)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64, background: Option<&str>) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            fmt(width),
            fmt(height)
        ));
        svg.push_str(nl);

        if let Some(fill) = background {
            svg.push_str(&format!(
                r#"{}<rect class="{}background" width="{}" height="{}" fill="{}"/>"#,
                self.indent_str(),
                self.prefix(),
                fmt(width),
                fmt(height),
                fill
            ));
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a primitive list to an SVG document
pub fn render_svg(
    primitives: &[Primitive],
    width: f64,
    height: f64,
    background: Option<&str>,
    config: &SvgConfig,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for primitive in primitives {
        match primitive {
            Primitive::Polyline { points, stroke } => builder.add_polyline(points, stroke),
            Primitive::Segment { from, to, stroke } => builder.add_segment(*from, *to, stroke),
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => builder.add_circle(*center, *radius, fill, stroke.as_ref()),
            Primitive::Text {
                position,
                content,
                size,
                color,
                background,
            } => builder.add_text(
                *position,
                content,
                *size,
                color,
                background.as_ref().map(|bg| (&bg.rect, bg.fill.as_str())),
            ),
        }
    }

    builder.build(width, height, background)
}

/// Format stroke styling as SVG attributes
fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color,
        fmt(stroke.width)
    );
    if stroke.opacity < 1.0 {
        attrs.push_str(&format!(r#" stroke-opacity="{}""#, fmt(stroke.opacity)));
    }
    if let Some(dash) = &stroke.dash {
        attrs.push_str(&format!(r#" stroke-dasharray="{}""#, dash));
    }
    attrs
}

/// Format a number without a trailing ".0" for integral values
fn fmt(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Escape special XML characters in text content
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
