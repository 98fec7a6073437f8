//! Abstract draw primitives
//!
//! The renderer's output vocabulary: polylines, line segments, circles, and
//! text, each carrying its own styling. Primitives are independent of any
//! rendering surface; the SVG backend is one consumer, a host canvas another.

use crate::layout::{Point, Rect};

/// Stroke styling for lines and outlines
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
    /// SVG-style dash pattern, e.g. "6,6"
    pub dash: Option<String>,
}

impl Stroke {
    /// A solid stroke at full opacity
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            opacity: 1.0,
            dash: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_dash(mut self, dash: impl Into<String>) -> Self {
        self.dash = Some(dash.into());
        self
    }
}

/// Background panel behind a text primitive
#[derive(Debug, Clone, PartialEq)]
pub struct TextBackground {
    pub rect: Rect,
    pub fill: String,
}

/// A single abstract draw instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Connected open or closed point sequence
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// One straight segment
    Segment {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// Filled circle with optional outline
    Circle {
        center: Point,
        radius: f64,
        fill: String,
        stroke: Option<Stroke>,
    },
    /// Text anchored at its baseline start, with an optional background panel
    Text {
        position: Point,
        content: String,
        size: f64,
        color: String,
        background: Option<TextBackground>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_stroke() {
        let stroke = Stroke::solid("#ffffff", 4.0);
        assert_eq!(stroke.opacity, 1.0);
        assert_eq!(stroke.dash, None);
    }

    #[test]
    fn test_stroke_builders() {
        let stroke = Stroke::solid("#38bdf8", 6.0)
            .with_opacity(0.25)
            .with_dash("6,6");
        assert_eq!(stroke.opacity, 0.25);
        assert_eq!(stroke.dash.as_deref(), Some("6,6"));
    }
}
