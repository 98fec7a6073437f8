//! Core types for the map layout engine

use crate::model::SegmentKind;

/// A 2D point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, used for label collision tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this rectangle intersects another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Return a copy grown by `margin` on every side
    pub fn expanded(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// A background line's drawn geometry: one offset segment per consecutive
/// station pair, all displaced by the line's lateral offset
#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub line: String,
    pub color: String,
    pub segments: Vec<(Point, Point)>,
}

/// A resolved route segment, drawn centered (zero lateral offset)
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSegment {
    pub from: Point,
    pub to: Point,
    pub kind: SegmentKind,
    /// Color of the segment's line, when it resolves to one
    pub color: Option<String>,
}

/// A station marker in its final canvas position
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub station_id: String,
    pub position: Point,
    pub color: String,
    pub on_route: bool,
    pub transfer: bool,
}

/// A station label with its chosen position.
///
/// `rect` is the unexpanded text box; `anchor` is the station's marker
/// position the label was placed relative to. `fallback` marks a mandatory
/// label that found no collision-free candidate and was drawn at its first
/// candidate anyway.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub station_id: String,
    pub text: String,
    pub anchor: Point,
    pub rect: Rect,
    pub mandatory: bool,
    pub fallback: bool,
}

/// One legend row: a line id and its representative color
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub line: String,
    pub color: String,
}

/// The complete result of one layout pass.
///
/// Owned by a single render; recomputed from scratch whenever the stations,
/// the route result, or the preferences change.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    pub width: f64,
    pub height: f64,
    pub line_paths: Vec<LinePath>,
    pub highlights: Vec<HighlightSegment>,
    pub markers: Vec<Marker>,
    pub labels: Vec<PlacedLabel>,
    pub legend: Vec<LegendEntry>,
}

impl MapLayout {
    /// Create an empty layout for a canvas of the given size
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            line_paths: vec![],
            highlights: vec![],
            markers: vec![],
            labels: vec![],
            legend: vec![],
        }
    }
}
