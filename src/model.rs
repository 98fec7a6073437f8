//! Input data model for the map renderer
//!
//! Stations come from the external station catalog, route results from the
//! external route-computation service. Both are plain data for the renderer:
//! it never mutates them and recomputes everything derived from them on each
//! render pass. Route-result fields are lenient on deserialization so that a
//! malformed result degrades to "no route" instead of failing the render.

use serde::{Deserialize, Serialize};

/// A single station record. The same physical stop may appear once per line,
/// each record with its own id but a shared display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique (line-specific) identifier
    pub id: String,
    /// Display name; shared across records of the same physical stop
    pub name: String,
    /// Line identifier this record belongs to
    pub line: String,
    /// Normalized horizontal coordinate in [0, 100]
    pub x: f64,
    /// Normalized vertical coordinate in [0, 100], increasing upward
    pub y: f64,
    /// Line color carried on each station record
    pub color: String,
    /// Explicit position along the line's path, when the catalog provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Classification of a route segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Travel along a single line
    #[default]
    Normal,
    /// Walk between platforms at a transfer hub
    Transfer,
}

/// One leg of a computed route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from_id: String,
    pub to_id: String,
    /// Line served by this leg; absent for transfer legs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: SegmentKind,
}

/// Result of the external route computation.
///
/// All fields default so that a partial or malformed payload deserializes to
/// an effectively empty route rather than an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteResult {
    /// Ordered station ids from origin to destination
    #[serde(default)]
    pub path: Vec<String>,
    /// Ordered legs; consecutive legs are contiguous when well-formed, but
    /// the renderer does not rely on that
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub transfers: u32,
    #[serde(default)]
    pub lines_used: Vec<String>,
}

impl RouteResult {
    /// True when the result carries nothing renderable
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.segments.is_empty()
    }
}

/// Mobility profile for route computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mobility {
    #[default]
    Normal,
    Reduced,
}

/// Time-of-day profile for route computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Offpeak,
    Peak,
}

/// Options accepted by the external `POST /route` service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    #[serde(default)]
    pub transfer_penalty: f64,
    #[serde(default)]
    pub mobility: Mobility,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    #[serde(default)]
    pub prefer_fewer_transfers: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            transfer_penalty: 0.0,
            mobility: Mobility::Normal,
            time_of_day: TimeOfDay::Offpeak,
            prefer_fewer_transfers: false,
        }
    }
}

/// Request body for the external route-computation service. The renderer
/// never performs the call; this type exists so a host can build the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin_id: String,
    pub destination_id: String,
    #[serde(default)]
    pub options: RouteOptions,
}

/// Visual preferences supplied by the presentation host.
///
/// These affect visual weighting only (opacity, font size, overall zoom);
/// they never change layout decisions beyond scaling the whole canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub large_labels: bool,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            high_contrast: false,
            large_labels: false,
            scale: 1.0,
        }
    }
}

impl UiPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_contrast(mut self, on: bool) -> Self {
        self.high_contrast = on;
        self
    }

    pub fn with_large_labels(mut self, on: bool) -> Self {
        self.large_labels = on;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}
