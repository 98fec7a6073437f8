//! Configuration for the map layout engine

/// Configuration options for layout computation.
///
/// All pixel constants here are presentation tuning; the placement and
/// priority contracts of the engine hold for any values.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Base canvas size before zoom (width, height)
    pub base_size: (f64, f64),

    /// Lateral separation between adjacent parallel lines
    pub base_separation: f64,

    /// Station marker radius
    pub marker_radius: f64,

    /// Estimated label width per character
    pub label_char_width: f64,

    /// Estimated label width per character under the large-labels preference
    pub label_char_width_large: f64,

    /// Estimated label box height
    pub label_height: f64,

    /// Estimated label box height under the large-labels preference
    pub label_height_large: f64,

    /// Margin added around label boxes for collision tests
    pub label_margin: f64,

    /// Keep one in this many plain stations as label candidates
    pub sparsify_interval: usize,

    /// Top-left corner of the legend block
    pub legend_origin: (f64, f64),

    /// Vertical distance between legend rows
    pub legend_row_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_size: (800.0, 500.0),
            base_separation: 5.0,
            marker_radius: 6.0,
            label_char_width: 6.0,
            label_char_width_large: 7.5,
            label_height: 12.0,
            label_height_large: 15.0,
            label_margin: 3.0,
            sparsify_interval: 3,
            legend_origin: (12.0, 16.0),
            legend_row_height: 16.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base canvas size
    pub fn with_base_size(mut self, width: f64, height: f64) -> Self {
        self.base_size = (width, height);
        self
    }

    /// Set the lateral separation between adjacent lines
    pub fn with_base_separation(mut self, separation: f64) -> Self {
        self.base_separation = separation;
        self
    }

    /// Set the station marker radius
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Set the label collision margin
    pub fn with_label_margin(mut self, margin: f64) -> Self {
        self.label_margin = margin;
        self
    }

    /// Set the plain-station sparsification interval
    pub fn with_sparsify_interval(mut self, interval: usize) -> Self {
        self.sparsify_interval = interval.max(1);
        self
    }
}
