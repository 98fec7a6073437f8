//! Metromap - schematic transit map renderer
//!
//! This library turns a station catalog and an optional computed route into
//! a deterministic list of abstract draw primitives, with an SVG backend on
//! top. It handles coordinate mapping, transfer-hub detection, per-line
//! lateral offsets, route highlighting, collision-avoiding label placement,
//! and the legend. It does not compute routes or perform any I/O beyond the
//! optional JSON/TOML loading helpers.
//!
//! # Example
//!
//! ```rust
//! use metromap::{render_svg, UiPreferences};
//!
//! let stations = metromap::catalog::stations_from_str(
//!     r##"[{"id":"A1","name":"Centro","line":"1","x":10.0,"y":10.0,"color":"#3b82f6"}]"##,
//! )
//! .unwrap();
//! let svg = render_svg(&stations, None, &UiPreferences::default());
//! assert!(svg.contains("<svg"));
//! ```

pub mod catalog;
pub mod error;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod theme;

pub use catalog::CatalogError;
pub use error::MapError;
pub use layout::{LayoutConfig, MapLayout};
pub use model::{
    Mobility, RouteOptions, RouteRequest, RouteResult, Segment, SegmentKind, Station, TimeOfDay,
    UiPreferences,
};
pub use renderer::{build_scene, Primitive, Stroke, SvgConfig};
pub use theme::{Theme, ThemeError};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Color theme
    pub theme: Theme,
    /// Debug mode: dump the computed layout to stderr
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            theme: Theme::default(),
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the color theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a map to draw primitives with default configuration.
///
/// One full pass: grouping, geometry, label placement, scene assembly.
/// Identical inputs always yield an identical primitive list.
pub fn render(
    stations: &[Station],
    route: Option<&RouteResult>,
    prefs: &UiPreferences,
) -> Vec<Primitive> {
    render_with_config(stations, route, prefs, &RenderConfig::default())
}

/// Render a map to draw primitives with custom configuration
pub fn render_with_config(
    stations: &[Station],
    route: Option<&RouteResult>,
    prefs: &UiPreferences,
    config: &RenderConfig,
) -> Vec<Primitive> {
    // An empty route result renders the same as no route at all
    let route = route.filter(|r| !r.is_empty());
    let computed = layout::compute(stations, route, prefs, &config.layout);

    if config.debug {
        eprintln!("=== Layout Debug ===");
        eprintln!("canvas {}x{}", computed.width, computed.height);
        for path in &computed.line_paths {
            eprintln!(
                "line {} [{}] segments={}",
                path.line,
                path.color,
                path.segments.len()
            );
        }
        eprintln!(
            "highlights={} markers={} labels={} legend={}",
            computed.highlights.len(),
            computed.markers.len(),
            computed.labels.len(),
            computed.legend.len()
        );
        for label in &computed.labels {
            eprintln!(
                "label {} at {:.1},{:.1}{}",
                label.station_id,
                label.rect.x,
                label.rect.y,
                if label.fallback { " (fallback)" } else { "" }
            );
        }
        eprintln!("====================");
    }

    build_scene(&computed, &config.layout, &config.theme, prefs)
}

/// Render a map straight to an SVG document with default configuration
pub fn render_svg(stations: &[Station], route: Option<&RouteResult>, prefs: &UiPreferences) -> String {
    render_svg_with_config(stations, route, prefs, &RenderConfig::default())
}

/// Render a map straight to an SVG document with custom configuration
pub fn render_svg_with_config(
    stations: &[Station],
    route: Option<&RouteResult>,
    prefs: &UiPreferences,
    config: &RenderConfig,
) -> String {
    let primitives = render_with_config(stations, route, prefs, config);
    let (base_width, base_height) = config.layout.base_size;
    renderer::render_svg(
        &primitives,
        base_width * prefs.scale,
        base_height * prefs.scale,
        Some(&config.theme.resolve_or_default("background")),
        &config.svg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, name: &str, line: &str, x: f64, y: f64) -> Station {
        Station {
            id: id.to_string(),
            name: name.to_string(),
            line: line.to_string(),
            x,
            y,
            color: "#3b82f6".to_string(),
            order: None,
        }
    }

    #[test]
    fn test_render_empty_map() {
        let primitives = render(&[], None, &UiPreferences::default());
        // Background furniture only: no circles, no text
        assert!(!primitives.is_empty());
        assert!(!primitives
            .iter()
            .any(|p| matches!(p, Primitive::Circle { .. } | Primitive::Text { .. })));
    }

    #[test]
    fn test_render_svg_contains_station_name() {
        let stations = vec![
            station("A1", "Oeste", "1", 10.0, 50.0),
            station("A2", "Este", "1", 90.0, 50.0),
        ];
        let svg = render_svg(&stations, None, &UiPreferences::default());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Oeste"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_empty_route_result_treated_as_no_route() {
        let stations = vec![
            station("A1", "Oeste", "1", 10.0, 50.0),
            station("A2", "Este", "1", 90.0, 50.0),
        ];
        let prefs = UiPreferences::default();
        let without = render(&stations, None, &prefs);
        let with_empty = render(&stations, Some(&RouteResult::default()), &prefs);
        assert_eq!(without, with_empty);
    }

    #[test]
    fn test_render_deterministic() {
        let stations = vec![
            station("A1", "Oeste", "1", 10.0, 50.0),
            station("A2", "Centro", "1", 50.0, 50.0),
            station("B1", "Centro", "2", 50.0, 50.0),
        ];
        let prefs = UiPreferences::default();
        assert_eq!(render(&stations, None, &prefs), render(&stations, None, &prefs));
    }

    #[test]
    fn test_scale_changes_viewbox() {
        let svg = render_svg(&[], None, &UiPreferences::default().with_scale(1.25));
        assert!(svg.contains(r#"viewBox="0 0 1000 625""#));
    }
}
