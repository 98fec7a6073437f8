//! Layout computation engine
//!
//! One pass from the raw station list (plus an optional route result and
//! the user's visual preferences) to a complete `MapLayout`. The pass runs
//! grouping, then geometry, then label placement and the legend; data flows
//! one direction and every derived structure is rebuilt from scratch, so
//! identical inputs always produce an identical layout.
//!
//! Nothing in here fails. Unresolvable references are skipped, empty inputs
//! produce an empty (background-only) layout, and degenerate geometry falls
//! back to zero offsets.

use std::collections::HashMap;

use crate::model::{RouteResult, Station, UiPreferences};

use super::config::LayoutConfig;
use super::groups::{line_groups, route_id_set, NameGroups};
use super::labels::place_labels;
use super::offsets::{lateral_offset, offset_segment};
use super::projection::Projection;
use super::types::{HighlightSegment, LegendEntry, LinePath, MapLayout, Marker};

/// Compute the full layout for one render pass
pub fn compute(
    stations: &[Station],
    route: Option<&RouteResult>,
    prefs: &UiPreferences,
    config: &LayoutConfig,
) -> MapLayout {
    let projection = Projection::new(config, prefs.scale);
    let mut layout = MapLayout::empty(projection.width(), projection.height());
    if stations.is_empty() {
        return layout;
    }

    let anchors: Vec<_> = stations.iter().map(|s| projection.station(s)).collect();
    let by_id: HashMap<&str, usize> = stations
        .iter()
        .enumerate()
        .map(|(index, s)| (s.id.as_str(), index))
        .collect();

    let name_groups = NameGroups::build(stations);
    let transfers: Vec<bool> = stations
        .iter()
        .map(|s| name_groups.is_transfer(&s.name))
        .collect();
    let on_route = route_id_set(route);

    // Background lines, fanned out symmetrically around their true paths
    let groups = line_groups(stations);
    let line_count = groups.len();
    let line_colors: HashMap<&str, &str> = groups
        .iter()
        .map(|g| (g.line.as_str(), g.color.as_str()))
        .collect();

    for (index, group) in groups.iter().enumerate() {
        let offset = lateral_offset(index, line_count, config.base_separation);
        let segments = group
            .stations
            .windows(2)
            .map(|pair| offset_segment(anchors[pair[0]], anchors[pair[1]], offset))
            .collect();
        layout.line_paths.push(LinePath {
            line: group.line.clone(),
            color: group.color.clone(),
            segments,
        });
    }

    // Route highlight, centered regardless of line offsets. Segments whose
    // endpoints don't resolve are skipped without affecting the rest.
    if let Some(route) = route {
        for segment in &route.segments {
            let (Some(&from), Some(&to)) = (
                by_id.get(segment.from_id.as_str()),
                by_id.get(segment.to_id.as_str()),
            ) else {
                continue;
            };
            let color = segment
                .line
                .as_deref()
                .and_then(|line| line_colors.get(line))
                .map(|c| (*c).to_string());
            layout.highlights.push(HighlightSegment {
                from: anchors[from],
                to: anchors[to],
                kind: segment.kind,
                color,
            });
        }
    }

    // Station markers in input order
    for (index, station) in stations.iter().enumerate() {
        layout.markers.push(Marker {
            station_id: station.id.clone(),
            position: anchors[index],
            color: station.color.clone(),
            on_route: on_route.contains(station.id.as_str()),
            transfer: transfers[index],
        });
    }

    layout.labels = place_labels(stations, &anchors, &on_route, &transfers, prefs, config);

    // Legend rows sorted lexicographically, independent of the numeric-first
    // offset order
    let mut legend: Vec<LegendEntry> = groups
        .into_iter()
        .map(|g| LegendEntry {
            line: g.line,
            color: g.color,
        })
        .collect();
    legend.sort_by(|a, b| a.line.cmp(&b.line));
    layout.legend = legend;

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Segment, SegmentKind};

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

    fn sample_stations() -> Vec<Station> {
        vec![
            station("A1", "Oeste", "1", 10.0, 50.0),
            station("A2", "Centro", "1", 50.0, 50.0),
            station("A3", "Este", "1", 90.0, 50.0),
            station("B1", "Sur", "2", 50.0, 10.0),
            station("B2", "Centro", "2", 50.0, 50.0),
            station("B3", "Norte", "2", 50.0, 90.0),
        ]
    }

    fn segment(from: &str, to: &str, line: Option<&str>, kind: SegmentKind) -> Segment {
        Segment {
            from_id: from.to_string(),
            to_id: to.to_string(),
            line: line.map(String::from),
            kind,
        }
    }

    fn compute_default(stations: &[Station], route: Option<&RouteResult>) -> MapLayout {
        compute(
            stations,
            route,
            &UiPreferences::default(),
            &LayoutConfig::default(),
        )
    }

    #[test]
    fn test_empty_stations_empty_layout() {
        let layout = compute_default(&[], None);
        assert_eq!(layout.width, 800.0);
        assert_eq!(layout.height, 500.0);
        assert!(layout.line_paths.is_empty());
        assert!(layout.markers.is_empty());
        assert!(layout.legend.is_empty());
    }

    #[test]
    fn test_no_route_no_highlights() {
        let layout = compute_default(&sample_stations(), None);
        assert!(layout.highlights.is_empty());
        assert_eq!(layout.markers.len(), 6);
        assert_eq!(layout.line_paths.len(), 2);
    }

    #[test]
    fn test_line_paths_have_one_segment_per_pair() {
        let layout = compute_default(&sample_stations(), None);
        for path in &layout.line_paths {
            assert_eq!(path.segments.len(), 2);
        }
    }

    #[test]
    fn test_route_segments_resolved() {
        let route = RouteResult {
            path: vec!["A1".to_string(), "A2".to_string(), "B3".to_string()],
            segments: vec![
                segment("A1", "A2", Some("1"), SegmentKind::Normal),
                segment("A2", "B2", None, SegmentKind::Transfer),
                segment("B2", "B3", Some("2"), SegmentKind::Normal),
            ],
            ..RouteResult::default()
        };
        let layout = compute_default(&sample_stations(), Some(&route));

        assert_eq!(layout.highlights.len(), 3);
        assert_eq!(layout.highlights[0].color, Some("#3b82f6".to_string()));
        assert_eq!(layout.highlights[1].kind, SegmentKind::Transfer);
        assert_eq!(layout.highlights[1].color, None);
    }

    #[test]
    fn test_unresolvable_segment_skipped() {
        let route = RouteResult {
            path: vec!["A1".to_string(), "A2".to_string()],
            segments: vec![
                segment("A1", "FANTASMA", Some("1"), SegmentKind::Normal),
                segment("A1", "A2", Some("1"), SegmentKind::Normal),
            ],
            ..RouteResult::default()
        };
        let layout = compute_default(&sample_stations(), Some(&route));

        assert_eq!(layout.highlights.len(), 1);
        let without_bad = RouteResult {
            segments: vec![segment("A1", "A2", Some("1"), SegmentKind::Normal)],
            ..route
        };
        let clean = compute_default(&sample_stations(), Some(&without_bad));
        assert_eq!(layout.highlights, clean.highlights);
    }

    #[test]
    fn test_markers_flag_route_and_transfer() {
        let route = RouteResult {
            path: vec!["A1".to_string()],
            ..RouteResult::default()
        };
        let layout = compute_default(&sample_stations(), Some(&route));

        let a1 = &layout.markers[0];
        assert!(a1.on_route);
        assert!(!a1.transfer);

        let a2 = &layout.markers[1];
        assert!(!a2.on_route);
        assert!(a2.transfer, "Centro appears on two lines");
    }

    #[test]
    fn test_legend_sorted_lexicographically() {
        let mut stations = sample_stations();
        stations.push(station("C1", "Única", "A", 20.0, 20.0));
        let layout = compute_default(&stations, None);

        let lines: Vec<&str> = layout.legend.iter().map(|e| e.line.as_str()).collect();
        assert_eq!(lines, vec!["1", "2", "A"]);
    }

    #[test]
    fn test_transfer_hub_labels_always_present() {
        let layout = compute_default(&sample_stations(), None);
        let labeled: Vec<&str> = layout
            .labels
            .iter()
            .map(|l| l.station_id.as_str())
            .collect();
        // Centro is a transfer hub under both ids
        assert!(labeled.contains(&"A2"));
        assert!(labeled.contains(&"B2"));
    }

    #[test]
    fn test_deterministic_layout() {
        let route = RouteResult {
            path: vec!["A1".to_string(), "A2".to_string()],
            segments: vec![segment("A1", "A2", Some("1"), SegmentKind::Normal)],
            ..RouteResult::default()
        };
        let stations = sample_stations();
        let prefs = UiPreferences::default();
        let config = LayoutConfig::default();

        let first = compute(&stations, Some(&route), &prefs, &config);
        let second = compute(&stations, Some(&route), &prefs, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scale_scales_geometry_only() {
        let stations = sample_stations();
        let base = compute_default(&stations, None);
        let zoomed = compute(
            &stations,
            None,
            &UiPreferences::default().with_scale(1.25),
            &LayoutConfig::default(),
        );

        assert_eq!(zoomed.width, base.width * 1.25);
        assert_eq!(zoomed.markers.len(), base.markers.len());
        assert_eq!(zoomed.legend, base.legend);
    }
}
