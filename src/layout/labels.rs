//! Greedy collision-avoiding label placement
//!
//! One text label per station, placed near its marker without overlapping
//! previously placed labels. Stations are processed in priority order:
//! on-route stations first, then transfer hubs, then everything else, with
//! stable input order breaking ties. Important labels therefore claim good
//! positions before low-priority labels can block them.
//!
//! For each station, eight fixed candidate offsets around the anchor are
//! tried in order; the first whose margin-expanded box clears every occupied
//! rectangle wins and its box joins the occupied list. A mandatory label
//! (on-route or transfer hub) that clears nothing is still drawn at its
//! first candidate, unrecorded, so operationally important names are never
//! silently dropped. A plain label that clears nothing is dropped.
//!
//! The occupied list is an explicit accumulator local to one call; nothing
//! survives between passes.

use std::collections::HashSet;

use crate::model::{Station, UiPreferences};

use super::config::LayoutConfig;
use super::types::{PlacedLabel, Point, Rect};

/// Number of candidate offsets tried per station
pub const CANDIDATE_COUNT: usize = 8;

/// Estimated text box metrics for the current pass
#[derive(Debug, Clone, Copy)]
struct LabelMetrics {
    char_width: f64,
    height: f64,
    margin: f64,
}

impl LabelMetrics {
    fn new(config: &LayoutConfig, prefs: &UiPreferences) -> Self {
        if prefs.large_labels {
            Self {
                char_width: config.label_char_width_large,
                height: config.label_height_large,
                margin: config.label_margin,
            }
        } else {
            Self {
                char_width: config.label_char_width,
                height: config.label_height,
                margin: config.label_margin,
            }
        }
    }

    fn box_for(&self, text: &str) -> (f64, f64) {
        (text.chars().count() as f64 * self.char_width, self.height)
    }
}

/// The fixed candidate box for slot `slot` around anchor `(cx, cy)`.
///
/// Order matters and is part of the algorithm's contract: upper-right,
/// upper-left, lower-right, lower-left, straight up, straight down, right,
/// left.
fn candidate_rect(slot: usize, anchor: Point, width: f64, height: f64) -> Rect {
    let Point { x: cx, y: cy } = anchor;
    match slot {
        0 => Rect::new(cx + 8.0, cy - 8.0 - height, width, height),
        1 => Rect::new(cx - 8.0 - width, cy - 8.0 - height, width, height),
        2 => Rect::new(cx + 8.0, cy + 8.0, width, height),
        3 => Rect::new(cx - 8.0 - width, cy + 8.0, width, height),
        4 => Rect::new(cx - width / 2.0, cy - 10.0 - height, width, height),
        5 => Rect::new(cx - width / 2.0, cy + 10.0, width, height),
        6 => Rect::new(cx + 10.0, cy - height / 2.0, width, height),
        _ => Rect::new(cx - 10.0 - width, cy - height / 2.0, width, height),
    }
}

/// Placement priority: lower ranks are processed first
fn rank(station: &Station, on_route: &HashSet<&str>, transfer: bool) -> u8 {
    if on_route.contains(station.id.as_str()) {
        0
    } else if transfer {
        1
    } else {
        2
    }
}

/// Place labels for the station slice. `anchors` holds the projected marker
/// position for the station at the same index.
pub fn place_labels(
    stations: &[Station],
    anchors: &[Point],
    on_route: &HashSet<&str>,
    transfers: &[bool],
    prefs: &UiPreferences,
    config: &LayoutConfig,
) -> Vec<PlacedLabel> {
    let metrics = LabelMetrics::new(config, prefs);

    // Select attempt candidates in input order. Plain stations are thinned
    // to one in `sparsify_interval` before any placement is attempted, so
    // dense areas stay readable at low zoom.
    let mut attempts: Vec<(u8, usize)> = Vec::with_capacity(stations.len());
    let mut plain_seen = 0usize;
    for (index, station) in stations.iter().enumerate() {
        let rank = rank(station, on_route, transfers[index]);
        if rank == 2 {
            let keep = plain_seen % config.sparsify_interval == 0;
            plain_seen += 1;
            if !keep {
                continue;
            }
        }
        attempts.push((rank, index));
    }

    // Stable sort: rank first, input order within a rank
    attempts.sort_by_key(|&(rank, _)| rank);

    let mut occupied: Vec<Rect> = Vec::with_capacity(attempts.len());
    let mut placed: Vec<PlacedLabel> = Vec::with_capacity(attempts.len());

    for (rank, index) in attempts {
        let station = &stations[index];
        let anchor = anchors[index];
        let (width, height) = metrics.box_for(&station.name);
        let mandatory = rank < 2;

        let chosen = (0..CANDIDATE_COUNT).find_map(|slot| {
            let rect = candidate_rect(slot, anchor, width, height);
            let probe = rect.expanded(metrics.margin);
            if occupied.iter().any(|taken| probe.intersects(taken)) {
                None
            } else {
                Some((rect, probe))
            }
        });

        match chosen {
            Some((rect, probe)) => {
                occupied.push(probe);
                placed.push(PlacedLabel {
                    station_id: station.id.clone(),
                    text: station.name.clone(),
                    anchor,
                    rect,
                    mandatory,
                    fallback: false,
                });
            }
            None if mandatory => {
                // Drawn anyway at the first candidate, but not recorded:
                // it may overlap, it is never dropped
                placed.push(PlacedLabel {
                    station_id: station.id.clone(),
                    text: station.name.clone(),
                    anchor,
                    rect: candidate_rect(0, anchor, width, height),
                    mandatory,
                    fallback: true,
                });
            }
            None => {}
        }
    }

    placed
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

    fn spread_anchors(count: usize) -> Vec<Point> {
        (0..count)
            .map(|i| Point::new(i as f64 * 200.0, 100.0))
            .collect()
    }

    fn place(
        stations: &[Station],
        anchors: &[Point],
        on_route: &HashSet<&str>,
    ) -> Vec<PlacedLabel> {
        let transfers = vec![false; stations.len()];
        place_labels(
            stations,
            anchors,
            on_route,
            &transfers,
            &UiPreferences::default(),
            &LayoutConfig::default(),
        )
    }

    #[test]
    fn test_isolated_station_gets_first_candidate() {
        let stations = vec![station("A1", "Centro", "1", 10.0, 10.0)];
        let anchors = vec![Point::new(100.0, 100.0)];
        let labels = place(&stations, &anchors, &HashSet::new());

        assert_eq!(labels.len(), 1);
        // Upper-right candidate
        assert_eq!(labels[0].rect.x, 108.0);
        assert!(labels[0].rect.bottom() <= 100.0);
        assert!(!labels[0].fallback);
    }

    #[test]
    fn test_on_route_processed_before_plain() {
        let stations = vec![
            station("P1", "Plain", "1", 10.0, 10.0),
            station("R1", "Ruta", "1", 10.0, 10.0),
        ];
        // Same anchor: both default candidates collide, so whoever goes
        // first wins the upper-right slot
        let anchors = vec![Point::new(100.0, 100.0); 2];
        let on_route: HashSet<&str> = ["R1"].into();
        let labels = place(&stations, &anchors, &on_route);

        assert_eq!(labels[0].station_id, "R1");
        assert!(!labels[0].fallback);
    }

    #[test]
    fn test_mandatory_label_never_dropped() {
        // Many on-route stations piled on one anchor: candidates run out,
        // but every label still exists
        let stations: Vec<Station> = (0..12)
            .map(|i| station(&format!("R{i}"), "Centro", "1", 10.0, 10.0))
            .collect();
        let anchors = vec![Point::new(100.0, 100.0); 12];
        let ids: Vec<String> = stations.iter().map(|s| s.id.clone()).collect();
        let on_route: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let labels = place(&stations, &anchors, &on_route);

        assert_eq!(labels.len(), 12);
        assert!(labels.iter().any(|l| l.fallback));
    }

    #[test]
    fn test_transfer_hub_is_mandatory() {
        let stations = vec![
            station("A1", "Centro", "1", 10.0, 10.0),
            station("B1", "Centro", "2", 10.0, 10.0),
        ];
        let anchors = vec![Point::new(100.0, 100.0); 2];
        let transfers = vec![true, true];
        let labels = place_labels(
            &stations,
            &anchors,
            &HashSet::new(),
            &transfers,
            &UiPreferences::default(),
            &LayoutConfig::default(),
        );

        // Both drawn even though their boxes fight over the same anchor
        assert_eq!(labels.len(), 2);
        assert!(labels.iter().all(|l| l.mandatory));
    }

    #[test]
    fn test_placed_labels_never_overlap() {
        let stations: Vec<Station> = (0..9)
            .map(|i| station(&format!("S{i}"), "Estación Larga", "1", 10.0, 10.0))
            .collect();
        // Three clusters of three anchors each
        let anchors: Vec<Point> = (0..9)
            .map(|i| Point::new(100.0 + (i / 3) as f64 * 300.0, 100.0 + (i % 3) as f64 * 4.0))
            .collect();
        let ids: Vec<String> = stations.iter().map(|s| s.id.clone()).collect();
        let on_route: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let labels = place(&stations, &anchors, &on_route);

        let solid: Vec<&PlacedLabel> = labels.iter().filter(|l| !l.fallback).collect();
        for (i, a) in solid.iter().enumerate() {
            for b in &solid[i + 1..] {
                assert!(
                    !a.rect.intersects(&b.rect),
                    "{} overlaps {}",
                    a.station_id,
                    b.station_id
                );
            }
        }
    }

    #[test]
    fn test_plain_stations_sparsified() {
        let stations: Vec<Station> = (0..9)
            .map(|i| station(&format!("S{i}"), &format!("Parada {i}"), "1", 10.0, 10.0))
            .collect();
        let anchors = spread_anchors(9);
        let labels = place(&stations, &anchors, &HashSet::new());

        // One in three plain stations gets an attempt; space is ample so
        // every attempt succeeds
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].station_id, "S0");
        assert_eq!(labels[1].station_id, "S3");
        assert_eq!(labels[2].station_id, "S6");
    }

    #[test]
    fn test_overlapping_plain_pair_keeps_first_only() {
        // Two plain stations 2px apart: with interval 3 the second one is
        // thinned out before placement is even attempted
        let stations = vec![
            station("S0", "Cercana A", "1", 10.0, 10.0),
            station("S1", "Cercana B", "1", 10.0, 10.0),
        ];
        let anchors = vec![Point::new(100.0, 100.0), Point::new(102.0, 100.0)];
        let labels = place(&stations, &anchors, &HashSet::new());

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].station_id, "S0");
    }

    #[test]
    fn test_deterministic() {
        let stations: Vec<Station> = (0..6)
            .map(|i| station(&format!("S{i}"), "Centro", "1", 10.0, 10.0))
            .collect();
        let anchors = vec![Point::new(100.0, 100.0); 6];
        let on_route: HashSet<&str> = ["S2", "S4"].into();

        let first = place(&stations, &anchors, &on_route);
        let second = place(&stations, &anchors, &on_route);
        assert_eq!(first, second);
    }

    #[test]
    fn test_large_labels_widen_boxes() {
        let stations = vec![station("A1", "Centro", "1", 10.0, 10.0)];
        let anchors = vec![Point::new(100.0, 100.0)];
        let transfers = vec![false];

        let small = place_labels(
            &stations,
            &anchors,
            &HashSet::new(),
            &transfers,
            &UiPreferences::default(),
            &LayoutConfig::default(),
        );
        let large = place_labels(
            &stations,
            &anchors,
            &HashSet::new(),
            &transfers,
            &UiPreferences::default().with_large_labels(true),
            &LayoutConfig::default(),
        );

        assert!(large[0].rect.width > small[0].rect.width);
        assert!(large[0].rect.height > small[0].rect.height);
    }
}
