//! Grouping passes over the station list
//!
//! Two groupings feed the rest of the layout: name groups (stations sharing
//! a normalized display name mark a transfer hub) and line groups (each
//! line's stations in path order). Both are recomputed from the raw station
//! slice on every pass and hold indices into it rather than copies.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::model::{RouteResult, Station};

/// Normalize a station name for transfer detection: trim and case-fold.
///
/// Ids are line-specific, so a shared name is the only reliable signal that
/// two records describe the same physical stop.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Stations grouped by normalized display name
#[derive(Debug, Clone, Default)]
pub struct NameGroups {
    groups: HashMap<String, Vec<usize>>,
}

impl NameGroups {
    /// Group the station slice by normalized name
    pub fn build(stations: &[Station]) -> Self {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, station) in stations.iter().enumerate() {
            groups
                .entry(normalize_name(&station.name))
                .or_default()
                .push(index);
        }
        Self { groups }
    }

    /// True when the name is shared by more than one station record
    pub fn is_transfer(&self, name: &str) -> bool {
        self.groups
            .get(&normalize_name(name))
            .is_some_and(|members| members.len() > 1)
    }

    /// Indices of all stations sharing the given name
    pub fn members(&self, name: &str) -> &[usize] {
        self.groups
            .get(&normalize_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Total order over line ids: ids that parse as numbers sort first,
/// ascending by value; the rest follow lexicographically. Ties always
/// break lexicographically so the order is deterministic.
pub fn compare_line_ids(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// One line's stations in path order
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    pub line: String,
    /// Color of the line's first station in input order
    pub color: String,
    /// Indices into the station slice, ordered along the line's path
    pub stations: Vec<usize>,
}

/// Group stations by line id, each group's stations ordered along the path.
///
/// Groups come back in the numeric-first line order used for lateral offset
/// assignment. Within a group, the explicit `order` field wins when every
/// station of the line carries one; otherwise stations sort by x then y,
/// with the input index as a final tie-break.
pub fn line_groups(stations: &[Station]) -> Vec<LineGroup> {
    let mut by_line: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, station) in stations.iter().enumerate() {
        by_line.entry(station.line.as_str()).or_default().push(index);
    }

    let mut lines: Vec<&str> = by_line.keys().copied().collect();
    lines.sort_by(|a, b| compare_line_ids(a, b));

    lines
        .into_iter()
        .map(|line| {
            let mut members = by_line.remove(line).unwrap_or_default();
            let color = members
                .first()
                .map(|&i| stations[i].color.clone())
                .unwrap_or_default();

            if members.iter().all(|&i| stations[i].order.is_some()) {
                members.sort_by_key(|&i| (stations[i].order, i));
            } else {
                members.sort_by(|&a, &b| {
                    stations[a]
                        .x
                        .total_cmp(&stations[b].x)
                        .then(stations[a].y.total_cmp(&stations[b].y))
                        .then(a.cmp(&b))
                });
            }

            LineGroup {
                line: line.to_string(),
                color,
                stations: members,
            }
        })
        .collect()
}

/// Station ids appearing in the route result's path
pub fn route_id_set(route: Option<&RouteResult>) -> HashSet<&str> {
    route
        .map(|r| r.path.iter().map(String::as_str).collect())
        .unwrap_or_default()
}
