//! Lateral line offsets
//!
//! Lines that share near-identical paths are illegible drawn on top of each
//! other, so each line is nudged sideways by a constant amount perpendicular
//! to its local direction. Offsets are assigned symmetrically around zero so
//! the bundle of lines stays centered on the true path. Route highlights are
//! always drawn at zero offset, keeping the highlighted path continuous
//! while the background lines fan out.

use super::types::Point;

/// Lateral offset for the line at `index` of `count` total lines.
///
/// Offsets are centered: for any `count`, the offsets of all lines sum to
/// zero.
pub fn lateral_offset(index: usize, count: usize, base_separation: f64) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * base_separation
}

/// Displace the segment `a -> b` sideways by `offset` pixels along its
/// left-hand perpendicular.
///
/// Coincident endpoints have no direction; the perpendicular degenerates to
/// zero and the segment comes back unshifted.
pub fn offset_segment(a: Point, b: Point, offset: f64) -> (Point, Point) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return (a, b);
    }
    let perp_x = -dy / len;
    let perp_y = dx / len;
    (
        Point::new(a.x + perp_x * offset, a.y + perp_y * offset),
        Point::new(b.x + perp_x * offset, b.y + perp_y * offset),
    )
}
