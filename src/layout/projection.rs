//! Normalized-to-canvas coordinate mapping
//!
//! Station coordinates arrive normalized into an abstract [0, 100] plane.
//! The projection maps them onto the pixel canvas, flipping the vertical
//! axis so that increasing `y` moves up, and scaling the whole canvas by
//! the user's zoom factor. Pure and stateless; no failure modes.

use crate::model::Station;

use super::config::LayoutConfig;
use super::types::Point;

/// Maps normalized coordinates onto a canvas of a fixed pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    width: f64,
    height: f64,
}

impl Projection {
    /// Build a projection for the configured base size at the given zoom
    pub fn new(config: &LayoutConfig, scale: f64) -> Self {
        let (base_width, base_height) = config.base_size;
        Self {
            width: base_width * scale,
            height: base_height * scale,
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Project a normalized `(x, y)` pair into pixel coordinates
    pub fn project(&self, x: f64, y: f64) -> Point {
        Point::new(
            x / 100.0 * self.width,
            self.height - y / 100.0 * self.height,
        )
    }

    /// Project a station's normalized position
    pub fn station(&self, station: &Station) -> Point {
        self.project(station.x, station.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(scale: f64) -> Projection {
        Projection::new(&LayoutConfig::default(), scale)
    }

    #[test]
    fn test_origin_maps_to_bottom_left() {
        let p = projection(1.0).project(0.0, 0.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 500.0);
    }

    #[test]
    fn test_top_right_corner() {
        let p = projection(1.0).project(100.0, 100.0);
        assert_eq!(p.x, 800.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_midpoint() {
        let p = projection(1.0).project(50.0, 50.0);
        assert_eq!(p.x, 400.0);
        assert_eq!(p.y, 250.0);
    }

    #[test]
    fn test_scale_multiplies_canvas() {
        let proj = projection(2.0);
        assert_eq!(proj.width(), 1600.0);
        assert_eq!(proj.height(), 1000.0);
        let p = proj.project(50.0, 0.0);
        assert_eq!(p.x, 800.0);
        assert_eq!(p.y, 1000.0);
    }

    #[test]
    fn test_increasing_y_moves_up() {
        let proj = projection(1.0);
        let low = proj.project(10.0, 10.0);
        let high = proj.project(10.0, 90.0);
        assert!(high.y < low.y);
    }
}
