//! Rendering: layout to draw primitives, and primitives to SVG
//!
//! The scene builder turns a computed `MapLayout` into an ordered list of
//! abstract draw primitives; the SVG backend serializes that list into a
//! document with CSS classes for styling.

pub mod config;
pub mod primitives;
pub mod scene;
pub mod svg;

pub use config::SvgConfig;
pub use primitives::{Primitive, Stroke, TextBackground};
pub use scene::build_scene;
pub use svg::render_svg;
