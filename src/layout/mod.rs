//! Layout engine for the schematic map
//!
//! Takes the station list and an optional route result and computes the
//! spatial layout: projected positions, offset line paths, resolved route
//! highlights, placed labels, and legend rows.

pub mod config;
pub mod engine;
pub mod groups;
pub mod labels;
pub mod offsets;
pub mod projection;
pub mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use groups::{compare_line_ids, line_groups, normalize_name, route_id_set, NameGroups};
pub use labels::place_labels;
pub use offsets::{lateral_offset, offset_segment};
pub use projection::Projection;
pub use types::*;
