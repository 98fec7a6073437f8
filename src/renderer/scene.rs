//! Scene assembly: layout to draw primitives
//!
//! Walks a computed `MapLayout` and emits the ordered primitive list for
//! one frame. Emission order is fixed (canvas furniture, background lines,
//! highlight glow then core, markers, labels, legend) so identical layouts
//! always produce identical primitive lists. Preferences affect styling
//! only; the geometry is already final.

use crate::layout::{LayoutConfig, MapLayout, Point};
use crate::model::{SegmentKind, UiPreferences};
use crate::theme::Theme;

use super::primitives::{Primitive, Stroke, TextBackground};

/// Grid line spacing in pixels
const GRID_STEP: f64 = 50.0;

/// Background line styling, per the schematic-map look
const LINE_WIDTH: f64 = 4.0;
const LINE_OPACITY: f64 = 0.35;
const LINE_OPACITY_HIGH_CONTRAST: f64 = 0.6;

/// Route highlight layers: wide translucent glow under a solid core
const GLOW_WIDTH: f64 = 12.0;
const GLOW_OPACITY: f64 = 0.25;
const CORE_WIDTH: f64 = 6.0;
const TRANSFER_DASH: &str = "6,6";

const LABEL_FONT_SIZE: f64 = 10.0;
const LABEL_FONT_SIZE_LARGE: f64 = 13.0;
const LEGEND_SWATCH_LENGTH: f64 = 18.0;
const LEGEND_TEXT_GAP: f64 = 6.0;

/// Build the ordered primitive list for a computed layout
pub fn build_scene(
    layout: &MapLayout,
    config: &LayoutConfig,
    theme: &Theme,
    prefs: &UiPreferences,
) -> Vec<Primitive> {
    let mut scene = Vec::new();

    push_frame(&mut scene, layout, theme);
    push_grid(&mut scene, layout, theme);
    push_lines(&mut scene, layout, prefs);
    push_highlights(&mut scene, layout, theme);
    push_markers(&mut scene, layout, config, theme, prefs);
    push_labels(&mut scene, layout, theme, prefs);
    push_legend(&mut scene, layout, config, theme, prefs);

    scene
}

fn push_frame(scene: &mut Vec<Primitive>, layout: &MapLayout, theme: &Theme) {
    let (w, h) = (layout.width, layout.height);
    scene.push(Primitive::Polyline {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
            Point::new(0.0, 0.0),
        ],
        stroke: Stroke::solid(theme.resolve_or_default("frame"), 1.0),
    });
}

fn push_grid(scene: &mut Vec<Primitive>, layout: &MapLayout, theme: &Theme) {
    let color = theme.resolve_or_default("grid");
    let stroke = || Stroke::solid(color.clone(), 1.0).with_opacity(0.5);

    let mut x = GRID_STEP;
    while x < layout.width {
        scene.push(Primitive::Segment {
            from: Point::new(x, 0.0),
            to: Point::new(x, layout.height),
            stroke: stroke(),
        });
        x += GRID_STEP;
    }
    let mut y = GRID_STEP;
    while y < layout.height {
        scene.push(Primitive::Segment {
            from: Point::new(0.0, y),
            to: Point::new(layout.width, y),
            stroke: stroke(),
        });
        y += GRID_STEP;
    }
}

fn push_lines(scene: &mut Vec<Primitive>, layout: &MapLayout, prefs: &UiPreferences) {
    let opacity = if prefs.high_contrast {
        LINE_OPACITY_HIGH_CONTRAST
    } else {
        LINE_OPACITY
    };
    for path in &layout.line_paths {
        for &(from, to) in &path.segments {
            scene.push(Primitive::Segment {
                from,
                to,
                stroke: Stroke::solid(path.color.clone(), LINE_WIDTH).with_opacity(opacity),
            });
        }
    }
}

fn push_highlights(scene: &mut Vec<Primitive>, layout: &MapLayout, theme: &Theme) {
    let transfer_color = theme.resolve_or_default("highlight-transfer");
    let fallback_color = theme.resolve_or_default("highlight-fallback");

    let color_of = |segment: &crate::layout::HighlightSegment| match segment.kind {
        SegmentKind::Transfer => transfer_color.clone(),
        SegmentKind::Normal => segment
            .color
            .clone()
            .unwrap_or_else(|| fallback_color.clone()),
    };

    // All glow layers first so no glow washes over a neighbor's core
    for segment in &layout.highlights {
        scene.push(Primitive::Segment {
            from: segment.from,
            to: segment.to,
            stroke: Stroke::solid(color_of(segment), GLOW_WIDTH).with_opacity(GLOW_OPACITY),
        });
    }
    for segment in &layout.highlights {
        let mut stroke = Stroke::solid(color_of(segment), CORE_WIDTH);
        if segment.kind == SegmentKind::Transfer {
            stroke = stroke.with_dash(TRANSFER_DASH);
        }
        scene.push(Primitive::Segment {
            from: segment.from,
            to: segment.to,
            stroke,
        });
    }
}

fn push_markers(
    scene: &mut Vec<Primitive>,
    layout: &MapLayout,
    config: &LayoutConfig,
    theme: &Theme,
    prefs: &UiPreferences,
) {
    let stroke_color = if prefs.high_contrast {
        theme.resolve_or_default("marker-stroke-high-contrast")
    } else {
        theme.resolve_or_default("marker-stroke")
    };
    for marker in &layout.markers {
        // On-route and hub markers read slightly larger
        let radius = if marker.on_route || marker.transfer {
            config.marker_radius + 1.0
        } else {
            config.marker_radius
        };
        scene.push(Primitive::Circle {
            center: marker.position,
            radius,
            fill: marker.color.clone(),
            stroke: Some(Stroke::solid(stroke_color.clone(), 1.5)),
        });
    }
}

fn push_labels(
    scene: &mut Vec<Primitive>,
    layout: &MapLayout,
    theme: &Theme,
    prefs: &UiPreferences,
) {
    let color_token = if prefs.high_contrast {
        "label-high-contrast"
    } else {
        "label"
    };
    let color = theme.resolve_or_default(color_token);
    let size = label_size(prefs);
    let background_fill = theme.resolve_or_default("label-background");

    for label in &layout.labels {
        let background = prefs.high_contrast.then(|| TextBackground {
            rect: label.rect,
            fill: background_fill.clone(),
        });
        scene.push(Primitive::Text {
            position: Point::new(label.rect.x, label.rect.bottom() - 2.0),
            content: label.text.clone(),
            size,
            color: color.clone(),
            background,
        });
    }
}

fn label_size(prefs: &UiPreferences) -> f64 {
    if prefs.large_labels {
        LABEL_FONT_SIZE_LARGE
    } else {
        LABEL_FONT_SIZE
    }
}

fn push_legend(
    scene: &mut Vec<Primitive>,
    layout: &MapLayout,
    config: &LayoutConfig,
    theme: &Theme,
    prefs: &UiPreferences,
) {
    let (origin_x, origin_y) = config.legend_origin;
    let text_color = theme.resolve_or_default("legend-text");

    for (row, entry) in layout.legend.iter().enumerate() {
        let y = origin_y + row as f64 * config.legend_row_height;
        scene.push(Primitive::Segment {
            from: Point::new(origin_x, y),
            to: Point::new(origin_x + LEGEND_SWATCH_LENGTH, y),
            stroke: Stroke::solid(entry.color.clone(), 4.0),
        });
        scene.push(Primitive::Text {
            position: Point::new(origin_x + LEGEND_SWATCH_LENGTH + LEGEND_TEXT_GAP, y + 3.0),
            content: format!("Line {}", entry.line),
            size: label_size(prefs),
            color: text_color.clone(),
            background: None,
        });
    }
}
