//! Legende der Node-Typen als Overlay am unteren linken Viewport-Rand.

use egui::{pos2, Align2, Color32, FontId, Rect, Stroke};

use crate::core::NodeKind;
use crate::shared::options::{COLOR_KNOWLEDGE, COLOR_MILESTONE, COLOR_SKILL, COLOR_TRAIT};

/// Zeichnet die Legende direkt in den Viewport-Painter.
pub fn draw_legend(painter: &egui::Painter, viewport: Rect) {
    let entries = [
        (NodeKind::Knowledge, COLOR_KNOWLEDGE),
        (NodeKind::Skill, COLOR_SKILL),
        (NodeKind::Trait, COLOR_TRAIT),
        (NodeKind::Milestone, COLOR_MILESTONE),
    ];

    let line_height = 18.0;
    let origin = pos2(
        viewport.min.x + 12.0,
        viewport.max.y - 12.0 - entries.len() as f32 * line_height,
    );

    for (i, (kind, color)) in entries.iter().enumerate() {
        let y = origin.y + i as f32 * line_height;
        let swatch_center = pos2(origin.x + 6.0, y + 6.0);
        let color = crate::render::color32(*color);

        painter.circle_filled(swatch_center, 5.0, Color32::from_black_alpha(120));
        painter.circle_stroke(swatch_center, 5.0, Stroke::new(1.5, color));

        painter.text(
            pos2(origin.x + 18.0, y + 6.0),
            Align2::LEFT_CENTER,
            kind.label(),
            FontId::proportional(11.0),
            Color32::from_white_alpha(200),
        );
    }

    painter.text(
        pos2(viewport.max.x - 12.0, viewport.max.y - 12.0),
        Align2::RIGHT_BOTTOM,
        "Scroll to zoom | Drag to pan",
        FontId::proportional(11.0),
        Color32::from_white_alpha(120),
    );
}
