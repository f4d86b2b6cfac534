//! Zeichnet Nodes mit typ-spezifischen Formen, Glow und Labels.
//!
//! Reihenfolge pro Frame: erst alle regulären Nodes, dann gehoverte und
//! selektierte — Hervorhebungen liegen dadurch immer oben, unabhängig
//! von der Arena-Reihenfolge.

use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke};

use crate::core::{requirement_met, CanvasNode, NodeKind};
use crate::shared::options::{
    COLOR_BACKGROUND, COLOR_HOVER_GLOW, COLOR_KNOWLEDGE, COLOR_LABEL_TEXT, COLOR_LABEL_TEXT_DIM,
    COLOR_LEVEL, COLOR_MILESTONE, COLOR_SELECTED_GLOW, COLOR_SKILL, COLOR_TRAIT,
};
use crate::shared::RenderScene;

use super::{color32, color32_with_alpha, world_to_rect};

/// Darstellungszustand eines Nodes, aufsteigend nach Prominenz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NodeEmphasis {
    Plain,
    Hovered,
    Selected,
    Completed,
}

impl NodeEmphasis {
    /// Glow-Intensität der Stufe.
    fn glow_intensity(self) -> f32 {
        match self {
            NodeEmphasis::Plain => 0.3,
            NodeEmphasis::Hovered => 0.55,
            NodeEmphasis::Selected => 0.8,
            NodeEmphasis::Completed => 1.0,
        }
    }
}

/// Zeichnet alle sichtbaren Nodes der Szene.
pub fn draw(painter: &egui::Painter, rect: Rect, scene: &RenderScene) {
    let zoom = scene.camera.zoom;
    let margin = scene.options.cull_margin_px;

    let mut special = Vec::new();
    for (index, node) in scene.layout.nodes.iter().enumerate() {
        let center = world_to_rect(node.position, &scene.camera, rect);
        let screen_radius = node.radius * zoom;

        // Culling: Screen-Kreis plus Rand komplett außerhalb → überspringen
        if !circle_intersects_rect(center, screen_radius + margin, rect) {
            continue;
        }

        let is_hovered = scene.hovered_node == Some(index);
        let is_selected = scene.selected_node == Some(index);
        if is_hovered || is_selected {
            special.push((node, center, screen_radius, is_hovered, is_selected));
            continue;
        }

        draw_node(painter, scene, node, center, screen_radius, false, false);
    }

    for (node, center, screen_radius, is_hovered, is_selected) in special {
        draw_node(painter, scene, node, center, screen_radius, is_hovered, is_selected);
    }
}

/// Prüft, ob ein Kreis das Rechteck schneidet.
fn circle_intersects_rect(center: Pos2, radius: f32, rect: Rect) -> bool {
    center.x + radius >= rect.min.x
        && center.x - radius <= rect.max.x
        && center.y + radius >= rect.min.y
        && center.y - radius <= rect.max.y
}

/// Zeichnet einen einzelnen Node: Glow, Körper, Ornament, Label.
fn draw_node(
    painter: &egui::Painter,
    scene: &RenderScene,
    node: &CanvasNode,
    center: Pos2,
    screen_radius: f32,
    is_hovered: bool,
    is_selected: bool,
) {
    let completed = scene
        .progress()
        .map(|progress| requirement_met(node, progress))
        .unwrap_or(false);

    let mut emphasis = NodeEmphasis::Plain;
    if is_hovered {
        emphasis = emphasis.max(NodeEmphasis::Hovered);
    }
    if is_selected {
        emphasis = emphasis.max(NodeEmphasis::Selected);
    }
    if completed {
        emphasis = emphasis.max(NodeEmphasis::Completed);
    }

    let base_color = kind_color(node.kind);
    draw_glow(painter, center, screen_radius, base_color, emphasis);

    // Erfüllte Nodes sind getönt gefüllt, unerfüllte hohl/dunkel
    let fill = if completed {
        color32_with_alpha(base_color, 0.35)
    } else {
        color32_with_alpha(COLOR_BACKGROUND, 0.85)
    };
    let stroke = Stroke::new((2.0 * scene.camera.zoom).clamp(1.0, 3.0), color32(base_color));

    draw_body(painter, node.kind, center, screen_radius, fill, stroke);
    draw_ornament(painter, node.kind, center, screen_radius, color32(base_color));

    if is_selected {
        painter.circle_stroke(
            center,
            screen_radius * 1.25,
            Stroke::new(1.5, color32(COLOR_SELECTED_GLOW)),
        );
    } else if is_hovered {
        painter.circle_stroke(
            center,
            screen_radius * 1.2,
            Stroke::new(1.0, color32(COLOR_HOVER_GLOW)),
        );
    }

    if scene.camera.zoom >= scene.options.label_zoom_threshold {
        draw_label(painter, scene, node, center, screen_radius);
    }
}

/// Mehrschichtiger radialer Glow, Intensität nach Zustand.
fn draw_glow(
    painter: &egui::Painter,
    center: Pos2,
    screen_radius: f32,
    base_color: [f32; 4],
    emphasis: NodeEmphasis,
) {
    let intensity = emphasis.glow_intensity();
    for (radius_factor, alpha_factor) in [(1.9, 0.08), (1.5, 0.16), (1.15, 0.28)] {
        painter.circle_filled(
            center,
            screen_radius * radius_factor,
            color32_with_alpha(base_color, 0.6 * intensity * alpha_factor),
        );
    }
}

/// Typ-spezifische Grundform.
fn draw_body(
    painter: &egui::Painter,
    kind: NodeKind,
    center: Pos2,
    screen_radius: f32,
    fill: Color32,
    stroke: Stroke,
) {
    match kind {
        NodeKind::Skill => {
            painter.circle_filled(center, screen_radius, fill);
            painter.circle_stroke(center, screen_radius, stroke);
        }
        NodeKind::Level => {
            let rect = Rect::from_center_size(
                center,
                vec2(screen_radius * 2.4, screen_radius * 1.2),
            );
            let rounding = egui::CornerRadius::same((screen_radius * 0.25).clamp(2.0, 12.0) as u8);
            painter.rect_filled(rect, rounding, fill);
            painter.rect_stroke(rect, rounding, stroke, egui::StrokeKind::Middle);
        }
        NodeKind::Knowledge => {
            polygon(painter, center, screen_radius, 6, -std::f32::consts::FRAC_PI_2, fill, stroke)
        }
        NodeKind::Trait => {
            polygon(painter, center, screen_radius, 4, -std::f32::consts::FRAC_PI_2, fill, stroke)
        }
        NodeKind::Milestone => polygon(
            painter,
            center,
            screen_radius,
            8,
            std::f32::consts::TAU / 16.0,
            fill,
            stroke,
        ),
    }
}

/// Regelmäßiges Polygon um den Mittelpunkt.
fn polygon(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    sides: usize,
    angle_offset: f32,
    fill: Color32,
    stroke: Stroke,
) {
    let points: Vec<Pos2> = (0..sides)
        .map(|i| {
            let angle = angle_offset + i as f32 * std::f32::consts::TAU / sides as f32;
            pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();
    painter.add(Shape::convex_polygon(points, fill, stroke));
}

/// Kleines inneres Ornament zur Formunterscheidung.
fn draw_ornament(
    painter: &egui::Painter,
    kind: NodeKind,
    center: Pos2,
    screen_radius: f32,
    color: Color32,
) {
    let thin = Stroke::new(1.0, color);
    match kind {
        NodeKind::Knowledge => polygon(
            painter,
            center,
            screen_radius * 0.5,
            6,
            -std::f32::consts::FRAC_PI_2,
            Color32::TRANSPARENT,
            thin,
        ),
        NodeKind::Skill => painter.circle_filled(center, screen_radius * 0.18, color),
        NodeKind::Trait => polygon(
            painter,
            center,
            screen_radius * 0.5,
            4,
            -std::f32::consts::FRAC_PI_2,
            Color32::TRANSPARENT,
            thin,
        ),
        NodeKind::Milestone => {
            let arm = screen_radius * 0.45;
            painter.line_segment(
                [center - vec2(arm, 0.0), center + vec2(arm, 0.0)],
                thin,
            );
            painter.line_segment(
                [center - vec2(0.0, arm), center + vec2(0.0, arm)],
                thin,
            );
        }
        NodeKind::Level => {}
    }
}

/// Label mit iterativer Ellipsen-Kürzung auf die maximale Breite.
fn draw_label(
    painter: &egui::Painter,
    scene: &RenderScene,
    node: &CanvasNode,
    center: Pos2,
    screen_radius: f32,
) {
    let max_width = scene.options.max_label_width_px;

    if node.kind == NodeKind::Level {
        // Header-Name mittig im Rechteck, Punkteschwelle darunter
        let galley = truncated_galley(
            painter,
            &node.name,
            FontId::proportional(14.0),
            color32(COLOR_LABEL_TEXT),
            max_width,
        );
        let pos = center - vec2(galley.size().x / 2.0, galley.size().y / 2.0);
        painter.galley(pos, galley, color32(COLOR_LABEL_TEXT));

        if let Some(points) = node.points_required {
            painter.text(
                center + vec2(0.0, screen_radius * 0.6 + 14.0),
                Align2::CENTER_TOP,
                format!("{points} pts"),
                FontId::proportional(11.0),
                color32(COLOR_LABEL_TEXT_DIM),
            );
        }
        return;
    }

    let galley = truncated_galley(
        painter,
        &node.name,
        FontId::proportional(12.0),
        color32(COLOR_LABEL_TEXT),
        max_width,
    );
    let pos = pos2(
        center.x - galley.size().x / 2.0,
        center.y + screen_radius + 6.0,
    );
    painter.galley(pos, galley, color32(COLOR_LABEL_TEXT));
}

/// Kürzt den Text zeichenweise von hinten, bis er mit Ellipse passt.
fn truncated_galley(
    painter: &egui::Painter,
    text: &str,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> std::sync::Arc<egui::Galley> {
    let full = painter.layout_no_wrap(text.to_owned(), font.clone(), color);
    if full.size().x <= max_width {
        return full;
    }

    let mut chars: Vec<char> = text.chars().collect();
    while chars.len() > 1 {
        chars.pop();
        let mut candidate: String = chars.iter().collect();
        candidate.push('…');
        let galley = painter.layout_no_wrap(candidate, font.clone(), color);
        if galley.size().x <= max_width {
            return galley;
        }
    }

    painter.layout_no_wrap("…".to_owned(), font, color)
}

/// Grundfarbe pro Node-Typ.
fn kind_color(kind: NodeKind) -> [f32; 4] {
    match kind {
        NodeKind::Knowledge => COLOR_KNOWLEDGE,
        NodeKind::Skill => COLOR_SKILL,
        NodeKind::Trait => COLOR_TRAIT,
        NodeKind::Milestone => COLOR_MILESTONE,
        NodeKind::Level => COLOR_LEVEL,
    }
}
