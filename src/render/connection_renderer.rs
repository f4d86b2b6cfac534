//! Zeichnet Verbindungen als Bezier-Kurven zwischen Level-Headern.

use egui::epaint::QuadraticBezierShape;
use egui::{pos2, Color32, Pos2, Rect, Shape, Stroke};

use crate::core::ConnectionKind;
use crate::shared::options::{COLOR_CONNECTION_BRANCH, COLOR_CONNECTION_MAIN};
use crate::shared::RenderScene;

use super::{color32, world_to_rect};

/// Zeichnet alle Verbindungen der Szene (vor den Nodes).
pub fn draw(painter: &egui::Painter, rect: Rect, scene: &RenderScene) {
    let zoom = scene.camera.zoom;
    // Großzügiger Rand: die Kurve kann über die Endpunkte hinausragen
    let cull_rect = rect.expand(200.0);

    for connection in &scene.layout.connections {
        let (Some(from), Some(to)) = (
            scene.layout.nodes.get(connection.from),
            scene.layout.nodes.get(connection.to),
        ) else {
            continue;
        };

        let start = world_to_rect(from.position, &scene.camera, rect);
        let end = world_to_rect(to.position, &scene.camera, rect);
        if !segment_touches_rect(start, end, cull_rect) {
            continue;
        }

        // Leichter Bogen nach oben zwischen den Headern
        let mid = pos2((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        let lift = (end - start).length() * 0.12;
        let control = pos2(mid.x, mid.y - lift);

        match connection.kind {
            ConnectionKind::MainPath => {
                let stroke = Stroke::new(
                    (3.0 * zoom).clamp(1.5, 4.5),
                    color32(COLOR_CONNECTION_MAIN),
                );
                painter.add(Shape::from(QuadraticBezierShape::from_points_stroke(
                    [start, control, end],
                    false,
                    Color32::TRANSPARENT,
                    stroke,
                )));
            }
            ConnectionKind::Branch => {
                // Gestrichelt: Kurve flach klopfen und als Dash-Polylinie zeichnen
                let bezier = QuadraticBezierShape::from_points_stroke(
                    [start, control, end],
                    false,
                    Color32::TRANSPARENT,
                    Stroke::NONE,
                );
                let points = bezier.flatten(Some(0.5));
                let stroke = Stroke::new(
                    (1.5 * zoom).clamp(0.75, 2.5),
                    color32(COLOR_CONNECTION_BRANCH),
                );
                painter.extend(Shape::dashed_line(&points, stroke, 6.0, 4.0));
            }
        }
    }
}

/// Grobe Sichtbarkeitsprüfung über die Bounding-Box des Segments.
fn segment_touches_rect(a: Pos2, b: Pos2, rect: Rect) -> bool {
    let min = pos2(a.x.min(b.x), a.y.min(b.y));
    let max = pos2(a.x.max(b.x), a.y.max(b.y));
    Rect::from_min_max(min, max).intersects(rect)
}
