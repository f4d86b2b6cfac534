//! Zeichnet die generierte Hintergrund-Szene im Pixel-Art-Stil.
//!
//! Die Szene liegt in Viewport-Koordinaten (0..Breite, 0..Höhe) und wird
//! unabhängig von der Kamera gezeichnet. Schichtung: Himmel → Sterne →
//! Sternschnuppen → Mond → Wolken → Berge (hinten nach vorn) → Bäume.

use egui::{pos2, vec2, Color32, Mesh, Pos2, Rect, Shape, Stroke};

use crate::core::{
    BackgroundState, Cloud, Moon, MountainLayer, SeededRng, ShootingStar, Star, Tree,
};
use crate::shared::options::COLOR_BACKGROUND;

use super::{color32, color32_with_alpha};

/// Highlight-Farbe der Bergkämme (rgba(100, 180, 220, …)).
const RIDGE_HIGHLIGHT: [f32; 4] = [0.392, 0.706, 0.863, 1.0];

/// Zeichnet die komplette Hintergrund-Szene.
pub fn draw(painter: &egui::Painter, rect: Rect, state: &BackgroundState, time: f64) {
    draw_sky(painter, rect, state);

    for star in &state.stars {
        draw_star(painter, rect, star, time);
    }

    for shooting_star in &state.shooting_stars {
        draw_shooting_star(painter, rect, shooting_star);
    }

    draw_moon(painter, rect, &state.moon);

    for cloud in &state.clouds {
        // Dither-Muster pro Wolke deterministisch aus Seed und Position
        let dither_seed = state
            .seed
            .wrapping_add((cloud.position.x + cloud.position.y) as u32);
        draw_cloud(painter, rect, cloud, SeededRng::new(dither_seed));
    }

    let mut mountains: Vec<&MountainLayer> = state.mountains.iter().collect();
    mountains.sort_by_key(|m| m.layer);
    for mountain in mountains {
        draw_mountain(painter, rect, mountain);
    }

    for tree in &state.trees {
        draw_tree(painter, rect, tree);
    }
}

/// Vierstufiger vertikaler Himmelsverlauf als Vertex-Farben-Mesh.
fn draw_sky(painter: &egui::Painter, rect: Rect, state: &BackgroundState) {
    let mut mesh = Mesh::default();
    let stops = [
        (0.0, color32(state.sky.top)),
        (0.4, color32(state.sky.mid)),
        (0.8, color32(state.sky.bottom)),
        (1.0, color32(COLOR_BACKGROUND)),
    ];

    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        gradient_band(
            &mut mesh,
            Rect::from_min_max(
                pos2(rect.min.x, rect.min.y + rect.height() * t0),
                pos2(rect.max.x, rect.min.y + rect.height() * t1),
            ),
            c0,
            c1,
        );
    }

    painter.add(Shape::mesh(mesh));
}

/// Fügt dem Mesh ein vertikal interpoliertes Farbband hinzu.
fn gradient_band(mesh: &mut Mesh, band: Rect, top: Color32, bottom: Color32) {
    let i = mesh.vertices.len() as u32;
    mesh.colored_vertex(band.left_top(), top);
    mesh.colored_vertex(band.right_top(), top);
    mesh.colored_vertex(band.right_bottom(), bottom);
    mesh.colored_vertex(band.left_bottom(), bottom);
    mesh.add_triangle(i, i + 1, i + 2);
    mesh.add_triangle(i, i + 2, i + 3);
}

/// Pixel-Stern in drei Größenstufen, mit Twinkle über die Zeit.
fn draw_star(painter: &egui::Painter, rect: Rect, star: &Star, time: f64) {
    let twinkle = 0.7 + 0.3 * (time * 2.0 + f64::from(star.twinkle_phase)).sin() as f32;
    let brightness = star.brightness * twinkle;
    let origin = rect.min + vec2(star.position.x.floor(), star.position.y.floor());
    let fill = |alpha: f32| color32_with_alpha(star.color, alpha);

    let px = |x: f32, y: f32, w: f32, h: f32, alpha: f32| {
        painter.rect_filled(
            Rect::from_min_size(origin + vec2(x, y), vec2(w, h)),
            egui::CornerRadius::ZERO,
            fill(alpha),
        );
    };

    match star.size {
        1 => px(0.0, 0.0, 2.0, 2.0, brightness),
        2 => {
            px(0.0, 0.0, 3.0, 3.0, brightness);
            // Seitenpixel als halbtransparentes Kreuz
            px(-1.0, 1.0, 1.0, 1.0, brightness * 0.5);
            px(3.0, 1.0, 1.0, 1.0, brightness * 0.5);
            px(1.0, -1.0, 1.0, 1.0, brightness * 0.5);
            px(1.0, 3.0, 1.0, 1.0, brightness * 0.5);
        }
        _ => {
            px(0.0, 0.0, 4.0, 4.0, brightness);
            px(-1.0, 1.0, 1.0, 2.0, brightness * 0.6);
            px(4.0, 1.0, 1.0, 2.0, brightness * 0.6);
            px(1.0, -1.0, 2.0, 1.0, brightness * 0.6);
            px(1.0, 4.0, 2.0, 1.0, brightness * 0.6);
            px(-2.0, 1.0, 1.0, 2.0, brightness * 0.3);
            px(5.0, 1.0, 1.0, 2.0, brightness * 0.3);
        }
    }
}

/// Sternschnuppe: heller Kopf, ausfadender goldener Schweif.
fn draw_shooting_star(painter: &egui::Painter, rect: Rect, star: &ShootingStar) {
    let segments = (star.length / 4.0).ceil() as usize;
    let gold = [1.0, 0.843, 0.0, 1.0];

    for i in 0..segments {
        let t = i as f32 / segments as f32;
        let pos = rect.min
            + vec2(
                (star.position.x - star.angle.cos() * star.length * t).floor(),
                (star.position.y + star.angle.sin() * star.length * t).floor(),
            );

        if i == 0 {
            painter.rect_filled(
                Rect::from_min_size(pos, vec2(4.0, 4.0)),
                egui::CornerRadius::ZERO,
                color32_with_alpha([1.0, 1.0, 1.0, 1.0], star.brightness),
            );
            // Glow-Kreuz um den Kopf
            let glow = color32_with_alpha(gold, star.brightness * 0.6);
            for (dx, dy) in [(-2.0, 1.0), (4.0, 1.0), (1.0, -2.0), (1.0, 4.0)] {
                painter.rect_filled(
                    Rect::from_min_size(pos + vec2(dx, dy), vec2(2.0, 2.0)),
                    egui::CornerRadius::ZERO,
                    glow,
                );
            }
        } else {
            let alpha = star.brightness * (1.0 - t * 0.9);
            let size = (4 - (i as i32) / 3).max(2) as f32;
            painter.rect_filled(
                Rect::from_min_size(pos, vec2(size, size)),
                egui::CornerRadius::ZERO,
                color32_with_alpha(gold, alpha),
            );
        }
    }
}

/// Mond mit mehrstufigem Glow und Krater-Highlight.
fn draw_moon(painter: &egui::Painter, rect: Rect, moon: &Moon) {
    let center = rect.min + vec2(moon.position.x.floor(), moon.position.y.floor());
    let radius = moon.radius.floor();

    for layer in (1..=4u32).rev() {
        let glow_radius = radius + layer as f32 * 15.0;
        let alpha = 0.05 * (5 - layer) as f32;
        painter.circle_filled(center, glow_radius, color32_with_alpha(moon.glow_color, alpha));
    }

    painter.circle_filled(center, radius, color32(crate::core::background::MOON_COLOR));
    painter.circle_filled(
        center - vec2(radius * 0.1, radius * 0.1),
        radius * 0.7,
        color32_with_alpha(crate::core::background::MOON_HIGHLIGHT, 0.5),
    );
}

/// Wolke mit geditherten Pixel-Kanten und Leucht-Rand.
fn draw_cloud(painter: &egui::Painter, rect: Rect, cloud: &Cloud, mut rng: SeededRng) {
    let pixel = 4.0;
    let origin = rect.min + vec2(cloud.position.x, cloud.position.y);
    let half_w = cloud.width / 2.0;
    let half_h = cloud.height / 2.0;

    // Leucht-Rand
    let glow = color32_with_alpha(cloud.glow_color, 0.15);
    let mut py = 0.0;
    while py < cloud.height + 8.0 {
        let mut px = 0.0;
        while px < cloud.width + 8.0 {
            let nx = (px - half_w) / half_w;
            let ny = (py - half_h) / half_h;
            let dist = (nx * nx * 0.5 + ny * ny).sqrt();
            if dist < 1.2 && rng.next() > dist * 0.5 {
                painter.rect_filled(
                    Rect::from_min_size(
                        pos2((origin.x + px - 4.0).floor(), (origin.y + py - 4.0).floor()),
                        vec2(pixel, pixel),
                    ),
                    egui::CornerRadius::ZERO,
                    glow,
                );
            }
            px += pixel;
        }
        py += pixel;
    }

    // Wolkenkörper mit ausfadenden Kanten
    let mut py = 0.0;
    while py < cloud.height {
        let mut px = 0.0;
        while px < cloud.width {
            let nx = (px - half_w) / half_w;
            let ny = (py - half_h) / half_h;
            let dist = (nx * nx * 0.5 + ny * ny).sqrt();
            if dist < 1.0 {
                let edge_fade = 1.0 - dist;
                let alpha = (edge_fade * 2.0).min(1.0) * 0.8;
                if rng.next() > dist * 0.3 {
                    painter.rect_filled(
                        Rect::from_min_size(
                            pos2((origin.x + px).floor(), (origin.y + py).floor()),
                            vec2(pixel, pixel),
                        ),
                        egui::CornerRadius::ZERO,
                        color32_with_alpha(cloud.color, alpha),
                    );
                }
            }
            px += pixel;
        }
        py += pixel;
    }
}

/// Berg-Silhouette als Mesh aus Vertikalstreifen, Kanten pixel-gestuft.
fn draw_mountain(painter: &egui::Painter, rect: Rect, mountain: &MountainLayer) {
    if mountain.points.len() < 2 {
        return;
    }

    // Fernere Schichten bekommen feinere Pixel
    let pixel = if mountain.layer <= 1 { 2.0 } else { 3.0 };
    let snap = |v: f32| (v / pixel).floor() * pixel;
    let color = color32(mountain.color);
    let bottom = rect.max.y;

    let mut mesh = Mesh::default();
    let mut ridge: Vec<Pos2> = Vec::with_capacity(mountain.points.len());
    for point in &mountain.points {
        ridge.push(pos2(rect.min.x + snap(point.x), rect.min.y + snap(point.y)));
    }

    for pair in ridge.windows(2) {
        let i = mesh.vertices.len() as u32;
        mesh.colored_vertex(pair[0], color);
        mesh.colored_vertex(pair[1], color);
        mesh.colored_vertex(pos2(pair[1].x, bottom), color);
        mesh.colored_vertex(pos2(pair[0].x, bottom), color);
        mesh.add_triangle(i, i + 1, i + 2);
        mesh.add_triangle(i, i + 2, i + 3);
    }
    painter.add(Shape::mesh(mesh));

    // Dezentes Kamm-Highlight nur auf den mittleren Schichten
    if mountain.layer == 1 || mountain.layer == 2 {
        let alpha = if mountain.layer == 1 { 0.1 } else { 0.05 };
        painter.add(Shape::line(
            ridge,
            Stroke::new(1.0, color32_with_alpha(RIDGE_HIGHLIGHT, alpha)),
        ));
    }
}

/// Nadelbaum: Stamm plus dreieckig gestapelte Laub-Reihen.
fn draw_tree(painter: &egui::Painter, rect: Rect, tree: &Tree) {
    let pixel = 3.0;
    let base = rect.min + vec2(tree.position.x.floor(), tree.position.y.floor());
    let color = color32(tree.color);

    painter.rect_filled(
        Rect::from_min_size(base, vec2(pixel, pixel * 2.0)),
        egui::CornerRadius::ZERO,
        color,
    );

    let layers = (tree.height / 8.0).ceil() as i32;
    for layer in 0..layers {
        let layer_y = base.y - (layer + 1) as f32 * 8.0;
        let layer_width = (layers - layer) * 2 + 1;
        let start_x = base.x - (layer_width / 2) as f32 * pixel + pixel / 2.0;

        for i in 0..layer_width {
            painter.rect_filled(
                Rect::from_min_size(pos2(start_x + i as f32 * pixel, layer_y), vec2(pixel, 10.0)),
                egui::CornerRadius::ZERO,
                color,
            );
        }
    }
}
