//! Prozeduraler Hintergrund: Sternenhimmel, Mond, Wolken, Berge, Bäume.
//!
//! Jede Domain bekommt eine eigene, stabile Szene, gekeyt allein über den
//! Namen. Alle Teil-Generatoren ziehen aus EINEM gemeinsamen
//! Zufallsstrom in fester Aufrufreihenfolge (Himmel → Sterne → Mond →
//! Wolken → Berge → Bäume → Sternschnuppen). Die Reihenfolge ist
//! eingefroren: eine Änderung verschiebt jede nachfolgende Szene für
//! jede Domain.
//!
//! Die Zahlenbereiche sind bewusst übernommene Vertragsdaten — geprüft
//! wird Determinismus und Schichtung, nicht die Ästhetik einzelner Werte.

use glam::Vec2;

use super::rng::{hash_seed, SeededRng};

/// Farbe der fernsten Berg-Silhouette (#1e4a5a).
const MOUNTAIN_COLOR_FAR: [f32; 4] = [0.118, 0.290, 0.353, 1.0];
/// Farbe der hinteren Bergkette (#153545).
const MOUNTAIN_COLOR_BACK: [f32; 4] = [0.082, 0.208, 0.271, 1.0];
/// Farbe der mittleren Bergkette (#0f2530).
const MOUNTAIN_COLOR_MID: [f32; 4] = [0.059, 0.145, 0.188, 1.0];
/// Farbe der Vordergrund-Klippen (#0a1a22).
const MOUNTAIN_COLOR_CLIFF: [f32; 4] = [0.039, 0.102, 0.133, 1.0];
/// Baumfarbe (#1a4a2a).
const TREE_COLOR: [f32; 4] = [0.102, 0.290, 0.165, 1.0];
/// Helle Wolkenfarbe (#4a8faf).
const CLOUD_COLOR_BRIGHT: [f32; 4] = [0.290, 0.561, 0.686, 1.0];
/// Dunkle Wolkenfarbe (#2d5a73).
const CLOUD_COLOR_DARK: [f32; 4] = [0.176, 0.353, 0.451, 1.0];
/// Mondfarbe (#c8d8e8).
pub const MOON_COLOR: [f32; 4] = [0.784, 0.847, 0.910, 1.0];
/// Mond-Highlight (#e8f0f8).
pub const MOON_HIGHLIGHT: [f32; 4] = [0.910, 0.941, 0.973, 1.0];
/// Stern-Weiß (#ffffff).
const STAR_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Stern-Gold (#ffd700).
const STAR_GOLD: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
/// Warmes Stern-Weiß (#ffffcc).
const STAR_WARM: [f32; 4] = [1.0, 1.0, 0.8, 1.0];
/// Kühles Stern-Weiß (#ccffff).
const STAR_COOL: [f32; 4] = [0.8, 1.0, 1.0, 1.0];

/// Einzelner Stern mit Helligkeitsstufe und Twinkle-Phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vec2,
    /// Größenstufe 1..=3
    pub size: u8,
    pub brightness: f32,
    pub twinkle_phase: f32,
    pub color: [f32; 4],
}

/// Wolke mit Leucht-Rand.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
    pub glow_color: [f32; 4],
}

/// Eine Berg-Silhouette als Höhenkurve.
#[derive(Debug, Clone, PartialEq)]
pub struct MountainLayer {
    /// Stützpunkte der Silhouette, links nach rechts
    pub points: Vec<Vec2>,
    pub color: [f32; 4],
    /// 0 = am weitesten hinten, höher = näher
    pub layer: u8,
}

/// Nadelbaum auf den Vordergrund-Klippen.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub position: Vec2,
    pub height: f32,
    pub color: [f32; 4],
}

/// Sternschnuppe mit Richtung und Länge.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub position: Vec2,
    pub length: f32,
    pub angle: f32,
    pub brightness: f32,
}

/// Mond mit Glow-Farbe aus dem Himmelsverlauf.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    pub position: Vec2,
    pub radius: f32,
    pub glow_color: [f32; 4],
}

/// Vierstufiger Himmelsverlauf plus Komplementär-Akzent.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyColors {
    pub top: [f32; 4],
    pub mid: [f32; 4],
    pub bottom: [f32; 4],
    pub accent: [f32; 4],
}

/// Komplette Hintergrund-Szene einer Domain.
///
/// Reine Funktion von `(Domain-Name, Breite, Höhe)` — identische Inputs
/// ergeben bitidentischen Output.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundState {
    pub stars: Vec<Star>,
    pub moon: Moon,
    pub clouds: Vec<Cloud>,
    pub mountains: Vec<MountainLayer>,
    pub trees: Vec<Tree>,
    pub shooting_stars: Vec<ShootingStar>,
    pub sky: SkyColors,
    pub seed: u32,
    /// Viewport-Größe, für die die Szene generiert wurde
    pub size: Vec2,
}

/// Generiert die Hintergrund-Szene für eine Domain.
pub fn generate_background(domain_name: &str, width: f32, height: f32) -> BackgroundState {
    let seed = hash_seed(domain_name);
    let mut rng = SeededRng::new(seed);

    let sky = generate_sky_colors(&mut rng);
    let stars = generate_stars(&mut rng, width, height);
    let moon = generate_moon(&mut rng, width, height, &sky);
    let clouds = generate_clouds(&mut rng, width, height, &sky);
    let mountains = generate_mountains(&mut rng, width, height);
    let trees = generate_trees(&mut rng, width, height);
    let shooting_stars = generate_shooting_stars(&mut rng, width, height);

    BackgroundState {
        stars,
        moon,
        clouds,
        mountains,
        trees,
        shooting_stars,
        sky,
        seed,
        size: Vec2::new(width, height),
    }
}

/// Himmelsfarben: Basis-Farbton im Blau/Teal-Band, Akzent komplementär.
fn generate_sky_colors(rng: &mut SeededRng) -> SkyColors {
    let base_hue = (rng.next() * 60.0).floor() + 190.0;
    let saturation = 50.0 + rng.next() * 30.0;

    SkyColors {
        top: hsl(base_hue + 20.0, saturation, 8.0),
        mid: hsl(base_hue, saturation + 10.0, 18.0),
        bottom: hsl(base_hue - 10.0, saturation, 25.0),
        accent: hsl((base_hue + 140.0) % 360.0, 70.0, 60.0),
    }
}

/// Sternenfeld: Dichte proportional zur Viewport-Fläche, nur obere 70%.
fn generate_stars(rng: &mut SeededRng, width: f32, height: f32) -> Vec<Star> {
    let star_count = ((width * height) / 600.0).floor() as usize;
    let mut stars = Vec::with_capacity(star_count);

    for _ in 0..star_count {
        let brightness = rng.next();
        let size = if brightness > 0.97 {
            3
        } else if brightness > 0.85 {
            2
        } else {
            1
        };

        // Meist weiß, selten gold
        let color_roll = rng.next();
        let color = if color_roll > 0.95 {
            STAR_GOLD
        } else if color_roll > 0.85 {
            STAR_WARM
        } else if color_roll > 0.7 {
            STAR_COOL
        } else {
            STAR_WHITE
        };

        stars.push(Star {
            position: Vec2::new(
                (rng.next() * width).floor(),
                (rng.next() * height * 0.7).floor(),
            ),
            size,
            brightness: 0.4 + brightness * 0.6,
            twinkle_phase: rng.next() * std::f32::consts::TAU,
            color,
        });
    }

    stars
}

/// Mond im linken oberen Bereich.
fn generate_moon(rng: &mut SeededRng, width: f32, height: f32, sky: &SkyColors) -> Moon {
    Moon {
        position: Vec2::new(
            width * (0.1 + rng.next() * 0.3),
            height * (0.1 + rng.next() * 0.25),
        ),
        radius: 20.0 + rng.next() * 30.0,
        glow_color: sky.bottom,
    }
}

/// Wolkenband im mittleren Himmel.
fn generate_clouds(rng: &mut SeededRng, width: f32, height: f32, sky: &SkyColors) -> Vec<Cloud> {
    let cloud_count = 4 + (rng.next() * 5.0).floor() as usize;
    let mut clouds = Vec::with_capacity(cloud_count);

    for _ in 0..cloud_count {
        let y = height * (0.15 + rng.next() * 0.45);
        let brightness = rng.next();

        clouds.push(Cloud {
            position: Vec2::new(rng.next() * width, y),
            width: 80.0 + rng.next() * 200.0,
            height: 20.0 + rng.next() * 40.0,
            color: if brightness > 0.5 {
                CLOUD_COLOR_BRIGHT
            } else {
                CLOUD_COLOR_DARK
            },
            glow_color: sky.accent,
        });
    }

    clouds
}

/// Höhenkurve einer Bergkette über Peak-Einflussfunktionen.
///
/// Die Kurve an jeder Stelle ist das Maximum aller Peak-Einflüsse
/// `max(0, 1 - (dist/peak_width)^1.5)` plus leichtem Rauschen — ergibt
/// weiche, überlappende Silhouetten ohne Spline-Bibliothek.
fn mountain_curve(
    rng: &mut SeededRng,
    width: f32,
    base_y: f32,
    peak_height: f32,
    num_peaks: usize,
) -> Vec<Vec2> {
    let segment_width = width / (num_peaks as f32 * 20.0);

    let mut peaks = Vec::with_capacity(num_peaks);
    for i in 0..num_peaks {
        peaks.push((
            (width / num_peaks as f32) * (i as f32 + 0.3 + rng.next() * 0.4),
            peak_height * (0.6 + rng.next() * 0.4),
        ));
    }

    let peak_width = width / num_peaks as f32 * 0.8;
    let mut points = Vec::new();
    let mut x = 0.0f32;
    while x <= width {
        let mut height = 0.0f32;
        for &(peak_x, peak_h) in &peaks {
            let dist = (x - peak_x).abs();
            let influence = (1.0 - (dist / peak_width).powf(1.5)).max(0.0);
            height = height.max(peak_h * influence);
        }

        // Leichtes Rauschen für natürliche Variation
        height += (rng.next() - 0.5) * peak_height * 0.1;

        points.push(Vec2::new(x, base_y - height.max(0.0)));
        x += segment_width;
    }

    points
}

/// Vier Bergschichten plus zwei Vordergrund-Klippen, hinten nach vorn.
fn generate_mountains(rng: &mut SeededRng, width: f32, height: f32) -> Vec<MountainLayer> {
    let mut mountains = Vec::with_capacity(5);

    mountains.push(MountainLayer {
        points: mountain_curve(rng, width, height * 0.75, height * 0.2, 5),
        color: MOUNTAIN_COLOR_FAR,
        layer: 0,
    });
    mountains.push(MountainLayer {
        points: mountain_curve(rng, width, height * 0.8, height * 0.25, 4),
        color: MOUNTAIN_COLOR_BACK,
        layer: 1,
    });
    mountains.push(MountainLayer {
        points: mountain_curve(rng, width, height * 0.85, height * 0.2, 3),
        color: MOUNTAIN_COLOR_MID,
        layer: 2,
    });

    // Linke Klippe: sinusförmiger Anstieg, rahmt die Szene
    let left_width = width * 0.15;
    let mut left_cliff = Vec::with_capacity(21);
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let curve_height = (t * std::f32::consts::PI).sin() * height * 0.3;
        let y = height - curve_height * (1.0 - t * 0.5);
        left_cliff.push(Vec2::new(t * left_width, y.min(height)));
    }
    mountains.push(MountainLayer {
        points: left_cliff,
        color: MOUNTAIN_COLOR_CLIFF,
        layer: 3,
    });

    // Rechte Klippe, gespiegeltes Profil
    let right_start = width * 0.85;
    let mut right_cliff = Vec::with_capacity(21);
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let curve_height = ((1.0 - t) * std::f32::consts::PI).sin() * height * 0.35;
        let y = height - curve_height * (0.5 + t * 0.5);
        right_cliff.push(Vec2::new(right_start + t * width * 0.15, y.min(height)));
    }
    mountains.push(MountainLayer {
        points: right_cliff,
        color: MOUNTAIN_COLOR_CLIFF,
        layer: 3,
    });

    mountains
}

/// Je drei Bäume auf linker und rechter Klippe.
fn generate_trees(rng: &mut SeededRng, width: f32, height: f32) -> Vec<Tree> {
    let mut trees = Vec::with_capacity(6);

    for _ in 0..3 {
        trees.push(Tree {
            position: Vec2::new(
                width * (0.02 + rng.next() * 0.06),
                height * (0.75 + rng.next() * 0.05),
            ),
            height: 15.0 + rng.next() * 25.0,
            color: TREE_COLOR,
        });
    }
    for _ in 0..3 {
        trees.push(Tree {
            position: Vec2::new(
                width * (0.92 + rng.next() * 0.06),
                height * (0.72 + rng.next() * 0.06),
            ),
            height: 15.0 + rng.next() * 25.0,
            color: TREE_COLOR,
        });
    }

    trees
}

/// Zwei bis vier Sternschnuppen, diagonal fallend.
fn generate_shooting_stars(rng: &mut SeededRng, width: f32, height: f32) -> Vec<ShootingStar> {
    let count = 2 + (rng.next() * 3.0).floor() as usize;
    let mut shooting_stars = Vec::with_capacity(count);

    for _ in 0..count {
        shooting_stars.push(ShootingStar {
            position: Vec2::new(
                width * (0.2 + rng.next() * 0.6),
                height * (0.1 + rng.next() * 0.3),
            ),
            length: 30.0 + rng.next() * 80.0,
            angle: std::f32::consts::PI * (0.5 + rng.next() * 0.5),
            brightness: 0.5 + rng.next() * 0.5,
        });
    }

    shooting_stars
}

/// HSL → RGBA (H in Grad, S/L in Prozent).
fn hsl(hue: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l, 1.0];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: f32| -> f32 {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    [
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
        1.0,
    ]
}
