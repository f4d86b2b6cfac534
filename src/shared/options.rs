//! Zentrale Konfiguration für den Atlas NodeTree Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Layout ──────────────────────────────────────────────────────────

/// Horizontaler Abstand zwischen Level-Zentren (Welteinheiten).
pub const LEVEL_SPACING: f32 = 500.0;
/// Horizontaler Abstand zwischen Nodes im Raster.
pub const NODE_SPACING_X: f32 = 130.0;
/// Vertikaler Abstand zwischen Node-Zeilen.
pub const NODE_SPACING_Y: f32 = 105.0;
/// Lücke zwischen nicht-leeren Node-Typ-Sections.
pub const SECTION_GAP: f32 = 70.0;
/// Einrückung des ersten Levels vom Welt-Ursprung.
pub const PADDING: f32 = 150.0;
/// Abstand zwischen Level-Header und erster Node-Zeile.
pub const LEVEL_HEADER_OFFSET: f32 = 110.0;
/// Maximale Nodes pro Raster-Zeile einer Section.
pub const MAX_NODES_PER_ROW: usize = 3;

/// Feste Welt-Radien pro Node-Typ.
pub struct NodeRadii {
    pub level: f32,
    pub knowledge: f32,
    pub skill: f32,
    pub trait_: f32,
    pub milestone: f32,
}

/// Node-Radien (Welteinheiten, zoom-unabhängig).
pub const NODE_RADIUS: NodeRadii = NodeRadii {
    level: 45.0,
    knowledge: 28.0,
    skill: 28.0,
    trait_: 25.0,
    milestone: 30.0,
};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.25;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 2.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Selektion ───────────────────────────────────────────────────────

/// Hitbox-Vergrößerung über den sichtbaren Node-Radius hinaus.
pub const PICK_FORGIVENESS: f32 = 1.2;
/// Totzone in Screen-Pixeln, unter der ein Pointer-Up als Klick gilt.
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 5.0;

// ── Rendering ──────────────────────────────────────────────────────

/// Sicherheitsrand in Pixeln für das Sichtbarkeits-Culling.
pub const CULL_MARGIN_PX: f32 = 50.0;
/// Ab diesem Zoom-Level werden Node-Labels gezeichnet.
pub const LABEL_ZOOM_THRESHOLD: f32 = 0.4;
/// Maximale Label-Breite in Pixeln, darüber wird mit Ellipse gekürzt.
pub const MAX_LABEL_WIDTH_PX: f32 = 120.0;

// ── Farben (RGBA 0..1) ─────────────────────────────────────────────

/// Canvas-Grundfarbe (#0d0d15).
pub const COLOR_BACKGROUND: [f32; 4] = [0.051, 0.051, 0.082, 1.0];
/// Knowledge-Nodes: Cyan/Teal (#64dfdf).
pub const COLOR_KNOWLEDGE: [f32; 4] = [0.392, 0.875, 0.875, 1.0];
/// Skill-Nodes: helles Mint (#80ffdb).
pub const COLOR_SKILL: [f32; 4] = [0.502, 1.0, 0.859, 1.0];
/// Trait-Nodes: weiches Violett (#c77dff).
pub const COLOR_TRAIT: [f32; 4] = [0.780, 0.490, 1.0, 1.0];
/// Milestone-Nodes: Gold (#ffd700).
pub const COLOR_MILESTONE: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
/// Level-Header: Himmelblau (#48bfe3).
pub const COLOR_LEVEL: [f32; 4] = [0.282, 0.749, 0.890, 1.0];
/// Hauptpfad-Verbindungen.
pub const COLOR_CONNECTION_MAIN: [f32; 4] = [0.392, 0.875, 0.875, 0.4];
/// Nebenverbindungen (gestrichelt, dünn).
pub const COLOR_CONNECTION_BRANCH: [f32; 4] = [0.392, 0.875, 0.875, 0.15];
/// Glow-Farbe selektierter Nodes.
pub const COLOR_SELECTED_GLOW: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
/// Glow-Farbe gehoverter Nodes.
pub const COLOR_HOVER_GLOW: [f32; 4] = [0.784, 1.0, 1.0, 0.5];
/// Label-Text.
pub const COLOR_LABEL_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 0.95];
/// Abgedunkelter Label-Text (Level-Untertitel).
pub const COLOR_LABEL_TEXT_DIM: [f32; 4] = [0.784, 0.902, 1.0, 0.7];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `atlas_node_tree_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Klick/Drag-Totzone in Screen-Pixeln
    pub click_drag_threshold_px: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Zoom-Schwelle für Node-Labels
    pub label_zoom_threshold: f32,
    /// Maximale Label-Breite in Pixeln
    pub max_label_width_px: f32,
    /// Culling-Rand in Pixeln
    pub cull_margin_px: f32,
    /// Legende im Viewport anzeigen
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            click_drag_threshold_px: CLICK_DRAG_THRESHOLD_PX,
            label_zoom_threshold: LABEL_ZOOM_THRESHOLD,
            max_label_width_px: MAX_LABEL_WIDTH_PX,
            cull_margin_px: CULL_MARGIN_PX,
            show_legend: true,
        }
    }
}

/// Serde-Default für `show_legend` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_legend() -> bool {
    true
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("atlas_node_tree_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("atlas_node_tree_viewer.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_round_trip_through_toml() {
        let mut options = ViewerOptions::default();
        options.camera_zoom_max = 3.5;
        options.show_legend = false;

        let toml_text = toml::to_string_pretty(&options).expect("TOML-Serialisierung");
        let parsed: ViewerOptions = toml::from_str(&toml_text).expect("TOML-Parse");

        assert_eq!(parsed, options);
    }

    #[test]
    fn defaults_match_constants() {
        let options = ViewerOptions::default();

        assert_eq!(options.camera_zoom_min, CAMERA_ZOOM_MIN);
        assert_eq!(options.camera_zoom_max, CAMERA_ZOOM_MAX);
        assert_eq!(options.click_drag_threshold_px, CLICK_DRAG_THRESHOLD_PX);
    }
}
