//! Layout-Engine: positioniert Domain-Nodes als Baum in Welt-Koordinaten.
//!
//! Reine Funktion über den Domain-Daten — gleicher Input ergibt ein
//! strukturell identisches Layout. Bei Datenänderung wird das komplette
//! Layout neu berechnet, nie einzeln mutiert.

use glam::Vec2;
use indexmap::IndexMap;

use super::camera::Camera2D;
use super::domain::{DomainData, DomainLevel, DomainNode, NodeKind};
use super::progress::{BloomLevel, DreyfusLevel};
use crate::shared::options::{
    LEVEL_HEADER_OFFSET, LEVEL_SPACING, MAX_NODES_PER_ROW, NODE_SPACING_X, NODE_SPACING_Y, PADDING,
    SECTION_GAP,
};

/// Requirement eines positionierten Nodes (typ-spezifisch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    Bloom(BloomLevel),
    Dreyfus(DreyfusLevel),
    MinScore(f32),
}

/// Positionierter Node im Welt-Koordinatensystem.
///
/// Der Radius ist eine feste Konstante pro Typ und unabhängig vom Zoom
/// (Screen-Radius = Radius × Kamera-Zoom).
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasNode {
    /// Stabile Layout-ID, z.B. `knowledge-0-Rules` oder `level-2`
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: NodeKind,
    /// Index des Levels in sortierter Reihenfolge (0-basiert)
    pub level_index: usize,
    pub position: Vec2,
    pub radius: f32,
    pub requirement: Option<Requirement>,
    /// Graph-Element-ID für User-Progress-Zuordnung
    pub element_id: Option<String>,
    /// Punkteschwelle (nur Level-Header)
    pub points_required: Option<u32>,
}

/// Art einer Verbindung zwischen zwei Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Hauptpfad zwischen aufeinanderfolgenden Level-Headern
    MainPath,
    /// Dünne, gestrichelte Nebenverbindung
    Branch,
}

/// Verbindung zwischen zwei Nodes, als Indizes in die Node-Arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub kind: ConnectionKind,
}

/// Achsenparallele Bounding-Box über alle Node-Kreise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    /// Degenerierte Null-Bounds (leeres Layout).
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Mittelpunkt der Bounds.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Ergebnis der Layout-Berechnung: Node-Arena, Verbindungen, Bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeLayout {
    pub nodes: Vec<CanvasNode>,
    pub connections: Vec<Connection>,
    pub bounds: WorldBounds,
    /// Registry von stabiler Node-ID auf Arena-Index, in Einfüge-Reihenfolge
    index: IndexMap<String, usize>,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TreeLayout {
    /// Leeres Layout (keine Domain geladen).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gibt die Anzahl der Nodes zurück.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn keine Nodes vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Findet einen Node über seine stabile ID.
    pub fn get(&self, id: &str) -> Option<&CanvasNode> {
        self.index.get(id).and_then(|&i| self.nodes.get(i))
    }

    /// Arena-Index eines Nodes über seine stabile ID.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Baut ein Layout direkt aus einer Node-Arena (Test-Helfer).
    #[cfg(test)]
    pub(crate) fn with_nodes(nodes: Vec<CanvasNode>) -> Self {
        let bounds = calculate_bounds(&nodes);
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();
        Self {
            nodes,
            connections: Vec::new(),
            bounds,
            index,
        }
    }
}

/// Berechnet das komplette Layout für eine Domain.
///
/// Levels werden aufsteigend nach `level` sortiert und bei
/// `level_index * LEVEL_SPACING + PADDING` platziert. Aufeinanderfolgende
/// Level-Header werden als Hauptpfad verbunden; weitere automatische
/// Verbindungen gibt es bewusst nicht.
pub fn calculate_layout(domain: &DomainData) -> TreeLayout {
    let mut nodes = Vec::new();
    let mut connections = Vec::new();
    let mut level_headers = Vec::new();

    let mut sorted_levels: Vec<&DomainLevel> = domain.levels.iter().collect();
    sorted_levels.sort_by_key(|l| l.level);

    for (level_index, level) in sorted_levels.iter().enumerate() {
        let header_index = layout_level(level, level_index, &mut nodes);
        level_headers.push(header_index);
    }

    for pair in level_headers.windows(2) {
        connections.push(Connection {
            from: pair[0],
            to: pair[1],
            kind: ConnectionKind::MainPath,
        });
    }

    let bounds = calculate_bounds(&nodes);
    let index = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.clone(), i))
        .collect();

    TreeLayout {
        nodes,
        connections,
        bounds,
        index,
    }
}

/// Startkamera: zentriert auf die Bounds, Standard-Zoom.
pub fn initial_camera(bounds: &WorldBounds) -> Camera2D {
    Camera2D {
        position: bounds.center(),
        zoom: Camera2D::ZOOM_INITIAL,
    }
}

/// Nicht-leere Sections eines Levels in fester Reihenfolge.
fn sections(level: &DomainLevel) -> Vec<(NodeKind, &[DomainNode])> {
    [
        (NodeKind::Knowledge, level.knowledge.as_slice()),
        (NodeKind::Skill, level.skills.as_slice()),
        (NodeKind::Trait, level.traits.as_slice()),
        (NodeKind::Milestone, level.milestones.as_slice()),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .collect()
}

/// Positioniert Header und Sections eines Levels, gibt den Header-Index zurück.
fn layout_level(level: &DomainLevel, level_index: usize, nodes: &mut Vec<CanvasNode>) -> usize {
    let center_x = level_index as f32 * LEVEL_SPACING + PADDING;
    let sections = sections(level);

    // Gesamthöhe: Header-Offset + Zeilen pro Section + Gaps dazwischen
    let mut total_height = LEVEL_HEADER_OFFSET;
    for (i, (_, items)) in sections.iter().enumerate() {
        let rows = items.len().div_ceil(MAX_NODES_PER_ROW);
        total_height += rows as f32 * NODE_SPACING_Y;
        if i + 1 < sections.len() {
            total_height += SECTION_GAP;
        }
    }

    // Inhalt vertikal um y=0 zentrieren
    let mut cursor_y = -total_height / 2.0;

    let header_name = if level.name.is_empty() {
        format!("Level {}", level.level)
    } else {
        level.name.clone()
    };
    let header_index = nodes.len();
    nodes.push(CanvasNode {
        id: format!("level-{level_index}"),
        name: header_name,
        description: level.description.clone(),
        kind: NodeKind::Level,
        level_index,
        position: Vec2::new(center_x, cursor_y),
        radius: NodeKind::Level.radius(),
        requirement: None,
        element_id: level.element_id.clone(),
        points_required: Some(level.points_required),
    });
    cursor_y += LEVEL_HEADER_OFFSET;

    for (section_index, (kind, items)) in sections.iter().enumerate() {
        let rows = items.len().div_ceil(MAX_NODES_PER_ROW);

        for (item_index, item) in items.iter().enumerate() {
            let row = item_index / MAX_NODES_PER_ROW;
            let col = item_index % MAX_NODES_PER_ROW;

            // Teilbesetzte Zeilen werden unabhängig zentriert
            let items_in_row = MAX_NODES_PER_ROW.min(items.len() - row * MAX_NODES_PER_ROW);
            let row_width = (items_in_row - 1) as f32 * NODE_SPACING_X;
            let row_start_x = center_x - row_width / 2.0;

            let position = Vec2::new(
                row_start_x + col as f32 * NODE_SPACING_X,
                cursor_y + row as f32 * NODE_SPACING_Y,
            );
            nodes.push(canvas_node(item, *kind, level_index, position));
        }

        cursor_y += rows as f32 * NODE_SPACING_Y;
        if section_index + 1 < sections.len() {
            cursor_y += SECTION_GAP;
        }
    }

    header_index
}

fn canvas_node(node: &DomainNode, kind: NodeKind, level_index: usize, position: Vec2) -> CanvasNode {
    let requirement = match kind {
        NodeKind::Knowledge => node.bloom_level.map(Requirement::Bloom),
        NodeKind::Skill => node.dreyfus_level.map(Requirement::Dreyfus),
        NodeKind::Trait => node.min_score.map(Requirement::MinScore),
        NodeKind::Milestone | NodeKind::Level => None,
    };

    CanvasNode {
        id: format!("{}-{}-{}", kind.slug(), level_index, node.name),
        name: node.name.clone(),
        description: node.description.clone(),
        kind,
        level_index,
        position,
        radius: kind.radius(),
        requirement,
        element_id: node.element_id.clone(),
        points_required: None,
    }
}

/// Bounds über alle Node-Mittelpunkte ± Radius.
fn calculate_bounds(nodes: &[CanvasNode]) -> WorldBounds {
    if nodes.is_empty() {
        return WorldBounds::ZERO;
    }

    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    for node in nodes {
        min = min.min(node.position - Vec2::splat(node.radius));
        max = max.max(node.position + Vec2::splat(node.radius));
    }

    WorldBounds { min, max }
}

impl NodeKind {
    /// Fester Welt-Radius pro Node-Typ.
    pub fn radius(&self) -> f32 {
        use crate::shared::options::NODE_RADIUS;
        match self {
            NodeKind::Level => NODE_RADIUS.level,
            NodeKind::Knowledge => NODE_RADIUS.knowledge,
            NodeKind::Skill => NODE_RADIUS.skill,
            NodeKind::Trait => NODE_RADIUS.trait_,
            NodeKind::Milestone => NODE_RADIUS.milestone,
        }
    }

    /// ID-Präfix für Layout-IDs.
    fn slug(&self) -> &'static str {
        match self {
            NodeKind::Knowledge => "knowledge",
            NodeKind::Skill => "skill",
            NodeKind::Trait => "trait",
            NodeKind::Milestone => "milestone",
            NodeKind::Level => "level",
        }
    }
}
