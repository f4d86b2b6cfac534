//! Domain-Datenmodell: der unveränderliche Snapshot, den der Host liefert.
//!
//! Die Feldnamen folgen dem camelCase-Payload der Graph-API. Der Viewer
//! mutiert diese Daten nie — bei Austausch wird das komplette Layout neu
//! berechnet.

use serde::{Deserialize, Serialize};

use super::progress::{BloomLevel, DreyfusLevel, UserProgress};

/// Typ eines Requirement-Nodes innerhalb eines Levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Knowledge,
    Skill,
    Trait,
    Milestone,
    /// Level-Header-Node (wird nur vom Layout erzeugt, nie aus Daten gelesen)
    Level,
}

impl NodeKind {
    /// Anzeigename für UI-Beschriftungen.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Knowledge => "Knowledge",
            NodeKind::Skill => "Skill",
            NodeKind::Trait => "Trait",
            NodeKind::Milestone => "Milestone",
            NodeKind::Level => "Level",
        }
    }
}

/// Einzelner Requirement-Node eines Levels.
///
/// Die typ-spezifischen Requirement-Felder kommen aus der Relationship
/// der Graph-API: Knowledge trägt ein Bloom-Level, Skill ein
/// Dreyfus-Level, Trait einen Mindest-Score. Milestones sind binär.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainNode {
    /// Graph-Element-ID für User-Progress-Zuordnung
    #[serde(default)]
    pub element_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bloom_level: Option<BloomLevel>,
    #[serde(default)]
    pub dreyfus_level: Option<DreyfusLevel>,
    #[serde(default)]
    pub min_score: Option<f32>,
}

/// Eine Stufe der Domain mit Punkteschwelle und typisierten Node-Listen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainLevel {
    #[serde(default)]
    pub element_id: Option<String>,
    pub level: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points_required: u32,
    #[serde(default)]
    pub knowledge: Vec<DomainNode>,
    #[serde(default)]
    pub skills: Vec<DomainNode>,
    #[serde(default)]
    pub traits: Vec<DomainNode>,
    #[serde(default)]
    pub milestones: Vec<DomainNode>,
}

impl DomainLevel {
    /// Gesamtzahl der Requirement-Nodes dieses Levels (ohne Header).
    pub fn node_count(&self) -> usize {
        self.knowledge.len() + self.skills.len() + self.traits.len() + self.milestones.len()
    }
}

/// Benannte Progression (z.B. "Chess") aus geordneten Levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainData {
    #[serde(default)]
    pub element_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub levels: Vec<DomainLevel>,
}

impl DomainData {
    /// Gesamtzahl aller Requirement-Nodes über alle Levels.
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(DomainLevel::node_count).sum()
    }
}

/// Datei-Format des Viewers: Domain plus optionaler User-Progress.
///
/// Der Progress-Teil ist optional — ohne ihn werden alle Nodes als
/// unerfüllt gerendert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSnapshot {
    pub domain: DomainData,
    #[serde(default)]
    pub progress: UserProgress,
}
