//! User-Progress und Requirement-Prüfung.
//!
//! Knowledge wird über Bloom-Stufen verglichen, Skill über
//! Dreyfus-Stufen, Trait über einen numerischen Score. Milestones gelten
//! als erfüllt, sobald eine Progress-Relationship existiert.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::layout::{CanvasNode, Requirement};

/// Bloom-Taxonomie-Stufen für Knowledge-Requirements (aufsteigend geordnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloomLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

/// Dreyfus-Stufen der Skill-Aneignung (aufsteigend geordnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DreyfusLevel {
    Novice,
    AdvancedBeginner,
    Competence,
    Proficiency,
    Expertise,
    Mastery,
}

/// Progress-Eintrag einer Relationship zwischen User und Graph-Element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    #[serde(default)]
    pub bloom_level: Option<BloomLevel>,
    #[serde(default)]
    pub dreyfus_level: Option<DreyfusLevel>,
    #[serde(default)]
    pub score: Option<f32>,
}

/// User-Progress, gekeyt über die Graph-Element-ID des Nodes.
pub type UserProgress = HashMap<String, ProgressEntry>;

/// Prüft, ob der User-Progress das Requirement eines Nodes erfüllt.
///
/// Nodes ohne Element-ID oder ohne Progress-Eintrag sind nie erfüllt.
pub fn requirement_met(node: &CanvasNode, progress: &UserProgress) -> bool {
    let Some(element_id) = node.element_id.as_deref() else {
        return false;
    };
    let Some(entry) = progress.get(element_id) else {
        return false;
    };

    match node.requirement {
        Some(Requirement::Bloom(required)) => entry
            .bloom_level
            .map(|level| level >= required)
            .unwrap_or(false),
        Some(Requirement::Dreyfus(required)) => entry
            .dreyfus_level
            .map(|level| level >= required)
            .unwrap_or(false),
        Some(Requirement::MinScore(min)) => {
            entry.score.map(|score| score >= min).unwrap_or(false)
        }
        // Milestones und Level-Header: Existenz der Relationship genügt
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;
    use glam::Vec2;

    fn node(requirement: Option<Requirement>) -> CanvasNode {
        CanvasNode {
            id: "knowledge-0-Rules".into(),
            name: "Rules".into(),
            description: None,
            kind: NodeKind::Knowledge,
            level_index: 0,
            position: Vec2::ZERO,
            radius: 28.0,
            requirement,
            element_id: Some("el-1".into()),
            points_required: None,
        }
    }

    fn progress_with(entry: ProgressEntry) -> UserProgress {
        let mut map = UserProgress::new();
        map.insert("el-1".into(), entry);
        map
    }

    #[test]
    fn bloom_requirement_compares_ordinal() {
        let node = node(Some(Requirement::Bloom(BloomLevel::Apply)));

        let below = progress_with(ProgressEntry {
            bloom_level: Some(BloomLevel::Understand),
            ..Default::default()
        });
        assert!(!requirement_met(&node, &below));

        let exact = progress_with(ProgressEntry {
            bloom_level: Some(BloomLevel::Apply),
            ..Default::default()
        });
        assert!(requirement_met(&node, &exact));

        let above = progress_with(ProgressEntry {
            bloom_level: Some(BloomLevel::Create),
            ..Default::default()
        });
        assert!(requirement_met(&node, &above));
    }

    #[test]
    fn dreyfus_requirement_compares_ordinal() {
        let mut node = node(Some(Requirement::Dreyfus(DreyfusLevel::Competence)));
        node.kind = NodeKind::Skill;

        let below = progress_with(ProgressEntry {
            dreyfus_level: Some(DreyfusLevel::AdvancedBeginner),
            ..Default::default()
        });
        assert!(!requirement_met(&node, &below));

        let above = progress_with(ProgressEntry {
            dreyfus_level: Some(DreyfusLevel::Mastery),
            ..Default::default()
        });
        assert!(requirement_met(&node, &above));
    }

    #[test]
    fn trait_requirement_compares_score() {
        let mut node = node(Some(Requirement::MinScore(70.0)));
        node.kind = NodeKind::Trait;

        let below = progress_with(ProgressEntry {
            score: Some(69.5),
            ..Default::default()
        });
        assert!(!requirement_met(&node, &below));

        let above = progress_with(ProgressEntry {
            score: Some(70.0),
            ..Default::default()
        });
        assert!(requirement_met(&node, &above));
    }

    #[test]
    fn milestone_is_met_by_presence() {
        let mut node = node(None);
        node.kind = NodeKind::Milestone;

        assert!(!requirement_met(&node, &UserProgress::new()));
        assert!(requirement_met(
            &node,
            &progress_with(ProgressEntry::default())
        ));
    }

    #[test]
    fn node_without_element_id_is_never_met() {
        let mut node = node(None);
        node.element_id = None;

        assert!(!requirement_met(&node, &progress_with(ProgressEntry::default())));
    }

    #[test]
    fn wire_names_match_api_payload() {
        let bloom: BloomLevel = serde_json::from_str(r#""Understand""#).expect("Bloom-Name");
        assert_eq!(bloom, BloomLevel::Understand);

        let dreyfus: DreyfusLevel =
            serde_json::from_str(r#""advanced_beginner""#).expect("Dreyfus-Name");
        assert_eq!(dreyfus, DreyfusLevel::AdvancedBeginner);
    }
}
