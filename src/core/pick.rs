//! Hit-Testing für Node-Selektion und Hover.

use glam::Vec2;

use super::layout::TreeLayout;
use crate::shared::options::PICK_FORGIVENESS;

/// Findet den obersten Node an einer Welt-Position.
///
/// Iteriert in umgekehrter Arena-Reihenfolge, damit später gezeichnete
/// Nodes bei Überlappung gewinnen. Die Hitbox ist um `PICK_FORGIVENESS`
/// größer als der sichtbare Radius.
pub fn pick_node_at(layout: &TreeLayout, world_pos: Vec2) -> Option<usize> {
    layout
        .nodes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, node)| {
            node.position.distance(world_pos) <= node.radius * PICK_FORGIVENESS
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::NodeKind;
    use crate::core::layout::CanvasNode;

    fn node_at(id: &str, position: Vec2, radius: f32) -> CanvasNode {
        CanvasNode {
            id: id.into(),
            name: id.into(),
            description: None,
            kind: NodeKind::Skill,
            level_index: 0,
            position,
            radius,
            requirement: None,
            element_id: None,
            points_required: None,
        }
    }

    fn layout_with(nodes: Vec<CanvasNode>) -> TreeLayout {
        TreeLayout::with_nodes(nodes)
    }

    #[test]
    fn empty_layout_returns_none() {
        let layout = TreeLayout::empty();

        assert_eq!(pick_node_at(&layout, Vec2::ZERO), None);
    }

    #[test]
    fn miss_returns_none() {
        let layout = layout_with(vec![node_at("a", Vec2::ZERO, 10.0)]);

        assert_eq!(pick_node_at(&layout, Vec2::new(100.0, 0.0)), None);
    }

    #[test]
    fn forgiveness_extends_the_hitbox() {
        let layout = layout_with(vec![node_at("a", Vec2::ZERO, 10.0)]);

        // Knapp außerhalb des sichtbaren Radius, aber innerhalb der Hitbox
        assert_eq!(pick_node_at(&layout, Vec2::new(11.5, 0.0)), Some(0));
        // Außerhalb der vergrößerten Hitbox
        assert_eq!(pick_node_at(&layout, Vec2::new(12.5, 0.0)), None);
    }

    #[test]
    fn later_node_wins_on_overlap() {
        let layout = layout_with(vec![
            node_at("unten", Vec2::ZERO, 20.0),
            node_at("oben", Vec2::new(5.0, 0.0), 20.0),
        ]);

        // Der Klickpunkt liegt im Zentrum des unteren Nodes, aber der
        // später gezeichnete obere Node deckt ihn ab
        assert_eq!(pick_node_at(&layout, Vec2::ZERO), Some(1));
    }

    #[test]
    fn click_on_center_always_hits_that_node() {
        let layout = layout_with(vec![
            node_at("gross", Vec2::ZERO, 45.0),
            node_at("klein", Vec2::new(30.0, 0.0), 25.0),
        ]);

        assert_eq!(pick_node_at(&layout, Vec2::new(30.0, 0.0)), Some(1));
    }
}
