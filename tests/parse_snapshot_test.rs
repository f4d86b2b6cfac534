/// Integrationstest: Parst den mitgelieferten Beispiel-Snapshot
use atlas_node_tree_viewer::{calculate_layout, requirement_met, BloomLevel, DomainSnapshot};

#[test]
fn test_parse_chess_snapshot() {
    let json = std::fs::read_to_string("sample_data/chess_snapshot.json").unwrap();
    match serde_json::from_str::<DomainSnapshot>(&json) {
        Ok(snapshot) => {
            println!(
                "OK: {} levels, {} nodes, {} progress entries",
                snapshot.domain.levels.len(),
                snapshot.domain.node_count(),
                snapshot.progress.len()
            );
            assert_eq!(snapshot.domain.name, "Chess");
            assert_eq!(snapshot.domain.levels.len(), 3);
            assert!(snapshot.domain.node_count() > 0);
        }
        Err(e) => panic!("Parse-Fehler: {:#}", e),
    }
}

#[test]
fn test_layout_and_progress_on_sample_snapshot() {
    let json = std::fs::read_to_string("sample_data/chess_snapshot.json").unwrap();
    let snapshot: DomainSnapshot = serde_json::from_str(&json).unwrap();

    let layout = calculate_layout(&snapshot.domain);

    // 3 Header plus alle Requirement-Nodes, 2 Hauptpfad-Kanten
    assert_eq!(
        layout.node_count(),
        3 + snapshot.domain.node_count()
    );
    assert_eq!(layout.connections.len(), 2);

    // Progress: "Piece Movement" verlangt Remember, User steht auf Apply
    let piece_movement = layout
        .get("knowledge-0-Piece Movement")
        .expect("Node erwartet");
    assert!(requirement_met(piece_movement, &snapshot.progress));

    // "Patience" verlangt Score 40, User hat 35
    let patience = layout.get("trait-1-Patience").expect("Node erwartet");
    assert!(!requirement_met(patience, &snapshot.progress));

    // Milestone mit leerem Progress-Eintrag gilt als erreicht
    let first_game = layout
        .get("milestone-0-First Full Game")
        .expect("Node erwartet");
    assert!(requirement_met(first_game, &snapshot.progress));

    // Bloom-Level aus der Datei kommt typisiert an
    assert_eq!(
        snapshot.progress.get("4:demo:10").and_then(|e| e.bloom_level),
        Some(BloomLevel::Apply)
    );
}
