//! Core-Domänentypen: Domain-Daten, Layout, Kamera, Hintergrund, Hit-Testing.

pub mod background;
pub mod camera;
/// Core-Datenmodelle für Domain-Progressionsbäume
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - DomainData: geladener Domain-Snapshot (Levels + Requirement-Nodes)
/// - TreeLayout: positionierte CanvasNodes mit Verbindungen und Bounds
/// - BackgroundState: deterministisch generierte Hintergrund-Szene
pub mod domain;
pub mod layout;
pub mod pick;
pub mod progress;
pub mod rng;

pub use background::{
    generate_background, BackgroundState, Cloud, Moon, MountainLayer, ShootingStar, SkyColors,
    Star, Tree,
};
pub use camera::Camera2D;
pub use domain::{DomainData, DomainLevel, DomainNode, DomainSnapshot, NodeKind};
pub use layout::{
    calculate_layout, initial_camera, CanvasNode, Connection, ConnectionKind, Requirement,
    TreeLayout, WorldBounds,
};
pub use pick::pick_node_at;
pub use progress::{requirement_met, BloomLevel, DreyfusLevel, ProgressEntry, UserProgress};
pub use rng::{hash_seed, SeededRng};
