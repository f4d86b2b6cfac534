//! Atlas NodeTree Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionState, UiState, ViewState};
pub use core::{
    calculate_layout, generate_background, pick_node_at, requirement_met, BackgroundState,
    BloomLevel, Camera2D, CanvasNode, Connection, ConnectionKind, DomainData, DomainLevel,
    DomainNode, DomainSnapshot, DreyfusLevel, NodeKind, ProgressEntry, Requirement, SeededRng,
    TreeLayout, UserProgress, WorldBounds,
};
pub use shared::{RenderScene, ViewerOptions};
