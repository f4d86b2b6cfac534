//! Atlas NodeTree Viewer.
//!
//! Interaktiver 2D-Viewer für Domain-Progressionsbäume: pannable/zoombare
//! Canvas mit prozeduralem Hintergrund pro Domain.

use eframe::egui;

use atlas_node_tree_viewer::{
    app::build_render_scene, render, ui, AppController, AppIntent, AppState, ViewerOptions,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Atlas NodeTree Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Atlas NodeTree Viewer"),
            ..Default::default()
        };

        eframe::run_native(
            "Atlas NodeTree Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = viewer_options;

        let input = ui::InputState::new(&state.options);

        let mut app = Self {
            state,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input,
        };

        // Optionaler Snapshot-Pfad als erstes CLI-Argument
        if let Some(path) = std::env::args().nth(1) {
            app.process_events(vec![AppIntent::FileSelected { path }]);
        }

        app
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.deliver_selection_event();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.state.options.save_to_file(&ViewerOptions::config_path()) {
            log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_detail_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.options,
                    self.state.interaction.hovered_node_id.as_deref(),
                ));

                let scene = build_render_scene(
                    &self.state,
                    viewport_size,
                    ui.input(|i| i.time),
                );

                let painter = ui.painter_at(rect);
                self.renderer.render_scene(&painter, rect, &scene);

                if self.state.snapshot.is_none() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No domain loaded. Use File → Open",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                } else if self.state.options.show_legend {
                    ui::draw_legend(&painter, rect);
                }

                // Cursor: greifend beim Pan, Zeiger über Nodes
                if self.input.is_dragging() {
                    ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
                } else if self.state.interaction.hovered_node_id.is_some() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{e:#}"));
            }
        }
    }

    /// Stellt das Selektionsereignis an den Host zu (hier: Log).
    fn deliver_selection_event(&mut self) {
        if let Some(event) = self.state.take_selection_event() {
            match event {
                Some(node_id) => log::info!("Selektion: {node_id}"),
                None => log::info!("Selektion aufgehoben"),
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        } else if self.state.snapshot.is_some() {
            // Stern-Twinkle: gemächlicher Takt reicht; egui verwirft
            // überholte Repaint-Anfragen statt sie zu stauen
            ctx.request_repaint_after(std::time::Duration::from_millis(80));
        }
    }
}
