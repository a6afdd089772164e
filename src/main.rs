//! Bezier-Playground.
//!
//! Interaktiver Editor für quadratische und kubische Bézier-Kurven
//! hinter einer kleinen Navigations-Shell (egui + glow).

use bezier_playground::{
    ui, AppController, AppIntent, AppState, EditorOptions, FilePreferenceStore, SELECTED_CURVE_KEY,
};
use eframe::egui;

/// Datei der Präferenzen (gewählte Kurvenart) neben der Binary.
const PREFERENCES_FILE: &str = "bezier_playground_prefs.toml";

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

        log::info!("Bezier-Playground v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionaler Startpfad, z.B. `bezier-playground /splines`
        let start_path = std::env::args().nth(1);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 720.0])
                .with_title("Bezier-Playground"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier-Playground",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(start_path)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new(start_path: Option<String>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let store = FilePreferenceStore::new(
            EditorOptions::sibling_of_exe(PREFERENCES_FILE),
            SELECTED_CURVE_KEY,
        );
        log::info!("Präferenzen: {}", store.path().display());

        let mut app = Self {
            state: AppState::with_preferences(Box::new(store), editor_options),
            controller: AppController::new(),
        };

        let path = start_path.unwrap_or_else(|| "/".to_string());
        app.process_events(vec![AppIntent::NavigateRequested { path }]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_nav(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        let scene = self.controller.build_render_scene(&self.state);
        events.extend(ui::render_page(ctx, &mut self.state, &scene));

        // Loslassen beendet jede Geste, egal wo sich der Zeiger befindet
        if ctx.input(|i| i.pointer.primary_released()) {
            events.push(AppIntent::PointerReleased);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
