/**
 * MEMO-RE Native Desktop App - Main Entry Point
 *
 * Implements eframe::App. Each frame drains finished worker results into
 * the application state before rendering the current screen.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use memore::app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memore=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MEMO-RE",
        options,
        Box::new(|_cc| Ok(Box::new(MemoreApp::default()))),
    )
}

struct MemoreApp {
    state: AppState,
}

impl Default for MemoreApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for MemoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.process_frame();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        // worker results arrive between frames; keep polling
        ctx.request_repaint();
    }
}
