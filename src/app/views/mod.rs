use eframe::egui;

use crate::app::state::{AppState, AppView};
use crate::app::theme::colors;

pub mod auth_view;
pub mod board_list_view;
pub mod memo_board_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("📋 MEMO-RE").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if let Some(session) = state.gate.session().cloned() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                            return;
                        }
                        ui.colored_label(colors::TEXT_LIGHT, format!("@{}", session.nickname));
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(colors::BG_CREAM))
        .show(ctx, |ui| {
            if state.gate.is_checking() {
                // startup credential check still pending
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            if !state.gate.is_authenticated() {
                auth_view::render(ui, state);
                return;
            }

            match state.current_view {
                AppView::Auth | AppView::BoardList => board_list_view::render(ui, state),
                AppView::MemoBoard => memo_board_view::render(ui, state),
            }
        });
}
