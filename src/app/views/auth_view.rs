use eframe::egui;

use crate::app::state::{AppState, AuthMode};
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_CREAM);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = match state.auth_mode {
                AuthMode::Login => 280.0,
                AuthMode::Signup => 360.0,
                AuthMode::ForgotPassword => 260.0,
            };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("MEMO-RE")
                    .size(32.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.add_space(16.0);

            let heading = match state.auth_mode {
                AuthMode::Login => "Welcome back",
                AuthMode::Signup => "Create account",
                AuthMode::ForgotPassword => "Reset password",
            };
            ui.label(egui::RichText::new(heading).size(22.0).color(colors::TEXT_DARK));
            ui.add_space(16.0);

            if let Some(ref error) = state.auth_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(8.0);
            }
            if let Some(ref notice) = state.auth_notice {
                ui.label(egui::RichText::new(notice).color(colors::NOTICE));
                ui.add_space(8.0);
            }

            let input_width = 280.0;

            labeled_input(ui, available_rect, input_width, "Email:", &mut state.email_input, false);

            match state.auth_mode {
                AuthMode::Login => {
                    labeled_input(
                        ui,
                        available_rect,
                        input_width,
                        "Password:",
                        &mut state.password_input,
                        true,
                    );
                }
                AuthMode::Signup => {
                    labeled_input(
                        ui,
                        available_rect,
                        input_width,
                        "Password:",
                        &mut state.password_input,
                        true,
                    );
                    labeled_input(
                        ui,
                        available_rect,
                        input_width,
                        "Confirm:",
                        &mut state.confirm_password_input,
                        true,
                    );
                    labeled_input(
                        ui,
                        available_rect,
                        input_width,
                        "Nickname:",
                        &mut state.nickname_input,
                        false,
                    );
                }
                AuthMode::ForgotPassword => {
                    labeled_input(
                        ui,
                        available_rect,
                        input_width,
                        "New password:",
                        &mut state.new_password_input,
                        true,
                    );
                }
            }

            ui.add_space(16.0);

            let submit_label = match state.auth_mode {
                AuthMode::Login => "Log in",
                AuthMode::Signup => "Sign up",
                AuthMode::ForgotPassword => "Reset password",
            };
            if ui
                .add_sized(
                    [160.0, 32.0],
                    egui::Button::new(egui::RichText::new(submit_label).color(colors::TEXT_LIGHT))
                        .fill(colors::ACCENT),
                )
                .clicked()
            {
                state.auth_error = None;
                match state.auth_mode {
                    AuthMode::Login => state.handle_login(),
                    AuthMode::Signup => state.handle_signup(),
                    AuthMode::ForgotPassword => state.handle_reset_password(),
                }
            }

            if state.auth_loading {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_MUTED));
                    ui.spinner();
                });
            }

            ui.add_space(14.0);
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 260.0).max(0.0) / 2.0);
                match state.auth_mode {
                    AuthMode::Login => {
                        if ui.link("Sign up").clicked() {
                            state.switch_auth_mode(AuthMode::Signup);
                        }
                        ui.label(egui::RichText::new("|").color(colors::TEXT_MUTED));
                        if ui.link("Forgot password?").clicked() {
                            state.switch_auth_mode(AuthMode::ForgotPassword);
                        }
                    }
                    AuthMode::Signup | AuthMode::ForgotPassword => {
                        if ui.link("Back to login").clicked() {
                            state.switch_auth_mode(AuthMode::Login);
                        }
                    }
                }
            });
        });
    });
}

fn labeled_input(
    ui: &mut egui::Ui,
    available_rect: egui::Rect,
    input_width: f32,
    label: &str,
    value: &mut String,
    password: bool,
) {
    let label_width = 100.0;
    ui.horizontal(|ui| {
        ui.add_space((available_rect.width() - input_width - label_width - 20.0).max(0.0) / 2.0);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_MUTED)),
        );
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_DARK),
        );
    });
    ui.add_space(8.0);
}
