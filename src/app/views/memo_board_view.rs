use eframe::egui;

use crate::app::screens::memo_board::Hint;
use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.gate.session().cloned() else {
        return;
    };
    let api = state.api.clone();

    let mut go_back = false;

    let Some(board) = state.memo_board.as_mut() else {
        state.back_to_board_list();
        return;
    };

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            go_back = true;
        }
        ui.label(
            egui::RichText::new(format!("📝 {}", board.board_title))
                .size(20.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        if let Some(ref owner) = board.owner {
            ui.colored_label(colors::TEXT_MUTED, format!("shared by @{}", owner));
        }
    });

    let read_only = board.is_guide || board.read_only();

    if let Some(hint) = board.hint() {
        let text = match hint {
            Hint::AddFirstMemo => "Write your first memo below to get started.",
            Hint::KeepGoing => "Nice start. Add another memo whenever something comes up.",
            Hint::TrySummarize => "Enough memos collected? Press Summarize for a short recap.",
        };
        egui::Frame::default()
            .fill(colors::HINT_BG)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(colors::TEXT_DARK, text);
            });
    }

    if let Some(ref error) = board.error {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
    }

    if board.is_loading {
        ui.spinner();
    }

    let memos = board.memos.clone();
    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 120.0)
        .show(ui, |ui| {
            for memo in &memos {
                egui::Frame::default()
                    .fill(colors::CARD_BG)
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.colored_label(colors::TEXT_MUTED, &memo.timestamp);

                        let is_editing_this =
                            matches!(board.editing, Some((id, _)) if id == memo.id);
                        if is_editing_this {
                            if let Some((_, ref mut buffer)) = board.editing {
                                ui.text_edit_multiline(buffer);
                            }
                            ui.horizontal(|ui| {
                                if ui.button("Save").clicked() {
                                    board.submit_edit(&api, &session);
                                }
                                if ui.button("Cancel").clicked() {
                                    board.cancel_edit();
                                }
                            });
                        } else {
                            ui.colored_label(colors::TEXT_DARK, &memo.content);
                            // no mutation controls on guide or neighbor boards
                            if !read_only {
                                ui.horizontal(|ui| {
                                    if ui.small_button("Edit").clicked() {
                                        board.begin_edit(memo.id);
                                    }
                                    if ui.small_button("Delete").clicked() {
                                        board.delete_memo(&api, &session, memo.id);
                                    }
                                });
                            }
                        }
                    });
                ui.add_space(4.0);
            }
        });

    if let Some(ref summary) = board.summary_text {
        egui::Frame::default()
            .fill(colors::SUMMARY_BG)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("📌 Summary")
                        .strong()
                        .color(colors::TEXT_DARK),
                );
                ui.colored_label(colors::TEXT_DARK, summary);
            });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_enabled(
            !read_only && !board.finished,
            egui::TextEdit::singleline(&mut board.new_memo).hint_text("New memo"),
        );
        if ui
            .add_enabled(
                !read_only,
                egui::Button::new(egui::RichText::new("Add memo").color(colors::TEXT_LIGHT))
                    .fill(colors::BUTTON),
            )
            .clicked()
        {
            board.add_memo(&api, &session);
        }
        if ui
            .add_enabled(
                !read_only && !board.is_summarizing,
                egui::Button::new(egui::RichText::new("Summarize").color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT),
            )
            .clicked()
        {
            board.summarize(&api, &session);
        }
        if board.is_summarizing {
            ui.spinner();
        }
    });

    if go_back {
        state.back_to_board_list();
    }
}
