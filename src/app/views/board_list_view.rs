use eframe::egui;

use crate::app::guide;
use crate::app::screens::MemoBoardParams;
use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.gate.session().cloned() else {
        return;
    };

    // navigation is deferred to the end of the frame so list iteration
    // never overlaps a state swap
    let mut nav: Option<MemoBoardParams> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("My boards")
                .size(20.0)
                .strong()
                .color(colors::TEXT_DARK),
        );

        if let Some(ref error) = state.board_list.error {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
        }

        if state.board_list.is_loading_boards {
            ui.spinner();
        }

        let own_boards = state.board_list.own_boards.clone();
        let overdue = state.board_list.overdue_boards.clone();
        for board in &own_boards {
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new(egui::RichText::new(&board.title).size(16.0)).fill(colors::CARD_BG))
                    .clicked()
                {
                    nav = Some(state.board_list.params_for_own_board(board));
                }
                if overdue.contains(&board.id) {
                    ui.colored_label(colors::OVERDUE, "⏰ reminder due");
                }
            });
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add_sized(
                [220.0, 28.0],
                egui::TextEdit::singleline(&mut state.board_list.new_board_title)
                    .hint_text("New board name"),
            );
            let busy = state.board_list.is_creating_board;
            if ui
                .add_enabled(
                    !busy,
                    egui::Button::new(egui::RichText::new("Add board").color(colors::TEXT_LIGHT))
                        .fill(colors::BUTTON),
                )
                .clicked()
            {
                state.board_list.submit_new_board(&state.api, &session);
            }
            if busy {
                ui.spinner();
            }
        });

        ui.add_space(16.0);
        ui.separator();
        ui.label(
            egui::RichText::new("Shared by neighbors")
                .size(20.0)
                .strong()
                .color(colors::TEXT_DARK),
        );

        if state.board_list.is_loading_shared {
            ui.spinner();
        }

        // the guide board always leads the shared section
        let guide_board = guide::guide_board();
        if ui
            .add(egui::Button::new(egui::RichText::new(format!("📖 {}", guide_board.title))).fill(colors::HINT_BG))
            .clicked()
        {
            nav = Some(state.board_list.params_for_shared_board(&guide_board));
        }

        let shared_boards = state.board_list.shared_boards.clone();
        for board in &shared_boards {
            let owner = board.owner.as_deref().unwrap_or("?");
            if ui
                .add(egui::Button::new(format!("{} (by {})", board.title, owner)).fill(colors::CARD_BG))
                .clicked()
            {
                nav = Some(state.board_list.params_for_shared_board(board));
            }
        }

        ui.add_space(16.0);
        ui.separator();
        render_neighbors(ui, state, &session);
    });

    if let Some(params) = nav {
        state.open_board(params);
    }
}

fn render_neighbors(ui: &mut egui::Ui, state: &mut AppState, session: &crate::app::session::Session) {
    ui.label(
        egui::RichText::new("Neighbors")
            .size(20.0)
            .strong()
            .color(colors::TEXT_DARK),
    );

    let action_pending = state.board_list.is_follow_action_pending();

    let requests = state.board_list.incoming_requests.clone();
    if !requests.is_empty() {
        ui.label(egui::RichText::new("Requests").color(colors::TEXT_MUTED));
        for request in &requests {
            ui.horizontal(|ui| {
                let who = if request.from_nickname.is_empty() {
                    request.from_username.clone()
                } else {
                    format!("{} ({})", request.from_nickname, request.from_username)
                };
                ui.label(who);
                if ui.add_enabled(!action_pending, egui::Button::new("Accept")).clicked() {
                    state
                        .board_list
                        .respond_to_request(&state.api, session, &request.from_username, true);
                }
                if ui.add_enabled(!action_pending, egui::Button::new("Decline")).clicked() {
                    state
                        .board_list
                        .respond_to_request(&state.api, session, &request.from_username, false);
                }
            });
        }
        ui.add_space(6.0);
    }

    let neighbors = state.board_list.neighbors.clone();
    for neighbor in &neighbors {
        ui.horizontal(|ui| {
            ui.label(format!("@{}", neighbor.username));
            if !neighbor.nickname.is_empty() {
                ui.colored_label(colors::TEXT_MUTED, &neighbor.nickname);
            }
            if ui.add_enabled(!action_pending, egui::Button::new("Remove")).clicked() {
                state
                    .board_list
                    .remove_neighbor(&state.api, session, &neighbor.username);
            }
        });
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_sized(
            [220.0, 28.0],
            egui::TextEdit::singleline(&mut state.board_list.search_input)
                .hint_text("Find users by name"),
        );
        if ui.button("Search").clicked() {
            state.board_list.submit_search(&state.api, session);
        }
        if state.board_list.is_searching {
            ui.spinner();
        }
    });

    let results = state.board_list.search_results.clone();
    for user in &results {
        ui.horizontal(|ui| {
            ui.label(format!("@{}", user.username));
            if ui.add_enabled(!action_pending, egui::Button::new("Send request")).clicked() {
                state
                    .board_list
                    .send_follow_request(&state.api, session, &user.username);
            }
        });
    }
}
