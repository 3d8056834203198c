use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{DataSource, TopologyMode};
use crate::data::selection::SelectionState;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – channel selection surface
// ---------------------------------------------------------------------------

/// Render the channel selection panel.
pub fn channel_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Channels");
    ui.separator();

    let Some(session) = &mut state.session else {
        ui.label("No recording loaded.");
        return;
    };

    let accepted = matches!(session.selection.state(), SelectionState::Accepted);

    match session.selection.mode() {
        TopologyMode::ZmaxDualFile => {
            ui.label("Left/right recording pair: one channel per file, nothing to select.");
        }
        mode => {
            // All/None shortcuts only make sense where any count can be valid.
            if mode == TopologyMode::Psg && !accepted {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        session.selection.set_all(true);
                    }
                    if ui.small_button("None").clicked() {
                        session.selection.set_all(false);
                    }
                });
            }

            ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui: &mut Ui| {
                    let n = session.selection.descriptors().len();
                    for idx in 0..n {
                        let desc = &session.selection.descriptors()[idx];
                        let text = RichText::new(format!(
                            "{}  ({})",
                            desc.raw_name, desc.signal_type
                        ))
                        .color(state.type_colors.color_for(desc.signal_type));

                        let mut checked = session.selection.is_checked(idx);
                        let response = ui.add_enabled(
                            !accepted,
                            egui::Checkbox::new(&mut checked, text),
                        );
                        if response.changed() {
                            session.selection.toggle(idx);
                        }
                    }
                });
        }
    }

    // Clone so the session borrow ends before confirm needs the whole state.
    let selection_state = session.selection.state().clone();

    ui.separator();

    match selection_state {
        SelectionState::Accepted => {
            ui.label(RichText::new("Selection confirmed.").color(Color32::LIGHT_GREEN));
        }
        other => {
            if let SelectionState::Rejected { message } = &other {
                // Verbatim validator message; the checks above stay intact.
                ui.label(RichText::new(message).color(Color32::RED));
            }
            if ui.button("Confirm selection").clicked() {
                state.confirm_selection();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open recording folder…").clicked() {
                open_directory_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Data source:");
        let current = state.data_source;
        egui::ComboBox::from_id_salt("data_source")
            .selected_text(current.label())
            .show_ui(ui, |ui: &mut Ui| {
                for source in DataSource::ALL {
                    if ui
                        .selectable_label(current == source, source.label())
                        .clicked()
                    {
                        state.data_source = source;
                    }
                }
            });

        ui.separator();

        if let Some(session) = &state.session {
            ui.label(format!(
                "{} – {} channel(s), {} selected",
                session.selection.mode(),
                session.selection.descriptors().len(),
                session.selection.checked_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Directory dialog
// ---------------------------------------------------------------------------

pub fn open_directory_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open recording folder")
        .pick_folder();

    if let Some(dir) = dir {
        state.resolve_directory(&dir);
    }
}
