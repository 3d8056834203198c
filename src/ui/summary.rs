use eframe::egui::{self, RichText, Ui};

use crate::data::topology::RecordingLayout;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Session summary (central panel)
// ---------------------------------------------------------------------------

/// Render the resolved-recording overview in the central panel.
pub fn session_summary(ui: &mut Ui, state: &AppState) {
    let Some(session) = &state.session else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a recording folder to begin  (File → Open recording folder…)");
        });
        return;
    };

    ui.heading("Recording");
    ui.separator();

    egui::Grid::new("session_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Directory");
            ui.label(session.directory.display().to_string());
            ui.end_row();

            ui.label("Topology");
            ui.label(session.selection.mode().to_string());
            ui.end_row();

            match &session.layout {
                RecordingLayout::Psg { file } | RecordingLayout::ZmaxSingleFile { file } => {
                    ui.label("Recording file");
                    ui.label(file.display().to_string());
                    ui.end_row();
                }
                RecordingLayout::ZmaxDualFile { left, right } => {
                    ui.label("Left file");
                    ui.label(left.display().to_string());
                    ui.end_row();
                    ui.label("Right file");
                    ui.label(right.display().to_string());
                    ui.end_row();
                }
            }
        });

    ui.add_space(8.0);
    ui.strong("Signal types");
    ui.horizontal(|ui: &mut Ui| {
        for (label, color) in state.type_colors.legend_entries() {
            ui.label(RichText::new(label).color(color));
        }
    });

    if let Some(result) = &state.accepted {
        ui.add_space(8.0);
        ui.strong("Confirmed selection");
        if result.channels.is_empty() {
            ui.label("(no channel choice required for this topology)");
        } else {
            for channel in &result.channels {
                ui.label(format!("• {channel}"));
            }
        }
    }
}
