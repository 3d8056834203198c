use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, summary};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SomnoscopeApp {
    pub state: AppState,
}

impl eframe::App for SomnoscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: channel selection surface ----
        egui::SidePanel::left("channel_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::channel_panel(ui, &mut self.state);
            });

        // ---- Central panel: session summary ----
        egui::CentralPanel::default().show(ctx, |ui| {
            summary::session_summary(ui, &self.state);
        });
    }
}
