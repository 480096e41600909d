use eframe::egui;

use crate::state::AppState;
use crate::style::StyleConfig;
use crate::ui::{panels, theme};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let style = StyleConfig::default();
        theme::apply(&cc.egui_ctx, &style);
        Self {
            state: AppState::new(style),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the whole page, scrollable ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let state = &self.state;
                    panels::page_header(ui, state);

                    if let Some(table) = &state.table {
                        panels::indicator_table(ui, table, &state.style);
                        ui.separator();
                    }

                    panels::chart_sections(ui, &state.sections, &state.style);
                });
        });
    }
}
