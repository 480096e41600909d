mod app;
mod color;
mod data;
mod report;
mod state;
mod style;
mod ui;

use app::DashboardApp;
use data::indicators::PAGE_TITLE;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
