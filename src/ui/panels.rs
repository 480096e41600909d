use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::indicators::SOURCE_CAPTION;
use crate::report::charts::CategorySection;
use crate::report::table::TableArtifact;
use crate::state::AppState;
use crate::style::StyleConfig;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Fichier", |ui: &mut Ui| {
            if ui.button("Exporter CSV…").clicked() {
                save_file_dialog(state, "csv");
                ui.close_menu();
            }
            if ui.button("Exporter JSON…").clicked() {
                save_file_dialog(state, "json");
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            if let Some((first, last)) = ds.year_span() {
                ui.label(format!("{} indicateurs, {first}–{last}", ds.len()));
            }
        }

        if let Some(path) = &state.last_export {
            ui.separator();
            ui.label(RichText::new(format!("Exporté : {}", path.display())).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

pub fn page_header(ui: &mut Ui, state: &AppState) {
    let page = state.style.page;
    ui.label(
        RichText::new(&state.heading)
            .size(page.title_size)
            .strong()
            .color(page.heading_color),
    );
    ui.label(RichText::new(SOURCE_CAPTION).small().weak());
    ui.add_space(8.0);
}

fn section_heading(ui: &mut Ui, text: &str, style: &StyleConfig) {
    ui.add_space(6.0);
    ui.label(
        RichText::new(text)
            .size(style.page.section_size)
            .strong()
            .color(style.page.heading_color),
    );
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Indicator table
// ---------------------------------------------------------------------------

/// Render the full indicators × years table.
pub fn indicator_table(ui: &mut Ui, table: &TableArtifact, style: &StyleConfig) {
    section_heading(ui, "📋 Tableau Complet des Indicateurs", style);

    if table.is_empty() {
        ui.label("Aucun indicateur.");
        return;
    }

    let placeholder = style.table.placeholder.as_str();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::right_to_left(egui::Align::Center))
        .column(Column::auto().at_least(240.0))
        .columns(Column::auto().at_least(64.0), table.years.len())
        .min_scrolled_height(0.0)
        .max_scroll_height(style.table.max_height)
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Indicateur");
            });
            for year in &table.years {
                header.col(|ui| {
                    ui.strong(year.to_string());
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(20.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                            ui.label(&row.indicator);
                        });
                    });
                    for cell in &row.cells {
                        table_row.col(|ui| {
                            if cell == placeholder {
                                ui.label(RichText::new(cell).color(Color32::DARK_GRAY));
                            } else {
                                ui.monospace(cell);
                            }
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Chart grid
// ---------------------------------------------------------------------------

/// Render every category: a subheading, then its charts two per row.
pub fn chart_sections(ui: &mut Ui, sections: &[CategorySection], style: &StyleConfig) {
    section_heading(ui, "📈 Visualisation par Indicateur", style);

    let columns = style.page.columns.max(1);
    for section in sections {
        ui.label(
            RichText::new(format!("🔹 {}", section.name))
                .size(style.page.subheading_size)
                .strong()
                .color(style.page.heading_color),
        );
        ui.add_space(4.0);

        for row in section.rows() {
            ui.columns(columns, |cols: &mut [Ui]| {
                for placed in row {
                    let id = plot::chart_id(&section.name, placed.row, placed.column);
                    plot::indicator_chart(&mut cols[placed.column], id, &placed.chart, style);
                }
            });
            ui.add_space(8.0);
        }

        ui.separator();
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut AppState, extension: &str) {
    let file = rfd::FileDialog::new()
        .set_title("Exporter le tableau des indicateurs")
        .add_filter(extension.to_ascii_uppercase(), &[extension])
        .set_file_name(format!("indicateurs_maroc.{extension}"))
        .save_file();

    if let Some(path) = file {
        state.export_table(&path);
    }
}
