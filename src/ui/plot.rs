use eframe::egui::{
    self, epaint::TextShape, pos2, vec2, CornerRadius, FontId, Margin, RichText, Sense, Stroke, Ui,
};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, VLine};

use crate::report::charts::ChartArtifact;
use crate::style::StyleConfig;

// ---------------------------------------------------------------------------
// Indicator chart (one card in the grid)
// ---------------------------------------------------------------------------

/// Id of the chart at (`row`, `column`) of a category section.
///
/// The same indicator may be charted in several places, so the title alone
/// does not identify a plot.
pub fn chart_id(section: &str, row: usize, column: usize) -> egui::Id {
    egui::Id::new(("indicator_chart", section, row, column))
}

/// Draw one indicator chart inside a bordered card.
pub fn indicator_chart(ui: &mut Ui, id: egui::Id, chart: &ChartArtifact, style: &StyleConfig) {
    egui::Frame::default()
        .stroke(Stroke::new(1.0, style.page.card_border))
        .corner_radius(CornerRadius::same(style.page.card_radius))
        .inner_margin(Margin::same(style.page.card_padding))
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new(&chart.title)
                        .strong()
                        .size(style.axes.title_size)
                        .color(style.page.heading_color),
                );
            });
            ui.add_space(4.0);
            line_plot(ui, id, chart, style);
        });
}

fn line_plot(ui: &mut Ui, id: egui::Id, chart: &ChartArtifact, style: &StyleConfig) {
    let width = ui.available_width();
    let height = width * style.axes.aspect;
    let line = chart.line;
    let unit = chart.y_label();

    let coords: Vec<[f64; 2]> = chart
        .points
        .iter()
        .map(|p| [f64::from(p.year), p.value])
        .collect();

    let response = Plot::new(id)
        .height(height)
        .y_axis_label(unit)
        // x labels are painted rotated below the plot
        .show_axes([false, true])
        .show_grid([false, true])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .label_formatter(move |_name, value| format!("{:.0}\n{:.1} {unit}", value.x, value.y))
        .show(ui, |plot_ui| {
            for &year in &chart.x_ticks {
                plot_ui.vline(
                    VLine::new(f64::from(year))
                        .color(style.axes.grid_color)
                        .width(1.0),
                );
            }

            plot_ui.line(
                Line::new(PlotPoints::from(coords.clone()))
                    .color(line.color)
                    .width(line.width),
            );

            // Hollow markers: outline disc, then the fill on top.
            let radius = line.marker_size * 0.5 + line.width * 0.5;
            plot_ui.points(
                Points::new(PlotPoints::from(coords.clone()))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius)
                    .color(line.color),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(coords.clone()))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(line.marker_size * 0.5)
                    .color(line.marker_fill),
            );
        });

    // ---- Rotated year labels ----
    let font = FontId::proportional(style.axes.font_size + 2.0);
    let band_height = font.size * 4.0;
    let (band, _) = ui.allocate_exact_size(vec2(width, band_height), Sense::hover());

    let angle = -style.axes.tick_rotation_deg.to_radians();
    let (sin, cos) = angle.sin_cos();
    let text_color = ui.visuals().text_color();
    let painter = ui.painter();

    for &year in &chart.x_ticks {
        let anchor = response
            .transform
            .position_from_point(&PlotPoint::new(f64::from(year), 0.0));
        let galley = painter.layout_no_wrap(year.to_string(), font.clone(), text_color);
        let w = galley.size().x;
        // The text runs along (cos, sin) from `pos`, so it ends under the tick.
        let pos = pos2(anchor.x - w * cos, band.top() + 2.0 - w * sin);
        painter.add(TextShape::new(pos, galley, text_color).with_angle(angle));
    }
}
