use eframe::egui::{self, FontId, TextStyle, Theme};

use crate::style::StyleConfig;

/// Install the dashboard look on the egui context: light visuals, white
/// panels, page font sizes.
///
/// The theme is pinned to light so an OS dark-mode switch does not swap in
/// egui's default dark style.
pub fn apply(ctx: &egui::Context, style: &StyleConfig) {
    ctx.set_theme(Theme::Light);
    ctx.set_visuals_of(Theme::Light, egui::Visuals::light());

    let page = style.page;
    ctx.style_mut_of(Theme::Light, |s| {
        s.visuals.panel_fill = page.background;
        s.visuals.window_fill = page.background;
        s.visuals.extreme_bg_color = page.background;

        s.text_styles.insert(TextStyle::Heading, FontId::proportional(page.section_size));
        s.text_styles.insert(TextStyle::Body, FontId::proportional(page.body_size));
        s.text_styles.insert(TextStyle::Button, FontId::proportional(page.body_size));
        s.text_styles.insert(TextStyle::Small, FontId::proportional(page.body_size - 2.0));
    });
}
