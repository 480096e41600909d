use eframe::egui::Color32;

use crate::color::{blend_over, palette_from_hex, parse_hex};

/// Series colours of the dashboard, first one used for every chart line.
pub const SERIES_COLORS: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

// ---------------------------------------------------------------------------
// Style sections
// ---------------------------------------------------------------------------

/// How a single indicator line is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color32,
    pub width: f32,
    /// Marker diameter in points.
    pub marker_size: f32,
    pub marker_fill: Color32,
}

/// Axes decoration shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesStyle {
    pub grid_alpha: f32,
    pub grid_color: Color32,
    /// Counter-clockwise rotation of the x tick labels, in degrees.
    pub tick_rotation_deg: f32,
    /// Height / width of a chart.
    pub aspect: f32,
    pub font_size: f32,
    pub title_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub decimals: usize,
    pub placeholder: String,
    pub max_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStyle {
    pub background: Color32,
    pub heading_color: Color32,
    pub card_border: Color32,
    pub card_radius: u8,
    pub card_padding: i8,
    pub title_size: f32,
    pub section_size: f32,
    pub subheading_size: f32,
    pub body_size: f32,
    /// Charts per layout row.
    pub columns: usize,
}

// ---------------------------------------------------------------------------
// StyleConfig
// ---------------------------------------------------------------------------

/// Every visual parameter of the dashboard.
///
/// Built once at startup and passed by reference into chart building and
/// rendering; nothing reads styling from global state.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub palette: Vec<Color32>,
    pub line: LineStyle,
    pub axes: AxesStyle,
    pub table: TableStyle,
    pub page: PageStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let palette = palette_from_hex(&SERIES_COLORS);
        let primary = palette.first().copied().unwrap_or(Color32::LIGHT_BLUE);
        let background = Color32::WHITE;
        let grid_alpha = 0.2;

        StyleConfig {
            line: LineStyle {
                color: primary,
                width: 2.0,
                marker_size: 5.0,
                marker_fill: Color32::WHITE,
            },
            axes: AxesStyle {
                grid_alpha,
                grid_color: blend_over(Color32::BLACK, background, grid_alpha),
                tick_rotation_deg: 45.0,
                aspect: 3.0 / 8.0,
                font_size: 9.0,
                title_size: 11.0,
            },
            table: TableStyle {
                decimals: 1,
                placeholder: "-".to_string(),
                max_height: 800.0,
            },
            page: PageStyle {
                background,
                heading_color: parse_hex("#2a3f5f").unwrap_or(Color32::DARK_BLUE),
                card_border: parse_hex("#f0f2f6").unwrap_or(Color32::LIGHT_GRAY),
                card_radius: 8,
                card_padding: 15,
                title_size: 28.0,
                section_size: 22.0,
                subheading_size: 17.0,
                body_size: 13.0,
                columns: 2,
            },
            palette,
        }
    }
}

impl StyleConfig {
    /// Line style for the `i`-th series of a chart, cycling the palette.
    pub fn line_for(&self, i: usize) -> LineStyle {
        let color = if self.palette.is_empty() {
            self.line.color
        } else {
            self.palette[i % self.palette.len()]
        };
        LineStyle { color, ..self.line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_dashboard_look() {
        let style = StyleConfig::default();
        assert_eq!(style.line.color, Color32::from_rgb(0x1f, 0x77, 0xb4));
        assert_eq!(style.line.width, 2.0);
        assert_eq!(style.line.marker_fill, Color32::WHITE);
        assert_eq!(style.axes.tick_rotation_deg, 45.0);
        assert_eq!(style.axes.grid_alpha, 0.2);
        assert_eq!(style.table.placeholder, "-");
        assert_eq!(style.page.columns, 2);
        assert_eq!(style.palette.len(), SERIES_COLORS.len());
    }

    #[test]
    fn line_for_cycles_palette() {
        let style = StyleConfig::default();
        assert_eq!(style.line_for(0), style.line);
        assert_eq!(style.line_for(6).color, style.palette[0]);
        assert_eq!(style.line_for(1).color, Color32::from_rgb(0xff, 0x7f, 0x0e));
    }
}
