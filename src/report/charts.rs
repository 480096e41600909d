use crate::data::filter::{filter_missing, SeriesPoint};
use crate::data::model::{Category, Dataset, DatasetError, Series};
use crate::style::{LineStyle, StyleConfig};

use super::units::{infer_unit, Unit};

// ---------------------------------------------------------------------------
// Chart artifact
// ---------------------------------------------------------------------------

/// Everything needed to draw one indicator chart, detached from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub title: String,
    pub unit: Unit,
    /// Observed points only, in year order.
    pub points: Vec<SeriesPoint>,
    /// Years that get a tick label: the observed ones.
    pub x_ticks: Vec<i32>,
    pub line: LineStyle,
}

impl ChartArtifact {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn y_label(&self) -> &'static str {
        self.unit.label()
    }
}

/// Build the chart of one indicator.
pub fn build_chart(series: &Series, years: &[i32], style: &StyleConfig) -> ChartArtifact {
    let points = filter_missing(years, &series.cells);
    let x_ticks = points.iter().map(|p| p.year).collect();

    ChartArtifact {
        title: series.name.clone(),
        unit: infer_unit(&series.name),
        points,
        x_ticks,
        line: style.line_for(0),
    }
}

// ---------------------------------------------------------------------------
// Category sections laid out on a column grid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedChart {
    pub row: usize,
    pub column: usize,
    pub chart: ChartArtifact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub name: String,
    pub charts: Vec<PlacedChart>,
}

impl CategorySection {
    /// Charts grouped by grid row; a row may be only partly filled.
    pub fn rows(&self) -> Vec<Vec<&PlacedChart>> {
        let mut rows: Vec<Vec<&PlacedChart>> = Vec::new();
        for placed in &self.charts {
            if rows.len() <= placed.row {
                rows.resize_with(placed.row + 1, Vec::new);
            }
            rows[placed.row].push(placed);
        }
        rows
    }
}

/// Build every category's charts, in declaration order.
///
/// Chart `i` of a category lands in column `i % columns`; each category
/// starts on a fresh row. The first indicator missing from the dataset
/// aborts the whole build.
pub fn build_charts(
    dataset: &Dataset,
    categories: &[Category],
    style: &StyleConfig,
) -> Result<Vec<CategorySection>, DatasetError> {
    let columns = style.page.columns.max(1);

    categories
        .iter()
        .map(|category| -> Result<CategorySection, DatasetError> {
            let charts = category
                .indicators
                .iter()
                .enumerate()
                .map(|(idx, name)| -> Result<PlacedChart, DatasetError> {
                    let series = dataset.get(name)?;
                    let chart = build_chart(series, dataset.years(), style);
                    if chart.is_empty() {
                        log::warn!("Chart '{}' has no observed value", chart.title);
                    } else {
                        log::debug!(
                            "Chart '{}' ({}): {} points",
                            chart.title,
                            chart.unit,
                            chart.points.len()
                        );
                    }
                    Ok(PlacedChart {
                        row: idx / columns,
                        column: idx % columns,
                        chart,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(CategorySection {
                name: category.name.clone(),
                charts,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category consistency
// ---------------------------------------------------------------------------

/// Drift between the category lists and the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryReport {
    /// Listed in a category but absent from the dataset.
    pub orphans: Vec<String>,
    /// Listed more than once across all categories.
    pub duplicates: Vec<String>,
    /// In the dataset but in no category.
    pub uncovered: Vec<String>,
}

impl CategoryReport {
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty() && self.duplicates.is_empty() && self.uncovered.is_empty()
    }
}

pub fn check_categories(dataset: &Dataset, categories: &[Category]) -> CategoryReport {
    let listed: Vec<&str> = categories
        .iter()
        .flat_map(|c| c.indicators.iter().map(String::as_str))
        .collect();

    let mut report = CategoryReport::default();
    for (i, name) in listed.iter().enumerate() {
        if !dataset.contains(name) && !report.orphans.iter().any(|o| o.as_str() == *name) {
            report.orphans.push(name.to_string());
        }
        if listed[..i].contains(name) && !report.duplicates.iter().any(|d| d.as_str() == *name) {
            report.duplicates.push(name.to_string());
        }
    }
    report.uncovered = dataset
        .indicator_names()
        .filter(|name| !listed.contains(name))
        .map(str::to_string)
        .collect();

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::indicators::{morocco_categories, morocco_dataset};
    use crate::data::model::Cell;

    fn sections() -> Vec<CategorySection> {
        build_charts(
            &morocco_dataset().unwrap(),
            &morocco_categories(),
            &StyleConfig::default(),
        )
        .unwrap()
    }

    fn chart<'a>(sections: &'a [CategorySection], title: &str) -> &'a ChartArtifact {
        sections
            .iter()
            .flat_map(|s| s.charts.iter())
            .map(|p| &p.chart)
            .find(|c| c.title == title)
            .unwrap()
    }

    #[test]
    fn unemployment_drops_missing_years() {
        let s = sections();
        let c = chart(&s, "Taux de chômage (OIT)");
        assert_eq!(c.points.len(), 5);
        assert_eq!(c.points.last(), Some(&SeriesPoint { year: 2023, value: 13.0 }));
        assert_eq!(c.y_label(), "%");
        assert_eq!(c.x_ticks, vec![2019, 2020, 2021, 2022, 2023]);
    }

    #[test]
    fn nominal_gdp_in_billions() {
        let s = sections();
        let c = chart(&s, "PIB nominal (Md$)");
        assert_eq!(c.y_label(), "Milliards USD");
        assert_eq!(c.points.len(), 8);
        let years: Vec<i32> = c.points.iter().map(|p| p.year).collect();
        assert_eq!(years, (2019..=2026).collect::<Vec<_>>());
    }

    #[test]
    fn public_finance_columns_alternate() {
        let s = sections();
        let finances = s.iter().find(|s| s.name == "Finances Publiques").unwrap();
        let columns: Vec<usize> = finances.charts.iter().map(|p| p.column).collect();
        let rows: Vec<usize> = finances.charts.iter().map(|p| p.row).collect();
        assert_eq!(columns, [0, 1, 0, 1]);
        assert_eq!(rows, [0, 0, 1, 1]);
        assert_eq!(finances.rows().len(), 2);
    }

    #[test]
    fn each_category_starts_a_new_row() {
        for section in sections() {
            let first = &section.charts[0];
            assert_eq!((first.row, first.column), (0, 0), "{}", section.name);
        }
    }

    #[test]
    fn odd_category_leaves_half_row() {
        let s = sections();
        let real = s.iter().find(|s| s.name == "Économie Réelle").unwrap();
        let rows = real.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].len(), 1);
    }

    #[test]
    fn sections_follow_declaration_order() {
        let names: Vec<String> = sections().into_iter().map(|s| s.name).collect();
        let expected: Vec<String> = morocco_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn building_twice_is_identical() {
        let ds = morocco_dataset().unwrap();
        let style = StyleConfig::default();
        let series = ds.get("Taux de chômage (OIT)").unwrap();
        let a = build_chart(series, ds.years(), &style);
        let b = build_chart(series, ds.years(), &style);
        assert_eq!(a.points, b.points);
        assert_eq!(a, b);
    }

    #[test]
    fn all_missing_is_an_empty_chart() {
        let ds = Dataset::new(
            vec![2019, 2020],
            vec![Series::new("Vide", vec![Cell::Missing, Cell::Missing])],
        )
        .unwrap();
        let c = build_chart(ds.get("Vide").unwrap(), ds.years(), &StyleConfig::default());
        assert!(c.is_empty());
        assert!(c.x_ticks.is_empty());
    }

    #[test]
    fn unknown_indicator_aborts() {
        let ds = morocco_dataset().unwrap();
        let mut cats = morocco_categories();
        cats[1].indicators.push("Épargne nationale".to_string());
        let err = build_charts(&ds, &cats, &StyleConfig::default()).unwrap_err();
        assert_eq!(err, DatasetError::NotFound("Épargne nationale".to_string()));
    }

    #[test]
    fn chart_uses_style_line() {
        let style = StyleConfig::default();
        let s = sections();
        assert_eq!(chart(&s, "Inflation (IPC)").line, style.line);
    }

    #[test]
    fn dashboard_categories_are_clean() {
        let report = check_categories(&morocco_dataset().unwrap(), &morocco_categories());
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn report_flags_drift() {
        let ds = morocco_dataset().unwrap();
        let mut cats = morocco_categories();
        cats.pop();
        cats[0].indicators.push("Services".to_string());
        cats[0].indicators.push("Inconnu".to_string());

        let report = check_categories(&ds, &cats);
        assert_eq!(report.orphans, ["Inconnu"]);
        assert_eq!(report.duplicates, ["Services"]);
        assert_eq!(report.uncovered, ["PIB nominal (Md$)"]);
        assert!(!report.is_clean());
    }
}
