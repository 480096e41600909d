use std::path::{Path, PathBuf};

use crate::data::indicators::{dashboard_heading, morocco_categories, morocco_dataset};
use crate::data::model::{Category, Dataset, DatasetError, Series};
use crate::report::charts::{build_charts, check_categories, CategorySection};
use crate::report::export::save_table;
use crate::report::table::{render_table, TableArtifact};
use crate::style::StyleConfig;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full page, built once at startup, independent of rendering.
pub struct AppState {
    pub style: StyleConfig,

    /// None only when the hardcoded dataset failed validation.
    pub dataset: Option<Dataset>,

    pub heading: String,

    /// Formatted indicator table.
    pub table: Option<TableArtifact>,

    /// Chart grid; empty when chart building was aborted.
    pub sections: Vec<CategorySection>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Destination of the last successful export.
    pub last_export: Option<PathBuf>,
}

impl AppState {
    /// Build the dashboard page from the hardcoded indicators.
    pub fn new(style: StyleConfig) -> Self {
        Self::from_parts(style, morocco_dataset(), morocco_categories())
    }

    /// Build a page from an arbitrary dataset and category list.
    ///
    /// A category that names an unknown indicator aborts the whole chart
    /// grid; the table is still shown since it does not depend on the
    /// categories.
    pub fn from_parts(
        style: StyleConfig,
        dataset: Result<Dataset, DatasetError>,
        categories: Vec<Category>,
    ) -> Self {
        let mut state = AppState {
            style,
            dataset: None,
            heading: String::new(),
            table: None,
            sections: Vec::new(),
            status_message: None,
            last_export: None,
        };

        let dataset = match dataset {
            Ok(ds) => ds,
            Err(e) => {
                log::error!("Invalid dataset: {e}");
                state.status_message = Some(format!("Erreur de données : {e}"));
                return state;
            }
        };

        if dataset.is_empty() {
            log::warn!("Dataset has no indicators; the page will be empty");
        }
        let missing: usize = dataset.series().iter().map(Series::missing_count).sum();
        log::info!("{} indicators, {missing} missing cells", dataset.len());

        let report = check_categories(&dataset, &categories);
        if !report.is_clean() {
            for name in &report.orphans {
                log::warn!("Indicator '{name}' is listed in a category but absent from the dataset");
            }
            for name in &report.uncovered {
                log::warn!("Indicator '{name}' is in no category; it only appears in the table");
            }
            for name in &report.duplicates {
                log::warn!("Indicator '{name}' is listed in several categories");
            }
        }

        state.heading = dashboard_heading(&dataset);
        state.table = Some(render_table(&dataset, &state.style.table));

        match build_charts(&dataset, &categories, &state.style) {
            Ok(sections) => {
                log::info!(
                    "Built {} indicators, {} charts in {} categories",
                    dataset.len(),
                    sections.iter().map(|s| s.charts.len()).sum::<usize>(),
                    sections.len()
                );
                state.sections = sections;
            }
            Err(e) => {
                log::error!("Chart grid aborted: {e}");
                state.status_message = Some(format!("Erreur de configuration : {e}"));
            }
        }

        state.dataset = Some(dataset);
        state
    }

    /// Write the table to `path` (CSV or JSON by extension).
    pub fn export_table(&mut self, path: &Path) {
        let (Some(dataset), Some(table)) = (&self.dataset, &self.table) else {
            self.status_message = Some("Aucune donnée à exporter".to_string());
            return;
        };

        match save_table(path, dataset, table) {
            Ok(()) => {
                log::info!("Exported indicator table to {}", path.display());
                self.last_export = Some(path.to_path_buf());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export table: {e:#}");
                self.status_message = Some(format!("Erreur : {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_page_builds_cleanly() {
        let state = AppState::new(StyleConfig::default());
        assert!(state.status_message.is_none());
        assert_eq!(state.sections.len(), 7);
        assert_eq!(state.table.as_ref().map(|t| t.rows.len()), Some(20));
        let charts: usize = state.sections.iter().map(|s| s.charts.len()).sum();
        assert_eq!(charts, 20);
    }

    #[test]
    fn orphan_indicator_drops_charts_but_keeps_table() {
        let mut categories = morocco_categories();
        categories[0].indicators.push("Indice boursier".to_string());

        let state = AppState::from_parts(StyleConfig::default(), morocco_dataset(), categories);
        assert!(state.sections.is_empty());
        assert!(state.table.is_some());
        let msg = state.status_message.unwrap();
        assert!(msg.contains("Indice boursier"), "{msg}");
    }

    #[test]
    fn invalid_dataset_shows_error_only() {
        let bad = Err(DatasetError::YearsNotIncreasing {
            previous: 2020,
            next: 2019,
        });
        let state = AppState::from_parts(StyleConfig::default(), bad, morocco_categories());
        assert!(state.dataset.is_none());
        assert!(state.table.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn empty_dataset_gives_empty_page() {
        let empty = Dataset::new(vec![2019, 2020], vec![]);
        let state = AppState::from_parts(StyleConfig::default(), empty, Vec::new());
        assert!(state.status_message.is_none());
        assert!(state.sections.is_empty());
        assert!(state.table.as_ref().is_some_and(|t| t.is_empty()));
        assert!(state.dataset.as_ref().is_some_and(|ds| ds.is_empty()));
    }

    #[test]
    fn export_failure_is_reported() {
        let mut state = AppState::new(StyleConfig::default());
        state.export_table(Path::new("indicateurs.txt"));
        assert!(state.status_message.unwrap().contains(".txt"));
        assert!(state.last_export.is_none());
    }
}
