use crate::data::model::{Cell, Dataset};
use crate::style::TableStyle;

// ---------------------------------------------------------------------------
// Table artifact: indicators × years, already formatted
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub indicator: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableArtifact {
    pub years: Vec<i32>,
    pub rows: Vec<TableRow>,
}

impl TableArtifact {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn format_cell(cell: &Cell, style: &TableStyle) -> String {
    match cell {
        Cell::Number(v) => format!("{v:.prec$}", prec = style.decimals),
        Cell::Missing => style.placeholder.clone(),
    }
}

/// Transpose the dataset into one row per indicator, one column per year.
pub fn render_table(dataset: &Dataset, style: &TableStyle) -> TableArtifact {
    let rows = dataset
        .series()
        .iter()
        .map(|s| TableRow {
            indicator: s.name.clone(),
            cells: s.cells.iter().map(|c| format_cell(c, style)).collect(),
        })
        .collect();

    TableArtifact {
        years: dataset.years().to_vec(),
        rows,
    }
}
