use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::data::model::Dataset;

use super::table::TableArtifact;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Save the indicator table to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the formatted table, placeholder kept for missing cells
/// * `.json` – `[{ "indicator": "...", "values": { "2019": 2.9, ... } }, ...]`
pub fn save_table(path: &Path, dataset: &Dataset, table: &TableArtifact) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = match ext.as_str() {
        "csv" | "json" => std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?,
        other => bail!("Unsupported export extension: .{other}"),
    };

    if ext == "csv" {
        write_csv(file, table)
    } else {
        write_json(file, dataset)
    }
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Header `Indicateur,<years…>`, then one record per table row.
pub fn write_csv<W: Write>(writer: W, table: &TableArtifact) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Indicateur".to_string()];
    header.extend(table.years.iter().map(|y| y.to_string()));
    wtr.write_record(&header).context("writing CSV header")?;

    for row in &table.rows {
        wtr.write_record(std::iter::once(&row.indicator).chain(row.cells.iter()))
            .with_context(|| format!("writing CSV row '{}'", row.indicator))?;
    }

    wtr.flush().context("flushing CSV")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

/// JSON numbers cannot hold NaN or infinities; those are written as text
/// so they stay distinct from `null` (missing).
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ExportValue {
    Number(f64),
    NonFinite(String),
}

impl From<f64> for ExportValue {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            ExportValue::Number(v)
        } else {
            ExportValue::NonFinite(v.to_string())
        }
    }
}

#[derive(Debug, Serialize)]
struct IndicatorRecord<'a> {
    indicator: &'a str,
    /// `null` for missing years.
    values: BTreeMap<i32, Option<ExportValue>>,
}

/// Records-oriented JSON, raw values rather than formatted strings.
pub fn write_json<W: Write>(writer: W, dataset: &Dataset) -> Result<()> {
    let records: Vec<IndicatorRecord> = dataset
        .series()
        .iter()
        .map(|s| IndicatorRecord {
            indicator: &s.name,
            values: dataset
                .years()
                .iter()
                .zip(&s.cells)
                .map(|(&year, cell)| (year, cell.value().map(ExportValue::from)))
                .collect(),
        })
        .collect();

    serde_json::to_writer_pretty(writer, &records).context("writing JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::indicators::morocco_dataset;
    use crate::data::model::{Cell, Series};
    use crate::report::table::render_table;
    use crate::style::StyleConfig;

    #[test]
    fn csv_has_header_and_placeholder() {
        let ds = morocco_dataset().unwrap();
        let table = render_table(&ds, &StyleConfig::default().table);
        let mut buf = Vec::new();
        write_csv(&mut buf, &table).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "Indicateur,2019,2020,2021,2022,2023,2024,2025,2026");
        assert_eq!(lines[11], "Taux de chômage (OIT),9.2,11.9,12.3,11.8,13.0,-,-,-");
    }

    #[test]
    fn json_uses_null_for_missing() {
        let ds = morocco_dataset().unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &ds).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 20);

        let chomage = &records[10];
        assert_eq!(chomage["indicator"], "Taux de chômage (OIT)");
        assert_eq!(chomage["values"]["2023"], 13.0);
        assert!(chomage["values"]["2024"].is_null());
    }

    #[test]
    fn json_keeps_nan_apart_from_missing() {
        let ds = Dataset::new(
            vec![2019, 2020, 2021],
            vec![Series::new(
                "Brut",
                vec![Cell::Number(f64::NAN), Cell::Missing, Cell::Number(f64::INFINITY)],
            )],
        )
        .unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &ds).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let values = &value[0]["values"];
        assert_eq!(values["2019"], "NaN");
        assert!(values["2020"].is_null());
        assert_eq!(values["2021"], "inf");
    }

    #[test]
    fn rejects_unknown_extension() {
        let ds = morocco_dataset().unwrap();
        let table = render_table(&ds, &StyleConfig::default().table);
        let err = save_table(Path::new("indicateurs.xlsx"), &ds, &table).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
