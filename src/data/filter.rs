use super::model::Cell;

// ---------------------------------------------------------------------------
// Missing-value filtering
// ---------------------------------------------------------------------------

/// One observed `(year, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// Pair every cell with its year and drop the missing ones.
///
/// Year order is preserved. An all-missing series yields an empty vector,
/// which is still a valid (empty) chart.
pub fn filter_missing(years: &[i32], cells: &[Cell]) -> Vec<SeriesPoint> {
    years
        .iter()
        .zip(cells)
        .filter_map(|(&year, cell)| cell.value().map(|value| SeriesPoint { year, value }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_series_passes_through() {
        let years = [2019, 2020, 2021];
        let cells = [Cell::Number(1.5), Cell::Number(-2.0), Cell::Number(0.0)];
        let points = filter_missing(&years, &cells);

        assert_eq!(points.len(), cells.len());
        for (p, (y, c)) in points.iter().zip(years.iter().zip(cells.iter())) {
            assert_eq!(p.year, *y);
            assert_eq!(Some(p.value), c.value());
        }
    }

    #[test]
    fn gaps_are_dropped_in_order() {
        let years = [2019, 2020, 2021, 2022];
        let cells = [Cell::Missing, Cell::Number(1.0), Cell::Missing, Cell::Number(3.0)];
        let points = filter_missing(&years, &cells);
        assert_eq!(
            points,
            vec![
                SeriesPoint { year: 2020, value: 1.0 },
                SeriesPoint { year: 2022, value: 3.0 },
            ]
        );
    }

    #[test]
    fn all_missing_is_empty() {
        let points = filter_missing(&[2019, 2020], &[Cell::Missing, Cell::Missing]);
        assert!(points.is_empty());
    }
}
