use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems in the hardcoded dataset or in the category lists
/// that reference it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("indicator not found in dataset: '{0}'")]
    NotFound(String),

    #[error("indicator '{name}' has {found} values but the year axis has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("year axis must be strictly increasing ({previous} followed by {next})")]
    YearsNotIncreasing { previous: i32, next: i32 },

    #[error("indicator declared twice: '{0}'")]
    DuplicateIndicator(String),
}

// ---------------------------------------------------------------------------
// Cell – one annual observation
// ---------------------------------------------------------------------------

/// A single annual value. Missing observations are a variant of their own
/// so a real NaN in the data is never confused with "no data".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Number(f64),
    Missing,
}

impl Cell {
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Cell::Missing, Cell::Number)
    }
}

// ---------------------------------------------------------------------------
// Series – one indicator
// ---------------------------------------------------------------------------

/// One indicator: its display name and one cell per year of the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Series {
    pub fn new(name: &str, cells: Vec<Cell>) -> Self {
        Series {
            name: name.to_string(),
            cells,
        }
    }

    /// Convenience for fully observed series.
    pub fn from_values(name: &str, values: &[f64]) -> Self {
        Series::new(name, values.iter().copied().map(Cell::from).collect())
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the full, immutable table of indicators
// ---------------------------------------------------------------------------

/// Year axis plus the indicators in declaration order.
///
/// Only constructible through [`Dataset::new`], which enforces the
/// structural invariants; there is no way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    years: Vec<i32>,
    series: Vec<Series>,
}

impl Dataset {
    pub fn new(years: Vec<i32>, series: Vec<Series>) -> Result<Self, DatasetError> {
        for pair in years.windows(2) {
            if pair[1] <= pair[0] {
                return Err(DatasetError::YearsNotIncreasing {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }

        for (i, s) in series.iter().enumerate() {
            if s.cells.len() != years.len() {
                return Err(DatasetError::LengthMismatch {
                    name: s.name.clone(),
                    expected: years.len(),
                    found: s.cells.len(),
                });
            }
            if series[..i].iter().any(|other| other.name == s.name) {
                return Err(DatasetError::DuplicateIndicator(s.name.clone()));
            }
        }

        Ok(Dataset { years, series })
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// All series in declaration order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn indicator_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    /// Look up an indicator by its display name.
    pub fn get(&self, name: &str) -> Result<&Series, DatasetError> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DatasetError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.series.iter().any(|s| s.name == name)
    }

    /// First and last year of the axis, if any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }

    /// Number of indicators.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the dataset has no indicators.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Category – a titled group of indicator names
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub indicators: Vec<String>,
}

impl Category {
    pub fn new(name: &str, indicators: &[&str]) -> Self {
        Category {
            name: name.to_string(),
            indicators: indicators.iter().map(|s| s.to_string()).collect(),
        }
    }
}
