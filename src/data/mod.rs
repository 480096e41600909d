/// Data layer: core types, the hardcoded indicators, and missing-value filtering.
///
/// Architecture:
/// ```text
///   ┌────────────┐
///   │ indicators │  hardcoded series + categories
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  year axis, Vec<Series>, validated once
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  drop Missing cells → (year, value) points
///   └──────────┘
/// ```

pub mod filter;
pub mod indicators;
pub mod model;
