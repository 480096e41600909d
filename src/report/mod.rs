/// Page building: turns the dataset into display-ready artifacts.
///
/// ```text
///   Dataset ──► table   ──► TableArtifact   (formatted strings)
///      │
///      └─────► charts  ──► CategorySection  (ChartArtifact on a 2-col grid)
///                 │
///                 └── units (name → "%", "Milliards USD", "Mois")
/// ```
///
/// Nothing here touches egui; `ui` draws the artifacts.

pub mod charts;
pub mod export;
pub mod table;
pub mod units;
