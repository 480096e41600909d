use super::model::{Category, Cell, Dataset, DatasetError, Series};

// ---------------------------------------------------------------------------
// Page texts
// ---------------------------------------------------------------------------

pub const PAGE_TITLE: &str = "Indicateurs Économiques Maroc";

pub const SOURCE_CAPTION: &str =
    "Source : Rapport de suivi de la situation économique au Maroc - Banque mondiale, MEC, HCP et BAM";

/// Main heading, with the year span taken from the dataset's axis.
pub fn dashboard_heading(dataset: &Dataset) -> String {
    match dataset.year_span() {
        Some((first, last)) => {
            format!("📊 Tableau de Bord Économique du Maroc ({first}-{last})")
        }
        None => "📊 Tableau de Bord Économique du Maroc".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Hardcoded indicators
// ---------------------------------------------------------------------------

pub const YEARS: [i32; 8] = [2019, 2020, 2021, 2022, 2023, 2024, 2025, 2026];

/// The 20 indicators shown on the dashboard, in table order.
pub fn morocco_dataset() -> Result<Dataset, DatasetError> {
    let series = vec![
        // Économie réelle
        Series::from_values("PIB réel", &[2.9, -7.2, 8.2, 1.5, 3.4, 2.9, 4.0, 3.6]),
        Series::from_values("PIB agricole", &[-5.0, -8.1, 19.5, -11.3, 1.4, -3.3, 9.5, 0.7]),
        Series::from_values("PIB non agricole", &[3.8, -7.1, 8.9, 3.2, 3.8, 3.7, 3.8, 4.0]),
        Series::from_values("Industrie", &[4.1, -5.2, 7.8, -2.7, 1.3, 3.0, 3.2, 3.3]),
        Series::from_values("Services", &[3.9, -7.9, 5.7, 8.8, 4.4, 3.7, 3.5, 4.2]),
        // Demande
        Series::from_values("Consommation privée", &[2.2, -5.8, 6.8, 0.0, 3.7, 4.0, 4.2, 3.7]),
        Series::from_values("Consommation publique", &[4.6, -6.6, 7.2, 3.0, 4.1, 4.6, 4.1, 3.6]),
        Series::from_values("Investissement fixe", &[1.7, -10.0, 7.5, -4.0, 1.9, 3.9, 4.3, 4.5]),
        // Commerce extérieur
        Series::from_values("Exportations", &[5.1, -15.0, 7.9, 20.5, 8.8, 7.6, 8.3, 8.1]),
        Series::from_values("Importations", &[2.1, -11.9, 10.4, 9.5, 7.4, 8.2, 6.3, 7.0]),
        // Emploi & prix; no unemployment survey published past 2023
        Series::new(
            "Taux de chômage (OIT)",
            vec![
                Cell::Number(9.2),
                Cell::Number(11.9),
                Cell::Number(12.3),
                Cell::Number(11.8),
                Cell::Number(13.0),
                Cell::Missing,
                Cell::Missing,
                Cell::Missing,
            ],
        ),
        Series::from_values("Inflation (IPC)", &[0.2, 0.7, 1.4, 6.6, 6.1, 1.5, 2.7, 2.4]),
        // Finances publiques
        Series::from_values(
            "Dépenses publiques (% PIB)",
            &[27.4, 34.1, 31.3, 34.1, 33.0, 33.1, 30.8, 29.5],
        ),
        Series::from_values(
            "Recettes publiques (% PIB)",
            &[23.8, 27.7, 25.8, 28.7, 28.8, 28.8, 27.0, 26.3],
        ),
        Series::from_values(
            "Déficit public (% PIB)",
            &[-3.6, -7.1, -5.5, -5.4, -4.3, -4.4, -3.8, -3.3],
        ),
        Series::from_values(
            "Dette publique (% PIB)",
            &[60.3, 72.2, 69.4, 71.5, 69.5, 70.0, 66.6, 67.2],
        ),
        // Balance des paiements
        Series::from_values(
            "Compte courant (% PIB)",
            &[-3.4, -1.2, -2.3, -3.8, -0.6, -1.5, -2.8, -2.8],
        ),
        Series::from_values("IDE net (% PIB)", &[0.6, 0.8, 1.1, 1.2, 0.2, 1.0, 1.1, 1.2]),
        Series::from_values(
            "Réserves de change (mois d'import)",
            &[6.9, 7.1, 5.3, 5.4, 5.5, 5.3, 5.4, 5.6],
        ),
        // Macro
        Series::from_values(
            "PIB nominal (Md$)",
            &[1240.0, 1152.0, 1277.0, 1331.0, 1463.0, 1529.0, 1653.0, 1732.0],
        ),
    ];

    Dataset::new(YEARS.to_vec(), series)
}

/// Chart grouping, in page order.
pub fn morocco_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Économie Réelle",
            &["PIB réel", "PIB agricole", "PIB non agricole", "Industrie", "Services"],
        ),
        Category::new(
            "Demande",
            &["Consommation privée", "Consommation publique", "Investissement fixe"],
        ),
        Category::new("Commerce Extérieur", &["Exportations", "Importations"]),
        Category::new(
            "Marché du Travail & Prix",
            &["Taux de chômage (OIT)", "Inflation (IPC)"],
        ),
        Category::new(
            "Finances Publiques",
            &[
                "Dépenses publiques (% PIB)",
                "Recettes publiques (% PIB)",
                "Déficit public (% PIB)",
                "Dette publique (% PIB)",
            ],
        ),
        Category::new(
            "Balance des Paiements",
            &[
                "Compte courant (% PIB)",
                "IDE net (% PIB)",
                "Réserves de change (mois d'import)",
            ],
        ),
        Category::new("Indicateurs Macro", &["PIB nominal (Md$)"]),
    ]
}
