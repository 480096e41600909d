use std::fmt;

// ---------------------------------------------------------------------------
// Display unit of an indicator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Percent,
    BillionsUsd,
    Months,
}

impl Unit {
    /// Label shown on the y axis.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::BillionsUsd => "Milliards USD",
            Unit::Months => "Mois",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Name-based rules
// ---------------------------------------------------------------------------

/// A substring of the indicator name that selects a unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitRule {
    pub marker: &'static str,
    pub unit: Unit,
}

/// Evaluated top to bottom; the first marker found in the name wins.
/// Matching is case-sensitive, so "Importations" stays a percentage.
pub const UNIT_RULES: [UnitRule; 2] = [
    UnitRule {
        marker: "Md$",
        unit: Unit::BillionsUsd,
    },
    UnitRule {
        marker: "import",
        unit: Unit::Months,
    },
];

pub const FALLBACK_UNIT: Unit = Unit::Percent;

/// Pick the display unit of an indicator from its name.
pub fn infer_unit(name: &str) -> Unit {
    UNIT_RULES
        .iter()
        .find(|rule| name.contains(rule.marker))
        .map_or(FALLBACK_UNIT, |rule| rule.unit)
}
