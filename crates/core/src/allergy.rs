//! Allergy records and the banner allergy summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Documented reaction severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AllergySeverity {
    Mild,
    Moderate,
    Severe,
}

impl AllergySeverity {
    pub fn label(self) -> &'static str {
        match self {
            AllergySeverity::Mild => "Mild",
            AllergySeverity::Moderate => "Moderate",
            AllergySeverity::Severe => "Severe",
        }
    }
}

/// One documented allergy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergy {
    /// Allergen (for example "Penicillin").
    pub substance: String,
    /// Documented reaction (for example "Rash").
    pub reaction: String,
    pub severity: AllergySeverity,
    /// When the allergy was first documented.
    pub noted_on: NaiveDate,
}

/// One-line allergy summary for the header banner.
///
/// An empty list reads `"NKDA"` (no known drug allergies). Otherwise the
/// substances are comma-joined, with the worst documented severity
/// appended, for example `"Penicillin, Latex (worst: Severe)"`.
pub fn allergy_summary(allergies: &[Allergy]) -> String {
    if allergies.is_empty() {
        return "NKDA".to_string();
    }

    let substances: Vec<&str> = allergies.iter().map(|a| a.substance.as_str()).collect();
    let worst = allergies
        .iter()
        .map(|a| a.severity)
        .max()
        .unwrap_or(AllergySeverity::Mild);

    format!("{} (worst: {})", substances.join(", "), worst.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allergy(substance: &str, severity: AllergySeverity) -> Allergy {
        Allergy {
            substance: substance.into(),
            reaction: "Rash".into(),
            severity,
            noted_on: NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date"),
        }
    }

    #[test]
    fn empty_list_reads_nkda() {
        assert_eq!(allergy_summary(&[]), "NKDA");
    }

    #[test]
    fn summary_joins_substances_and_flags_worst_severity() {
        let list = vec![
            allergy("Penicillin", AllergySeverity::Moderate),
            allergy("Latex", AllergySeverity::Severe),
            allergy("Pollen", AllergySeverity::Mild),
        ];
        assert_eq!(
            allergy_summary(&list),
            "Penicillin, Latex, Pollen (worst: Severe)"
        );
    }
}
