//! Lab panels and result flagging.

use chrono::{DateTime, Utc};
use edtrack_ranges::{display_class, format_range, lookup, Catalog, DisplayClass};
use serde::{Deserialize, Serialize};

/// One resulted analyte within a panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    /// Labs-catalog key (for example `potassium`).
    pub key: String,
    pub value: f64,
}

/// A resulted lab panel (for example "CBC", "BMP").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabPanel {
    pub name: String,
    pub collected_at: DateTime<Utc>,
    pub results: Vec<LabResult>,
}

/// A lab result joined with its classification and range string.
///
/// Analytes the labs catalog does not define flag as normal with an empty
/// range; the panel still displays them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlaggedResult {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub class: DisplayClass,
    pub range: String,
}

impl LabPanel {
    /// Every result joined with its labs-catalog classification.
    pub fn flagged(&self) -> Vec<FlaggedResult> {
        self.results
            .iter()
            .map(|result| {
                let (label, unit) = match lookup(Catalog::Labs, &result.key) {
                    Some(range) => (range.name.to_string(), range.unit.to_string()),
                    None => (result.key.clone(), String::new()),
                };
                FlaggedResult {
                    key: result.key.clone(),
                    label,
                    value: result.value,
                    unit,
                    class: display_class(Catalog::Labs, &result.key, result.value),
                    range: format_range(Catalog::Labs, &result.key),
                }
            })
            .collect()
    }

    /// Count of results outside their reference range.
    pub fn abnormal_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| edtrack_ranges::is_abnormal(Catalog::Labs, &r.key, r.value))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn panel() -> LabPanel {
        LabPanel {
            name: "BMP".into(),
            collected_at: Utc
                .with_ymd_and_hms(2026, 3, 14, 7, 45, 0)
                .single()
                .expect("valid timestamp"),
            results: vec![
                LabResult { key: "sodium".into(), value: 138.0 },
                LabResult { key: "potassium".into(), value: 6.1 },
                LabResult { key: "glucose".into(), value: 104.0 },
                LabResult { key: "lactate".into(), value: 3.2 },
            ],
        }
    }

    #[test]
    fn flags_results_against_the_labs_catalog() {
        let flagged = panel().flagged();

        let sodium = &flagged[0];
        assert_eq!(sodium.class, DisplayClass::Normal);
        assert_eq!(sodium.label, "Sodium");
        assert_eq!(sodium.range, "135-145 mEq/L");

        // potassium 6.1 >= 5.0 * 1.15 = 5.75
        let potassium = &flagged[1];
        assert_eq!(potassium.class, DisplayClass::Critical);

        let glucose = &flagged[2];
        assert_eq!(glucose.class, DisplayClass::Warning);
    }

    #[test]
    fn unknown_analytes_pass_through_unflagged() {
        let flagged = panel().flagged();
        let lactate = &flagged[3];
        assert_eq!(lactate.class, DisplayClass::Normal);
        assert_eq!(lactate.label, "lactate");
        assert_eq!(lactate.range, "");
        assert_eq!(lactate.unit, "");
    }

    #[test]
    fn abnormal_count_ignores_unknown_analytes() {
        assert_eq!(panel().abnormal_count(), 2);
    }
}
