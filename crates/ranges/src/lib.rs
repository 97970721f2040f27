//! Reference range evaluation for vital signs and lab values.
//!
//! This crate classifies a measured numeric value against the clinically
//! accepted normal interval for that measurement. It owns two constant
//! catalogs (vital signs and lab values), selected by [`Catalog`], and
//! exposes three pure functions over them:
//!
//! - [`is_abnormal`]: is the value outside its reference range?
//! - [`display_class`]: normal / warning / critical severity for display.
//! - [`format_range`]: the human-readable `"min-max unit"` string.
//!
//! Unknown measurement keys never fail: they classify as normal and format
//! as an empty string. Callers must not assume a range exists for an
//! arbitrary key.

use serde::{Deserialize, Serialize};

/// The clinically accepted normal interval for one measurement.
///
/// Catalog entries are process-wide constants; `min <= max` holds for
/// every entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReferenceRange {
    /// Human-readable measurement name (for example "Heart Rate").
    pub name: &'static str,
    /// Lower bound of the normal interval.
    pub min: f64,
    /// Upper bound of the normal interval.
    pub max: f64,
    /// Unit the bounds are expressed in.
    pub unit: &'static str,
}

/// Selects which catalog a measurement key is resolved against.
///
/// Vital-sign and lab-value keys live in disjoint catalogs; a lab key
/// looked up in the vitals catalog is simply unknown (and therefore
/// classifies as normal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Catalog {
    /// Bedside vital signs (blood pressure, heart rate, ...).
    Vitals,
    /// Laboratory analytes (CBC, BMP, ...).
    Labs,
}

/// Display severity for a classified measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayClass {
    /// Within the reference range (or the key is unknown).
    Normal,
    /// Outside the reference range but inside the critical band.
    Warning,
    /// At or beyond the critical band.
    Critical,
}

impl DisplayClass {
    /// Style-tag string as used by display surfaces.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayClass::Normal => "normal",
            DisplayClass::Warning => "warning",
            DisplayClass::Critical => "critical",
        }
    }
}

impl std::fmt::Display for DisplayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-to-range tables. Lookup is a linear scan; both catalogs are small
/// and fixed.
const VITAL_RANGES: &[(&str, ReferenceRange)] = &[
    (
        "systolic",
        ReferenceRange { name: "Systolic BP", min: 90.0, max: 140.0, unit: "mmHg" },
    ),
    (
        "diastolic",
        ReferenceRange { name: "Diastolic BP", min: 60.0, max: 90.0, unit: "mmHg" },
    ),
    (
        "heartRate",
        ReferenceRange { name: "Heart Rate", min: 60.0, max: 100.0, unit: "bpm" },
    ),
    (
        "respiratoryRate",
        ReferenceRange { name: "Respiratory Rate", min: 12.0, max: 20.0, unit: "breaths/min" },
    ),
    (
        "temperature",
        ReferenceRange { name: "Temperature", min: 36.5, max: 37.5, unit: "°C" },
    ),
    (
        "oxygenSaturation",
        ReferenceRange { name: "SpO2", min: 95.0, max: 100.0, unit: "%" },
    ),
];

const LAB_RANGES: &[(&str, ReferenceRange)] = &[
    (
        "wbc",
        ReferenceRange { name: "White Blood Cells", min: 4.5, max: 11.0, unit: "K/uL" },
    ),
    (
        "hgb",
        ReferenceRange { name: "Hemoglobin", min: 12.0, max: 17.5, unit: "g/dL" },
    ),
    (
        "hct",
        ReferenceRange { name: "Hematocrit", min: 36.0, max: 50.0, unit: "%" },
    ),
    (
        "plt",
        ReferenceRange { name: "Platelets", min: 150.0, max: 450.0, unit: "K/uL" },
    ),
    (
        "sodium",
        ReferenceRange { name: "Sodium", min: 135.0, max: 145.0, unit: "mEq/L" },
    ),
    (
        "potassium",
        ReferenceRange { name: "Potassium", min: 3.5, max: 5.0, unit: "mEq/L" },
    ),
    (
        "bun",
        ReferenceRange { name: "BUN", min: 7.0, max: 20.0, unit: "mg/dL" },
    ),
    (
        "creatinine",
        ReferenceRange { name: "Creatinine", min: 0.6, max: 1.2, unit: "mg/dL" },
    ),
    (
        "glucose",
        ReferenceRange { name: "Glucose", min: 70.0, max: 100.0, unit: "mg/dL" },
    ),
];

/// Looks up the reference range for `key` in the selected catalog.
///
/// Returns `None` for keys the catalog does not define. This is the only
/// lookup path; the classification functions below all treat `None` as
/// "not abnormal".
pub fn lookup(catalog: Catalog, key: &str) -> Option<&'static ReferenceRange> {
    let table = match catalog {
        Catalog::Vitals => VITAL_RANGES,
        Catalog::Labs => LAB_RANGES,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, range)| range)
}

/// Returns `true` iff `value` falls outside the reference range for `key`.
///
/// An unknown key is never flagged abnormal. That is a deliberate
/// fail-safe default, not an error path: display surfaces pass through
/// whatever measurement keys the chart carries.
pub fn is_abnormal(catalog: Catalog, key: &str, value: f64) -> bool {
    match lookup(catalog, key) {
        Some(range) => value < range.min || value > range.max,
        None => false,
    }
}

/// Classifies `value` into a display severity for `key`.
///
/// Abnormal values escalate to [`DisplayClass::Critical`] at 15% beyond
/// the violated bound; abnormal values inside that band are
/// [`DisplayClass::Warning`]. In-range values and unknown keys are
/// [`DisplayClass::Normal`].
///
/// The critical band is 15% of each bound, not of the interval width, so
/// a bound at zero collapses the band on that side. Inherited behaviour,
/// kept as-is.
pub fn display_class(catalog: Catalog, key: &str, value: f64) -> DisplayClass {
    let Some(range) = lookup(catalog, key) else {
        return DisplayClass::Normal;
    };
    if value >= range.min && value <= range.max {
        return DisplayClass::Normal;
    }

    let critical_low = range.min - 0.15 * range.min;
    let critical_high = range.max + 0.15 * range.max;
    if value <= critical_low || value >= critical_high {
        DisplayClass::Critical
    } else {
        DisplayClass::Warning
    }
}

/// Formats the reference range for `key` as `"min-max unit"`.
///
/// Returns an empty string for unknown keys.
pub fn format_range(catalog: Catalog, key: &str) -> String {
    match lookup(catalog, key) {
        Some(range) => format!("{}-{} {}", range.min, range.max, range.unit),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_has_ordered_bounds() {
        for (key, range) in VITAL_RANGES.iter().chain(LAB_RANGES.iter()) {
            assert!(range.min <= range.max, "bounds out of order for {key}");
        }
    }

    #[test]
    fn in_range_values_are_not_abnormal() {
        assert!(!is_abnormal(Catalog::Vitals, "heartRate", 60.0));
        assert!(!is_abnormal(Catalog::Vitals, "heartRate", 72.0));
        assert!(!is_abnormal(Catalog::Vitals, "heartRate", 100.0));
        assert!(!is_abnormal(Catalog::Labs, "glucose", 85.0));
    }

    #[test]
    fn out_of_range_values_are_abnormal() {
        assert!(is_abnormal(Catalog::Vitals, "heartRate", 101.0));
        assert!(is_abnormal(Catalog::Vitals, "heartRate", 59.0));
        assert!(is_abnormal(Catalog::Labs, "potassium", 5.1));
        assert!(is_abnormal(Catalog::Labs, "potassium", 3.4));
    }

    #[test]
    fn unknown_keys_are_benign() {
        assert!(!is_abnormal(Catalog::Vitals, "painScore", 999.0));
        assert_eq!(display_class(Catalog::Labs, "troponin", 50.0), DisplayClass::Normal);
        assert_eq!(format_range(Catalog::Vitals, "painScore"), "");
    }

    #[test]
    fn lab_keys_are_unknown_in_the_vitals_catalog() {
        assert!(lookup(Catalog::Vitals, "glucose").is_none());
        assert!(!is_abnormal(Catalog::Vitals, "glucose", 600.0));
    }

    #[test]
    fn display_class_escalates_at_the_critical_band() {
        // heartRate range 60-100: band edges at 51 and 115.
        assert_eq!(display_class(Catalog::Vitals, "heartRate", 100.0), DisplayClass::Normal);
        assert_eq!(display_class(Catalog::Vitals, "heartRate", 105.0), DisplayClass::Warning);
        assert_eq!(display_class(Catalog::Vitals, "heartRate", 115.0), DisplayClass::Critical);
        assert_eq!(display_class(Catalog::Vitals, "heartRate", 52.0), DisplayClass::Warning);
        assert_eq!(display_class(Catalog::Vitals, "heartRate", 51.0), DisplayClass::Critical);
        assert_eq!(display_class(Catalog::Vitals, "heartRate", 40.0), DisplayClass::Critical);
    }

    #[test]
    fn band_is_a_percentage_of_each_bound() {
        // glucose 70-100: critical at <= 59.5 and >= 115.
        assert_eq!(display_class(Catalog::Labs, "glucose", 59.5), DisplayClass::Critical);
        assert_eq!(display_class(Catalog::Labs, "glucose", 60.0), DisplayClass::Warning);
        assert_eq!(display_class(Catalog::Labs, "glucose", 114.9), DisplayClass::Warning);
        assert_eq!(display_class(Catalog::Labs, "glucose", 115.0), DisplayClass::Critical);
    }

    #[test]
    fn formats_known_ranges() {
        assert_eq!(format_range(Catalog::Labs, "glucose"), "70-100 mg/dL");
        assert_eq!(format_range(Catalog::Vitals, "heartRate"), "60-100 bpm");
        assert_eq!(format_range(Catalog::Vitals, "temperature"), "36.5-37.5 °C");
    }

    #[test]
    fn display_class_strings_match_style_tags() {
        assert_eq!(DisplayClass::Normal.as_str(), "normal");
        assert_eq!(DisplayClass::Warning.as_str(), "warning");
        assert_eq!(DisplayClass::Critical.as_str(), "critical");
    }
}
