//! Vital-sign observations: table rows, classification, and trend series.

use chrono::{DateTime, Utc};
use edtrack_ranges::{display_class, format_range, lookup, Catalog, DisplayClass};
use serde::{Deserialize, Serialize};

/// One timestamped set of bedside vital signs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub recorded_at: DateTime<Utc>,
    pub systolic: f64,
    pub diastolic: f64,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    pub temperature: f64,
    pub oxygen_saturation: f64,
}

/// A measurement joined with its display classification and range string.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassifiedMeasurement {
    /// Catalog key (for example `heartRate`).
    pub key: &'static str,
    /// Human-readable measurement name.
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub class: DisplayClass,
    /// Formatted reference range, empty if the key is unknown.
    pub range: String,
}

impl VitalSigns {
    /// Measurements in display order, keyed by vitals-catalog keys.
    pub fn measurements(&self) -> [(&'static str, f64); 6] {
        [
            ("systolic", self.systolic),
            ("diastolic", self.diastolic),
            ("heartRate", self.heart_rate),
            ("respiratoryRate", self.respiratory_rate),
            ("temperature", self.temperature),
            ("oxygenSaturation", self.oxygen_saturation),
        ]
    }

    /// Every measurement joined with its vitals-catalog classification.
    pub fn classified(&self) -> Vec<ClassifiedMeasurement> {
        self.measurements()
            .into_iter()
            .map(|(key, value)| {
                let (label, unit) = match lookup(Catalog::Vitals, key) {
                    Some(range) => (range.name.to_string(), range.unit.to_string()),
                    None => (key.to_string(), String::new()),
                };
                ClassifiedMeasurement {
                    key,
                    label,
                    value,
                    unit,
                    class: display_class(Catalog::Vitals, key, value),
                    range: format_range(Catalog::Vitals, key),
                }
            })
            .collect()
    }

    /// Count of measurements outside their reference range.
    pub fn abnormal_count(&self) -> usize {
        self.measurements()
            .into_iter()
            .filter(|(key, value)| edtrack_ranges::is_abnormal(Catalog::Vitals, key, *value))
            .count()
    }
}

/// Table rows for the vitals view: newest observation first.
pub fn vitals_table(entries: &[VitalSigns]) -> Vec<&VitalSigns> {
    let mut rows: Vec<&VitalSigns> = entries.iter().collect();
    rows.sort_by_key(|v| std::cmp::Reverse(v.recorded_at));
    rows
}

/// Trend series for one measurement, oldest first (chart-ready).
///
/// Unknown keys produce an empty series.
pub fn trend(entries: &[VitalSigns], key: &str) -> Vec<(DateTime<Utc>, f64)> {
    let mut series: Vec<(DateTime<Utc>, f64)> = entries
        .iter()
        .filter_map(|entry| {
            entry
                .measurements()
                .into_iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (entry.recorded_at, value))
        })
        .collect();
    series.sort_by_key(|(at, _)| *at);
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn obs(hour: u32, heart_rate: f64) -> VitalSigns {
        VitalSigns {
            recorded_at: at(hour),
            systolic: 120.0,
            diastolic: 76.0,
            heart_rate,
            respiratory_rate: 16.0,
            temperature: 36.9,
            oxygen_saturation: 98.0,
        }
    }

    #[test]
    fn table_orders_newest_first() {
        let entries = vec![obs(8, 72.0), obs(12, 80.0), obs(10, 76.0)];
        let rows = vitals_table(&entries);
        let hours: Vec<f64> = rows.iter().map(|v| v.heart_rate).collect();
        assert_eq!(hours, vec![80.0, 76.0, 72.0]);
    }

    #[test]
    fn trend_orders_oldest_first() {
        let entries = vec![obs(12, 80.0), obs(8, 72.0), obs(10, 76.0)];
        let series = trend(&entries, "heartRate");
        let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![72.0, 76.0, 80.0]);
    }

    #[test]
    fn trend_for_unknown_key_is_empty() {
        let entries = vec![obs(8, 72.0)];
        assert!(trend(&entries, "painScore").is_empty());
    }

    #[test]
    fn classification_flows_through_from_the_catalog() {
        let entry = obs(8, 115.0);
        let classified = entry.classified();
        let hr = classified
            .iter()
            .find(|m| m.key == "heartRate")
            .expect("heart rate present");
        assert_eq!(hr.class, DisplayClass::Critical);
        assert_eq!(hr.range, "60-100 bpm");
        assert_eq!(hr.label, "Heart Rate");

        let spo2 = classified
            .iter()
            .find(|m| m.key == "oxygenSaturation")
            .expect("spo2 present");
        assert_eq!(spo2.class, DisplayClass::Normal);
    }

    #[test]
    fn abnormal_count_matches_out_of_range_fields() {
        let mut entry = obs(8, 115.0);
        entry.temperature = 38.4;
        assert_eq!(entry.abnormal_count(), 2);
        assert_eq!(obs(9, 72.0).abnormal_count(), 0);
    }
}
