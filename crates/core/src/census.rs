//! The department census: who is on the board, and the patient switcher.

use crate::chart::PatientChart;
use crate::patient::Patient;
use crate::{TrackerError, TrackerResult};
use edtrack_types::Mrn;

/// The charts of every patient currently on the board.
///
/// Charts are held sorted by patient family name (then given name), which
/// is the order the switcher lists them in.
#[derive(Clone, Debug, Default)]
pub struct Census {
    charts: Vec<PatientChart>,
}

impl Census {
    pub fn new(mut charts: Vec<PatientChart>) -> Self {
        charts.sort_by(|a, b| {
            (a.patient.family.as_str(), &a.patient.given)
                .cmp(&(b.patient.family.as_str(), &b.patient.given))
        });
        Self { charts }
    }

    pub fn charts(&self) -> &[PatientChart] {
        &self.charts
    }

    /// Patients in switcher order.
    pub fn patients(&self) -> Vec<&Patient> {
        self.charts.iter().map(|c| &c.patient).collect()
    }

    /// Look up a chart by MRN. The input is normalised the same way MRNs
    /// are, so lookup is effectively case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Text`] for a malformed MRN and
    /// [`TrackerError::UnknownPatient`] when no chart matches.
    pub fn find_by_mrn(&self, mrn: &str) -> TrackerResult<&PatientChart> {
        let mrn = Mrn::parse(mrn)?;
        self.charts
            .iter()
            .find(|c| c.patient.mrn == mrn)
            .ok_or_else(|| TrackerError::UnknownPatient(mrn.to_string()))
    }

    /// Patient-switcher search: case-insensitive substring match over the
    /// patient's full name and MRN. A blank query returns everyone.
    pub fn search(&self, query: &str) -> Vec<&Patient> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.patients();
        }
        self.charts
            .iter()
            .map(|c| &c.patient)
            .filter(|p| {
                p.full_name().to_lowercase().contains(&needle)
                    || p.mrn.as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn patients_are_listed_by_family_name() {
        let census = mock::demo_census().expect("demo census");
        let families: Vec<&str> = census
            .patients()
            .iter()
            .map(|p| p.family.as_str())
            .collect();
        let mut sorted = families.clone();
        sorted.sort();
        assert_eq!(families, sorted);
    }

    #[test]
    fn finds_chart_by_mrn_case_insensitively() {
        let census = mock::demo_census().expect("demo census");
        let chart = census.find_by_mrn("a4431908").expect("lowercase lookup");
        assert_eq!(chart.patient.family, "Chen");
    }

    #[test]
    fn unknown_mrn_is_an_error() {
        let census = mock::demo_census().expect("demo census");
        let err = census.find_by_mrn("ZZZZ9999").expect_err("not on board");
        assert!(matches!(err, TrackerError::UnknownPatient(_)));
    }

    #[test]
    fn malformed_mrn_is_rejected_before_lookup() {
        let census = mock::demo_census().expect("demo census");
        let err = census.find_by_mrn("a-1").expect_err("malformed mrn");
        assert!(matches!(err, TrackerError::Text(_)));
    }

    #[test]
    fn search_matches_name_and_mrn() {
        let census = mock::demo_census().expect("demo census");
        let by_name = census.search("chen");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].family, "Chen");

        let by_mrn = census.search("b772");
        assert_eq!(by_mrn.len(), 1);
        assert_eq!(by_mrn[0].family, "Orozco");
    }

    #[test]
    fn blank_search_returns_everyone() {
        let census = mock::demo_census().expect("demo census");
        assert_eq!(census.search("").len(), census.charts().len());
    }
}
