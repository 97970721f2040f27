//! The per-patient chart aggregate and JSON export.

use crate::allergy::Allergy;
use crate::labs::LabPanel;
use crate::patient::Patient;
use crate::timeline::TimelineEvent;
use crate::vitals::VitalSigns;
use crate::{TrackerError, TrackerResult};
use chrono::{DateTime, Utc};
use edtrack_notes::ChartNote;
use serde::Serialize;

/// Everything the board tracks for one patient.
#[derive(Clone, Debug)]
pub struct PatientChart {
    pub patient: Patient,
    pub admitted_at: DateTime<Utc>,
    pub allergies: Vec<Allergy>,
    /// Vital-sign observations, unordered; views sort as needed.
    pub vitals: Vec<VitalSigns>,
    pub labs: Vec<LabPanel>,
    pub notes: Vec<ChartNote>,
    /// Events not derivable from the chart itself (medications given,
    /// transfers, discharge).
    pub events: Vec<TimelineEvent>,
}

/// Chart shape written by [`export_json`]. Notes export in their Markdown
/// wire form rather than as structured fields.
#[derive(Serialize)]
struct ChartExportWire<'a> {
    patient: &'a Patient,
    #[serde(rename = "admittedAt")]
    admitted_at: String,
    allergies: &'a [Allergy],
    vitals: &'a [VitalSigns],
    labs: &'a [LabPanel],
    notes: Vec<String>,
}

/// Render a chart as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`TrackerError::Note`] if a note fails to render, or
/// [`TrackerError::Serialization`] if JSON serialisation fails.
pub fn export_json(chart: &PatientChart) -> TrackerResult<String> {
    let notes = chart
        .notes
        .iter()
        .map(edtrack_notes::write_markdown)
        .collect::<Result<Vec<_>, _>>()?;

    let wire = ChartExportWire {
        patient: &chart.patient,
        admitted_at: chart.admitted_at.to_rfc3339(),
        allergies: &chart.allergies,
        vitals: &chart.vitals,
        labs: &chart.labs,
        notes,
    };

    serde_json::to_string_pretty(&wire).map_err(TrackerError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn exports_every_chart_section() {
        let census = mock::demo_census().expect("demo census");
        let chart = census
            .find_by_mrn("A4431908")
            .expect("demo patient on the board");

        let json = export_json(chart).expect("export chart");
        assert!(json.contains("\"mrn\": \"A4431908\""));
        assert!(json.contains("admittedAt"));
        assert!(json.contains("heart_rate"));
        assert!(json.contains("Penicillin"));
        // Notes embed as Markdown strings with front matter.
        assert!(json.contains("---\\n"));
    }
}
