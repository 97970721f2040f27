//! Hardcoded demo data for the tracking board.
//!
//! Everything in this module is fictional and stands in for a real
//! department feed. No real patient identifiers are present.

use crate::allergy::{Allergy, AllergySeverity};
use crate::census::Census;
use crate::chart::PatientChart;
use crate::forms::{ClinicalForm, FormCatalog};
use crate::labs::{LabPanel, LabResult};
use crate::patient::{CodeStatus, Location, Patient, Sex};
use crate::timeline::{EventCategory, TimelineEvent};
use crate::users::{Role, User, UserDirectory};
use crate::vitals::VitalSigns;
use crate::TrackerResult;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use edtrack_notes::{ChartNote, NoteType};
use edtrack_types::{Mrn, NonEmptyText};
use uuid::Uuid;

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn day(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap_or(NaiveDate::MIN)
}

fn chen_chart() -> TrackerResult<PatientChart> {
    let patient = Patient {
        id: Uuid::new_v4(),
        mrn: Mrn::parse("A4431908")?,
        family: "Chen".into(),
        given: vec!["Riley".into()],
        birth_date: day(1971, 6, 12),
        sex: Sex::Female,
        location: Location { unit: "ED".into(), room: "Bay 3".into(), bed: None },
        attending: "Dr. Okafor".into(),
        code_status: CodeStatus::FullCode,
    };

    let vitals = vec![
        VitalSigns {
            recorded_at: ts(2026, 3, 14, 7, 0),
            systolic: 152.0,
            diastolic: 94.0,
            heart_rate: 112.0,
            respiratory_rate: 18.0,
            temperature: 38.3,
            oxygen_saturation: 97.0,
        },
        VitalSigns {
            recorded_at: ts(2026, 3, 14, 9, 0),
            systolic: 144.0,
            diastolic: 88.0,
            heart_rate: 101.0,
            respiratory_rate: 17.0,
            temperature: 37.8,
            oxygen_saturation: 98.0,
        },
        VitalSigns {
            recorded_at: ts(2026, 3, 14, 11, 0),
            systolic: 132.0,
            diastolic: 82.0,
            heart_rate: 88.0,
            respiratory_rate: 16.0,
            temperature: 37.1,
            oxygen_saturation: 98.0,
        },
    ];

    let labs = vec![
        LabPanel {
            name: "BMP".into(),
            collected_at: ts(2026, 3, 14, 7, 45),
            results: vec![
                LabResult { key: "sodium".into(), value: 138.0 },
                LabResult { key: "potassium".into(), value: 6.1 },
                LabResult { key: "bun".into(), value: 18.0 },
                LabResult { key: "creatinine".into(), value: 1.0 },
                LabResult { key: "glucose".into(), value: 104.0 },
            ],
        },
        LabPanel {
            name: "CBC".into(),
            collected_at: ts(2026, 3, 14, 7, 45),
            results: vec![
                LabResult { key: "wbc".into(), value: 13.2 },
                LabResult { key: "hgb".into(), value: 12.9 },
                LabResult { key: "hct".into(), value: 39.0 },
                LabResult { key: "plt".into(), value: 210.0 },
            ],
        },
    ];

    let notes = vec![
        ChartNote {
            title: Some("ED course".into()),
            author: NonEmptyText::new("Dr. A. Okafor")?,
            role: Some("Attending".into()),
            note_type: NoteType::Progress,
            recorded_at: ts(2026, 3, 14, 9, 30),
            tags: vec!["chest-pain".into()],
            body: "Pain resolved after nitroglycerin. Potassium resulted high; \
                   ECG without peaked T waves. Repeat BMP ordered.\n"
                .into(),
        },
        ChartNote {
            title: None,
            author: NonEmptyText::new("M. Reyes, RN")?,
            role: Some("RN".into()),
            note_type: NoteType::Nursing,
            recorded_at: ts(2026, 3, 14, 10, 15),
            tags: vec![],
            body: "Resting comfortably, tolerating oral fluids. Repeat vitals due 11:00.\n".into(),
        },
    ];

    let events = vec![TimelineEvent {
        id: Uuid::new_v4(),
        occurred_at: ts(2026, 3, 14, 7, 20),
        category: EventCategory::Medication,
        summary: "Aspirin 324 mg PO given".into(),
        detail: None,
    }];

    Ok(PatientChart {
        patient,
        admitted_at: ts(2026, 3, 14, 6, 50),
        allergies: vec![Allergy {
            substance: "Penicillin".into(),
            reaction: "Rash".into(),
            severity: AllergySeverity::Moderate,
            noted_on: day(2019, 4, 2),
        }],
        vitals,
        labs,
        notes,
        events,
    })
}

fn orozco_chart() -> TrackerResult<PatientChart> {
    let patient = Patient {
        id: Uuid::new_v4(),
        mrn: Mrn::parse("B7720115")?,
        family: "Orozco".into(),
        given: vec!["Miguel".into()],
        birth_date: day(1988, 11, 3),
        sex: Sex::Male,
        location: Location { unit: "ED".into(), room: "Obs 2".into(), bed: Some("A".into()) },
        attending: "Dr. Virtanen".into(),
        code_status: CodeStatus::FullCode,
    };

    let vitals = vec![
        VitalSigns {
            recorded_at: ts(2026, 3, 13, 22, 30),
            systolic: 124.0,
            diastolic: 78.0,
            heart_rate: 84.0,
            respiratory_rate: 14.0,
            temperature: 36.8,
            oxygen_saturation: 99.0,
        },
        VitalSigns {
            recorded_at: ts(2026, 3, 14, 6, 30),
            systolic: 118.0,
            diastolic: 74.0,
            heart_rate: 76.0,
            respiratory_rate: 14.0,
            temperature: 36.7,
            oxygen_saturation: 99.0,
        },
    ];

    let labs = vec![LabPanel {
        name: "BMP".into(),
        collected_at: ts(2026, 3, 13, 23, 5),
        results: vec![
            LabResult { key: "sodium".into(), value: 141.0 },
            LabResult { key: "potassium".into(), value: 4.2 },
            LabResult { key: "glucose".into(), value: 182.0 },
        ],
    }];

    let notes = vec![ChartNote {
        title: Some("Observation admission".into()),
        author: NonEmptyText::new("Dr. L. Virtanen")?,
        role: Some("Attending".into()),
        note_type: NoteType::Progress,
        recorded_at: ts(2026, 3, 13, 23, 40),
        tags: vec!["hyperglycemia".into()],
        body: "Marked hyperglycemia without ketosis. Started on fluids, \
               glucose to be rechecked in the morning.\n"
            .into(),
    }];

    let events = vec![TimelineEvent {
        id: Uuid::new_v4(),
        occurred_at: ts(2026, 3, 14, 8, 0),
        category: EventCategory::Transfer,
        summary: "Transferred to Obs 2".into(),
        detail: None,
    }];

    Ok(PatientChart {
        patient,
        admitted_at: ts(2026, 3, 13, 22, 10),
        allergies: vec![],
        vitals,
        labs,
        notes,
        events,
    })
}

fn abara_chart() -> TrackerResult<PatientChart> {
    let patient = Patient {
        id: Uuid::new_v4(),
        mrn: Mrn::parse("C3345566")?,
        family: "Abara".into(),
        given: vec!["Nneka".into()],
        birth_date: day(1954, 2, 27),
        sex: Sex::Female,
        location: Location { unit: "ED".into(), room: "Bay 7".into(), bed: None },
        attending: "Dr. Okafor".into(),
        code_status: CodeStatus::Dnr,
    };

    let vitals = vec![VitalSigns {
        recorded_at: ts(2026, 3, 14, 5, 30),
        systolic: 136.0,
        diastolic: 84.0,
        heart_rate: 96.0,
        respiratory_rate: 22.0,
        temperature: 37.2,
        oxygen_saturation: 91.0,
    }];

    let notes = vec![ChartNote {
        title: Some("Pulmonology consult".into()),
        author: NonEmptyText::new("Dr. S. Haddad")?,
        role: Some("Consultant".into()),
        note_type: NoteType::Consult,
        recorded_at: ts(2026, 3, 14, 8, 45),
        tags: vec!["copd".into()],
        body: "Likely COPD exacerbation. Recommend nebulised bronchodilators \
               and reassessment of oxygen requirement this afternoon.\n"
            .into(),
    }];

    let events = vec![TimelineEvent {
        id: Uuid::new_v4(),
        occurred_at: ts(2026, 3, 14, 5, 50),
        category: EventCategory::Medication,
        summary: "Oxygen 2 L/min via nasal cannula started".into(),
        detail: None,
    }];

    Ok(PatientChart {
        patient,
        admitted_at: ts(2026, 3, 14, 5, 5),
        allergies: vec![
            Allergy {
                substance: "Latex".into(),
                reaction: "Hives".into(),
                severity: AllergySeverity::Severe,
                noted_on: day(2011, 8, 19),
            },
            Allergy {
                substance: "Ibuprofen".into(),
                reaction: "Dyspepsia".into(),
                severity: AllergySeverity::Mild,
                noted_on: day(2021, 1, 30),
            },
        ],
        vitals,
        labs: vec![],
        notes,
        events,
    })
}

/// The demo census: three fictional patients with populated charts.
pub fn demo_census() -> TrackerResult<Census> {
    Ok(Census::new(vec![
        chen_chart()?,
        orozco_chart()?,
        abara_chart()?,
    ]))
}

/// The demo forms catalog backing the forms browser.
pub fn demo_forms() -> FormCatalog {
    let form = |name: &str, category: &str, revised: NaiveDate| ClinicalForm {
        id: Uuid::new_v4(),
        name: name.into(),
        category: category.into(),
        revised_on: revised,
    };

    FormCatalog::new(vec![
        form("Sepsis Screening", "Nursing", day(2025, 11, 2)),
        form("Fall Risk Assessment", "Nursing", day(2025, 6, 18)),
        form("Blood Transfusion Consent", "Consent", day(2024, 9, 30)),
        form("Procedural Sedation Consent", "Consent", day(2025, 2, 11)),
        form("Discharge Instructions", "Discharge", day(2026, 1, 8)),
        form("Against Medical Advice", "Discharge", day(2023, 12, 4)),
    ])
}

/// The demo user list backing the login screen.
pub fn demo_users() -> UserDirectory {
    UserDirectory::new(vec![
        User::new("aokafor", "Dr. A. Okafor", Role::Physician, "demo1234"),
        User::new("mreyes", "M. Reyes, RN", Role::Nurse, "demo5678"),
        User::new("dwhite", "D. White", Role::Clerk, "demo9012"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use edtrack_ranges::{lookup, Catalog};

    #[test]
    fn demo_census_has_three_patients() {
        let census = demo_census().expect("demo census");
        assert_eq!(census.charts().len(), 3);
    }

    #[test]
    fn every_demo_lab_key_except_extras_resolves_in_the_catalog() {
        let census = demo_census().expect("demo census");
        for chart in census.charts() {
            for panel in &chart.labs {
                for result in &panel.results {
                    assert!(
                        lookup(Catalog::Labs, &result.key).is_some(),
                        "unknown demo analyte {}",
                        result.key
                    );
                }
            }
        }
    }

    #[test]
    fn demo_notes_round_trip_through_the_wire_format() {
        let census = demo_census().expect("demo census");
        for chart in census.charts() {
            for note in &chart.notes {
                let rendered = edtrack_notes::write_markdown(note).expect("render note");
                let reparsed = edtrack_notes::read_markdown(&rendered).expect("reparse note");
                assert_eq!(note, &reparsed);
            }
        }
    }

    #[test]
    fn demo_users_can_log_in() {
        let directory = demo_users();
        directory
            .authenticate("aokafor", "demo1234")
            .expect("demo physician");
        directory
            .authenticate("dwhite", "demo9012")
            .expect("demo clerk");
    }
}
