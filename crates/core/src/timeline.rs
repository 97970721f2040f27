//! Timeline assembly and day grouping.
//!
//! The timeline view unifies everything that happened to a patient into a
//! single chronological stream: the admission, each vitals observation,
//! each resulted lab panel, each chart note, plus explicit events the
//! chart carries (medications, transfers, discharge). Events group by UTC
//! calendar day in tracking-board order: newest day first, newest event
//! first within a day.

use crate::chart::PatientChart;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of thing happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Admission,
    Vitals,
    Lab,
    Note,
    Medication,
    Transfer,
    Discharge,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Admission => "Admission",
            EventCategory::Vitals => "Vitals",
            EventCategory::Lab => "Lab",
            EventCategory::Note => "Note",
            EventCategory::Medication => "Medication",
            EventCategory::Transfer => "Transfer",
            EventCategory::Discharge => "Discharge",
        }
    }
}

/// A single event on the timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub category: EventCategory,
    /// One-line summary shown on the timeline row.
    pub summary: String,
    /// Optional second line.
    pub detail: Option<String>,
}

/// Events for one calendar day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineDay {
    pub date: NaiveDate,
    pub events: Vec<TimelineEvent>,
}

/// Derive the full event stream for a chart.
///
/// The result is unsorted; pass it to [`group_by_day`] for display order.
pub fn assemble(chart: &PatientChart) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    events.push(TimelineEvent {
        id: Uuid::new_v4(),
        occurred_at: chart.admitted_at,
        category: EventCategory::Admission,
        summary: format!("Admitted to {}", chart.patient.location.unit),
        detail: None,
    });

    for vitals in &chart.vitals {
        let abnormal = vitals.abnormal_count();
        events.push(TimelineEvent {
            id: Uuid::new_v4(),
            occurred_at: vitals.recorded_at,
            category: EventCategory::Vitals,
            summary: "Vitals recorded".to_string(),
            detail: (abnormal > 0).then(|| format!("{abnormal} abnormal")),
        });
    }

    for panel in &chart.labs {
        let abnormal = panel.abnormal_count();
        events.push(TimelineEvent {
            id: Uuid::new_v4(),
            occurred_at: panel.collected_at,
            category: EventCategory::Lab,
            summary: format!("{} resulted", panel.name),
            detail: (abnormal > 0).then(|| format!("{abnormal} abnormal")),
        });
    }

    for note in &chart.notes {
        events.push(TimelineEvent {
            id: Uuid::new_v4(),
            occurred_at: note.recorded_at,
            category: EventCategory::Note,
            summary: format!("{} note — {}", note.note_type.label(), note.author),
            detail: note.title.clone(),
        });
    }

    events.extend(chart.events.iter().cloned());
    events
}

/// Group events by UTC calendar day, newest day first and newest event
/// first within each day.
pub fn group_by_day(mut events: Vec<TimelineEvent>) -> Vec<TimelineDay> {
    events.sort_by_key(|e| std::cmp::Reverse(e.occurred_at));

    let mut days: Vec<TimelineDay> = Vec::new();
    for event in events {
        let date = event.occurred_at.date_naive();
        match days.last_mut() {
            Some(day) if day.date == date => day.events.push(event),
            _ => days.push(TimelineDay { date, events: vec![event] }),
        }
    }
    days
}
