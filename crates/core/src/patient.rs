//! Patient demographics and the header banner summary.

use chrono::{Datelike, NaiveDate};
use edtrack_types::Mrn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrative sex as carried on the banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl Sex {
    /// Single-letter banner abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
            Sex::Other => "X",
        }
    }
}

/// Resuscitation status shown on the banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeStatus {
    FullCode,
    Dnr,
    DnrDni,
}

impl CodeStatus {
    pub fn label(self) -> &'static str {
        match self {
            CodeStatus::FullCode => "Full Code",
            CodeStatus::Dnr => "DNR",
            CodeStatus::DnrDni => "DNR/DNI",
        }
    }
}

/// Where the patient currently is on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub unit: String,
    pub room: String,
    pub bed: Option<String>,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.bed {
            Some(bed) => write!(f, "{} {} ({})", self.unit, self.room, bed),
            None => write!(f, "{} {}", self.unit, self.room),
        }
    }
}

/// Patient demographics for one tracked patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Record identifier.
    pub id: Uuid,
    /// Medical record number.
    pub mrn: Mrn,
    /// Family name (surname).
    pub family: String,
    /// Given names, first name first.
    pub given: Vec<String>,
    /// Date of birth.
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub location: Location,
    /// Attending clinician name.
    pub attending: String,
    pub code_status: CodeStatus,
}

impl Patient {
    /// `"FAMILY, Given"` display form used across the board.
    pub fn full_name(&self) -> String {
        let given = self.given.join(" ");
        if given.is_empty() {
            self.family.to_uppercase()
        } else {
            format!("{}, {}", self.family.to_uppercase(), given)
        }
    }

    /// Calendar-accurate age on the given date.
    ///
    /// A birthday later in the year has not happened yet on `on`, so the
    /// year difference is reduced by one in that case. Dates before birth
    /// clamp to zero.
    pub fn age_on(&self, on: NaiveDate) -> u32 {
        let mut age = on.year() - self.birth_date.year();
        if (on.month(), on.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }

    /// The one-line header banner summary.
    ///
    /// Example: `CHEN, Riley · 54F · MRN A4431908 · ED Bay 3 · Dr. Okafor · Full Code`
    pub fn banner_line(&self, today: NaiveDate) -> String {
        format!(
            "{} · {}{} · MRN {} · {} · {} · {}",
            self.full_name(),
            self.age_on(today),
            self.sex.abbrev(),
            self.mrn,
            self.location,
            self.attending,
            self.code_status.label()
        )
    }
}
