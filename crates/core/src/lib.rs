//! # edtrack core
//!
//! Domain model and services for the department tracking board:
//! - Patient charts (header banner, allergies, vitals, labs, notes)
//! - Census with search (the patient switcher)
//! - Timeline assembly and day grouping
//! - Clinical-forms catalog with search
//! - In-memory user directory for mock login
//!
//! All data is in-memory; the mock dataset in [`mock`] stands in for a
//! real department feed. **No display concerns**: rendering belongs to
//! the CLI (or whatever surface consumes these types).

pub mod allergy;
pub mod census;
pub mod chart;
pub mod config;
pub mod error;
pub mod forms;
pub mod labs;
pub mod mock;
pub mod patient;
pub mod timeline;
pub mod users;
pub mod vitals;

pub use error::{TrackerError, TrackerResult};
