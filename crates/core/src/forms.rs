//! Clinical-forms catalog with search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clinical form available from the forms browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClinicalForm {
    pub id: Uuid,
    pub name: String,
    /// Grouping shown in the browser (for example "Nursing", "Consent").
    pub category: String,
    pub revised_on: NaiveDate,
}

/// The department's forms catalog.
///
/// The catalog is immutable after construction; forms are held sorted by
/// name so listing and search results come back in browser order.
#[derive(Clone, Debug, Default)]
pub struct FormCatalog {
    forms: Vec<ClinicalForm>,
}

impl FormCatalog {
    pub fn new(mut forms: Vec<ClinicalForm>) -> Self {
        forms.sort_by(|a, b| a.name.cmp(&b.name));
        Self { forms }
    }

    /// All forms, sorted by name.
    pub fn all(&self) -> &[ClinicalForm] {
        &self.forms
    }

    /// Case-insensitive substring search over form name and category.
    ///
    /// A blank or whitespace-only query returns the full catalog.
    pub fn search(&self, query: &str) -> Vec<&ClinicalForm> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.forms.iter().collect();
        }
        self.forms
            .iter()
            .filter(|form| {
                form.name.to_lowercase().contains(&needle)
                    || form.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
