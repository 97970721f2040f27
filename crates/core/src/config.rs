//! Tracker runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! services, rather than read from the environment during operation. This
//! keeps behaviour consistent across threads and test harnesses.

use crate::{TrackerError, TrackerResult};

/// Default department shown on the board when none is configured.
pub const DEFAULT_DEPARTMENT: &str = "Emergency Department";

/// Tracker configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    department_name: String,
}

impl TrackerConfig {
    /// Create a new `TrackerConfig`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the department name is
    /// empty or whitespace-only.
    pub fn new(department_name: impl Into<String>) -> TrackerResult<Self> {
        let department_name = department_name.into();
        if department_name.trim().is_empty() {
            return Err(TrackerError::InvalidInput(
                "department_name cannot be empty".into(),
            ));
        }
        Ok(Self { department_name })
    }

    pub fn department_name(&self) -> &str {
        &self.department_name
    }
}

/// Resolve the department name from an optional environment value.
///
/// `None` or an empty/whitespace value falls back to
/// [`DEFAULT_DEPARTMENT`].
pub fn department_name_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_department_name() {
        let err = TrackerConfig::new("  ").expect_err("should reject");
        assert!(matches!(err, TrackerError::InvalidInput(_)));
    }

    #[test]
    fn env_value_falls_back_to_default() {
        assert_eq!(department_name_from_env_value(None), DEFAULT_DEPARTMENT);
        assert_eq!(
            department_name_from_env_value(Some("  ".into())),
            DEFAULT_DEPARTMENT
        );
        assert_eq!(
            department_name_from_env_value(Some("Ward 4B".into())),
            "Ward 4B"
        );
    }
}
