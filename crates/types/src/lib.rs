//! Validated value types shared across the edtrack workspace.

/// Errors that can occur when creating validated value types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
    /// The input was not a well-formed medical record number
    #[error("invalid MRN: {0}")]
    InvalidMrn(String),
}

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Input is trimmed during construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A validated medical record number.
///
/// MRNs in the tracking board are uppercase alphanumeric, 4 to 16
/// characters. Lowercase input is normalised to uppercase; surrounding
/// whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Mrn(String);

impl Mrn {
    const MIN_LEN: usize = 4;
    const MAX_LEN: usize = 16;

    /// Parses and normalises a medical record number.
    ///
    /// # Errors
    ///
    /// Returns `TextError::InvalidMrn` if the trimmed input is outside the
    /// 4..=16 length bounds or contains characters other than ASCII
    /// letters and digits.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.len() < Self::MIN_LEN || trimmed.len() > Self::MAX_LEN {
            return Err(TextError::InvalidMrn(format!(
                "length must be {}..={} characters, got {}",
                Self::MIN_LEN,
                Self::MAX_LEN,
                trimmed.len()
            )));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(TextError::InvalidMrn(
                "only ASCII letters and digits allowed".into(),
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalised MRN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Mrn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Mrn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> serde::Deserialize<'de> for Mrn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Mrn::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_keeps_content() {
        let text = NonEmptyText::new("  Riley Chen  ").expect("valid text");
        assert_eq!(text.as_str(), "Riley Chen");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        let err = NonEmptyText::new("   \t").expect_err("should reject");
        assert!(matches!(err, TextError::Empty));
    }

    #[test]
    fn mrn_normalises_to_uppercase() {
        let mrn = Mrn::parse(" a4431908 ").expect("valid mrn");
        assert_eq!(mrn.as_str(), "A4431908");
    }

    #[test]
    fn mrn_rejects_short_and_long_input() {
        assert!(matches!(
            Mrn::parse("A1").expect_err("too short"),
            TextError::InvalidMrn(_)
        ));
        assert!(matches!(
            Mrn::parse("A".repeat(17)).expect_err("too long"),
            TextError::InvalidMrn(_)
        ));
    }

    #[test]
    fn mrn_rejects_punctuation() {
        let err = Mrn::parse("A-4431908").expect_err("should reject");
        assert!(matches!(err, TextError::InvalidMrn(_)));
    }
}
