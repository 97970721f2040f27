//! Chart-note wire format support.
//!
//! Chart notes are persisted and exchanged as Markdown with a YAML front
//! matter header carrying the note metadata (author, type, timestamp,
//! tags). This crate handles that format only; what a note *means*
//! clinically lives with the chart types in `edtrack-core`.

use chrono::{DateTime, Utc};
use edtrack_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the chart-note boundary crate.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("missing YAML front matter header (expected '---' as first line)")]
    MissingFrontMatter,

    #[error("unterminated YAML front matter (missing closing '---' line)")]
    UnterminatedFrontMatter,

    #[error("front matter must be a YAML mapping")]
    FrontMatterNotMapping,

    #[error("translation error: {0}")]
    Translation(String),
}

/// Kind of chart note, as shown in the note-type dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    /// Daily progress note.
    Progress,
    /// Nursing note.
    Nursing,
    /// Specialty consult note.
    Consult,
    /// Procedure note.
    Procedure,
    /// Discharge summary.
    Discharge,
}

impl NoteType {
    /// Convert to the front-matter wire string.
    fn to_wire(self) -> &'static str {
        match self {
            NoteType::Progress => "progress",
            NoteType::Nursing => "nursing",
            NoteType::Consult => "consult",
            NoteType::Procedure => "procedure",
            NoteType::Discharge => "discharge",
        }
    }

    /// Parse from the front-matter wire string.
    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "progress" => Some(NoteType::Progress),
            "nursing" => Some(NoteType::Nursing),
            "consult" => Some(NoteType::Consult),
            "procedure" => Some(NoteType::Procedure),
            "discharge" => Some(NoteType::Discharge),
            _ => None,
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            NoteType::Progress => "Progress",
            NoteType::Nursing => "Nursing",
            NoteType::Consult => "Consult",
            NoteType::Procedure => "Procedure",
            NoteType::Discharge => "Discharge",
        }
    }
}

/// A chart note: metadata plus a free-text Markdown body.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartNote {
    /// Optional note heading.
    pub title: Option<String>,
    /// Authoring clinician.
    pub author: NonEmptyText,
    /// Author's role (for example "Attending", "RN").
    pub role: Option<String>,
    /// Note kind.
    pub note_type: NoteType,
    /// When the note was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Markdown body.
    pub body: String,
}

/// Exact front-matter structure serialised to/from YAML.
///
/// `deny_unknown_fields` keeps deserialisation strict: any unexpected
/// metadata key is rejected rather than silently dropped.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct NoteFrontMatterWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,

    #[serde(rename = "type")]
    note_type: String,

    recorded: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

/// Read a chart note from Markdown with YAML front matter.
///
/// Uses `serde_path_to_error` to surface a best-effort path (for example
/// `tags.1`) to the failing field when the front matter does not match the
/// wire schema.
///
/// # Errors
///
/// Returns [`NoteError`] if the front matter is missing, unterminated, not
/// a mapping, fails the wire schema, names an unknown note type, or
/// carries an unparseable `recorded` timestamp.
pub fn read_markdown(input: &str) -> Result<ChartNote, NoteError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let (front_matter, body) = split_front_matter(input)?;

    let yaml_value: serde_yaml::Value = serde_yaml::from_str(front_matter)?;
    if !matches!(yaml_value, serde_yaml::Value::Mapping(_)) {
        return Err(NoteError::FrontMatterNotMapping);
    }

    let wire: NoteFrontMatterWire = match serde_path_to_error::deserialize(yaml_value) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() { "<root>" } else { path.as_str() };
            return Err(NoteError::Translation(format!(
                "note front matter mismatch at {path}: {source}"
            )));
        }
    };

    let author = NonEmptyText::new(&wire.author)
        .map_err(|e| NoteError::Translation(format!("invalid author: {e}")))?;

    let note_type = NoteType::from_wire(&wire.note_type).ok_or_else(|| {
        NoteError::Translation(format!("unknown note type '{}'", wire.note_type))
    })?;

    let recorded_at = wire
        .recorded
        .parse::<DateTime<Utc>>()
        .map_err(|e| NoteError::Translation(format!("invalid recorded timestamp: {e}")))?;

    Ok(ChartNote {
        title: wire.title,
        author,
        role: wire.role,
        note_type,
        recorded_at,
        tags: wire.tags,
        body: body.to_string(),
    })
}

/// Write a chart note to Markdown with YAML front matter.
///
/// # Errors
///
/// Returns [`NoteError::InvalidYaml`] if front-matter serialisation fails.
pub fn write_markdown(note: &ChartNote) -> Result<String, NoteError> {
    let wire = NoteFrontMatterWire {
        title: note.title.clone(),
        author: note.author.as_str().to_string(),
        role: note.role.clone(),
        note_type: note.note_type.to_wire().to_string(),
        recorded: note.recorded_at.to_rfc3339(),
        tags: note.tags.clone(),
    };

    let mut out = String::from("---\n");
    let yaml = serde_yaml::to_string(&wire)?;
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n");
    out.push_str(&note.body);
    Ok(out)
}

/// Splits `input` into (front matter, body) slices.
///
/// The first line must be exactly `---`; the front matter runs to the next
/// line that is exactly `---`. CRLF input is accepted.
fn split_front_matter(input: &str) -> Result<(&str, &str), NoteError> {
    let after_open = input
        .strip_prefix("---\r\n")
        .or_else(|| input.strip_prefix("---\n"))
        .ok_or(NoteError::MissingFrontMatter)?;

    let mut consumed = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let front = &after_open[..consumed];
            let body = &after_open[consumed + line.len()..];
            return Ok((front, body));
        }
        consumed += line.len();
    }

    Err(NoteError::UnterminatedFrontMatter)
}
