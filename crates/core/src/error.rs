#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no patient with MRN {0} on the board")]
    UnknownPatient(String),
    #[error("invalid username or password")]
    AuthenticationFailed,
    #[error("failed to serialise chart: {0}")]
    Serialization(serde_json::Error),
    #[error("chart note error: {0}")]
    Note(#[from] edtrack_notes::NoteError),
    #[error(transparent)]
    Text(#[from] edtrack_types::TextError),
}

pub type TrackerResult<T> = std::result::Result<T, TrackerError>;
