use thiserror::Error;

/// Everything that can go wrong while naming a set of notes.
///
/// Every error ends the current query; nothing is partially resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid note letter in \"{0}\"")]
    InvalidLetter(String),
    #[error("Invalid accidentals in \"{0}\"")]
    InvalidAccidentals(String),
    #[error("Only up to four notes (seventh chords) supported")]
    TooManyNotes,
    #[error("Invalid chord")]
    InvalidChord,
    #[error("Could not tokenize input: {0}")]
    Tokenize(String),
}

impl Error {
    /// Malformed input text, as opposed to well-formed notes that name nothing.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::InvalidLetter(_) | Error::InvalidAccidentals(_) | Error::Tokenize(_)
        )
    }
}
