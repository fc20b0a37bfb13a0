use std::fmt;

use tracing::debug;

use crate::chordname::chord::Chord;
use crate::chordname::error::Error;
use crate::chordname::interval::Interval;
use crate::chordname::note::Note;
use crate::chordname::noteparser::parse_notes;

/// What a set of notes amounts to: a note name, an interval name, or a chord
/// name with its components in root position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    name: String,
    components: Option<Vec<String>>,
}

impl Resolution {
    fn bare(name: &str) -> Self {
        Resolution {
            name: name.to_string(),
            components: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Only present for chords
    pub fn components(&self) -> Option<&[String]> {
        self.components.as_deref()
    }
}

impl From<Chord> for Resolution {
    fn from(chord: Chord) -> Self {
        Resolution {
            name: chord.to_string(),
            components: Some(chord.component_names()),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Dispatches on how many notes there are.
pub fn resolve(notes: &[Note]) -> Result<Resolution, Error> {
    debug!(count = notes.len(), "resolving notes");
    match notes {
        [note] => Ok(Resolution::bare(note.name())),
        [from, to] => Ok(Resolution::bare(Interval::between(from, to).name())),
        [_, _, _] | [_, _, _, _] => Chord::identify(notes).map(Resolution::from),
        _ => Err(Error::TooManyNotes),
    }
}

/// Parses whitespace-delimited note names and resolves them.
pub fn identify(text: &str) -> Result<Resolution, Error> {
    resolve(&parse_notes(text)?)
}
