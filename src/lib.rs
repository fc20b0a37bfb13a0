//! Names the note, interval or chord formed by one to four note names.
//!
//! ```text
//! "C"         -> C
//! "C G"       -> Perfect fifth
//! "E G C"     -> C major triad (1st inversion)
//! "Bb D F Ab" -> Bb dominant 7th
//! ```

pub mod chordname {
    pub mod chord;
    pub mod error;
    pub mod interval;
    pub mod note;
    pub mod noteparser;
    pub mod resolver;
    pub mod util;
}

pub use crate::chordname::chord::{Chord, ChordQuality};
pub use crate::chordname::error::Error;
pub use crate::chordname::interval::Interval;
pub use crate::chordname::note::{Accidental, Letter, Note, PitchClass};
pub use crate::chordname::noteparser::parse_notes;
pub use crate::chordname::resolver::{identify, resolve, Resolution};
pub use crate::chordname::util::{iterable_to_str, ordinal};
