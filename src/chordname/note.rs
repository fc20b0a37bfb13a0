use std::fmt;
use std::str::FromStr;

use crate::chordname::error::Error;

/// Letter name of a note, in diatonic order starting from C.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Uppercase only.
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Position on the diatonic scale, C=0 .. B=6
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Pitch class of the bare letter
    pub fn base_class(&self) -> PitchClass {
        PitchClass(match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        })
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Accidental> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    /// Semitones added to the letter's pitch class
    pub fn shift(&self) -> i64 {
        match self {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        })
    }
}

/// Position within the octave, always in `0..12`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Reduces `raw` modulo 12, so negative shifts wrap around.
    pub fn new(raw: i64) -> PitchClass {
        PitchClass(raw.rem_euclid(12) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Upward semitone distance from `self` to `other`, in `0..12`.
    /// Not symmetric: C to G is 7, G to C is 5.
    pub fn distance_to(&self, other: &PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One parsed note token, e.g. `G#` or `Bbb`.
///
/// The token text is kept verbatim for display; `Fb` stays `Fb` even though it
/// sounds the same as `E`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    name: String,
    letter: Letter,
    accidental_shift: i64,
    pitch_class: PitchClass,
}

impl Note {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn letter_index(&self) -> u8 {
        self.letter.index()
    }

    pub fn base_class(&self) -> PitchClass {
        self.letter.base_class()
    }

    /// Net semitone shift of all accidentals, before reduction
    pub fn accidental_shift(&self) -> i64 {
        self.accidental_shift
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Note {
    type Err = Error;

    /// The first character is the letter, everything after it must be `#` or `b`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| Error::InvalidLetter(token.to_string()))?;
        let accidentals: Vec<Accidental> = chars
            .map(Accidental::from_char)
            .collect::<Option<Vec<Accidental>>>()
            .ok_or_else(|| Error::InvalidAccidentals(token.to_string()))?;
        let accidental_shift = accidentals.iter().map(Accidental::shift).sum::<i64>();
        Ok(Note {
            name: token.to_string(),
            letter,
            accidental_shift,
            pitch_class: PitchClass::new(i64::from(letter.base_class().value()) + accidental_shift),
        })
    }
}
