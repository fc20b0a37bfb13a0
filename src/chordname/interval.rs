use std::fmt;

use crate::chordname::note::Note;

/// Semitone distance within one octave, named.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interval {
    Unison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl Interval {
    /// Indexed by semitone distance
    pub const ALL: [Interval; 12] = [
        Interval::Unison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::Tritone,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
    ];

    pub fn from_semitones(semitones: u8) -> Option<Interval> {
        Interval::ALL.get(usize::from(semitones)).copied()
    }

    /// Interval climbing from `from` up to `to`. `C G` is a fifth, `G C` a fourth.
    pub fn between(from: &Note, to: &Note) -> Interval {
        let semitones = from.pitch_class().distance_to(&to.pitch_class());
        Interval::ALL[usize::from(semitones)]
    }

    pub fn semitones(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Interval::Unison => "Unison",
            Interval::MinorSecond => "Minor second",
            Interval::MajorSecond => "Major second",
            Interval::MinorThird => "Minor third",
            Interval::MajorThird => "Major third",
            Interval::PerfectFourth => "Perfect fourth",
            Interval::Tritone => "Tritone",
            Interval::PerfectFifth => "Perfect fifth",
            Interval::MinorSixth => "Minor sixth",
            Interval::MajorSixth => "Major sixth",
            Interval::MinorSeventh => "Minor seventh",
            Interval::MajorSeventh => "Major seventh",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
