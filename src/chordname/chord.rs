use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::chordname::error::Error;
use crate::chordname::note::Note;
use crate::chordname::util::ordinal;

/// Triad and seventh-chord qualities, keyed by the semitone gaps between
/// consecutive chord tones in root position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    MajorTriad,
    MinorTriad,
    DiminishedTriad,
    AugmentedTriad,
    Major7th,
    Dominant7th,
    Minor7th,
    MinorMajor7th,
    HalfDiminished7th,
    FullyDiminished7th,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 10] = [
        ChordQuality::MajorTriad,
        ChordQuality::MinorTriad,
        ChordQuality::DiminishedTriad,
        ChordQuality::AugmentedTriad,
        ChordQuality::Major7th,
        ChordQuality::Dominant7th,
        ChordQuality::Minor7th,
        ChordQuality::MinorMajor7th,
        ChordQuality::HalfDiminished7th,
        ChordQuality::FullyDiminished7th,
    ];

    /// Looks up a comma-joined gap key such as `"4,3"`.
    pub fn from_key(key: &str) -> Option<ChordQuality> {
        match key {
            "4,3" => Some(ChordQuality::MajorTriad),
            "3,4" => Some(ChordQuality::MinorTriad),
            "3,3" => Some(ChordQuality::DiminishedTriad),
            "4,4" => Some(ChordQuality::AugmentedTriad),
            "4,3,4" => Some(ChordQuality::Major7th),
            "4,3,3" => Some(ChordQuality::Dominant7th),
            "3,4,3" => Some(ChordQuality::Minor7th),
            "3,4,4" => Some(ChordQuality::MinorMajor7th),
            "3,3,3" => Some(ChordQuality::HalfDiminished7th),
            "3,3,2" => Some(ChordQuality::FullyDiminished7th),
            _ => None,
        }
    }

    pub fn from_gaps(gaps: &[u8]) -> Option<ChordQuality> {
        ChordQuality::from_key(&gaps.iter().join(","))
    }

    pub fn gaps(&self) -> &'static [u8] {
        match self {
            ChordQuality::MajorTriad => &[4, 3],
            ChordQuality::MinorTriad => &[3, 4],
            ChordQuality::DiminishedTriad => &[3, 3],
            ChordQuality::AugmentedTriad => &[4, 4],
            ChordQuality::Major7th => &[4, 3, 4],
            ChordQuality::Dominant7th => &[4, 3, 3],
            ChordQuality::Minor7th => &[3, 4, 3],
            ChordQuality::MinorMajor7th => &[3, 4, 4],
            ChordQuality::HalfDiminished7th => &[3, 3, 3],
            ChordQuality::FullyDiminished7th => &[3, 3, 2],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChordQuality::MajorTriad => "major triad",
            ChordQuality::MinorTriad => "minor triad",
            ChordQuality::DiminishedTriad => "diminished triad",
            ChordQuality::AugmentedTriad => "augmented triad",
            ChordQuality::Major7th => "major 7th",
            ChordQuality::Dominant7th => "dominant 7th",
            ChordQuality::Minor7th => "minor 7th",
            ChordQuality::MinorMajor7th => "minor major 7th",
            ChordQuality::HalfDiminished7th => "half diminished 7th",
            ChordQuality::FullyDiminished7th => "fully diminished 7th",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A recognized triad or seventh chord.
///
/// `components` are in root position; `inversion` is how many notes sat
/// above the bass in the caller's ordering, 0 for root position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    components: Vec<Note>,
    quality: ChordQuality,
    inversion: usize,
}

impl Chord {
    /// Finds the first rotation of `notes` that is stacked in thirds by letter
    /// and whose semitone gaps name a known quality.
    ///
    /// Rotation `i` brings the last `i` notes to the front, so `E G C` needs one
    /// rotation to reach `C E G` and is a 1st inversion. Rotations are tried
    /// from 0 upward and the first hit wins. `notes` is never reordered.
    pub fn identify(notes: &[Note]) -> Result<Chord, Error> {
        if !(3..=4).contains(&notes.len()) {
            return Err(Error::TooManyNotes);
        }
        (0..notes.len())
            .find_map(|inversion| {
                let rotated = rotate(notes, inversion);
                let letter_gaps = letter_gaps(&rotated);
                let semitone_gaps = semitone_gaps(&rotated);
                trace!(
                    inversion,
                    letters = %letter_gaps.iter().join(","),
                    semitones = %semitone_gaps.iter().join(","),
                    "trying rotation"
                );
                if letter_gaps.iter().any(|gap| *gap != 2) {
                    return None;
                }
                let quality = ChordQuality::from_gaps(&semitone_gaps)?;
                debug!(inversion, %quality, root = rotated[0].name(), "matched chord");
                Some(Chord {
                    components: rotated.into_iter().cloned().collect(),
                    quality,
                    inversion,
                })
            })
            .ok_or(Error::InvalidChord)
    }

    pub fn root(&self) -> &Note {
        &self.components[0]
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn inversion(&self) -> usize {
        self.inversion
    }

    pub fn components(&self) -> &[Note] {
        &self.components
    }

    pub fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|note| note.name().to_string()).collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.root(), self.quality)?;
        if self.inversion > 0 {
            write!(f, " ({} inversion)", ordinal(self.inversion))?;
        }
        Ok(())
    }
}

fn rotate(notes: &[Note], rotation: usize) -> Vec<&Note> {
    let n = notes.len();
    (0..n).map(|k| &notes[(k + n - rotation) % n]).collect()
}

/// Letter steps between neighbours; a stack of thirds is all 2s.
fn letter_gaps(notes: &[&Note]) -> Vec<u8> {
    notes
        .iter()
        .tuple_windows()
        .map(|(a, b)| (b.letter_index() + 7 - a.letter_index()) % 7)
        .collect()
}

fn semitone_gaps(notes: &[&Note]) -> Vec<u8> {
    notes
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.pitch_class().distance_to(&b.pitch_class()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordname::note::{Letter, PitchClass};
    use crate::chordname::noteparser::parse_notes;

    fn chord(text: &str) -> Result<Chord, Error> {
        Chord::identify(&parse_notes(text).unwrap())
    }

    /// Root-position spelling of `quality` on the natural `root`, using
    /// every other letter and whatever accidentals reach each gap.
    fn spell(root: Letter, quality: ChordQuality) -> Vec<String> {
        let mut target = i64::from(root.base_class().value());
        let mut names = vec![root.to_string()];
        for (k, gap) in quality.gaps().iter().enumerate() {
            target += i64::from(*gap);
            let letter = Letter::ALL[(usize::from(root.index()) + 2 * (k + 1)) % 7];
            let mut shift = PitchClass::new(target).value() as i64 - i64::from(letter.base_class().value());
            shift = shift.rem_euclid(12);
            if shift > 6 {
                shift -= 12;
            }
            let accidental = if shift >= 0 { "#" } else { "b" };
            names.push(format!("{}{}", letter, accidental.repeat(shift.unsigned_abs() as usize)));
        }
        names
    }

    #[test]
    fn root_position_triad() {
        let c_major = chord("C E G").unwrap();
        assert_eq!(c_major.to_string(), "C major triad");
        assert_eq!(c_major.component_names(), vec!["C", "E", "G"]);
        assert_eq!(c_major.inversion(), 0);
        assert_eq!(c_major.root().name(), "C");
    }

    #[test]
    fn first_inversion() {
        let c_major = chord("E G C").unwrap();
        assert_eq!(c_major.to_string(), "C major triad (1st inversion)");
        assert_eq!(c_major.component_names(), vec!["C", "E", "G"]);
    }

    #[test]
    fn second_inversion() {
        assert_eq!(chord("G C E").unwrap().to_string(), "C major triad (2nd inversion)");
        assert_eq!(chord("D G B").unwrap().to_string(), "G major triad (2nd inversion)");
    }

    #[test]
    fn seventh_chords() {
        assert_eq!(chord("C E G B").unwrap().to_string(), "C major 7th");
        assert_eq!(chord("Bb D F Ab").unwrap().to_string(), "Bb dominant 7th");
        assert_eq!(chord("D F A C").unwrap().to_string(), "D minor 7th");
        assert_eq!(chord("A C E G#").unwrap().to_string(), "A minor major 7th");
        assert_eq!(chord("B D F Ab").unwrap().to_string(), "B half diminished 7th");
        assert_eq!(chord("C Eb Gb Bbbb").unwrap().to_string(), "C fully diminished 7th");
        assert_eq!(chord("B D F A"), Err(Error::InvalidChord));
    }

    #[test]
    fn third_inversion() {
        let g7 = chord("F G B D").unwrap();
        assert_eq!(g7.to_string(), "G dominant 7th (3rd inversion)");
        assert_eq!(g7.component_names(), vec!["G", "B", "D", "F"]);
    }

    #[test]
    fn accidentals_in_triads() {
        assert_eq!(chord("G# B D#").unwrap().to_string(), "G# minor triad");
        assert_eq!(chord("B D F").unwrap().to_string(), "B diminished triad");
        assert_eq!(chord("C E G#").unwrap().to_string(), "C augmented triad");
        assert_eq!(chord("Fb Ab Cb").unwrap().to_string(), "Fb major triad");
    }

    #[test]
    fn letters_must_stack_in_thirds() {
        // same pitch classes as C E G
        assert_eq!(chord("C Fb G"), Err(Error::InvalidChord));
        assert_eq!(chord("B# E G"), Err(Error::InvalidChord));
    }

    #[test]
    fn not_a_chord() {
        assert_eq!(chord("C D F"), Err(Error::InvalidChord));
        assert_eq!(chord("C E Gb"), Err(Error::InvalidChord));
        assert_eq!(chord("C E G Bbb"), Err(Error::InvalidChord));
    }

    #[test]
    fn wrong_count() {
        assert_eq!(chord("C E"), Err(Error::TooManyNotes));
        assert_eq!(chord("C E G B D"), Err(Error::TooManyNotes));
    }

    #[test]
    fn leaves_input_untouched() {
        let notes = parse_notes("E G C").unwrap();
        let before = notes.clone();
        let _ = Chord::identify(&notes).unwrap();
        assert_eq!(notes, before);
    }

    #[test]
    fn gap_keys() {
        assert_eq!(ChordQuality::from_gaps(&[4, 3]), Some(ChordQuality::MajorTriad));
        assert_eq!(ChordQuality::from_gaps(&[3, 3, 2]), Some(ChordQuality::FullyDiminished7th));
        assert_eq!(ChordQuality::from_gaps(&[2, 5]), None);
        for quality in ChordQuality::ALL {
            assert_eq!(ChordQuality::from_gaps(quality.gaps()), Some(quality));
        }
    }

    #[test]
    fn round_trip_every_quality_root_and_inversion() {
        for quality in ChordQuality::ALL {
            for root in Letter::ALL {
                let spelled = spell(root, quality);
                let n = spelled.len();
                for inversion in 0..n {
                    let voiced = spelled[inversion..].iter().chain(spelled[..inversion].iter()).join(" ");
                    let found = chord(&voiced).unwrap();
                    let expected = match inversion {
                        0 => format!("{} {}", root, quality),
                        i => format!("{} {} ({} inversion)", root, quality, ordinal(i)),
                    };
                    assert_eq!(found.to_string(), expected, "voicing {}", voiced);
                    assert_eq!(found.component_names(), spelled);
                }
            }
        }
    }
}
