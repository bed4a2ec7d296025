//! Pitch classes and note identifiers
//!
//! Every note identifier reduces to exactly one [`PitchClass`], whatever octave or
//! enharmonic spelling it was written with. Sharps are the canonical internal spelling.

use crate::error::DetectionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 12 canonical pitch classes (sharp spelling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    /// C
    #[serde(rename = "C")]
    C,
    /// C sharp / D flat
    #[serde(rename = "C#")]
    CSharp,
    /// D
    #[serde(rename = "D")]
    D,
    /// D sharp / E flat
    #[serde(rename = "D#")]
    DSharp,
    /// E
    #[serde(rename = "E")]
    E,
    /// F
    #[serde(rename = "F")]
    F,
    /// F sharp / G flat
    #[serde(rename = "F#")]
    FSharp,
    /// G
    #[serde(rename = "G")]
    G,
    /// G sharp / A flat
    #[serde(rename = "G#")]
    GSharp,
    /// A
    #[serde(rename = "A")]
    A,
    /// A sharp / B flat
    #[serde(rename = "A#")]
    ASharp,
    /// B
    #[serde(rename = "B")]
    B,
}

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl PitchClass {
    /// All 12 pitch classes in chromatic order starting from C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitone index above C (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for a semitone index; wraps modulo 12
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    /// Canonical (sharp) name, e.g. "C#"
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self as usize]
    }

    /// Transpose by a signed number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        let idx = (self.index() as i32 + semitones).rem_euclid(12);
        Self::from_index(idx as u8)
    }

    /// Parse a spelled pitch class without octave ("C", "F#", "Bb", "E♭", "B#").
    ///
    /// Any number of accidentals is accepted, so "F##" reduces to G.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::InvalidNoteIdentifier`] if the text is not a letter
    /// A-G followed only by accidentals.
    pub fn parse(text: &str) -> Result<Self, DetectionError> {
        let (pc, rest) = parse_spelling(text)?;
        if !rest.is_empty() {
            return Err(DetectionError::InvalidNoteIdentifier(format!(
                "unexpected trailing text in pitch class '{}'",
                text
            )));
        }
        Ok(pc)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PitchClass {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse the letter and accidentals at the start of `text`.
///
/// Returns the pitch class and the unparsed remainder.
fn parse_spelling(text: &str) -> Result<(PitchClass, &str), DetectionError> {
    let trimmed = text.trim();
    let mut chars = trimmed.char_indices();

    let base: i32 = match chars.next() {
        Some((_, c)) => match c.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => {
                return Err(DetectionError::InvalidNoteIdentifier(format!(
                    "'{}' does not start with a note letter",
                    text
                )))
            }
        },
        None => {
            return Err(DetectionError::InvalidNoteIdentifier(
                "empty note identifier".to_string(),
            ))
        }
    };

    let mut offset = 0i32;
    let mut rest_start = trimmed.len();
    for (i, c) in chars {
        match c {
            '#' | '♯' => offset += 1,
            'b' | '♭' => offset -= 1,
            _ => {
                rest_start = i;
                break;
            }
        }
    }

    let pc = PitchClass::from_index((base + offset).rem_euclid(12) as u8);
    Ok((pc, &trimmed[rest_start..]))
}

/// A single sounding note: pitch class plus optional octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId {
    /// Octave-independent pitch class
    pub pitch_class: PitchClass,
    /// Scientific octave number (C4 = middle C), if one was given
    pub octave: Option<i8>,
}

impl NoteId {
    /// Create a note from its parts
    pub fn new(pitch_class: PitchClass, octave: Option<i8>) -> Self {
        Self { pitch_class, octave }
    }

    /// Parse a textual note identifier such as "C4", "F#5", "Bb3" or "C-1".
    ///
    /// The octave is optional: "Eb" parses with `octave == None`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::InvalidNoteIdentifier`] for anything that does not
    /// match `<Letter>[accidentals][octave]`.
    ///
    /// # Example
    ///
    /// ```
    /// use chordsense::theory::pitch::{NoteId, PitchClass};
    ///
    /// let note = NoteId::parse("Bb3")?;
    /// assert_eq!(note.pitch_class, PitchClass::ASharp);
    /// assert_eq!(note.octave, Some(3));
    /// # Ok::<(), chordsense::DetectionError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, DetectionError> {
        let (pitch_class, rest) = parse_spelling(text)?;
        if rest.is_empty() {
            return Ok(Self::new(pitch_class, None));
        }

        let digits = rest.strip_prefix('-').unwrap_or(rest);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DetectionError::InvalidNoteIdentifier(format!(
                "invalid octave in note '{}'",
                text
            )));
        }
        let octave: i8 = rest.parse().map_err(|_| {
            DetectionError::InvalidNoteIdentifier(format!("octave out of range in note '{}'", text))
        })?;

        Ok(Self::new(pitch_class, Some(octave)))
    }

    /// Note for a MIDI note number (60 = C4)
    pub fn from_midi(midi: u8) -> Self {
        let octave = (midi / 12) as i8 - 1;
        Self::new(PitchClass::from_index(midi % 12), Some(octave))
    }

    /// MIDI note number, if the note has an octave inside the MIDI range
    pub fn to_midi(&self) -> Option<u8> {
        let octave = self.octave? as i32;
        let midi = (octave + 1) * 12 + self.pitch_class.index() as i32;
        u8::try_from(midi).ok().filter(|m| *m <= 127)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.octave {
            Some(octave) => write!(f, "{}{}", self.pitch_class, octave),
            None => write!(f, "{}", self.pitch_class),
        }
    }
}

impl std::str::FromStr for NoteId {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
