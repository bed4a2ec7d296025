//! Note reference tables
//!
//! Spelled note lists for every (tonic, pattern type) pair. Spellings follow the
//! key each pattern lives in (F# major spells its third "A#", C minor spells its
//! third "Eb"), so these are stored per tonic rather than derived from intervals.
//! Where a letter-correct spelling would need a double accidental the plain
//! enharmonic is used instead.

use super::pattern::{ChordType, ScaleType};
use super::pitch::PitchClass;

pub(crate) static CHORD_TABLE: &[(PitchClass, ChordType, &[&str])] = &[
    // Major
    (PitchClass::C, ChordType::Major, &["C", "E", "G"]),
    (PitchClass::CSharp, ChordType::Major, &["Db", "F", "Ab"]),
    (PitchClass::D, ChordType::Major, &["D", "F#", "A"]),
    (PitchClass::DSharp, ChordType::Major, &["Eb", "G", "Bb"]),
    (PitchClass::E, ChordType::Major, &["E", "G#", "B"]),
    (PitchClass::F, ChordType::Major, &["F", "A", "C"]),
    (PitchClass::FSharp, ChordType::Major, &["F#", "A#", "C#"]),
    (PitchClass::G, ChordType::Major, &["G", "B", "D"]),
    (PitchClass::GSharp, ChordType::Major, &["Ab", "C", "Eb"]),
    (PitchClass::A, ChordType::Major, &["A", "C#", "E"]),
    (PitchClass::ASharp, ChordType::Major, &["Bb", "D", "F"]),
    (PitchClass::B, ChordType::Major, &["B", "D#", "F#"]),
    // Minor
    (PitchClass::C, ChordType::Minor, &["C", "Eb", "G"]),
    (PitchClass::CSharp, ChordType::Minor, &["C#", "E", "G#"]),
    (PitchClass::D, ChordType::Minor, &["D", "F", "A"]),
    (PitchClass::DSharp, ChordType::Minor, &["Eb", "Gb", "Bb"]),
    (PitchClass::E, ChordType::Minor, &["E", "G", "B"]),
    (PitchClass::F, ChordType::Minor, &["F", "Ab", "C"]),
    (PitchClass::FSharp, ChordType::Minor, &["F#", "A", "C#"]),
    (PitchClass::G, ChordType::Minor, &["G", "Bb", "D"]),
    (PitchClass::GSharp, ChordType::Minor, &["G#", "B", "D#"]),
    (PitchClass::A, ChordType::Minor, &["A", "C", "E"]),
    (PitchClass::ASharp, ChordType::Minor, &["Bb", "Db", "F"]),
    (PitchClass::B, ChordType::Minor, &["B", "D", "F#"]),
    // Diminished
    (PitchClass::C, ChordType::Diminished, &["C", "Eb", "Gb"]),
    (PitchClass::CSharp, ChordType::Diminished, &["C#", "E", "G"]),
    (PitchClass::D, ChordType::Diminished, &["D", "F", "Ab"]),
    (PitchClass::DSharp, ChordType::Diminished, &["Eb", "Gb", "A"]),
    (PitchClass::E, ChordType::Diminished, &["E", "G", "Bb"]),
    (PitchClass::F, ChordType::Diminished, &["F", "Ab", "Cb"]),
    (PitchClass::FSharp, ChordType::Diminished, &["F#", "A", "C"]),
    (PitchClass::G, ChordType::Diminished, &["G", "Bb", "Db"]),
    (PitchClass::GSharp, ChordType::Diminished, &["G#", "B", "D"]),
    (PitchClass::A, ChordType::Diminished, &["A", "C", "Eb"]),
    (PitchClass::ASharp, ChordType::Diminished, &["Bb", "Db", "Fb"]),
    (PitchClass::B, ChordType::Diminished, &["B", "D", "F"]),
    // Augmented
    (PitchClass::C, ChordType::Augmented, &["C", "E", "G#"]),
    (PitchClass::CSharp, ChordType::Augmented, &["Db", "F", "A"]),
    (PitchClass::D, ChordType::Augmented, &["D", "F#", "A#"]),
    (PitchClass::DSharp, ChordType::Augmented, &["Eb", "G", "B"]),
    (PitchClass::E, ChordType::Augmented, &["E", "G#", "B#"]),
    (PitchClass::F, ChordType::Augmented, &["F", "A", "C#"]),
    (PitchClass::FSharp, ChordType::Augmented, &["F#", "A#", "D"]),
    (PitchClass::G, ChordType::Augmented, &["G", "B", "D#"]),
    (PitchClass::GSharp, ChordType::Augmented, &["Ab", "C", "E"]),
    (PitchClass::A, ChordType::Augmented, &["A", "C#", "E#"]),
    (PitchClass::ASharp, ChordType::Augmented, &["Bb", "D", "F#"]),
    (PitchClass::B, ChordType::Augmented, &["B", "D#", "G"]),
    // Sus2
    (PitchClass::C, ChordType::Sus2, &["C", "D", "G"]),
    (PitchClass::CSharp, ChordType::Sus2, &["Db", "Eb", "Ab"]),
    (PitchClass::D, ChordType::Sus2, &["D", "E", "A"]),
    (PitchClass::DSharp, ChordType::Sus2, &["Eb", "F", "Bb"]),
    (PitchClass::E, ChordType::Sus2, &["E", "F#", "B"]),
    (PitchClass::F, ChordType::Sus2, &["F", "G", "C"]),
    (PitchClass::FSharp, ChordType::Sus2, &["F#", "G#", "C#"]),
    (PitchClass::G, ChordType::Sus2, &["G", "A", "D"]),
    (PitchClass::GSharp, ChordType::Sus2, &["Ab", "Bb", "Eb"]),
    (PitchClass::A, ChordType::Sus2, &["A", "B", "E"]),
    (PitchClass::ASharp, ChordType::Sus2, &["Bb", "C", "F"]),
    (PitchClass::B, ChordType::Sus2, &["B", "C#", "F#"]),
    // Sus4
    (PitchClass::C, ChordType::Sus4, &["C", "F", "G"]),
    (PitchClass::CSharp, ChordType::Sus4, &["Db", "Gb", "Ab"]),
    (PitchClass::D, ChordType::Sus4, &["D", "G", "A"]),
    (PitchClass::DSharp, ChordType::Sus4, &["Eb", "Ab", "Bb"]),
    (PitchClass::E, ChordType::Sus4, &["E", "A", "B"]),
    (PitchClass::F, ChordType::Sus4, &["F", "Bb", "C"]),
    (PitchClass::FSharp, ChordType::Sus4, &["F#", "B", "C#"]),
    (PitchClass::G, ChordType::Sus4, &["G", "C", "D"]),
    (PitchClass::GSharp, ChordType::Sus4, &["Ab", "Db", "Eb"]),
    (PitchClass::A, ChordType::Sus4, &["A", "D", "E"]),
    (PitchClass::ASharp, ChordType::Sus4, &["Bb", "Eb", "F"]),
    (PitchClass::B, ChordType::Sus4, &["B", "E", "F#"]),
    // Power
    (PitchClass::C, ChordType::Power, &["C", "G"]),
    (PitchClass::CSharp, ChordType::Power, &["Db", "Ab"]),
    (PitchClass::D, ChordType::Power, &["D", "A"]),
    (PitchClass::DSharp, ChordType::Power, &["Eb", "Bb"]),
    (PitchClass::E, ChordType::Power, &["E", "B"]),
    (PitchClass::F, ChordType::Power, &["F", "C"]),
    (PitchClass::FSharp, ChordType::Power, &["F#", "C#"]),
    (PitchClass::G, ChordType::Power, &["G", "D"]),
    (PitchClass::GSharp, ChordType::Power, &["Ab", "Eb"]),
    (PitchClass::A, ChordType::Power, &["A", "E"]),
    (PitchClass::ASharp, ChordType::Power, &["Bb", "F"]),
    (PitchClass::B, ChordType::Power, &["B", "F#"]),
    // Dominant7
    (PitchClass::C, ChordType::Dominant7, &["C", "E", "G", "Bb"]),
    (PitchClass::CSharp, ChordType::Dominant7, &["Db", "F", "Ab", "Cb"]),
    (PitchClass::D, ChordType::Dominant7, &["D", "F#", "A", "C"]),
    (PitchClass::DSharp, ChordType::Dominant7, &["Eb", "G", "Bb", "Db"]),
    (PitchClass::E, ChordType::Dominant7, &["E", "G#", "B", "D"]),
    (PitchClass::F, ChordType::Dominant7, &["F", "A", "C", "Eb"]),
    (PitchClass::FSharp, ChordType::Dominant7, &["F#", "A#", "C#", "E"]),
    (PitchClass::G, ChordType::Dominant7, &["G", "B", "D", "F"]),
    (PitchClass::GSharp, ChordType::Dominant7, &["Ab", "C", "Eb", "Gb"]),
    (PitchClass::A, ChordType::Dominant7, &["A", "C#", "E", "G"]),
    (PitchClass::ASharp, ChordType::Dominant7, &["Bb", "D", "F", "Ab"]),
    (PitchClass::B, ChordType::Dominant7, &["B", "D#", "F#", "A"]),
    // Major7
    (PitchClass::C, ChordType::Major7, &["C", "E", "G", "B"]),
    (PitchClass::CSharp, ChordType::Major7, &["Db", "F", "Ab", "C"]),
    (PitchClass::D, ChordType::Major7, &["D", "F#", "A", "C#"]),
    (PitchClass::DSharp, ChordType::Major7, &["Eb", "G", "Bb", "D"]),
    (PitchClass::E, ChordType::Major7, &["E", "G#", "B", "D#"]),
    (PitchClass::F, ChordType::Major7, &["F", "A", "C", "E"]),
    (PitchClass::FSharp, ChordType::Major7, &["F#", "A#", "C#", "E#"]),
    (PitchClass::G, ChordType::Major7, &["G", "B", "D", "F#"]),
    (PitchClass::GSharp, ChordType::Major7, &["Ab", "C", "Eb", "G"]),
    (PitchClass::A, ChordType::Major7, &["A", "C#", "E", "G#"]),
    (PitchClass::ASharp, ChordType::Major7, &["Bb", "D", "F", "A"]),
    (PitchClass::B, ChordType::Major7, &["B", "D#", "F#", "A#"]),
    // Minor7
    (PitchClass::C, ChordType::Minor7, &["C", "Eb", "G", "Bb"]),
    (PitchClass::CSharp, ChordType::Minor7, &["C#", "E", "G#", "B"]),
    (PitchClass::D, ChordType::Minor7, &["D", "F", "A", "C"]),
    (PitchClass::DSharp, ChordType::Minor7, &["Eb", "Gb", "Bb", "Db"]),
    (PitchClass::E, ChordType::Minor7, &["E", "G", "B", "D"]),
    (PitchClass::F, ChordType::Minor7, &["F", "Ab", "C", "Eb"]),
    (PitchClass::FSharp, ChordType::Minor7, &["F#", "A", "C#", "E"]),
    (PitchClass::G, ChordType::Minor7, &["G", "Bb", "D", "F"]),
    (PitchClass::GSharp, ChordType::Minor7, &["G#", "B", "D#", "F#"]),
    (PitchClass::A, ChordType::Minor7, &["A", "C", "E", "G"]),
    (PitchClass::ASharp, ChordType::Minor7, &["Bb", "Db", "F", "Ab"]),
    (PitchClass::B, ChordType::Minor7, &["B", "D", "F#", "A"]),
    // Diminished7
    (PitchClass::C, ChordType::Diminished7, &["C", "Eb", "Gb", "A"]),
    (PitchClass::CSharp, ChordType::Diminished7, &["C#", "E", "G", "Bb"]),
    (PitchClass::D, ChordType::Diminished7, &["D", "F", "Ab", "Cb"]),
    (PitchClass::DSharp, ChordType::Diminished7, &["Eb", "Gb", "A", "C"]),
    (PitchClass::E, ChordType::Diminished7, &["E", "G", "Bb", "Db"]),
    (PitchClass::F, ChordType::Diminished7, &["F", "Ab", "Cb", "D"]),
    (PitchClass::FSharp, ChordType::Diminished7, &["F#", "A", "C", "Eb"]),
    (PitchClass::G, ChordType::Diminished7, &["G", "Bb", "Db", "Fb"]),
    (PitchClass::GSharp, ChordType::Diminished7, &["G#", "B", "D", "F"]),
    (PitchClass::A, ChordType::Diminished7, &["A", "C", "Eb", "Gb"]),
    (PitchClass::ASharp, ChordType::Diminished7, &["Bb", "Db", "Fb", "G"]),
    (PitchClass::B, ChordType::Diminished7, &["B", "D", "F", "Ab"]),
    // HalfDiminished7
    (PitchClass::C, ChordType::HalfDiminished7, &["C", "Eb", "Gb", "Bb"]),
    (PitchClass::CSharp, ChordType::HalfDiminished7, &["C#", "E", "G", "B"]),
    (PitchClass::D, ChordType::HalfDiminished7, &["D", "F", "Ab", "C"]),
    (PitchClass::DSharp, ChordType::HalfDiminished7, &["Eb", "Gb", "A", "Db"]),
    (PitchClass::E, ChordType::HalfDiminished7, &["E", "G", "Bb", "D"]),
    (PitchClass::F, ChordType::HalfDiminished7, &["F", "Ab", "Cb", "Eb"]),
    (PitchClass::FSharp, ChordType::HalfDiminished7, &["F#", "A", "C", "E"]),
    (PitchClass::G, ChordType::HalfDiminished7, &["G", "Bb", "Db", "F"]),
    (PitchClass::GSharp, ChordType::HalfDiminished7, &["G#", "B", "D", "F#"]),
    (PitchClass::A, ChordType::HalfDiminished7, &["A", "C", "Eb", "G"]),
    (PitchClass::ASharp, ChordType::HalfDiminished7, &["Bb", "Db", "Fb", "Ab"]),
    (PitchClass::B, ChordType::HalfDiminished7, &["B", "D", "F", "A"]),
    // Major6
    (PitchClass::C, ChordType::Major6, &["C", "E", "G", "A"]),
    (PitchClass::CSharp, ChordType::Major6, &["Db", "F", "Ab", "Bb"]),
    (PitchClass::D, ChordType::Major6, &["D", "F#", "A", "B"]),
    (PitchClass::DSharp, ChordType::Major6, &["Eb", "G", "Bb", "C"]),
    (PitchClass::E, ChordType::Major6, &["E", "G#", "B", "C#"]),
    (PitchClass::F, ChordType::Major6, &["F", "A", "C", "D"]),
    (PitchClass::FSharp, ChordType::Major6, &["F#", "A#", "C#", "D#"]),
    (PitchClass::G, ChordType::Major6, &["G", "B", "D", "E"]),
    (PitchClass::GSharp, ChordType::Major6, &["Ab", "C", "Eb", "F"]),
    (PitchClass::A, ChordType::Major6, &["A", "C#", "E", "F#"]),
    (PitchClass::ASharp, ChordType::Major6, &["Bb", "D", "F", "G"]),
    (PitchClass::B, ChordType::Major6, &["B", "D#", "F#", "G#"]),
    // Minor6
    (PitchClass::C, ChordType::Minor6, &["C", "Eb", "G", "A"]),
    (PitchClass::CSharp, ChordType::Minor6, &["C#", "E", "G#", "A#"]),
    (PitchClass::D, ChordType::Minor6, &["D", "F", "A", "B"]),
    (PitchClass::DSharp, ChordType::Minor6, &["Eb", "Gb", "Bb", "C"]),
    (PitchClass::E, ChordType::Minor6, &["E", "G", "B", "C#"]),
    (PitchClass::F, ChordType::Minor6, &["F", "Ab", "C", "D"]),
    (PitchClass::FSharp, ChordType::Minor6, &["F#", "A", "C#", "D#"]),
    (PitchClass::G, ChordType::Minor6, &["G", "Bb", "D", "E"]),
    (PitchClass::GSharp, ChordType::Minor6, &["G#", "B", "D#", "E#"]),
    (PitchClass::A, ChordType::Minor6, &["A", "C", "E", "F#"]),
    (PitchClass::ASharp, ChordType::Minor6, &["Bb", "Db", "F", "G"]),
    (PitchClass::B, ChordType::Minor6, &["B", "D", "F#", "G#"]),
    // Add9
    (PitchClass::C, ChordType::Add9, &["C", "D", "E", "G"]),
    (PitchClass::CSharp, ChordType::Add9, &["Db", "Eb", "F", "Ab"]),
    (PitchClass::D, ChordType::Add9, &["D", "E", "F#", "A"]),
    (PitchClass::DSharp, ChordType::Add9, &["Eb", "F", "G", "Bb"]),
    (PitchClass::E, ChordType::Add9, &["E", "F#", "G#", "B"]),
    (PitchClass::F, ChordType::Add9, &["F", "G", "A", "C"]),
    (PitchClass::FSharp, ChordType::Add9, &["F#", "G#", "A#", "C#"]),
    (PitchClass::G, ChordType::Add9, &["G", "A", "B", "D"]),
    (PitchClass::GSharp, ChordType::Add9, &["Ab", "Bb", "C", "Eb"]),
    (PitchClass::A, ChordType::Add9, &["A", "B", "C#", "E"]),
    (PitchClass::ASharp, ChordType::Add9, &["Bb", "C", "D", "F"]),
    (PitchClass::B, ChordType::Add9, &["B", "C#", "D#", "F#"]),
];

pub(crate) static SCALE_TABLE: &[(PitchClass, ScaleType, &[&str])] = &[
    // Major
    (PitchClass::C, ScaleType::Major, &["C", "D", "E", "F", "G", "A", "B"]),
    (PitchClass::CSharp, ScaleType::Major, &["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]),
    (PitchClass::D, ScaleType::Major, &["D", "E", "F#", "G", "A", "B", "C#"]),
    (PitchClass::DSharp, ScaleType::Major, &["Eb", "F", "G", "Ab", "Bb", "C", "D"]),
    (PitchClass::E, ScaleType::Major, &["E", "F#", "G#", "A", "B", "C#", "D#"]),
    (PitchClass::F, ScaleType::Major, &["F", "G", "A", "Bb", "C", "D", "E"]),
    (PitchClass::FSharp, ScaleType::Major, &["F#", "G#", "A#", "B", "C#", "D#", "E#"]),
    (PitchClass::G, ScaleType::Major, &["G", "A", "B", "C", "D", "E", "F#"]),
    (PitchClass::GSharp, ScaleType::Major, &["Ab", "Bb", "C", "Db", "Eb", "F", "G"]),
    (PitchClass::A, ScaleType::Major, &["A", "B", "C#", "D", "E", "F#", "G#"]),
    (PitchClass::ASharp, ScaleType::Major, &["Bb", "C", "D", "Eb", "F", "G", "A"]),
    (PitchClass::B, ScaleType::Major, &["B", "C#", "D#", "E", "F#", "G#", "A#"]),
    // NaturalMinor
    (PitchClass::C, ScaleType::NaturalMinor, &["C", "D", "Eb", "F", "G", "Ab", "Bb"]),
    (PitchClass::CSharp, ScaleType::NaturalMinor, &["C#", "D#", "E", "F#", "G#", "A", "B"]),
    (PitchClass::D, ScaleType::NaturalMinor, &["D", "E", "F", "G", "A", "Bb", "C"]),
    (PitchClass::DSharp, ScaleType::NaturalMinor, &["Eb", "F", "Gb", "Ab", "Bb", "Cb", "Db"]),
    (PitchClass::E, ScaleType::NaturalMinor, &["E", "F#", "G", "A", "B", "C", "D"]),
    (PitchClass::F, ScaleType::NaturalMinor, &["F", "G", "Ab", "Bb", "C", "Db", "Eb"]),
    (PitchClass::FSharp, ScaleType::NaturalMinor, &["F#", "G#", "A", "B", "C#", "D", "E"]),
    (PitchClass::G, ScaleType::NaturalMinor, &["G", "A", "Bb", "C", "D", "Eb", "F"]),
    (PitchClass::GSharp, ScaleType::NaturalMinor, &["G#", "A#", "B", "C#", "D#", "E", "F#"]),
    (PitchClass::A, ScaleType::NaturalMinor, &["A", "B", "C", "D", "E", "F", "G"]),
    (PitchClass::ASharp, ScaleType::NaturalMinor, &["Bb", "C", "Db", "Eb", "F", "Gb", "Ab"]),
    (PitchClass::B, ScaleType::NaturalMinor, &["B", "C#", "D", "E", "F#", "G", "A"]),
    // HarmonicMinor
    (PitchClass::C, ScaleType::HarmonicMinor, &["C", "D", "Eb", "F", "G", "Ab", "B"]),
    (PitchClass::CSharp, ScaleType::HarmonicMinor, &["C#", "D#", "E", "F#", "G#", "A", "B#"]),
    (PitchClass::D, ScaleType::HarmonicMinor, &["D", "E", "F", "G", "A", "Bb", "C#"]),
    (PitchClass::DSharp, ScaleType::HarmonicMinor, &["Eb", "F", "Gb", "Ab", "Bb", "Cb", "D"]),
    (PitchClass::E, ScaleType::HarmonicMinor, &["E", "F#", "G", "A", "B", "C", "D#"]),
    (PitchClass::F, ScaleType::HarmonicMinor, &["F", "G", "Ab", "Bb", "C", "Db", "E"]),
    (PitchClass::FSharp, ScaleType::HarmonicMinor, &["F#", "G#", "A", "B", "C#", "D", "E#"]),
    (PitchClass::G, ScaleType::HarmonicMinor, &["G", "A", "Bb", "C", "D", "Eb", "F#"]),
    (PitchClass::GSharp, ScaleType::HarmonicMinor, &["G#", "A#", "B", "C#", "D#", "E", "G"]),
    (PitchClass::A, ScaleType::HarmonicMinor, &["A", "B", "C", "D", "E", "F", "G#"]),
    (PitchClass::ASharp, ScaleType::HarmonicMinor, &["Bb", "C", "Db", "Eb", "F", "Gb", "A"]),
    (PitchClass::B, ScaleType::HarmonicMinor, &["B", "C#", "D", "E", "F#", "G", "A#"]),
    // MelodicMinor
    (PitchClass::C, ScaleType::MelodicMinor, &["C", "D", "Eb", "F", "G", "A", "B"]),
    (PitchClass::CSharp, ScaleType::MelodicMinor, &["C#", "D#", "E", "F#", "G#", "A#", "B#"]),
    (PitchClass::D, ScaleType::MelodicMinor, &["D", "E", "F", "G", "A", "B", "C#"]),
    (PitchClass::DSharp, ScaleType::MelodicMinor, &["Eb", "F", "Gb", "Ab", "Bb", "C", "D"]),
    (PitchClass::E, ScaleType::MelodicMinor, &["E", "F#", "G", "A", "B", "C#", "D#"]),
    (PitchClass::F, ScaleType::MelodicMinor, &["F", "G", "Ab", "Bb", "C", "D", "E"]),
    (PitchClass::FSharp, ScaleType::MelodicMinor, &["F#", "G#", "A", "B", "C#", "D#", "E#"]),
    (PitchClass::G, ScaleType::MelodicMinor, &["G", "A", "Bb", "C", "D", "E", "F#"]),
    (PitchClass::GSharp, ScaleType::MelodicMinor, &["G#", "A#", "B", "C#", "D#", "E#", "G"]),
    (PitchClass::A, ScaleType::MelodicMinor, &["A", "B", "C", "D", "E", "F#", "G#"]),
    (PitchClass::ASharp, ScaleType::MelodicMinor, &["Bb", "C", "Db", "Eb", "F", "G", "A"]),
    (PitchClass::B, ScaleType::MelodicMinor, &["B", "C#", "D", "E", "F#", "G#", "A#"]),
    // Dorian
    (PitchClass::C, ScaleType::Dorian, &["C", "D", "Eb", "F", "G", "A", "Bb"]),
    (PitchClass::CSharp, ScaleType::Dorian, &["C#", "D#", "E", "F#", "G#", "A#", "B"]),
    (PitchClass::D, ScaleType::Dorian, &["D", "E", "F", "G", "A", "B", "C"]),
    (PitchClass::DSharp, ScaleType::Dorian, &["Eb", "F", "Gb", "Ab", "Bb", "C", "Db"]),
    (PitchClass::E, ScaleType::Dorian, &["E", "F#", "G", "A", "B", "C#", "D"]),
    (PitchClass::F, ScaleType::Dorian, &["F", "G", "Ab", "Bb", "C", "D", "Eb"]),
    (PitchClass::FSharp, ScaleType::Dorian, &["F#", "G#", "A", "B", "C#", "D#", "E"]),
    (PitchClass::G, ScaleType::Dorian, &["G", "A", "Bb", "C", "D", "E", "F"]),
    (PitchClass::GSharp, ScaleType::Dorian, &["G#", "A#", "B", "C#", "D#", "E#", "F#"]),
    (PitchClass::A, ScaleType::Dorian, &["A", "B", "C", "D", "E", "F#", "G"]),
    (PitchClass::ASharp, ScaleType::Dorian, &["Bb", "C", "Db", "Eb", "F", "G", "Ab"]),
    (PitchClass::B, ScaleType::Dorian, &["B", "C#", "D", "E", "F#", "G#", "A"]),
    // Phrygian
    (PitchClass::C, ScaleType::Phrygian, &["C", "Db", "Eb", "F", "G", "Ab", "Bb"]),
    (PitchClass::CSharp, ScaleType::Phrygian, &["C#", "D", "E", "F#", "G#", "A", "B"]),
    (PitchClass::D, ScaleType::Phrygian, &["D", "Eb", "F", "G", "A", "Bb", "C"]),
    (PitchClass::DSharp, ScaleType::Phrygian, &["Eb", "Fb", "Gb", "Ab", "Bb", "Cb", "Db"]),
    (PitchClass::E, ScaleType::Phrygian, &["E", "F", "G", "A", "B", "C", "D"]),
    (PitchClass::F, ScaleType::Phrygian, &["F", "Gb", "Ab", "Bb", "C", "Db", "Eb"]),
    (PitchClass::FSharp, ScaleType::Phrygian, &["F#", "G", "A", "B", "C#", "D", "E"]),
    (PitchClass::G, ScaleType::Phrygian, &["G", "Ab", "Bb", "C", "D", "Eb", "F"]),
    (PitchClass::GSharp, ScaleType::Phrygian, &["G#", "A", "B", "C#", "D#", "E", "F#"]),
    (PitchClass::A, ScaleType::Phrygian, &["A", "Bb", "C", "D", "E", "F", "G"]),
    (PitchClass::ASharp, ScaleType::Phrygian, &["Bb", "Cb", "Db", "Eb", "F", "Gb", "Ab"]),
    (PitchClass::B, ScaleType::Phrygian, &["B", "C", "D", "E", "F#", "G", "A"]),
    // Lydian
    (PitchClass::C, ScaleType::Lydian, &["C", "D", "E", "F#", "G", "A", "B"]),
    (PitchClass::CSharp, ScaleType::Lydian, &["Db", "Eb", "F", "G", "Ab", "Bb", "C"]),
    (PitchClass::D, ScaleType::Lydian, &["D", "E", "F#", "G#", "A", "B", "C#"]),
    (PitchClass::DSharp, ScaleType::Lydian, &["Eb", "F", "G", "A", "Bb", "C", "D"]),
    (PitchClass::E, ScaleType::Lydian, &["E", "F#", "G#", "A#", "B", "C#", "D#"]),
    (PitchClass::F, ScaleType::Lydian, &["F", "G", "A", "B", "C", "D", "E"]),
    (PitchClass::FSharp, ScaleType::Lydian, &["F#", "G#", "A#", "B#", "C#", "D#", "E#"]),
    (PitchClass::G, ScaleType::Lydian, &["G", "A", "B", "C#", "D", "E", "F#"]),
    (PitchClass::GSharp, ScaleType::Lydian, &["Ab", "Bb", "C", "D", "Eb", "F", "G"]),
    (PitchClass::A, ScaleType::Lydian, &["A", "B", "C#", "D#", "E", "F#", "G#"]),
    (PitchClass::ASharp, ScaleType::Lydian, &["Bb", "C", "D", "E", "F", "G", "A"]),
    (PitchClass::B, ScaleType::Lydian, &["B", "C#", "D#", "E#", "F#", "G#", "A#"]),
    // Mixolydian
    (PitchClass::C, ScaleType::Mixolydian, &["C", "D", "E", "F", "G", "A", "Bb"]),
    (PitchClass::CSharp, ScaleType::Mixolydian, &["Db", "Eb", "F", "Gb", "Ab", "Bb", "Cb"]),
    (PitchClass::D, ScaleType::Mixolydian, &["D", "E", "F#", "G", "A", "B", "C"]),
    (PitchClass::DSharp, ScaleType::Mixolydian, &["Eb", "F", "G", "Ab", "Bb", "C", "Db"]),
    (PitchClass::E, ScaleType::Mixolydian, &["E", "F#", "G#", "A", "B", "C#", "D"]),
    (PitchClass::F, ScaleType::Mixolydian, &["F", "G", "A", "Bb", "C", "D", "Eb"]),
    (PitchClass::FSharp, ScaleType::Mixolydian, &["F#", "G#", "A#", "B", "C#", "D#", "E"]),
    (PitchClass::G, ScaleType::Mixolydian, &["G", "A", "B", "C", "D", "E", "F"]),
    (PitchClass::GSharp, ScaleType::Mixolydian, &["Ab", "Bb", "C", "Db", "Eb", "F", "Gb"]),
    (PitchClass::A, ScaleType::Mixolydian, &["A", "B", "C#", "D", "E", "F#", "G"]),
    (PitchClass::ASharp, ScaleType::Mixolydian, &["Bb", "C", "D", "Eb", "F", "G", "Ab"]),
    (PitchClass::B, ScaleType::Mixolydian, &["B", "C#", "D#", "E", "F#", "G#", "A"]),
    // Locrian
    (PitchClass::C, ScaleType::Locrian, &["C", "Db", "Eb", "F", "Gb", "Ab", "Bb"]),
    (PitchClass::CSharp, ScaleType::Locrian, &["C#", "D", "E", "F#", "G", "A", "B"]),
    (PitchClass::D, ScaleType::Locrian, &["D", "Eb", "F", "G", "Ab", "Bb", "C"]),
    (PitchClass::DSharp, ScaleType::Locrian, &["Eb", "Fb", "Gb", "Ab", "A", "Cb", "Db"]),
    (PitchClass::E, ScaleType::Locrian, &["E", "F", "G", "A", "Bb", "C", "D"]),
    (PitchClass::F, ScaleType::Locrian, &["F", "Gb", "Ab", "Bb", "Cb", "Db", "Eb"]),
    (PitchClass::FSharp, ScaleType::Locrian, &["F#", "G", "A", "B", "C", "D", "E"]),
    (PitchClass::G, ScaleType::Locrian, &["G", "Ab", "Bb", "C", "Db", "Eb", "F"]),
    (PitchClass::GSharp, ScaleType::Locrian, &["G#", "A", "B", "C#", "D", "E", "F#"]),
    (PitchClass::A, ScaleType::Locrian, &["A", "Bb", "C", "D", "Eb", "F", "G"]),
    (PitchClass::ASharp, ScaleType::Locrian, &["Bb", "Cb", "Db", "Eb", "Fb", "Gb", "Ab"]),
    (PitchClass::B, ScaleType::Locrian, &["B", "C", "D", "E", "F", "G", "A"]),
    // MajorPentatonic
    (PitchClass::C, ScaleType::MajorPentatonic, &["C", "D", "E", "G", "A"]),
    (PitchClass::CSharp, ScaleType::MajorPentatonic, &["Db", "Eb", "F", "Ab", "Bb"]),
    (PitchClass::D, ScaleType::MajorPentatonic, &["D", "E", "F#", "A", "B"]),
    (PitchClass::DSharp, ScaleType::MajorPentatonic, &["Eb", "F", "G", "Bb", "C"]),
    (PitchClass::E, ScaleType::MajorPentatonic, &["E", "F#", "G#", "B", "C#"]),
    (PitchClass::F, ScaleType::MajorPentatonic, &["F", "G", "A", "C", "D"]),
    (PitchClass::FSharp, ScaleType::MajorPentatonic, &["F#", "G#", "A#", "C#", "D#"]),
    (PitchClass::G, ScaleType::MajorPentatonic, &["G", "A", "B", "D", "E"]),
    (PitchClass::GSharp, ScaleType::MajorPentatonic, &["Ab", "Bb", "C", "Eb", "F"]),
    (PitchClass::A, ScaleType::MajorPentatonic, &["A", "B", "C#", "E", "F#"]),
    (PitchClass::ASharp, ScaleType::MajorPentatonic, &["Bb", "C", "D", "F", "G"]),
    (PitchClass::B, ScaleType::MajorPentatonic, &["B", "C#", "D#", "F#", "G#"]),
    // MinorPentatonic
    (PitchClass::C, ScaleType::MinorPentatonic, &["C", "Eb", "F", "G", "Bb"]),
    (PitchClass::CSharp, ScaleType::MinorPentatonic, &["C#", "E", "F#", "G#", "B"]),
    (PitchClass::D, ScaleType::MinorPentatonic, &["D", "F", "G", "A", "C"]),
    (PitchClass::DSharp, ScaleType::MinorPentatonic, &["Eb", "Gb", "Ab", "Bb", "Db"]),
    (PitchClass::E, ScaleType::MinorPentatonic, &["E", "G", "A", "B", "D"]),
    (PitchClass::F, ScaleType::MinorPentatonic, &["F", "Ab", "Bb", "C", "Eb"]),
    (PitchClass::FSharp, ScaleType::MinorPentatonic, &["F#", "A", "B", "C#", "E"]),
    (PitchClass::G, ScaleType::MinorPentatonic, &["G", "Bb", "C", "D", "F"]),
    (PitchClass::GSharp, ScaleType::MinorPentatonic, &["G#", "B", "C#", "D#", "F#"]),
    (PitchClass::A, ScaleType::MinorPentatonic, &["A", "C", "D", "E", "G"]),
    (PitchClass::ASharp, ScaleType::MinorPentatonic, &["Bb", "Db", "Eb", "F", "Ab"]),
    (PitchClass::B, ScaleType::MinorPentatonic, &["B", "D", "E", "F#", "A"]),
    // Blues
    (PitchClass::C, ScaleType::Blues, &["C", "Eb", "F", "F#", "G", "Bb"]),
    (PitchClass::CSharp, ScaleType::Blues, &["C#", "E", "F#", "G", "G#", "B"]),
    (PitchClass::D, ScaleType::Blues, &["D", "F", "G", "G#", "A", "C"]),
    (PitchClass::DSharp, ScaleType::Blues, &["Eb", "Gb", "Ab", "A", "Bb", "Db"]),
    (PitchClass::E, ScaleType::Blues, &["E", "G", "A", "A#", "B", "D"]),
    (PitchClass::F, ScaleType::Blues, &["F", "Ab", "Bb", "B", "C", "Eb"]),
    (PitchClass::FSharp, ScaleType::Blues, &["F#", "A", "B", "B#", "C#", "E"]),
    (PitchClass::G, ScaleType::Blues, &["G", "Bb", "C", "C#", "D", "F"]),
    (PitchClass::GSharp, ScaleType::Blues, &["G#", "B", "C#", "D", "D#", "F#"]),
    (PitchClass::A, ScaleType::Blues, &["A", "C", "D", "D#", "E", "G"]),
    (PitchClass::ASharp, ScaleType::Blues, &["Bb", "Db", "Eb", "E", "F", "Ab"]),
    (PitchClass::B, ScaleType::Blues, &["B", "D", "E", "E#", "F#", "A"]),
];
