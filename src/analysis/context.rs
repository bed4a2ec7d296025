//! Context ranking
//!
//! Biases candidates toward musically common, contextually likely
//! interpretations. Ambiguous inputs such as C-E-G-A (both C6 and Am7) are
//! resolved by performance context and genre-typical frequency rather than
//! alphabetical order.

use crate::theory::pattern::{ChordType, PatternKind, ScaleType};
use crate::theory::pitch::PitchClass;

/// Tonics ordered from most to least common
pub const TONIC_POPULARITY: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::G,
    PitchClass::F,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
    PitchClass::ASharp,
    PitchClass::DSharp,
    PitchClass::B,
    PitchClass::GSharp,
    PitchClass::CSharp,
    PitchClass::FSharp,
];

/// Chord types ordered from most to least common
pub const CHORD_POPULARITY: [ChordType; 15] = [
    ChordType::Major,
    ChordType::Minor,
    ChordType::Dominant7,
    ChordType::Major7,
    ChordType::Minor7,
    ChordType::Sus4,
    ChordType::Sus2,
    ChordType::Power,
    ChordType::Diminished,
    ChordType::Major6,
    ChordType::Minor6,
    ChordType::Add9,
    ChordType::HalfDiminished7,
    ChordType::Augmented,
    ChordType::Diminished7,
];

/// Scale types ordered from most to least common
pub const SCALE_POPULARITY: [ScaleType; 12] = [
    ScaleType::Major,
    ScaleType::NaturalMinor,
    ScaleType::MajorPentatonic,
    ScaleType::MinorPentatonic,
    ScaleType::Blues,
    ScaleType::Dorian,
    ScaleType::Mixolydian,
    ScaleType::HarmonicMinor,
    ScaleType::MelodicMinor,
    ScaleType::Lydian,
    ScaleType::Phrygian,
    ScaleType::Locrian,
];

/// `(len - index) / len`; items absent from the list score as if one past the end
fn list_score<T: PartialEq>(list: &[T], item: &T) -> f32 {
    if list.is_empty() {
        return 0.0;
    }
    let len = list.len();
    let index = list.iter().position(|x| x == item).unwrap_or(len);
    (len - index) as f32 / len as f32
}

/// Popularity of a tonic in [0, 1]
pub fn tonic_popularity(tonic: PitchClass) -> f32 {
    list_score(&TONIC_POPULARITY, &tonic)
}

/// Popularity of a pattern type within its category, in [0, 1]
pub fn kind_popularity(kind: PatternKind) -> f32 {
    match kind {
        PatternKind::Chord(c) => list_score(&CHORD_POPULARITY, &c),
        PatternKind::Scale(s) => list_score(&SCALE_POPULARITY, &s),
    }
}

/// Combined popularity of a (tonic, pattern type) pair in [0, 1]
///
/// The mean of the tonic and pattern-type scores.
pub fn popularity_score(tonic: PitchClass, kind: PatternKind) -> f32 {
    (tonic_popularity(tonic) + kind_popularity(kind)) / 2.0
}

/// Most plausible tonic for the current input.
///
/// Preference order:
/// 1. the first note the performer pressed, if it is still sounding
/// 2. the most popular tonic present in the input
/// 3. the first input pitch class
/// 4. C
pub fn probable_tonic(input: &[PitchClass], first_played: Option<PitchClass>) -> PitchClass {
    if let Some(first) = first_played.filter(|pc| input.contains(pc)) {
        return first;
    }

    TONIC_POPULARITY
        .iter()
        .copied()
        .find(|pc| input.contains(pc))
        .or_else(|| input.first().copied())
        .unwrap_or(PitchClass::C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_score_bounds() {
        assert_eq!(tonic_popularity(PitchClass::C), 1.0);
        assert!((tonic_popularity(PitchClass::FSharp) - 1.0 / 12.0).abs() < 1e-6);
        assert_eq!(list_score(&[1, 2, 3], &9), 0.0);
        assert_eq!(list_score::<u8>(&[], &1), 0.0);
    }

    #[test]
    fn test_popularity_ordering() {
        let c_major = popularity_score(PitchClass::C, ChordType::Major.into());
        let fs_dim7 = popularity_score(PitchClass::FSharp, ChordType::Diminished7.into());
        assert!(c_major > fs_dim7);
        assert!((0.0..=1.0).contains(&c_major));
        assert!((0.0..=1.0).contains(&fs_dim7));
    }

    #[test]
    fn test_probable_tonic_prefers_first_played() {
        let input = [PitchClass::A, PitchClass::C, PitchClass::E, PitchClass::G];
        assert_eq!(probable_tonic(&input, Some(PitchClass::A)), PitchClass::A);
    }

    #[test]
    fn test_probable_tonic_ignores_released_first_note() {
        let input = [PitchClass::A, PitchClass::C, PitchClass::E];
        assert_eq!(probable_tonic(&input, Some(PitchClass::D)), PitchClass::C);
    }

    #[test]
    fn test_probable_tonic_popularity_fallback() {
        let input = [PitchClass::B, PitchClass::E, PitchClass::GSharp];
        assert_eq!(probable_tonic(&input, None), PitchClass::E);
    }

    #[test]
    fn test_probable_tonic_default() {
        assert_eq!(probable_tonic(&[], None), PitchClass::C);
    }
}
