//! Pattern types: the closed set of chord and scale shapes the engine recognizes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a pattern is a chord or a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Simultaneous harmony (triads, sevenths, ...)
    Chord,
    /// Pitch collection (modes, pentatonics, ...)
    Scale,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Chord => f.write_str("chord"),
            Category::Scale => f.write_str("scale"),
        }
    }
}

/// Chord shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChordType {
    /// Major triad
    Major,
    /// Minor triad
    Minor,
    /// Diminished triad
    Diminished,
    /// Augmented triad
    Augmented,
    /// Suspended second
    Sus2,
    /// Suspended fourth
    Sus4,
    /// Root and fifth only
    Power,
    /// Dominant seventh
    Dominant7,
    /// Major seventh
    Major7,
    /// Minor seventh
    Minor7,
    /// Fully diminished seventh
    Diminished7,
    /// Half-diminished seventh (m7b5)
    HalfDiminished7,
    /// Major sixth
    Major6,
    /// Minor sixth
    Minor6,
    /// Major triad with added ninth
    Add9,
}

impl ChordType {
    /// Every chord type, in declaration order
    pub const ALL: [ChordType; 15] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Power,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Diminished7,
        ChordType::HalfDiminished7,
        ChordType::Major6,
        ChordType::Minor6,
        ChordType::Add9,
    ];

    /// Human-readable name used in labels
    pub fn display_name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Sus2 => "Sus2",
            ChordType::Sus4 => "Sus4",
            ChordType::Power => "5",
            ChordType::Dominant7 => "Dominant 7th",
            ChordType::Major7 => "Major 7th",
            ChordType::Minor7 => "Minor 7th",
            ChordType::Diminished7 => "Diminished 7th",
            ChordType::HalfDiminished7 => "Half-Diminished 7th",
            ChordType::Major6 => "6",
            ChordType::Minor6 => "Minor 6",
            ChordType::Add9 => "Add9",
        }
    }
}

/// Scale shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScaleType {
    /// Major (Ionian)
    Major,
    /// Natural minor (Aeolian)
    NaturalMinor,
    /// Harmonic minor
    HarmonicMinor,
    /// Melodic minor (ascending)
    MelodicMinor,
    /// Dorian mode
    Dorian,
    /// Phrygian mode
    Phrygian,
    /// Lydian mode
    Lydian,
    /// Mixolydian mode
    Mixolydian,
    /// Locrian mode
    Locrian,
    /// Major pentatonic
    MajorPentatonic,
    /// Minor pentatonic
    MinorPentatonic,
    /// Minor blues (hexatonic)
    Blues,
}

impl ScaleType {
    /// Every scale type, in declaration order
    pub const ALL: [ScaleType; 12] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
    ];

    /// Human-readable name used in labels
    pub fn display_name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
        }
    }
}

/// A chord or scale type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternKind {
    /// Chord type
    Chord(ChordType),
    /// Scale type
    Scale(ScaleType),
}

impl PatternKind {
    /// Category this kind belongs to
    pub fn category(self) -> Category {
        match self {
            PatternKind::Chord(_) => Category::Chord,
            PatternKind::Scale(_) => Category::Scale,
        }
    }

    /// Human-readable name used in labels
    pub fn display_name(self) -> &'static str {
        match self {
            PatternKind::Chord(c) => c.display_name(),
            PatternKind::Scale(s) => s.display_name(),
        }
    }

    /// All kinds of a category, in declaration order
    pub fn all_of(category: Category) -> Vec<PatternKind> {
        match category {
            Category::Chord => ChordType::ALL.iter().map(|&c| PatternKind::Chord(c)).collect(),
            Category::Scale => ScaleType::ALL.iter().map(|&s| PatternKind::Scale(s)).collect(),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<ChordType> for PatternKind {
    fn from(c: ChordType) -> Self {
        PatternKind::Chord(c)
    }
}

impl From<ScaleType> for PatternKind {
    fn from(s: ScaleType) -> Self {
        PatternKind::Scale(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_names_unique_per_category() {
        let chords: HashSet<_> = ChordType::ALL.iter().map(|c| c.display_name()).collect();
        assert_eq!(chords.len(), ChordType::ALL.len());

        let scales: HashSet<_> = ScaleType::ALL.iter().map(|s| s.display_name()).collect();
        assert_eq!(scales.len(), ScaleType::ALL.len());
    }

    #[test]
    fn test_kind_category() {
        assert_eq!(PatternKind::from(ChordType::Minor7).category(), Category::Chord);
        assert_eq!(PatternKind::from(ScaleType::Dorian).category(), Category::Scale);
        assert_eq!(PatternKind::all_of(Category::Scale).len(), 12);
    }
}
