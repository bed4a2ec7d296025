//! Detection result types

use crate::theory::pattern::{Category, PatternKind};
use crate::theory::pitch::PitchClass;
use serde::{Deserialize, Serialize};

/// A scored (tonic, pattern type) interpretation of the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    /// Root of the pattern
    pub tonic: PitchClass,

    /// Chord or scale type
    pub kind: PatternKind,

    /// Display name, e.g. "C Major"
    pub name: String,

    /// Pattern pitch classes starting from the tonic
    pub notes: Vec<PitchClass>,

    /// Pattern notes as spelled in this key
    pub spelled_notes: Vec<String>,

    /// Match confidence (0.0-1.0)
    pub confidence: f32,

    /// Aggregate rank score (confidence plus bonuses)
    pub rank_score: f32,

    /// Number of distinct pitch classes the pattern requires
    pub specificity: usize,

    /// Popularity of this tonic and pattern type (0.0-1.0)
    pub popularity: f32,

    /// Input pitch-class set equals the pattern's set
    pub is_exact_match: bool,

    /// Confidence is at or above the category's relevance threshold
    pub is_relevant: bool,
}

impl CandidateMatch {
    /// Chord or scale
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// UI label: "C Major ✓" for exact matches, "C Major (78%)" otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use chordsense::Detector;
    ///
    /// let detector = Detector::default_engine()?;
    /// let result = detector.detect(&["C4", "E4", "G4"]);
    /// assert_eq!(result.chord.unwrap().label(), "C Major ✓");
    /// # Ok::<(), chordsense::DetectionError>(())
    /// ```
    pub fn label(&self) -> String {
        if self.is_exact_match {
            format!("{} ✓", self.name)
        } else {
            format!("{} ({:.0}%)", self.name, self.confidence * 100.0)
        }
    }

    /// Bitmask over the pattern's pitch-class indices
    pub fn mask(&self) -> u16 {
        self.notes
            .iter()
            .fold(0u16, |acc, pc| acc | (1 << pc.index()))
    }

    /// Whether every note of this candidate belongs to `other` and the two differ
    pub fn is_strict_subset_of(&self, other: &CandidateMatch) -> bool {
        let mine = self.mask();
        let theirs = other.mask();
        mine & theirs == mine && mine != theirs
    }
}

/// Which noise-filter rule decided the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Nothing to filter (empty input or no candidates)
    Skipped,
    /// Subset chords removed in favor of a strongly matched scale
    AntiNoise,
    /// Many candidates; only the top relevant one per category kept
    Contextual,
    /// Top-ranked candidate per category kept
    Default,
}

/// Conditions worth surfacing to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionFlag {
    /// Too few pitch classes to attempt chord matching
    InsufficientNotesForChord,
    /// Too few pitch classes to attempt scale matching
    InsufficientNotesForScale,
    /// No candidate cleared its confidence floor
    NoCandidateAboveThreshold,
    /// Runner-up chord matched with the same confidence as the winner
    AmbiguousChord,
    /// Runner-up scale matched with the same confidence as the winner
    AmbiguousScale,
    /// Some input notes could not be parsed and were skipped
    InvalidNotesSkipped,
}

/// Detection metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionMetadata {
    /// Algorithm version
    pub algorithm_version: String,

    /// Noise-filter rule that fired
    pub filter: FilterKind,

    /// Tonic used for context bonuses
    pub probable_tonic: Option<PitchClass>,

    /// Chord candidates that cleared the floor
    pub chord_candidates: usize,

    /// Scale candidates that cleared the floor
    pub scale_candidates: usize,

    /// Input strings that could not be parsed
    pub rejected_notes: Vec<String>,

    /// Detection flags
    pub flags: Vec<DetectionFlag>,
}

impl Default for DetectionMetadata {
    fn default() -> Self {
        Self {
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: FilterKind::Skipped,
            probable_tonic: None,
            chord_candidates: 0,
            scale_candidates: 0,
            rejected_notes: vec![],
            flags: vec![],
        }
    }
}

/// Complete detection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Best chord, if any
    pub chord: Option<CandidateMatch>,

    /// Best scale, if any
    pub scale: Option<CandidateMatch>,

    /// Normalized input pitch classes
    pub input: Vec<PitchClass>,

    /// A chord or a scale was found
    pub has_detection: bool,

    /// Short justification naming the filter rule that fired
    pub reasoning: String,

    /// Detection metadata
    pub metadata: DetectionMetadata,
}

impl DetectionResult {
    /// Result for input with no valid notes
    pub fn empty() -> Self {
        Self {
            chord: None,
            scale: None,
            input: vec![],
            has_detection: false,
            reasoning: "no input notes".to_string(),
            metadata: DetectionMetadata::default(),
        }
    }

    /// Whether a flag is set
    pub fn has_flag(&self, flag: DetectionFlag) -> bool {
        self.metadata.flags.contains(&flag)
    }

    /// Labels of the chosen chord and scale, e.g. "C Major ✓ / C Major Pentatonic (80%)"
    pub fn summary(&self) -> String {
        let labels: Vec<String> = self
            .chord
            .iter()
            .chain(self.scale.iter())
            .map(CandidateMatch::label)
            .collect();
        if labels.is_empty() {
            "No detection".to_string()
        } else {
            labels.join(" / ")
        }
    }

    /// Input pitch classes explained by the chosen chord or scale, for keyboard highlighting
    pub fn highlighted_pitch_classes(&self) -> Vec<PitchClass> {
        let mut mask = 0u16;
        if let Some(chord) = &self.chord {
            mask |= chord.mask();
        }
        if let Some(scale) = &self.scale {
            mask |= scale.mask();
        }
        self.input
            .iter()
            .copied()
            .filter(|pc| mask & (1 << pc.index()) != 0)
            .collect()
    }
}
