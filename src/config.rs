//! Configuration parameters for chord and scale detection
//!
//! The scoring weights are empirically tuned. They are exposed here as named
//! defaults so callers can adjust them without touching the pipeline.

use crate::error::DetectionError;
use serde::{Deserialize, Serialize};

/// Confidence lost per input note beyond the candidate's size
pub const DEFAULT_EXTRA_NOTE_PENALTY: f32 = 0.1;
/// Confidence lost per candidate note absent from the input
pub const DEFAULT_MISSING_NOTE_PENALTY: f32 = 0.05;
/// Rank bonus for a candidate whose notes equal the input set
pub const DEFAULT_EXACT_MATCH_BONUS: f32 = 0.2;
/// Rank bonus for a candidate rooted on the probable tonic
pub const DEFAULT_TONIC_CONTEXT_BONUS: f32 = 0.1;
/// Weight applied to the popularity score when ranking
pub const DEFAULT_POPULARITY_WEIGHT: f32 = 0.1;
/// Minimum confidence for a chord candidate
pub const DEFAULT_CHORD_FLOOR: f32 = 0.4;
/// Minimum confidence for a scale candidate
pub const DEFAULT_SCALE_FLOOR: f32 = 0.3;
/// Minimum distinct pitch classes before chords are attempted
pub const DEFAULT_MIN_CHORD_NOTES: usize = 2;
/// Minimum distinct pitch classes before scales are attempted
pub const DEFAULT_MIN_SCALE_NOTES: usize = 3;
/// Confidence at which a chord candidate counts as relevant
pub const DEFAULT_CHORD_RELEVANCE: f32 = 0.7;
/// Confidence at which a scale candidate counts as relevant
pub const DEFAULT_SCALE_RELEVANCE: f32 = 0.6;
/// Maximum result cache entries
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// How strictly candidates must match the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Fuzzy matching with confidence floors
    Exploratory,
    /// Only candidates whose notes equal the input set survive scoring
    ExactOnly,
}

/// Thresholds for the noise filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseFilterConfig {
    /// Minimum scale size that can suppress subset chords (default: 5)
    pub anti_noise_min_scale_notes: usize,

    /// Minimum scale confidence that can suppress subset chords (default: 0.7)
    pub anti_noise_min_scale_confidence: f32,

    /// Chords with at least this many notes are never suppressed as noise (default: 4)
    pub complex_chord_notes: usize,

    /// Chords at or above this confidence are never suppressed as noise (default: 0.8)
    pub independent_chord_confidence: f32,

    /// Contextual filtering kicks in above this many chord candidates (default: 3)
    pub contextual_chord_limit: usize,

    /// Contextual filtering kicks in above this many scale candidates (default: 2)
    pub contextual_scale_limit: usize,
}

impl Default for NoiseFilterConfig {
    fn default() -> Self {
        Self {
            anti_noise_min_scale_notes: 5,
            anti_noise_min_scale_confidence: 0.7,
            complex_chord_notes: 4,
            independent_chord_confidence: 0.8,
            contextual_chord_limit: 3,
            contextual_scale_limit: 2,
        }
    }
}

/// Detection configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Fuzzy or exact matching (default: Exploratory)
    pub mode: MatchMode,

    // Scoring
    /// Penalty per unexplained input note (default: 0.1)
    pub extra_note_penalty: f32,

    /// Penalty per expected note missing from the input (default: 0.05)
    pub missing_note_penalty: f32,

    // Ranking
    /// Rank bonus for exact matches (default: 0.2)
    pub exact_match_bonus: f32,

    /// Rank bonus for candidates rooted on the probable tonic (default: 0.1)
    pub tonic_context_bonus: f32,

    /// Weight of the popularity score in the rank (default: 0.1)
    pub popularity_weight: f32,

    // Floors
    /// Chord confidence floor (default: 0.4)
    pub chord_floor: f32,

    /// Scale confidence floor (default: 0.3)
    pub scale_floor: f32,

    /// Minimum distinct input notes to attempt chords (default: 2)
    pub min_chord_notes: usize,

    /// Minimum distinct input notes to attempt scales (default: 3)
    pub min_scale_notes: usize,

    // Relevance
    /// Chord relevance threshold (default: 0.7)
    pub chord_relevance: f32,

    /// Scale relevance threshold (default: 0.6)
    pub scale_relevance: f32,

    /// Noise filter thresholds
    pub filter: NoiseFilterConfig,

    /// Result cache capacity; 0 disables caching (default: 100)
    pub cache_capacity: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Exploratory,
            extra_note_penalty: DEFAULT_EXTRA_NOTE_PENALTY,
            missing_note_penalty: DEFAULT_MISSING_NOTE_PENALTY,
            exact_match_bonus: DEFAULT_EXACT_MATCH_BONUS,
            tonic_context_bonus: DEFAULT_TONIC_CONTEXT_BONUS,
            popularity_weight: DEFAULT_POPULARITY_WEIGHT,
            chord_floor: DEFAULT_CHORD_FLOOR,
            scale_floor: DEFAULT_SCALE_FLOOR,
            min_chord_notes: DEFAULT_MIN_CHORD_NOTES,
            min_scale_notes: DEFAULT_MIN_SCALE_NOTES,
            chord_relevance: DEFAULT_CHORD_RELEVANCE,
            scale_relevance: DEFAULT_SCALE_RELEVANCE,
            filter: NoiseFilterConfig::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl DetectionConfig {
    /// Configuration that only reports exact matches
    pub fn exact_only() -> Self {
        Self {
            mode: MatchMode::ExactOnly,
            ..Default::default()
        }
    }

    /// Check that every weight and threshold is in range.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), DetectionError> {
        let unit_fields = [
            ("extra_note_penalty", self.extra_note_penalty),
            ("missing_note_penalty", self.missing_note_penalty),
            ("exact_match_bonus", self.exact_match_bonus),
            ("tonic_context_bonus", self.tonic_context_bonus),
            ("popularity_weight", self.popularity_weight),
            ("chord_floor", self.chord_floor),
            ("scale_floor", self.scale_floor),
            ("chord_relevance", self.chord_relevance),
            ("scale_relevance", self.scale_relevance),
            (
                "filter.anti_noise_min_scale_confidence",
                self.filter.anti_noise_min_scale_confidence,
            ),
            (
                "filter.independent_chord_confidence",
                self.filter.independent_chord_confidence,
            ),
        ];
        for (name, value) in unit_fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DetectionError::InvalidConfig(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.min_chord_notes == 0 || self.min_scale_notes == 0 {
            return Err(DetectionError::InvalidConfig(
                "minimum note counts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
