//! Candidate scoring
//!
//! Computes a confidence in [0, 1] for how well an input pitch-class set matches a
//! candidate pattern. The same function serves chords and scales; category-specific
//! floors and bonuses are applied by the caller.
//!
//! # Algorithm
//!
//! - `matches`  = input pitch classes present in the candidate
//! - `expected` = candidate size
//! - `extra`    = max(0, |input| - expected)
//! - `missing`  = expected - matches
//!
//! `confidence = max(0, matches / expected - extra * extra_penalty - missing * missing_penalty)`
//!
//! Penalties are small and additive so that a 6-of-7 scale still outscores a
//! 2-of-3 chord, and extra notes degrade the score gradually.

use crate::config::DetectionConfig;
use crate::error::DetectionError;
use crate::preprocessing::normalizer::pitch_class_mask;
use crate::theory::pitch::PitchClass;

/// Penalty weights used by [`score`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Penalty per input note beyond the candidate's size
    pub extra_note_penalty: f32,
    /// Penalty per candidate note absent from the input
    pub missing_note_penalty: f32,
}

impl From<&DetectionConfig> for ScoringWeights {
    fn from(config: &DetectionConfig) -> Self {
        Self {
            extra_note_penalty: config.extra_note_penalty,
            missing_note_penalty: config.missing_note_penalty,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        (&DetectionConfig::default()).into()
    }
}

/// Breakdown of a single score computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Input pitch classes found in the candidate
    pub matches: usize,
    /// Candidate size
    pub expected: usize,
    /// Input notes beyond the candidate's size
    pub extra: usize,
    /// Candidate notes absent from the input
    pub missing: usize,
    /// Final confidence in [0, 1]
    pub confidence: f32,
}

/// Score an input set against a candidate's notes.
///
/// # Errors
///
/// Returns [`DetectionError::NumericalError`] if the candidate has no notes.
pub fn score(
    input: &[PitchClass],
    candidate: &[PitchClass],
    weights: ScoringWeights,
) -> Result<f32, DetectionError> {
    score_masks(pitch_class_mask(input), pitch_class_mask(candidate), weights)
        .map(|b| b.confidence)
}

/// Score using pitch-class bitmasks, returning the full breakdown
pub fn score_masks(
    input_mask: u16,
    candidate_mask: u16,
    weights: ScoringWeights,
) -> Result<ScoreBreakdown, DetectionError> {
    let expected = candidate_mask.count_ones() as usize;
    if expected == 0 {
        return Err(DetectionError::NumericalError(
            "candidate has no notes".to_string(),
        ));
    }

    let input_len = input_mask.count_ones() as usize;
    let matches = (input_mask & candidate_mask).count_ones() as usize;
    let extra = input_len.saturating_sub(expected);
    let missing = expected - matches;

    let base = matches as f32 / expected as f32;
    let penalty =
        extra as f32 * weights.extra_note_penalty + missing as f32 * weights.missing_note_penalty;
    let confidence = (base - penalty).clamp(0.0, 1.0);

    if !confidence.is_finite() {
        return Err(DetectionError::NumericalError(format!(
            "non-finite confidence (base={}, penalty={})",
            base, penalty
        )));
    }

    Ok(ScoreBreakdown {
        matches,
        expected,
        extra,
        missing,
        confidence,
    })
}

/// Whether the input set equals the candidate's pitch-class set
pub fn is_exact_match(input_mask: u16, candidate_mask: u16) -> bool {
    input_mask == candidate_mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use PitchClass::*;

    fn w() -> ScoringWeights {
        ScoringWeights::default()
    }

    #[test]
    fn test_exact_match_scores_one() {
        let s = score(&[C, E, G], &[C, E, G], w()).unwrap();
        assert!((s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_match() {
        // 2 of 3, one missing
        let s = score(&[C, E], &[C, E, G], w()).unwrap();
        assert!((s - (2.0 / 3.0 - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_extra_notes_penalized() {
        let exact = score(&[C, E, G], &[C, E, G], w()).unwrap();
        let noisy = score(&[C, E, G, A], &[C, E, G], w()).unwrap();
        let noisier = score(&[C, E, G, A, D], &[C, E, G], w()).unwrap();
        assert!(noisy < exact);
        assert!(noisier < noisy);
    }

    #[test]
    fn test_six_of_seven_scale_beats_two_of_three_chord() {
        let scale = score(&[C, D, E, F, G, A], &[C, D, E, F, G, A, B], w()).unwrap();
        let chord = score(&[C, E], &[C, E, G], w()).unwrap();
        assert!(scale > chord);
    }

    #[test]
    fn test_floor_at_zero() {
        let s = score(&[CSharp, DSharp, FSharp, GSharp, ASharp], &[C, G], w()).unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_empty_candidate_is_error() {
        assert!(score(&[C], &[], w()).is_err());
    }

    #[test]
    fn test_breakdown() {
        let b = score_masks(
            pitch_class_mask(&[C, E, G, A, B]),
            pitch_class_mask(&[C, E, G]),
            w(),
        )
        .unwrap();
        assert_eq!(b.matches, 3);
        assert_eq!(b.expected, 3);
        assert_eq!(b.extra, 2);
        assert_eq!(b.missing, 0);
        assert!((b.confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_is_exact_match() {
        let a = pitch_class_mask(&[C, E, G]);
        let b = pitch_class_mask(&[G, C, E]);
        assert!(is_exact_match(a, b));
        assert!(!is_exact_match(a, pitch_class_mask(&[C, E])));
    }
}
