//! Detection orchestrator
//!
//! Composes normalization, candidate scoring, context ranking and noise filtering
//! into the public entry point. Each call walks
//! `Idle → Normalizing → Scoring → Filtering → Done`; nothing carries over between
//! calls except the result cache.

use crate::analysis::cache::{CacheStats, ResultCache};
use crate::analysis::candidates::generate_candidates;
use crate::analysis::context::probable_tonic;
use crate::analysis::filter::{ContextualNoiseFilter, NoiseFilter};
use crate::analysis::result::{
    CandidateMatch, DetectionFlag, DetectionMetadata, DetectionResult,
};
use crate::config::DetectionConfig;
use crate::error::DetectionError;
use crate::preprocessing::normalizer::{cache_key, normalize, normalize_midi};
use crate::theory::pattern::{Category, PatternKind};
use crate::theory::pitch::PitchClass;
use crate::theory::registry::PatternRegistry;
use std::fmt;

/// Pipeline stage, used for trace logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStage {
    /// No input yet
    Idle,
    /// Parsing and deduplicating notes
    Normalizing,
    /// Generating and ranking candidates
    Scoring,
    /// Applying the noise filter
    Filtering,
    /// Result assembled
    Done,
}

fn enter(stage: DetectionStage) {
    log::trace!("Detection stage: {:?}", stage);
}

/// Chord and scale detector
///
/// Safe to share between threads; the result cache is internally locked.
///
/// # Example
///
/// ```
/// use chordsense::Detector;
///
/// let detector = Detector::default_engine()?;
/// let result = detector.detect(&["C4", "Eb4", "G4"]);
///
/// let chord = result.chord.expect("C minor triad");
/// assert_eq!(chord.name, "C Minor");
/// assert!(chord.is_exact_match);
/// # Ok::<(), chordsense::DetectionError>(())
/// ```
pub struct Detector {
    config: DetectionConfig,
    registry: &'static PatternRegistry,
    filter: Box<dyn NoiseFilter>,
    cache: ResultCache,
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("config", &self.config)
            .field("filter", &self.filter.name())
            .field("cache", &self.cache.stats())
            .finish()
    }
}

impl Detector {
    /// Create a detector with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::InvalidConfig`] if the configuration fails
    /// validation, or [`DetectionError::InvalidRegistry`] if the built-in pattern
    /// tables are inconsistent.
    pub fn new(config: DetectionConfig) -> Result<Self, DetectionError> {
        config.validate()?;
        let registry = PatternRegistry::global()?;
        let filter = Box::new(ContextualNoiseFilter::new(config.filter.clone()));
        let cache = ResultCache::new(config.cache_capacity);

        log::debug!(
            "Detector ready: mode={:?}, cache capacity={}",
            config.mode,
            config.cache_capacity
        );

        Ok(Self {
            config,
            registry,
            filter,
            cache,
        })
    }

    /// Create a detector with default configuration
    pub fn default_engine() -> Result<Self, DetectionError> {
        Self::new(DetectionConfig::default())
    }

    /// Replace the noise-filter policy. Clears the cache.
    pub fn with_filter<F: NoiseFilter + 'static>(mut self, filter: F) -> Self {
        self.filter = Box::new(filter);
        self.cache.clear();
        self
    }

    /// Active configuration
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect the best chord and scale for textual notes ("C4", "Eb4", ...).
    ///
    /// Malformed notes are skipped and listed in `metadata.rejected_notes`.
    pub fn detect<S: AsRef<str>>(&self, notes: &[S]) -> DetectionResult {
        enter(DetectionStage::Normalizing);
        let normalized = normalize(notes);
        self.run(normalized.pitch_classes, normalized.rejected, None)
    }

    /// Detect using the first note the performer pressed as tonic context.
    ///
    /// The context only applies while that pitch class is still sounding.
    pub fn detect_with_first_note<S: AsRef<str>>(
        &self,
        notes: &[S],
        first_played: PitchClass,
    ) -> DetectionResult {
        enter(DetectionStage::Normalizing);
        let normalized = normalize(notes);
        self.run(normalized.pitch_classes, normalized.rejected, Some(first_played))
    }

    /// Detect from MIDI note numbers
    pub fn detect_midi(&self, notes: &[u8]) -> DetectionResult {
        enter(DetectionStage::Normalizing);
        self.run(normalize_midi(notes), vec![], None)
    }

    /// Detect from pitch classes (any order, duplicates allowed)
    pub fn detect_pitch_classes(&self, pitch_classes: &[PitchClass]) -> DetectionResult {
        enter(DetectionStage::Normalizing);
        let names: Vec<&str> = pitch_classes.iter().map(|pc| pc.name()).collect();
        self.run(normalize(&names).pitch_classes, vec![], None)
    }

    /// Cache size, capacity and hit counters
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached result
    pub fn clear_cache(&self) {
        log::debug!("Clearing detection cache ({} entries)", self.cache.len());
        self.cache.clear();
    }

    fn run(
        &self,
        input: Vec<PitchClass>,
        rejected: Vec<String>,
        first_played: Option<PitchClass>,
    ) -> DetectionResult {
        if input.is_empty() {
            enter(DetectionStage::Done);
            let mut result = DetectionResult::empty();
            attach_rejected(&mut result, rejected);
            return result;
        }

        let context = first_played.filter(|pc| input.contains(pc));
        let key = match context {
            Some(pc) => format!("{}@{}", cache_key(&input), pc),
            None => cache_key(&input),
        };

        let mut result = match self.cache.get(&key) {
            Some(cached) => {
                log::trace!("Cache hit for [{}]", key);
                cached
            }
            None => {
                let computed = self.compute(input, context);
                self.cache.put(key, computed.clone());
                computed
            }
        };

        attach_rejected(&mut result, rejected);
        enter(DetectionStage::Done);
        result
    }

    fn compute(&self, input: Vec<PitchClass>, first_played: Option<PitchClass>) -> DetectionResult {
        enter(DetectionStage::Scoring);
        let tonic = probable_tonic(&input, first_played);

        let chords =
            generate_candidates(self.registry, &input, tonic, Category::Chord, &self.config);
        let scales =
            generate_candidates(self.registry, &input, tonic, Category::Scale, &self.config);

        let mut metadata = DetectionMetadata {
            probable_tonic: Some(tonic),
            chord_candidates: chords.len(),
            scale_candidates: scales.len(),
            ..Default::default()
        };
        if input.len() < self.config.min_chord_notes {
            metadata.flags.push(DetectionFlag::InsufficientNotesForChord);
        }
        if input.len() < self.config.min_scale_notes {
            metadata.flags.push(DetectionFlag::InsufficientNotesForScale);
        }

        let chord_scores = score_summary(&chords);
        let scale_scores = score_summary(&scales);

        enter(DetectionStage::Filtering);
        let outcome = self.filter.filter(chords, scales);
        metadata.filter = outcome.kind;

        let chord = outcome.chords.into_iter().next();
        let scale = outcome.scales.into_iter().next();

        if is_ambiguous(chord.as_ref(), &chord_scores) {
            metadata.flags.push(DetectionFlag::AmbiguousChord);
        }
        if is_ambiguous(scale.as_ref(), &scale_scores) {
            metadata.flags.push(DetectionFlag::AmbiguousScale);
        }

        let has_detection = chord.is_some() || scale.is_some();
        if !has_detection {
            metadata.flags.push(DetectionFlag::NoCandidateAboveThreshold);
        }

        log::debug!(
            "Detected [{}]: chord={}, scale={} ({})",
            cache_key(&input),
            chord.as_ref().map(|c| c.name.as_str()).unwrap_or("-"),
            scale.as_ref().map(|s| s.name.as_str()).unwrap_or("-"),
            outcome.reasoning
        );

        DetectionResult {
            chord,
            scale,
            input,
            has_detection,
            reasoning: outcome.reasoning,
            metadata,
        }
    }
}

/// (tonic, kind, confidence, exact) of every ranked candidate
fn score_summary(candidates: &[CandidateMatch]) -> Vec<(PitchClass, PatternKind, f32, bool)> {
    candidates
        .iter()
        .map(|c| (c.tonic, c.kind, c.confidence, c.is_exact_match))
        .collect()
}

/// Another candidate matched exactly as well as the chosen one
fn is_ambiguous(
    chosen: Option<&CandidateMatch>,
    scores: &[(PitchClass, PatternKind, f32, bool)],
) -> bool {
    let Some(chosen) = chosen else {
        return false;
    };
    scores.iter().any(|&(tonic, kind, confidence, exact)| {
        (tonic, kind) != (chosen.tonic, chosen.kind)
            && exact == chosen.is_exact_match
            && (confidence - chosen.confidence).abs() < 1e-6
    })
}

fn attach_rejected(result: &mut DetectionResult, rejected: Vec<String>) {
    if rejected.is_empty() {
        return;
    }
    result.metadata.flags.push(DetectionFlag::InvalidNotesSkipped);
    result.metadata.rejected_notes = rejected;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter::TopRankedFilter;
    use crate::analysis::result::FilterKind;
    use crate::theory::pattern::{ChordType, ScaleType};

    fn detector() -> Detector {
        Detector::default_engine().unwrap()
    }

    #[test]
    fn test_empty_input_bypasses_scoring() {
        let d = detector();
        let empty: [&str; 0] = [];
        let result = d.detect(&empty);
        assert!(!result.has_detection);
        assert!(result.chord.is_none());
        assert!(result.scale.is_none());
        assert_eq!(d.cache_stats().size, 0);
    }

    #[test]
    fn test_single_note_has_no_detection() {
        let result = detector().detect(&["C4"]);
        assert!(!result.has_detection);
        assert!(result.has_flag(DetectionFlag::InsufficientNotesForChord));
        assert!(result.has_flag(DetectionFlag::NoCandidateAboveThreshold));
    }

    #[test]
    fn test_major_triad() {
        let result = detector().detect(&["C4", "E4", "G4"]);
        let chord = result.chord.unwrap();
        assert_eq!(chord.kind, PatternKind::Chord(ChordType::Major));
        assert_eq!(chord.tonic, PitchClass::C);
        assert!(chord.is_exact_match);
    }

    #[test]
    fn test_invalid_notes_are_skipped() {
        let result = detector().detect(&["C4", "H9", "E4", "G4"]);
        assert_eq!(result.chord.unwrap().name, "C Major");
        assert_eq!(result.metadata.rejected_notes, vec!["H9".to_string()]);
        assert!(
            result.metadata.flags.contains(&DetectionFlag::InvalidNotesSkipped)
        );
    }

    #[test]
    fn test_rejected_notes_not_leaked_through_cache() {
        let d = detector();
        let first = d.detect(&["C4", "??", "E4", "G4"]);
        let second = d.detect(&["C4", "E4", "G4"]);
        assert_eq!(first.metadata.rejected_notes.len(), 1);
        assert!(second.metadata.rejected_notes.is_empty());
        assert!(!second.has_flag(DetectionFlag::InvalidNotesSkipped));
    }

    #[test]
    fn test_cache_hit_on_reordered_input() {
        let d = detector();
        let a = d.detect(&["G4", "C4", "E4"]);
        let b = d.detect(&["E5", "C3", "G2", "C4"]);
        assert_eq!(a, b);
        let stats = d.cache_stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_first_note_context_changes_tonic() {
        let d = detector();
        let plain = d.detect(&["C4", "E4", "G4", "A4"]);
        assert_eq!(plain.chord.unwrap().name, "C 6");

        let from_a = d.detect_with_first_note(&["A3", "C4", "E4", "G4"], PitchClass::A);
        assert_eq!(from_a.chord.unwrap().name, "A Minor 7th");
        assert_eq!(from_a.metadata.probable_tonic, Some(PitchClass::A));
        assert_eq!(d.cache_stats().size, 2);
    }

    #[test]
    fn test_released_first_note_is_ignored() {
        let d = detector();
        let plain = d.detect(&["C4", "E4", "G4", "A4"]);
        let released = d.detect_with_first_note(&["C4", "E4", "G4", "A4"], PitchClass::D);
        assert_eq!(plain, released);
        assert_eq!(d.cache_stats().size, 1);
        assert_eq!(d.cache_stats().hits, 1);
    }

    #[test]
    fn test_midi_and_pitch_class_entry_points() {
        let d = detector();
        let midi = d.detect_midi(&[60, 64, 67]);
        let pcs = d.detect_pitch_classes(&[PitchClass::G, PitchClass::C, PitchClass::E]);
        assert_eq!(midi, pcs);
    }

    #[test]
    fn test_scale_detection() {
        let result = detector().detect(&["C4", "D4", "E4", "F4", "G4", "A4", "B4"]);
        let scale = result.scale.as_ref().unwrap();
        assert_eq!(scale.kind, PatternKind::Scale(ScaleType::Major));
        assert_eq!(scale.tonic, PitchClass::C);
        assert_eq!(result.metadata.filter, FilterKind::AntiNoise);
        assert!(result.has_flag(DetectionFlag::AmbiguousScale));
    }

    #[test]
    fn test_with_filter_swaps_policy() {
        let d = detector().with_filter(TopRankedFilter);
        let result = d.detect(&["C4", "E4", "G4"]);
        assert_eq!(result.metadata.filter, FilterKind::Default);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DetectionConfig {
            scale_floor: -0.1,
            ..Default::default()
        };
        assert!(Detector::new(config).is_err());
    }

    #[test]
    fn test_detector_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Detector>();
    }
}
