//! Candidate generation and ranking
//!
//! Enumerates every (tonic, pattern type) pair of a category, scores it against the
//! input and ranks the survivors:
//!
//! `rank = confidence + exact_bonus + tonic_bonus + popularity_weight * popularity`
//!
//! Chords sort by rank. Scales sort by specificity first and rank second, so a
//! fully matched 7-note scale is not displaced by a pentatonic subset that only
//! wins on popularity.

use super::context::popularity_score;
use super::result::CandidateMatch;
use super::scoring::{is_exact_match, score_masks, ScoringWeights};
use crate::config::{DetectionConfig, MatchMode};
use crate::preprocessing::normalizer::pitch_class_mask;
use crate::theory::pattern::Category;
use crate::theory::pitch::PitchClass;
use crate::theory::registry::{PatternDefinition, PatternRegistry};
use std::cmp::Ordering;

/// Generate ranked candidates for one category.
///
/// Returns an empty list when the input has fewer pitch classes than the
/// category minimum. A candidate whose scoring fails is logged and excluded;
/// the remaining candidates are still evaluated.
pub fn generate_candidates(
    registry: &PatternRegistry,
    input: &[PitchClass],
    probable_tonic: PitchClass,
    category: Category,
    config: &DetectionConfig,
) -> Vec<CandidateMatch> {
    generate_from(
        registry.iter_category(category),
        input,
        probable_tonic,
        category,
        config,
    )
}

/// Generate ranked candidates from an explicit set of definitions.
///
/// Same rules as [`generate_candidates`]; definitions of other categories are
/// ignored.
pub fn generate_from<'a, I>(
    definitions: I,
    input: &[PitchClass],
    probable_tonic: PitchClass,
    category: Category,
    config: &DetectionConfig,
) -> Vec<CandidateMatch>
where
    I: IntoIterator<Item = &'a PatternDefinition>,
{
    let (min_notes, floor, relevance) = match category {
        Category::Chord => (config.min_chord_notes, config.chord_floor, config.chord_relevance),
        Category::Scale => (config.min_scale_notes, config.scale_floor, config.scale_relevance),
    };

    if input.len() < min_notes {
        log::debug!(
            "Skipping {} matching: {} pitch classes, need {}",
            category,
            input.len(),
            min_notes
        );
        return vec![];
    }

    let input_mask = pitch_class_mask(input);
    let weights = ScoringWeights::from(config);
    let mut candidates = Vec::new();

    for def in definitions.into_iter().filter(|d| d.category() == category) {
        let breakdown = match score_masks(input_mask, def.mask(), weights) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("Excluding candidate {}: {}", def.name(), e);
                continue;
            }
        };

        let exact = is_exact_match(input_mask, def.mask());
        let accepted = match config.mode {
            MatchMode::Exploratory => breakdown.confidence >= floor,
            MatchMode::ExactOnly => exact,
        };
        if !accepted {
            continue;
        }

        candidates.push(build_candidate(
            def,
            breakdown.confidence,
            exact,
            probable_tonic,
            relevance,
            config,
        ));
    }

    rank_candidates(&mut candidates, category);

    log::debug!(
        "{} {} candidates above floor {:.2} (probable tonic {})",
        candidates.len(),
        category,
        floor,
        probable_tonic
    );
    if let Some(top) = candidates.first() {
        log::trace!(
            "Top {}: {} conf={:.3} rank={:.3}",
            category,
            top.name,
            top.confidence,
            top.rank_score
        );
    }

    candidates
}

fn build_candidate(
    def: &PatternDefinition,
    confidence: f32,
    exact: bool,
    probable_tonic: PitchClass,
    relevance: f32,
    config: &DetectionConfig,
) -> CandidateMatch {
    let popularity = popularity_score(def.tonic, def.kind);

    let mut rank_score = confidence + config.popularity_weight * popularity;
    if exact {
        rank_score += config.exact_match_bonus;
    }
    if def.tonic == probable_tonic {
        rank_score += config.tonic_context_bonus;
    }

    CandidateMatch {
        tonic: def.tonic,
        kind: def.kind,
        name: def.name(),
        notes: def.pitch_classes().to_vec(),
        spelled_notes: def.spelled_notes().iter().map(|s| s.to_string()).collect(),
        confidence,
        rank_score,
        specificity: def.note_count(),
        popularity,
        is_exact_match: exact,
        is_relevant: confidence >= relevance,
    }
}

/// Sort candidates best-first.
///
/// Ties fall back to tonic and pattern order so results are deterministic.
pub fn rank_candidates(candidates: &mut [CandidateMatch], category: Category) {
    candidates.sort_by(|a, b| {
        let primary = match category {
            Category::Chord => Ordering::Equal,
            Category::Scale => b.specificity.cmp(&a.specificity),
        };
        primary
            .then_with(|| b.rank_score.total_cmp(&a.rank_score))
            .then_with(|| a.tonic.cmp(&b.tonic))
            .then_with(|| a.kind.cmp(&b.kind))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::pattern::{ChordType, PatternKind, ScaleType};
    use PitchClass::*;

    fn registry() -> &'static PatternRegistry {
        PatternRegistry::global().unwrap()
    }

    #[test]
    fn test_chords_need_two_notes() {
        let config = DetectionConfig::default();
        let chords = generate_candidates(registry(), &[C], C, Category::Chord, &config);
        assert!(chords.is_empty());
    }

    #[test]
    fn test_scales_need_three_notes() {
        let config = DetectionConfig::default();
        let scales = generate_candidates(registry(), &[C, G], C, Category::Scale, &config);
        assert!(scales.is_empty());
    }

    #[test]
    fn test_exact_triad_ranks_first() {
        let config = DetectionConfig::default();
        let chords = generate_candidates(registry(), &[C, E, G], C, Category::Chord, &config);
        let top = &chords[0];
        assert_eq!(top.kind, PatternKind::Chord(ChordType::Major));
        assert_eq!(top.tonic, C);
        assert!(top.is_exact_match);
        assert!((top.confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_floor_applied() {
        let config = DetectionConfig::default();
        let chords = generate_candidates(registry(), &[C, E, G], C, Category::Chord, &config);
        assert!(chords.iter().all(|c| c.confidence >= config.chord_floor));
    }

    #[test]
    fn test_exact_only_mode() {
        let config = DetectionConfig::exact_only();
        let chords = generate_candidates(registry(), &[C, E, G], C, Category::Chord, &config);
        assert_eq!(chords.len(), 1);
        assert!(chords[0].is_exact_match);
    }

    #[test]
    fn test_tonic_bonus_breaks_relative_mode_tie() {
        // C major and A natural minor share the same notes
        let config = DetectionConfig::default();
        let input = [A, B, C, D, E, F, G];

        let scales = generate_candidates(registry(), &input, A, Category::Scale, &config);
        assert_eq!(scales[0].tonic, A);
        assert_eq!(scales[0].kind, PatternKind::Scale(ScaleType::NaturalMinor));

        let scales = generate_candidates(registry(), &input, C, Category::Scale, &config);
        assert_eq!(scales[0].tonic, C);
        assert_eq!(scales[0].kind, PatternKind::Scale(ScaleType::Major));
    }

    #[test]
    fn test_scale_specificity_dominates_rank() {
        let mut scales = vec![
            CandidateMatch {
                tonic: C,
                kind: ScaleType::MajorPentatonic.into(),
                name: "C Major Pentatonic".to_string(),
                notes: vec![C, D, E, G, A],
                spelled_notes: vec![],
                confidence: 1.0,
                rank_score: 1.4,
                specificity: 5,
                popularity: 1.0,
                is_exact_match: true,
                is_relevant: true,
            },
            CandidateMatch {
                tonic: C,
                kind: ScaleType::Major.into(),
                name: "C Major".to_string(),
                notes: vec![C, D, E, F, G, A, B],
                spelled_notes: vec![],
                confidence: 0.7,
                rank_score: 0.9,
                specificity: 7,
                popularity: 1.0,
                is_exact_match: false,
                is_relevant: true,
            },
        ];
        rank_candidates(&mut scales, Category::Scale);
        assert_eq!(scales[0].specificity, 7);

        rank_candidates(&mut scales, Category::Chord);
        assert_eq!(scales[0].specificity, 5);
    }

    #[test]
    fn test_unscorable_definition_is_excluded_alone() {
        let config = DetectionConfig::default();
        let empty = PatternDefinition::unchecked(C, ChordType::Major.into(), &[]);
        let defs: Vec<&PatternDefinition> = vec![
            registry().chord(A, ChordType::Minor).unwrap(),
            &empty,
            registry().chord(C, ChordType::Major).unwrap(),
        ];

        let chords = generate_from(defs, &[C, E, G], C, Category::Chord, &config);
        assert_eq!(chords.len(), 2);
        assert_eq!(chords[0].name, "C Major");
        assert!(chords[0].is_exact_match);
        assert_eq!(chords[1].name, "A Minor");
        assert!(chords.iter().all(|c| !c.notes.is_empty()));
    }

    #[test]
    fn test_generate_from_ignores_other_category() {
        let config = DetectionConfig::default();
        let defs = [
            registry().scale(C, ScaleType::Major).unwrap(),
            registry().chord(C, ChordType::Major).unwrap(),
        ];
        let chords = generate_from(defs, &[C, E, G], C, Category::Chord, &config);
        assert_eq!(chords.len(), 1);
        assert_eq!(chords[0].kind, PatternKind::Chord(ChordType::Major));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = DetectionConfig::default();
        let a = generate_candidates(registry(), &[C, E, G, A], C, Category::Chord, &config);
        let b = generate_candidates(registry(), &[C, E, G, A], C, Category::Chord, &config);
        assert_eq!(a, b);
    }
}
