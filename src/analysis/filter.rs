//! Noise filtering
//!
//! When several plausible interpretations survive ranking, the filter decides
//! which single chord and single scale to report. The policy is pluggable through
//! the [`NoiseFilter`] trait.
//!
//! [`ContextualNoiseFilter`] applies the first matching rule:
//!
//! 1. **Anti-noise**: a strongly matched scale (5+ notes, confidence >= 0.7)
//!    suppresses chords that are strict subsets of it, unless the chord is complex
//!    (4+ notes) or independently strong (confidence >= 0.8).
//! 2. **Contextual**: with many candidates (> 3 chords or > 2 scales), keep only
//!    the top relevant candidate per category.
//! 3. **Default**: keep the top-ranked candidate per category.

use super::result::{CandidateMatch, FilterKind};
use crate::config::NoiseFilterConfig;

/// Output of a noise filter: at most one chord and one scale
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Surviving chord candidates (0 or 1)
    pub chords: Vec<CandidateMatch>,
    /// Surviving scale candidates (0 or 1)
    pub scales: Vec<CandidateMatch>,
    /// Rule that fired
    pub kind: FilterKind,
    /// Human-readable justification
    pub reasoning: String,
}

/// Policy choosing the reported chord and scale from ranked candidates
pub trait NoiseFilter: Send + Sync {
    /// Filter ranked (best-first) candidate lists.
    ///
    /// Implementations must return at most one chord and one scale.
    fn filter(&self, chords: Vec<CandidateMatch>, scales: Vec<CandidateMatch>) -> FilterOutcome;

    /// Short policy name for logs
    fn name(&self) -> &'static str;
}

/// Rule-based filter: anti-noise, then contextual, then default
#[derive(Debug, Clone, Default)]
pub struct ContextualNoiseFilter {
    config: NoiseFilterConfig,
}

impl ContextualNoiseFilter {
    /// Create a filter with the given thresholds
    pub fn new(config: NoiseFilterConfig) -> Self {
        Self { config }
    }

    /// Drop subset chords of the anchor scale; returns the anchor name and drop count
    fn anti_noise(
        &self,
        chords: &mut Vec<CandidateMatch>,
        scales: &[CandidateMatch],
    ) -> Option<(String, usize)> {
        let anchor = scales.iter().find(|s| {
            s.specificity >= self.config.anti_noise_min_scale_notes
                && s.confidence >= self.config.anti_noise_min_scale_confidence
        })?;

        let before = chords.len();
        chords.retain(|chord| {
            let is_noise = chord.is_strict_subset_of(anchor)
                && chord.specificity < self.config.complex_chord_notes
                && chord.confidence < self.config.independent_chord_confidence;
            if is_noise {
                log::trace!("Anti-noise: dropping {} (inside {})", chord.name, anchor.name);
            }
            !is_noise
        });

        Some((anchor.name.clone(), before - chords.len()))
    }

    fn is_crowded(&self, chords: &[CandidateMatch], scales: &[CandidateMatch]) -> bool {
        chords.len() > self.config.contextual_chord_limit
            || scales.len() > self.config.contextual_scale_limit
    }
}

impl NoiseFilter for ContextualNoiseFilter {
    fn filter(
        &self,
        mut chords: Vec<CandidateMatch>,
        mut scales: Vec<CandidateMatch>,
    ) -> FilterOutcome {
        if chords.is_empty() && scales.is_empty() {
            return FilterOutcome {
                chords,
                scales,
                kind: FilterKind::Skipped,
                reasoning: "no candidates above threshold".to_string(),
            };
        }

        if let Some((anchor, dropped)) = self.anti_noise(&mut chords, &scales) {
            chords.truncate(1);
            scales.truncate(1);
            // The anchor need not be the reported scale when a wider scale ranks first
            let reasoning = match scales.first() {
                Some(top) if top.name != anchor => format!(
                    "anti-noise: {} reported; anchor {} dropped {} subset chord(s)",
                    top.name, anchor, dropped
                ),
                _ => format!("anti-noise: {} dropped {} subset chord(s)", anchor, dropped),
            };
            return FilterOutcome {
                chords,
                scales,
                kind: FilterKind::AntiNoise,
                reasoning,
            };
        }

        if self.is_crowded(&chords, &scales) {
            let reasoning = format!(
                "contextual: {} chords, {} scales; kept top relevant",
                chords.len(),
                scales.len()
            );
            return FilterOutcome {
                chords: top_relevant(chords),
                scales: top_relevant(scales),
                kind: FilterKind::Contextual,
                reasoning,
            };
        }

        top_ranked(chords, scales)
    }

    fn name(&self) -> &'static str {
        "contextual"
    }
}

/// Filter that only keeps the top-ranked candidate per category
#[derive(Debug, Clone, Copy, Default)]
pub struct TopRankedFilter;

impl NoiseFilter for TopRankedFilter {
    fn filter(&self, chords: Vec<CandidateMatch>, scales: Vec<CandidateMatch>) -> FilterOutcome {
        if chords.is_empty() && scales.is_empty() {
            return FilterOutcome {
                chords,
                scales,
                kind: FilterKind::Skipped,
                reasoning: "no candidates above threshold".to_string(),
            };
        }
        top_ranked(chords, scales)
    }

    fn name(&self) -> &'static str {
        "top-ranked"
    }
}

fn top_relevant(candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
    candidates.into_iter().filter(|c| c.is_relevant).take(1).collect()
}

fn top_ranked(mut chords: Vec<CandidateMatch>, mut scales: Vec<CandidateMatch>) -> FilterOutcome {
    chords.truncate(1);
    scales.truncate(1);
    FilterOutcome {
        chords,
        scales,
        kind: FilterKind::Default,
        reasoning: "default: top-ranked candidate per category".to_string(),
    }
}
