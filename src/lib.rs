//! # Chordsense
//!
//! A pattern recognition engine for sounding notes: given an unordered set of
//! notes (any octaves, possibly incomplete or noisy), identify the most plausible
//! chord and scale, each with a confidence score and match quality.
//!
//! ## Features
//!
//! - **Fuzzy matching**: every (tonic, pattern type) pair is scored for overlap,
//!   completeness and extraneous notes
//! - **Context ranking**: ties are broken by the first note played and by how
//!   common a tonic and pattern type are
//! - **Noise filtering**: a triad inside a clearly detected scale is suppressed
//!   in favor of the scale
//! - **Caching**: results are cached per pitch-class set with FIFO eviction
//!
//! ## Quick Start
//!
//! ```
//! use chordsense::{detect_notes, DetectionConfig};
//!
//! let result = detect_notes(&["C4", "E4", "G4"], DetectionConfig::default())?;
//!
//! assert!(result.has_detection);
//! println!("{}", result.summary()); // "C Major ✓"
//! # Ok::<(), chordsense::DetectionError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Notes → Normalization → Candidate Scoring → Context Ranking → Noise Filter → Result
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod detector;
pub mod error;
pub mod preprocessing;
pub mod theory;

// Re-export main types
pub use analysis::cache::CacheStats;
pub use analysis::filter::{ContextualNoiseFilter, NoiseFilter, TopRankedFilter};
pub use analysis::result::{
    CandidateMatch, DetectionFlag, DetectionMetadata, DetectionResult, FilterKind,
};
pub use config::{DetectionConfig, MatchMode, NoiseFilterConfig};
pub use detector::Detector;
pub use error::DetectionError;
pub use theory::pattern::{Category, ChordType, PatternKind, ScaleType};
pub use theory::pitch::{NoteId, PitchClass};

/// One-shot detection
///
/// Builds a [`Detector`] for a single call. Keep a `Detector` around instead when
/// detecting repeatedly, so results are cached.
///
/// # Arguments
///
/// * `notes` - Note identifiers such as "C4", "F#5" or "Bb3"
/// * `config` - Detection configuration
///
/// # Errors
///
/// Returns `DetectionError` if the configuration is invalid. Malformed notes are
/// not errors; they are skipped and reported in the result metadata.
///
/// # Example
///
/// ```
/// use chordsense::{detect_notes, DetectionConfig};
///
/// let result = detect_notes(&["C3", "D4", "E5", "F4", "G5", "A4", "B4"], DetectionConfig::default())?;
/// assert_eq!(result.scale.unwrap().name, "C Major");
/// # Ok::<(), chordsense::DetectionError>(())
/// ```
pub fn detect_notes<S: AsRef<str>>(
    notes: &[S],
    config: DetectionConfig,
) -> Result<DetectionResult, DetectionError> {
    let detector = Detector::new(config)?;
    Ok(detector.detect(notes))
}
