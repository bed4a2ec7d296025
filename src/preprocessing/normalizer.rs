//! Pitch-class normalization
//!
//! Strips octave information from note identifiers and deduplicates, producing a
//! canonical, order-independent pitch-class sequence.

use crate::theory::pitch::{NoteId, PitchClass};

/// Normalized view of one batch of sounding notes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedNotes {
    /// Unique pitch classes, sorted by canonical name
    pub pitch_classes: Vec<PitchClass>,

    /// Input strings that did not parse and were skipped
    pub rejected: Vec<String>,
}

impl NormalizedNotes {
    /// Whether no valid note survived normalization
    pub fn is_empty(&self) -> bool {
        self.pitch_classes.is_empty()
    }

    /// Number of distinct pitch classes
    pub fn len(&self) -> usize {
        self.pitch_classes.len()
    }

    /// Bitmask over pitch-class indices
    pub fn mask(&self) -> u16 {
        pitch_class_mask(&self.pitch_classes)
    }

    /// Cache key: sorted, comma-joined pitch-class names
    pub fn cache_key(&self) -> String {
        cache_key(&self.pitch_classes)
    }
}

/// Normalize textual note identifiers ("C4", "F#5", "Bb3").
///
/// Malformed entries are skipped with a warning rather than failing the batch.
/// Empty input yields an empty result.
///
/// # Example
///
/// ```
/// use chordsense::preprocessing::normalizer::normalize;
///
/// let a = normalize(&["G5", "C3", "E4", "C5"]);
/// let b = normalize(&["E2", "G2", "C4"]);
/// assert_eq!(a.pitch_classes, b.pitch_classes);
/// assert_eq!(a.cache_key(), "C,E,G");
/// ```
pub fn normalize<S: AsRef<str>>(notes: &[S]) -> NormalizedNotes {
    let mut parsed = Vec::with_capacity(notes.len());
    let mut rejected = Vec::new();

    for raw in notes {
        let raw = raw.as_ref();
        match NoteId::parse(raw) {
            Ok(note) => parsed.push(note),
            Err(e) => {
                log::warn!("Skipping note '{}': {}", raw, e);
                rejected.push(raw.to_string());
            }
        }
    }

    NormalizedNotes {
        pitch_classes: normalize_note_ids(&parsed),
        rejected,
    }
}

/// Normalize already-parsed notes
pub fn normalize_note_ids(notes: &[NoteId]) -> Vec<PitchClass> {
    let mut mask = 0u16;
    for note in notes {
        mask |= 1 << note.pitch_class.index();
    }
    sorted_from_mask(mask)
}

/// Normalize MIDI note numbers
pub fn normalize_midi(notes: &[u8]) -> Vec<PitchClass> {
    let ids: Vec<NoteId> = notes.iter().map(|&m| NoteId::from_midi(m)).collect();
    normalize_note_ids(&ids)
}

/// Bitmask over pitch-class indices
pub fn pitch_class_mask(pitch_classes: &[PitchClass]) -> u16 {
    pitch_classes
        .iter()
        .fold(0u16, |acc, pc| acc | (1 << pc.index()))
}

/// Sorted, comma-joined pitch-class names
pub fn cache_key(pitch_classes: &[PitchClass]) -> String {
    pitch_classes
        .iter()
        .map(|pc| pc.name())
        .collect::<Vec<_>>()
        .join(",")
}

fn sorted_from_mask(mask: u16) -> Vec<PitchClass> {
    let mut pcs: Vec<PitchClass> = PitchClass::ALL
        .iter()
        .copied()
        .filter(|pc| mask & (1 << pc.index()) != 0)
        .collect();
    pcs.sort_by_key(|pc| pc.name());
    pcs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_octaves_and_dedups() {
        let result = normalize(&["C4", "E4", "G4", "C5", "E3"]);
        assert_eq!(
            result.pitch_classes,
            vec![PitchClass::C, PitchClass::E, PitchClass::G]
        );
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn test_normalize_sorts_lexicographically() {
        let result = normalize(&["C4", "A4", "A#4", "B4"]);
        assert_eq!(result.cache_key(), "A,A#,B,C");
    }

    #[test]
    fn test_normalize_empty() {
        let empty: [&str; 0] = [];
        let result = normalize(&empty);
        assert!(result.is_empty());
        assert_eq!(result.cache_key(), "");
    }

    #[test]
    fn test_normalize_flats_match_sharps() {
        let flats = normalize(&["Db4", "Eb4", "Bb3"]);
        let sharps = normalize(&["C#4", "D#4", "A#3"]);
        assert_eq!(flats.pitch_classes, sharps.pitch_classes);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(&["G3", "Eb4", "C5", "G5"]);
        let names: Vec<&str> = once.pitch_classes.iter().map(|pc| pc.name()).collect();
        let twice = normalize(&names);
        assert_eq!(once.pitch_classes, twice.pitch_classes);
    }

    #[test]
    fn test_normalize_skips_invalid_notes() {
        let result = normalize(&["C4", "garbage", "E4", "", "G4"]);
        assert_eq!(result.len(), 3);
        assert_eq!(result.rejected, vec!["garbage".to_string(), String::new()]);
    }

    #[test]
    fn test_normalize_midi() {
        assert_eq!(
            normalize_midi(&[60, 64, 67, 72]),
            vec![PitchClass::C, PitchClass::E, PitchClass::G]
        );
    }
}
