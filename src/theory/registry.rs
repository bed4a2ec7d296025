//! Pattern definition registry
//!
//! Turns the spelled reference tables into validated [`PatternDefinition`]s. The
//! registry is built once per process and never mutated afterwards.

use super::pattern::{Category, ChordType, PatternKind, ScaleType};
use super::pitch::PitchClass;
use super::tables::{CHORD_TABLE, SCALE_TABLE};
use crate::error::DetectionError;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static GLOBAL_REGISTRY: Lazy<Result<PatternRegistry, DetectionError>> =
    Lazy::new(|| PatternRegistry::build(CHORD_TABLE, SCALE_TABLE));

/// A chord or scale rooted at a specific tonic
#[derive(Debug, Clone, PartialEq)]
pub struct PatternDefinition {
    /// Root pitch class
    pub tonic: PitchClass,
    /// Chord or scale type
    pub kind: PatternKind,
    spelled: &'static [&'static str],
    pitch_classes: Vec<PitchClass>,
    mask: u16,
}

impl PatternDefinition {
    fn from_spelling(
        tonic: PitchClass,
        kind: PatternKind,
        spelled: &'static [&'static str],
    ) -> Result<Self, DetectionError> {
        if spelled.is_empty() {
            return Err(DetectionError::InvalidRegistry(format!(
                "{} {} has no notes",
                tonic, kind
            )));
        }

        let mut pitch_classes = Vec::with_capacity(spelled.len());
        let mut mask = 0u16;
        for note in spelled {
            let pc = PitchClass::parse(note).map_err(|e| {
                DetectionError::InvalidRegistry(format!("{} {}: {}", tonic, kind, e))
            })?;
            if mask & (1 << pc.index()) != 0 {
                return Err(DetectionError::InvalidRegistry(format!(
                    "{} {} repeats pitch class {}",
                    tonic, kind, pc
                )));
            }
            mask |= 1 << pc.index();
            pitch_classes.push(pc);
        }

        if pitch_classes[0] != tonic {
            return Err(DetectionError::InvalidRegistry(format!(
                "{} {} starts on {} instead of its tonic",
                tonic, kind, spelled[0]
            )));
        }

        Ok(Self {
            tonic,
            kind,
            spelled,
            pitch_classes,
            mask,
        })
    }

    /// Display name in this key's spelling, e.g. "C Major", "Db Major" or "A Minor 7th"
    pub fn name(&self) -> String {
        let root = self.spelled.first().copied().unwrap_or(self.tonic.name());
        format!("{} {}", root, self.kind.display_name())
    }

    /// Definition that skips validation, for exercising degenerate patterns
    #[cfg(test)]
    pub(crate) fn unchecked(
        tonic: PitchClass,
        kind: PatternKind,
        spelled: &'static [&'static str],
    ) -> Self {
        let pitch_classes: Vec<PitchClass> = spelled
            .iter()
            .filter_map(|note| PitchClass::parse(note).ok())
            .collect();
        let mask = pitch_classes
            .iter()
            .fold(0u16, |acc, pc| acc | (1 << pc.index()));
        Self {
            tonic,
            kind,
            spelled,
            pitch_classes,
            mask,
        }
    }

    /// Category of this pattern
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Notes as spelled in this key ("Eb" in C minor, "A#" in F# major)
    pub fn spelled_notes(&self) -> &'static [&'static str] {
        self.spelled
    }

    /// Canonical pitch classes, in pattern order starting from the tonic
    pub fn pitch_classes(&self) -> &[PitchClass] {
        &self.pitch_classes
    }

    /// Number of distinct pitch classes the pattern requires
    pub fn note_count(&self) -> usize {
        self.pitch_classes.len()
    }

    /// Bit `i` is set when pitch class with index `i` belongs to the pattern
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Whether the pattern contains a pitch class
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.mask & (1 << pc.index()) != 0
    }
}

/// All chord and scale definitions for all 12 tonics
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    chords: Vec<PatternDefinition>,
    scales: Vec<PatternDefinition>,
}

impl PatternRegistry {
    /// Shared registry built from the built-in tables.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::InvalidRegistry`] if the built-in tables fail
    /// validation.
    pub fn global() -> Result<&'static PatternRegistry, DetectionError> {
        (*GLOBAL_REGISTRY).as_ref().map_err(Clone::clone)
    }

    /// Build and validate a registry from spelled tables.
    ///
    /// Validation checks that every tonic has exactly one definition for every
    /// pattern type of its category, that every note spelling parses, that each
    /// pattern starts on its tonic and that no pattern repeats a pitch class.
    pub fn build(
        chord_rows: &'static [(PitchClass, ChordType, &'static [&'static str])],
        scale_rows: &'static [(PitchClass, ScaleType, &'static [&'static str])],
    ) -> Result<Self, DetectionError> {
        let chords = chord_rows
            .iter()
            .map(|&(tonic, ty, notes)| PatternDefinition::from_spelling(tonic, ty.into(), notes))
            .collect::<Result<Vec<_>, _>>()?;
        let scales = scale_rows
            .iter()
            .map(|&(tonic, ty, notes)| PatternDefinition::from_spelling(tonic, ty.into(), notes))
            .collect::<Result<Vec<_>, _>>()?;

        check_coverage(&chords, Category::Chord)?;
        check_coverage(&scales, Category::Scale)?;

        log::debug!(
            "Pattern registry loaded: {} chords, {} scales",
            chords.len(),
            scales.len()
        );

        Ok(Self { chords, scales })
    }

    /// Every definition of a category
    pub fn iter_category(&self, category: Category) -> impl Iterator<Item = &PatternDefinition> {
        match category {
            Category::Chord => self.chords.iter(),
            Category::Scale => self.scales.iter(),
        }
    }

    /// Look up a chord by tonic and type
    pub fn chord(&self, tonic: PitchClass, ty: ChordType) -> Option<&PatternDefinition> {
        self.find(tonic, PatternKind::Chord(ty))
    }

    /// Look up a scale by tonic and type
    pub fn scale(&self, tonic: PitchClass, ty: ScaleType) -> Option<&PatternDefinition> {
        self.find(tonic, PatternKind::Scale(ty))
    }

    /// Look up any pattern by tonic and kind
    pub fn find(&self, tonic: PitchClass, kind: PatternKind) -> Option<&PatternDefinition> {
        self.iter_category(kind.category())
            .find(|d| d.tonic == tonic && d.kind == kind)
    }

    /// Number of definitions in a category
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Chord => self.chords.len(),
            Category::Scale => self.scales.len(),
        }
    }
}

fn check_coverage(defs: &[PatternDefinition], category: Category) -> Result<(), DetectionError> {
    let mut seen = HashSet::with_capacity(defs.len());
    for def in defs {
        if def.category() != category {
            return Err(DetectionError::InvalidRegistry(format!(
                "{} listed as a {}",
                def.name(),
                category
            )));
        }
        if def.kind.display_name().is_empty() {
            return Err(DetectionError::InvalidRegistry(format!(
                "{:?} has no display name",
                def.kind
            )));
        }
        if !seen.insert((def.tonic, def.kind)) {
            return Err(DetectionError::InvalidRegistry(format!(
                "duplicate definition for {}",
                def.name()
            )));
        }
    }

    for kind in PatternKind::all_of(category) {
        for tonic in PitchClass::ALL {
            if !seen.contains(&(tonic, kind)) {
                return Err(DetectionError::InvalidRegistry(format!(
                    "missing definition for {} {}",
                    tonic, kind
                )));
            }
        }
    }

    Ok(())
}
