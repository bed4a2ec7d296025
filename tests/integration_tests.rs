//! Integration tests for the chord and scale detection engine

use chordsense::{
    ChordType, DetectionConfig, DetectionFlag, Detector, FilterKind, PatternKind, PitchClass,
    ScaleType,
};

fn detector() -> Detector {
    Detector::default_engine().expect("default detector should build")
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_c_major_triad() {
        let result = detector().detect(&["C4", "E4", "G4"]);

        let chord = result.chord.as_ref().expect("chord expected");
        assert_eq!(chord.name, "C Major");
        assert!(chord.is_exact_match);
        assert!((chord.confidence - 1.0).abs() < 1e-6);
        assert_eq!(chord.label(), "C Major ✓");

        // Only pentatonic-sized scales come near a bare triad; none is relevant
        assert!(result.scale.is_none());
        assert!(result.has_detection);
        assert_eq!(result.metadata.filter, FilterKind::Contextual);
    }

    #[test]
    fn test_c_major_scale_across_octaves() {
        let result = detector().detect(&["C3", "D4", "E5", "F4", "G5", "A4", "B4"]);

        let scale = result.scale.as_ref().expect("scale expected");
        assert_eq!(scale.name, "C Major");
        assert_eq!(scale.kind, PatternKind::Scale(ScaleType::Major));
        assert!(scale.is_exact_match);

        // Subset triads are suppressed as noise; only complex chords may remain
        assert_eq!(result.metadata.filter, FilterKind::AntiNoise);
        if let Some(chord) = &result.chord {
            assert!(chord.specificity >= 4, "unexpected subset chord {}", chord.name);
        }
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        let result = detector().detect(&empty);
        assert!(result.chord.is_none());
        assert!(result.scale.is_none());
        assert!(!result.has_detection);
        assert!(result.input.is_empty());
    }

    #[test]
    fn test_c_minor_with_flat_spelling() {
        let result = detector().detect(&["C4", "Eb4", "G4"]);

        let chord = result.chord.as_ref().expect("chord expected");
        assert_eq!(chord.name, "C Minor");
        assert!(chord.is_exact_match);
        assert!((chord.confidence - 1.0).abs() < 1e-6);
        assert_eq!(chord.spelled_notes, vec!["C", "Eb", "G"]);
    }

    #[test]
    fn test_c6_am7_ambiguity_resolved_by_popularity() {
        // Same four pitch classes as A minor 7th; C is the more popular tonic
        let result = detector().detect(&["C4", "E4", "G4", "A4"]);

        let chord = result.chord.as_ref().expect("chord expected");
        assert_eq!(chord.tonic, PitchClass::C);
        assert_eq!(chord.kind, PatternKind::Chord(ChordType::Major6));
        assert_eq!(chord.name, "C 6");
        assert!(chord.is_exact_match);
        assert!(result.has_flag(DetectionFlag::AmbiguousChord));
        assert_eq!(result.metadata.probable_tonic, Some(PitchClass::C));
    }

    #[test]
    fn test_first_played_note_resolves_ambiguity() {
        let result = detector().detect_with_first_note(&["A3", "C4", "E4", "G4"], PitchClass::A);
        let chord = result.chord.expect("chord expected");
        assert_eq!(chord.kind, PatternKind::Chord(ChordType::Minor7));
        assert_eq!(chord.tonic, PitchClass::A);
    }

    #[test]
    fn test_dominant_seventh() {
        let result = detector().detect(&["G2", "B3", "D4", "F4"]);
        let chord = result.chord.expect("chord expected");
        assert_eq!(chord.name, "G Dominant 7th");
        assert!(chord.is_exact_match);
    }

    #[test]
    fn test_sharp_key_keeps_idiomatic_spelling() {
        let result = detector().detect(&["F#3", "A#3", "C#4"]);
        let chord = result.chord.expect("chord expected");
        assert_eq!(chord.name, "F# Major");
        assert_eq!(chord.spelled_notes, vec!["F#", "A#", "C#"]);
    }

    #[test]
    fn test_passing_tone_still_detects_chord() {
        // C major with a passing D
        let result = detector().detect(&["C4", "D4", "E4", "G4"]);
        assert!(result.has_detection);
        let chord = result.chord.expect("chord expected");
        assert!(chord.confidence > 0.0 && chord.confidence <= 1.0);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use chordsense::analysis::scoring::{score, ScoringWeights};
    use chordsense::preprocessing::normalizer::normalize;

    const SCALE: [&str; 7] = ["C3", "D4", "E5", "F4", "G5", "A4", "B4"];

    #[test]
    fn test_normalization_order_and_octave_insensitive() {
        let base = normalize(&["C4", "E4", "G4"]);
        let permutations: [&[&str]; 4] = [
            &["G4", "E4", "C4"],
            &["E2", "C6", "G1"],
            &["C4", "C5", "E4", "G4", "G5"],
            &["G3", "C3", "E3", "E4"],
        ];
        for notes in permutations {
            assert_eq!(normalize(notes).pitch_classes, base.pitch_classes);
        }
    }

    #[test]
    fn test_exact_match_outranks_same_confidence_non_exact() {
        let result = detector().detect(&["D4", "F4", "A4"]);
        let chord = result.chord.expect("chord expected");
        assert!(chord.is_exact_match);
        assert_eq!(chord.name, "D Minor");
    }

    #[test]
    fn test_confidence_monotonic_in_extra_notes() {
        use PitchClass::*;
        let triad = [C, E, G];
        let weights = ScoringWeights::default();
        let mut input = vec![C, E, G];
        let mut previous = score(&input, &triad, weights).unwrap();

        for extra in [CSharp, FSharp, ASharp, DSharp] {
            input.push(extra);
            let next = score(&input, &triad, weights).unwrap();
            assert!(next <= previous, "adding {} raised confidence", extra);
            previous = next;
        }
    }

    #[test]
    fn test_scale_specificity_dominates() {
        // All of C D E G A: the 7-note C major (partial) outranks the exact pentatonic
        let result = detector().detect(&["C4", "D4", "E4", "G4", "A4"]);
        let scale = result.scale.as_ref().expect("scale expected");
        assert_eq!(scale.specificity, 7);
        // The reasoning names the scale actually reported
        assert!(result.reasoning.contains(&scale.name), "{}", result.reasoning);
    }

    #[test]
    fn test_redetection_is_bit_identical() {
        let d = detector();
        let first = d.detect(&SCALE);
        let mut reversed = SCALE;
        reversed.reverse();
        let second = d.detect(&reversed);
        assert_eq!(first, second);

        let fresh = detector().detect(&reversed);
        assert_eq!(first, fresh);
    }

    #[test]
    fn test_cache_transparency() {
        let d = detector();
        let before = d.detect(&SCALE);
        assert_eq!(d.cache_stats().size, 1);

        d.clear_cache();
        assert_eq!(d.cache_stats().size, 0);

        let after = d.detect(&SCALE);
        assert_eq!(before, after);
    }

    #[test]
    fn test_cache_capacity_respected() {
        let config = DetectionConfig {
            cache_capacity: 3,
            ..Default::default()
        };
        let d = Detector::new(config).unwrap();
        let chords: [&[&str]; 5] = [
            &["C4", "E4", "G4"],
            &["D4", "F#4", "A4"],
            &["E4", "G#4", "B4"],
            &["F4", "A4", "C5"],
            &["G4", "B4", "D5"],
        ];
        for notes in chords {
            d.detect(notes);
        }
        let stats = d.cache_stats();
        assert_eq!(stats.size, 3);
        assert_eq!(stats.capacity, 3);
    }

    #[test]
    fn test_concurrent_detection_matches_serial() {
        let d = detector();
        let inputs: Vec<Vec<&str>> = vec![
            vec!["C4", "E4", "G4"],
            vec!["A3", "C4", "E4"],
            vec!["C4", "E4", "G4", "A4"],
            SCALE.to_vec(),
        ];
        let serial: Vec<_> = inputs.iter().map(|n| detector().detect(n)).collect();

        std::thread::scope(|s| {
            for _ in 0..4 {
                let d = &d;
                let inputs = &inputs;
                let serial = &serial;
                s.spawn(move || {
                    for _ in 0..25 {
                        for (notes, expected) in inputs.iter().zip(serial.iter()) {
                            assert_eq!(&d.detect(notes), expected);
                        }
                    }
                });
            }
        });

        let stats = d.cache_stats();
        assert!(stats.size <= inputs.len());
    }

    #[test]
    fn test_exact_only_mode() {
        let d = Detector::new(DetectionConfig::exact_only()).unwrap();

        let exact = d.detect(&["C4", "E4", "G4"]);
        assert!(exact.chord.expect("chord expected").is_exact_match);

        let noisy = d.detect(&["C4", "E4", "G4", "C#4"]);
        assert!(noisy.chord.is_none());
    }

    #[test]
    fn test_result_serializes() {
        let result = detector().detect(&["C4", "E4", "G4"]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"C Major\""));
        let back: chordsense::DetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
