//! Example: Detect the chord and scale for notes given on the command line
//!
//! ```text
//! cargo run --example detect_notes -- C4 E4 G4 A4
//! cargo run --example detect_notes -- --first A3 A3 C4 E4 G4
//! ```

use chordsense::{Detector, NoteId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut first_played = None;
    if args.first().map(String::as_str) == Some("--first") {
        if args.len() < 2 {
            return Err("--first needs a note".into());
        }
        let note: NoteId = args[1].parse()?;
        first_played = Some(note.pitch_class);
        args.drain(..2);
    }
    if args.is_empty() {
        args = ["C4", "E4", "G4"].iter().map(|s| s.to_string()).collect();
    }

    let detector = Detector::default_engine()?;
    let result = match first_played {
        Some(pc) => detector.detect_with_first_note(&args, pc),
        None => detector.detect(&args),
    };

    println!("Detection Results:");
    println!("  Input: {}", args.join(" "));
    println!("  Summary: {}", result.summary());
    if let Some(chord) = &result.chord {
        println!(
            "  Chord: {} [{}] (confidence: {:.2}, rank: {:.2})",
            chord.name,
            chord.spelled_notes.join(" "),
            chord.confidence,
            chord.rank_score
        );
    }
    if let Some(scale) = &result.scale {
        println!(
            "  Scale: {} [{}] (confidence: {:.2}, rank: {:.2})",
            scale.name,
            scale.spelled_notes.join(" "),
            scale.confidence,
            scale.rank_score
        );
    }
    println!("  Filter: {:?} ({})", result.metadata.filter, result.reasoning);
    if !result.metadata.flags.is_empty() {
        println!("  Flags: {:?}", result.metadata.flags);
    }
    if !result.metadata.rejected_notes.is_empty() {
        println!("  Skipped: {}", result.metadata.rejected_notes.join(", "));
    }

    Ok(())
}
