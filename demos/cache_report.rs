//! Example: Run a short progression through one detector and report cache usage

use chordsense::{DetectionConfig, Detector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DetectionConfig {
        cache_capacity: 4,
        ..Default::default()
    };
    let detector = Detector::new(config)?;

    // I - vi - IV - V, played twice with different voicings
    let progression: [&[&str]; 8] = [
        &["C4", "E4", "G4"],
        &["A3", "C4", "E4"],
        &["F3", "A3", "C4"],
        &["G3", "B3", "D4"],
        &["E4", "G4", "C5"],
        &["C4", "E4", "A4"],
        &["C4", "F4", "A4"],
        &["D4", "G4", "B4"],
    ];

    for notes in progression {
        let result = detector.detect(notes);
        println!("{:<16} -> {}", notes.join(" "), result.summary());
    }

    let stats = detector.cache_stats();
    println!();
    println!("Cache:");
    println!("  Entries: {}/{}", stats.size, stats.capacity);
    println!("  Hits: {}", stats.hits);
    println!("  Misses: {}", stats.misses);

    println!();
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
