//! Music theory data
//!
//! - Pitch classes and note identifiers
//! - Chord and scale pattern types
//! - Spelled reference tables for all 12 tonics
//! - The validated pattern registry

pub mod pattern;
pub mod pitch;
pub mod registry;
pub mod tables;
