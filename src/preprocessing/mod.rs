//! Input preprocessing
//!
//! Converts raw note identifiers into canonical pitch-class sets.

pub mod normalizer;
