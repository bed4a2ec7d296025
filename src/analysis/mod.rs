//! Candidate analysis modules
//!
//! Turns a normalized pitch-class set into a single chord and scale:
//! - Candidate scoring
//! - Context ranking (popularity, probable tonic)
//! - Candidate generation
//! - Noise filtering
//! - Result types and caching

pub mod cache;
pub mod candidates;
pub mod context;
pub mod filter;
pub mod result;
pub mod scoring;
