//! Error types for the pattern recognition engine

use std::fmt;

/// Errors that can occur while parsing notes, building the pattern registry or
/// configuring a detector
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionError {
    /// A note string that does not parse to a known pitch class
    InvalidNoteIdentifier(String),

    /// Configuration value out of range
    InvalidConfig(String),

    /// Reference tables failed validation
    InvalidRegistry(String),

    /// Numerical error while scoring a candidate
    NumericalError(String),
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionError::InvalidNoteIdentifier(msg) => {
                write!(f, "Invalid note identifier: {}", msg)
            }
            DetectionError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            DetectionError::InvalidRegistry(msg) => write!(f, "Invalid pattern registry: {}", msg),
            DetectionError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for DetectionError {}
