//! Core data types for detection results

use serde::{Deserialize, Serialize};

/// A named pattern with the reference text used for semantic matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    pub pattern: &'static str,
    pub description: &'static str,
}

/// A single detected pattern with an integer confidence (0-100)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub pattern: String,
    pub confidence: u8,
    pub reason: String,
}

/// Detections ordered by descending confidence, never empty, at most three long.
///
/// The same pattern may appear twice when both the rules and the semantic
/// matcher report it.
pub type RankedDetection = Vec<DetectionResult>;

/// A catalog entry scored against the input text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticHit {
    pub pattern: &'static str,
    pub score: f64, // Jaccard index in [0, 1]
}

impl DetectionResult {
    pub fn new(pattern: impl Into<String>, confidence: u8, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            confidence,
            reason: reason.into(),
        }
    }
}
