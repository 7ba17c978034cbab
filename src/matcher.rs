//! Ranked detector - merges rule-based and semantic detections

use crate::rules::match_rules;
use crate::similarity::semantic_match;
use crate::types::{DetectionResult, RankedDetection, SemanticHit};

/// Maximum number of detections returned by `detect`
pub const MAX_RESULTS: usize = 3;

/// Confidence floor and span for semantic detections
pub const SEMANTIC_BASE_CONFIDENCE: f64 = 60.0;
pub const SEMANTIC_CONFIDENCE_SPAN: f64 = 40.0;

pub const SEMANTIC_REASON: &str =
    "Detected using semantic similarity between the problem description and known pattern definitions.";

pub const FALLBACK_PATTERN: &str = "Unclear";
pub const FALLBACK_CONFIDENCE: u8 = 40;
pub const FALLBACK_REASON: &str = "The description does not strongly match known DSA patterns.";

/// Map a similarity score in [0, 1] to a confidence in [60, 100]
pub fn semantic_confidence(score: f64) -> u8 {
    let score = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
    (SEMANTIC_BASE_CONFIDENCE + score * SEMANTIC_CONFIDENCE_SPAN).round() as u8
}

fn from_semantic(hit: &SemanticHit) -> DetectionResult {
    DetectionResult::new(hit.pattern, semantic_confidence(hit.score), SEMANTIC_REASON)
}

/// The single result returned when nothing matches
pub fn fallback() -> DetectionResult {
    DetectionResult::new(FALLBACK_PATTERN, FALLBACK_CONFIDENCE, FALLBACK_REASON)
}

/// Detect the most likely patterns for a problem statement.
///
/// Rule detections come first, then semantic detections with a non-zero
/// score. The combined list is sorted by confidence (stable, so ties keep
/// that order) and cut to `MAX_RESULTS`. Duplicate pattern names are kept.
/// Returns the "Unclear" fallback when both sources are empty.
pub fn detect(text: &str) -> RankedDetection {
    let mut results = match_rules(text);

    results.extend(
        semantic_match(text)
            .iter()
            .filter(|hit| hit.score > 0.0)
            .map(from_semantic),
    );

    if results.is_empty() {
        return vec![fallback()];
    }

    results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(results: &[DetectionResult]) -> Vec<(&str, u8)> {
        results
            .iter()
            .map(|d| (d.pattern.as_str(), d.confidence))
            .collect()
    }

    #[test]
    fn test_fallback_on_empty_input() {
        let results = detect("");
        assert_eq!(results, vec![fallback()]);
        assert_eq!(results[0].pattern, "Unclear");
        assert_eq!(results[0].confidence, 40);
    }

    #[test]
    fn test_fallback_on_unrelated_input() {
        assert_eq!(detect("quick brown fox"), vec![fallback()]);
        assert_eq!(detect("!!! ???"), vec![fallback()]);
    }

    #[test]
    fn test_stopword_overlap_is_not_fallback() {
        // "the" appears in the Greedy description: 1 shared of 21 tokens
        let results = detect("the quick brown fox");
        assert_eq!(summary(&results), vec![("Greedy", 62)]);
        assert_eq!(results[0].reason, SEMANTIC_REASON);
    }

    #[test]
    fn test_binary_search_rule() {
        let results = detect("Find the first element in a sorted array");
        assert_eq!(
            summary(&results),
            vec![("Binary Search", 90), ("Sorting", 80), ("Binary Search", 73)]
        );
    }

    #[test]
    fn test_multi_rule_ordering() {
        let results =
            detect("Find the maximum contiguous subarray sum, a classic sliding window and DP problem");
        assert_eq!(
            summary(&results),
            vec![
                ("Sliding Window", 75),
                ("Dynamic Programming", 65),
                ("Graph (BFS / DFS)", 64),
            ]
        );
    }

    #[test]
    fn test_equal_confidence_keeps_rules_first() {
        let results = detect("graph with nodes and edges");
        assert_eq!(
            summary(&results),
            vec![
                ("Graph (BFS / DFS)", 70),
                ("Graph (BFS / DFS)", 70),
                ("Dynamic Programming", 67),
            ]
        );
        assert_eq!(results[0].reason, "Nodes and edges indicate graph traversal.");
        assert_eq!(results[1].reason, SEMANTIC_REASON);
    }

    #[test]
    fn test_zero_score_semantic_hits_dropped() {
        // No description shares a token with "dp"
        let results = detect("dp");
        assert_eq!(summary(&results), vec![("Dynamic Programming", 65)]);
        assert_ne!(results[0].reason, SEMANTIC_REASON);
    }

    #[test]
    fn test_truncates_to_top_three() {
        let results = detect("binary search activity sort window graph dp");
        assert_eq!(
            summary(&results),
            vec![("Binary Search", 90), ("Greedy", 85), ("Sorting", 80)]
        );
    }

    #[test]
    fn test_descending_and_bounded() {
        let inputs = [
            "",
            "graph with nodes and edges",
            "minimize the number of coins",
            "Selecting the best local option repeatedly to achieve a global optimum",
            "arrange the intervals in order and select the maximum",
        ];
        for text in inputs {
            let results = detect(text);
            assert!(!results.is_empty() && results.len() <= MAX_RESULTS);
            assert!(results.iter().all(|d| d.confidence <= 100));
            assert!(results.windows(2).all(|w| w[0].confidence >= w[1].confidence));
        }
    }

    #[test]
    fn test_idempotent() {
        let text = "Traverse the graph to find connected components";
        assert_eq!(detect(text), detect(text));
    }

    #[test]
    fn test_semantic_confidence_range() {
        assert_eq!(semantic_confidence(0.0), 60);
        assert_eq!(semantic_confidence(1.0), 100);
        assert_eq!(semantic_confidence(1.0 / 3.0), 73);
        assert_eq!(semantic_confidence(f64::NAN), 60);
    }

    #[test]
    fn test_exact_description_scores_full_confidence() {
        let results = detect("Using two indices moving through data structures to reduce time complexity");
        assert_eq!(results[0].pattern, "Two Pointers");
        assert_eq!(results[0].confidence, 100);
    }
}
