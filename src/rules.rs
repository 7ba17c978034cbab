//! Keyword rules - fixed-confidence detections from substring checks

use crate::types::DetectionResult;

/// A keyword rule evaluated against lowercased input
struct Rule {
    pattern: &'static str,
    confidence: u8,
    reason: &'static str,
    fires: fn(&str) -> bool,
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}

/// Evaluation order is output order for rules that fire together.
const RULES: [Rule; 6] = [
    Rule {
        pattern: "Binary Search",
        confidence: 90,
        reason: "Searching or finding elements in a sorted structure strongly suggests binary search.",
        fires: |input| {
            input.contains("binary search")
                || (input.contains("sorted")
                    && contains_any(input, &["search", "find", "first", "last"]))
        },
    },
    Rule {
        pattern: "Greedy",
        confidence: 85,
        reason: "Selecting the maximum number of activities or intervals is a classic greedy problem.",
        fires: |input| {
            contains_any(input, &["activity", "activities", "interval"])
                || (input.contains("maximum") && input.contains("select"))
        },
    },
    Rule {
        pattern: "Sorting",
        confidence: 80,
        reason: "The problem explicitly asks to arrange elements in order.",
        fires: |input| {
            contains_any(input, &["sort", "sorting"])
                || (input.contains("arrange") && input.contains("order"))
        },
    },
    Rule {
        pattern: "Sliding Window",
        confidence: 75,
        reason: "Mentions contiguous subarrays or windows.",
        fires: |input| contains_any(input, &["subarray", "window", "contiguous"]),
    },
    Rule {
        pattern: "Graph (BFS / DFS)",
        confidence: 70,
        reason: "Nodes and edges indicate graph traversal.",
        fires: |input| contains_any(input, &["graph", "edges", "nodes"]),
    },
    Rule {
        pattern: "Dynamic Programming",
        confidence: 65,
        reason: "Optimization language suggests DP.",
        fires: |input| {
            contains_any(input, &["dp", "dynamic programming", "maximize", "minimize"])
        },
    },
];

/// Run every keyword rule against the input.
///
/// Rules are independent: each one that fires contributes exactly one
/// detection. Matching is plain substring containment on the lowercased
/// text, so "sorted" also fires the Sorting rule and "dp" matches inside
/// longer words.
pub fn match_rules(text: &str) -> Vec<DetectionResult> {
    let input = text.to_lowercase();

    RULES
        .iter()
        .filter(|rule| (rule.fires)(&input))
        .map(|rule| DetectionResult::new(rule.pattern, rule.confidence, rule.reason))
        .collect()
}
