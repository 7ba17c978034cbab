//! Lexical similarity between input text and the pattern catalog
//!
//! Token sets are compared with the Jaccard index. No stemming, no
//! stopword removal and no term frequency: "sorted" and "sort" are
//! different tokens, and "the" counts as much as "subarray".

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

use crate::catalog;
use crate::types::SemanticHit;

/// Number of catalog entries reported by `semantic_match`
pub const SEMANTIC_TOP_K: usize = 2;

static NON_TOKEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 ]").expect("Invalid regex pattern"));

/// Split text into a set of lowercase alphanumeric tokens.
///
/// Everything outside `[a-z0-9 ]` is removed before splitting, so
/// punctuation joins nothing ("o(n)" becomes "on") and newlines glue the
/// surrounding words together.
pub fn tokenize(text: &str) -> AHashSet<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_TOKEN_CHARS.replace_all(&lowered, "");

    stripped
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Jaccard index of two token sets (0.0-1.0).
///
/// Two empty sets score 0.0 rather than dividing by zero.
pub fn jaccard_similarity(a: &AHashSet<String>, b: &AHashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Tokenize both strings and return their Jaccard index
pub fn calculate_similarity(input: &str, other: &str) -> f64 {
    jaccard_similarity(&tokenize(input), &tokenize(other))
}

/// Score the input against every catalog description.
///
/// Returns the `SEMANTIC_TOP_K` best entries, highest score first. The sort
/// is stable, so equal scores keep catalog order. Zero scores are kept;
/// filtering is left to the caller.
pub fn semantic_match(text: &str) -> Vec<SemanticHit> {
    let input_tokens = tokenize(text);

    let mut hits: Vec<SemanticHit> = catalog::entries()
        .iter()
        .map(|entry| SemanticHit {
            pattern: entry.pattern,
            score: jaccard_similarity(&input_tokens, &tokenize(entry.description)),
        })
        .collect();

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hits.truncate(SEMANTIC_TOP_K);
    hits
}
