//! Contract of the remote augmentation service
//!
//! The service forwards a mentor prompt to a generative model and answers
//! with an `Augmentation` body, or a `ServiceFailure` body on error.

use serde::{Deserialize, Serialize};

pub const SERVICE_ERROR: &str = "AI service unavailable";
pub const SERVICE_TIP: &str =
    "If you see 404, check if your API Key is restricted or try model 'gemini-1.5-pro'.";

/// Error body returned by the service with status 404 or 500
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceFailure {
    pub error: String,
    pub message: String,
    pub tip: String,
}

impl ServiceFailure {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            error: SERVICE_ERROR.to_string(),
            message: message.into(),
            tip: SERVICE_TIP.to_string(),
        }
    }

    /// 404 for model or key lookups that failed, 500 for everything else
    pub fn status_for(message: &str) -> u16 {
        if message.contains("not found") {
            404
        } else {
            500
        }
    }

    pub fn status(&self) -> u16 {
        Self::status_for(&self.message)
    }
}

/// Build the prompt forwarded to the generative model
pub fn build_prompt(problem: &str, patterns: &[String]) -> String {
    let patterns = if patterns.is_empty() {
        "None".to_string()
    } else {
        patterns.join(", ")
    };

    format!(
        r#"You are a DSA mentor. Provide clear examples for this problem.
Problem: "{problem}"
Patterns: {patterns}

Return ONLY a JSON object:
{{
  "examples": ["string"],
  "approach": "string",
  "complexity": {{ "time": "string", "space": "string" }}
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_patterns() {
        let prompt = build_prompt(
            "Find the first element in a sorted array",
            &["Binary Search".to_string(), "Sorting".to_string()],
        );
        assert!(prompt.contains(r#"Problem: "Find the first element in a sorted array""#));
        assert!(prompt.contains("Patterns: Binary Search, Sorting"));
        assert!(prompt.contains(r#""complexity": { "time": "string", "space": "string" }"#));
    }

    #[test]
    fn test_prompt_without_patterns() {
        assert!(build_prompt("x", &[]).contains("Patterns: None"));
    }

    #[test]
    fn test_failure_status() {
        assert_eq!(ServiceFailure::status_for("models/gemini-x is not found"), 404);
        assert_eq!(ServiceFailure::status_for("Missing GEMINI_API_KEY"), 500);

        let failure = ServiceFailure::from_message("quota exceeded");
        assert_eq!(failure.error, SERVICE_ERROR);
        assert_eq!(failure.status(), 500);
    }

    #[test]
    fn test_failure_tolerates_missing_fields() {
        let failure: ServiceFailure = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        assert_eq!(failure.message, "boom");
        assert!(failure.tip.is_empty());
    }
}
