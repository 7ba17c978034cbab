//! Wire types exchanged with the augmentation service

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::RankedDetection;

/// Request body: the problem text and the locally detected pattern names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentRequest {
    pub problem: String,
    pub patterns: Vec<String>,
}

impl AugmentRequest {
    /// Pattern names are taken in rank order, repeats included.
    pub fn from_detection(problem: &str, detections: &RankedDetection) -> Self {
        Self {
            problem: problem.to_string(),
            patterns: detections.iter().map(|d| d.pattern.clone()).collect(),
        }
    }
}

/// One generated example: free text or an input/output pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleItem {
    Text(String),
    Structured {
        input: String,
        output: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub time: String,
    pub space: String,
}

/// Generated enrichment for a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Augmentation {
    pub examples: Vec<ExampleItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
}

/// Decode a service response body.
///
/// The body must be a JSON object whose `examples` field is an array;
/// anything else is rejected as `InvalidResponse`.
pub fn parse_augmentation(body: &str) -> Result<Augmentation> {
    let value: Value = serde_json::from_str(body)?;

    let Some(object) = value.as_object() else {
        return Err(Error::InvalidResponse("expected a JSON object".to_string()));
    };
    match object.get("examples") {
        Some(Value::Array(_)) => {}
        Some(_) => return Err(Error::InvalidResponse("`examples` is not an array".to_string())),
        None => return Err(Error::InvalidResponse("missing `examples`".to_string())),
    }

    Ok(serde_json::from_value(value)?)
}
