//! Python bindings for pattern detection using PyO3

use pyo3::prelude::*;
use pyo3::types::PyDict;
use crate::matcher::detect;
use crate::similarity::{calculate_similarity, semantic_match};
use crate::types::DetectionResult;

fn detection_to_dict<'py>(py: Python<'py>, detection: &DetectionResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("pattern", &detection.pattern)?;
    dict.set_item("confidence", detection.confidence)?;
    dict.set_item("reason", &detection.reason)?;
    Ok(dict)
}

/// Ranked pattern detections for a problem statement (Python function)
#[pyfunction]
pub fn py_detect<'py>(py: Python<'py>, text: &str) -> PyResult<Vec<Bound<'py, PyDict>>> {
    detect(text)
        .iter()
        .map(|d| detection_to_dict(py, d))
        .collect()
}

/// Jaccard similarity between the token sets of two strings (Python function)
#[pyfunction]
pub fn py_jaccard_similarity(a: &str, b: &str) -> f64 {
    calculate_similarity(a, b)
}

/// Top catalog entries as (pattern, score) pairs (Python function)
#[pyfunction]
pub fn py_semantic_match(text: &str) -> Vec<(String, f64)> {
    semantic_match(text)
        .into_iter()
        .map(|hit| (hit.pattern.to_string(), hit.score))
        .collect()
}

/// Python wrapper for the ranked detector
#[pyclass]
pub struct PyPatternDetector;

#[pymethods]
impl PyPatternDetector {
    #[new]
    fn new() -> Self {
        Self
    }

    /// Detect patterns, returning a list of {pattern, confidence, reason} dicts
    fn detect<'py>(&self, text: &str, py: Python<'py>) -> PyResult<Vec<Bound<'py, PyDict>>> {
        py_detect(py, text)
    }

    /// Detections serialized as a JSON array
    fn detect_json(&self, text: &str) -> PyResult<String> {
        serde_json::to_string(&detect(text))
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Failed to serialize detections: {}", e)))
    }
}
