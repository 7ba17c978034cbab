//! Pattern core - classifies algorithmic problem statements into solution patterns
//!
//! Keyword rules and a token-overlap similarity against a small catalog of
//! pattern descriptions are merged into a short ranked list. The `augment`
//! module optionally enriches that list with examples from a remote service.

pub mod types;
pub mod catalog;
pub mod rules;
pub mod similarity;
pub mod matcher;
pub mod error;
pub mod config;
pub mod augment;

pub use types::*;
pub use similarity::*;
pub use matcher::*;
pub use rules::match_rules;
pub use error::{Error, Result};
pub use config::AugmentConfig;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn pattern_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyPatternDetector>()?;
    m.add_function(wrap_pyfunction!(py_detect, m)?)?;
    m.add_function(wrap_pyfunction!(py_jaccard_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_semantic_match, m)?)?;
    Ok(())
}
