//! Optional enrichment of a detection with generated examples
//!
//! Detection never waits on or fails because of this module: `analyze`
//! computes the local result first and attaches whatever the service
//! returns, if anything.

pub mod service;
pub mod types;

#[cfg(feature = "augment")]
pub mod client;

pub use service::*;
pub use types::*;

#[cfg(feature = "augment")]
pub use client::AugmentClient;

use serde::Serialize;

use crate::types::RankedDetection;

/// Local detection plus the optional remote enrichment
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub detections: RankedDetection,
    pub augmentation: Option<Augmentation>,
}

/// Detect patterns locally, then make one augmentation attempt.
#[cfg(feature = "augment")]
pub async fn analyze(client: &AugmentClient, problem: &str) -> Analysis {
    let detections = crate::matcher::detect(problem);
    let request = AugmentRequest::from_detection(problem, &detections);
    let augmentation = client.augment(&request).await;

    Analysis {
        detections,
        augmentation,
    }
}
