//! HTTP client for the augmentation service

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, warn};

use crate::augment::service::ServiceFailure;
use crate::augment::types::{parse_augmentation, AugmentRequest, Augmentation};
use crate::config::AugmentConfig;
use crate::error::{Error, Result};

/// Single-attempt client; the unavailability warning is logged once per client.
#[derive(Debug)]
pub struct AugmentClient {
    client: reqwest::Client,
    endpoint: String,
    warned: AtomicBool,
}

impl AugmentClient {
    pub fn new(config: &AugmentConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.effective_timeout_ms()))
            .build()
            .map_err(|err| Error::Config(format!("failed to build augmentation client: {err}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
            warned: AtomicBool::new(false),
        })
    }

    /// Target URL, trimmed of surrounding whitespace
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the request once and decode the response.
    ///
    /// Non-2xx statuses become `Error::Service`, carrying the failure
    /// body's `message` when the service sent one.
    pub async fn request(&self, request: &AugmentRequest) -> Result<Augmentation> {
        debug!(
            endpoint = %self.endpoint,
            patterns = request.patterns.len(),
            "requesting augmentation"
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ServiceFailure>(&body) {
                Ok(failure) if !failure.message.is_empty() => failure.message,
                _ => body.trim().to_string(),
            };
            return Err(Error::Service {
                status: status.as_u16(),
                message,
            });
        }

        parse_augmentation(&body)
    }

    /// Like `request`, but every failure resolves to `None`.
    pub async fn augment(&self, request: &AugmentRequest) -> Option<Augmentation> {
        match self.request(request).await {
            Ok(augmentation) => Some(augmentation),
            Err(err) => {
                if !self.warned.swap(true, Ordering::Relaxed) {
                    warn!(error = %err, "augmentation unavailable, using local detection only");
                } else {
                    debug!(error = %err, "augmentation unavailable");
                }
                None
            }
        }
    }

    /// Whether the unavailability warning has been emitted
    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::Relaxed)
    }
}
