//! HTTP adapter for an external NER service
//!
//! The pretrained Portuguese model is too heavy to embed, so it runs as a
//! sidecar exposing one endpoint:
//!
//! ```text
//! POST {endpoint}/recognize
//! { "text": "..." }
//! -> { "entities": [ { "start": 0, "end": 4, "label": "PER" }, ... ] }
//! ```
//!
//! Transport and protocol faults never leak `reqwest` types; they are
//! mapped to [`RecognizerError`] and surface as `AnalysisUnavailable` at
//! the engine boundary.

use super::{EntityRecognizer, RecognizedEntity};
use crate::config::{RecognizerConfig, SecretString};
use crate::domain::{RecognizerError, VigiaError};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    entities: Vec<RecognizedEntity>,
}

/// Recognizer backed by an external NER service
pub struct HttpRecognizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpRecognizer {
    /// Create a new HTTP recognizer from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is missing or the HTTP client
    /// cannot be built.
    pub fn new(config: &RecognizerConfig) -> crate::domain::Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| {
                VigiaError::Configuration(
                    "recognizer endpoint is required when provider = 'http'".to_string(),
                )
            })?
            .trim_end_matches('/')
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                VigiaError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl EntityRecognizer for HttpRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognizerError> {
        let url = format!("{}/recognize", self.endpoint);

        let mut request = self
            .client
            .post(&url)
            .json(&RecognizeRequest { text });

        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RecognizerError::Timeout(url.clone())
            } else {
                RecognizerError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(RecognizerError::AuthenticationFailed(format!(
                "status {status}"
            )));
        }
        if status.is_server_error() {
            return Err(RecognizerError::ServerError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        if !status.is_success() {
            return Err(RecognizerError::ClientError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognizerError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            entities = body.entities.len(),
            "recognizer service responded"
        );

        Ok(body.entities)
    }

    fn name(&self) -> &str {
        "http"
    }
}
