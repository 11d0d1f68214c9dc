//! HTTP adapter for the hosted sentiment model.
//!
//! One POST per call, no retries. Status codes the upstream uses for
//! throttling (429), model warm-up (503) and bad credentials (401) each get
//! their own fallback text; everything else that goes wrong lands on a
//! generic neutral result.

use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::error::ClassifierError;
use crate::scorer::score_predictions;
use crate::types::{LabelMap, Prediction, SentimentConfig, SentimentResult};

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// Stateless client; safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    client: Client,
    url: String,
    api_key: Option<String>,
    labels: LabelMap,
}

impl SentimentClassifier {
    /// Build a classifier from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: SentimentConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent("mindflow/0.1 (mood-journal)")
            .build()?;

        Ok(Self {
            client,
            url: config.url,
            api_key: config.api_key,
            labels: config.labels,
        })
    }

    /// Whether a credential is configured. Without one, [`Self::classify`]
    /// never touches the network.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Score `text`. Never fails: every error becomes a neutral result.
    pub async fn classify(&self, text: &str) -> SentimentResult {
        match self.try_classify(text).await {
            Ok(result) => result,
            Err(ClassifierError::MissingApiKey) => {
                tracing::debug!("sentiment API key not configured, using neutral mood");
                ClassifierError::MissingApiKey.fallback()
            }
            Err(err) => {
                tracing::warn!(error = %err, "sentiment classification degraded to neutral");
                err.fallback()
            }
        }
    }

    /// Score `text`, surfacing the reason when no real score is available.
    ///
    /// # Errors
    ///
    /// - [`ClassifierError::MissingApiKey`] when no credential is configured.
    /// - [`ClassifierError::Unauthorized`], [`ClassifierError::RateLimited`],
    ///   [`ClassifierError::ModelLoading`] for 401, 429 and 503 responses.
    /// - [`ClassifierError::UpstreamStatus`] for any other non-2xx status.
    /// - [`ClassifierError::MalformedResponse`] when the body is not a
    ///   non-empty list of `{label, score}` lists.
    /// - [`ClassifierError::Http`] on network failure or timeout.
    pub async fn try_classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClassifierError::MissingApiKey)?;

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => return Err(ClassifierError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => return Err(ClassifierError::RateLimited),
            StatusCode::SERVICE_UNAVAILABLE => return Err(ClassifierError::ModelLoading),
            s if !s.is_success() => return Err(ClassifierError::UpstreamStatus(s.as_u16())),
            _ => {}
        }

        let body = response.bytes().await?;
        let predictions = parse_predictions(&body)?;
        score_predictions(&predictions, &self.labels).ok_or_else(|| {
            ClassifierError::MalformedResponse("empty prediction list".to_string())
        })
    }
}

/// Extract the first distribution from a `[[{label, score}, ...], ...]` body.
///
/// Only the first batch is decoded; later batches are never inspected.
fn parse_predictions(body: &[u8]) -> Result<Vec<Prediction>, ClassifierError> {
    let batches: Vec<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

    let first = batches
        .into_iter()
        .next()
        .ok_or_else(|| ClassifierError::MalformedResponse("empty response list".to_string()))?;
    let first: Vec<Prediction> = serde_json::from_value(first)
        .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

    if first.is_empty() {
        return Err(ClassifierError::MalformedResponse(
            "empty prediction list".to_string(),
        ));
    }
    Ok(first)
}
