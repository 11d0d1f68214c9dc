use thiserror::Error;

use crate::types::SentimentResult;

/// Reasons a classification could not produce a real score.
///
/// These never reach callers of [`crate::SentimentClassifier::classify`];
/// each one is turned into a neutral [`SentimentResult`] by [`Self::fallback`].
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("no classifier API key configured")]
    MissingApiKey,

    #[error("classifier rejected the API key")]
    Unauthorized,

    #[error("classifier is rate limiting requests")]
    RateLimited,

    #[error("classifier model is still loading")]
    ModelLoading,

    #[error("classifier returned status {0}")]
    UpstreamStatus(u16),

    #[error("unexpected classifier response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClassifierError {
    /// Neutral result explaining this failure to the user.
    #[must_use]
    pub fn fallback(&self) -> SentimentResult {
        let message = match self {
            ClassifierError::MissingApiKey => {
                "AI analysis temporarily unavailable - API key missing."
            }
            ClassifierError::Unauthorized => {
                "AI analysis unavailable - please check API credentials. Your entry has been saved."
            }
            ClassifierError::RateLimited => {
                "AI analysis temporarily unavailable due to high demand. Please try again later."
            }
            ClassifierError::ModelLoading => {
                "AI model is starting up. This may take a few moments."
            }
            ClassifierError::UpstreamStatus(_) | ClassifierError::MalformedResponse(_) => {
                "AI analysis completed but results unclear."
            }
            ClassifierError::Http(_) => {
                "AI analysis temporarily unavailable. Your entry has been saved."
            }
        };
        SentimentResult::neutral(message)
    }
}
