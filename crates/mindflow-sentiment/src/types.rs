use std::time::Duration;

use mindflow_core::{AppConfig, SentimentLabels, SentimentSettings};
use serde::{Deserialize, Serialize};

/// Score reported whenever the classifier cannot say anything useful.
pub const NEUTRAL_MOOD_SCORE: i32 = 50;

/// Coarse emotion attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Neutral,
}

impl Emotion {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one journal entry.
///
/// `mood_score` is always within `0..=100` and `analysis` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentResult {
    pub mood_score: i32,
    pub primary_emotion: Emotion,
    pub analysis: String,
}

impl SentimentResult {
    /// The neutral fallback carrying an explanation of why it was used.
    #[must_use]
    pub fn neutral(analysis: impl Into<String>) -> Self {
        Self {
            mood_score: NEUTRAL_MOOD_SCORE,
            primary_emotion: Emotion::Neutral,
            analysis: analysis.into(),
        }
    }
}

/// One `{label, score}` pair from the upstream distribution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// Sentiment polarity a raw upstream label stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelClass {
    Positive,
    Negative,
    Neutral,
}

/// Case-insensitive lookup from raw model labels to [`LabelClass`].
///
/// Different model providers name their classes differently (`LABEL_2`,
/// `positive`, `POS`, ...), so the vocabulary is configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, LabelClass)>,
}

impl LabelMap {
    #[must_use]
    pub fn from_labels(labels: &SentimentLabels) -> Self {
        let entries = [
            (&labels.positive, LabelClass::Positive),
            (&labels.negative, LabelClass::Negative),
            (&labels.neutral, LabelClass::Neutral),
        ]
        .into_iter()
        .flat_map(|(list, class)| list.iter().map(move |l| (l.trim().to_lowercase(), class)))
        .collect();
        Self { entries }
    }

    /// Resolve a raw label. Unknown labels return `None`.
    #[must_use]
    pub fn class_of(&self, raw: &str) -> Option<LabelClass> {
        let needle = raw.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(label, _)| *label == needle)
            .map(|(_, class)| *class)
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::from_labels(&SentimentLabels::default())
    }
}

/// Settings for [`crate::SentimentClassifier`].
#[derive(Clone)]
pub struct SentimentConfig {
    pub api_key: Option<String>,
    pub url: String,
    pub timeout: Duration,
    pub labels: LabelMap,
}

impl SentimentConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::from_settings(&config.sentiment)
    }

    #[must_use]
    pub fn from_settings(settings: &SentimentSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            url: settings.url.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            labels: LabelMap::from_labels(&settings.labels),
        }
    }
}

impl std::fmt::Debug for SentimentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("labels", &self.labels)
            .finish()
    }
}
