pub mod app_config;
pub mod config;
pub mod journal;
pub mod mood;

pub use app_config::{
    AppConfig, DatabaseSettings, Environment, SentimentLabels, SentimentSettings,
};
pub use config::{
    load_app_config, load_app_config_from_env, load_database_settings, load_sentiment_settings,
};
pub use journal::{validate_entry_text, JournalEntry, MAX_ENTRY_CHARS};
pub use mood::{build_mood_trend, MoodBand, MoodPoint, MoodTrend};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Journal entry cannot be empty")]
    EmptyEntry,

    #[error("Journal entry must be at most {max} characters, got {actual}")]
    EntryTooLong { max: usize, actual: usize },
}
