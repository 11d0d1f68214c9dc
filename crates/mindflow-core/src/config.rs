use crate::app_config::{
    AppConfig, DatabaseSettings, Environment, SentimentLabels, SentimentSettings,
};
use crate::ConfigError;

/// Hosted inference endpoint for the default three-class sentiment model.
pub const DEFAULT_SENTIMENT_URL: &str =
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment-latest";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the classifier settings from the process environment.
///
/// Calls `dotenvy::dotenv().ok()` first, like [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` if a sentiment variable is malformed.
pub fn load_sentiment_settings() -> Result<SentimentSettings, ConfigError> {
    dotenvy::dotenv().ok();
    build_sentiment_settings(&|key: &str| std::env::var(key))
}

/// Load only the database settings from the process environment.
///
/// Calls `dotenvy::dotenv().ok()` first, like [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` without `DATABASE_URL`, or
/// `ConfigError::InvalidEnvVar` for malformed or inconsistent pool settings.
pub fn load_database_settings() -> Result<DatabaseSettings, ConfigError> {
    dotenvy::dotenv().ok();
    build_database_settings(&|key: &str| std::env::var(key))
}

fn require<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn or_default<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup(var).unwrap_or_else(|_| default.to_string())
}

fn parse_num<F, T>(lookup: &F, var: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    or_default(lookup, var, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn build_database_settings<F>(lookup: &F) -> Result<DatabaseSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let url = require(lookup, "DATABASE_URL")?;
    let max_connections: u32 = parse_num(lookup, "MINDFLOW_DB_MAX_CONNECTIONS", "10")?;
    let min_connections: u32 = parse_num(lookup, "MINDFLOW_DB_MIN_CONNECTIONS", "1")?;
    let acquire_timeout_secs = parse_num(lookup, "MINDFLOW_DB_ACQUIRE_TIMEOUT_SECS", "10")?;
    if min_connections > max_connections {
        return Err(ConfigError::InvalidEnvVar {
            var: "MINDFLOW_DB_MIN_CONNECTIONS".to_string(),
            reason: format!(
                "min connections ({min_connections}) exceeds max connections ({max_connections})"
            ),
        });
    }

    Ok(DatabaseSettings {
        url,
        max_connections,
        min_connections,
        acquire_timeout_secs,
    })
}

fn build_sentiment_settings<F>(lookup: &F) -> Result<SentimentSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let parse_labels = |var: &str, default: Vec<String>| -> Vec<String> {
        match lookup(var) {
            Ok(raw) => {
                let labels = split_list(&raw);
                if labels.is_empty() {
                    default
                } else {
                    labels
                }
            }
            Err(_) => default,
        }
    };

    let api_key = lookup("HUGGING_FACE_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    let url = or_default(lookup, "MINDFLOW_SENTIMENT_URL", DEFAULT_SENTIMENT_URL);
    let timeout_secs: u64 = parse_num(lookup, "MINDFLOW_SENTIMENT_TIMEOUT_SECS", "10")?;
    if timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MINDFLOW_SENTIMENT_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let defaults = SentimentLabels::default();
    let labels = SentimentLabels {
        positive: parse_labels("MINDFLOW_SENTIMENT_LABELS_POSITIVE", defaults.positive),
        negative: parse_labels("MINDFLOW_SENTIMENT_LABELS_NEGATIVE", defaults.negative),
        neutral: parse_labels("MINDFLOW_SENTIMENT_LABELS_NEUTRAL", defaults.neutral),
    };

    Ok(SentimentSettings {
        api_key,
        url,
        timeout_secs,
        labels,
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let database = build_database_settings(&lookup)?;
    let users_service_api_url = require(&lookup, "MINDFLOW_USERS_SERVICE_API_URL")?;
    let users_service_api_key = require(&lookup, "MINDFLOW_USERS_SERVICE_API_KEY")?;

    let env = parse_environment(&or_default(&lookup, "MINDFLOW_ENV", "development"))?;
    let bind_addr: SocketAddr = parse_num(&lookup, "MINDFLOW_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default(&lookup, "MINDFLOW_LOG_LEVEL", "info");

    let users_service_timeout_secs =
        parse_num(&lookup, "MINDFLOW_USERS_SERVICE_TIMEOUT_SECS", "10")?;
    let sentiment = build_sentiment_settings(&lookup)?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        database,
        users_service_api_url,
        users_service_api_key,
        users_service_timeout_secs,
        sentiment,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MINDFLOW_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// Split a comma-separated list, dropping blank items.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
