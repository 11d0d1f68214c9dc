use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Raw upstream label identifiers grouped by the sentiment class they denote.
///
/// Matching is case-insensitive; the sentiment crate builds its label map
/// from these lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentLabels {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

impl Default for SentimentLabels {
    fn default() -> Self {
        Self {
            positive: vec!["LABEL_2".to_string(), "positive".to_string()],
            negative: vec!["LABEL_0".to_string(), "negative".to_string()],
            neutral: vec!["LABEL_1".to_string(), "neutral".to_string()],
        }
    }
}

/// Hosted classifier settings. Loadable on their own so tools that only
/// classify text need no database or users-service configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct SentimentSettings {
    /// `None` disables the classifier; entries then get a neutral mood.
    pub api_key: Option<String>,
    pub url: String,
    pub timeout_secs: u64,
    pub labels: SentimentLabels,
}

impl std::fmt::Debug for SentimentSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("url", &self.url)
            .field("timeout_secs", &self.timeout_secs)
            .field("labels", &self.labels)
            .finish()
    }
}

/// Postgres connection settings, validated once for every binary.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"[redacted]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub database: DatabaseSettings,
    pub users_service_api_url: String,
    pub users_service_api_key: String,
    pub users_service_timeout_secs: u64,
    pub sentiment: SentimentSettings,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database", &self.database)
            .field("users_service_api_url", &self.users_service_api_url)
            .field("users_service_api_key", &"[redacted]")
            .field(
                "users_service_timeout_secs",
                &self.users_service_timeout_secs,
            )
            .field("sentiment", &self.sentiment)
            .finish()
    }
}
