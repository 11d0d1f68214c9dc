//! Offline tests for mindflow-db pool options and row conversion.
//! These tests do not require a live database connection.

use mindflow_core::{
    AppConfig, DatabaseSettings, Environment, JournalEntry, SentimentLabels, SentimentSettings,
};
use mindflow_db::{pool_options, JournalEntryRow};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

#[test]
fn pool_options_use_app_config_database_settings() {
    let app_config = AppConfig {
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        database: DatabaseSettings {
            url: "postgres://example".to_string(),
            max_connections: 42,
            min_connections: 7,
            acquire_timeout_secs: 9,
        },
        users_service_api_url: "https://users.example.com".to_string(),
        users_service_api_key: "key".to_string(),
        users_service_timeout_secs: 10,
        sentiment: SentimentSettings {
            api_key: None,
            url: "https://models.example.com/sentiment".to_string(),
            timeout_secs: 10,
            labels: SentimentLabels::default(),
        },
    };

    let options = pool_options(&app_config.database);
    assert_eq!(options.get_max_connections(), 42);
    assert_eq!(options.get_min_connections(), 7);
    assert_eq!(options.get_acquire_timeout(), Duration::from_secs(9));
}

#[test]
fn journal_entry_row_converts_to_domain_entry() {
    use chrono::Utc;

    let now = Utc::now();
    let row = JournalEntryRow {
        id: 12_i64,
        user_id: "user-1".to_string(),
        entry_text: "quiet evening".to_string(),
        mood_score: Some(50),
        primary_emotion: Some("neutral".to_string()),
        ai_analysis: Some("AI detected neutral sentiment with 70% confidence.".to_string()),
        created_at: now,
        updated_at: now,
    };

    let entry = JournalEntry::from(row);
    assert_eq!(entry.id, 12);
    assert_eq!(entry.user_id, "user-1");
    assert_eq!(entry.mood_score, Some(50));
    assert_eq!(entry.primary_emotion.as_deref(), Some("neutral"));
    assert_eq!(entry.created_at, now);
}
