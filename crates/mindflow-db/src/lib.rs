//! Postgres access for MindFlow: pool setup, embedded migrations and the
//! journal entry queries.

use std::time::Duration;

use mindflow_core::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

pub mod journal_entries;

pub use journal_entries::{
    get_journal_entry, insert_journal_entry, list_journal_entries, list_scored_journal_entries,
    list_trend_entries, JournalEntryRow, NewJournalEntry,
};

// Resolves to <workspace-root>/migrations/ from this crate's manifest.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Pool options for `settings`, without connecting.
#[must_use]
pub fn pool_options(settings: &DatabaseSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
}

/// Open a pool against `settings.url`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if no connection can be established.
pub async fn connect_pool(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let pool = pool_options(settings).connect(&settings.url).await?;
    tracing::debug!(
        max_connections = settings.max_connections,
        min_connections = settings.min_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Apply every embedded migration the database has not seen yet.
///
/// # Errors
///
/// Returns [`DbError::Migration`] if a migration fails or the recorded
/// history no longer matches the embedded files.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(
        embedded = MIGRATOR.iter().count(),
        "database schema up to date"
    );
    Ok(())
}

/// Round-trip a trivial query to prove a connection can be acquired.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the pool cannot serve the query.
pub async fn health_check(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
