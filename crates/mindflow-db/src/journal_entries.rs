//! Database operations for the `journal_entries` table.
//!
//! Every read is scoped by `user_id`; a row belonging to another user is
//! indistinguishable from a missing one.

use chrono::{DateTime, Utc};
use mindflow_core::{mood::TREND_WINDOW, JournalEntry};
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `journal_entries` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JournalEntryRow {
    pub id: i64,
    pub user_id: String,
    pub entry_text: String,
    pub mood_score: Option<i32>,
    pub primary_emotion: Option<String>,
    pub ai_analysis: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JournalEntryRow> for JournalEntry {
    fn from(row: JournalEntryRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            entry_text: row.entry_text,
            mood_score: row.mood_score,
            primary_emotion: row.primary_emotion,
            ai_analysis: row.ai_analysis,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Values for a new entry. Timestamps are set by the database.
#[derive(Debug, Clone, Copy)]
pub struct NewJournalEntry<'a> {
    pub user_id: &'a str,
    pub entry_text: &'a str,
    pub mood_score: i32,
    pub primary_emotion: &'a str,
    pub ai_analysis: &'a str,
}

const SELECT_COLUMNS: &str = "id, user_id, entry_text, mood_score, primary_emotion, ai_analysis, \
                              created_at, updated_at";

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert a journal entry and return the stored row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails, including when
/// `mood_score` violates the 0..=100 check constraint.
pub async fn insert_journal_entry(
    pool: &PgPool,
    entry: NewJournalEntry<'_>,
) -> Result<JournalEntryRow, DbError> {
    let sql = format!(
        "INSERT INTO journal_entries \
             (user_id, entry_text, mood_score, primary_emotion, ai_analysis, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, NOW(), NOW()) \
         RETURNING {SELECT_COLUMNS}"
    );
    let row = sqlx::query_as::<_, JournalEntryRow>(&sql)
        .bind(entry.user_id)
        .bind(entry.entry_text)
        .bind(entry.mood_score)
        .bind(entry.primary_emotion)
        .bind(entry.ai_analysis)
        .fetch_one(pool)
        .await?;

    Ok(row)
}

/// List a user's entries, newest first.
///
/// Results are ordered by `created_at DESC` then `id DESC`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_journal_entries(
    pool: &PgPool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<JournalEntryRow>, DbError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} \
         FROM journal_entries \
         WHERE user_id = $1 \
         ORDER BY created_at DESC, id DESC \
         LIMIT $2"
    );
    let rows = sqlx::query_as::<_, JournalEntryRow>(&sql)
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// The user's newest `limit` entries that carry a mood score, newest first.
///
/// Feeds the mood trend, so unscored rows never displace scored ones.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_scored_journal_entries(
    pool: &PgPool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<JournalEntryRow>, DbError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} \
         FROM journal_entries \
         WHERE user_id = $1 AND mood_score IS NOT NULL \
         ORDER BY created_at DESC, id DESC \
         LIMIT $2"
    );
    let rows = sqlx::query_as::<_, JournalEntryRow>(&sql)
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// The scored entries a mood trend is built from, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_trend_entries(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<JournalEntryRow>, DbError> {
    let window = i64::try_from(TREND_WINDOW).unwrap_or(i64::MAX);
    list_scored_journal_entries(pool, user_id, window).await
}

/// Fetch one of a user's entries by id, or `None` if it does not exist
/// or belongs to someone else.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_journal_entry(
    pool: &PgPool,
    user_id: &str,
    id: i64,
) -> Result<Option<JournalEntryRow>, DbError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} \
         FROM journal_entries \
         WHERE id = $1 AND user_id = $2"
    );
    let row = sqlx::query_as::<_, JournalEntryRow>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}
