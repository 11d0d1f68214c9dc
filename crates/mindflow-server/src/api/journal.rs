use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use mindflow_core::{build_mood_trend, validate_entry_text, JournalEntry, MoodTrend};
use mindflow_db::NewJournalEntry;
use serde::Deserialize;

use crate::middleware::{CurrentUser, RequestId};

use super::{
    map_db_error, map_json_rejection, normalize_limit, ApiError, ApiResponse, AppState,
};

#[derive(Debug, Deserialize)]
pub(super) struct CreateJournalEntryRequest {
    pub entry_text: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListEntriesQuery {
    pub limit: Option<i64>,
}

/// GET /api/journal-entries: the caller's entries, newest first.
pub(super) async fn list_entries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<ListEntriesQuery>,
) -> Result<Json<ApiResponse<Vec<JournalEntry>>>, ApiError> {
    let rows =
        mindflow_db::list_journal_entries(&state.pool, &user.id, normalize_limit(query.limit))
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows.into_iter().map(JournalEntry::from).collect();
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

/// POST /api/journal-entries: score the text and store the entry.
///
/// Classification cannot fail; a degraded classifier yields a neutral mood
/// and the entry is saved regardless.
pub(super) async fn create_entry(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    body: Result<Json<CreateJournalEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<JournalEntry>>), ApiError> {
    let rid = &req_id.0;
    let Json(body) = body.map_err(|rejection| map_json_rejection(rid.clone(), &rejection))?;

    let entry_text = validate_entry_text(&body.entry_text)
        .map_err(|e| ApiError::new(rid, "validation_error", e.to_string()))?;

    let sentiment = state.classifier.classify(entry_text).await;

    let row = mindflow_db::insert_journal_entry(
        &state.pool,
        NewJournalEntry {
            user_id: &user.id,
            entry_text,
            mood_score: sentiment.mood_score,
            primary_emotion: sentiment.primary_emotion.as_str(),
            ai_analysis: &sentiment.analysis,
        },
    )
    .await
    .map_err(|e| map_db_error(rid.clone(), &e))?;

    tracing::info!(
        entry_id = row.id,
        user_id = %user.id,
        mood_score = sentiment.mood_score,
        emotion = %sentiment.primary_emotion,
        "journal entry created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(JournalEntry::from(row), req_id.0.clone())),
    ))
}

/// GET /api/journal-entries/{id}
pub(super) async fn get_entry(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<JournalEntry>>, ApiError> {
    let row = mindflow_db::get_journal_entry(&state.pool, &user.id, id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "Journal entry not found"))?;

    Ok(Json(ApiResponse::new(JournalEntry::from(row), req_id.0)))
}

/// GET /api/mood/trend: chart series and average over recent scored entries.
pub(super) async fn mood_trend(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<MoodTrend>>, ApiError> {
    let rows = mindflow_db::list_trend_entries(&state.pool, &user.id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let entries: Vec<JournalEntry> = rows.into_iter().map(JournalEntry::from).collect();
    Ok(Json(ApiResponse::new(build_mood_trend(&entries), req_id.0)))
}
