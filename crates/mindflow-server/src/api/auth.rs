//! Sign-in, session and sign-out handlers. OAuth itself happens in the
//! users service; these routes only relay codes and manage the cookie.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, HeaderValue},
    Extension, Json,
};
use mindflow_users::{User, UsersError};
use serde::{Deserialize, Serialize};

use crate::middleware::{CurrentUser, RequestId};
use crate::session::{cleared_session_cookie, session_cookie, session_token};

use super::{map_json_rejection, map_users_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CreateSessionRequest {
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct RedirectUrlData {
    pub redirect_url: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SuccessData {
    pub success: bool,
}

type CookieResponse = ([(header::HeaderName, HeaderValue); 1], Json<ApiResponse<SuccessData>>);

/// GET /api/oauth/{provider}/redirect_url
pub(super) async fn oauth_redirect_url(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(provider): Path<String>,
) -> Result<Json<ApiResponse<RedirectUrlData>>, ApiError> {
    let redirect_url = state
        .users
        .oauth_redirect_url(&provider)
        .await
        .map_err(|e| map_users_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(
        RedirectUrlData { redirect_url },
        req_id.0,
    )))
}

/// POST /api/sessions: exchange an OAuth code and set the session cookie.
pub(super) async fn create_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<CookieResponse, ApiError> {
    let rid = req_id.0;
    let Json(body) = body.map_err(|rejection| map_json_rejection(rid.clone(), &rejection))?;

    let Some(code) = body.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) else {
        return Err(ApiError::new(
            rid,
            "bad_request",
            "No authorization code provided",
        ));
    };

    let token = match state.users.exchange_code(code).await {
        Ok(token) => token,
        Err(UsersError::Status { status, .. }) if (400..500).contains(&status) => {
            tracing::info!(status, "authorization code rejected by users service");
            return Err(ApiError::new(
                rid,
                "unauthorized",
                "authorization code was rejected",
            ));
        }
        Err(e) => return Err(map_users_error(rid, &e)),
    };

    let cookie = session_cookie(&token).ok_or_else(|| {
        tracing::error!("users service returned a session token unusable as a cookie");
        ApiError::new(rid.clone(), "internal_error", "could not create session")
    })?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponse::new(SuccessData { success: true }, rid)),
    ))
}

/// GET /api/users/me
pub(super) async fn current_user(
    Extension(req_id): Extension<RequestId>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<ApiResponse<User>> {
    Json(ApiResponse::new(user, req_id.0))
}

/// GET /api/logout: revoke the upstream session (best effort) and clear the cookie.
pub(super) async fn logout(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
) -> CookieResponse {
    if let Some(token) = session_token(&headers) {
        if let Err(e) = state.users.delete_session(&token).await {
            tracing::warn!(error = %e, "failed to revoke session; clearing cookie anyway");
        }
    }

    (
        [(header::SET_COOKIE, cleared_session_cookie())],
        Json(ApiResponse::new(SuccessData { success: true }, req_id.0)),
    )
}
