use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use mindflow_users::{User, UsersClient};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::session::session_token;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// The signed-in user, stored as a request extension by [`require_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[derive(Debug, Clone, Copy)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Fixed-window limiter with one window per signed-in user.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    windows: Arc<Mutex<HashMap<String, RateLimitWindow>>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Count one request for `key`; `false` once its window is spent.
    async fn try_acquire(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        windows.retain(|_, w| now.duration_since(w.started_at) < self.window);

        let entry = windows.entry(key.to_owned()).or_insert(RateLimitWindow {
            started_at: now,
            count: 0,
        });
        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    error: MiddlewareError,
}

#[derive(Debug, Serialize)]
struct MiddlewareError {
    code: &'static str,
    message: &'static str,
}

fn middleware_error(status: StatusCode, code: &'static str, message: &'static str) -> Response {
    (
        status,
        Json(MiddlewareErrorBody {
            error: MiddlewareError { code, message },
        }),
    )
        .into_response()
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware resolving the session cookie to a user via the users service.
///
/// Missing or unknown sessions get 401; an unreachable users service gets 502.
pub async fn require_session(
    State(users): State<UsersClient>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(req.headers()) else {
        return middleware_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing session",
        );
    };

    match users.get_current_user(&token).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser(user));
            next.run(req).await
        }
        Ok(None) => middleware_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "invalid or expired session",
        ),
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            middleware_error(
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                "could not verify session",
            )
        }
    }
}

/// Middleware enforcing the per-user request limit.
///
/// Must run inside [`require_session`]: requests are keyed by the
/// [`CurrentUser`] it inserts, so unauthenticated traffic never reaches
/// the limiter.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let Some(CurrentUser(user)) = req.extensions().get::<CurrentUser>() else {
        tracing::error!("rate limiter reached without a session user");
        return middleware_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing session",
        );
    };

    if !rate_limit.try_acquire(&user.id).await {
        tracing::info!(user_id = %user.id, "rate limit exceeded");
        return middleware_error(
            StatusCode::TOO_MANY_REQUESTS,
            "rate_limited",
            "rate limit exceeded",
        );
    }

    next.run(req).await
}
