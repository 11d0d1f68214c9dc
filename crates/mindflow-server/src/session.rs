//! Session cookie handling. The token itself is opaque and owned by the
//! users service.

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, HeaderValue,
};

pub const SESSION_COOKIE_NAME: &str = "mindflow_session_token";

/// 60 days.
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 24 * 60 * 60;

/// `Set-Cookie` value carrying a fresh session token.
///
/// Returns `None` if the token contains bytes not allowed in a header.
pub fn session_cookie(token: &str) -> Option<HeaderValue> {
    if token.is_empty() || token.contains([';', ',', ' ']) {
        return None;
    }
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; Secure; SameSite=None; Max-Age={SESSION_MAX_AGE_SECS}"
    ))
    .ok()
}

/// `Set-Cookie` value that expires the session cookie.
pub fn cleared_session_cookie() -> HeaderValue {
    HeaderValue::from_static(
        "mindflow_session_token=; Path=/; HttpOnly; Secure; SameSite=None; Max-Age=0",
    )
}

/// Session token from the cookie, falling back to an `Authorization: Bearer` header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    cookie_token(headers).or_else(|| {
        extract_bearer_token(headers.get(AUTHORIZATION)).map(ToOwned::to_owned)
    })
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE_NAME && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|s| !s.trim().is_empty())
}
