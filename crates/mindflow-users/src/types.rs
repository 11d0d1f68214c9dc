use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the users service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RedirectUrlResponse {
    pub redirect_url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExchangeCodeRequest<'a> {
    pub code: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionTokenResponse {
    pub session_token: String,
}
