use axum::{Json, response::IntoResponse};
use serde::Serialize;

use crate::auth::API_KEY_SCHEME;
use crate::extractors::ApiKey;

#[derive(Serialize, Debug)]
pub struct WhoAmI {
    pub scheme: &'static str,
    pub key: String,
}

/// Reports which key the caller authenticated with, redacted.
pub async fn whoami(key: ApiKey) -> impl IntoResponse {
    tracing::debug!(key = %key.redacted(), "whoami");

    Json(WhoAmI {
        scheme: API_KEY_SCHEME,
        key: key.redacted(),
    })
}
