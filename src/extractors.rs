use std::fmt;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::get_api_key;
use crate::error::AppError;

const REDACTED: &str = "****";
const VISIBLE_PREFIX: usize = 4;

/// An API key presented by the client.
///
/// Handlers receive this either from the extensions set by
/// [`require_api_key`](crate::middleware::require_api_key) or, on routes
/// without the middleware, by parsing the request headers directly.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Shows the first four characters of the key followed by `****`.
    /// Keys too short to keep anything hidden are fully masked.
    #[must_use]
    pub fn redacted(&self) -> String {
        if self.0.chars().count() <= VISIBLE_PREFIX {
            return REDACTED.to_string();
        }

        let prefix: String = self.0.chars().take(VISIBLE_PREFIX).collect();
        format!("{prefix}{REDACTED}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        let key = get_api_key(&parts.headers)?;
        Ok(ApiKey::new(key))
    }
}
