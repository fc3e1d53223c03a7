use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::error::AuthError;

/// Scheme token expected at the start of the `Authorization` header.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the API key from an `Authorization: ApiKey <token>` header.
///
/// Only the first `Authorization` value is consulted. The value is split on
/// runs of whitespace; the first field must be exactly `ApiKey` and the
/// second is returned. Anything after the second field is ignored.
///
/// # Errors
///
/// Returns [`AuthError::MissingAuthHeader`] if the header is absent or empty,
/// and [`AuthError::MalformedAuthHeader`] if the value is not valid UTF-8,
/// uses another scheme, or carries no key after the scheme.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AuthError::MissingAuthHeader);
    };

    if value.is_empty() {
        return Err(AuthError::MissingAuthHeader);
    }

    // `HeaderValue::to_str` rejects obs-text, but UTF-8 keys are allowed.
    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedAuthHeader)?;

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}
