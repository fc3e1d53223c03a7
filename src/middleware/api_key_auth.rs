use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::get_api_key;
use crate::error::AppError;
use crate::extractors::ApiKey;

/// Rejects requests that do not present an `ApiKey` authorization header.
///
/// The parsed key is stored in the request extensions, where the [`ApiKey`]
/// extractor picks it up.
///
/// # Errors
///
/// Returns [`AppError::Unauthorized`] if the header is missing or malformed.
pub async fn require_api_key(mut request: Request, next: Next) -> Result<Response, AppError> {
    let key = match get_api_key(request.headers()) {
        Ok(key) => ApiKey::new(key),
        Err(e) => {
            tracing::debug!(
                method = %request.method(),
                path = %request.uri().path(),
                "rejecting request: {e}"
            );
            return Err(e.into());
        }
    };

    request.extensions_mut().insert(key);

    Ok(next.run(request).await)
}
