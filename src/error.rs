use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::auth::API_KEY_SCHEME;

/// Reasons an `Authorization` header did not yield an API key.
///
/// The display strings are relied on by clients, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    MissingAuthHeader,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum AppError {
    Unauthorized(AuthError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized(err) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, API_KEY_SCHEME)],
                err.to_string(),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::MissingAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            AuthError::MalformedAuthHeader.to_string(),
            "malformed authorization header"
        );
    }

    #[test]
    fn test_unauthorized_response_challenges_with_scheme() {
        let response = AppError::from(AuthError::MalformedAuthHeader).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE),
            Some(&header::HeaderValue::from_static("ApiKey"))
        );
    }

    #[test]
    fn test_auth_error_converts_to_unauthorized() {
        assert!(matches!(
            AppError::from(AuthError::MissingAuthHeader),
            AppError::Unauthorized(AuthError::MissingAuthHeader)
        ));
    }
}
