use axum::{Router, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{healthz, whoami};
use crate::middleware::require_api_key;

/// Builds the service router.
///
/// `/whoami` sits behind [`require_api_key`]; `/healthz` is open.
pub fn router(config: &AppConfig) -> Router {
    let protected = Router::new()
        .route("/whoami", get(whoami))
        .route_layer(middleware::from_fn(require_api_key));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.request_timeout())),
        )
}
