use api_key_auth::{app, config::AppConfig};
use axum::Router;

pub const TEST_KEY: &str = "test-api-key-123";

pub fn create_test_app() -> Router {
    app::router(&AppConfig::default())
}
