pub mod api_key_auth;

pub use api_key_auth::require_api_key;
