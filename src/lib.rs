#![doc = include_str!("../README.md")]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod preflight;

pub use auth::{API_KEY_SCHEME, get_api_key};
pub use error::{AppError, AuthError};
pub use extractors::ApiKey;
