use axum::{
    Router,
    routing::{get, post},
};
use common::{Settings, SettingsError, get_settings};
use std::sync::Arc;

pub mod error;
pub mod handlers;

use handlers::chat::chatting;
use handlers::hello::hello;

/// Resolves the settings a request runs with.
pub type SettingsResolver = fn() -> Result<&'static Settings, SettingsError>;

pub struct AppState {
    pub settings: SettingsResolver,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            settings: get_settings,
        }
    }
}

pub fn get_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/chatting", post(chatting))
        .with_state(state)
}
