use axum::{Json, extract::State, http::StatusCode};
use common::Settings;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::AppState;

pub const HELLO_MESSAGE: &str = "Hello from API";

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct HelloResponse {
    #[serde(rename = "APP Name")]
    pub app_name: String,
    #[serde(rename = "APP Version")]
    pub app_version: String,
    #[serde(rename = "Chatbot Name")]
    pub chatbot_name: String,
    #[serde(rename = "Prompt Version")]
    pub prompt_version: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl HelloResponse {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            app_name: settings.app_name.clone(),
            app_version: settings.app_version.clone(),
            chatbot_name: settings.chatbot_name.clone(),
            prompt_version: String::new(),
            message: HELLO_MESSAGE.to_string(),
        }
    }

    /// Body sent when settings cannot be resolved.
    pub fn fallback() -> Self {
        Self {
            app_name: "NULL".to_string(),
            app_version: "0".to_string(),
            chatbot_name: "NULL".to_string(),
            prompt_version: "0".to_string(),
            message: HELLO_MESSAGE.to_string(),
        }
    }
}

pub async fn hello(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HelloResponse>) {
    match (state.settings)() {
        Ok(settings) => {
            info!("Successfully retrieved app settings");
            (StatusCode::OK, Json(HelloResponse::from_settings(settings)))
        }
        Err(e) => {
            error!("Failed to get settings from environment: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HelloResponse::fallback()),
            )
        }
    }
}
