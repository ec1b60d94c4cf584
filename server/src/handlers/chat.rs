use axum::extract::State;
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use crate::error::AppError;

/// Chat endpoint. No request or response schema is defined yet, so it
/// answers `501 Not Implemented` once settings resolve.
pub async fn chatting(State(state): State<Arc<AppState>>) -> Result<(), AppError> {
    let settings = (state.settings)()?;
    info!(
        "Received chatting request for chatbot: {}",
        settings.chatbot_name
    );

    Err(AppError::NotImplemented("/chatting"))
}
