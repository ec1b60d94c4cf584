use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

pub enum AppError {
    /// The route exists but has no behavior yet.
    NotImplemented(&'static str),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Self::NotImplemented(route) => (
                StatusCode::NOT_IMPLEMENTED,
                format!("{route} is not implemented yet"),
            ),
            Self::Internal(err) => {
                error!("Request failed: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {err}"))
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
