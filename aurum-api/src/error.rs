use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFoundError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, "Not found", msg),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
            "error": error,
        }));

        (status, body).into_response()
    }
}
