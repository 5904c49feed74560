use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiSuccess};

pub mod contact;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found")
}

fn success() -> Response {
    Json(ApiSuccess { success: true }).into_response()
}

fn error(code: StatusCode, error: &'static str) -> Response {
    (
        code,
        Json(ApiError {
            success: false,
            error,
        }),
    )
        .into_response()
}
