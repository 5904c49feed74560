use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing, Router,
};
use relay_core_contact_contracts::{ContactSendMessageError, ContactService};
use relay_models::contact::ContactMessage;
use tracing::debug;

use super::{error, success};
use crate::models::contact::ApiContactMessage;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(
            "/",
            routing::post(send_message).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            debug!("Failed to read request body: {err}");
            return error(StatusCode::BAD_REQUEST, "Invalid body");
        }
    };

    let message = match ApiContactMessage::from_json(&body) {
        Ok(message) => message,
        Err(err) => {
            debug!("Failed to parse request body: {err}");
            return error(StatusCode::BAD_REQUEST, "Invalid JSON");
        }
    };

    let Ok(message) = ContactMessage::try_from(message) else {
        debug!("Contact message is missing required fields");
        return error(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    match service.send_message(message).await {
        Ok(()) => success(),
        Err(ContactSendMessageError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send to Telegram")
        }
    }
}

async fn method_not_allowed() -> Response {
    (
        [(header::ALLOW, "POST")],
        error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
    )
        .into_response()
}
