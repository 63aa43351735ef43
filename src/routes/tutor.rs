use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{AppState, handlers, models::tutor::IncomingMessage};

pub const EMPTY_MESSAGE: &str = "Message cannot be empty.";

#[utoipa::path(
    post,
    path = "/api/tutor/converse",
    tag = "tutor",
    request_body = IncomingMessage,
    responses(
        (status = 200, description = "Tutor reply, or a fallback sentence if Gemini failed", body = String, content_type = "text/plain"),
        (status = 400, description = "Message missing or blank", body = String, content_type = "text/plain"),
        (status = 403, description = "Origin not allowed", body = String, content_type = "text/plain")
    )
)]
pub async fn converse(
    State(state): State<AppState>,
    Json(payload): Json<IncomingMessage>,
) -> Response {
    let Some(message) = payload.usable_message() else {
        return text(StatusCode::BAD_REQUEST, EMPTY_MESSAGE.to_string());
    };

    info!("Incoming tutor message (len={})", message.len());

    let reply = handlers::tutor::get_tutor_response(&state, message).await;
    text(StatusCode::OK, reply)
}

fn text(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain;charset=UTF-8")],
        body,
    )
        .into_response()
}
