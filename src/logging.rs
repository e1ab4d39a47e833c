//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of bytes of a request or response body logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Some(body) = buffer_body(body).await else {
        return axum::http::StatusCode::BAD_REQUEST.into_response();
    };

    let body_text = String::from_utf8_lossy(&body);
    tracing::info!(
        "Received request: {} {} body: {:?}",
        parts.method,
        parts.uri,
        truncate(&body_text)
    );
    log_full_body("request", &body_text);

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let Some(body) = buffer_body(body).await else {
        return axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let body_text = String::from_utf8_lossy(&body);
    tracing::info!(
        "Sending response: {} body: {:?}",
        parts.status,
        truncate(&body_text)
    );
    log_full_body("response", &body_text);

    Response::from_parts(parts, Body::from(body))
}

async fn buffer_body(body: Body) -> Option<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("Could not read body: {error}"))
        .ok()
}

/// The first [LOG_BODY_LENGTH_LIMIT] bytes of `text`, cut on a character boundary.
fn truncate(text: &str) -> &str {
    if text.len() <= LOG_BODY_LENGTH_LIMIT {
        return text;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn log_full_body(kind: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!("Full {kind} body: {body:?}");
    }
}
