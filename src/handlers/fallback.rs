use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    (StatusCode::NOT_FOUND, "Not found").into_response()
}
