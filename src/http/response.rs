//! Response construction helpers.
//!
//! # Responsibilities
//! - Uniform content types across both route groups
//! - Handle response streaming without buffering entire bodies
//! - Map upstream failures to one generic gateway error
//!
//! # Design Decisions
//! - Echo replies are raw text under a JSON content type, not JSON-encoded
//!   strings
//! - The upstream failure cause is logged server-side; clients see a fixed
//!   message

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use futures_util::TryStream;

use crate::feed::ndjson;
use crate::upstream::UpstreamError;

/// Raw string reply under a JSON content type.
pub fn json_text(text: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], text).into_response()
}

/// Streaming reply carrying newline-delimited JSON documents.
pub fn stream_json<S>(stream: S) -> Response
where
    S: TryStream + Send + 'static,
    S::Ok: Into<Bytes>,
    S::Error: Into<axum::BoxError>,
{
    (
        [(header::CONTENT_TYPE, ndjson::STREAM_JSON)],
        Body::from_stream(stream),
    )
        .into_response()
}

/// Generic failure reply for any upstream problem.
///
/// The cause goes to the log; the client sees one fixed message.
pub fn upstream_failure(error: UpstreamError) -> Response {
    tracing::error!(error = %error, "Upstream call failed");
    (StatusCode::BAD_GATEWAY, "upstream request failed").into_response()
}
