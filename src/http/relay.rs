//! Handlers for the `/client` route group.
//!
//! Each route mirrors one `/server` route through the upstream client:
//! echo replies come back prefixed, the record stream comes back filtered.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use futures_util::{future, StreamExt, TryStreamExt};

use crate::employee::Employee;
use crate::feed::ndjson;
use crate::http::feed::EchoParams;
use crate::http::response::{json_text, stream_json, upstream_failure};
use crate::http::server::AppState;
use crate::upstream::UpstreamError;

/// `GET /client`: relay the upstream record stream, dropping records at or
/// above the configured age limit.
///
/// Records are logged as they arrive, before the filter, so the log shows
/// everything the upstream sent.
pub async fn relay_stream(State(state): State<AppState>) -> Response {
    let upstream = match state.client.fetch_record_stream::<Employee>().await {
        Ok(stream) => stream,
        Err(e) => return upstream_failure(e),
    };

    let age_limit = state.upstream.age_limit;

    let body = upstream
        .inspect_ok(|record| {
            tracing::debug!(id = record.id, age = record.age, "Record received from upstream");
        })
        .try_filter(move |record| future::ready(record.age < age_limit))
        .map(|result| {
            result.and_then(|record| ndjson::encode_record(&record).map_err(UpstreamError::from))
        })
        .take_until(state.shutdown.signalled());

    stream_json(body)
}

/// `POST /client`: forward the body to the upstream body echo.
pub async fn relay_body(State(state): State<AppState>, info: String) -> Response {
    match state.client.post_info(info).await {
        Ok(reply) => json_text(format!("proxy -> {reply}")),
        Err(e) => upstream_failure(e),
    }
}

/// `GET /client/uri?info=...`: forward the query parameter.
pub async fn relay_query(
    State(state): State<AppState>,
    Query(params): Query<EchoParams>,
) -> Response {
    match state.client.query_info(&params.info).await {
        Ok(reply) => json_text(format!("proxy -> {reply}")),
        Err(e) => upstream_failure(e),
    }
}

/// `GET /client/{info}`: forward the path segment.
///
/// This is the route whose outbound call logs the request line and the
/// response headers.
pub async fn relay_path(State(state): State<AppState>, Path(info): Path<String>) -> Response {
    match state.client.path_info(&info).await {
        Ok(reply) => json_text(format!("proxy -> {reply}")),
        Err(e) => upstream_failure(e),
    }
}
