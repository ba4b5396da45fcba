//! Handlers for the `/server` route group: the record stream and the three
//! echo routes beside it.

use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::response::Response;
use futures_util::StreamExt;
use serde::Deserialize;

use crate::feed::{self, ndjson};
use crate::http::response::{json_text, stream_json};
use crate::http::server::AppState;

/// Query parameters for the query-echo routes.
#[derive(Debug, Deserialize)]
pub struct EchoParams {
    pub info: String,
}

/// `GET /server`: unbounded record stream, one record per configured
/// period, the first immediately.
pub async fn stream_employees(State(state): State<AppState>) -> Response {
    let period = Duration::from_millis(state.feed.interval_ms);

    let body = feed::employee_stream(period)
        .take_until(state.shutdown.signalled())
        .map(|record| ndjson::encode_record(&record));

    stream_json(body)
}

/// `POST /server`: echo the request body.
pub async fn echo_body(info: String) -> Response {
    json_text(format!("post info :  {info}"))
}

/// `GET /server/uri?info=...`: echo a query parameter.
pub async fn echo_query(Query(params): Query<EchoParams>) -> Response {
    json_text(format!("uri param -> key: info, value: {}", params.info))
}

/// `GET /server/{info}`: echo the trailing path segment.
pub async fn echo_path(Path(info): Path<String>) -> Response {
    json_text(format!("uri param -> key: info, value: {info}"))
}
