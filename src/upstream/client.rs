//! Outbound call templates for the relay routes.

use bytes::Bytes;
use futures_util::{stream, Stream, StreamExt};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;
use crate::feed::ndjson::LineBuffer;
use crate::upstream::hooks;

/// Errors that can occur while calling the upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, protocol, or non-success status failure.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream sent a line that does not parse as a record.
    #[error("upstream sent a malformed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Result type for upstream calls.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// HTTP client bound to the record feed's base URL.
///
/// One template per upstream route. Cloning is cheap and shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Create a client for the configured upstream.
    ///
    /// Fails when the base URL does not parse; a trailing slash on the
    /// configured path is dropped.
    pub fn new(config: &UpstreamConfig) -> Result<Self, url::ParseError> {
        let mut base_url = Url::parse(&config.base_url)?;
        if let Ok(mut path) = base_url.path_segments_mut() {
            path.pop_if_empty();
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// The base URL calls are issued against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL with one more path segment.
    ///
    /// The segment is percent-encoded, so `/`, `?` and `#` inside it travel
    /// as data instead of becoming URL structure.
    fn route(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs are hierarchical, so segments can always be pushed.
        if let Ok(mut path) = url.path_segments_mut() {
            path.push(segment);
        }
        url
    }

    /// Open the record stream with `GET {base}`.
    ///
    /// The outer error covers connect and status failures; once the stream
    /// is open, transport and parse failures arrive as items so the caller
    /// can abort mid-relay.
    pub async fn fetch_record_stream<T>(
        &self,
    ) -> UpstreamResult<impl Stream<Item = UpstreamResult<T>>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.base_url.clone())
            .send()
            .await?
            .error_for_status()?;

        Ok(decode_records(response.bytes_stream().boxed()))
    }

    /// Forward a body with `POST {base}` and return the reply text.
    pub async fn post_info(&self, info: String) -> UpstreamResult<String> {
        let reply = self
            .http
            .post(self.base_url.clone())
            .body(info)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(reply)
    }

    /// Forward a query parameter with `GET {base}/uri?info=...`.
    pub async fn query_info(&self, info: &str) -> UpstreamResult<String> {
        let reply = self
            .http
            .get(self.route("uri"))
            .query(&[("info", info)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(reply)
    }

    /// Forward a path segment with `GET {base}/{info}`.
    ///
    /// This is the template that carries the logging hooks: the request
    /// line before send, every response header after receive.
    pub async fn path_info(&self, info: &str) -> UpstreamResult<String> {
        let request = self.http.get(self.route(info)).build()?;
        hooks::log_request(&request);

        let response = self.http.execute(request).await?;
        hooks::log_response_headers(&response);

        let reply = response.error_for_status()?.text().await?;
        Ok(reply)
    }
}

/// Turn an NDJSON byte stream into typed records.
///
/// Yields one item per complete line, flushes an unterminated tail at end
/// of stream, and surfaces transport errors in place.
fn decode_records<T, S>(bytes: S) -> impl Stream<Item = UpstreamResult<T>>
where
    T: DeserializeOwned,
    S: Stream<Item = reqwest::Result<Bytes>> + Unpin,
{
    stream::unfold(
        (bytes, LineBuffer::new(), false),
        |(mut bytes, mut lines, mut done)| async move {
            loop {
                if let Some(line) = lines.next_line() {
                    let item = serde_json::from_slice(&line).map_err(UpstreamError::from);
                    return Some((item, (bytes, lines, done)));
                }
                if done {
                    let tail = lines.take_tail()?;
                    let item = serde_json::from_slice(&tail).map_err(UpstreamError::from);
                    return Some((item, (bytes, lines, done)));
                }
                match bytes.next().await {
                    Some(Ok(chunk)) => lines.push(&chunk),
                    Some(Err(e)) => {
                        return Some((Err(UpstreamError::Request(e)), (bytes, lines, done)))
                    }
                    None => done = true,
                }
            }
        },
    )
}
