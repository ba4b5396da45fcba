//! Logging hooks around outbound calls.
//!
//! Side-effecting observers only: nothing here alters the request or the
//! response. Only the path-variable template attaches them; the other
//! templates stay silent.

use tracing::info;

/// Log the request line before it leaves.
pub fn log_request(request: &reqwest::Request) {
    info!(method = %request.method(), url = %request.url(), "Sending request");
}

/// Log every response header as its own event.
pub fn log_response_headers(response: &reqwest::Response) {
    for (name, value) in response.headers() {
        match value.to_str() {
            Ok(value) => info!(header = %name, value = %value, "Response header"),
            Err(_) => info!(header = %name, value = ?value, "Response header"),
        }
    }
}
