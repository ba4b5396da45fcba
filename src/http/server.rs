//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both route groups
//! - Wire up middleware (tracing, request IDs)
//! - Share config sections and the upstream client with handlers
//! - Serve with graceful shutdown

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::{FeedConfig, ServiceConfig, UpstreamConfig};
use crate::http::{feed, relay};
use crate::lifecycle::Shutdown;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub feed: FeedConfig,
    pub upstream: UpstreamConfig,
    pub client: UpstreamClient,
    pub shutdown: Shutdown,
}

/// HTTP server for the relay service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails when the upstream base URL does not parse. The shutdown handle
    /// ends in-flight record streams when triggered; pass the matching
    /// receiver to [`run`](Self::run) so the listener drains on the same
    /// signal.
    pub fn new(config: ServiceConfig, shutdown: Shutdown) -> Result<Self, url::ParseError> {
        let client = UpstreamClient::new(&config.upstream)?;

        let state = AppState {
            feed: config.feed.clone(),
            upstream: config.upstream.clone(),
            client,
            shutdown,
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        // Request IDs must be set outside the trace layer so its spans
        // carry them; propagation runs inside to copy them onto responses.
        Router::new()
            .route("/server", get(feed::stream_employees).post(feed::echo_body))
            .route("/server/uri", get(feed::echo_query))
            .route("/server/{info}", get(feed::echo_path))
            .route("/client", get(relay::relay_stream).post(relay::relay_body))
            .route("/client/uri", get(relay::relay_query))
            .route("/client/{info}", get(relay::relay_path))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
