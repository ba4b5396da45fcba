//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, shutdown wiring)
//!     → feed.rs (/server: record stream + echo routes)
//!     → relay.rs (/client: the same routes via upstream::UpstreamClient)
//!     → response.rs (content types, gateway failure mapping)
//! ```

pub mod feed;
pub mod relay;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
