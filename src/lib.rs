//! Employee record feed and HTTP relay demo.
//!
//! Two route groups on one listener: `/server` streams generated employee
//! records and answers echo requests; `/client` reproduces each `/server`
//! route through an outbound HTTP client, filtering the relayed stream and
//! logging around the calls.

// Core subsystems
pub mod config;
pub mod employee;
pub mod feed;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
