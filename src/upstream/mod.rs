//! Upstream HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! /client handler
//!     → client.rs (call template against the configured base URL)
//!     → hooks.rs (path template only: request/response logging)
//!     → reply text or decoded record stream back to the handler
//! ```
//!
//! # Design Decisions
//! - One shared reqwest client; connections pool across calls
//! - No retry, no circuit breaking: every failure maps to one error type
//!   and the handler decides the status
//! - Record decoding is incremental so filtering starts on the first line

pub mod client;
pub mod hooks;

pub use client::{UpstreamClient, UpstreamError, UpstreamResult};
