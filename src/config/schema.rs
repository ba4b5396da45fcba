//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal file (or none at all) still yields
//! a runnable configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream the relay routes call out to.
    pub upstream: UpstreamConfig,

    /// Record feed settings.
    pub feed: FeedConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream configuration for the relay routes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the record feed, path prefix included. Defaults to this
    /// service's own feed routes, so a single instance relays to itself.
    pub base_url: String,

    /// Records at or above this age are dropped from the relayed stream.
    pub age_limit: u8,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/server".to_string(),
            age_limit: 25,
        }
    }
}

/// Record feed configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Milliseconds between records on the streaming route.
    pub interval_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}
