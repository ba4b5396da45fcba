//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast → listener drains, record streams end
//!
//! Signals (signals.rs):
//!     SIGTERM / Ctrl+C → wait_for_signal returns → caller triggers shutdown
//! ```
//!
//! # Design Decisions
//! - One broadcast channel for everything long-running: the accept loop and
//!   every in-flight stream subscribe to the same signal
//! - Signal handling stays in main; the server only sees the channel

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
