//! Server-side record streaming subsystem.
//!
//! # Data Flow
//! ```text
//! subscription (one per GET on the stream route)
//!     → stream.rs (interval ticks → numbered records)
//!     → ndjson.rs (one JSON document per line)
//!     → HTTP response body, flushed per record
//! ```
//!
//! # Design Decisions
//! - The timer lives inside the per-subscription stream; dropping the
//!   response body cancels it
//! - No producer-side pacing beyond the interval: a consumer that stalls
//!   sees a burst when it resumes, per the interval's missed-tick behavior

pub mod ndjson;
pub mod stream;

pub use stream::employee_stream;
