//! Employee record subsystem.
//!
//! # Data Flow
//! ```text
//! sequence number (per stream subscription)
//!     → generator.rs (sample name/age/salary/phone/address)
//!     → Employee (serde value, camelCase wire names)
//!     → feed::ndjson (stream-json encoding)
//! ```
//!
//! # Design Decisions
//! - Records are plain values constructed fresh per emission; no identity
//!   beyond the caller-supplied id
//! - Chinese-locale corpora for the text fields (name, phone, street)
//! - Numeric bounds live in generator.rs, not on the type

pub mod generator;
pub mod types;

pub use types::Employee;
