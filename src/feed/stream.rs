//! Interval-driven record production.

use std::time::Duration;

use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::IntervalStream;

use crate::employee::Employee;

/// Unbounded stream of generated records, one per `period`.
///
/// The first record is produced on subscription (tokio intervals yield
/// their first tick immediately) and emission `n` carries id `n`. The
/// stream never completes on its own; it ends when the subscriber drops it.
pub fn employee_stream(period: Duration) -> impl Stream<Item = Employee> {
    IntervalStream::new(tokio::time::interval(period))
        .enumerate()
        .map(|(seq, _tick)| Employee::generate(seq as u64))
}
