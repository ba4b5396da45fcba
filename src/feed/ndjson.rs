//! Newline-delimited JSON framing.
//!
//! One compact JSON document per line, `\n` terminated, sent incrementally
//! over a single response. Deliberately not a JSON array: each line is
//! parseable the moment it arrives.
//!
//! # Design Decisions
//! - Documents never contain raw newlines; the compact encoder escapes
//!   control characters
//! - Decoding is incremental: transport chunks may split or merge lines

use bytes::{Bytes, BytesMut};
use serde::Serialize;

/// Content type advertised on streaming responses.
pub const STREAM_JSON: &str = "application/stream+json";

/// Encode one record as a newline-terminated JSON line.
pub fn encode_record<T: Serialize>(record: &T) -> Result<Bytes, serde_json::Error> {
    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');
    Ok(Bytes::from(line))
}

/// Incremental splitter for newline-delimited frames.
///
/// Transport chunks are pushed in as they arrive and complete lines popped
/// out; a line split across chunks stays buffered until its terminator
/// shows up.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: BytesMut,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self { buf: BytesMut::new() }
    }

    /// Append a transport chunk.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Pop the next complete line, without its terminator.
    ///
    /// Blank lines are skipped rather than returned. A trailing `\r` is
    /// stripped so CRLF-framed senders still parse.
    pub fn next_line(&mut self) -> Option<Bytes> {
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let mut line = self.buf.split_to(pos + 1);
            line.truncate(pos);
            if line.last() == Some(&b'\r') {
                line.truncate(line.len() - 1);
            }
            if !line.is_empty() {
                return Some(line.freeze());
            }
        }
        None
    }

    /// Take whatever unterminated tail remains.
    ///
    /// Only meaningful at end of stream; a sender that terminates every
    /// line leaves nothing here.
    pub fn take_tail(&mut self) -> Option<Bytes> {
        let tail = self.buf.split();
        if tail.is_empty() {
            None
        } else {
            Some(tail.freeze())
        }
    }
}
