//! Shared wire model for the realtime drawing channel.
//!
//! This crate owns the wire representation used on both sides of the sync
//! channel: the canvas-local [`Position`], the single [`DrawPayload`] message
//! shape, and boundary validation of inbound messages. Payloads travel as
//! JSON text under a fixed transport event name ([`DRAWING_EVENT`]); the
//! transport itself (any relay exposing `emit`/`on`) stays outside this
//! crate.
//!
//! The protocol is deliberately minimal: one message type, no versioning,
//! no sequence numbers, no per-stroke identifier. A receiver renders each
//! payload against whatever stroke state is currently open.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

/// Transport event name all drawing traffic is published under.
pub const DRAWING_EVENT: &str = "drawing";

/// Error returned when an inbound message fails boundary validation.
///
/// Validation failure is never fatal for a session: callers log and drop
/// the message rather than propagating, so a buggy or malicious peer cannot
/// crash a drawing session.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The message body is not valid JSON, or it does not match the
    /// `{ "res": [{x, y}, ...] }` payload shape.
    #[error("malformed drawing payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A point in canvas-local coordinates (device pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One incremental update on the drawing channel.
///
/// `res` carries the ordered point sequence of the sender's stroke-so-far.
/// Successive messages for the same stroke repeat the earlier points, so a
/// receiver can render each message in isolation. An empty sequence is a
/// valid message that receivers treat as a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPayload {
    /// Stroke-so-far point sequence, oldest first.
    pub res: Vec<Position>,
}

impl DrawPayload {
    #[must_use]
    pub fn new(res: Vec<Position>) -> Self {
        Self { res }
    }

    /// Serialize the payload to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails; with this shape that does not
    /// occur in practice, but the error is propagated rather than swallowed.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse and validate one inbound message body.
    ///
    /// Unknown extra fields are tolerated; a missing or mistyped `res` is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] when `text` is not valid JSON or
    /// does not match the payload shape.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(text)?)
    }
}
