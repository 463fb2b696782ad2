//! Point-count flush control for in-progress strokes.
//!
//! Tracks how many points the current stroke has emitted and decides when
//! the temporary layer must be force-committed. The counter survives
//! ceiling flushes so a single very long stroke triggers the ceiling
//! repeatedly; it resets only when the stroke itself ends.

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;

/// Decides when a stroke's accumulated points force a flush.
#[derive(Debug, Clone)]
pub struct FlushController {
    ceiling: u64,
    emitted: u64,
}

impl FlushController {
    /// Create a controller that fires every `ceiling` emitted points.
    /// A ceiling of zero disables the automatic flush.
    #[must_use]
    pub fn new(ceiling: u64) -> Self {
        Self { ceiling, emitted: 0 }
    }

    /// Record one emitted point. Returns `true` when a ceiling flush is due.
    pub fn record(&mut self) -> bool {
        self.emitted += 1;
        self.ceiling > 0 && self.emitted % self.ceiling == 0
    }

    /// Reset the counter at stroke end. Ceiling flushes must NOT call this:
    /// the modulo check has to keep firing across one uninterrupted stroke.
    pub fn finish_stroke(&mut self) {
        self.emitted = 0;
    }

    /// Points emitted by the current stroke so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}
