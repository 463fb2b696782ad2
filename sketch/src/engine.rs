//! Core engine: gesture lifecycle, batching, and action emission.
//!
//! `EngineCore` contains every decision in the stroke pipeline that does not
//! touch the browser: which points belong to the current stroke, what path
//! to draw, what to broadcast, and when to commit the temporary layer. It is
//! fully testable on the native target; the browser layer in [`crate::app`]
//! executes the returned [`Action`]s against the real surfaces and transport.
//!
//! Local and remote strokes share the same surface pair. A remote message
//! arriving mid-gesture commits the local in-progress pixels early; this is
//! a known limitation of the single-buffer design. The full-sequence
//! representation keeps it cosmetic: the next local move repaints the entire
//! stroke-so-far onto the temporary layer.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wire::{DrawPayload, Position};

use crate::batch::FlushController;
use crate::config::Config;
use crate::input::GesturePhase;
use crate::stroke::{StrokePath, smooth};

/// Actions returned from event handlers for the browser layer to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Publish a payload on the sync channel.
    Broadcast(DrawPayload),
    /// Replace the temporary layer's content with the given path.
    Render(StrokePath),
    /// Draw the temporary layer onto the permanent layer, then clear it.
    Flush,
}

/// Engine state for one drawing session.
pub struct EngineCore {
    config: Config,
    phase: GesturePhase,
    points: Vec<Position>,
    flush: FlushController,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            points: Vec::new(),
            flush: FlushController::new(config.point_ceiling),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Adjust the stroke width for subsequent rendering.
    pub fn set_line_width(&mut self, width: f64) {
        self.config.line_width = width;
    }

    /// Begin a stroke at `point`. Renders the initial dot so a plain tap
    /// leaves a mark; nothing is broadcast until the first move.
    pub fn on_pointer_down(&mut self, point: Position) -> Vec<Action> {
        self.phase = GesturePhase::Capturing;
        self.points.clear();
        self.points.push(point);
        vec![Action::Render(smooth(&self.points, self.config.line_width))]
    }

    /// Append one move sample to the open stroke.
    ///
    /// Emits the stroke-so-far on the sync channel, re-renders the smoothed
    /// path, and — when the emitted-point ceiling is reached — commits the
    /// temporary layer and restarts accumulation without ending the stroke.
    pub fn on_pointer_move(&mut self, point: Position) -> Vec<Action> {
        if self.phase != GesturePhase::Capturing {
            return Vec::new();
        }
        self.points.push(point);

        let mut actions = vec![
            Action::Broadcast(DrawPayload::new(self.points.clone())),
            Action::Render(smooth(&self.points, self.config.line_width)),
        ];
        if self.flush.record() {
            actions.push(Action::Flush);
            self.points.clear();
        }
        actions
    }

    /// End the open stroke: commit the temporary layer and reset all
    /// accumulation, counter included.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.phase != GesturePhase::Capturing {
            return Vec::new();
        }
        self.phase = GesturePhase::Idle;
        self.points.clear();
        self.flush.finish_stroke();
        vec![Action::Flush]
    }

    /// Render one validated inbound payload through the same smoothing path
    /// used for local strokes, then commit it.
    ///
    /// Committing per message keeps remote pixels durable without a remote
    /// stroke buffer: later messages repeat the earlier points, and
    /// re-committing the same pixels is visually idempotent. An empty
    /// payload is a no-op.
    pub fn apply_remote(&self, payload: &DrawPayload) -> Vec<Action> {
        if payload.res.is_empty() {
            return Vec::new();
        }
        vec![
            Action::Render(smooth(&payload.res, self.config.line_width)),
            Action::Flush,
        ]
    }
}
