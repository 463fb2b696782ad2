//! Input model: the gesture phase machine and coordinate mapping.
//!
//! The original event-stream composition (merge/switchMap-style combinators
//! over mouse and touch streams) is replaced here by an explicit two-state
//! machine driven by the unified down/move/up events: `Idle → Capturing` on
//! pointer-down, `Capturing → Idle` on pointer-up. Move events outside a
//! gesture are ignored. All work happens inside each event callback before
//! control returns to the host event loop; nothing blocks.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use wire::Position;

/// Phase of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Between pointer-down and pointer-up; move events append points.
    Capturing,
}

/// Map viewport client coordinates onto the drawing surface.
///
/// `rect_left`/`rect_top` come from the surface's bounding rectangle and
/// must be queried at dispatch time, not cached, so strokes track correctly
/// when the surface moves or the page scrolls.
#[must_use]
pub fn surface_position(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Position {
    Position::new(client_x - rect_left, client_y - rect_top)
}
