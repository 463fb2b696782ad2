//! Rendering: replays stroke paths onto the 2D contexts and commits layers.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives the renderer-neutral
//! [`StrokePath`] produced by [`crate::stroke`] and mutates the two drawing
//! surfaces; it carries no state of its own.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the caller in [`crate::app`] logs failures.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::stroke::StrokePath;

/// Replace the temporary layer's content with `path`.
///
/// The full surface is cleared first: with the full-sequence representation
/// every render repaints the entire stroke-so-far, so stale partial paths
/// must not accumulate underneath.
///
/// # Errors
///
/// Returns `Err` if a `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    path: &StrokePath,
) -> Result<(), JsValue> {
    clear(ctx, canvas);
    match path {
        StrokePath::Empty => {}
        StrokePath::Dot { center, radius } => {
            ctx.begin_path();
            ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
            ctx.fill();
        }
        StrokePath::Curve { start, segments } => {
            ctx.begin_path();
            ctx.move_to(start.x, start.y);
            for seg in segments {
                ctx.quadratic_curve_to(seg.ctrl.x, seg.ctrl.y, seg.to.x, seg.to.y);
            }
            ctx.stroke();
        }
    }
    Ok(())
}

/// Snapshot-and-clear: draw the temporary surface's current pixel content
/// onto the permanent surface at (0,0), then blank the temporary surface.
///
/// Flushing an already-empty temporary surface draws nothing and clears
/// nothing visible — the operation is idempotent.
///
/// # Errors
///
/// Returns `Err` if the blit fails.
pub fn flush(
    tmp_ctx: &CanvasRenderingContext2d,
    tmp_canvas: &HtmlCanvasElement,
    permanent_ctx: &CanvasRenderingContext2d,
) -> Result<(), JsValue> {
    permanent_ctx.draw_image_with_html_canvas_element(tmp_canvas, 0.0, 0.0)?;
    clear(tmp_ctx, tmp_canvas);
    Ok(())
}

/// Clear a surface's full rectangular area.
pub fn clear(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
}
