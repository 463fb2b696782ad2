//! Shared numeric constants and defaults for the sketch crate.

/// Default stroke width in device pixels. Runtime-adjustable via
/// [`crate::app::SketchBoard::set_line_width`].
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;

/// Emitted points per stroke before a forced commit of the temporary layer.
///
/// The smoother's point history is O(n); without a ceiling an uninterrupted
/// stroke would grow working memory and redraw cost without bound. The
/// permanent layer keeps the committed pixels, so visual continuity is
/// preserved across ceiling flushes.
pub const POINT_CEILING: u64 = 2550;

/// Default drawing surface width in device pixels.
pub const SURFACE_WIDTH: u32 = 1024;

/// Default drawing surface height in device pixels.
pub const SURFACE_HEIGHT: u32 = 768;

/// DOM id assigned to the temporary overlay canvas.
pub const TMP_CANVAS_ID: &str = "tmp_canvas";

/// Line cap and join style applied to the drawing contexts.
pub const LINE_STYLE: &str = "round";
