//! Drawing surface pair: permanent canvas lookup and temporary overlay setup.
//!
//! The permanent layer is the page's existing `<canvas>`; the temporary
//! layer is created here, sized to match, absolutely positioned over it
//! inside the `#sketch` container, and given a crosshair cursor. Failure to
//! acquire either surface is fatal at startup — there is no functioning
//! layout without them.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::config::Config;
use crate::consts::{LINE_STYLE, TMP_CANVAS_ID};

/// Startup failure while acquiring or preparing the drawing surfaces.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// A required element is missing from the document.
    #[error("drawing surface not found: {0}")]
    SurfaceMissing(&'static str),
    /// The canvas exists but refused to hand out a 2D context.
    #[error("2d context unavailable")]
    ContextUnavailable,
    /// An underlying DOM call failed.
    #[error("dom error: {0}")]
    Dom(String),
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// The two drawing surfaces of one session.
pub struct SurfacePair {
    /// Live-drawing overlay, cleared after each flush.
    pub tmp_canvas: HtmlCanvasElement,
    /// Context of the temporary overlay.
    pub tmp_ctx: CanvasRenderingContext2d,
    /// Context of the permanent layer accumulating committed strokes.
    pub permanent_ctx: CanvasRenderingContext2d,
}

/// Acquire the permanent canvas, create and mount the temporary overlay,
/// and prepare both contexts.
///
/// # Errors
///
/// Returns [`SetupError`] when the page's `<canvas>` or `#sketch` container
/// is missing, a 2D context cannot be acquired, or a DOM call fails.
pub fn mount(document: &Document, config: &Config) -> Result<SurfacePair, SetupError> {
    let permanent: HtmlCanvasElement = document
        .query_selector("canvas")
        .map_err(dom)?
        .ok_or(SetupError::SurfaceMissing("canvas"))?
        .dyn_into()
        .map_err(|_| SetupError::SurfaceMissing("canvas"))?;
    permanent.set_width(config.width);
    permanent.set_height(config.height);
    let permanent_ctx = context_2d(&permanent)?;

    let sketch = document
        .query_selector("#sketch")
        .map_err(dom)?
        .ok_or(SetupError::SurfaceMissing("#sketch"))?;

    let tmp_canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom)?
        .dyn_into()
        .map_err(|_| SetupError::ContextUnavailable)?;
    tmp_canvas.set_id(TMP_CANVAS_ID);
    tmp_canvas.set_width(config.width);
    tmp_canvas.set_height(config.height);

    let style = tmp_canvas.style();
    for (name, value) in [
        ("position", "absolute"),
        ("left", "0px"),
        ("right", "0"),
        ("bottom", "0"),
        ("top", "0"),
        ("cursor", "crosshair"),
    ] {
        style.set_property(name, value).map_err(dom)?;
    }

    let tmp_ctx = context_2d(&tmp_canvas)?;
    tmp_ctx.set_line_width(config.line_width);
    tmp_ctx.set_line_cap(LINE_STYLE);
    tmp_ctx.set_line_join(LINE_STYLE);

    sketch.append_child(&tmp_canvas).map_err(dom)?;

    Ok(SurfacePair { tmp_canvas, tmp_ctx, permanent_ctx })
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SetupError> {
    canvas
        .get_context("2d")
        .map_err(dom)?
        .ok_or(SetupError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| SetupError::ContextUnavailable)
}

fn dom(err: JsValue) -> SetupError {
    SetupError::Dom(format!("{err:?}"))
}
