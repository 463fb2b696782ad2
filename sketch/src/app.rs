//! Browser entry point: the [`SketchBoard`] handle exported to the JS host.
//!
//! The host constructs one `SketchBoard` per page, passing the transport's
//! `emit` function, and forwards every inbound `"drawing"` message body to
//! [`SketchBoard::receive`]. Everything else — surface setup, listener
//! wiring, rendering, flushing — happens inside this crate.
//!
//! ```js
//! const board = new SketchBoard((event, body) => socket.emit(event, JSON.parse(body)));
//! socket.on("drawing", (message) => board.receive(JSON.stringify(message)));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::Config;
use crate::engine::{Action, EngineCore};
use crate::input::surface_position;
use crate::render;
use crate::surface::{self, SurfacePair};
use crate::sync::SyncChannel;
use crate::{consts, events};

/// Shared per-session state: the engine core plus the browser resources the
/// returned [`Action`]s are executed against. One instance per mounted
/// board, shared by the event closures via `Rc`.
pub struct Session {
    core: RefCell<EngineCore>,
    surfaces: SurfacePair,
    channel: SyncChannel,
}

impl Session {
    pub(crate) fn tmp_canvas(&self) -> &web_sys::HtmlCanvasElement {
        &self.surfaces.tmp_canvas
    }

    /// Map viewport client coordinates through the overlay's bounding
    /// rectangle, queried now — not cached — so strokes track scrolling.
    fn map(&self, client_x: f64, client_y: f64) -> wire::Position {
        let rect = self.surfaces.tmp_canvas.get_bounding_client_rect();
        surface_position(client_x, client_y, rect.left(), rect.top())
    }

    pub(crate) fn pointer_down(&self, client_x: f64, client_y: f64) {
        let point = self.map(client_x, client_y);
        let actions = self.core.borrow_mut().on_pointer_down(point);
        self.dispatch(actions);
    }

    pub(crate) fn pointer_move(&self, client_x: f64, client_y: f64) {
        let point = self.map(client_x, client_y);
        let actions = self.core.borrow_mut().on_pointer_move(point);
        self.dispatch(actions);
    }

    pub(crate) fn pointer_up(&self) {
        let actions = self.core.borrow_mut().on_pointer_up();
        self.dispatch(actions);
    }

    /// Execute engine actions against the real surfaces and transport.
    /// Each action completes before the next; a draw failure is logged and
    /// the remaining actions still run.
    fn dispatch(&self, actions: Vec<Action>) {
        for action in actions {
            let result = match action {
                Action::Broadcast(payload) => {
                    self.channel.send(&payload);
                    Ok(())
                }
                Action::Render(path) => {
                    render::draw(&self.surfaces.tmp_ctx, &self.surfaces.tmp_canvas, &path)
                }
                Action::Flush => render::flush(
                    &self.surfaces.tmp_ctx,
                    &self.surfaces.tmp_canvas,
                    &self.surfaces.permanent_ctx,
                ),
            };
            if let Err(err) = result {
                log::error!("canvas draw failed: {err:?}");
            }
        }
    }
}

/// The collaborative sketch board, exported to JavaScript.
#[wasm_bindgen]
pub struct SketchBoard {
    session: Rc<Session>,
}

#[wasm_bindgen]
impl SketchBoard {
    /// Mount the drawing surfaces and input listeners.
    ///
    /// `emit` is the transport's publish function, called as
    /// `emit("drawing", payload_json)`. `config_json` optionally overrides
    /// defaults (line width, point ceiling, surface dimensions).
    ///
    /// # Errors
    ///
    /// Returns `Err` when the page lacks the required `<canvas>` or
    /// `#sketch` elements, or when the configuration is malformed — both
    /// fatal at startup.
    #[wasm_bindgen(constructor)]
    pub fn new(emit: js_sys::Function, config_json: Option<String>) -> Result<SketchBoard, JsValue> {
        init_logging();

        let config = match config_json {
            Some(text) => Config::from_json(&text)
                .map_err(|err| JsValue::from_str(&format!("invalid config: {err}")))?,
            None => Config::default(),
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let surfaces = surface::mount(&document, &config)?;

        let session = Rc::new(Session {
            core: RefCell::new(EngineCore::new(config)),
            surfaces,
            channel: SyncChannel::new(emit),
        });
        events::attach(&session)?;

        log::info!(
            "sketch board mounted: {}x{}, ceiling {}",
            config.width,
            config.height,
            config.point_ceiling
        );
        Ok(SketchBoard { session })
    }

    /// Feed one inbound message body from the transport's `on("drawing")`
    /// handler. Malformed bodies are ignored.
    pub fn receive(&self, body: &str) {
        if let Some(payload) = SyncChannel::decode(body) {
            let actions = self.session.core.borrow().apply_remote(&payload);
            self.session.dispatch(actions);
        }
    }

    /// Adjust the stroke width for subsequent drawing.
    pub fn set_line_width(&self, width: f64) {
        let width = if width > 0.0 { width } else { consts::DEFAULT_LINE_WIDTH };
        self.session.core.borrow_mut().set_line_width(width);
        self.session.surfaces.tmp_ctx.set_line_width(width);
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A logger is already installed (second board on one page); keep it.
        log::debug!("console logger already initialized");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}
