//! Canvas engine for the collaborative sketch board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the stroke pipeline end to end: translating raw DOM pointer/touch events
//! into an in-progress stroke, smoothing the sampled points into a drawable
//! path, rendering onto a temporary overlay surface, committing to the
//! permanent surface on flush, and exchanging stroke updates with peers
//! over an injected transport. The host JavaScript layer supplies only the
//! transport's `emit` function and forwards inbound `"drawing"` messages to
//! [`app::SketchBoard::receive`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Browser entry point: the [`app::SketchBoard`] handle exported to JS |
//! | [`engine`] | Testable [`engine::EngineCore`]: gesture lifecycle and action emission |
//! | [`input`] | Gesture phase machine and coordinate mapping |
//! | [`batch`] | Point-count flush controller |
//! | [`stroke`] | Geometry smoothing: point sequences into drawable paths |
//! | [`render`] | 2D-context rendering and layer commits |
//! | [`surface`] | Drawing surface pair acquisition and setup |
//! | [`sync`] | Sync channel boundary: outbound emission and inbound validation |
//! | [`events`] | DOM listener wiring for unified mouse/touch streams |
//! | [`config`] | Runtime configuration |
//! | [`consts`] | Shared numeric constants and defaults |

pub mod app;
pub mod batch;
pub mod config;
pub mod consts;
pub mod engine;
pub mod events;
pub mod input;
pub mod render;
pub mod stroke;
pub mod surface;
pub mod sync;
