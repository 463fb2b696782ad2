//! Sync channel boundary: outbound emission and inbound validation.
//!
//! The transport is an injected collaborator, not an ambient global: the
//! host hands over its `emit(event, payload)` function at construction and
//! forwards inbound message bodies to the engine itself. Sends are
//! fire-and-forget — no acknowledgment, no delivery guarantee — and a
//! transport failure costs at most the one message.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use wasm_bindgen::JsValue;
use wire::{DRAWING_EVENT, DrawPayload};

/// Outbound half of the drawing channel.
pub struct SyncChannel {
    emit: js_sys::Function,
}

impl SyncChannel {
    #[must_use]
    pub fn new(emit: js_sys::Function) -> Self {
        Self { emit }
    }

    /// Publish one payload under [`DRAWING_EVENT`], fire-and-forget.
    /// Failures are logged and swallowed; drawing continues.
    pub fn send(&self, payload: &DrawPayload) {
        let text = match payload.to_json() {
            Ok(text) => text,
            Err(err) => {
                log::warn!("dropping unencodable drawing payload: {err}");
                return;
            }
        };
        if let Err(err) = self.emit.call2(
            &JsValue::NULL,
            &JsValue::from_str(DRAWING_EVENT),
            &JsValue::from_str(&text),
        ) {
            log::warn!("drawing emit failed: {err:?}");
        }
    }

    /// Validate one inbound message body at the channel boundary.
    ///
    /// Malformed input — invalid JSON, missing or mistyped `res` — is logged
    /// and dropped so a buggy peer cannot crash the session.
    #[must_use]
    pub fn decode(text: &str) -> Option<DrawPayload> {
        match DrawPayload::from_json(text) {
            Ok(payload) => Some(payload),
            Err(err) => {
                log::warn!("ignoring inbound drawing message: {err}");
                None
            }
        }
    }
}
