//! DOM listener wiring: unifies mouse and touch streams into engine calls.
//!
//! Each logical gesture event is fed by two DOM sources — `mousedown` /
//! `touchstart`, `mousemove` / `touchmove`, `mouseup` / `touchend` — and
//! both land on the same [`Session`] handler. Touch listeners are
//! registered passive so they never interfere with default scrolling.
//!
//! Closures are handed to the DOM with `forget()`: the listeners live for
//! the lifetime of the session, matching the surface singletons.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, MouseEvent, TouchEvent};

use crate::app::Session;

/// Attach the six gesture listeners to the temporary overlay canvas.
///
/// # Errors
///
/// Returns `Err` if the DOM rejects a listener registration.
pub fn attach(session: &Rc<Session>) -> Result<(), JsValue> {
    let target = session.tmp_canvas().clone();

    {
        let session = Rc::clone(session);
        let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            session.pointer_down(f64::from(ev.client_x()), f64::from(ev.client_y()));
        });
        target.add_event_listener_with_callback("mousedown", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    {
        let session = Rc::clone(session);
        let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            session.pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y()));
        });
        target.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    {
        let session = Rc::clone(session);
        let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |_ev: MouseEvent| {
            session.pointer_up();
        });
        target.add_event_listener_with_callback("mouseup", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    {
        let session = Rc::clone(session);
        let cb = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                session.pointer_down(f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
        });
        add_passive(&target, "touchstart", &cb)?;
        cb.forget();
    }
    {
        let session = Rc::clone(session);
        let cb = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                session.pointer_move(f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
        });
        add_passive(&target, "touchmove", &cb)?;
        cb.forget();
    }
    {
        let session = Rc::clone(session);
        let cb = Closure::<dyn FnMut(TouchEvent)>::new(move |_ev: TouchEvent| {
            session.pointer_up();
        });
        target.add_event_listener_with_callback("touchend", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

fn add_passive(
    target: &web_sys::HtmlCanvasElement,
    event: &str,
    cb: &Closure<dyn FnMut(TouchEvent)>,
) -> Result<(), JsValue> {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )
}
