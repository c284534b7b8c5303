// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch handler listeners.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use tessera_core::view::{GestureRegistration, HandlerId};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent};

/// Receives the native events a gesture recognizer listens for.
pub trait TouchHandler {
    /// A mouse button went down on the view.
    fn mouse_click_began(&self, event: &MouseEvent);

    /// A touch started on the view.
    fn native_touch_began(&self, event: &TouchEvent);
}

/// One listener the presenter attached, kept so it can be removed again.
pub(crate) struct Listener {
    pub(crate) handler: HandlerId,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl core::fmt::Debug for Listener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("handler", &self.handler)
            .field("event", &self.event)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

impl Listener {
    /// Removes the listener from `target`.
    pub(crate) fn detach(&self, target: &EventTarget) {
        let _ = target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Attaches the listeners `registration` asks for, recording them in `out`.
pub(crate) fn attach(
    target: &EventTarget,
    registration: &GestureRegistration,
    handler: &Rc<dyn TouchHandler>,
    out: &mut Vec<Listener>,
) {
    if registration.events.mouse_down {
        let handler = Rc::clone(handler);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                handler.mouse_click_began(event);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback_and_bool(
            "mousedown",
            closure.as_ref().unchecked_ref(),
            false,
        );
        out.push(Listener {
            handler: registration.handler,
            event: "mousedown",
            capture: false,
            closure,
        });
    }

    if registration.events.touch_start {
        let handler = Rc::clone(handler);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(event) = event.dyn_ref::<TouchEvent>() {
                handler.native_touch_began(event);
            }
        }) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_capture(registration.options.capture);
        options.set_passive(registration.options.passive);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            closure.as_ref().unchecked_ref(),
            &options,
        );
        out.push(Listener {
            handler: registration.handler,
            event: "touchstart",
            capture: registration.options.capture,
            closure,
        });
    }
}
