// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for the DOM presenter.
//!
//! Run with `wasm-pack test --headless --firefox tessera_backend_web`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use tessera_backend_web::{Capabilities, DomPresenter, ElementRegistry, Presenter, TouchHandler};
use tessera_core::view::{DeviceKind, Frame, HandlerId, ListenerOptions, ViewStore, ViewTag};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{HtmlElement, MouseEvent, Node, TouchEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let root: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn presenter() -> DomPresenter {
    DomPresenter::new(root(), ElementRegistry::DEFAULT, Capabilities::detect())
}

#[derive(Default)]
struct CountingHandler {
    mouse: Cell<u32>,
}

impl TouchHandler for CountingHandler {
    fn mouse_click_began(&self, _event: &MouseEvent) {
        self.mouse.set(self.mouse.get() + 1);
    }

    fn native_touch_began(&self, _event: &TouchEvent) {}
}

fn same(a: &Node, b: &Node) -> bool {
    a.is_same_node(Some(b))
}

fn mousedown() -> web_sys::Event {
    web_sys::Event::new("mousedown").unwrap()
}

#[wasm_bindgen_test]
fn modern_engines_have_child_node_remove() {
    assert!(Capabilities::detect().child_node_remove);
}

#[wasm_bindgen_test]
fn created_view_has_child_container_and_base_style() {
    let mut store = ViewStore::new();
    let mut presenter = presenter();
    let id = store.create_view(ViewTag(1)).unwrap();
    store.mount(id).unwrap();
    let changes = store.evaluate();
    presenter.apply(&store, &changes);

    let host = presenter.element(id.index()).unwrap();
    assert_eq!(host.tag_name().to_lowercase(), "ui-view");
    assert_eq!(host.style().get_property_value("opacity").unwrap(), "0");
    let container = presenter.child_container(id.index()).unwrap();
    assert!(same(&container.parent_node().unwrap(), host));
    assert!(same(&host.parent_node().unwrap(), presenter.root()));
}

#[wasm_bindgen_test]
fn frame_writes_translate_and_opacity() {
    let mut store = ViewStore::new();
    let mut presenter = presenter();
    let id = store.create_view(ViewTag(1)).unwrap();
    store.set_opacity(id, 0.5);
    store.set_frame(id, Frame::new(10.0, 20.0, 30.0, 40.0));
    let changes = store.evaluate();
    presenter.apply(&store, &changes);

    let style = presenter.element(id.index()).unwrap().style();
    assert_eq!(
        style.get_property_value("transform").unwrap(),
        "translate(20px, 10px)"
    );
    assert_eq!(style.get_property_value("width").unwrap(), "30px");
    assert_eq!(style.get_property_value("opacity").unwrap(), "0.5");
}

#[wasm_bindgen_test]
fn insert_before_places_child_ahead_of_occupant() {
    let mut store = ViewStore::new();
    let mut presenter = presenter();
    let parent = store.create_view(ViewTag(0)).unwrap();
    let a = store.create_view(ViewTag(1)).unwrap();
    let b = store.create_view(ViewTag(2)).unwrap();
    store.insert_child_at(parent, a, 0).unwrap();
    store.insert_child_at(parent, b, 0).unwrap();
    let changes = store.evaluate();
    presenter.apply(&store, &changes);

    let container = presenter.child_container(parent.index()).unwrap();
    let first = container.first_element_child().unwrap();
    assert!(same(&first, presenter.element(b.index()).unwrap()));
}

#[wasm_bindgen_test]
fn border_is_appended_after_child_container() {
    let mut store = ViewStore::new();
    let mut presenter = presenter();
    let id = store.create_view(ViewTag(1)).unwrap();
    store
        .set_border(
            id,
            tessera_core::view::BorderProp::Radius,
            tessera_core::view::BorderValue::Length(6.0),
        )
        .unwrap();
    let changes = store.evaluate();
    presenter.apply(&store, &changes);

    let host = presenter.element(id.index()).unwrap();
    let border = presenter.border_element(id.index()).unwrap();
    assert!(same(&host.last_element_child().unwrap(), border));
    assert_eq!(host.style().get_property_value("border-radius").unwrap(), "6px");
    assert_eq!(border.style().get_property_value("border-radius").unwrap(), "6px");
}

#[wasm_bindgen_test]
fn gesture_listener_is_torn_down() {
    let mut store = ViewStore::new();
    let mut presenter = presenter();
    let handler = Rc::new(CountingHandler::default());
    presenter.register_handler(HandlerId(1), handler.clone());

    let id = store.create_view(ViewTag(1)).unwrap();
    let options = ListenerOptions::default();
    store.add_gesture_recognizer(id, HandlerId(1), DeviceKind::MouseOnly, options);
    let changes = store.evaluate();
    presenter.apply(&store, &changes);

    let host = presenter.element(id.index()).unwrap().clone();
    host.dispatch_event(&mousedown()).unwrap();
    assert_eq!(handler.mouse.get(), 0, "plain Event is not a MouseEvent");

    let event: web_sys::Event = MouseEvent::new("mousedown").unwrap().into();
    host.dispatch_event(&event).unwrap();
    assert_eq!(handler.mouse.get(), 1);

    store.remove_gesture_recognizer(id, HandlerId(1));
    let changes = store.evaluate();
    presenter.apply(&store, &changes);
    host.dispatch_event(&event).unwrap();
    assert_eq!(handler.mouse.get(), 1, "listener was removed");
}

#[wasm_bindgen_test]
fn purge_detaches_host() {
    let mut store = ViewStore::new();
    let mut presenter = presenter();
    let parent = store.create_view(ViewTag(0)).unwrap();
    let child = store.create_view(ViewTag(1)).unwrap();
    store.insert_child_at(parent, child, 0).unwrap();
    let changes = store.evaluate();
    presenter.apply(&store, &changes);
    let host = presenter.element(child.index()).unwrap().clone();

    store.purge(child);
    let changes = store.evaluate();
    presenter.apply(&store, &changes);
    assert!(host.parent_node().is_none());
    assert!(presenter.element(child.index()).is_none());
}
