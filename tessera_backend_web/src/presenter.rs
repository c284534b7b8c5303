// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! Translates [`ViewStore`] state into live elements by applying incremental
//! updates from [`ViewChanges`]. Every view owns a host element with a
//! child container inside it; a border element is appended after the child
//! container on first use.
//!
//! [`ViewStore`]: tessera_core::view::ViewStore
//! [`ViewChanges`]: tessera_core::view::ViewChanges

use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use tessera_core::backend::Presenter;
use tessera_core::config::ViewConfig;
use tessera_core::style::{self, Declaration, ElementKind};
use tessera_core::view::{GestureOp, HandlerId, TreeOp, ViewChanges, ViewStore};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use crate::capabilities::Capabilities;
use crate::gesture::{self, Listener, TouchHandler};
use crate::registry::ElementRegistry;

/// The elements backing one view.
#[derive(Debug)]
struct ViewElements {
    host: HtmlElement,
    child_container: HtmlElement,
    border: Option<HtmlElement>,
    listeners: Vec<Listener>,
}

impl ViewElements {
    fn target(&self, kind: ElementKind) -> Option<&HtmlElement> {
        match kind {
            ElementKind::Host => Some(&self.host),
            ElementKind::ChildContainer => Some(&self.child_container),
            ElementKind::Border => self.border.as_ref(),
        }
    }
}

/// Maps a [`ViewStore`] to live DOM elements, applying incremental updates
/// from [`ViewChanges`].
///
/// Views mounted with [`ViewStore::mount`] are appended to `root`. Touch
/// handlers referenced by gesture registrations must be
/// [registered](Self::register_handler) before the change set that attaches
/// them is applied; unknown handlers are skipped.
pub struct DomPresenter {
    root: HtmlElement,
    document: Option<Document>,
    registry: ElementRegistry,
    capabilities: Capabilities,
    elements: Vec<Option<ViewElements>>,
    handlers: HashMap<HandlerId, Rc<dyn TouchHandler>>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("root", &"HtmlElement")
            .field("registry", &self.registry)
            .field("capabilities", &self.capabilities)
            .field("elements_len", &self.elements.len())
            .field("handlers_len", &self.handlers.len())
            .finish()
    }
}

impl DomPresenter {
    /// Creates a new presenter that mounts root views into `root`.
    ///
    /// Elements are created in `root`'s owner document, falling back to the
    /// global `document`.
    #[must_use]
    pub fn new(root: HtmlElement, registry: ElementRegistry, capabilities: Capabilities) -> Self {
        let document = root
            .owner_document()
            .or_else(|| web_sys::window().and_then(|w| w.document()));
        Self {
            root,
            document,
            registry,
            capabilities,
            elements: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Returns the root element.
    #[must_use]
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// Makes `handler` available to gesture registrations that name `id`.
    pub fn register_handler(&mut self, id: HandlerId, handler: Rc<dyn TouchHandler>) {
        self.handlers.insert(id, handler);
    }

    /// Forgets a handler. Listeners already attached stay until detached.
    pub fn unregister_handler(&mut self, id: HandlerId) -> Option<Rc<dyn TouchHandler>> {
        self.handlers.remove(&id)
    }

    /// Returns the host element of the view at raw slot `idx`, if it exists.
    #[must_use]
    pub fn element(&self, idx: u32) -> Option<&HtmlElement> {
        self.get(idx).map(|v| &v.host)
    }

    /// Returns the child container of the view at raw slot `idx`.
    #[must_use]
    pub fn child_container(&self, idx: u32) -> Option<&HtmlElement> {
        self.get(idx).map(|v| &v.child_container)
    }

    /// Returns the border element of the view at raw slot `idx`, if created.
    #[must_use]
    pub fn border_element(&self, idx: u32) -> Option<&HtmlElement> {
        self.get(idx).and_then(|v| v.border.as_ref())
    }

    fn get(&self, idx: u32) -> Option<&ViewElements> {
        self.elements.get(idx as usize).and_then(|slot| slot.as_ref())
    }

    fn get_mut(&mut self, idx: u32) -> Option<&mut ViewElements> {
        self.elements
            .get_mut(idx as usize)
            .and_then(|slot| slot.as_mut())
    }

    /// Takes the elements out of the slot, leaving `None`.
    fn take(&mut self, idx: u32) -> Option<ViewElements> {
        self.elements.get_mut(idx as usize)?.take()
    }

    /// Stores elements at the given slot index, growing the vec if needed.
    fn put(&mut self, idx: u32, elements: ViewElements) {
        let slot = idx as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some(elements);
    }

    /// Creates an element of `kind` with its base declarations applied.
    fn create(&self, kind: ElementKind, config: &ViewConfig) -> Option<HtmlElement> {
        let document = self.document.as_ref()?;
        let el: HtmlElement = document
            .create_element(self.registry.tag_name(kind))
            .ok()?
            .dyn_into()
            .ok()?;
        set_declarations(&el, &style::prefix_all(&style::base_declarations(kind, config)));
        Some(el)
    }

    fn create_view(&mut self, idx: u32, config: &ViewConfig) {
        let (Some(host), Some(child_container)) = (
            self.create(ElementKind::Host, config),
            self.create(ElementKind::ChildContainer, config),
        ) else {
            return;
        };
        let _ = host.append_child(&child_container);
        self.put(
            idx,
            ViewElements {
                host,
                child_container,
                border: None,
                listeners: Vec::new(),
            },
        );
    }

    fn create_border(&mut self, idx: u32, config: &ViewConfig) {
        if self.get(idx).is_none_or(|v| v.border.is_some()) {
            return;
        }
        let Some(border) = self.create(ElementKind::Border, config) else {
            return;
        };
        if let Some(view) = self.get_mut(idx) {
            let _ = view.host.append_child(&border);
            view.border = Some(border);
        }
    }

    fn apply_tree_op(&self, op: TreeOp) {
        match op {
            TreeOp::Mount { view } => {
                if let Some(v) = self.get(view) {
                    let _ = self.root.append_child(&v.host);
                }
            }
            TreeOp::Append { parent, child } => {
                if let (Some(p), Some(c)) = (self.get(parent), self.get(child)) {
                    let _ = p.child_container.append_child(&c.host);
                }
            }
            TreeOp::InsertBefore {
                parent,
                child,
                before,
            } => {
                if let (Some(p), Some(c), Some(b)) =
                    (self.get(parent), self.get(child), self.get(before))
                {
                    let _ = p
                        .child_container
                        .insert_before(&c.host, Some(&b.host));
                }
            }
        }
    }

    fn apply_gesture_op(&mut self, op: GestureOp) {
        match op {
            GestureOp::Attach { view, registration } => {
                let Some(handler) = self.handlers.get(&registration.handler).cloned() else {
                    return;
                };
                if let Some(v) = self.get_mut(view) {
                    gesture::attach(&v.host, &registration, &handler, &mut v.listeners);
                }
            }
            GestureOp::Detach { view, handler } => {
                if let Some(v) = self.get_mut(view) {
                    let host = &v.host;
                    v.listeners.retain(|l| {
                        if l.handler == handler {
                            l.detach(host);
                            false
                        } else {
                            true
                        }
                    });
                }
            }
        }
    }

    fn remove_view(&mut self, idx: u32) {
        let Some(v) = self.take(idx) else {
            return;
        };
        for listener in &v.listeners {
            listener.detach(&v.host);
        }
        self.capabilities.detach(&v.host);
        // Dropping `v` releases the listener closures.
    }
}

impl Presenter for DomPresenter {
    /// Applies incremental changes from a [`ViewChanges`] to the DOM.
    fn apply(&mut self, store: &ViewStore, changes: &ViewChanges) {
        let config = *store.config();

        // 1. Creations
        for &idx in &changes.created {
            self.create_view(idx, &config);
        }
        for &idx in &changes.borders_created {
            self.create_border(idx, &config);
        }

        // 2. Structure, in call order
        for &op in &changes.tree {
            self.apply_tree_op(op);
        }

        // 3. Styles
        for write in &changes.styles {
            if let Some(el) = self.get(write.view).and_then(|v| v.target(write.target)) {
                set_declarations(el, &write.declarations());
            }
        }

        // 4. Gestures
        for &op in &changes.gestures {
            self.apply_gesture_op(op);
        }

        // 5. Removals
        for &idx in &changes.removed {
            self.remove_view(idx);
        }
    }
}

fn set_declarations(el: &HtmlElement, declarations: &[Declaration]) {
    let s = el.style();
    for d in declarations {
        let _ = s.set_property(d.property, &d.value);
    }
}
