// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time browser capability detection.

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Browser features the presenter adapts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// `Element.prototype.remove` (`ChildNode.remove`) exists.
    pub child_node_remove: bool,
}

impl Capabilities {
    /// Assumes a modern engine.
    pub const MODERN: Self = Self {
        child_node_remove: true,
    };

    /// Probes the running engine. Nothing global is modified.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            child_node_remove: prototype_has("Element", "remove"),
        }
    }

    /// Detaches `el` from its parent, if it has one.
    pub(crate) fn detach(self, el: &HtmlElement) {
        if self.child_node_remove {
            el.remove();
        } else if let Some(parent) = el.parent_node() {
            let _ = parent.remove_child(el);
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether `globalThis[constructor].prototype` has `method`.
fn prototype_has(constructor: &str, method: &str) -> bool {
    let global = js_sys::global();
    let Ok(ctor) = js_sys::Reflect::get(&global, &JsValue::from_str(constructor)) else {
        return false;
    };
    if ctor.is_undefined() {
        return false;
    }
    let Ok(proto) = js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")) else {
        return false;
    };
    proto.is_object() && js_sys::Reflect::has(&proto, &JsValue::from_str(method)).unwrap_or(false)
}
