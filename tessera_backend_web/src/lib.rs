// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for tessera.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`ElementRegistry`]: element kind → tag name registration
//! - [`Capabilities`]: one-time detection of optional DOM methods
//! - [`DomPresenter`]: applies [`ViewChanges`] to live `HtmlElement`s
//! - [`TouchHandler`]: receiver for gesture listener events
//!
//! ```rust,ignore
//! let registry = ElementRegistry::DEFAULT;
//! let mut presenter = DomPresenter::new(root, registry, Capabilities::detect());
//! presenter.register_handler(HandlerId(0), Rc::new(touch_handler));
//!
//! let changes = store.evaluate();
//! presenter.apply(&store, &changes);
//! ```
//!
//! [`ViewChanges`]: tessera_core::view::ViewChanges

#![no_std]

extern crate alloc;

mod capabilities;
mod gesture;
mod presenter;
mod registry;

pub use capabilities::Capabilities;
pub use gesture::TouchHandler;
pub use presenter::DomPresenter;
pub use registry::ElementRegistry;
pub use tessera_core::backend::Presenter;
