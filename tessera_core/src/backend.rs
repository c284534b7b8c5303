// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for render surfaces.
//!
//! Tessera splits platform-specific work into *backend* crates. A backend
//! owns the native elements (e.g. DOM nodes) and implements [`Presenter`] to
//! replay the change sets produced by
//! [`ViewStore::evaluate`](crate::view::ViewStore::evaluate).
//!
//! # Crate boundaries
//!
//! `tessera_core` owns the data model, style translation, evaluation and this
//! contract module. It never reads layout back from a render surface. Backend
//! crates depend on `tessera_core` and provide platform glue; host framework
//! code depends on both and wires them together.

use crate::view::{ViewChanges, ViewStore};

/// Applies evaluated view changes to a platform-native element tree.
///
/// Implementations must apply the parts of a [`ViewChanges`] in this order:
///
/// 1. `created`: build the host element and its child container.
/// 2. `borders_created`: build the border element inside the host.
/// 3. `tree`: replay insertions in order.
/// 4. `styles`: apply each write (after [`prefixed`](crate::style::prefixed)).
/// 5. `gestures`: attach and detach listeners.
/// 6. `removed`: detach host elements and drop everything held for them.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// // Host framework mutations during a batch:
/// store.set_frame(view, Frame::new(0.0, 0.0, 100.0, 40.0));
/// store.insert_child_at(root, view, 0)?;
///
/// // At the end of the batch:
/// let changes = store.evaluate();
/// presenter.apply(&store, &changes);
/// ```
pub trait Presenter {
    /// Applies the given [`ViewChanges`] to the backing element tree, reading
    /// current view state from `store` as needed.
    fn apply(&mut self, store: &ViewStore, changes: &ViewChanges);
}
