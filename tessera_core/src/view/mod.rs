// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays view tree.
//!
//! The view tree is stored in a [`ViewStore`] using parallel arrays indexed by
//! slot. [`ViewId`] handles carry a generation counter so that stale
//! references are detected after a view is purged and its slot reused.
//!
//! Each view owns three render-surface elements: its host box, a transparent
//! full-bleed child container that parents its children, and an optional
//! border element created on the first border write. The store never touches
//! those elements; it records what changed and [`ViewStore::evaluate`] hands
//! a [`ViewChanges`] to a [`Presenter`](crate::backend::Presenter).

mod border;
mod evaluate;
mod gesture;
mod id;
mod props;
mod store;
mod traverse;

pub use border::{BorderProp, BorderStyle, BorderValue, BorderValueKind};
pub use evaluate::{EvaluateSummary, StyleWrite, TreeOp, ViewChanges};
pub use gesture::{
    DeviceKind, GestureEvents, GestureOp, GestureRegistration, HandlerId, ListenerOptions,
};
pub use id::{INVALID, ViewId, ViewTag};
pub use props::{BackfaceVisibility, Cursor, Frame, Overflow, PointerEvents, Position};
pub use store::ViewStore;
pub use traverse::Children;
