// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View identity types.
//!
//! A view has two names. [`ViewId`] is the store's own handle and goes stale
//! when the view is purged. [`ViewTag`] is the number the host framework
//! picked for it and is what crosses the bridge to the host.

use core::fmt;

/// Slot index meaning "no parent" or "no view".
pub const INVALID: u32 = u32::MAX;

/// A handle to a view in a [`ViewStore`](super::ViewStore).
///
/// Purging a view bumps its slot's generation, so a handle kept past
/// [`purge`](super::ViewStore::purge) panics on use instead of reaching
/// whatever view takes the slot next.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId {
    pub(crate) idx: u32,
    /// Bumped on purge.
    pub(crate) generation: u32,
}

impl ViewId {
    /// Returns the slot index.
    ///
    /// Presenters key their elements by this value; it is what
    /// [`ViewChanges`](super::ViewChanges) refers to.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation the handle was issued for.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({}@gen{})", self.idx, self.generation)
    }
}

/// The host framework's identifier for a view.
///
/// At most one live view carries a given tag; creating a second one fails
/// with [`DuplicateTag`](crate::ViewError::DuplicateTag). Purging a view
/// releases its tag at once, so the host may hand the same number to a new
/// view before the next evaluation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewTag(pub u64);

impl fmt::Debug for ViewTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewTag({})", self.0)
    }
}
