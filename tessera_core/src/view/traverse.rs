// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use core::slice;

use super::id::ViewId;
use super::store::ViewStore;

/// An iterator over the direct children of a view, in stacking order.
///
/// Created by [`ViewStore::children`].
#[derive(Debug)]
pub struct Children<'a> {
    store: &'a ViewStore,
    inner: slice::Iter<'a, u32>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(store: &'a ViewStore, children: &'a [u32]) -> Self {
        Self {
            store,
            inner: children.iter(),
        }
    }
}

impl Iterator for Children<'_> {
    type Item = ViewId;

    fn next(&mut self) -> Option<ViewId> {
        let &idx = self.inner.next()?;
        Some(ViewId {
            idx,
            generation: self.store.generation[idx as usize],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Children<'_> {}
