// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by view tree mutations.

use crate::view::{BorderProp, ViewTag};

/// Shorthand for results of fallible view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// A rejected view tree mutation.
///
/// Stale [`ViewId`](crate::view::ViewId) handles are not reported here; they
/// are API misuse and panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// An insertion index was past the end of the child sequence.
    #[error("child index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Current number of children.
        len: usize,
    },
    /// The view already has a parent or is mounted as a root.
    #[error("view is already attached to a parent")]
    AlreadyParented,
    /// Inserting the child would make a view its own ancestor.
    #[error("insertion would create a cycle")]
    WouldCycle,
    /// The view is not a child of the given parent.
    #[error("view is not a child of the given parent")]
    NotAChild,
    /// A flat transform array did not hold exactly 16 values.
    #[error("transform must have 16 values, got {len}")]
    TransformShape {
        /// Length of the rejected array.
        len: usize,
    },
    /// A border value did not match the kind its property expects.
    #[error("value kind does not match border property {prop:?}")]
    BorderValueKind {
        /// The property being written.
        prop: BorderProp,
    },
    /// Another live view already uses this tag.
    #[error("tag {0:?} is already in use")]
    DuplicateTag(ViewTag),
}
