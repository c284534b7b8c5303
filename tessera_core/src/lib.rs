// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained view tree that keeps abstract UI nodes synchronized with inline
//! style state.
//!
//! `tessera_core` owns the data model for a DOM-backed view layer without
//! touching the DOM itself. It is `no_std` compatible (with `alloc`) and uses
//! struct-of-arrays storage with generational index handles.
//!
//! # Architecture
//!
//! The host framework mutates views; evaluation turns those mutations into an
//! ordered change set that a platform presenter applies:
//!
//! ```text
//!   Host framework
//!       │  set_top / set_frame / insert_child_at / purge / ...
//!       ▼
//!   ViewStore ──► ViewStore::evaluate() ──► ViewChanges ──► Presenter::apply()
//! ```
//!
//! **[`view`]**: struct-of-arrays view tree. Geometry, transform, appearance,
//! pointer routing, borders and gesture registrations are set by the caller.
//! Geometry mutators suppress writes when the value does not change.
//!
//! **[`style`]**: the style translator. Maps a property/value pair to the
//! browser-prefixed declarations a render surface needs, and holds the base
//! declarations of each element kind.
//!
//! **[`dirty`]**: one `understory_dirty` channel per CSS concern. Writes to the
//! same concern of the same view are coalesced between evaluations.
//!
//! **[`transform`]**: column-major 4×4 matrix and animated transform ops, plus
//! the composite `transform` string.
//!
//! **[`color`]**: packed ARGB decoding and the background colour input type.
//!
//! **[`backend`]**: the [`Presenter`](backend::Presenter) trait that render
//! surfaces implement.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and the zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod color;
pub mod config;
pub mod dirty;
pub mod error;
pub mod style;
pub mod trace;
pub mod transform;
pub mod view;

pub use error::ViewError;
