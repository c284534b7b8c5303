// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for evaluation.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`ViewStore::evaluate_traced`](crate::view::ViewStore::evaluate_traced)
//! calls for every change it reports. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::view::{EvaluateSummary, GestureOp, StyleWrite, TreeOp, ViewTag};

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from evaluation.
///
/// Events arrive in the order presenters apply them: creations, border
/// creations, tree ops, style writes, gesture ops, removals, and finally the
/// summary. All methods have default no-op implementations, so you only need
/// to override the events you care about.
pub trait TraceSink {
    /// Called for each view whose elements must be created.
    fn on_view_created(&mut self, view: u32, tag: ViewTag) {
        _ = (view, tag);
    }

    /// Called for each view whose border element must be created.
    fn on_border_created(&mut self, view: u32) {
        _ = view;
    }

    /// Called for each structural operation.
    fn on_tree_op(&mut self, op: &TreeOp) {
        _ = op;
    }

    /// Called for each style write.
    fn on_style_write(&mut self, write: &StyleWrite) {
        _ = write;
    }

    /// Called for each gesture listener change.
    fn on_gesture_op(&mut self, op: &GestureOp) {
        _ = op;
    }

    /// Called for each purged view.
    fn on_view_removed(&mut self, view: u32) {
        _ = view;
    }

    /// Called once at the end of every evaluation.
    fn on_evaluate(&mut self, summary: &EvaluateSummary) {
        _ = summary;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Dispatches to the sink when the `trace` feature is on.
macro_rules! dispatch {
    ($self:ident, $method:ident($($arg:expr),*)) => {{
        #[cfg(feature = "trace")]
        if let Some(s) = &mut $self.sink {
            s.$method($($arg),*);
        }
        #[cfg(not(feature = "trace"))]
        {
            $(_ = $arg;)*
        }
    }};
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Reports a created view.
    #[inline]
    pub fn view_created(&mut self, view: u32, tag: ViewTag) {
        dispatch!(self, on_view_created(view, tag));
    }

    /// Reports a created border element.
    #[inline]
    pub fn border_created(&mut self, view: u32) {
        dispatch!(self, on_border_created(view));
    }

    /// Reports a [`TreeOp`].
    #[inline]
    pub fn tree_op(&mut self, op: &TreeOp) {
        dispatch!(self, on_tree_op(op));
    }

    /// Reports a [`StyleWrite`].
    #[inline]
    pub fn style_write(&mut self, write: &StyleWrite) {
        dispatch!(self, on_style_write(write));
    }

    /// Reports a [`GestureOp`].
    #[inline]
    pub fn gesture_op(&mut self, op: &GestureOp) {
        dispatch!(self, on_gesture_op(op));
    }

    /// Reports a removed view.
    #[inline]
    pub fn view_removed(&mut self, view: u32) {
        dispatch!(self, on_view_removed(view));
    }

    /// Reports the end of an evaluation.
    #[inline]
    pub fn evaluated(&mut self, summary: &EvaluateSummary) {
        dispatch!(self, on_evaluate(summary));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Frame, ViewStore};

    #[derive(Default)]
    struct CountingSink {
        created: usize,
        styles: usize,
        summaries: usize,
    }

    impl TraceSink for CountingSink {
        fn on_view_created(&mut self, _view: u32, _tag: ViewTag) {
            self.created += 1;
        }

        fn on_style_write(&mut self, _write: &StyleWrite) {
            self.styles += 1;
        }

        fn on_evaluate(&mut self, _summary: &EvaluateSummary) {
            self.summaries += 1;
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_view_created(0, ViewTag(1));
        sink.on_evaluate(&EvaluateSummary::default());
    }

    #[test]
    fn tracer_none_does_not_panic() {
        let mut tracer = Tracer::none();
        tracer.view_created(0, ViewTag(1));
        tracer.view_removed(0);
        tracer.evaluated(&EvaluateSummary::default());
    }

    #[test]
    fn tracer_debug_impl() {
        let tracer = Tracer::none();
        let s = alloc::format!("{tracer:?}");
        assert!(s.contains("Tracer"), "got: {s}");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn evaluate_traced_reports_every_change() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(3)).unwrap();
        store.set_frame(id, Frame::new(1.0, 1.0, 2.0, 2.0));

        let mut sink = CountingSink::default();
        let mut changes = crate::view::ViewChanges::default();
        store.evaluate_traced(&mut changes, &mut Tracer::new(&mut sink));

        assert_eq!(sink.created, 1);
        assert_eq!(sink.styles, changes.styles.len());
        assert_eq!(sink.summaries, 1, "one summary per evaluation");
    }

    #[cfg(not(feature = "trace"))]
    #[test]
    fn tracer_without_feature_is_silent() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(3)).unwrap();
        store.set_frame(id, Frame::new(1.0, 1.0, 2.0, 2.0));

        let mut sink = CountingSink::default();
        let mut changes = crate::view::ViewChanges::default();
        store.evaluate_traced(&mut changes, &mut Tracer::new(&mut sink));

        assert!(!changes.is_empty());
        assert_eq!(sink.summaries, 0, "sink is never called");
        assert_eq!(sink.created + sink.styles, 0);
    }
}
