// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use tessera_core::style::ElementKind;
use tessera_core::trace::TraceSink;
use tessera_core::view::{EvaluateSummary, GestureOp, StyleWrite, TreeOp, ViewTag};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    styles: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            styles: true,
        }
    }

    /// Skips per-write style lines; the summary still counts them.
    #[must_use]
    pub fn without_styles(mut self) -> Self {
        self.styles = false;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn target_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Host => "host",
        ElementKind::ChildContainer => "children",
        ElementKind::Border => "border",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_view_created(&mut self, view: u32, tag: ViewTag) {
        let _ = writeln!(self.writer, "[create] view={view} tag={}", tag.0);
    }

    fn on_border_created(&mut self, view: u32) {
        let _ = writeln!(self.writer, "[border] view={view}");
    }

    fn on_tree_op(&mut self, op: &TreeOp) {
        let _ = match *op {
            TreeOp::Mount { view } => writeln!(self.writer, "[tree] mount view={view}"),
            TreeOp::Append { parent, child } => {
                writeln!(self.writer, "[tree] append parent={parent} child={child}")
            }
            TreeOp::InsertBefore {
                parent,
                child,
                before,
            } => writeln!(
                self.writer,
                "[tree] insert parent={parent} child={child} before={before}"
            ),
        };
    }

    fn on_style_write(&mut self, write: &StyleWrite) {
        if !self.styles {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[style] view={} {}.{}={}",
            write.view,
            target_name(write.target),
            write.property,
            write.value,
        );
    }

    fn on_gesture_op(&mut self, op: &GestureOp) {
        let _ = match *op {
            GestureOp::Attach { view, registration } => writeln!(
                self.writer,
                "[gesture] attach view={view} handler={} mousedown={} touchstart={}",
                registration.handler.0,
                registration.events.mouse_down,
                registration.events.touch_start,
            ),
            GestureOp::Detach { view, handler } => writeln!(
                self.writer,
                "[gesture] detach view={view} handler={}",
                handler.0
            ),
        };
    }

    fn on_view_removed(&mut self, view: u32) {
        let _ = writeln!(self.writer, "[remove] view={view}");
    }

    fn on_evaluate(&mut self, s: &EvaluateSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] batch={} created={} borders={} tree={} styles={} gestures={} removed={}",
            s.batch,
            s.created,
            s.borders_created,
            s.tree_ops,
            s.style_writes,
            s.gesture_ops,
            s.removed,
        );
    }
}
