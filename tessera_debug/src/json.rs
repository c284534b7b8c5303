// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON change-log export.
//!
//! [`JsonRecorder`] implements [`TraceSink`] and keeps every event as a JSON
//! object. [`export`](JsonRecorder::export) writes the log as a JSON array,
//! one entry per evaluation:
//!
//! ```json
//! [{ "batch": 1, "events": [{ "kind": "create", "view": 0, "tag": 10 }, ...],
//!    "summary": { "created": 1, ... } }]
//! ```

use std::io::{self, Write};

use serde_json::{Value, json};

use tessera_core::style::ElementKind;
use tessera_core::trace::TraceSink;
use tessera_core::view::{EvaluateSummary, GestureOp, StyleWrite, TreeOp, ViewTag};

/// Records trace events as JSON, grouped by evaluation.
#[derive(Debug, Default)]
pub struct JsonRecorder {
    batches: Vec<Value>,
    current: Vec<Value>,
}

impl JsonRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded evaluations.
    #[must_use]
    pub fn batches(&self) -> &[Value] {
        &self.batches
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.batches.clear();
        self.current.clear();
    }

    /// Writes the recorded evaluations as a pretty-printed JSON array.
    ///
    /// Events of an evaluation that has not finished yet are not included.
    pub fn export(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(writer, &self.batches)?;
        Ok(())
    }
}

fn target_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Host => "host",
        ElementKind::ChildContainer => "child_container",
        ElementKind::Border => "border",
    }
}

impl TraceSink for JsonRecorder {
    fn on_view_created(&mut self, view: u32, tag: ViewTag) {
        self.current.push(json!({
            "kind": "create",
            "view": view,
            "tag": tag.0,
        }));
    }

    fn on_border_created(&mut self, view: u32) {
        self.current.push(json!({
            "kind": "border",
            "view": view,
        }));
    }

    fn on_tree_op(&mut self, op: &TreeOp) {
        self.current.push(match *op {
            TreeOp::Mount { view } => json!({
                "kind": "mount",
                "view": view,
            }),
            TreeOp::Append { parent, child } => json!({
                "kind": "append",
                "parent": parent,
                "child": child,
            }),
            TreeOp::InsertBefore {
                parent,
                child,
                before,
            } => json!({
                "kind": "insert_before",
                "parent": parent,
                "child": child,
                "before": before,
            }),
        });
    }

    fn on_style_write(&mut self, write: &StyleWrite) {
        self.current.push(json!({
            "kind": "style",
            "view": write.view,
            "target": target_name(write.target),
            "property": write.property,
            "value": write.value,
        }));
    }

    fn on_gesture_op(&mut self, op: &GestureOp) {
        self.current.push(match *op {
            GestureOp::Attach { view, registration } => json!({
                "kind": "gesture_attach",
                "view": view,
                "handler": registration.handler.0,
                "mousedown": registration.events.mouse_down,
                "touchstart": registration.events.touch_start,
                "capture": registration.options.capture,
                "passive": registration.options.passive,
            }),
            GestureOp::Detach { view, handler } => json!({
                "kind": "gesture_detach",
                "view": view,
                "handler": handler.0,
            }),
        });
    }

    fn on_view_removed(&mut self, view: u32) {
        self.current.push(json!({
            "kind": "remove",
            "view": view,
        }));
    }

    fn on_evaluate(&mut self, s: &EvaluateSummary) {
        let events = std::mem::take(&mut self.current);
        self.batches.push(json!({
            "batch": s.batch,
            "events": events,
            "summary": {
                "created": s.created,
                "borders_created": s.borders_created,
                "tree_ops": s.tree_ops,
                "style_writes": s.style_writes,
                "gesture_ops": s.gesture_ops,
                "removed": s.removed,
            }
        }));
    }
}
