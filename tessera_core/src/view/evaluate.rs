// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation: drains pending lifecycle, topology and dirty channels into an
//! ordered change set.

use alloc::format;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use crate::dirty;
use crate::style::{self, Declaration, ElementKind};
use crate::trace::Tracer;

use super::gesture::GestureOp;
use super::props::Cursor;
use super::store::ViewStore;

/// A structural change to the render surface tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeOp {
    /// Append the host element of `view` to the render surface root.
    Mount {
        /// Raw slot index of the view.
        view: u32,
    },
    /// Append `child`'s host element to `parent`'s child container.
    Append {
        /// Raw slot index of the parent.
        parent: u32,
        /// Raw slot index of the child.
        child: u32,
    },
    /// Insert `child`'s host element into `parent`'s child container,
    /// immediately before `before`'s host element.
    InsertBefore {
        /// Raw slot index of the parent.
        parent: u32,
        /// Raw slot index of the child.
        child: u32,
        /// Raw slot index of the sibling that follows the child.
        before: u32,
    },
}

/// One logical CSS declaration to write on one element of a view.
///
/// `property` is unprefixed; presenters expand it with
/// [`declarations`](Self::declarations).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleWrite {
    /// Raw slot index of the view.
    pub view: u32,
    /// Which element of the view is written.
    pub target: ElementKind,
    /// Property name, e.g. `"transform"`.
    pub property: &'static str,
    /// Property value.
    pub value: String,
}

impl StyleWrite {
    fn host(view: u32, property: &'static str, value: impl Into<String>) -> Self {
        Self {
            view,
            target: ElementKind::Host,
            property,
            value: value.into(),
        }
    }

    /// The browser-compatible declarations for this write, prefixed variants
    /// first.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        style::prefixed(self.property, &self.value)
    }
}

/// Changes produced by [`ViewStore::evaluate`].
///
/// All index lists contain raw slot indices (see [`ViewId::index`]). Fields
/// are listed in the order presenters must apply them.
///
/// [`ViewId::index`]: super::ViewId::index
#[derive(Clone, Debug, Default)]
pub struct ViewChanges {
    /// Views whose host and child container elements must be created.
    pub created: Vec<u32>,
    /// Views whose border element must be created.
    pub borders_created: Vec<u32>,
    /// Structural operations, in call order.
    pub tree: Vec<TreeOp>,
    /// Style writes, grouped by channel.
    pub styles: Vec<StyleWrite>,
    /// Gesture listener changes, in call order.
    pub gestures: Vec<GestureOp>,
    /// Views whose host element must be detached and released.
    pub removed: Vec<u32>,
}

impl ViewChanges {
    /// Clears all change lists, retaining allocated capacity.
    pub fn clear(&mut self) {
        self.created.clear();
        self.borders_created.clear();
        self.tree.clear();
        self.styles.clear();
        self.gestures.clear();
        self.removed.clear();
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
            && self.borders_created.is_empty()
            && self.tree.is_empty()
            && self.styles.is_empty()
            && self.gestures.is_empty()
            && self.removed.is_empty()
    }

    /// Style writes of `property` on any element of `view`.
    pub fn writes_to<'a>(
        &'a self,
        view: u32,
        property: &'a str,
    ) -> impl Iterator<Item = &'a StyleWrite> + 'a {
        self.styles
            .iter()
            .filter(move |w| w.view == view && w.property == property)
    }
}

/// Counts reported once per evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvaluateSummary {
    /// Evaluation counter, starting at 1.
    pub batch: u64,
    /// Views created.
    pub created: usize,
    /// Border elements created.
    pub borders_created: usize,
    /// Tree operations.
    pub tree_ops: usize,
    /// Style writes.
    pub style_writes: usize,
    /// Gesture listener changes.
    pub gesture_ops: usize,
    /// Views removed.
    pub removed: usize,
}

impl EvaluateSummary {
    fn of(batch: u64, changes: &ViewChanges) -> Self {
        Self {
            batch,
            created: changes.created.len(),
            borders_created: changes.borders_created.len(),
            tree_ops: changes.tree.len(),
            style_writes: changes.styles.len(),
            gesture_ops: changes.gestures.len(),
            removed: changes.removed.len(),
        }
    }
}

impl ViewStore {
    /// Drains all pending changes into a new [`ViewChanges`].
    ///
    /// Each dirty channel is drained once, so repeated writes to the same
    /// concern of the same view between evaluations produce a single style
    /// write carrying the latest value. Slots purged since the previous
    /// evaluation become reusable afterwards.
    pub fn evaluate(&mut self) -> ViewChanges {
        let mut changes = ViewChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut ViewChanges) {
        self.evaluate_traced(changes, &mut Tracer::none());
    }

    /// Like [`evaluate_into`](Self::evaluate_into), reporting every change
    /// and a summary to `tracer`.
    pub fn evaluate_traced(&mut self, changes: &mut ViewChanges, tracer: &mut Tracer<'_>) {
        changes.clear();
        self.batch += 1;

        // Lifecycle and topology, in call order.
        changes.created.append(&mut self.pending_created);
        changes.borders_created.append(&mut self.pending_borders);
        changes.tree.append(&mut self.pending_tree);

        // Style channels, one at a time.
        let [
            transform,
            width,
            height,
            opacity,
            background,
            pointer_events,
            cursor,
            z_index,
            overflow,
            backface,
            position,
            border,
        ] = dirty::STYLE_CHANNELS.map(|channel| {
            self.dirty
                .drain(channel)
                .deterministic()
                .run()
                .collect::<Vec<u32>>()
        });
        let out = &mut changes.styles;
        for idx in transform {
            out.push(StyleWrite::host(idx, "transform", self.transform_css_at(idx)));
        }
        for idx in width {
            let px = format!("{}px", self.frame[idx as usize].width);
            out.push(StyleWrite::host(idx, "width", px));
        }
        for idx in height {
            let px = format!("{}px", self.frame[idx as usize].height);
            out.push(StyleWrite::host(idx, "height", px));
        }
        for idx in opacity {
            out.push(StyleWrite::host(idx, "opacity", self.opacity[idx as usize].to_string()));
        }
        for idx in background {
            let color = self.background[idx as usize].clone();
            out.push(StyleWrite::host(idx, "background-color", color));
        }
        for idx in pointer_events {
            let policy = self.pointer_events[idx as usize];
            out.push(StyleWrite::host(idx, "pointer-events", policy.host_value()));
            out.push(StyleWrite {
                view: idx,
                target: ElementKind::ChildContainer,
                property: "pointer-events",
                value: policy.child_container_value().into(),
            });
        }
        for idx in cursor {
            let i = idx as usize;
            let cursor = Cursor::derive(self.touchable[i], self.disabled[i]);
            out.push(StyleWrite::host(idx, "cursor", cursor.as_css()));
        }
        for idx in z_index {
            if let Some(z) = self.z_index[idx as usize] {
                out.push(StyleWrite::host(idx, "z-index", z.to_string()));
            }
        }
        for idx in overflow {
            out.push(StyleWrite::host(idx, "overflow", self.overflow[idx as usize].as_css()));
        }
        for idx in backface {
            let value = self.backface[idx as usize].as_css();
            out.push(StyleWrite::host(idx, "backface-visibility", value));
        }
        for idx in position {
            out.push(StyleWrite::host(idx, "position", self.position[idx as usize].as_css()));
        }
        for idx in border {
            let Some(state) = self.border[idx as usize].as_mut() else {
                continue;
            };
            for (prop, value) in state.take_pending() {
                let value = value.to_css();
                // Radii also round the host so its background follows the corners.
                if prop.is_radius() {
                    out.push(StyleWrite::host(idx, prop.css_property(), value.clone()));
                }
                out.push(StyleWrite {
                    view: idx,
                    target: ElementKind::Border,
                    property: prop.css_property(),
                    value,
                });
            }
        }

        changes.gestures.append(&mut self.pending_gestures);
        changes.removed.append(&mut self.pending_removed);

        // Removals have been reported; their slots may now be reused.
        self.free_list.append(&mut self.pending_free);

        for &idx in &changes.created {
            tracer.view_created(idx, self.tag[idx as usize]);
        }
        for &idx in &changes.borders_created {
            tracer.border_created(idx);
        }
        for op in &changes.tree {
            tracer.tree_op(op);
        }
        for write in &changes.styles {
            tracer.style_write(write);
        }
        for op in &changes.gestures {
            tracer.gesture_op(op);
        }
        for &idx in &changes.removed {
            tracer.view_removed(idx);
        }
        tracer.evaluated(&EvaluateSummary::of(self.batch, changes));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::color::Color;
    use crate::config::ViewConfig;
    use crate::transform::{Transform3d, TransformOp};
    use crate::view::{
        BorderProp, BorderStyle, BorderValue, DeviceKind, Frame, HandlerId, ListenerOptions,
        PointerEvents, ViewId, ViewTag,
    };

    fn host_value(changes: &ViewChanges, view: ViewId, property: &str) -> Option<String> {
        changes
            .writes_to(view.index(), property)
            .filter(|w| w.target == ElementKind::Host)
            .map(|w| w.value.clone())
            .last()
    }

    fn framed_view(store: &mut ViewStore, tag: u64) -> ViewId {
        let id = store.create_view(ViewTag(tag)).unwrap();
        store.set_frame(id, Frame::new(0.0, 0.0, 10.0, 10.0));
        id
    }

    #[test]
    fn translate_composes_with_top_and_left() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        let _ = store.evaluate();

        for (top, left) in [(0.0, 0.0), (5.0, 12.5), (-3.0, 40.0)] {
            store.set_top(id, top);
            store.set_left(id, left);
            let changes = store.evaluate();
            let expected = format!("translate({left}px, {top}px)");
            if top == 0.0 && left == 0.0 {
                assert_eq!(host_value(&changes, id, "transform"), None, "unchanged geometry");
            } else {
                assert_eq!(host_value(&changes, id, "transform"), Some(expected));
            }
        }
    }

    #[test]
    fn null_transform_yields_identity_composite() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        store.set_frame(id, Frame::new(2.0, 1.0, 5.0, 5.0));
        store.set_transform(id, None);
        let changes = store.evaluate();
        let expected = format!("translate(1px, 2px) {}", Transform3d::IDENTITY);
        assert_eq!(host_value(&changes, id, "transform"), Some(expected));
    }

    #[test]
    fn animated_transform_forces_compositing_and_falls_back() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        let matrix = Transform3d::from_scale(2.0, 2.0, 1.0);
        store.set_transform(id, Some(matrix));
        let _ = store.evaluate();

        let ops = [TransformOp::TranslateX(4.0), TransformOp::Rotate(0.5)];
        store.set_animated_transform(id, Some(&ops));
        let changes = store.evaluate();
        let animated = host_value(&changes, id, "transform").unwrap();
        assert!(animated.ends_with("translateZ(0px)"), "got: {animated}");
        assert!(
            !animated.contains("matrix3d"),
            "animated transform replaces the matrix: {animated}"
        );

        store.set_animated_transform(id, None);
        let changes = store.evaluate();
        assert_eq!(
            host_value(&changes, id, "transform"),
            Some(format!("translate(0px, 0px) {matrix}")),
            "clearing falls back to the static matrix"
        );
    }

    #[test]
    fn argb_and_string_backgrounds_apply_identically() {
        let mut store = ViewStore::new();
        let a = store.create_view(ViewTag(1)).unwrap();
        let b = store.create_view(ViewTag(2)).unwrap();
        store.set_background_color(a, 0xFF11_2233_u32);
        store.set_background_color(b, Color::from("rgba(17,34,51,1)"));
        let changes = store.evaluate();
        assert_eq!(
            host_value(&changes, a, "background-color"),
            host_value(&changes, b, "background-color")
        );
        assert_eq!(
            host_value(&changes, a, "background-color").as_deref(),
            Some("rgba(17,34,51,1)")
        );
    }

    #[test]
    fn unchanged_geometry_writes_nothing() {
        let mut store = ViewStore::new();
        let id = framed_view(&mut store, 1);
        store.set_top(id, 3.0);
        let _ = store.evaluate();

        store.set_top(id, 3.0);
        store.set_left(id, 0.0);
        store.set_width(id, 10.0);
        store.set_height(id, 10.0);
        let changes = store.evaluate();
        for property in ["transform", "width", "height"] {
            assert_eq!(
                changes.writes_to(id.index(), property).count(),
                0,
                "{property} was rewritten"
            );
        }
        assert!(changes.is_empty(), "got: {changes:?}");
    }

    #[test]
    fn repeated_writes_coalesce() {
        let mut store = ViewStore::new();
        let id = framed_view(&mut store, 1);
        let _ = store.evaluate();
        store.set_width(id, 20.0);
        store.set_width(id, 30.0);
        let changes = store.evaluate();
        let widths: Vec<_> = changes
            .writes_to(id.index(), "width")
            .map(|w| w.value.as_str())
            .collect();
        assert_eq!(widths, ["30px"]);
    }

    #[test]
    fn insertion_ops_follow_index_rule() {
        let mut store = ViewStore::new();
        let root = store.create_view(ViewTag(0)).unwrap();
        let a = store.create_view(ViewTag(1)).unwrap();
        let b = store.create_view(ViewTag(2)).unwrap();
        let c = store.create_view(ViewTag(3)).unwrap();
        store.mount(root).unwrap();
        store.insert_child_at(root, a, 0).unwrap();
        store.insert_child_at(root, c, 1).unwrap();
        store.insert_child_at(root, b, 1).unwrap();
        let changes = store.evaluate();
        assert_eq!(
            changes.tree,
            vec![
                TreeOp::Mount { view: root.index() },
                TreeOp::Append {
                    parent: root.index(),
                    child: a.index()
                },
                TreeOp::Append {
                    parent: root.index(),
                    child: c.index()
                },
                TreeOp::InsertBefore {
                    parent: root.index(),
                    child: b.index(),
                    before: c.index()
                },
            ]
        );
        assert_eq!(store.parent(b), Some(root));
    }

    #[test]
    fn box_none_and_box_only_split_between_elements() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        let cases = [
            (PointerEvents::BoxNone, "none", "all"),
            (PointerEvents::BoxOnly, "all", "none"),
            (PointerEvents::None, "none", "none"),
            (PointerEvents::Auto, "auto", "auto"),
            (PointerEvents::Other("all"), "all", "all"),
            (PointerEvents::parse("inherit"), "inherit", "inherit"),
        ];
        for (policy, host, container) in cases {
            store.set_pointer_events(id, policy);
            let changes = store.evaluate();
            let writes: Vec<_> = changes
                .writes_to(id.index(), "pointer-events")
                .map(|w| (w.target, w.value.as_str()))
                .collect();
            assert_eq!(
                writes,
                [
                    (ElementKind::Host, host),
                    (ElementKind::ChildContainer, container)
                ],
                "{policy:?}"
            );
        }
    }

    #[test]
    fn opacity_applies_once_on_first_frame() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        store.set_opacity(id, 0.5);
        let changes = store.evaluate();
        assert_eq!(
            changes.writes_to(id.index(), "opacity").count(),
            0,
            "opacity is held back until framed"
        );

        store.set_frame(id, Frame::new(1.0, 2.0, 3.0, 4.0));
        let changes = store.evaluate();
        assert_eq!(host_value(&changes, id, "opacity").as_deref(), Some("0.5"));
        assert!(store.has_been_framed(id));

        store.set_frame(id, Frame::new(5.0, 6.0, 7.0, 8.0));
        let changes = store.evaluate();
        assert_eq!(
            changes.writes_to(id.index(), "opacity").count(),
            0,
            "second frame must not rewrite opacity"
        );
    }

    #[test]
    fn opacity_after_first_frame_applies_directly() {
        let mut store = ViewStore::new();
        let id = framed_view(&mut store, 1);
        let _ = store.evaluate();
        store.set_opacity(id, 0.25);
        let changes = store.evaluate();
        assert_eq!(host_value(&changes, id, "opacity").as_deref(), Some("0.25"));
    }

    #[test]
    fn opacity_is_immediate_without_deferral() {
        let mut store = ViewStore::with_config(ViewConfig {
            defer_opacity: false,
            ..ViewConfig::DEFAULT
        });
        let id = store.create_view(ViewTag(1)).unwrap();
        store.set_opacity(id, 0.75);
        let changes = store.evaluate();
        assert_eq!(host_value(&changes, id, "opacity").as_deref(), Some("0.75"));
    }

    #[test]
    fn purge_detaches_exactly_once() {
        let mut store = ViewStore::new();
        let root = store.create_view(ViewTag(0)).unwrap();
        let child = store.create_view(ViewTag(1)).unwrap();
        store.insert_child_at(root, child, 0).unwrap();
        let _ = store.evaluate();

        store.set_width(child, 50.0);
        store.purge(child);
        let changes = store.evaluate();
        assert_eq!(changes.removed, vec![child.index()]);
        assert!(
            changes.styles.is_empty(),
            "pending writes of a purged view are dropped"
        );
        assert_eq!(store.child_count(root), 0);

        let changes = store.evaluate();
        assert!(changes.removed.is_empty(), "removal is reported once");
    }

    #[test]
    fn border_is_created_once_and_radius_mirrors_to_host() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        store
            .set_border(id, BorderProp::Width, BorderValue::Length(1.0))
            .unwrap();
        store
            .set_border(id, BorderProp::Radius, BorderValue::Length(4.0))
            .unwrap();
        store
            .set_border(id, BorderProp::Style, BorderValue::Style(BorderStyle::Dotted))
            .unwrap();
        let changes = store.evaluate();
        assert_eq!(changes.borders_created, vec![id.index()]);

        let radius: Vec<_> = changes
            .writes_to(id.index(), "border-radius")
            .map(|w| (w.target, w.value.as_str()))
            .collect();
        assert_eq!(
            radius,
            [(ElementKind::Host, "4px"), (ElementKind::Border, "4px")]
        );
        assert_eq!(
            changes
                .writes_to(id.index(), "border-width")
                .map(|w| w.target)
                .collect::<Vec<_>>(),
            [ElementKind::Border],
            "widths stay on the border element"
        );

        store
            .set_border(id, BorderProp::TopColor, BorderValue::Color(Color::Argb(0xFF00_00FF)))
            .unwrap();
        let changes = store.evaluate();
        assert!(changes.borders_created.is_empty(), "border element is reused");
        assert_eq!(store.border_value(id, BorderProp::Radius), Some(&BorderValue::Length(4.0)));
    }

    #[test]
    fn cursor_follows_touchable_and_disabled() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        store.set_touchable(id, true);
        let changes = store.evaluate();
        assert_eq!(host_value(&changes, id, "cursor").as_deref(), Some("pointer"));
        store.set_disabled(id, true);
        let changes = store.evaluate();
        assert_eq!(host_value(&changes, id, "cursor").as_deref(), Some("auto"));
    }

    #[test]
    fn gesture_ops_are_reported_in_order() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        let handler = HandlerId(9);
        let options = ListenerOptions::default();
        store.add_gesture_recognizer(id, handler, DeviceKind::TouchOnly, options);
        store.remove_gesture_recognizer(id, handler);
        let changes = store.evaluate();
        assert_eq!(changes.gestures.len(), 2);
        assert!(matches!(changes.gestures[0], GestureOp::Attach { .. }));
        assert_eq!(
            changes.gestures[1],
            GestureOp::Detach {
                view: id.index(),
                handler
            }
        );
    }

    #[test]
    fn style_writes_expand_vendor_prefixes() {
        let mut store = ViewStore::new();
        let id = store.create_view(ViewTag(1)).unwrap();
        store.set_left(id, 1.0);
        let changes = store.evaluate();
        let write = changes.writes_to(id.index(), "transform").next().unwrap();
        let props: Vec<_> = write.declarations().into_iter().map(|d| d.property).collect();
        assert_eq!(props, ["-webkit-transform", "transform"]);
    }

    #[test]
    fn non_auto_initial_pointer_events_is_written_on_create() {
        let mut store = ViewStore::with_config(ViewConfig {
            initial_pointer_events: PointerEvents::BoxNone,
            ..ViewConfig::DEFAULT
        });
        let id = store.create_view(ViewTag(1)).unwrap();
        let changes = store.evaluate();
        assert_eq!(changes.created, vec![id.index()]);
        assert_eq!(
            host_value(&changes, id, "pointer-events").as_deref(),
            Some("none")
        );
    }
}
