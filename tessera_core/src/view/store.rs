// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays view storage with allocation, topology, and property management.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::color::Color;
use crate::config::ViewConfig;
use crate::dirty;
use crate::error::{ViewError, ViewResult};
use crate::transform::{self, Transform3d, TransformOp};

use super::border::{BorderProp, BorderState, BorderValue};
use super::evaluate::TreeOp;
use super::gesture::{
    DeviceKind, GestureEvents, GestureOp, GestureRegistration, HandlerId, ListenerOptions,
};
use super::id::{INVALID, ViewId, ViewTag};
use super::props::{BackfaceVisibility, Cursor, Frame, Overflow, PointerEvents, Position};
use super::traverse::Children;

/// Struct-of-arrays storage for all views.
///
/// Views are addressed by [`ViewId`] handles. Internally, each view occupies
/// a slot in parallel arrays. Purged views are recycled via a free list once
/// the next [`evaluate`](Self::evaluate) has reported their removal, and
/// generation counters prevent stale handle access.
#[derive(Debug)]
pub struct ViewStore {
    pub(crate) config: ViewConfig,

    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) children: Vec<Vec<u32>>,
    pub(crate) mounted: Vec<bool>,

    // -- Identity --
    pub(crate) tag: Vec<ViewTag>,
    pub(crate) by_tag: HashMap<ViewTag, u32>,

    // -- Properties (set by callers) --
    pub(crate) frame: Vec<Frame>,
    pub(crate) framed: Vec<bool>,
    pub(crate) opacity: Vec<f64>,
    pub(crate) transform: Vec<Option<Transform3d>>,
    pub(crate) animated_transform: Vec<Option<String>>,
    pub(crate) background: Vec<String>,
    pub(crate) pointer_events: Vec<PointerEvents>,
    pub(crate) touchable: Vec<bool>,
    pub(crate) disabled: Vec<bool>,
    pub(crate) z_index: Vec<Option<i32>>,
    pub(crate) overflow: Vec<Overflow>,
    pub(crate) backface: Vec<BackfaceVisibility>,
    pub(crate) position: Vec<Position>,
    pub(crate) border: Vec<Option<BorderState>>,
    pub(crate) gestures: Vec<Vec<GestureRegistration>>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) pending_free: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Pending change set --
    pub(crate) pending_created: Vec<u32>,
    pub(crate) pending_borders: Vec<u32>,
    pub(crate) pending_tree: Vec<TreeOp>,
    pub(crate) pending_gestures: Vec<GestureOp>,
    pub(crate) pending_removed: Vec<u32>,
    pub(crate) batch: u64,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore {
    /// Creates an empty store with [`ViewConfig::DEFAULT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ViewConfig::DEFAULT)
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            config,
            parent: Vec::new(),
            children: Vec::new(),
            mounted: Vec::new(),
            tag: Vec::new(),
            by_tag: HashMap::new(),
            frame: Vec::new(),
            framed: Vec::new(),
            opacity: Vec::new(),
            transform: Vec::new(),
            animated_transform: Vec::new(),
            background: Vec::new(),
            pointer_events: Vec::new(),
            touchable: Vec::new(),
            disabled: Vec::new(),
            z_index: Vec::new(),
            overflow: Vec::new(),
            backface: Vec::new(),
            position: Vec::new(),
            border: Vec::new(),
            gestures: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            pending_free: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_created: Vec::new(),
            pending_borders: Vec::new(),
            pending_tree: Vec::new(),
            pending_gestures: Vec::new(),
            pending_removed: Vec::new(),
            batch: 0,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    // -- Allocation API --

    /// Creates a new view for the host tag `tag` and returns its handle.
    ///
    /// The view starts with a zero frame, the configured opacity (held back
    /// until the first frame when opacity is deferred), no transform, the
    /// configured background, and no parent.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DuplicateTag`] if a live view already uses `tag`.
    pub fn create_view(&mut self, tag: ViewTag) -> ViewResult<ViewId> {
        if self.by_tag.contains_key(&tag) {
            return Err(ViewError::DuplicateTag(tag));
        }
        let config = self.config;
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.generation[i] += 1;
            self.parent[i] = INVALID;
            self.children[i].clear();
            self.mounted[i] = false;
            self.tag[i] = tag;
            self.frame[i] = Frame::ZERO;
            self.framed[i] = false;
            self.opacity[i] = config.initial_opacity;
            self.transform[i] = None;
            self.animated_transform[i] = None;
            self.background[i] = config.initial_background.into();
            self.pointer_events[i] = config.initial_pointer_events;
            self.touchable[i] = false;
            self.disabled[i] = false;
            self.z_index[i] = None;
            self.overflow[i] = Overflow::default();
            self.backface[i] = BackfaceVisibility::default();
            self.position[i] = Position::default();
            self.border[i] = None;
            self.gestures[i].clear();
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.children.push(Vec::new());
            self.mounted.push(false);
            self.tag.push(tag);
            self.frame.push(Frame::ZERO);
            self.framed.push(false);
            self.opacity.push(config.initial_opacity);
            self.transform.push(None);
            self.animated_transform.push(None);
            self.background.push(config.initial_background.into());
            self.pointer_events.push(config.initial_pointer_events);
            self.touchable.push(false);
            self.disabled.push(false);
            self.z_index.push(None);
            self.overflow.push(Overflow::default());
            self.backface.push(BackfaceVisibility::default());
            self.position.push(Position::default());
            self.border.push(None);
            self.gestures.push(Vec::new());
            self.generation.push(0);
            idx
        };

        self.by_tag.insert(tag, idx);
        self.pending_created.push(idx);
        if config.initial_pointer_events != PointerEvents::Auto {
            self.dirty.mark(idx, dirty::POINTER_EVENTS);
        }

        Ok(ViewId {
            idx,
            generation: self.generation[idx as usize],
        })
    }

    /// Purges a view.
    ///
    /// If the view has a parent, the parent first drops it from its child
    /// sequence. The view is then reported as removed by the next
    /// [`evaluate`](Self::evaluate), which is when presenters detach its
    /// element. Remaining children lose their parent reference and stay alive
    /// until the host purges them too.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn purge(&mut self, id: ViewId) {
        self.validate(id);
        let idx = id.idx;
        let i = idx as usize;

        let p = self.parent[i];
        if p != INVALID {
            self.unlink_child(p, idx);
        }
        for child in core::mem::take(&mut self.children[i]) {
            self.parent[child as usize] = INVALID;
        }
        self.mounted[i] = false;
        self.gestures[i].clear();
        self.by_tag.remove(&self.tag[i]);

        // Drop any pending style writes for this view.
        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[i] += 1;

        self.pending_free.push(idx);
        self.pending_removed.push(idx);
    }

    /// Returns whether the given handle refers to a live view.
    #[must_use]
    pub fn is_alive(&self, id: ViewId) -> bool {
        id.idx < self.len
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
            && !self.pending_free.contains(&id.idx)
    }

    /// Returns the number of live views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize - self.free_list.len() - self.pending_free.len()
    }

    /// Returns whether the store has no live views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the live view registered under `tag`, if any.
    #[must_use]
    pub fn view_for_tag(&self, tag: ViewTag) -> Option<ViewId> {
        let &idx = self.by_tag.get(&tag)?;
        Some(ViewId {
            idx,
            generation: self.generation[idx as usize],
        })
    }

    /// Returns the host tag of a view.
    #[must_use]
    pub fn tag(&self, id: ViewId) -> ViewTag {
        self.validate(id);
        self.tag[id.idx as usize]
    }

    // -- Topology API --

    /// Mounts a parentless view directly on the render surface root.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::AlreadyParented`] if the view has a parent or is
    /// already mounted.
    pub fn mount(&mut self, id: ViewId) -> ViewResult<()> {
        self.validate(id);
        let i = id.idx as usize;
        if self.parent[i] != INVALID || self.mounted[i] {
            return Err(ViewError::AlreadyParented);
        }
        self.mounted[i] = true;
        self.pending_tree.push(TreeOp::Mount { view: id.idx });
        Ok(())
    }

    /// Inserts `child` into `parent`'s child sequence at `index`.
    ///
    /// When `index` equals the current number of children the child is
    /// appended; otherwise it goes immediately before the child currently at
    /// `index`. The child's parent reference is set to `parent`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::IndexOutOfBounds`] if `index` is past the end.
    /// - [`ViewError::AlreadyParented`] if `child` already has a parent.
    /// - [`ViewError::WouldCycle`] if `child` is `parent` or one of its
    ///   ancestors.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn insert_child_at(
        &mut self,
        parent: ViewId,
        child: ViewId,
        index: usize,
    ) -> ViewResult<()> {
        self.validate(parent);
        self.validate(child);
        let p = parent.idx;
        let c = child.idx;

        if self.is_ancestor_or_self(c, p) {
            return Err(ViewError::WouldCycle);
        }
        if self.parent[c as usize] != INVALID || self.mounted[c as usize] {
            return Err(ViewError::AlreadyParented);
        }
        let siblings = &mut self.children[p as usize];
        let len = siblings.len();
        if index > len {
            return Err(ViewError::IndexOutOfBounds { index, len });
        }

        let op = if index == len {
            TreeOp::Append { parent: p, child: c }
        } else {
            TreeOp::InsertBefore {
                parent: p,
                child: c,
                before: siblings[index],
            }
        };
        siblings.insert(index, c);
        self.parent[c as usize] = p;
        self.pending_tree.push(op);
        Ok(())
    }

    /// Removes `child` from `parent`'s child sequence and clears its parent
    /// reference.
    ///
    /// The child's element is left where it is; detaching it from the render
    /// surface happens when the child is [purged](Self::purge).
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NotAChild`] if `child` is not a child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn remove_child(&mut self, parent: ViewId, child: ViewId) -> ViewResult<()> {
        self.validate(parent);
        self.validate(child);
        if self.parent[child.idx as usize] != parent.idx {
            return Err(ViewError::NotAChild);
        }
        self.unlink_child(parent.idx, child.idx);
        Ok(())
    }

    /// Returns the parent of a view, if any.
    #[must_use]
    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| ViewId {
            idx: p,
            generation: self.generation[p as usize],
        })
    }

    /// Returns an iterator over the direct children of a view.
    #[must_use]
    pub fn children(&self, id: ViewId) -> Children<'_> {
        self.validate(id);
        Children::new(self, &self.children[id.idx as usize])
    }

    /// Returns the number of direct children of a view.
    #[must_use]
    pub fn child_count(&self, id: ViewId) -> usize {
        self.validate(id);
        self.children[id.idx as usize].len()
    }

    /// Returns whether the view is mounted on the render surface root.
    #[must_use]
    pub fn is_mounted(&self, id: ViewId) -> bool {
        self.validate(id);
        self.mounted[id.idx as usize]
    }

    // -- Geometry --

    /// Sets the distance from the parent's top edge.
    pub fn set_top(&mut self, id: ViewId, top: f64) {
        self.validate(id);
        let frame = &mut self.frame[id.idx as usize];
        if frame.top != top {
            frame.top = top;
            self.dirty.mark(id.idx, dirty::TRANSFORM);
        }
    }

    /// Sets the distance from the parent's left edge.
    pub fn set_left(&mut self, id: ViewId, left: f64) {
        self.validate(id);
        let frame = &mut self.frame[id.idx as usize];
        if frame.left != left {
            frame.left = left;
            self.dirty.mark(id.idx, dirty::TRANSFORM);
        }
    }

    /// Sets the width.
    pub fn set_width(&mut self, id: ViewId, width: f64) {
        self.validate(id);
        let frame = &mut self.frame[id.idx as usize];
        if frame.width != width {
            frame.width = width;
            self.dirty.mark(id.idx, dirty::WIDTH);
        }
    }

    /// Sets the height.
    pub fn set_height(&mut self, id: ViewId, height: f64) {
        self.validate(id);
        let frame = &mut self.frame[id.idx as usize];
        if frame.height != height {
            frame.height = height;
            self.dirty.mark(id.idx, dirty::HEIGHT);
        }
    }

    /// Sets top, left, width and height together.
    ///
    /// The first call on a view marks it as framed and releases its held-back
    /// opacity. Later calls never write opacity again.
    pub fn set_frame(&mut self, id: ViewId, frame: Frame) {
        self.set_top(id, frame.top);
        self.set_left(id, frame.left);
        self.set_width(id, frame.width);
        self.set_height(id, frame.height);

        let i = id.idx as usize;
        if !self.framed[i] {
            self.framed[i] = true;
            if self.config.defer_opacity {
                self.dirty.mark(id.idx, dirty::OPACITY);
            }
        }
    }

    /// Returns the frame of a view.
    #[must_use]
    pub fn frame(&self, id: ViewId) -> Frame {
        self.validate(id);
        self.frame[id.idx as usize]
    }

    /// Returns whether the view has received its first frame.
    #[must_use]
    pub fn has_been_framed(&self, id: ViewId) -> bool {
        self.validate(id);
        self.framed[id.idx as usize]
    }

    // -- Transform --

    /// Sets the static transform; `None` resets it to identity.
    pub fn set_transform(&mut self, id: ViewId, transform: Option<Transform3d>) {
        self.validate(id);
        self.transform[id.idx as usize] = Some(transform.unwrap_or(Transform3d::IDENTITY));
        self.dirty.mark(id.idx, dirty::TRANSFORM);
    }

    /// Returns the static transform, if one has been set.
    #[must_use]
    pub fn transform(&self, id: ViewId) -> Option<Transform3d> {
        self.validate(id);
        self.transform[id.idx as usize]
    }

    /// Sets the animated transform.
    ///
    /// `None` or an empty list clears it, so the static transform applies
    /// again.
    pub fn set_animated_transform(&mut self, id: ViewId, ops: Option<&[TransformOp]>) {
        self.validate(id);
        self.animated_transform[id.idx as usize] = ops.and_then(transform::animated_css);
        self.dirty.mark(id.idx, dirty::TRANSFORM);
    }

    /// Returns the rendered animated transform, if one is set.
    #[must_use]
    pub fn animated_transform(&self, id: ViewId) -> Option<&str> {
        self.validate(id);
        self.animated_transform[id.idx as usize].as_deref()
    }

    /// Returns the composite CSS `transform` value of a view.
    #[must_use]
    pub fn transform_css(&self, id: ViewId) -> String {
        self.validate(id);
        self.transform_css_at(id.idx)
    }

    // -- Appearance --

    /// Sets the opacity.
    ///
    /// While opacity is deferred and the view has not been framed, the value
    /// is only stored.
    pub fn set_opacity(&mut self, id: ViewId, opacity: f64) {
        self.validate(id);
        let i = id.idx as usize;
        self.opacity[i] = opacity;
        if self.framed[i] || !self.config.defer_opacity {
            self.dirty.mark(id.idx, dirty::OPACITY);
        }
    }

    /// Returns the stored opacity.
    #[must_use]
    pub fn opacity(&self, id: ViewId) -> f64 {
        self.validate(id);
        self.opacity[id.idx as usize]
    }

    /// Sets the background colour.
    pub fn set_background_color(&mut self, id: ViewId, color: impl Into<Color>) {
        self.validate(id);
        let color: Color = color.into();
        self.background[id.idx as usize] = color.to_css();
        self.dirty.mark(id.idx, dirty::BACKGROUND);
    }

    /// Returns the background colour as a CSS string.
    #[must_use]
    pub fn background_color(&self, id: ViewId) -> &str {
        self.validate(id);
        &self.background[id.idx as usize]
    }

    /// Sets the `z-index`.
    pub fn set_z_index(&mut self, id: ViewId, z_index: i32) {
        self.validate(id);
        self.z_index[id.idx as usize] = Some(z_index);
        self.dirty.mark(id.idx, dirty::Z_INDEX);
    }

    /// Returns the `z-index`, if one has been set.
    #[must_use]
    pub fn z_index(&self, id: ViewId) -> Option<i32> {
        self.validate(id);
        self.z_index[id.idx as usize]
    }

    /// Sets `overflow`.
    pub fn set_overflow(&mut self, id: ViewId, overflow: Overflow) {
        self.validate(id);
        self.overflow[id.idx as usize] = overflow;
        self.dirty.mark(id.idx, dirty::OVERFLOW);
    }

    /// Returns `overflow`.
    #[must_use]
    pub fn overflow(&self, id: ViewId) -> Overflow {
        self.validate(id);
        self.overflow[id.idx as usize]
    }

    /// Sets `backface-visibility`.
    pub fn set_backface_visibility(&mut self, id: ViewId, visibility: BackfaceVisibility) {
        self.validate(id);
        self.backface[id.idx as usize] = visibility;
        self.dirty.mark(id.idx, dirty::BACKFACE);
    }

    /// Returns `backface-visibility`.
    #[must_use]
    pub fn backface_visibility(&self, id: ViewId) -> BackfaceVisibility {
        self.validate(id);
        self.backface[id.idx as usize]
    }

    /// Sets `position`.
    pub fn set_position(&mut self, id: ViewId, position: Position) {
        self.validate(id);
        self.position[id.idx as usize] = position;
        self.dirty.mark(id.idx, dirty::POSITION);
    }

    /// Returns `position`.
    #[must_use]
    pub fn position(&self, id: ViewId) -> Position {
        self.validate(id);
        self.position[id.idx as usize]
    }

    // -- Interaction --

    /// Sets the pointer-events policy.
    pub fn set_pointer_events(&mut self, id: ViewId, pointer_events: PointerEvents) {
        self.validate(id);
        self.pointer_events[id.idx as usize] = pointer_events;
        self.dirty.mark(id.idx, dirty::POINTER_EVENTS);
    }

    /// Returns the pointer-events policy.
    #[must_use]
    pub fn pointer_events(&self, id: ViewId) -> PointerEvents {
        self.validate(id);
        self.pointer_events[id.idx as usize]
    }

    /// Sets whether the view responds to touches.
    pub fn set_touchable(&mut self, id: ViewId, touchable: bool) {
        self.validate(id);
        self.touchable[id.idx as usize] = touchable;
        self.dirty.mark(id.idx, dirty::CURSOR);
    }

    /// Returns whether the view responds to touches.
    #[must_use]
    pub fn touchable(&self, id: ViewId) -> bool {
        self.validate(id);
        self.touchable[id.idx as usize]
    }

    /// Sets whether the view is disabled.
    pub fn set_disabled(&mut self, id: ViewId, disabled: bool) {
        self.validate(id);
        self.disabled[id.idx as usize] = disabled;
        self.dirty.mark(id.idx, dirty::CURSOR);
    }

    /// Returns whether the view is disabled.
    #[must_use]
    pub fn disabled(&self, id: ViewId) -> bool {
        self.validate(id);
        self.disabled[id.idx as usize]
    }

    /// Returns the cursor derived from `touchable` and `disabled`.
    #[must_use]
    pub fn cursor(&self, id: ViewId) -> Cursor {
        self.validate(id);
        let i = id.idx as usize;
        Cursor::derive(self.touchable[i], self.disabled[i])
    }

    // -- Borders --

    /// Writes a border property, creating the border element on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::BorderValueKind`] if `value` is not the kind
    /// `prop` accepts. Nothing is created in that case.
    pub fn set_border(
        &mut self,
        id: ViewId,
        prop: BorderProp,
        value: BorderValue,
    ) -> ViewResult<()> {
        self.validate(id);
        if value.kind() != prop.value_kind() {
            return Err(ViewError::BorderValueKind { prop });
        }
        let i = id.idx as usize;
        let border = self.border[i].get_or_insert_with(|| {
            self.pending_borders.push(id.idx);
            BorderState::new()
        });
        border.set(prop, value);
        self.dirty.mark(id.idx, dirty::BORDER);
        Ok(())
    }

    /// Returns the value last written to a border property.
    #[must_use]
    pub fn border_value(&self, id: ViewId, prop: BorderProp) -> Option<&BorderValue> {
        self.validate(id);
        self.border[id.idx as usize].as_ref()?.get(prop)
    }

    /// Returns whether the view has a border element.
    #[must_use]
    pub fn has_border(&self, id: ViewId) -> bool {
        self.validate(id);
        self.border[id.idx as usize].is_some()
    }

    // -- Gestures --

    /// Registers a touch handler on a view.
    ///
    /// `mousedown` is listened for unless the device is touch-only and
    /// `touchstart` (with `options`) unless it is mouse-only. Registering the
    /// same handler twice is a no-op.
    pub fn add_gesture_recognizer(
        &mut self,
        id: ViewId,
        handler: HandlerId,
        device: DeviceKind,
        options: ListenerOptions,
    ) {
        self.validate(id);
        let registrations = &mut self.gestures[id.idx as usize];
        if registrations.iter().any(|r| r.handler == handler) {
            return;
        }
        let registration = GestureRegistration {
            handler,
            events: GestureEvents::for_device(device),
            options,
        };
        registrations.push(registration);
        self.pending_gestures.push(GestureOp::Attach {
            view: id.idx,
            registration,
        });
    }

    /// Unregisters a touch handler, detaching every listener it added.
    ///
    /// Returns whether the handler was registered.
    pub fn remove_gesture_recognizer(&mut self, id: ViewId, handler: HandlerId) -> bool {
        self.validate(id);
        let registrations = &mut self.gestures[id.idx as usize];
        let Some(pos) = registrations.iter().position(|r| r.handler == handler) else {
            return false;
        };
        registrations.remove(pos);
        self.pending_gestures.push(GestureOp::Detach {
            view: id.idx,
            handler,
        });
        true
    }

    /// Returns the handlers registered on a view.
    #[must_use]
    pub fn gesture_recognizers(&self, id: ViewId) -> &[GestureRegistration] {
        self.validate(id);
        &self.gestures[id.idx as usize]
    }

    // -- Raw-index accessors for presenters --
    //
    // These accept raw slot indices (as found in `ViewChanges`) rather than
    // `ViewId` handles, skipping generation validation.

    /// Returns the host tag at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn tag_at(&self, idx: u32) -> ViewTag {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.tag[idx as usize]
    }

    /// Returns the composite CSS `transform` value at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn transform_css_at(&self, idx: u32) -> String {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        let i = idx as usize;
        let frame = self.frame[i];
        transform::composite_css(
            frame.left,
            frame.top,
            self.animated_transform[i].as_deref(),
            self.transform[i].as_ref(),
        )
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: ViewId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale ViewId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Drops `child` from `parent`'s sequence and clears its parent reference.
    fn unlink_child(&mut self, parent: u32, child: u32) {
        self.children[parent as usize].retain(|&c| c != child);
        self.parent[child as usize] = INVALID;
    }

    /// Whether `candidate` is `idx` or one of its ancestors.
    fn is_ancestor_or_self(&self, candidate: u32, mut idx: u32) -> bool {
        while idx != INVALID {
            if idx == candidate {
                return true;
            }
            idx = self.parent[idx as usize];
        }
        false
    }
}
