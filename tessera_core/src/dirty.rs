// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Tessera uses multi-channel dirty tracking (via [`understory_dirty`]) to
//! coalesce style writes between evaluations. Each channel represents one CSS
//! concern of a view. All channels are local-only: style state is not
//! inherited, so nothing propagates to descendants.
//!
//! A mutator marks its channel only when it actually changes something a
//! presenter must see. Geometry mutators skip the mark when the new value
//! equals the current one, and [`OPACITY`] is not marked before the view has
//! received its first frame.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`ViewStore::evaluate`](crate::view::ViewStore::evaluate) call drains all
//! channels in the order of [`STYLE_CHANNELS`] and surfaces the results as
//! style writes in [`ViewChanges`](crate::view::ViewChanges).

use understory_dirty::Channel;

/// `top`, `left`, static or animated transform changed.
pub const TRANSFORM: Channel = Channel::new(0);

/// `width` changed.
pub const WIDTH: Channel = Channel::new(1);

/// `height` changed.
pub const HEIGHT: Channel = Channel::new(2);

/// Opacity must be written (only after the first frame).
pub const OPACITY: Channel = Channel::new(3);

/// Background colour changed.
pub const BACKGROUND: Channel = Channel::new(4);

/// Pointer-events policy changed (host and child container).
pub const POINTER_EVENTS: Channel = Channel::new(5);

/// `touchable` or `disabled` changed; the cursor is re-derived.
pub const CURSOR: Channel = Channel::new(6);

/// `z-index` changed.
pub const Z_INDEX: Channel = Channel::new(7);

/// `overflow` changed.
pub const OVERFLOW: Channel = Channel::new(8);

/// `backface-visibility` changed.
pub const BACKFACE: Channel = Channel::new(9);

/// `position` changed.
pub const POSITION: Channel = Channel::new(10);

/// One or more border properties changed.
pub const BORDER: Channel = Channel::new(11);

/// Style channels in drain order.
pub const STYLE_CHANNELS: [Channel; 12] = [
    TRANSFORM,
    WIDTH,
    HEIGHT,
    OPACITY,
    BACKGROUND,
    POINTER_EVENTS,
    CURSOR,
    Z_INDEX,
    OVERFLOW,
    BACKFACE,
    POSITION,
    BORDER,
];
