// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store-wide configuration.

use crate::color::Color;
use crate::view::PointerEvents;

/// Configuration for a [`ViewStore`](crate::view::ViewStore).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Hold opacity back until a view receives its first frame.
    ///
    /// When set, host elements start at `opacity: 0` and the stored opacity
    /// is written on the first [`set_frame`](crate::view::ViewStore::set_frame).
    /// This avoids a flash of unpositioned content.
    pub defer_opacity: bool,
    /// Opacity every new view starts with.
    pub initial_opacity: f64,
    /// Background colour every new view starts with.
    pub initial_background: &'static str,
    /// Pointer-events policy every new view starts with.
    pub initial_pointer_events: PointerEvents,
}

impl ViewConfig {
    /// Default configuration: deferred opacity, transparent background.
    pub const DEFAULT: Self = Self {
        defer_opacity: true,
        initial_opacity: 1.0,
        initial_background: Color::TRANSPARENT,
        initial_pointer_events: PointerEvents::Auto,
    };
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
