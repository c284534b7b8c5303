// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain property types set on views.

/// The combined position and size of a view, in device-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    /// Distance from the parent's top edge.
    pub top: f64,
    /// Distance from the parent's left edge.
    pub left: f64,
    /// Width of the view.
    pub width: f64,
    /// Height of the view.
    pub height: f64,
}

impl Frame {
    /// The empty frame at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a frame.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

impl From<kurbo::Rect> for Frame {
    fn from(rect: kurbo::Rect) -> Self {
        Self::new(rect.y0, rect.x0, rect.width(), rect.height())
    }
}

impl From<Frame> for kurbo::Rect {
    fn from(frame: Frame) -> Self {
        Self::from_origin_size((frame.left, frame.top), (frame.width, frame.height))
    }
}

/// How a view and its children take part in hit testing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerEvents {
    /// Both the view and its children receive events.
    #[default]
    Auto,
    /// Neither the view nor its children receive events.
    None,
    /// The view ignores events; its children receive them.
    BoxNone,
    /// The view receives events; its children ignore them.
    BoxOnly,
    /// Any other CSS keyword, applied to the view and its children alike.
    Other(&'static str),
}

impl PointerEvents {
    /// Parses the host framework's keyword (`"box-none"`, `"auto"`, ...).
    ///
    /// Unknown keywords are passed through unchanged as [`Self::Other`].
    #[must_use]
    pub fn parse(keyword: &'static str) -> Self {
        match keyword {
            "auto" => Self::Auto,
            "none" => Self::None,
            "box-none" => Self::BoxNone,
            "box-only" => Self::BoxOnly,
            other => Self::Other(other),
        }
    }

    /// CSS `pointer-events` value for the view's own element.
    #[must_use]
    pub const fn host_value(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None | Self::BoxNone => "none",
            Self::BoxOnly => "all",
            Self::Other(value) => value,
        }
    }

    /// CSS `pointer-events` value for the child container.
    #[must_use]
    pub const fn child_container_value(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None | Self::BoxOnly => "none",
            Self::BoxNone => "all",
            Self::Other(value) => value,
        }
    }
}

/// Cursor derived from `touchable` and `disabled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The browser default.
    Auto,
    /// A pointing hand.
    Pointer,
}

impl Cursor {
    /// A pointer iff the view is touchable and not disabled.
    #[must_use]
    pub const fn derive(touchable: bool, disabled: bool) -> Self {
        if touchable && !disabled {
            Self::Pointer
        } else {
            Self::Auto
        }
    }

    /// CSS value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Pointer => "pointer",
        }
    }
}

/// CSS `overflow`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Content may paint outside the box.
    #[default]
    Visible,
    /// Content is clipped to the box.
    Hidden,
    /// Content is clipped and scrollable.
    Scroll,
    /// Any other CSS value (`auto`, `clip`, ...).
    Other(&'static str),
}

impl Overflow {
    /// CSS value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Scroll => "scroll",
            Self::Other(value) => value,
        }
    }
}

/// CSS `backface-visibility`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackfaceVisibility {
    /// The back face is drawn.
    #[default]
    Visible,
    /// The back face is not drawn.
    Hidden,
    /// Any other CSS value (`inherit`, ...).
    Other(&'static str),
}

impl BackfaceVisibility {
    /// CSS value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Other(value) => value,
        }
    }
}

/// CSS `position`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Positioned by `translate()` relative to the parent's child container.
    #[default]
    Absolute,
    /// In normal flow.
    Relative,
    /// Any other CSS value (`sticky`, `fixed`, ...).
    Other(&'static str),
}

impl Position {
    /// CSS value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Relative => "relative",
            Self::Other(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_converts_to_rect_and_back() {
        let frame = Frame::new(10.0, 20.0, 30.0, 40.0);
        let rect = kurbo::Rect::from(frame);
        assert_eq!(rect, kurbo::Rect::new(20.0, 10.0, 50.0, 50.0));
        assert_eq!(Frame::from(rect), frame);
    }

    #[test]
    fn box_none_and_box_only_are_inverse() {
        let none = PointerEvents::BoxNone;
        let only = PointerEvents::BoxOnly;
        assert_eq!((none.host_value(), none.child_container_value()), ("none", "all"));
        assert_eq!((only.host_value(), only.child_container_value()), ("all", "none"));
    }

    #[test]
    fn plain_policies_apply_uniformly() {
        for pe in [
            PointerEvents::Auto,
            PointerEvents::None,
            PointerEvents::Other("all"),
            PointerEvents::Other("visiblePainted"),
        ] {
            assert_eq!(
                pe.host_value(),
                pe.child_container_value(),
                "{pe:?} should be uniform"
            );
        }
    }

    #[test]
    fn parse_accepts_host_keywords() {
        assert_eq!(PointerEvents::parse("box-none"), PointerEvents::BoxNone);
        assert_eq!(PointerEvents::parse("box-only"), PointerEvents::BoxOnly);
        assert_eq!(PointerEvents::parse("inherit"), PointerEvents::Other("inherit"));
        assert_eq!(PointerEvents::parse("inherit").host_value(), "inherit");
    }

    #[test]
    fn other_css_values_pass_through() {
        assert_eq!(Overflow::Other("clip").as_css(), "clip");
        assert_eq!(BackfaceVisibility::Other("inherit").as_css(), "inherit");
        assert_eq!(Position::Other("sticky").as_css(), "sticky");
    }

    #[test]
    fn cursor_requires_touchable_and_enabled() {
        assert_eq!(Cursor::derive(true, false), Cursor::Pointer);
        assert_eq!(Cursor::derive(true, true), Cursor::Auto);
        assert_eq!(Cursor::derive(false, false), Cursor::Auto);
    }
}
