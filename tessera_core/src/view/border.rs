// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border properties.
//!
//! Borders live on a separate element inside the view's box, created on the
//! first border write. The set of border properties is closed: [`BorderProp`]
//! enumerates every one of them, and [`BorderProp::ALL`] is the table hosts
//! and presenters iterate.

use alloc::format;
use alloc::string::String;

use crate::color::Color;

/// A border property a host can set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderProp {
    /// `borderWidth`
    Width,
    /// `borderTopWidth`
    TopWidth,
    /// `borderRightWidth`
    RightWidth,
    /// `borderBottomWidth`
    BottomWidth,
    /// `borderLeftWidth`
    LeftWidth,
    /// `borderColor`
    Color,
    /// `borderTopColor`
    TopColor,
    /// `borderRightColor`
    RightColor,
    /// `borderBottomColor`
    BottomColor,
    /// `borderLeftColor`
    LeftColor,
    /// `borderRadius`
    Radius,
    /// `borderTopLeftRadius`
    TopLeftRadius,
    /// `borderTopRightRadius`
    TopRightRadius,
    /// `borderBottomRightRadius`
    BottomRightRadius,
    /// `borderBottomLeftRadius`
    BottomLeftRadius,
    /// `borderStyle`
    Style,
}

/// The kind of value a [`BorderProp`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderValueKind {
    /// A length in pixels.
    Length,
    /// A colour.
    Color,
    /// A line style.
    Style,
}

impl BorderProp {
    /// Every border property, in presenter write order.
    pub const ALL: [Self; 16] = [
        Self::Width,
        Self::TopWidth,
        Self::RightWidth,
        Self::BottomWidth,
        Self::LeftWidth,
        Self::Color,
        Self::TopColor,
        Self::RightColor,
        Self::BottomColor,
        Self::LeftColor,
        Self::Radius,
        Self::TopLeftRadius,
        Self::TopRightRadius,
        Self::BottomRightRadius,
        Self::BottomLeftRadius,
        Self::Style,
    ];

    /// Host-facing camelCase name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Width => "borderWidth",
            Self::TopWidth => "borderTopWidth",
            Self::RightWidth => "borderRightWidth",
            Self::BottomWidth => "borderBottomWidth",
            Self::LeftWidth => "borderLeftWidth",
            Self::Color => "borderColor",
            Self::TopColor => "borderTopColor",
            Self::RightColor => "borderRightColor",
            Self::BottomColor => "borderBottomColor",
            Self::LeftColor => "borderLeftColor",
            Self::Radius => "borderRadius",
            Self::TopLeftRadius => "borderTopLeftRadius",
            Self::TopRightRadius => "borderTopRightRadius",
            Self::BottomRightRadius => "borderBottomRightRadius",
            Self::BottomLeftRadius => "borderBottomLeftRadius",
            Self::Style => "borderStyle",
        }
    }

    /// Looks up a property by its host-facing name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// CSS property name.
    #[must_use]
    pub const fn css_property(self) -> &'static str {
        match self {
            Self::Width => "border-width",
            Self::TopWidth => "border-top-width",
            Self::RightWidth => "border-right-width",
            Self::BottomWidth => "border-bottom-width",
            Self::LeftWidth => "border-left-width",
            Self::Color => "border-color",
            Self::TopColor => "border-top-color",
            Self::RightColor => "border-right-color",
            Self::BottomColor => "border-bottom-color",
            Self::LeftColor => "border-left-color",
            Self::Radius => "border-radius",
            Self::TopLeftRadius => "border-top-left-radius",
            Self::TopRightRadius => "border-top-right-radius",
            Self::BottomRightRadius => "border-bottom-right-radius",
            Self::BottomLeftRadius => "border-bottom-left-radius",
            Self::Style => "border-style",
        }
    }

    /// The kind of value this property accepts.
    #[must_use]
    pub const fn value_kind(self) -> BorderValueKind {
        match self {
            Self::Color
            | Self::TopColor
            | Self::RightColor
            | Self::BottomColor
            | Self::LeftColor => BorderValueKind::Color,
            Self::Style => BorderValueKind::Style,
            _ => BorderValueKind::Length,
        }
    }

    /// Whether the property is a corner radius.
    ///
    /// Radii are mirrored onto the host element so its background follows
    /// the rounded corners.
    #[must_use]
    pub const fn is_radius(self) -> bool {
        matches!(
            self,
            Self::Radius
                | Self::TopLeftRadius
                | Self::TopRightRadius
                | Self::BottomRightRadius
                | Self::BottomLeftRadius
        )
    }

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// CSS border line style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// `solid`
    #[default]
    Solid,
    /// `dashed`
    Dashed,
    /// `dotted`
    Dotted,
}

impl BorderStyle {
    /// CSS value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

/// A value written to a [`BorderProp`].
#[derive(Clone, Debug, PartialEq)]
pub enum BorderValue {
    /// Width or radius in pixels.
    Length(f64),
    /// Edge colour.
    Color(Color),
    /// Line style.
    Style(BorderStyle),
}

impl BorderValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> BorderValueKind {
        match self {
            Self::Length(_) => BorderValueKind::Length,
            Self::Color(_) => BorderValueKind::Color,
            Self::Style(_) => BorderValueKind::Style,
        }
    }

    /// CSS value.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Length(px) => format!("{px}px"),
            Self::Color(color) => color.to_css(),
            Self::Style(style) => style.as_css().into(),
        }
    }
}

/// Border values of one view plus the properties not yet written out.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BorderState {
    values: [Option<BorderValue>; 16],
    pending: u16,
}

impl BorderState {
    pub(crate) fn new() -> Self {
        Self {
            values: core::array::from_fn(|_| None),
            pending: 0,
        }
    }

    pub(crate) fn get(&self, prop: BorderProp) -> Option<&BorderValue> {
        self.values[prop.index()].as_ref()
    }

    pub(crate) fn set(&mut self, prop: BorderProp, value: BorderValue) {
        self.values[prop.index()] = Some(value);
        self.pending |= 1 << prop.index();
    }

    /// Yields pending properties in table order and clears them.
    pub(crate) fn take_pending(&mut self) -> impl Iterator<Item = (BorderProp, &BorderValue)> {
        let pending = core::mem::take(&mut self.pending);
        let values = &self.values;
        BorderProp::ALL
            .into_iter()
            .filter(move |p| pending & (1 << p.index()) != 0)
            .filter_map(move |p| values[p.index()].as_ref().map(|v| (p, v)))
    }
}
