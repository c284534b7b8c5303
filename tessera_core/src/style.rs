// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style translation.
//!
//! Views describe their appearance as logical CSS declarations. Before a
//! declaration reaches a render surface it goes through [`prefixed`], which
//! adds the vendor-prefixed variants older engines need. The prefix table is
//! static; properties not listed in it pass through unchanged.

use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use crate::config::ViewConfig;

/// Which element of a view a declaration targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The view's own box.
    Host,
    /// The transparent full-bleed element hosting the view's children.
    ChildContainer,
    /// The lazily created border element.
    Border,
}

/// A single CSS declaration in kebab-case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, e.g. `"background-color"`.
    pub property: &'static str,
    /// Property value.
    pub value: String,
}

impl Declaration {
    /// Creates a declaration.
    #[must_use]
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Properties that need vendor-prefixed variants, with those variants.
const PREFIXES: &[(&str, &[&str])] = &[
    (
        "user-select",
        &["-webkit-user-select", "-moz-user-select", "-ms-user-select"],
    ),
    ("transform", &["-webkit-transform"]),
    ("transform-origin", &["-webkit-transform-origin"]),
    ("backface-visibility", &["-webkit-backface-visibility"]),
    ("touch-action", &["-ms-touch-action"]),
];

/// Returns the vendor-prefixed variants of `property`, if any.
#[must_use]
pub fn vendor_variants(property: &str) -> &'static [&'static str] {
    PREFIXES
        .iter()
        .find(|(name, _)| *name == property)
        .map_or(&[], |(_, variants)| variants)
}

/// Translates one property/value pair into browser-compatible declarations.
///
/// Prefixed variants come first, the standard property last, so that the
/// standard form wins wherever it is supported.
#[must_use]
pub fn prefixed(property: &'static str, value: &str) -> Vec<Declaration> {
    let variants = vendor_variants(property);
    let mut out = Vec::with_capacity(variants.len() + 1);
    for variant in variants {
        out.push(Declaration::new(variant, value));
    }
    out.push(Declaration::new(property, value));
    out
}

/// Translates a list of declarations, preserving order.
#[must_use]
pub fn prefix_all(declarations: &[Declaration]) -> Vec<Declaration> {
    declarations
        .iter()
        .flat_map(|d| prefixed(d.property, &d.value))
        .collect()
}

/// Returns the declarations an element of `kind` starts with.
///
/// These are unprefixed; run them through [`prefix_all`] before applying.
#[must_use]
pub fn base_declarations(kind: ElementKind, config: &ViewConfig) -> Vec<Declaration> {
    let pairs: &[(&'static str, &str)] = match kind {
        ElementKind::Host => &[
            ("position", "absolute"),
            ("contain", "size layout style"),
            ("box-sizing", "border-box"),
            ("touch-action", "manipulation"),
            ("user-select", "inherit"),
            ("isolation", "isolate"),
        ],
        ElementKind::ChildContainer => &[
            ("contain", "layout style"),
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("right", "0"),
            ("bottom", "0"),
            ("user-select", "inherit"),
            ("transform-origin", "top left"),
            ("touch-action", "manipulation"),
        ],
        ElementKind::Border => &[
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("right", "0"),
            ("bottom", "0"),
            ("box-sizing", "border-box"),
            ("pointer-events", "none"),
            ("border-style", "solid"),
            ("border-width", "0"),
            ("border-color", "black"),
        ],
    };
    let mut out: Vec<Declaration> = pairs
        .iter()
        .map(|&(p, v)| Declaration::new(p, v))
        .collect();
    if kind == ElementKind::Host {
        let opacity = if config.defer_opacity {
            "0".to_string()
        } else {
            config.initial_opacity.to_string()
        };
        out.push(Declaration::new("opacity", opacity));
        out.push(Declaration::new("background-color", config.initial_background));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprefixed_property_passes_through() {
        assert_eq!(
            prefixed("width", "10px"),
            [Declaration::new("width", "10px")]
        );
    }

    #[test]
    fn transform_gets_webkit_variant_first() {
        let out = prefixed("transform", "translate(1px, 2px)");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].property, "-webkit-transform");
        assert_eq!(out[1].property, "transform");
        assert!(
            out.iter().all(|d| d.value == "translate(1px, 2px)"),
            "all variants carry the same value"
        );
    }

    #[test]
    fn user_select_expands_to_all_engines() {
        let props: Vec<_> = prefixed("user-select", "inherit")
            .into_iter()
            .map(|d| d.property)
            .collect();
        assert_eq!(
            props,
            [
                "-webkit-user-select",
                "-moz-user-select",
                "-ms-user-select",
                "user-select"
            ]
        );
    }

    #[test]
    fn prefix_all_keeps_order() {
        let out = prefix_all(&[
            Declaration::new("opacity", "1"),
            Declaration::new("touch-action", "manipulation"),
        ]);
        let props: Vec<_> = out.iter().map(|d| d.property).collect();
        assert_eq!(props, ["opacity", "-ms-touch-action", "touch-action"]);
    }

    #[test]
    fn host_starts_hidden_when_opacity_is_deferred() {
        let decls = base_declarations(ElementKind::Host, &ViewConfig::DEFAULT);
        assert!(
            decls.contains(&Declaration::new("opacity", "0")),
            "deferred opacity starts at 0: {decls:?}"
        );
        assert!(
            decls.contains(&Declaration::new("background-color", "rgba(0,0,0,0)")),
            "background starts transparent: {decls:?}"
        );
    }

    #[test]
    fn host_starts_visible_without_deferral() {
        let config = ViewConfig {
            defer_opacity: false,
            ..ViewConfig::DEFAULT
        };
        let decls = base_declarations(ElementKind::Host, &config);
        assert!(
            decls.contains(&Declaration::new("opacity", "1")),
            "got: {decls:?}"
        );
    }

    #[test]
    fn child_container_is_full_bleed() {
        let decls = base_declarations(ElementKind::ChildContainer, &ViewConfig::DEFAULT);
        for edge in ["top", "left", "right", "bottom"] {
            assert!(
                decls.contains(&Declaration::new(edge, "0")),
                "{edge} should be pinned to 0"
            );
        }
    }
}
