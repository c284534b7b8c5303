// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element kind → tag name registration.

use tessera_core::style::ElementKind;

/// Tag names the presenter creates for each [`ElementKind`].
///
/// Registration happens once during setup, before the first
/// [`DomPresenter`](crate::DomPresenter) is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementRegistry {
    host: &'static str,
    child_container: &'static str,
    border: &'static str,
}

impl ElementRegistry {
    /// The default tag names: `ui-view`, `ui-child-container-view`,
    /// `ui-border-view`.
    pub const DEFAULT: Self = Self {
        host: "ui-view",
        child_container: "ui-child-container-view",
        border: "ui-border-view",
    };

    /// Registers `tag` as the element created for `kind`.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is not a valid custom element name (it must contain a
    /// hyphen and start with a lowercase ASCII letter).
    #[must_use]
    pub const fn register(mut self, kind: ElementKind, tag: &'static str) -> Self {
        assert!(is_custom_element_name(tag), "invalid custom element name");
        match kind {
            ElementKind::Host => self.host = tag,
            ElementKind::ChildContainer => self.child_container = tag,
            ElementKind::Border => self.border = tag,
        }
        self
    }

    /// Returns the tag name registered for `kind`.
    #[must_use]
    pub const fn tag_name(&self, kind: ElementKind) -> &'static str {
        match kind {
            ElementKind::Host => self.host,
            ElementKind::ChildContainer => self.child_container,
            ElementKind::Border => self.border,
        }
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Lowercase ASCII start, at least one hyphen.
const fn is_custom_element_name(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_lowercase() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'-' {
            return true;
        }
        i += 1;
    }
    false
}
