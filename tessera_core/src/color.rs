// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colour inputs.
//!
//! Host frameworks hand colours over either as CSS strings or as packed
//! 32-bit ARGB integers. Both forms converge to a CSS string before they are
//! stored on a view.

use alloc::format;
use alloc::string::String;

/// A colour as supplied by the host framework.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Color {
    /// A pre-formatted CSS colour string, passed through verbatim.
    Css(String),
    /// A packed `0xAARRGGBB` integer.
    Argb(u32),
}

impl Color {
    /// Fully transparent black, the initial background of every view.
    pub const TRANSPARENT: &'static str = "rgba(0,0,0,0)";

    /// Returns the CSS string form of this colour.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Css(s) => s.clone(),
            Self::Argb(packed) => {
                let [a, r, g, b] = argb_channels(*packed);
                format!("rgba({r},{g},{b},{a})")
            }
        }
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self::Argb(packed)
    }
}

impl From<&str> for Color {
    fn from(css: &str) -> Self {
        Self::Css(css.into())
    }
}

impl From<String> for Color {
    fn from(css: String) -> Self {
        Self::Css(css)
    }
}

/// Splits a packed `0xAARRGGBB` colour into `[a, r, g, b]`.
///
/// Red, green and blue stay in `0..=255`; alpha is scaled to `0.0..=1.0`.
#[must_use]
pub fn argb_channels(packed: u32) -> [f64; 4] {
    let a = f64::from((packed >> 24) & 0xff) / 255.0;
    let r = f64::from((packed >> 16) & 0xff);
    let g = f64::from((packed >> 8) & 0xff);
    let b = f64::from(packed & 0xff);
    [a, r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_of_opaque_color() {
        assert_eq!(argb_channels(0xFF11_2233), [1.0, 17.0, 34.0, 51.0]);
    }

    #[test]
    fn channels_of_transparent_color() {
        assert_eq!(argb_channels(0x0000_0000), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn packed_and_string_forms_converge() {
        assert_eq!(
            Color::Argb(0xFF11_2233).to_css(),
            Color::from("rgba(17,34,51,1)").to_css(),
            "both colour forms should produce the same CSS string"
        );
    }

    #[test]
    fn half_alpha_formats_like_js() {
        assert_eq!(
            Color::Argb(0x80FF_0000).to_css(),
            "rgba(255,0,0,0.5019607843137255)"
        );
    }
}
