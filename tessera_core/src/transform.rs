// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View transforms and their CSS form.
//!
//! A view is positioned with a `translate()` built from its `left`/`top`,
//! optionally followed by a secondary transform. The secondary transform is
//! either an animated transform (a list of [`TransformOp`]s, rendered once to
//! a string) or a static [`Transform3d`] rendered as `matrix3d()`. The
//! animated form always wins when both are present.

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::error::ViewError;

/// A column-major 4×4 transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix, matching the layout of the
/// 16-element arrays host frameworks send and of CSS `matrix3d()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a transform from a flat column-major array.
    #[inline]
    #[must_use]
    pub const fn from_cols_array(m: [f64; 16]) -> Self {
        Self {
            cols: [
                [m[0], m[1], m[2], m[3]],
                [m[4], m[5], m[6], m[7]],
                [m[8], m[9], m[10], m[11]],
                [m[12], m[13], m[14], m[15]],
            ],
        }
    }

    /// Creates a transform from a flat column-major slice.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::TransformShape`] unless the slice holds exactly
    /// 16 values.
    pub fn try_from_slice(m: &[f64]) -> Result<Self, ViewError> {
        let arr: [f64; 16] = m
            .try_into()
            .map_err(|_| ViewError::TransformShape { len: m.len() })?;
        Ok(Self::from_cols_array(arr))
    }

    /// Returns the matrix as a flat column-major array.
    #[must_use]
    pub fn to_cols_array(self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (i, v) in self.cols.iter().flatten().enumerate() {
            out[i] = *v;
        }
        out
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Formats as a CSS `matrix3d(...)` function, values joined by `", "`.
impl fmt::Display for Transform3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("matrix3d(")?;
        for (i, v) in self.cols.iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// One step of an animated transform.
///
/// Translations render in `px`, rotations in `rad`, everything else
/// unitless.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformOp {
    /// `translateX(<v>px)`
    TranslateX(f64),
    /// `translateY(<v>px)`
    TranslateY(f64),
    /// `translateZ(<v>px)`
    TranslateZ(f64),
    /// `rotate(<v>rad)`
    Rotate(f64),
    /// `rotateX(<v>rad)`
    RotateX(f64),
    /// `rotateY(<v>rad)`
    RotateY(f64),
    /// `rotateZ(<v>rad)`
    RotateZ(f64),
    /// `scale(<v>)`
    Scale(f64),
    /// `scaleX(<v>)`
    ScaleX(f64),
    /// `scaleY(<v>)`
    ScaleY(f64),
    /// `perspective(<v>)`
    Perspective(f64),
    /// Any other transform function, rendered as `name(<v>)`.
    Other {
        /// CSS function name, kept verbatim.
        function: String,
        /// Argument, rendered without a unit.
        value: f64,
    },
}

impl TransformOp {
    /// Builds an op from a host-supplied key such as `"translateX"`.
    ///
    /// Unknown keys are kept verbatim as [`TransformOp::Other`].
    #[must_use]
    pub fn from_key(key: &str, value: f64) -> Self {
        match key {
            "translateX" => Self::TranslateX(value),
            "translateY" => Self::TranslateY(value),
            "translateZ" => Self::TranslateZ(value),
            "rotate" => Self::Rotate(value),
            "rotateX" => Self::RotateX(value),
            "rotateY" => Self::RotateY(value),
            "rotateZ" => Self::RotateZ(value),
            "scale" => Self::Scale(value),
            "scaleX" => Self::ScaleX(value),
            "scaleY" => Self::ScaleY(value),
            "perspective" => Self::Perspective(value),
            _ => Self::Other {
                function: key.into(),
                value,
            },
        }
    }

    /// Returns the CSS function name.
    #[must_use]
    pub fn function(&self) -> &str {
        match self {
            Self::TranslateX(_) => "translateX",
            Self::TranslateY(_) => "translateY",
            Self::TranslateZ(_) => "translateZ",
            Self::Rotate(_) => "rotate",
            Self::RotateX(_) => "rotateX",
            Self::RotateY(_) => "rotateY",
            Self::RotateZ(_) => "rotateZ",
            Self::Scale(_) => "scale",
            Self::ScaleX(_) => "scaleX",
            Self::ScaleY(_) => "scaleY",
            Self::Perspective(_) => "perspective",
            Self::Other { function, .. } => function,
        }
    }

    /// Returns the numeric argument.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::TranslateX(v)
            | Self::TranslateY(v)
            | Self::TranslateZ(v)
            | Self::Rotate(v)
            | Self::RotateX(v)
            | Self::RotateY(v)
            | Self::RotateZ(v)
            | Self::Scale(v)
            | Self::ScaleX(v)
            | Self::ScaleY(v)
            | Self::Perspective(v)
            | Self::Other { value: v, .. } => *v,
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            Self::TranslateX(_) | Self::TranslateY(_) | Self::TranslateZ(_) => "px",
            Self::Rotate(_) | Self::RotateX(_) | Self::RotateY(_) | Self::RotateZ(_) => "rad",
            _ => "",
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}{})", self.function(), self.value(), self.unit())
    }
}

/// Renders an animated transform.
///
/// Ops are concatenated in order and followed by ` translateZ(0px)`, which
/// keeps the element on its own compositing layer. Returns `None` for an
/// empty list.
#[must_use]
pub fn animated_css(ops: &[TransformOp]) -> Option<String> {
    if ops.is_empty() {
        return None;
    }
    let mut out = String::new();
    for op in ops {
        let _ = write!(out, "{op}");
    }
    out.push_str(" translateZ(0px)");
    Some(out)
}

/// Builds the composite `transform` value of a view.
///
/// `translate(<left>px, <top>px)`, followed by `animated` if present, else by
/// `matrix` rendered as `matrix3d()` if present.
#[must_use]
pub fn composite_css(
    left: f64,
    top: f64,
    animated: Option<&str>,
    matrix: Option<&Transform3d>,
) -> String {
    let mut out = format!("translate({left}px, {top}px)");
    if let Some(animated) = animated {
        out.push(' ');
        out.push_str(animated);
    } else if let Some(matrix) = matrix {
        let _ = write!(out, " {matrix}");
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform3d::default(), Transform3d::IDENTITY);
    }

    #[test]
    fn flat_array_round_trips_through_columns() {
        let flat = [
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ];
        let t = Transform3d::from_cols_array(flat);
        assert_eq!(t.cols[1], [5.0, 6.0, 7.0, 8.0]);
        assert_eq!(t.to_cols_array(), flat);
    }

    #[test]
    fn try_from_slice_rejects_wrong_length() {
        assert_eq!(
            Transform3d::try_from_slice(&[1.0; 9]),
            Err(ViewError::TransformShape { len: 9 })
        );
        assert_eq!(
            Transform3d::try_from_slice(&Transform3d::IDENTITY.to_cols_array()),
            Ok(Transform3d::IDENTITY)
        );
    }

    #[test]
    fn identity_renders_as_matrix3d() {
        assert_eq!(
            Transform3d::IDENTITY.to_string(),
            "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)"
        );
    }

    #[test]
    fn ops_pick_units_by_function() {
        assert_eq!(TransformOp::TranslateX(10.0).to_string(), "translateX(10px)");
        assert_eq!(TransformOp::RotateZ(0.5).to_string(), "rotateZ(0.5rad)");
        assert_eq!(TransformOp::Scale(2.0).to_string(), "scale(2)");
        assert_eq!(
            TransformOp::from_key("skewX", 0.25).to_string(),
            "skewX(0.25)"
        );
    }

    #[test]
    fn from_key_maps_known_functions() {
        assert_eq!(
            TransformOp::from_key("rotate", 1.0),
            TransformOp::Rotate(1.0)
        );
        assert_eq!(
            TransformOp::from_key("translateY", -3.0),
            TransformOp::TranslateY(-3.0)
        );
    }

    #[test]
    fn animated_css_concatenates_and_forces_compositing() {
        let ops = vec![TransformOp::TranslateX(5.0), TransformOp::Rotate(1.5)];
        assert_eq!(
            animated_css(&ops).as_deref(),
            Some("translateX(5px)rotate(1.5rad) translateZ(0px)")
        );
        assert_eq!(animated_css(&[]), None);
    }

    #[test]
    fn composite_prefers_animated_over_matrix() {
        let m = Transform3d::from_scale(2.0, 2.0, 1.0);
        assert_eq!(composite_css(3.0, 4.0, None, None), "translate(3px, 4px)");
        assert_eq!(
            composite_css(0.0, 0.0, Some("scale(2) translateZ(0px)"), Some(&m)),
            "translate(0px, 0px) scale(2) translateZ(0px)"
        );
        assert_eq!(
            composite_css(1.0, 2.0, None, Some(&m)),
            "translate(1px, 2px) matrix3d(2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)"
        );
    }
}
