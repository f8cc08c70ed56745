//! Padding - CSS-style padding box for the block container.
//!
//! Values follow CSS conventions:
//! - 1 value: all sides equal
//! - 2 values: (vertical, horizontal) -> top/bottom, left/right
//! - 4 values: (top, right, bottom, left) -> individual sides
//!
//! Unlike cell insets, container padding is always written with an explicit
//! unit on every side: `5px 10px 5px 10px`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::css::css_number;

/// CSS-style padding dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaddingDimensions {
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
}

impl PaddingDimensions {
    /// Create padding with all sides equal.
    #[must_use]
    pub const fn all(n: f64) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Create padding with separate vertical and horizontal values.
    #[must_use]
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create padding with individual values for each side.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create zero padding.
    #[must_use]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// The CSS `padding` shorthand, `"{top}px {right}px {bottom}px {left}px"`.
    #[must_use]
    pub fn shorthand(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            css_number(self.top),
            css_number(self.right),
            css_number(self.bottom),
            css_number(self.left)
        )
    }
}

impl fmt::Display for PaddingDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shorthand())
    }
}

impl From<f64> for PaddingDimensions {
    fn from(n: f64) -> Self {
        Self::all(n)
    }
}

impl From<(f64, f64)> for PaddingDimensions {
    fn from((vertical, horizontal): (f64, f64)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<(f64, f64, f64, f64)> for PaddingDimensions {
    fn from((top, right, bottom, left): (f64, f64, f64, f64)) -> Self {
        Self::new(top, right, bottom, left)
    }
}
