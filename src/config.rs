//! Block configuration and default resolution.
//!
//! A columns block is configured by two loosely-typed objects: a style
//! ([`BlockStyle`]) and props ([`ColumnsContainerProps`]). Either object, and
//! every field inside it, may be missing. Resolution fills in defaults one
//! field at a time and produces the fully-populated [`LayoutConfig`] and
//! [`ContainerStyle`] that the layout is built from.
//!
//! Inputs are assumed to be valid already (see [`crate::schema`]); nothing
//! here can fail.
//!
//! # Example
//!
//! ```
//! use columns_container::config::{resolve, ColumnsContainerProps, ColumnsCount};
//! use columns_container::VerticalAlign;
//!
//! let props = ColumnsContainerProps {
//!     columns_count: Some(ColumnsCount::Three),
//!     ..Default::default()
//! };
//! let (config, style) = resolve(None, Some(&props));
//!
//! assert_eq!(config.columns_count, ColumnsCount::Three);
//! assert_eq!(config.columns_gap, 0.0);
//! assert_eq!(config.content_alignment, VerticalAlign::Middle);
//! assert!(style.padding.is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::align::VerticalAlign;
use crate::color::HexColor;
use crate::padding::PaddingDimensions;

/// Number of columns used when none is configured.
pub const DEFAULT_COLUMNS_COUNT: ColumnsCount = ColumnsCount::Two;

/// Gap used when none is configured.
pub const DEFAULT_COLUMNS_GAP: f64 = 0.0;

/// Content alignment used when none is configured.
pub const DEFAULT_CONTENT_ALIGNMENT: VerticalAlign = VerticalAlign::Middle;

/// Maximum number of columns a block can have.
pub const MAX_COLUMNS: usize = 4;

/// The supported column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub enum ColumnsCount {
    #[default]
    Two,
    Three,
    Four,
}

impl ColumnsCount {
    /// Number of columns as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Number of columns as an `f64`, the divisor used for gap spacing.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Two => 2.0,
            Self::Three => 3.0,
            Self::Four => 4.0,
        }
    }
}

impl fmt::Display for ColumnsCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u8> for ColumnsCount {
    type Error = ColumnsCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(ColumnsCountError(f64::from(other))),
        }
    }
}

impl TryFrom<f64> for ColumnsCount {
    type Error = ColumnsCountError;

    #[allow(clippy::float_cmp)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 2.0 {
            Ok(Self::Two)
        } else if value == 3.0 {
            Ok(Self::Three)
        } else if value == 4.0 {
            Ok(Self::Four)
        } else {
            Err(ColumnsCountError(value))
        }
    }
}

impl From<ColumnsCount> for u8 {
    fn from(count: ColumnsCount) -> Self {
        match count {
            ColumnsCount::Two => 2,
            ColumnsCount::Three => 3,
            ColumnsCount::Four => 4,
        }
    }
}

/// Error returned for a column count outside `{2, 3, 4}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnsCountError(pub f64);

impl fmt::Display for ColumnsCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid columns count (expected 2, 3 or 4): {}", self.0)
    }
}

impl std::error::Error for ColumnsCountError {}

/// Optional explicit widths, one slot per possible column.
///
/// A `None` slot means the column is sized automatically.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedWidths(pub [Option<f64>; MAX_COLUMNS]);

impl FixedWidths {
    /// Create from the four slots.
    #[must_use]
    pub const fn new(widths: [Option<f64>; MAX_COLUMNS]) -> Self {
        Self(widths)
    }

    /// Set the width of one column. Indices past the last slot are ignored.
    #[must_use]
    pub fn with(mut self, index: usize, width: f64) -> Self {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = Some(width);
        }
        self
    }

    /// Width for `index`, or `None` for auto width (including out of range).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }
}

impl From<[Option<f64>; MAX_COLUMNS]> for FixedWidths {
    fn from(widths: [Option<f64>; MAX_COLUMNS]) -> Self {
        Self(widths)
    }
}

/// Presentational style of the block container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    pub background_color: Option<HexColor>,
    pub padding: Option<PaddingDimensions>,
}

impl BlockStyle {
    /// Resolve into the descriptor handed to the renderer.
    #[must_use]
    pub fn resolve(&self) -> ContainerStyle {
        ContainerStyle {
            background_color: self.background_color.clone(),
            padding: self.padding.as_ref().map(PaddingDimensions::shorthand),
        }
    }
}

/// Layout props as supplied by the caller; every field may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsContainerProps {
    pub fixed_widths: Option<FixedWidths>,
    pub columns_count: Option<ColumnsCount>,
    pub columns_gap: Option<f64>,
    pub content_alignment: Option<VerticalAlign>,
}

impl ColumnsContainerProps {
    /// Apply defaults field by field.
    #[must_use]
    pub fn resolve(&self) -> LayoutConfig {
        let config = LayoutConfig {
            columns_count: self.columns_count.unwrap_or(DEFAULT_COLUMNS_COUNT),
            columns_gap: self.columns_gap.unwrap_or(DEFAULT_COLUMNS_GAP),
            content_alignment: self.content_alignment.unwrap_or(DEFAULT_CONTENT_ALIGNMENT),
            fixed_widths: self.fixed_widths,
        };
        log::trace!(
            "resolved layout config: count={} gap={} align={} fixed_widths={:?}",
            config.columns_count,
            config.columns_gap,
            config.content_alignment,
            config.fixed_widths
        );
        config
    }
}

/// Fully-resolved layout configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub columns_count: ColumnsCount,
    pub columns_gap: f64,
    pub content_alignment: VerticalAlign,
    /// Not defaulted: `None` means every column is auto width.
    pub fixed_widths: Option<FixedWidths>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        ColumnsContainerProps::default().resolve()
    }
}

impl LayoutConfig {
    /// Explicit width for the column at `index`, if one is configured.
    #[must_use]
    pub fn fixed_width(&self, index: usize) -> Option<f64> {
        self.fixed_widths.and_then(|widths| widths.get(index))
    }
}

/// Resolved container style: color verbatim, padding as CSS shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerStyle {
    pub background_color: Option<HexColor>,
    pub padding: Option<String>,
}

/// Resolve props into a [`LayoutConfig`], treating absent props as empty.
#[must_use]
pub fn resolve_props(props: Option<&ColumnsContainerProps>) -> LayoutConfig {
    props.copied().unwrap_or_default().resolve()
}

/// Resolve a style into a [`ContainerStyle`], treating absent style as empty.
#[must_use]
pub fn resolve_style(style: Option<&BlockStyle>) -> ContainerStyle {
    style.map(BlockStyle::resolve).unwrap_or_default()
}

/// Resolve both halves of a block's configuration.
#[must_use]
pub fn resolve(
    style: Option<&BlockStyle>,
    props: Option<&ColumnsContainerProps>,
) -> (LayoutConfig, ContainerStyle) {
    (resolve_props(props), resolve_style(style))
}
