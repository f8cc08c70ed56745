//! Vertical alignment of column content within its cell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vertical alignment methods for cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Align to top of cell.
    Top,
    /// Align to middle of cell (default).
    #[default]
    Middle,
    /// Align to bottom of cell.
    Bottom,
}

impl VerticalAlign {
    /// The CSS `vertical-align` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerticalAlign {
    type Err = VerticalAlignParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(VerticalAlignParseError(other.to_string())),
        }
    }
}

/// Error returned when a string is not `top`, `middle` or `bottom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalAlignParseError(pub String);

impl fmt::Display for VerticalAlignParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid content alignment (expected top, middle or bottom): {}",
            self.0
        )
    }
}

impl std::error::Error for VerticalAlignParseError {}
