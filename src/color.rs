//! Hex colors for block backgrounds.
//!
//! Email clients only get one color notation from a block: a six digit
//! `#RRGGBB` string. [`HexColor`] validates that notation and keeps the
//! string exactly as the caller wrote it, so `#FFFFFF` is emitted as
//! `#FFFFFF` and `#ffffff` as `#ffffff`.
//!
//! # Examples
//!
//! ```
//! use columns_container::color::HexColor;
//!
//! let white = HexColor::parse("#FFFFFF").unwrap();
//! assert_eq!(white.as_str(), "#FFFFFF");
//! assert_eq!(white.to_string(), "#FFFFFF");
//!
//! assert!(HexColor::parse("#fff").is_err());
//! ```

use lru::LruCache;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::Mutex;

use crate::sync::lock_recover;

/// A validated `#RRGGBB` color, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    value: String,
}

impl HexColor {
    /// Parse a `#RRGGBB` color string.
    ///
    /// Digits may be upper or lower case. Surrounding whitespace, shorthand
    /// `#RGB` and named colors are all rejected.
    ///
    /// # Errors
    ///
    /// Returns `ColorParseError` if the color string is invalid:
    /// - `Empty` if the string is empty
    /// - `InvalidHex` if it is not exactly `#` followed by six hex digits
    pub fn parse(color: &str) -> Result<Self, ColorParseError> {
        static CACHE: LazyLock<Mutex<LruCache<String, HexColor>>> =
            LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(256).expect("non-zero"))));

        if let Some(cached) = lock_recover(&*CACHE).get(color) {
            return Ok(cached.clone());
        }

        let result = Self::parse_uncached(color)?;
        lock_recover(&*CACHE).put(color.to_string(), result.clone());
        Ok(result)
    }

    fn parse_uncached(color: &str) -> Result<Self, ColorParseError> {
        static HEX_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex"));

        if color.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !HEX_RE.is_match(color) {
            return Err(ColorParseError::InvalidHex(color.to_string()));
        }

        Ok(Self {
            value: color.to_string(),
        })
    }

    /// The color exactly as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.value
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHex(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidHex(s) => write!(f, "Invalid hex color (expected #RRGGBB): {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
