//! Input schema for columns blocks.
//!
//! Blocks arrive from template documents as untyped JSON. This module
//! validates that JSON and coerces it into [`ColumnsContainerData`], the
//! typed (but still partial) configuration the resolver accepts.
//!
//! Every field is optional and nullable; `null` and a missing key mean the
//! same thing. Unknown keys are ignored.
//!
//! ```json
//! {
//!   "style": { "backgroundColor": "#FFFFFF",
//!              "padding": { "top": 5, "right": 10, "bottom": 5, "left": 10 } },
//!   "props": { "columnsCount": 3, "columnsGap": 30,
//!              "contentAlignment": "top",
//!              "fixedWidths": [100, null, null, null] }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use columns_container::schema;
//!
//! let data = schema::parse_str(r#"{"props": {"columnsCount": 3}}"#).unwrap();
//! assert_eq!(data.props.unwrap().columns_count.unwrap().get(), 3);
//!
//! assert!(schema::parse_str(r#"{"props": {"columnsCount": 5}}"#).is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::config::{BlockStyle, ColumnsContainerProps};

/// Validated block input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnsContainerData {
    pub style: Option<BlockStyle>,
    pub props: Option<ColumnsContainerProps>,
}

/// Error type for schema validation.
#[derive(Debug)]
pub enum SchemaError {
    /// The input is not valid JSON, or does not have the expected shape
    /// (wrong type, bad color, unknown alignment, ...).
    Invalid(serde_json::Error),
    /// `columnsGap` is negative.
    NegativeGap(f64),
    /// A numeric field is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// An object was expected (the block, `style`, `props` or `padding`).
    ExpectedObject(&'static str),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "Invalid columns block: {err}"),
            Self::NegativeGap(gap) => write!(f, "Invalid columnsGap (must be >= 0): {gap}"),
            Self::NonFinite { field, value } => {
                write!(f, "Invalid {field} (must be a finite number): {value}")
            }
            Self::ExpectedObject(field) => write!(f, "Invalid {field} (expected an object)"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::NegativeGap(_) | Self::NonFinite { .. } | Self::ExpectedObject(_) => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Invalid(err)
    }
}

/// Validate an already-parsed JSON value.
///
/// # Errors
///
/// Returns `SchemaError` if any field has the wrong type or an out-of-range
/// value.
pub fn parse_value(value: &Value) -> Result<ColumnsContainerData, SchemaError> {
    check_shape(value).inspect_err(|err| {
        log::debug!("rejected columns block: {err}");
    })?;
    let data = ColumnsContainerData::deserialize(value).inspect_err(|err| {
        log::debug!("rejected columns block: {err}");
    })?;
    validate(&data)?;
    Ok(data)
}

/// Parse and validate a JSON string.
///
/// # Errors
///
/// Returns `SchemaError` if the string is not JSON or fails validation.
pub fn parse_str(json: &str) -> Result<ColumnsContainerData, SchemaError> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(&value)
}

/// Serde accepts a struct written as a JSON array; the block format does not.
fn check_shape(value: &Value) -> Result<(), SchemaError> {
    let block = value.as_object().ok_or(SchemaError::ExpectedObject("block"))?;
    object_or_null(block.get("props"), "props")?;
    if let Some(style) = object_or_null(block.get("style"), "style")? {
        object_or_null(style.get("padding"), "padding")?;
    }
    Ok(())
}

fn object_or_null<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<Option<&'a serde_json::Map<String, Value>>, SchemaError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(SchemaError::ExpectedObject(field)),
    }
}

/// Checks serde cannot express: value ranges of numeric fields.
///
/// # Errors
///
/// Returns `SchemaError` for a negative gap or a non-finite number.
pub fn validate(data: &ColumnsContainerData) -> Result<(), SchemaError> {
    let result = validate_numbers(data);
    if let Err(err) = &result {
        log::debug!("rejected columns block: {err}");
    }
    result
}

fn validate_numbers(data: &ColumnsContainerData) -> Result<(), SchemaError> {
    if let Some(padding) = data.style.as_ref().and_then(|style| style.padding) {
        for value in [padding.top, padding.right, padding.bottom, padding.left] {
            finite("padding", value)?;
        }
    }

    let Some(props) = data.props.as_ref() else {
        return Ok(());
    };

    if let Some(gap) = props.columns_gap {
        finite("columnsGap", gap)?;
        if gap < 0.0 {
            return Err(SchemaError::NegativeGap(gap));
        }
    }

    if let Some(widths) = props.fixed_widths {
        for width in widths.0.into_iter().flatten() {
            finite("fixedWidths", width)?;
        }
    }

    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<(), SchemaError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SchemaError::NonFinite { field, value })
    }
}
