//! Inline CSS helpers.
//!
//! Email clients ignore `<style>` blocks often enough that every declaration
//! is written inline. Numbers are formatted the way a browser serializes
//! them: shortest round-trip representation, no trailing `.0`.

use std::fmt::Write;

/// Format a CSS number: `10.0` -> `10`, `2.5` -> `2.5`, `-0.0` -> `0`.
#[must_use]
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Format a CSS length in pixels. Zero is unitless.
#[must_use]
pub fn css_length(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}px")
}

/// An ordered list of inline style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    declarations: Vec<(&'static str, String)>,
}

impl StyleDeclarations {
    /// Create an empty declaration list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    /// Append a declaration if `value` is present.
    #[must_use]
    pub fn with_opt(self, property: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(property, value),
            None => self,
        }
    }

    /// Whether no declaration has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize as `prop:value;prop:value`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            let _ = write!(out, "{property}:{value}");
        }
        out
    }
}
