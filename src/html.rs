//! HTML markup for column content and resolved layouts.
//!
//! Column content is opaque to the layout: anything implementing
//! [`Renderable`] can be placed in a column. Plain text (`str`/`String`) is
//! escaped; [`Markup`] is trusted, pre-rendered HTML (typically the output of
//! rendering a child block) and is written as-is.
//!
//! # Example
//!
//! ```
//! use columns_container::html::{Markup, Renderable};
//!
//! assert_eq!("a < b".render_to_string(), "a &lt; b");
//! assert_eq!(Markup::new("<b>bold</b>").render_to_string(), "<b>bold</b>");
//! ```

use std::fmt;

/// Trait for column content that can be written as HTML.
pub trait Renderable {
    /// Append the HTML for this fragment to `out`.
    fn render(&self, out: &mut String);

    /// Render into a fresh string.
    fn render_to_string(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}

/// Pre-rendered HTML, written without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Markup(String);

impl Markup {
    /// Wrap an HTML string. The caller is responsible for its safety.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// The wrapped HTML.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the HTML string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl Renderable for Markup {
    fn render(&self, out: &mut String) {
        out.push_str(&self.0);
    }
}

impl Renderable for str {
    fn render(&self, out: &mut String) {
        escape_into(self, out);
    }
}

impl Renderable for String {
    fn render(&self, out: &mut String) {
        self.as_str().render(out);
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn render(&self, out: &mut String) {
        (*self).render(out);
    }
}

impl<T: Renderable> Renderable for Option<T> {
    fn render(&self, out: &mut String) {
        if let Some(inner) = self {
            inner.render(out);
        }
    }
}

/// A fragment list renders its items back to back.
impl<T: Renderable> Renderable for [T] {
    fn render(&self, out: &mut String) {
        for item in self {
            item.render(out);
        }
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn render(&self, out: &mut String) {
        self.as_slice().render(out);
    }
}

/// Escape text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
}
