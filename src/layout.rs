//! Layout - the resolved table structure of a columns block.
//!
//! [`ColumnsLayout::build`] turns a [`LayoutConfig`] and the caller's column
//! content into the structure emitted for email clients:
//!
//! ```text
//! div (background color, padding)
//! └── table (fixed layout, full width)
//!     └── tbody
//!         └── tr
//!             ├── td  column 0
//!             ├── td  column 1
//!             └── ...
//! ```
//!
//! Exactly `columns_count` cells are produced. Content or fixed widths
//! missing for an index give an empty, auto-width cell; extra content is
//! ignored.

use smallvec::SmallVec;

use crate::align::VerticalAlign;
use crate::config::{ContainerStyle, LayoutConfig, MAX_COLUMNS};
use crate::css::{StyleDeclarations, css_length};
use crate::html::Renderable;
use crate::spacing::cell_spacing;

/// Fixed attributes of the inner table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableAttributes {
    pub align: &'static str,
    pub width: &'static str,
    pub cell_padding: u8,
    pub border: u8,
    pub table_layout: &'static str,
    pub border_collapse: &'static str,
}

impl Default for TableAttributes {
    fn default() -> Self {
        Self {
            align: "center",
            width: "100%",
            cell_padding: 0,
            border: 0,
            table_layout: "fixed",
            border_collapse: "collapse",
        }
    }
}

/// One column cell.
#[derive(Debug)]
pub struct LayoutCell<'a, C> {
    /// Column position, `0..columns_count`.
    pub index: usize,
    pub vertical_align: VerticalAlign,
    pub padding_left: f64,
    pub padding_right: f64,
    /// Explicit width; `None` lets the table size the column.
    pub width: Option<f64>,
    /// Borrowed caller content, `None` for an empty cell.
    pub content: Option<&'a C>,
}

impl<C> Clone for LayoutCell<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for LayoutCell<'_, C> {}

impl<C> LayoutCell<'_, C> {
    /// Inline style of the `td`.
    #[must_use]
    pub fn style(&self) -> StyleDeclarations {
        StyleDeclarations::new()
            .with("box-sizing", "content-box")
            .with("vertical-align", self.vertical_align.as_str())
            .with("padding-left", css_length(self.padding_left))
            .with("padding-right", css_length(self.padding_right))
            .with_opt("width", self.width.map(css_length))
    }
}

/// A fully-resolved columns block, ready for emission.
#[derive(Debug, Clone)]
pub struct ColumnsLayout<'a, C> {
    pub style: ContainerStyle,
    pub table: TableAttributes,
    /// Cells of the single row, in column order.
    pub cells: SmallVec<[LayoutCell<'a, C>; MAX_COLUMNS]>,
}

impl<'a, C> ColumnsLayout<'a, C> {
    /// Build the layout for `config`, pairing each column with `columns[index]`.
    #[must_use]
    pub fn build(config: &LayoutConfig, style: ContainerStyle, columns: &'a [C]) -> Self {
        let count = config.columns_count.get();
        if columns.len() > count {
            log::trace!(
                "ignoring {} content fragment(s) beyond {count} columns",
                columns.len() - count
            );
        }

        let cells = (0..count)
            .map(|index| {
                let spacing = cell_spacing(index, config);
                LayoutCell {
                    index,
                    vertical_align: config.content_alignment,
                    padding_left: spacing.before,
                    padding_right: spacing.after,
                    width: config.fixed_width(index),
                    content: columns.get(index),
                }
            })
            .collect();

        Self {
            style,
            table: TableAttributes::default(),
            cells,
        }
    }

    /// Inline style of the outer container.
    #[must_use]
    pub fn container_style(&self) -> StyleDeclarations {
        StyleDeclarations::new()
            .with_opt(
                "background-color",
                self.style.background_color.as_ref().map(ToString::to_string),
            )
            .with_opt("padding", self.style.padding.clone())
    }

    /// Inline style of the table element.
    #[must_use]
    pub fn table_style(&self) -> StyleDeclarations {
        StyleDeclarations::new()
            .with("table-layout", self.table.table_layout)
            .with("border-collapse", self.table.border_collapse)
    }
}

impl<C: Renderable> ColumnsLayout<'_, C> {
    /// Append the block's HTML to `out`.
    pub fn write_html(&self, out: &mut String) {
        let container = self.container_style();
        if container.is_empty() {
            out.push_str("<div>");
        } else {
            push_open_tag(out, "div", &[], &container);
        }

        let cell_padding = self.table.cell_padding.to_string();
        let border = self.table.border.to_string();
        push_open_tag(
            out,
            "table",
            &[
                ("align", self.table.align),
                ("width", self.table.width),
                ("cellpadding", cell_padding.as_str()),
                ("border", border.as_str()),
            ],
            &self.table_style(),
        );

        let full_width = StyleDeclarations::new().with("width", "100%");
        push_open_tag(out, "tbody", &[], &full_width);
        push_open_tag(out, "tr", &[], &full_width);

        for cell in &self.cells {
            push_open_tag(out, "td", &[], &cell.style());
            if let Some(content) = cell.content {
                content.render(out);
            }
            out.push_str("</td>");
        }

        out.push_str("</tr></tbody></table></div>");
    }

    /// Render the block as an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

fn push_open_tag(out: &mut String, tag: &str, attrs: &[(&str, &str)], style: &StyleDeclarations) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&crate::html::escape(value));
        out.push('"');
    }
    if !style.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&crate::html::escape(&style.to_css()));
        out.push('"');
    }
    out.push('>');
}
