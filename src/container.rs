//! ColumnsContainer - the multi-column email block.
//!
//! A [`ColumnsContainer`] owns a block's style, its layout props and the
//! content of each column. It can be configured with builder methods or
//! loaded from the block's JSON, and renders to a table-based layout that
//! email clients lay out consistently.
//!
//! # Example
//!
//! ```
//! use columns_container::prelude::*;
//!
//! let block = ColumnsContainer::new(vec!["Left", "Middle", "Right"])
//!     .columns_count(ColumnsCount::Three)
//!     .columns_gap(30.0)
//!     .content_alignment(VerticalAlign::Top);
//!
//! let layout = block.layout();
//! assert_eq!(layout.cells[1].padding_left, 10.0);
//!
//! let html = block.render_html();
//! assert!(html.contains("vertical-align:top"));
//! ```

use crate::align::VerticalAlign;
use crate::color::HexColor;
use crate::config::{
    self, BlockStyle, ColumnsContainerProps, ColumnsCount, ContainerStyle, FixedWidths,
    LayoutConfig,
};
use crate::html::Renderable;
use crate::layout::ColumnsLayout;
use crate::padding::PaddingDimensions;
use crate::schema::{self, ColumnsContainerData, SchemaError};

/// A columns block: configuration plus per-column content.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnsContainer<C> {
    style: Option<BlockStyle>,
    props: Option<ColumnsContainerProps>,
    columns: Vec<C>,
}

impl<C> Default for ColumnsContainer<C> {
    fn default() -> Self {
        Self {
            style: None,
            props: None,
            columns: Vec::new(),
        }
    }
}

impl<C> ColumnsContainer<C> {
    /// Create a block with default configuration and the given column content.
    #[must_use]
    pub fn new(columns: Vec<C>) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    /// Create a block from validated input data.
    #[must_use]
    pub fn from_data(data: ColumnsContainerData, columns: Vec<C>) -> Self {
        Self {
            style: data.style,
            props: data.props,
            columns,
        }
    }

    /// Validate the block's JSON and create a block from it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the JSON does not satisfy the block schema.
    pub fn from_json(value: &serde_json::Value, columns: Vec<C>) -> Result<Self, SchemaError> {
        let data = schema::parse_value(value)?;
        Ok(Self::from_data(data, columns))
    }

    fn style_mut(&mut self) -> &mut BlockStyle {
        self.style.get_or_insert_with(BlockStyle::default)
    }

    fn props_mut(&mut self) -> &mut ColumnsContainerProps {
        self.props.get_or_insert_with(ColumnsContainerProps::default)
    }

    /// Set the container background color.
    #[must_use]
    pub fn background_color(mut self, color: HexColor) -> Self {
        self.style_mut().background_color = Some(color);
        self
    }

    /// Set the container padding.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<PaddingDimensions>) -> Self {
        self.style_mut().padding = Some(padding.into());
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn columns_count(mut self, count: ColumnsCount) -> Self {
        self.props_mut().columns_count = Some(count);
        self
    }

    /// Set the gap distributed between columns.
    #[must_use]
    pub fn columns_gap(mut self, gap: f64) -> Self {
        self.props_mut().columns_gap = Some(gap);
        self
    }

    /// Set the vertical alignment of column content.
    #[must_use]
    pub fn content_alignment(mut self, align: VerticalAlign) -> Self {
        self.props_mut().content_alignment = Some(align);
        self
    }

    /// Set explicit column widths.
    #[must_use]
    pub fn fixed_widths(mut self, widths: impl Into<FixedWidths>) -> Self {
        self.props_mut().fixed_widths = Some(widths.into());
        self
    }

    /// Replace the column content.
    #[must_use]
    pub fn columns(mut self, columns: Vec<C>) -> Self {
        self.columns = columns;
        self
    }

    /// The caller-supplied style, if any.
    #[must_use]
    pub fn style(&self) -> Option<&BlockStyle> {
        self.style.as_ref()
    }

    /// The caller-supplied props, if any.
    #[must_use]
    pub fn props(&self) -> Option<&ColumnsContainerProps> {
        self.props.as_ref()
    }

    /// Column content, in column order.
    #[must_use]
    pub fn column_content(&self) -> &[C] {
        &self.columns
    }

    /// Resolved layout configuration.
    #[must_use]
    pub fn config(&self) -> LayoutConfig {
        config::resolve_props(self.props.as_ref())
    }

    /// Resolved container style.
    #[must_use]
    pub fn container_style(&self) -> ContainerStyle {
        config::resolve_style(self.style.as_ref())
    }

    /// Resolve configuration and build the layout.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    #[must_use]
    pub fn layout(&self) -> ColumnsLayout<'_, C> {
        let (config, style) = config::resolve(self.style.as_ref(), self.props.as_ref());
        ColumnsLayout::build(&config, style, &self.columns)
    }
}

impl<C: Renderable> ColumnsContainer<C> {
    /// Render the block as HTML.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    #[must_use]
    pub fn render_html(&self) -> String {
        self.layout().to_html()
    }
}

impl<C: Renderable> Renderable for ColumnsContainer<C> {
    fn render(&self, out: &mut String) {
        self.layout().write_html(out);
    }
}
