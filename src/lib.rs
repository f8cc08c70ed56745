//! # columns_container
//!
//! A multi-column layout block for email templates.
//!
//! Email clients still lay out tables more reliably than anything else, so a
//! columns block is rendered as a single-row, fixed-layout table. This crate
//! turns a block's (possibly partial) configuration and its column content
//! into that table.
//!
//! ## Quick Start
//!
//! ```rust
//! use columns_container::prelude::*;
//!
//! let block = ColumnsContainer::new(vec!["Left", "Right"])
//!     .columns_gap(24.0)
//!     .background_color(HexColor::parse("#FFFFFF").unwrap());
//!
//! let html = block.render_html();
//! assert!(html.starts_with("<div style=\"background-color:#FFFFFF\">"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Config**: partial style/props, resolved field by field against defaults
//! - **Spacing**: how the column gap is split into per-cell insets
//! - **Layout**: the resolved table, one cell per column
//! - **Schema**: validation of a block's JSON into typed config
//! - **Renderable**: trait for anything that can be placed in a column

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod align;
pub mod color;
pub mod config;
pub mod container;
pub mod css;
pub mod html;
pub mod layout;
pub mod padding;
pub mod schema;
pub mod spacing;
mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::align::VerticalAlign;
    pub use crate::color::{ColorParseError, HexColor};
    pub use crate::config::{
        BlockStyle, ColumnsContainerProps, ColumnsCount, ContainerStyle, FixedWidths,
        LayoutConfig,
    };
    pub use crate::container::ColumnsContainer;
    pub use crate::html::{Markup, Renderable};
    pub use crate::layout::{ColumnsLayout, LayoutCell};
    pub use crate::padding::PaddingDimensions;
    pub use crate::schema::{ColumnsContainerData, SchemaError};
    pub use crate::spacing::{CellSpacing, padding_after, padding_before};
}

// Re-export key types at crate root
pub use align::VerticalAlign;
pub use color::HexColor;
pub use config::{ColumnsCount, LayoutConfig};
pub use container::ColumnsContainer;
pub use html::Renderable;
pub use layout::ColumnsLayout;
