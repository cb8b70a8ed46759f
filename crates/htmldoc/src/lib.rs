//! # htmldoc
//!
//! Convert HTML element trees into structured documents.
//!
//! The converter walks an [`Element`] tree once and emits typed nodes
//! (titles, headings, paragraphs, code, lists, tables, pictures and
//! captions) into a [`DocumentBuilder`]. Headings open nested sections, lists
//! carry their numbering, and tables with row and column spans are
//! reconstructed into an explicit grid.
//!
//! ## Design
//!
//! The converter does not parse HTML itself. It accepts an [`Element`] tree,
//! so any parser can feed it:
//!
//! - **Parser agnostic**: build the tree by hand or from another DOM
//! - **Pluggable output**: implement [`DocumentBuilder`] to receive nodes
//! - **Optional parsing**: the `html` feature (default) adds a scraper front end
//!
//! ## Example (Element-based)
//!
//! ```rust
//! use htmldoc::{Element, HtmlConverter};
//!
//! let body = Element::new("body")
//!     .child(Element::new("h1").text("Hello World"))
//!     .child(Element::new("p").text("First paragraph"));
//!
//! let doc = HtmlConverter::new().convert(&body).unwrap();
//! assert!(doc.find_by_text("First paragraph").next().is_some());
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmldoc::HtmlConverter;
//!
//! let doc = HtmlConverter::new()
//!     .convert_html(r#"<ol start="3"><li>three</li><li>four</li></ol>"#)
//!     .unwrap();
//! for (depth, node) in doc.iter_tree() {
//!     println!("{}{:?}", "  ".repeat(depth), node.item);
//! }
//! ```

mod category;
pub mod hierarchy;
#[cfg(feature = "html")]
pub mod html;
pub mod list;
pub mod node;
mod service;
mod table;
mod utilities;

pub use category::TagCategory;
pub use hierarchy::DEFAULT_MAX_LEVELS;
#[cfg(feature = "html")]
pub use html::{parse_html, parse_html_bytes};
pub use htmldoc_core::{
    ContentLayer, Document, DocumentBuilder, DocumentError, GroupLabel, Item, NodeId, TableCell,
    TableData, TextLabel,
};
pub use node::{Element, Node};
pub use service::{ConverterOptions, HtmlConverter};
pub use table::{cell_spans, cell_text, parse_table_data, MAX_COL_SPAN, MAX_ROW_SPAN};

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Hierarchy depth {depth} exceeds the maximum of {max} levels")]
    DepthExceeded { depth: usize, max: usize },

    #[error(transparent)]
    Document(#[from] DocumentError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
