//! htmldoc-core - structured document model
//!
//! This crate provides the output side of the `htmldoc` converter: a tree of
//! typed nodes (titles, headings, paragraphs, code, lists, tables, pictures,
//! captions and groups) stored in an arena and addressed by [`NodeId`].
//!
//! # Architecture
//!
//! ```text
//! Element tree ──walk──▶ DocumentBuilder ──▶ ┌──────────┐
//!                         (add_* calls)      │ Document │
//!                                            └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use htmldoc_core::{ContentLayer, Document, DocumentBuilder, TextLabel};
//!
//! let mut doc = Document::new("example");
//! let root = doc.root();
//! let title = doc
//!     .add_text(root, TextLabel::Title, "Hello World", ContentLayer::Body)
//!     .unwrap();
//! doc.add_text(title, TextLabel::Text, "This is a paragraph.", ContentLayer::Body)
//!     .unwrap();
//!
//! assert_eq!(doc.child_count(title).unwrap(), 1);
//! ```

mod document;
mod item;
mod table;

pub use document::{Document, DocumentBuilder};
pub use item::{ContentLayer, GroupLabel, Item, Node, NodeId, TextLabel};
pub use table::{TableCell, TableData};

/// Error type for document operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Document is full")]
    Full,
}

pub type Result<T> = std::result::Result<T, DocumentError>;
