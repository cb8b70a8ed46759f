//! Document items
//!
//! This module defines the node types stored in a [`Document`](crate::Document).
//! Every node is addressed by a [`NodeId`] handed out at creation time.

use std::fmt;

use crate::table::TableData;

/// Stable handle of a node inside a document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in the arena (creation order)
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#/nodes/{}", self.0)
    }
}

/// Whether a node is primary content or page furniture (navigation, banners, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentLayer {
    #[default]
    Body,
    Furniture,
}

/// Label of a plain text item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextLabel {
    /// Document title (level-1 heading)
    Title,
    /// Running text
    Text,
    /// Figure caption
    Caption,
}

/// Label of a group item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupLabel {
    #[default]
    Unspecified,
    /// A section of the document (details blocks, synthesized heading levels)
    Section,
}

/// The payload of a document node
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// The document body, always node 0
    Root,

    /// Structural group without text of its own
    Group { name: String, label: GroupLabel },

    /// Title, paragraph or caption
    Text { label: TextLabel, text: String },

    /// Section heading; `level` is zero-based (`h2` has level 1)
    Heading { text: String, level: u8 },

    /// Code block
    Code { text: String },

    /// Container of list items
    ListGroup { name: String },

    /// A single list entry
    ListItem {
        text: String,
        enumerated: bool,
        marker: String,
    },

    /// Table with its reconstructed grid
    Table(TableData),

    /// Picture, optionally pointing at its caption node
    Picture { caption: Option<NodeId> },
}

impl Item {
    /// Text carried by this item, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Item::Text { text, .. }
            | Item::Heading { text, .. }
            | Item::Code { text }
            | Item::ListItem { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Short lowercase kind name, handy for debugging and outlines
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Root => "root",
            Item::Group { .. } => "group",
            Item::Text {
                label: TextLabel::Title,
                ..
            } => "title",
            Item::Text {
                label: TextLabel::Caption,
                ..
            } => "caption",
            Item::Text { .. } => "text",
            Item::Heading { .. } => "heading",
            Item::Code { .. } => "code",
            Item::ListGroup { .. } => "list",
            Item::ListItem { .. } => "list_item",
            Item::Table(_) => "table",
            Item::Picture { .. } => "picture",
        }
    }
}

/// A node stored in the document arena
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub layer: ContentLayer,
    pub item: Item,
}

impl Node {
    pub fn text(&self) -> Option<&str> {
        self.item.text()
    }

    pub fn is_body(&self) -> bool {
        self.layer == ContentLayer::Body
    }
}
