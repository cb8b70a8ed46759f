//! Arena-backed output document
//!
//! [`DocumentBuilder`] is the set of operations a converter needs to
//! materialize nodes. [`Document`] is the in-memory implementation: nodes live
//! in a vector and are addressed by their [`NodeId`].

use crate::item::{ContentLayer, GroupLabel, Item, Node, NodeId, TextLabel};
use crate::table::TableData;
use crate::{DocumentError, Result};

/// Operations used to build a document in document order.
///
/// Every `add_*` call appends a new child to `parent` and returns the handle of
/// the created node.
pub trait DocumentBuilder {
    /// Handle of the document body
    fn root(&self) -> NodeId;

    fn add_text(
        &mut self,
        parent: NodeId,
        label: TextLabel,
        text: &str,
        layer: ContentLayer,
    ) -> Result<NodeId>;

    /// Add a heading; `level` is zero-based
    fn add_heading(
        &mut self,
        parent: NodeId,
        text: &str,
        level: u8,
        layer: ContentLayer,
    ) -> Result<NodeId>;

    fn add_code(&mut self, parent: NodeId, text: &str, layer: ContentLayer) -> Result<NodeId>;

    fn add_group(
        &mut self,
        parent: NodeId,
        name: &str,
        label: GroupLabel,
        layer: ContentLayer,
    ) -> Result<NodeId>;

    fn add_list_group(&mut self, parent: NodeId, name: &str, layer: ContentLayer)
        -> Result<NodeId>;

    fn add_list_item(
        &mut self,
        parent: NodeId,
        text: &str,
        enumerated: bool,
        marker: &str,
        layer: ContentLayer,
    ) -> Result<NodeId>;

    fn add_table(&mut self, parent: NodeId, data: TableData, layer: ContentLayer)
        -> Result<NodeId>;

    fn add_picture(
        &mut self,
        parent: NodeId,
        caption: Option<NodeId>,
        layer: ContentLayer,
    ) -> Result<NodeId>;

    /// Number of children already attached to `node`
    fn child_count(&self, node: NodeId) -> Result<usize>;
}

/// In-memory document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    nodes: Vec<Node>,
}

impl Document {
    /// Create an empty document holding only the root node
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: vec![Node {
                id: NodeId(0),
                parent: None,
                children: Vec::new(),
                layer: ContentLayer::Body,
                item: Item::Root,
            }],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but its root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Like [`Document::get`], failing with [`DocumentError::UnknownNode`]
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or(DocumentError::UnknownNode(id))
    }

    /// All nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Direct children of a node, in insertion order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.get(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.get(*child))
    }

    /// Ancestors of a node, nearest first, ending with the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.get(id).and_then(|node| node.parent);
        while let Some(parent) = current {
            chain.push(parent);
            current = self.get(parent).and_then(|node| node.parent);
        }
        chain
    }

    /// Pre-order traversal from the root, yielding each node with its depth
    pub fn iter_tree(&self) -> Vec<(usize, &Node)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(0usize, self.root_id())];
        while let Some((depth, id)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            out.push((depth, node));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, *child));
            }
        }
        out
    }

    /// Nodes whose item text equals `text`
    pub fn find_by_text<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes.iter().filter(move |node| node.text() == Some(text))
    }

    fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, parent: NodeId, layer: ContentLayer, item: Item) -> Result<NodeId> {
        if self.get(parent).is_none() {
            return Err(DocumentError::UnknownNode(parent));
        }
        let index = u32::try_from(self.nodes.len()).map_err(|_| DocumentError::Full)?;
        let id = NodeId(index);
        self.nodes.push(Node {
            id,
            parent: Some(parent),
            children: Vec::new(),
            layer,
            item,
        });
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("document")
    }
}

impl DocumentBuilder for Document {
    fn root(&self) -> NodeId {
        self.root_id()
    }

    fn add_text(
        &mut self,
        parent: NodeId,
        label: TextLabel,
        text: &str,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        let item = Item::Text {
            label,
            text: text.to_string(),
        };
        self.push(parent, layer, item)
    }

    fn add_heading(
        &mut self,
        parent: NodeId,
        text: &str,
        level: u8,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        let item = Item::Heading {
            text: text.to_string(),
            level,
        };
        self.push(parent, layer, item)
    }

    fn add_code(&mut self, parent: NodeId, text: &str, layer: ContentLayer) -> Result<NodeId> {
        self.push(
            parent,
            layer,
            Item::Code {
                text: text.to_string(),
            },
        )
    }

    fn add_group(
        &mut self,
        parent: NodeId,
        name: &str,
        label: GroupLabel,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        let item = Item::Group {
            name: name.to_string(),
            label,
        };
        self.push(parent, layer, item)
    }

    fn add_list_group(
        &mut self,
        parent: NodeId,
        name: &str,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        let item = Item::ListGroup {
            name: name.to_string(),
        };
        self.push(parent, layer, item)
    }

    fn add_list_item(
        &mut self,
        parent: NodeId,
        text: &str,
        enumerated: bool,
        marker: &str,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        let item = Item::ListItem {
            text: text.to_string(),
            enumerated,
            marker: marker.to_string(),
        };
        self.push(parent, layer, item)
    }

    fn add_table(
        &mut self,
        parent: NodeId,
        data: TableData,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        self.push(parent, layer, Item::Table(data))
    }

    fn add_picture(
        &mut self,
        parent: NodeId,
        caption: Option<NodeId>,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        if let Some(caption) = caption {
            self.node(caption)?;
        }
        self.push(parent, layer, Item::Picture { caption })
    }

    fn child_count(&self, node: NodeId) -> Result<usize> {
        Ok(self.node(node)?.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_root() {
        let doc = Document::new("sample");
        assert_eq!(doc.name(), "sample");
        assert_eq!(doc.len(), 1);
        assert!(doc.is_empty());
        assert_eq!(doc.node(doc.root()).unwrap().item, Item::Root);
    }

    #[test]
    fn test_add_and_navigate() {
        let mut doc = Document::default();
        let root = doc.root();
        let title = doc
            .add_text(root, TextLabel::Title, "Title", ContentLayer::Body)
            .unwrap();
        let list = doc.add_list_group(title, "list", ContentLayer::Body).unwrap();
        let item = doc
            .add_list_item(list, "a", false, "", ContentLayer::Body)
            .unwrap();

        assert_eq!(doc.child_count(list).unwrap(), 1);
        assert_eq!(doc.ancestors(item), vec![list, title, root]);
        let texts: Vec<_> = doc.children(list).filter_map(|n| n.text()).collect();
        assert_eq!(texts, vec!["a"]);
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let mut doc = Document::default();
        let err = doc
            .add_code(NodeId(42), "x", ContentLayer::Body)
            .unwrap_err();
        assert_eq!(err, DocumentError::UnknownNode(NodeId(42)));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_picture_caption_must_exist() {
        let mut doc = Document::default();
        let root = doc.root();
        assert!(doc
            .add_picture(root, Some(NodeId(7)), ContentLayer::Body)
            .is_err());
        let caption = doc
            .add_text(root, TextLabel::Caption, "Fig. 1", ContentLayer::Body)
            .unwrap();
        let picture = doc
            .add_picture(root, Some(caption), ContentLayer::Body)
            .unwrap();
        assert_eq!(
            doc.node(picture).unwrap().item,
            Item::Picture {
                caption: Some(caption)
            }
        );
    }

    #[test]
    fn test_iter_tree_is_preorder() {
        let mut doc = Document::default();
        let root = doc.root();
        let a = doc
            .add_group(root, "a", GroupLabel::Section, ContentLayer::Body)
            .unwrap();
        doc.add_code(a, "inner", ContentLayer::Body).unwrap();
        doc.add_code(root, "outer", ContentLayer::Body).unwrap();

        let order: Vec<(usize, &str)> = doc
            .iter_tree()
            .into_iter()
            .map(|(depth, node)| (depth, node.item.kind()))
            .collect();
        assert_eq!(
            order,
            vec![(0, "root"), (1, "group"), (2, "code"), (1, "code")]
        );
    }
}
