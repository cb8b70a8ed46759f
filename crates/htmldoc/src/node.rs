//! Element tree consumed by the converter.
//!
//! Any HTML parser can produce this structure; the `html` feature ships one
//! built on scraper. The tree only holds elements and text: comments,
//! doctypes and processing instructions are dropped by the loader.

use indexmap::IndexMap;

/// A child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => element.collect_text(out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with a lowercase tag name, attributes and ordered children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create a new element node
    pub fn new(tag_name: &str) -> Self {
        Self {
            name: tag_name.to_lowercase(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn with_attrs(tag_name: &str, attrs: &[(&str, &str)]) -> Self {
        let mut element = Self::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        element
    }

    /// Builder-style [`Element::add_child`]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    /// Builder-style append of a text node
    pub fn text(mut self, content: &str) -> Self {
        self.add_child(Node::text(content));
        self
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_lowercase().as_str())
            .map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Get all child nodes
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Get all text content from this element and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// First descendant (self excluded) whose tag is in `tags`, in document order
    pub fn find(&self, tags: &[&str]) -> Option<&Element> {
        for child in self.element_children() {
            if tags.contains(&child.tag_name()) {
                return Some(child);
            }
            if let Some(found) = child.find(tags) {
                return Some(found);
            }
        }
        None
    }

    /// Whether any descendant (self excluded) has a tag in `tags`
    pub fn contains(&self, tags: &[&str]) -> bool {
        self.find(tags).is_some()
    }

    /// All descendants (self excluded) whose tag is in `tags`, in document order.
    ///
    /// Matches are searched inside other matches as well.
    pub fn find_all(&self, tags: &[&str]) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(tags, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, tags: &[&str], found: &mut Vec<&'a Element>) {
        for child in self.element_children() {
            if tags.contains(&child.tag_name()) {
                found.push(child);
            }
            child.collect_matching(tags, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Element::new("DIV");
        assert_eq!(node.tag_name(), "div");
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_attributes() {
        let node = Element::with_attrs("td", &[("COLSPAN", "2"), ("class", "num")]);
        assert_eq!(node.attr("colspan"), Some("2"));
        assert_eq!(node.attr("Class"), Some("num"));
        assert_eq!(node.attr("rowspan"), None);
        assert!(node.has_attr("colspan"));
        assert_eq!(node.attrs().count(), 2);
    }

    #[test]
    fn test_children() {
        let parent = Element::new("div")
            .text("Hello")
            .child(Element::new("span"))
            .text("World");

        assert_eq!(parent.children().len(), 3);
        assert_eq!(parent.element_children().count(), 1);
        assert!(parent.children()[0].is_text());
    }

    #[test]
    fn test_text_content() {
        let div = Element::new("div")
            .text("Hello ")
            .child(Element::new("span").text("World"));

        assert_eq!(div.text_content(), "Hello World");
        assert_eq!(Node::from(div).text_content(), "Hello World");
    }

    #[test]
    fn test_find_is_document_order() {
        let tree = Element::new("div")
            .child(Element::new("p").child(Element::new("ol").text("first")))
            .child(Element::new("ul").text("second"));

        let found = tree.find(&["ul", "ol"]).map(Element::tag_name);
        assert_eq!(found, Some("ol"));
        assert!(tree.contains(&["ul"]));
        assert!(!tree.contains(&["table"]));
    }

    #[test]
    fn test_find_all_descends_into_matches() {
        let tree = Element::new("table").child(
            Element::new("tbody")
                .child(Element::new("tr").child(Element::new("td").text("a")))
                .child(
                    Element::new("tr")
                        .child(Element::new("th").text("b"))
                        .child(Element::new("td").text("c")),
                ),
        );

        let rows = tree.find_all(&["tr"]);
        assert_eq!(rows.len(), 2);
        let cells: Vec<String> = rows[1]
            .find_all(&["td", "th"])
            .iter()
            .map(|c| c.text_content())
            .collect();
        assert_eq!(cells, vec!["b", "c"]);
    }
}
