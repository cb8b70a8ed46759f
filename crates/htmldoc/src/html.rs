//! HTML parsing support.
//!
//! This module parses HTML strings with scraper and converts them to the
//! [`Element`] tree used by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Element, Node};
use crate::{ConvertError, Result};

/// Parse an HTML string into an element tree.
///
/// The returned element is the document `<body>` when the parser produced
/// one, otherwise the root element. `<br>` elements are replaced by `"\n"`
/// text nodes so line breaks survive text extraction.
///
/// # Example
///
/// ```rust
/// use htmldoc::parse_html;
///
/// let body = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(body.tag_name(), "body");
/// assert_eq!(body.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Element {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let content = root
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "body")
        .unwrap_or(root);
    scraper_to_element(content)
}

/// Parse raw bytes, failing when they are not valid UTF-8.
pub fn parse_html_bytes(bytes: &[u8]) -> Result<Element> {
    let html = std::str::from_utf8(bytes)
        .map_err(|err| ConvertError::InvalidInput(format!("source is not valid UTF-8: {err}")))?;
    Ok(parse_html(html))
}

/// Convert a scraper ElementRef to our Element structure
fn scraper_to_element(element: ElementRef) -> Element {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Element::with_attrs(element.value().name(), &attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(inner) if inner.name() == "br" => {
                node.add_child(Node::text("\n"));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_element(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
