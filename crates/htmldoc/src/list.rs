//! List numbering context.
//!
//! Every list group created during a conversion registers whether it is
//! ordered and where its numbering starts. List items look the information up
//! through their parent's handle to compute their marker.

use htmldoc_core::NodeId;
use indexmap::IndexMap;

use crate::node::Element;
use crate::utilities::{parse_numeric, LIST_TAGS};

/// Ordering information of one list group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListInfo {
    pub ordered: bool,
    pub start: Option<u64>,
}

impl ListInfo {
    /// Read ordering from a `ul`/`ol` element.
    ///
    /// `start` is only honoured on ordered lists and only when it is a plain
    /// digit string.
    pub fn from_element(element: &Element) -> Self {
        let ordered = element.tag_name() == "ol";
        let start = if ordered {
            element.attr("start").and_then(parse_numeric)
        } else {
            None
        };
        Self { ordered, start }
    }

    /// Name given to the list group node
    pub fn group_name(&self) -> String {
        match (self.ordered, self.start) {
            (true, Some(start)) => format!("ordered list start {start}"),
            (true, None) => "ordered list".to_string(),
            (false, _) => "list".to_string(),
        }
    }

    /// Marker of the item following `preceding` existing children.
    ///
    /// Empty unless the list is ordered with an explicit start, so consumers
    /// can apply their own default numbering or bullets.
    pub fn marker(&self, preceding: usize) -> String {
        match self.start {
            Some(start) if self.ordered => {
                format!("{}.", start.saturating_add(preceding as u64))
            }
            _ => String::new(),
        }
    }
}

/// Per-conversion registry of list groups
#[derive(Debug, Clone, Default)]
pub struct ListContext {
    lists: IndexMap<NodeId, ListInfo>,
}

impl ListContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, group: NodeId, info: ListInfo) {
        self.lists.insert(group, info);
    }

    /// Ordering of a list group; unknown nodes are unordered
    pub fn get(&self, group: NodeId) -> ListInfo {
        self.lists.get(&group).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// Whether a list item holds a nested list anywhere below it
pub fn has_nested_list(item: &Element) -> bool {
    item.contains(LIST_TAGS)
}

/// Text that belongs to a list item itself, leaving out nested lists.
///
/// Element boundaries are separated by a space and all whitespace is
/// collapsed, so `<li><b>Bold</b>text<ul>..</ul></li>` yields `"Bold text"`.
pub fn own_text(item: &Element) -> String {
    let mut raw = String::new();
    collect_own_text(item, &mut raw);
    crate::utilities::collapse_whitespace(&raw)
}

fn collect_own_text(element: &Element, out: &mut String) {
    if !LIST_TAGS.contains(&element.tag_name()) {
        for child in element.children() {
            match child.as_element() {
                Some(inner) => collect_own_text(inner, out),
                None => out.push_str(child.as_text().unwrap_or("")),
            }
        }
    }
    out.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmldoc_core::{ContentLayer, Document, DocumentBuilder};

    #[test]
    fn test_info_from_element() {
        let ol = Element::with_attrs("ol", &[("start", "5")]);
        assert_eq!(
            ListInfo::from_element(&ol),
            ListInfo {
                ordered: true,
                start: Some(5)
            }
        );

        let bad = Element::with_attrs("ol", &[("start", "five")]);
        assert_eq!(ListInfo::from_element(&bad).start, None);

        let ul = Element::with_attrs("ul", &[("start", "3")]);
        assert_eq!(ListInfo::from_element(&ul), ListInfo::default());
    }

    #[test]
    fn test_group_name() {
        let info = ListInfo {
            ordered: true,
            start: Some(3),
        };
        assert_eq!(info.group_name(), "ordered list start 3");
        assert_eq!(
            ListInfo {
                ordered: true,
                start: None
            }
            .group_name(),
            "ordered list"
        );
        assert_eq!(ListInfo::default().group_name(), "list");
    }

    #[test]
    fn test_markers() {
        let info = ListInfo {
            ordered: true,
            start: Some(5),
        };
        let markers: Vec<String> = (0..3).map(|i| info.marker(i)).collect();
        assert_eq!(markers, vec!["5.", "6.", "7."]);

        let zero = ListInfo {
            ordered: true,
            start: Some(0),
        };
        assert_eq!(zero.marker(0), "0.");

        let implicit = ListInfo {
            ordered: true,
            start: None,
        };
        assert_eq!(implicit.marker(2), "");
        assert_eq!(ListInfo::default().marker(0), "");
    }

    #[test]
    fn test_context_lookup() {
        let mut doc = Document::default();
        let root = doc.root();
        let group = doc
            .add_list_group(root, "ordered list", ContentLayer::Body)
            .unwrap();

        let mut ctx = ListContext::new();
        assert!(ctx.is_empty());
        ctx.register(
            group,
            ListInfo {
                ordered: true,
                start: None,
            },
        );
        assert_eq!(ctx.len(), 1);
        assert!(ctx.get(group).ordered);
        assert_eq!(ctx.get(root), ListInfo::default());
    }

    #[test]
    fn test_own_text_skips_nested_lists() {
        let item = Element::new("li")
            .child(Element::new("b").text("Bold"))
            .text("text\n")
            .child(Element::new("ul").child(Element::new("li").text("nested")));

        assert!(has_nested_list(&item));
        assert_eq!(own_text(&item), "Bold text");
    }

    #[test]
    fn test_own_text_turns_line_breaks_into_spaces() {
        let item = Element::new("li")
            .text("foo\nbar\r\n")
            .child(Element::new("ul").child(Element::new("li").text("x")));
        assert_eq!(own_text(&item), "foo bar");
    }

    #[test]
    fn test_own_text_of_sublist_only_item_is_empty() {
        let item = Element::new("li")
            .text("\n  ")
            .child(Element::new("ol").child(Element::new("li").text("x")));
        assert_eq!(own_text(&item), "");
    }
}
