//! Tag categories used to dispatch elements to their handlers.

use crate::utilities::heading_depth;

/// What the converter does with an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// `h1`..`h6`, with the heading depth
    Heading(usize),
    /// `p`, `address`, `summary`
    Paragraph,
    /// `pre`, `code`
    Code,
    /// `ul` or `ol`
    List { ordered: bool },
    /// `li`
    ListItem,
    /// `table`
    Table,
    /// `figure`
    Figure,
    /// `img`
    Image,
    /// `details`
    Details,
    /// Anything else: the element is transparent and its children are walked
    Other,
}

/// Fixed tag table; headings are matched separately
const DISPATCH: &[(&str, TagCategory)] = &[
    ("p", TagCategory::Paragraph),
    ("address", TagCategory::Paragraph),
    ("summary", TagCategory::Paragraph),
    ("pre", TagCategory::Code),
    ("code", TagCategory::Code),
    ("ul", TagCategory::List { ordered: false }),
    ("ol", TagCategory::List { ordered: true }),
    ("li", TagCategory::ListItem),
    ("table", TagCategory::Table),
    ("figure", TagCategory::Figure),
    ("img", TagCategory::Image),
    ("details", TagCategory::Details),
];

impl TagCategory {
    /// Classify a lowercase tag name
    pub fn of(tag: &str) -> Self {
        if let Some(depth) = heading_depth(tag) {
            return TagCategory::Heading(depth);
        }
        DISPATCH
            .iter()
            .find(|(name, _)| *name == tag)
            .map_or(TagCategory::Other, |(_, category)| *category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(TagCategory::of("h1"), TagCategory::Heading(1));
        assert_eq!(TagCategory::of("h4"), TagCategory::Heading(4));
    }

    #[test]
    fn test_lists() {
        assert_eq!(TagCategory::of("ol"), TagCategory::List { ordered: true });
        assert_eq!(TagCategory::of("ul"), TagCategory::List { ordered: false });
        assert_eq!(TagCategory::of("li"), TagCategory::ListItem);
    }

    #[test]
    fn test_blocks() {
        assert_eq!(TagCategory::of("summary"), TagCategory::Paragraph);
        assert_eq!(TagCategory::of("pre"), TagCategory::Code);
        assert_eq!(TagCategory::of("details"), TagCategory::Details);
        assert_eq!(TagCategory::of("img"), TagCategory::Image);
    }

    #[test]
    fn test_unknown_tags_are_transparent() {
        assert_eq!(TagCategory::of("div"), TagCategory::Other);
        assert_eq!(TagCategory::of("section"), TagCategory::Other);
        assert_eq!(TagCategory::of("figcaption"), TagCategory::Other);
        assert_eq!(TagCategory::of("h7"), TagCategory::Other);
    }
}
