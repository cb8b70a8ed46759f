//! HtmlConverter - the main entry point for element tree to document conversion.

use htmldoc_core::{ContentLayer, Document, DocumentBuilder, GroupLabel, NodeId, TextLabel};

use crate::category::TagCategory;
use crate::hierarchy::{Hierarchy, DEFAULT_MAX_LEVELS};
use crate::list::{has_nested_list, own_text, ListContext, ListInfo};
use crate::node::{Element, Node};
use crate::table::parse_table_data;
use crate::utilities::{is_node_item, HEADING_TAGS};
use crate::{ConvertError, Result};

/// Options for HtmlConverter
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Number of hierarchy levels, root included.
    ///
    /// Headings needing a deeper level abort the conversion with
    /// [`ConvertError::DepthExceeded`]. Nested containers are not limited.
    pub max_levels: usize,

    /// Tags whose loose text (outside any paragraph) becomes a text node
    pub text_containers: Vec<String>,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            max_levels: DEFAULT_MAX_LEVELS,
            text_containers: vec!["div".to_string()],
        }
    }
}

impl ConverterOptions {
    fn validate(&self) -> Result<()> {
        if self.max_levels < 2 {
            return Err(ConvertError::InvalidOptions(format!(
                "max_levels must be at least 2, got {}",
                self.max_levels
            )));
        }
        Ok(())
    }

    fn is_text_container(&self, tag: &str) -> bool {
        self.text_containers.iter().any(|t| t == tag)
    }
}

/// The main service for converting element trees to documents
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    options: ConverterOptions,
}

impl HtmlConverter {
    /// Create a new HtmlConverter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlConverter with custom options
    pub fn with_options(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConverterOptions {
        &mut self.options
    }

    /// Convert the content element (usually `<body>`) into a new document.
    ///
    /// Either the whole tree converts or an error is returned; no partially
    /// built document escapes.
    pub fn convert(&self, content: &Element) -> Result<Document> {
        let mut doc = Document::default();
        self.convert_into(content, &mut doc)?;
        Ok(doc)
    }

    /// Convert the content element into any [`DocumentBuilder`]
    pub fn convert_into<B: DocumentBuilder>(&self, content: &Element, doc: &mut B) -> Result<()> {
        self.options.validate()?;
        log::debug!("Trying to convert HTML...");

        let mut walker = Walker::new(doc, &self.options, initial_layer(content));
        walker.walk(content)
    }

    /// Parse and convert an HTML string
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<Document> {
        self.convert(&crate::html::parse_html(html))
    }

    /// Parse and convert HTML bytes, failing when they are not valid UTF-8
    #[cfg(feature = "html")]
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<Document> {
        self.convert(&crate::html::parse_html_bytes(bytes)?)
    }
}

/// Content before the first heading is furniture, unless there is no heading at all
fn initial_layer(content: &Element) -> ContentLayer {
    if content.contains(HEADING_TAGS) {
        ContentLayer::Furniture
    } else {
        ContentLayer::Body
    }
}

/// Mutable state of one conversion
struct Walker<'a, B: DocumentBuilder> {
    doc: &'a mut B,
    options: &'a ConverterOptions,
    hierarchy: Hierarchy,
    lists: ListContext,
    layer: ContentLayer,
}

impl<'a, B: DocumentBuilder> Walker<'a, B> {
    fn new(doc: &'a mut B, options: &'a ConverterOptions, layer: ContentLayer) -> Self {
        let hierarchy = Hierarchy::new(doc.root(), options.max_levels);
        Self {
            doc,
            options,
            hierarchy,
            lists: ListContext::new(),
            layer,
        }
    }

    /// Walk the children of an element in document order
    fn walk(&mut self, element: &Element) -> Result<()> {
        let children = element.children();
        let mut text = String::new();

        for (idx, child) in children.iter().enumerate() {
            match child {
                Node::Element(inner) => {
                    self.analyze(inner).inspect_err(|err| {
                        log::error!(
                            "Error processing child from tag {}: {err}",
                            element.tag_name()
                        );
                    })?;
                }
                Node::Text(fragment) => {
                    // Loose text outside paragraphs or analyzed tags
                    text.push_str(fragment);
                    let rest = &children[idx + 1..];
                    let flush = rest.is_empty()
                        || rest
                            .iter()
                            .filter_map(Node::as_element)
                            .any(|sibling| is_node_item(sibling.tag_name()));
                    if flush {
                        let trimmed = text.trim();
                        if !trimmed.is_empty()
                            && self.options.is_text_container(element.tag_name())
                        {
                            let parent = self.hierarchy.parent();
                            self.doc
                                .add_text(parent, TextLabel::Text, trimmed, self.layer)?;
                        }
                        text.clear();
                    }
                }
            }
        }

        Ok(())
    }

    fn analyze(&mut self, element: &Element) -> Result<()> {
        match TagCategory::of(element.tag_name()) {
            TagCategory::Heading(depth) => self.handle_heading(element, depth),
            TagCategory::Paragraph => self.handle_paragraph(element),
            TagCategory::Code => self.handle_code(element),
            TagCategory::List { .. } => self.handle_list(element),
            TagCategory::ListItem => self.handle_list_item(element),
            TagCategory::Table => self.handle_table(element),
            TagCategory::Figure => self.handle_figure(element),
            TagCategory::Image => self.handle_image(element),
            TagCategory::Details => self.handle_details(element),
            TagCategory::Other => self.walk(element),
        }
    }

    /// Walk an element's children with `container` as the current parent
    fn nest(&mut self, container: NodeId, element: &Element) -> Result<()> {
        self.hierarchy.push(container);
        self.walk(element)?;
        self.hierarchy.pop();
        Ok(())
    }

    fn handle_heading(&mut self, element: &Element, depth: usize) -> Result<()> {
        let text = element.text_content();
        self.layer = ContentLayer::Body;
        self.hierarchy
            .heading(&mut *self.doc, depth, text.trim(), self.layer)?;
        Ok(())
    }

    fn handle_paragraph(&mut self, element: &Element) -> Result<()> {
        let text = element.text_content();
        let text = text.trim();
        if !text.is_empty() {
            let parent = self.hierarchy.parent();
            self.doc.add_text(parent, TextLabel::Text, text, self.layer)?;
        }
        Ok(())
    }

    fn handle_code(&mut self, element: &Element) -> Result<()> {
        let text = element.text_content();
        let text = text.trim();
        if !text.is_empty() {
            let parent = self.hierarchy.parent();
            self.doc.add_code(parent, text, self.layer)?;
        }
        Ok(())
    }

    fn handle_details(&mut self, element: &Element) -> Result<()> {
        let parent = self.hierarchy.parent();
        let group = self
            .doc
            .add_group(parent, "details", GroupLabel::Section, self.layer)?;
        self.nest(group, element)
    }

    fn handle_list(&mut self, element: &Element) -> Result<()> {
        let info = ListInfo::from_element(element);
        let parent = self.hierarchy.parent();
        let group = self
            .doc
            .add_list_group(parent, &info.group_name(), self.layer)?;
        self.lists.register(group, info);
        self.nest(group, element)
    }

    fn handle_list_item(&mut self, element: &Element) -> Result<()> {
        let Some(parent) = self.hierarchy.current() else {
            log::debug!("list-item has no parent in the document: <{}>", element.tag_name());
            return Ok(());
        };
        let info = self.lists.get(parent);
        let marker = info.marker(self.doc.child_count(parent)?);

        if has_nested_list(element) {
            // The item's own text may be spread over inline children
            let text = own_text(element);
            if text.is_empty() {
                return self.walk(element);
            }
            let item = self
                .doc
                .add_list_item(parent, &text, info.ordered, &marker, self.layer)?;
            return self.nest(item, element);
        }

        let text = element.text_content();
        let text = text.trim();
        if text.is_empty() {
            log::debug!("list-item has no text");
            return Ok(());
        }
        self.doc
            .add_list_item(parent, text, info.ordered, &marker, self.layer)?;
        Ok(())
    }

    fn handle_table(&mut self, element: &Element) -> Result<()> {
        if let Some(data) = parse_table_data(element) {
            let parent = self.hierarchy.parent();
            self.doc.add_table(parent, data, self.layer)?;
        }
        Ok(())
    }

    fn handle_figure(&mut self, element: &Element) -> Result<()> {
        let caption = match element.find(&["figcaption"]) {
            Some(figcaption) => {
                let text = figcaption.text_content();
                let root = self.hierarchy.root();
                Some(
                    self.doc
                        .add_text(root, TextLabel::Caption, text.trim(), self.layer)?,
                )
            }
            None => None,
        };

        let parent = self.hierarchy.parent();
        self.doc.add_picture(parent, caption, self.layer)?;
        Ok(())
    }

    fn handle_image(&mut self, element: &Element) -> Result<()> {
        log::debug!(
            "adding picture for <img> without image data: {:?}",
            element.attr("src")
        );
        let parent = self.hierarchy.parent();
        self.doc.add_picture(parent, None, self.layer)?;
        Ok(())
    }
}
