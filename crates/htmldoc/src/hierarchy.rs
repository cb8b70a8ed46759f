//! Heading and container hierarchy.
//!
//! The hierarchy keeps one slot per nesting level. `slot[level]` is the node
//! new content is attached to; slot 0 always holds the document root. Headings
//! rewrite the stack according to their depth, while containers (lists, list
//! items, details) push and pop on top of it.
//!
//! Heading depth is bounded by the capacity; container nesting is not, the
//! stack grows past the capacity as containers are pushed.

use htmldoc_core::{ContentLayer, DocumentBuilder, GroupLabel, NodeId, TextLabel};

use crate::{ConvertError, Result};

/// Default number of hierarchy levels
pub const DEFAULT_MAX_LEVELS: usize = 10;

#[derive(Debug, Clone)]
pub struct Hierarchy {
    root: NodeId,
    level: usize,
    capacity: usize,
    slots: Vec<Option<NodeId>>,
}

impl Hierarchy {
    /// Create a hierarchy with `capacity` slots rooted at `root`
    pub fn new(root: NodeId, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = vec![None; capacity];
        slots[0] = Some(root);
        Self {
            root,
            level: 0,
            capacity,
            slots,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of levels available to headings
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn slot(&self, level: usize) -> Option<NodeId> {
        self.slots.get(level).copied().flatten()
    }

    /// The node at the current level, if any
    pub fn current(&self) -> Option<NodeId> {
        self.slot(self.level)
    }

    /// The node at the current level, falling back to the root
    pub fn parent(&self) -> NodeId {
        self.current().unwrap_or_else(|| self.root())
    }

    /// Add a heading of depth `depth` (1 for `h1`) and make it the current parent.
    ///
    /// A level-1 heading becomes the document title and resets the stack.
    /// Deeper headings fill skipped levels with anonymous section groups and
    /// drop stale deeper levels.
    pub fn heading<B: DocumentBuilder>(
        &mut self,
        doc: &mut B,
        depth: usize,
        text: &str,
        layer: ContentLayer,
    ) -> Result<NodeId> {
        if depth == 0 || depth >= self.capacity() {
            return Err(ConvertError::DepthExceeded {
                depth,
                max: self.capacity(),
            });
        }

        if depth == 1 {
            self.clear_above(0);
            self.level = 1;
            let title = doc.add_text(self.root(), TextLabel::Title, text, layer)?;
            self.slots[1] = Some(title);
            return Ok(title);
        }

        if depth > self.level {
            for i in self.level + 1..depth {
                let parent = self.slot(i - 1).unwrap_or_else(|| self.root());
                let section =
                    doc.add_group(parent, &format!("header-{i}"), GroupLabel::Section, layer)?;
                self.slots[i] = Some(section);
            }
        } else if depth < self.level {
            self.clear_above(depth);
        }
        self.level = depth;

        let parent = self.slot(depth - 1).unwrap_or_else(|| self.root());
        // zero-based level for the output model
        let level = u8::try_from(depth - 1).unwrap_or(u8::MAX);
        let heading = doc.add_heading(parent, text, level, layer)?;
        self.slots[depth] = Some(heading);
        Ok(heading)
    }

    /// Make `container` the current parent one level deeper
    pub fn push(&mut self, container: NodeId) {
        let next = self.level + 1;
        if next >= self.slots.len() {
            self.slots.resize(next + 1, None);
        }
        self.slots[next] = Some(container);
        self.level = next;
    }

    /// Leave the current container level
    pub fn pop(&mut self) {
        if let Some(slot) = self.slots.get_mut(self.level + 1) {
            *slot = None;
        }
        self.level = self.level.saturating_sub(1);
    }

    fn clear_above(&mut self, level: usize) {
        for slot in self.slots.iter_mut().skip(level + 1) {
            *slot = None;
        }
    }
}
