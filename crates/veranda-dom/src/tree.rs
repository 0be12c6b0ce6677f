//! DOM Tree (arena-based allocation)
//!
//! Nodes live in a flat arena addressed by `NodeId`. Detached subtrees keep
//! their slots; the arena never reclaims.

use crate::{DomError, ElementData, Node, NodeId, Rect};

/// Arena-based DOM tree.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes ever created (including detached ones).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Get element data, failing on non-elements and stale IDs.
    pub fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        let node = self.get(id).ok_or(DomError::InvalidNode(id))?;
        node.as_element().ok_or(DomError::NotAnElement(id))
    }

    /// Get mutable element data.
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        let node = self.get_mut(id).ok_or(DomError::InvalidNode(id))?;
        node.as_element_mut().ok_or(DomError::NotAnElement(id))
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::text(content))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`, detaching it first if
    /// it is linked elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.get(parent).is_none() {
            return Err(DomError::InvalidNode(parent));
        }
        if self.get(child).is_none() {
            return Err(DomError::InvalidNode(child));
        }
        self.detach(child)?;

        let prev_last = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(NodeId::NONE);

        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = prev_last;
        }
        if prev_last.is_valid() {
            if let Some(node) = self.get_mut(prev_last) {
                node.next_sibling = child;
            }
        }
        if let Some(node) = self.get_mut(parent) {
            if !node.first_child.is_valid() {
                node.first_child = child;
            }
            node.last_child = child;
        }
        Ok(())
    }

    /// Unlink a node from its parent, fixing the sibling chain. The subtree
    /// below it stays intact.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let (parent, prev, next) = {
            let node = self.get(id).ok_or(DomError::InvalidNode(id))?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            if let Some(node) = self.get_mut(prev) {
                node.next_sibling = next;
            }
        }
        if next.is_valid() {
            if let Some(node) = self.get_mut(next) {
                node.prev_sibling = prev;
            }
        }
        if let Some(node) = self.get_mut(parent) {
            if node.first_child == id {
                node.first_child = next;
            }
            if node.last_child == id {
                node.last_child = prev;
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
        Ok(())
    }

    /// Remove a node from the document. Alias of `detach`; the arena keeps
    /// the slot.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        tracing::trace!(target: "veranda::dom", ?id, "remove node");
        self.detach(id)
    }

    /// Iterate over the direct children of a node.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let first = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next: first }
    }

    /// Iterate over all descendants of a node in document order, excluding
    /// the node itself.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.get(id).is_some() {
            let mut child = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
            let mut front = Vec::new();
            while child.is_valid() {
                front.push(child);
                child = self.get(child).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
            }
            front.reverse();
            stack = front;
        }
        Descendants { tree: self, stack }
    }

    /// Whether `node` is `ancestor` or sits anywhere below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map(|n| n.parent).unwrap_or(NodeId::NONE);
        }
        false
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for (_, node) in self.descendants(id) {
            if let Some(text) = node.as_text() {
                out.push_str(text);
            }
        }
        if let Some(text) = self.get(id).and_then(|n| n.as_text()) {
            out.push_str(text);
        }
        out
    }

    /// Replace a node's children with a single text node.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        if self.get(id).is_none() {
            return Err(DomError::InvalidNode(id));
        }
        let children: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        for child in children {
            self.detach(child)?;
        }
        let text_node = self.create_text(text);
        self.append_child(id, text_node)
    }

    /// Assign a document-space layout rect to an element.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) -> Result<(), DomError> {
        self.element_mut(id)?.rect = rect;
        Ok(())
    }

    /// Document-space layout rect of an element (zero rect for non-elements).
    pub fn rect(&self, id: NodeId) -> Rect {
        self.get(id)
            .and_then(|n| n.as_element())
            .map(|e| e.rect)
            .unwrap_or_default()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children.
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over descendants.
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        let mut children: Vec<NodeId> = Vec::new();
        let mut child = node.first_child;
        while child.is_valid() {
            children.push(child);
            child = self.tree.get(child).map(|n| n.next_sibling).unwrap_or(NodeId::NONE);
        }
        for child in children.into_iter().rev() {
            self.stack.push(child);
        }
        Some((id, node))
    }
}
