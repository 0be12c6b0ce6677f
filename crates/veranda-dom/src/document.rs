//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML document: a tree plus cached references to its skeleton.
pub struct Document {
    tree: DomTree,
    html: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Document {
    /// Create a document with the html/head/body skeleton in place.
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Skeleton construction cannot fail on freshly created nodes.
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self { tree, html, head, body }
    }

    /// Get the `<html>` element.
    pub fn document_element(&self) -> NodeId {
        self.html
    }

    /// Get the `<head>` element.
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// Get the `<body>` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Access the DOM tree.
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably.
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// First element in the document matching the selector.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.tree.query_selector(self.tree.root(), selector)
    }

    /// All elements in the document matching the selector.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.tree.query_selector_all(self.tree.root(), selector)
    }

    /// Element with the given id attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.get_element_by_id(id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
