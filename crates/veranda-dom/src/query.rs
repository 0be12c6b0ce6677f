//! Element queries
//!
//! Simple selector parsing and tree-wide lookups: tag, class, id,
//! universal, and attribute-presence (`img[data-src]`).

use crate::{DomTree, ElementData, NodeId};

/// Parsed simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
    /// Attribute presence, optionally constrained to a tag.
    HasAttr { tag: Option<String>, attr: String },
}

impl Selector {
    /// Parse a simple selector string. Returns `None` for unsupported or
    /// empty input.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            return Some(Self::Universal);
        }
        if let Some(id) = s.strip_prefix('#') {
            return (!id.is_empty()).then(|| Self::Id(id.to_string()));
        }
        if let Some(class) = s.strip_prefix('.') {
            return (!class.is_empty()).then(|| Self::Class(class.to_string()));
        }
        if let Some(open) = s.find('[') {
            let close = s.strip_suffix(']')?;
            let tag = &s[..open];
            let attr = &close[open + 1..];
            if attr.is_empty() {
                return None;
            }
            let tag = (!tag.is_empty()).then(|| tag.to_lowercase());
            return Some(Self::HasAttr { tag, attr: attr.to_string() });
        }
        Some(Self::Tag(s.to_lowercase()))
    }

    /// Check whether an element matches.
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => element.tag == *tag,
            Self::Class(class) => element.classes.contains(class),
            Self::Id(id) => element.id.as_deref() == Some(id),
            Self::HasAttr { tag, attr } => {
                tag.as_deref().is_none_or(|t| element.tag == t) && element.has_attr(attr)
            }
        }
    }
}

impl DomTree {
    /// First element below `root` matching the selector, in document order.
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        self.descendants(root).find_map(|(id, node)| {
            node.as_element()
                .filter(|el| selector.matches(el))
                .map(|_| id)
        })
    }

    /// All elements below `root` matching the selector, in document order.
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(root)
            .filter_map(|(id, node)| {
                node.as_element()
                    .filter(|el| selector.matches(el))
                    .map(|_| id)
            })
            .collect()
    }

    /// Element with the given id attribute, searched from the document root.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root()).find_map(|(node_id, node)| {
            node.as_element()
                .filter(|el| el.id.as_deref() == Some(id))
                .map(|_| node_id)
        })
    }
}
