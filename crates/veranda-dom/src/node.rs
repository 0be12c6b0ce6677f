//! DOM Node
//!
//! Linked arena node: parent, first/last child and sibling links plus
//! node-specific data.

use crate::{ClassList, InlineStyle, NodeId, Rect};

/// DOM node. Links use `NodeId::NONE` when absent.
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a detached element node.
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a document node.
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element.
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name, lowercase
    pub tag: String,
    /// Cached id attribute
    pub id: Option<String>,
    /// CSS class tokens
    pub classes: ClassList,
    /// Other attributes (including data-*)
    pub attrs: Vec<(String, String)>,
    /// Inline style declarations
    pub style: InlineStyle,
    /// Form-control state, if this element is a named control
    pub control: Option<FormControl>,
    /// Document-space layout rect, assigned by the page constructor
    pub rect: Rect,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            id: None,
            classes: ClassList::new(),
            attrs: Vec::new(),
            style: InlineStyle::new(),
            control: None,
            rect: Rect::default(),
        }
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for (n, v) in self.attrs.iter_mut() {
            if n == name {
                *v = value.to_string();
                return;
            }
        }
        self.attrs.push((name.to_string(), value.to_string()));
    }

    /// Remove an attribute. Returns whether it was present.
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|(n, _)| n != name);
        self.attrs.len() != before
    }

    /// Check if an attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Read a `data-*` attribute by its bare key (`data("src")` reads `data-src`).
    pub fn data(&self, key: &str) -> Option<&str> {
        let name = format!("data-{key}");
        self.attr(&name)
    }
}

/// Form-control state for named inputs and selects.
#[derive(Debug, Clone)]
pub struct FormControl {
    /// Submission name
    pub name: String,
    /// Current value
    pub value: String,
    /// Value restored by a form reset
    pub default_value: String,
}

impl FormControl {
    pub fn new(name: &str, default_value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: default_value.to_string(),
            default_value: default_value.to_string(),
        }
    }

    /// Restore the default value.
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
    }
}
