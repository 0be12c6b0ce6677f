//! Veranda DOM - Document Object Model
//!
//! Arena-based DOM tree with the surface the page behaviors need:
//! class lists, inline styles, attributes, form-control state, simple
//! selector queries, and document-space geometry.

mod classlist;
mod document;
mod geometry;
mod node;
mod query;
mod style;
mod tree;

pub use classlist::ClassList;
pub use document::Document;
pub use geometry::{Rect, ScrollBehavior};
pub use node::{ElementData, FormControl, Node, NodeData};
pub use query::Selector;
pub use style::InlineStyle;
pub use tree::{Children, Descendants, DomTree};

use thiserror::Error;

/// Node identifier (index into the arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node".
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this ID refers to a node at all.
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }
}

/// Errors from DOM tree operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    /// The node ID does not address a node in this tree.
    #[error("node {0:?} is not in this tree")]
    InvalidNode(NodeId),

    /// The operation requires an element node.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}
