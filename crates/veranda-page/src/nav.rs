//! Mobile navigation
//!
//! One authoritative open/closed flag rendered to the `active` class of
//! both the toggle control and the menu panel, so the two can never
//! disagree.

use veranda_dom::{DomTree, NodeId};

/// Class marking the open state on both elements.
pub const ACTIVE_CLASS: &str = "active";

/// Mobile navigation state.
#[derive(Debug)]
pub struct NavState {
    toggle: NodeId,
    menu: NodeId,
    open: bool,
}

impl NavState {
    /// Closed navigation over the given toggle control and menu panel.
    pub fn new(toggle: NodeId, menu: NodeId) -> Self {
        Self { toggle, menu, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_node(&self) -> NodeId {
        self.toggle
    }

    pub fn menu_node(&self) -> NodeId {
        self.menu
    }

    /// Set the state and render it to both elements.
    pub fn set_open(&mut self, tree: &mut DomTree, open: bool) {
        self.open = open;
        for node in [self.toggle, self.menu] {
            if let Ok(el) = tree.element_mut(node) {
                el.classes.set(ACTIVE_CLASS, open);
            }
        }
        tracing::debug!(target: "veranda::nav", open, "navigation state");
    }

    /// Flip the state.
    pub fn flip(&mut self, tree: &mut DomTree) {
        let open = !self.open;
        self.set_open(tree, open);
    }

    /// Close when a click lands outside both the menu panel and the
    /// toggle control while the menu is open.
    pub fn close_if_outside(&mut self, tree: &mut DomTree, target: NodeId) {
        if self.open && !tree.contains(self.menu, target) && !tree.contains(self.toggle, target) {
            self.set_open(tree, false);
        }
    }
}
