//! Events
//!
//! Input and lifecycle events delivered to the page.

use veranda_dom::NodeId;

/// Event types the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Keydown,
    MouseEnter,
    MouseLeave,
    Scroll,
    Resize,
    Load,
}

/// A dispatched event. Window-level events carry no target node.
#[derive(Debug, Clone)]
pub struct Event {
    pub kind: EventKind,
    /// Originating node (`NodeId::NONE` for window-level events)
    pub target: NodeId,
    /// Key name for keyboard events (`"Escape"`, `"Enter"`, ...)
    pub key: Option<String>,
    cancelable: bool,
    default_prevented: bool,
}

impl Event {
    /// Click on a node.
    pub fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, target, None, true)
    }

    /// Form submission.
    pub fn submit(target: NodeId) -> Self {
        Self::new(EventKind::Submit, target, None, true)
    }

    /// Key press, document-level.
    pub fn keydown(key: &str) -> Self {
        Self::new(EventKind::Keydown, NodeId::NONE, Some(key.to_string()), true)
    }

    /// Pointer entering a node.
    pub fn mouse_enter(target: NodeId) -> Self {
        Self::new(EventKind::MouseEnter, target, None, false)
    }

    /// Pointer leaving a node.
    pub fn mouse_leave(target: NodeId) -> Self {
        Self::new(EventKind::MouseLeave, target, None, false)
    }

    /// Viewport scrolled.
    pub fn scroll() -> Self {
        Self::new(EventKind::Scroll, NodeId::NONE, None, false)
    }

    /// Viewport resized.
    pub fn resize() -> Self {
        Self::new(EventKind::Resize, NodeId::NONE, None, false)
    }

    /// Page finished loading.
    pub fn load() -> Self {
        Self::new(EventKind::Load, NodeId::NONE, None, false)
    }

    fn new(kind: EventKind, target: NodeId, key: Option<String>, cancelable: bool) -> Self {
        Self {
            kind,
            target,
            key,
            cancelable,
            default_prevented: false,
        }
    }

    /// Prevent the default action, if the event is cancelable.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
