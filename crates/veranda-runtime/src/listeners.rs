//! Event listener registry
//!
//! Listeners are data: a binding ties a target and an event kind to an
//! action tag the page interprets. Bindings are id-keyed so behaviors can
//! remove exactly what they installed.

use crate::{Event, EventKind};
use veranda_dom::NodeId;

/// Identifier of an installed binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// Where a binding listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingTarget {
    /// Exact node; matches only events targeting that node.
    Node(NodeId),
    /// Document level; sees every matching event, targeted or not.
    Document,
    /// Window level; sees every matching event.
    Window,
}

/// An installed binding.
#[derive(Debug, Clone)]
pub struct Binding<A> {
    pub id: BindingId,
    pub target: BindingTarget,
    pub kind: EventKind,
    pub action: A,
}

/// Registry of event bindings.
#[derive(Debug)]
pub struct EventListeners<A> {
    bindings: Vec<Binding<A>>,
    next_id: u64,
}

impl<A> EventListeners<A> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            next_id: 1,
        }
    }

    /// Install a binding.
    pub fn add(&mut self, target: BindingTarget, kind: EventKind, action: A) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding { id, target, kind, action });
        id
    }

    /// Remove a binding. Returns whether it was installed.
    pub fn remove(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        self.bindings.len() != before
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of bindings installed on a target.
    pub fn count_on(&self, target: BindingTarget) -> usize {
        self.bindings.iter().filter(|b| b.target == target).count()
    }

    /// Resolve the actions an event triggers: node-exact bindings first,
    /// then document-level, then window-level, each in installation order.
    pub fn actions_for(&self, event: &Event) -> Vec<(BindingId, A)>
    where
        A: Clone,
    {
        let mut actions = Vec::new();
        if event.target.is_valid() {
            for binding in &self.bindings {
                if binding.kind == event.kind && binding.target == BindingTarget::Node(event.target)
                {
                    actions.push((binding.id, binding.action.clone()));
                }
            }
        }
        for binding in &self.bindings {
            if binding.kind == event.kind && binding.target == BindingTarget::Document {
                actions.push((binding.id, binding.action.clone()));
            }
        }
        for binding in &self.bindings {
            if binding.kind == event.kind && binding.target == BindingTarget::Window {
                actions.push((binding.id, binding.action.clone()));
            }
        }
        actions
    }
}

impl<A> Default for EventListeners<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove() {
        let mut listeners: EventListeners<&str> = EventListeners::new();
        let id = listeners.add(BindingTarget::Document, EventKind::Click, "outside-close");
        assert_eq!(listeners.len(), 1);
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_dispatch_order() {
        let mut listeners: EventListeners<&str> = EventListeners::new();
        let node = NodeId::NONE; // stand-in id is fine for matching tests
        listeners.add(BindingTarget::Document, EventKind::Click, "document");
        listeners.add(BindingTarget::Window, EventKind::Click, "window");

        let actions = listeners.actions_for(&Event::click(node));
        let tags: Vec<&str> = actions.into_iter().map(|(_, a)| a).collect();
        assert_eq!(tags, vec!["document", "window"]);
    }

    #[test]
    fn test_kind_filtering() {
        let mut listeners: EventListeners<&str> = EventListeners::new();
        listeners.add(BindingTarget::Window, EventKind::Scroll, "scroll");
        listeners.add(BindingTarget::Window, EventKind::Resize, "resize");

        let actions = listeners.actions_for(&Event::scroll());
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].1, "scroll");
    }
}
