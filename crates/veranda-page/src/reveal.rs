//! Reveal and lazy-load
//!
//! Intersection-driven fade-in of content blocks and one-shot promotion
//! of deferred image sources.

use veranda_dom::{DomTree, NodeId};

/// Classes whose elements fade in when scrolled into view.
pub const REVEAL_CLASSES: [&str; 5] = [
    "accommodation-card",
    "activity",
    "gallery-img",
    "contact-item",
    "feature",
];

/// Class removed from an image once its deferred source is promoted.
pub const LAZY_CLASS: &str = "lazy";

const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Put a target into the pre-reveal hidden state with its transition
/// declared.
pub fn prepare(tree: &mut DomTree, target: NodeId) {
    if let Ok(el) = tree.element_mut(target) {
        el.style.set("opacity", "0");
        el.style.set("transform", "translateY(30px)");
        el.style.set("transition", REVEAL_TRANSITION);
    }
}

/// Reveal a target. Idempotent; the end state latches.
pub fn reveal(tree: &mut DomTree, target: NodeId) {
    if let Ok(el) = tree.element_mut(target) {
        el.style.set("opacity", "1");
        el.style.set("transform", "translateY(0)");
    }
}

/// Whether a target has reached the revealed end state.
pub fn is_revealed(tree: &DomTree, target: NodeId) -> bool {
    tree.element(target)
        .map(|el| el.style.get("opacity") == Some("1"))
        .unwrap_or(false)
}

/// Promote a deferred image source: `data-src` becomes `src` and the
/// lazy marker class is dropped. Returns whether a promotion happened.
pub fn promote_lazy(tree: &mut DomTree, img: NodeId) -> bool {
    let Ok(el) = tree.element_mut(img) else {
        return false;
    };
    let Some(src) = el.data("src").map(str::to_string) else {
        return false;
    };
    el.set_attr("src", &src);
    el.classes.remove(LAZY_CLASS);
    tracing::debug!(target: "veranda::lazy", src, "deferred image promoted");
    true
}
