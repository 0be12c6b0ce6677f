//! Scroll-driven behaviors
//!
//! Smooth anchor navigation, header restyling past a scroll threshold,
//! and the hero parallax effect.

use veranda_dom::{DomTree, NodeId, ScrollBehavior};
use veranda_runtime::Window;

/// Header background above the scroll threshold.
pub const SCROLLED_BACKGROUND: &str = "rgba(250, 248, 245, 0.98)";
/// Header background at rest.
pub const RESTING_BACKGROUND: &str = "rgba(250, 248, 245, 0.95)";
/// Header shadow above the scroll threshold.
pub const SCROLLED_SHADOW: &str = "0 2px 20px rgba(44, 62, 45, 0.15)";
/// Header shadow at rest.
pub const RESTING_SHADOW: &str = "0 2px 20px rgba(44, 62, 45, 0.1)";

/// Smooth-scroll the window to an in-page fragment (`"#booking"`),
/// bringing the target in view below the fixed header. Unknown or empty
/// fragments are a silent no-op. Returns whether a scroll happened.
pub fn follow_anchor(
    tree: &DomTree,
    window: &mut Window,
    fragment: &str,
    header_offset: f64,
) -> bool {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        return false;
    }
    let Some(target) = tree.get_element_by_id(id) else {
        tracing::debug!(target: "veranda::scroll", fragment, "anchor target missing");
        return false;
    };
    let top = (tree.rect(target).top() - header_offset).max(0.0);
    window.scroll_to(top, ScrollBehavior::Smooth);
    true
}

/// Apply the scrolled or resting header style for the current offset.
/// Idempotent; runs unconditionally on every scroll event.
pub fn restyle_header(tree: &mut DomTree, header: NodeId, scroll_y: f64, threshold: f64) {
    let (background, shadow) = if scroll_y > threshold {
        (SCROLLED_BACKGROUND, SCROLLED_SHADOW)
    } else {
        (RESTING_BACKGROUND, RESTING_SHADOW)
    };
    if let Ok(el) = tree.element_mut(header) {
        el.style.set("background", background);
        el.style.set("box-shadow", shadow);
    }
}

/// Hero parallax: a linear vertical offset while the viewport is wide
/// enough, reset and re-evaluated on resize.
#[derive(Debug)]
pub struct Parallax {
    hero: NodeId,
    factor: f64,
    min_width: f64,
    active: bool,
}

impl Parallax {
    pub fn new(hero: NodeId, factor: f64, min_width: f64, viewport_width: f64) -> Self {
        Self {
            hero,
            factor,
            min_width,
            active: viewport_width > min_width,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn hero_node(&self) -> NodeId {
        self.hero
    }

    /// Translate the hero for the current scroll offset.
    pub fn on_scroll(&self, tree: &mut DomTree, scroll_y: f64) {
        if !self.active {
            return;
        }
        let offset = scroll_y * self.factor;
        if let Ok(el) = tree.element_mut(self.hero) {
            el.style.set("transform", &format!("translateY({offset}px)"));
        }
    }

    /// Reset the hero transform and re-evaluate activation for the new
    /// viewport width.
    pub fn on_resize(&mut self, tree: &mut DomTree, viewport_width: f64) {
        if let Ok(el) = tree.element_mut(self.hero) {
            el.style.set("transform", "translateY(0px)");
        }
        self.active = viewport_width > self.min_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veranda_dom::Rect;

    #[test]
    fn test_follow_anchor_applies_offset() {
        let mut tree = DomTree::new();
        let section = tree.create_element("section");
        tree.element_mut(section).unwrap().id = Some("booking".to_string());
        tree.append_child(tree.root(), section).unwrap();
        tree.set_rect(section, Rect::from_xywh(0.0, 2000.0, 1280.0, 700.0)).unwrap();

        let mut window = Window::new(1280.0, 800.0);
        assert!(follow_anchor(&tree, &mut window, "#booking", 80.0));
        assert_eq!(window.scroll_y(), 1920.0);
        assert_eq!(window.last_scroll_behavior(), ScrollBehavior::Smooth);
    }

    #[test]
    fn test_follow_anchor_clamps_high_targets() {
        let mut tree = DomTree::new();
        let top = tree.create_element("section");
        tree.element_mut(top).unwrap().id = Some("home".to_string());
        tree.append_child(tree.root(), top).unwrap();
        tree.set_rect(top, Rect::from_xywh(0.0, 40.0, 1280.0, 600.0)).unwrap();

        let mut window = Window::new(1280.0, 800.0);
        assert!(follow_anchor(&tree, &mut window, "#home", 80.0));
        assert_eq!(window.scroll_y(), 0.0);
    }

    #[test]
    fn test_follow_anchor_missing_target_noops() {
        let tree = DomTree::new();
        let mut window = Window::new(1280.0, 800.0);
        assert!(!follow_anchor(&tree, &mut window, "#nowhere", 80.0));
        assert!(!follow_anchor(&tree, &mut window, "#", 80.0));
        assert_eq!(window.scroll_y(), 0.0);
    }

    #[test]
    fn test_header_restyle_threshold() {
        let mut tree = DomTree::new();
        let header = tree.create_element("header");
        tree.append_child(tree.root(), header).unwrap();

        restyle_header(&mut tree, header, 101.0, 100.0);
        assert_eq!(
            tree.element(header).unwrap().style.get("background"),
            Some(SCROLLED_BACKGROUND)
        );

        // At the threshold exactly, the resting style applies
        restyle_header(&mut tree, header, 100.0, 100.0);
        let el = tree.element(header).unwrap();
        assert_eq!(el.style.get("background"), Some(RESTING_BACKGROUND));
        assert_eq!(el.style.get("box-shadow"), Some(RESTING_SHADOW));
    }

    #[test]
    fn test_parallax_scroll_and_resize() {
        let mut tree = DomTree::new();
        let hero = tree.create_element("section");
        tree.append_child(tree.root(), hero).unwrap();

        let mut parallax = Parallax::new(hero, 0.5, 768.0, 1280.0);
        assert!(parallax.is_active());

        parallax.on_scroll(&mut tree, 300.0);
        assert_eq!(
            tree.element(hero).unwrap().style.get("transform"),
            Some("translateY(150px)")
        );

        parallax.on_resize(&mut tree, 600.0);
        assert!(!parallax.is_active());
        assert_eq!(
            tree.element(hero).unwrap().style.get("transform"),
            Some("translateY(0px)")
        );

        // Inactive parallax leaves the transform alone
        parallax.on_scroll(&mut tree, 300.0);
        assert_eq!(
            tree.element(hero).unwrap().style.get("transform"),
            Some("translateY(0px)")
        );
    }

    #[test]
    fn test_parallax_at_breakpoint_is_inactive() {
        let mut tree = DomTree::new();
        let hero = tree.create_element("section");
        tree.append_child(tree.root(), hero).unwrap();
        let parallax = Parallax::new(hero, 0.5, 768.0, 768.0);
        assert!(!parallax.is_active());
    }
}
