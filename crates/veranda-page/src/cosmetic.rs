//! Cosmetic bindings
//!
//! Load-time body fade, footer year injection, card hover transforms,
//! and the startup banner.

use veranda_dom::{DomError, DomTree, NodeId};

/// Transform applied to a hovered card.
pub const HOVER_TRANSFORM: &str = "translateY(-8px) scale(1.02)";
/// Transform restored when the pointer leaves.
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Banner written to the console channel at startup.
pub const STARTUP_BANNER: &str = "\u{1f33f} Sablynska Homestead \u{1f33f}\n\
    An oasis of calm and fresh air, far from the city noise.\n\
    Built with love for the countryside.";

/// Footer ownership line for a given year.
pub fn footer_year_text(year: i32) -> String {
    format!("© {year} Sablynska Homestead. All rights reserved.")
}

/// Replace the footer text with the current-year ownership line.
pub fn inject_footer_year(tree: &mut DomTree, footer_text: NodeId, year: i32) -> Result<(), DomError> {
    tree.set_text_content(footer_text, &footer_year_text(year))
}

/// Apply or revert the hover transform on a card.
pub fn card_hover(tree: &mut DomTree, card: NodeId, entered: bool) {
    let transform = if entered { HOVER_TRANSFORM } else { REST_TRANSFORM };
    if let Ok(el) = tree.element_mut(card) {
        el.style.set("transform", transform);
    }
}

/// Hide the body and declare its fade-in transition.
pub fn begin_load_fade(tree: &mut DomTree, body: NodeId) {
    if let Ok(el) = tree.element_mut(body) {
        el.style.set("opacity", "0");
        el.style.set("transition", "opacity 0.5s ease");
    }
}

/// Bring the body to full opacity.
pub fn finish_load_fade(tree: &mut DomTree, body: NodeId) {
    if let Ok(el) = tree.element_mut(body) {
        el.style.set("opacity", "1");
    }
}
