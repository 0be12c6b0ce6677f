//! Window
//!
//! Viewport size and scroll state.

use veranda_dom::{Rect, ScrollBehavior};

/// Simulated browser window.
#[derive(Debug, Clone)]
pub struct Window {
    width: f64,
    height: f64,
    scroll_x: f64,
    scroll_y: f64,
    last_scroll_behavior: ScrollBehavior,
}

impl Window {
    /// Create a window with the given viewport size, scrolled to the top.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
            last_scroll_behavior: ScrollBehavior::Auto,
        }
    }

    pub fn inner_width(&self) -> f64 {
        self.width
    }

    pub fn inner_height(&self) -> f64 {
        self.height
    }

    pub fn scroll_x(&self) -> f64 {
        self.scroll_x
    }

    /// Vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scroll to a vertical offset, clamped to ≥ 0.
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_y = top.max(0.0);
        self.last_scroll_behavior = behavior;
    }

    /// Behavior hint of the most recent programmatic scroll.
    pub fn last_scroll_behavior(&self) -> ScrollBehavior {
        self.last_scroll_behavior
    }

    /// Change the viewport size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Visible region in document coordinates.
    pub fn viewport(&self) -> Rect {
        Rect::from_xywh(self.scroll_x, self.scroll_y, self.width, self.height)
    }
}
