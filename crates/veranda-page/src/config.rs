//! Page configuration

use veranda_runtime::RootMargin;

/// Tunable constants of the page behaviors.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Initial viewport width
    pub viewport_width: f64,
    /// Initial viewport height
    pub viewport_height: f64,
    /// Scroll offset above which the header gets its scrolled style
    pub header_scroll_threshold: f64,
    /// Fixed-header allowance subtracted from anchor scroll targets
    pub anchor_header_offset: f64,
    /// Fraction of the scroll offset applied to the hero transform
    pub parallax_factor: f64,
    /// Viewport width above which parallax is active
    pub parallax_min_width: f64,
    /// Visible fraction that triggers a reveal
    pub reveal_threshold: f64,
    /// Root margin of the reveal observer
    pub reveal_margin: RootMargin,
    /// Lightbox fade duration; overlay removal runs after it
    pub lightbox_fade_ms: u64,
    /// Delay before a freshly opened lightbox fades in
    pub lightbox_open_tick_ms: u64,
    /// Delay before the body fades in after the load event
    pub load_fade_delay_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            header_scroll_threshold: 100.0,
            anchor_header_offset: 80.0,
            parallax_factor: 0.5,
            parallax_min_width: 768.0,
            reveal_threshold: 0.1,
            reveal_margin: RootMargin { top: 0.0, right: 0.0, bottom: -50.0, left: 0.0 },
            lightbox_fade_ms: 300,
            lightbox_open_tick_ms: 10,
            load_fade_delay_ms: 100,
        }
    }
}
