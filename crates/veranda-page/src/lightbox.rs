//! Image lightbox
//!
//! A full-viewport overlay with an enlarged image and a close control.
//! The instance owns its overlay subtree, its scoped event bindings, and
//! its delayed-removal timer: every exit path tears all of them down
//! exactly once, and opening a new lightbox supersedes the old one.

use crate::config::PageConfig;
use crate::page::{Action, TimerAction};
use veranda_dom::{DomError, DomTree, InlineStyle, NodeId};
use veranda_runtime::{BindingId, BindingTarget, EventKind, EventListeners, TimerHandle, TimerQueue};

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     background: rgba(0, 0, 0, 0.9); display: flex; justify-content: center; \
     align-items: center; z-index: 10000; opacity: 0; transition: opacity 0.3s ease";

const IMAGE_STYLE: &str =
    "max-width: 90%; max-height: 90%; border-radius: 10px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5)";

const CLOSE_STYLE: &str = "position: absolute; top: 20px; right: 30px; background: none; \
     border: none; color: white; font-size: 40px; cursor: pointer; z-index: 10001";

/// One open lightbox instance.
#[derive(Debug)]
pub struct Lightbox {
    overlay: NodeId,
    image: NodeId,
    close_button: NodeId,
    key_binding: BindingId,
    close_binding: BindingId,
    backdrop_binding: BindingId,
    fade_in: Option<TimerHandle>,
    removal: Option<TimerHandle>,
    closing: bool,
}

impl Lightbox {
    /// Build the overlay for a gallery image, append it to the body, and
    /// install the instance's bindings and fade-in tick.
    pub fn open(
        tree: &mut DomTree,
        body: NodeId,
        listeners: &mut EventListeners<Action>,
        timers: &mut TimerQueue<TimerAction>,
        source: NodeId,
        config: &PageConfig,
    ) -> Result<Self, DomError> {
        let (src, alt) = {
            let el = tree.element(source)?;
            (
                el.attr("src").unwrap_or("").to_string(),
                el.attr("alt").unwrap_or("").to_string(),
            )
        };

        let overlay = tree.create_element("div");
        {
            let el = tree.element_mut(overlay)?;
            el.classes.add("lightbox");
            el.style = InlineStyle::from_css_text(OVERLAY_STYLE);
        }

        let image = tree.create_element("img");
        {
            let el = tree.element_mut(image)?;
            el.set_attr("src", &src);
            el.set_attr("alt", &alt);
            el.style = InlineStyle::from_css_text(IMAGE_STYLE);
        }

        let close_button = tree.create_element("button");
        tree.set_text_content(close_button, "×")?;
        tree.element_mut(close_button)?.style = InlineStyle::from_css_text(CLOSE_STYLE);

        tree.append_child(overlay, image)?;
        tree.append_child(overlay, close_button)?;
        tree.append_child(body, overlay)?;

        let fade_in = timers.schedule(
            config.lightbox_open_tick_ms,
            TimerAction::LightboxFadeIn { overlay },
        );
        let close_binding = listeners.add(
            BindingTarget::Node(close_button),
            EventKind::Click,
            Action::CloseLightbox { overlay },
        );
        let backdrop_binding = listeners.add(
            BindingTarget::Node(overlay),
            EventKind::Click,
            Action::BackdropClick { overlay },
        );
        let key_binding = listeners.add(
            BindingTarget::Document,
            EventKind::Keydown,
            Action::EscapePressed { overlay },
        );

        tracing::debug!(target: "veranda::lightbox", ?overlay, src, "lightbox opened");
        Ok(Self {
            overlay,
            image,
            close_button,
            key_binding,
            close_binding,
            backdrop_binding,
            fade_in: Some(fade_in),
            removal: None,
            closing: false,
        })
    }

    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    pub fn image_node(&self) -> NodeId {
        self.image
    }

    pub fn close_button(&self) -> NodeId {
        self.close_button
    }

    /// Whether the fade-out has started.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Bring the overlay to full opacity (the post-open tick).
    pub fn apply_fade_in(&self, tree: &mut DomTree) {
        if let Ok(el) = tree.element_mut(self.overlay) {
            el.style.set("opacity", "1");
        }
    }

    /// Start the fade-out: bindings come off immediately, the overlay is
    /// detached when the removal timer fires. Runs at most once per
    /// instance, whichever exit path triggers it.
    pub fn begin_close(
        &mut self,
        tree: &mut DomTree,
        listeners: &mut EventListeners<Action>,
        timers: &mut TimerQueue<TimerAction>,
        fade_ms: u64,
    ) {
        if self.closing {
            return;
        }
        self.closing = true;

        self.remove_bindings(listeners);
        if let Some(handle) = self.fade_in.take() {
            timers.cancel(handle);
        }
        if let Ok(el) = tree.element_mut(self.overlay) {
            el.style.set("opacity", "0");
        }
        self.removal = Some(timers.schedule(fade_ms, TimerAction::LightboxRemove {
            overlay: self.overlay,
        }));
        tracing::debug!(target: "veranda::lightbox", overlay = ?self.overlay, "lightbox closing");
    }

    /// Detach the overlay after the fade-out completed.
    pub fn finish_remove(self, tree: &mut DomTree) {
        let _ = tree.remove(self.overlay);
        tracing::debug!(target: "veranda::lightbox", overlay = ?self.overlay, "lightbox removed");
    }

    /// Tear the instance down immediately: bindings off, timers
    /// cancelled, overlay detached. Used when a new lightbox replaces
    /// this one or the page goes away.
    pub fn supersede(
        mut self,
        tree: &mut DomTree,
        listeners: &mut EventListeners<Action>,
        timers: &mut TimerQueue<TimerAction>,
    ) {
        if !self.closing {
            self.remove_bindings(listeners);
        }
        if let Some(handle) = self.fade_in.take() {
            timers.cancel(handle);
        }
        if let Some(handle) = self.removal.take() {
            timers.cancel(handle);
        }
        let _ = tree.remove(self.overlay);
        tracing::debug!(target: "veranda::lightbox", overlay = ?self.overlay, "lightbox superseded");
    }

    fn remove_bindings(&self, listeners: &mut EventListeners<Action>) {
        listeners.remove(self.key_binding);
        listeners.remove(self.close_binding);
        listeners.remove(self.backdrop_binding);
    }
}
