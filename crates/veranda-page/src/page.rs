//! Page facade
//!
//! Owns the document, the window, and the runtime services, installs
//! every behavior at construction, and drives them from dispatched
//! events and the advancing timer queue.
//!
//! Listeners are data: each binding carries an [`Action`] tag that the
//! page interprets against its own state, so installing and removing a
//! behavior is a registry operation, not a closure juggle.

use crate::booking;
use crate::config::PageConfig;
use crate::cosmetic;
use crate::lightbox::Lightbox;
use crate::nav::NavState;
use crate::reveal;
use crate::scrolling::{self, Parallax};
use thiserror::Error;
use veranda_dom::{Document, DomError, NodeId, ScrollBehavior};
use veranda_runtime::{
    BindingTarget, Clock, Console, DialogQueue, Event, EventKind, EventListeners,
    IntersectionObserver, TimerQueue, Window,
};

/// Errors surfaced while wiring a page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Behavior tag carried by an event binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip the mobile navigation
    NavToggle,
    /// A navigation link was activated; force the menu closed
    NavLinkClick,
    /// Document-level click; close the menu if the click was outside it
    NavOutsideClick,
    /// Follow an in-page anchor
    FollowAnchor { fragment: String },
    /// Recompute the header style for the current scroll offset
    HeaderScroll,
    /// Recompute the hero parallax offset
    ParallaxScroll,
    /// Reset and re-evaluate parallax for a new viewport size
    ParallaxResize,
    /// Validate and settle the booking form
    SubmitBooking { form: NodeId },
    /// Open a lightbox for a gallery image
    OpenLightbox { source: NodeId },
    /// Close control of an open lightbox
    CloseLightbox { overlay: NodeId },
    /// Click on the dimmed backdrop itself
    BackdropClick { overlay: NodeId },
    /// Document-level key press scoped to an open lightbox
    EscapePressed { overlay: NodeId },
    /// Pointer entered or left a card
    CardHover { card: NodeId, entered: bool },
    /// Start the whole-page load fade
    LoadFade,
}

/// Work scheduled on the timer queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Bring a freshly opened lightbox to full opacity
    LightboxFadeIn { overlay: NodeId },
    /// Detach a faded-out lightbox overlay
    LightboxRemove { overlay: NodeId },
    /// Bring the body to full opacity after the load fade
    BodyVisible,
}

/// The wired-up landing page.
pub struct Page {
    doc: Document,
    window: Window,
    clock: Clock,
    config: PageConfig,
    listeners: EventListeners<Action>,
    timers: TimerQueue<TimerAction>,
    reveal_observer: IntersectionObserver,
    lazy_observer: IntersectionObserver,
    dialogs: DialogQueue,
    console: Console,
    nav: Option<NavState>,
    header: Option<NodeId>,
    parallax: Option<Parallax>,
    form: Option<NodeId>,
    lightbox: Option<Lightbox>,
}

impl Page {
    /// Wire a page against the system clock.
    pub fn new(doc: Document, config: PageConfig) -> Result<Self, PageError> {
        Self::with_clock(doc, config, Clock::system())
    }

    /// Wire a page with a pinned clock. Elements each behavior needs are
    /// looked up once, here; a missing anchor element skips that behavior
    /// with a warning instead of failing the page.
    pub fn with_clock(doc: Document, config: PageConfig, clock: Clock) -> Result<Self, PageError> {
        let window = Window::new(config.viewport_width, config.viewport_height);
        let reveal_observer = IntersectionObserver::new(config.reveal_threshold, config.reveal_margin);
        let lazy_observer = IntersectionObserver::new(0.0, Default::default());

        let mut page = Self {
            doc,
            window,
            clock,
            config,
            listeners: EventListeners::new(),
            timers: TimerQueue::new(),
            reveal_observer,
            lazy_observer,
            dialogs: DialogQueue::new(),
            console: Console::new(),
            nav: None,
            header: None,
            parallax: None,
            form: None,
            lightbox: None,
        };

        page.install_navigation();
        page.install_anchors();
        page.install_header();
        page.install_reveal();
        page.install_booking();
        page.install_gallery();
        page.install_parallax();
        page.install_lazy_images();
        page.install_cosmetics()?;

        page.console.log(cosmetic::STARTUP_BANNER);
        Ok(page)
    }

    fn install_navigation(&mut self) {
        let toggle = self.doc.query_selector(".hamburger");
        let menu = self.doc.query_selector(".nav-menu");
        let (Some(toggle), Some(menu)) = (toggle, menu) else {
            tracing::warn!(target: "veranda::page", "navigation toggle or menu missing, skipping");
            return;
        };

        self.listeners
            .add(BindingTarget::Node(toggle), EventKind::Click, Action::NavToggle);
        for link in self.doc.query_selector_all(".nav-link") {
            self.listeners
                .add(BindingTarget::Node(link), EventKind::Click, Action::NavLinkClick);
        }
        self.listeners
            .add(BindingTarget::Document, EventKind::Click, Action::NavOutsideClick);
        self.nav = Some(NavState::new(toggle, menu));
    }

    fn install_anchors(&mut self) {
        for anchor in self.doc.query_selector_all("a") {
            let Some(href) = self
                .doc
                .tree()
                .element(anchor)
                .ok()
                .and_then(|el| el.attr("href").map(str::to_string))
            else {
                continue;
            };
            if href.starts_with('#') {
                self.listeners.add(
                    BindingTarget::Node(anchor),
                    EventKind::Click,
                    Action::FollowAnchor { fragment: href },
                );
            }
        }
    }

    fn install_header(&mut self) {
        let Some(header) = self.doc.query_selector(".header") else {
            tracing::warn!(target: "veranda::page", "header missing, skipping restyle");
            return;
        };
        self.header = Some(header);
        self.listeners
            .add(BindingTarget::Window, EventKind::Scroll, Action::HeaderScroll);
    }

    fn install_reveal(&mut self) {
        // One pass keeps document order and deduplicates elements that
        // carry more than one reveal class.
        let targets: Vec<NodeId> = self
            .doc
            .tree()
            .descendants(self.doc.tree().root())
            .filter_map(|(id, node)| {
                let el = node.as_element()?;
                reveal::REVEAL_CLASSES
                    .iter()
                    .any(|class| el.classes.contains(class))
                    .then_some(id)
            })
            .collect();

        for target in targets {
            reveal::prepare(self.doc.tree_mut(), target);
            self.reveal_observer.observe(target);
        }
    }

    fn install_booking(&mut self) {
        let Some(form) = self.doc.query_selector(".form") else {
            tracing::warn!(target: "veranda::page", "booking form missing, skipping");
            return;
        };
        self.form = Some(form);
        self.listeners.add(
            BindingTarget::Node(form),
            EventKind::Submit,
            Action::SubmitBooking { form },
        );
    }

    fn install_gallery(&mut self) {
        for image in self.doc.query_selector_all(".gallery-img") {
            self.listeners.add(
                BindingTarget::Node(image),
                EventKind::Click,
                Action::OpenLightbox { source: image },
            );
        }
    }

    fn install_parallax(&mut self) {
        let Some(hero) = self.doc.query_selector(".hero") else {
            tracing::warn!(target: "veranda::page", "hero missing, skipping parallax");
            return;
        };
        self.parallax = Some(Parallax::new(
            hero,
            self.config.parallax_factor,
            self.config.parallax_min_width,
            self.window.inner_width(),
        ));
        self.listeners
            .add(BindingTarget::Window, EventKind::Scroll, Action::ParallaxScroll);
        self.listeners
            .add(BindingTarget::Window, EventKind::Resize, Action::ParallaxResize);
    }

    fn install_lazy_images(&mut self) {
        for image in self.doc.query_selector_all("img[data-src]") {
            self.lazy_observer.observe(image);
        }
    }

    fn install_cosmetics(&mut self) -> Result<(), PageError> {
        self.listeners
            .add(BindingTarget::Window, EventKind::Load, Action::LoadFade);

        match self.footer_text_node() {
            Some(text_node) => {
                cosmetic::inject_footer_year(self.doc.tree_mut(), text_node, self.clock.year())?;
            }
            None => {
                tracing::warn!(target: "veranda::page", "footer text missing, skipping year");
            }
        }

        for card in self.doc.query_selector_all(".accommodation-card") {
            self.listeners.add(
                BindingTarget::Node(card),
                EventKind::MouseEnter,
                Action::CardHover { card, entered: true },
            );
            self.listeners.add(
                BindingTarget::Node(card),
                EventKind::MouseLeave,
                Action::CardHover { card, entered: false },
            );
        }
        Ok(())
    }

    /// First paragraph inside the footer bottom block.
    fn footer_text_node(&self) -> Option<NodeId> {
        let footer = self.doc.query_selector(".footer-bottom")?;
        self.doc
            .tree()
            .descendants(footer)
            .find(|(_, node)| node.as_element().is_some_and(|el| el.tag == "p"))
            .map(|(id, _)| id)
    }

    /// Dispatch an event through the installed bindings. Returns whether
    /// the default action survived.
    pub fn dispatch(&mut self, mut event: Event) -> bool {
        let actions = self.listeners.actions_for(&event);
        for (_, action) in actions {
            self.run_action(action, &mut event);
        }
        if matches!(
            event.kind,
            EventKind::Scroll | EventKind::Resize | EventKind::Load
        ) {
            self.deliver_intersections();
        }
        !event.is_default_prevented()
    }

    /// Click a node.
    pub fn click(&mut self, target: NodeId) -> bool {
        self.dispatch(Event::click(target))
    }

    /// Press a key at document level.
    pub fn press_key(&mut self, key: &str) -> bool {
        self.dispatch(Event::keydown(key))
    }

    /// Submit the booking form, if one was installed.
    pub fn submit_booking(&mut self) {
        if let Some(form) = self.form {
            self.dispatch(Event::submit(form));
        }
    }

    /// Scroll the window and fire the scroll event.
    pub fn scroll_to(&mut self, top: f64) {
        self.window.scroll_to(top, ScrollBehavior::Auto);
        self.dispatch(Event::scroll());
    }

    /// Resize the viewport and fire the resize event.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.window.resize(width, height);
        self.dispatch(Event::resize());
    }

    /// Fire the load event.
    pub fn load(&mut self) {
        self.dispatch(Event::load());
    }

    /// Advance the logical clock, running every timer that comes due.
    pub fn advance(&mut self, ms: u64) {
        for action in self.timers.advance(ms) {
            self.run_timer(action);
        }
    }

    /// Drop transient state before the page goes away: tears down any
    /// open lightbox so no stale timer can outlive its overlay.
    pub fn teardown(&mut self) {
        if let Some(lightbox) = self.lightbox.take() {
            lightbox.supersede(self.doc.tree_mut(), &mut self.listeners, &mut self.timers);
        }
    }

    fn run_action(&mut self, action: Action, event: &mut Event) {
        match action {
            Action::NavToggle => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.flip(self.doc.tree_mut());
                }
            }
            Action::NavLinkClick => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.set_open(self.doc.tree_mut(), false);
                }
            }
            Action::NavOutsideClick => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.close_if_outside(self.doc.tree_mut(), event.target);
                }
            }
            Action::FollowAnchor { fragment } => {
                event.prevent_default();
                let scrolled = scrolling::follow_anchor(
                    self.doc.tree(),
                    &mut self.window,
                    &fragment,
                    self.config.anchor_header_offset,
                );
                if scrolled {
                    // Programmatic scrolls are observed like user scrolls
                    self.dispatch(Event::scroll());
                }
            }
            Action::HeaderScroll => {
                if let Some(header) = self.header {
                    scrolling::restyle_header(
                        self.doc.tree_mut(),
                        header,
                        self.window.scroll_y(),
                        self.config.header_scroll_threshold,
                    );
                }
            }
            Action::ParallaxScroll => {
                if let Some(parallax) = self.parallax.as_ref() {
                    parallax.on_scroll(self.doc.tree_mut(), self.window.scroll_y());
                }
            }
            Action::ParallaxResize => {
                if let Some(parallax) = self.parallax.as_mut() {
                    parallax.on_resize(self.doc.tree_mut(), self.window.inner_width());
                }
            }
            Action::SubmitBooking { form } => {
                event.prevent_default();
                booking::process_submit(
                    self.doc.tree_mut(),
                    form,
                    &mut self.dialogs,
                    &mut self.console,
                );
            }
            Action::OpenLightbox { source } => self.open_lightbox(source),
            Action::CloseLightbox { overlay } | Action::BackdropClick { overlay } => {
                self.close_lightbox(overlay);
            }
            Action::EscapePressed { overlay } => {
                if event.key.as_deref() == Some("Escape") {
                    self.close_lightbox(overlay);
                }
            }
            Action::CardHover { card, entered } => {
                cosmetic::card_hover(self.doc.tree_mut(), card, entered);
            }
            Action::LoadFade => {
                let body = self.doc.body();
                cosmetic::begin_load_fade(self.doc.tree_mut(), body);
                self.timers
                    .schedule(self.config.load_fade_delay_ms, TimerAction::BodyVisible);
            }
        }
    }

    fn run_timer(&mut self, action: TimerAction) {
        match action {
            TimerAction::LightboxFadeIn { overlay } => {
                if let Some(lightbox) = self.lightbox.as_ref() {
                    if lightbox.overlay() == overlay && !lightbox.is_closing() {
                        lightbox.apply_fade_in(self.doc.tree_mut());
                    }
                }
            }
            TimerAction::LightboxRemove { overlay } => {
                let matches = self
                    .lightbox
                    .as_ref()
                    .is_some_and(|l| l.overlay() == overlay);
                if matches {
                    if let Some(lightbox) = self.lightbox.take() {
                        lightbox.finish_remove(self.doc.tree_mut());
                    }
                }
            }
            TimerAction::BodyVisible => {
                let body = self.doc.body();
                cosmetic::finish_load_fade(self.doc.tree_mut(), body);
            }
        }
    }

    fn open_lightbox(&mut self, source: NodeId) {
        // At most one lightbox exists; a reopen supersedes the old
        // instance including its pending timers.
        if let Some(existing) = self.lightbox.take() {
            existing.supersede(self.doc.tree_mut(), &mut self.listeners, &mut self.timers);
        }
        let body = self.doc.body();
        match Lightbox::open(
            self.doc.tree_mut(),
            body,
            &mut self.listeners,
            &mut self.timers,
            source,
            &self.config,
        ) {
            Ok(lightbox) => self.lightbox = Some(lightbox),
            Err(err) => {
                tracing::warn!(target: "veranda::page", %err, "failed to open lightbox");
            }
        }
    }

    fn close_lightbox(&mut self, overlay: NodeId) {
        let matches = self
            .lightbox
            .as_ref()
            .is_some_and(|l| l.overlay() == overlay);
        if !matches {
            return;
        }
        if let Some(lightbox) = self.lightbox.as_mut() {
            lightbox.begin_close(
                self.doc.tree_mut(),
                &mut self.listeners,
                &mut self.timers,
                self.config.lightbox_fade_ms,
            );
        }
    }

    fn deliver_intersections(&mut self) {
        let viewport = self.window.viewport();

        // Reveal targets latch; the observer keeps watching and repeated
        // deliveries land on the idempotent end state.
        for entry in self.reveal_observer.entries(self.doc.tree(), viewport) {
            if entry.is_intersecting {
                reveal::reveal(self.doc.tree_mut(), entry.target);
            }
        }

        // Lazy images are one-shot: promoted, then unobserved.
        let promoted: Vec<NodeId> = self
            .lazy_observer
            .entries(self.doc.tree(), viewport)
            .into_iter()
            .filter(|entry| entry.is_intersecting)
            .map(|entry| entry.target)
            .filter(|&target| reveal::promote_lazy(self.doc.tree_mut(), target))
            .collect();
        for target in promoted {
            self.lazy_observer.unobserve(target);
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Whether the mobile navigation is open.
    pub fn nav_is_open(&self) -> bool {
        self.nav.as_ref().is_some_and(NavState::is_open)
    }

    /// Overlay node of the open lightbox, if any.
    pub fn lightbox_overlay(&self) -> Option<NodeId> {
        self.lightbox.as_ref().map(Lightbox::overlay)
    }

    /// The installed booking form, if any.
    pub fn form(&self) -> Option<NodeId> {
        self.form
    }

    /// Queued blocking dialogs.
    pub fn dialogs(&self) -> &DialogQueue {
        &self.dialogs
    }

    /// Take every queued dialog message.
    pub fn drain_dialogs(&mut self) -> Vec<String> {
        self.dialogs.drain()
    }

    /// Diagnostic console.
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Number of installed event bindings.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of timers waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }
}
