//! Veranda Page - Guesthouse landing-page behaviors
//!
//! The interactive layer of the Sablynska Homestead landing page as a set
//! of handler-installer functions over `veranda-dom` and
//! `veranda-runtime`: mobile navigation, smooth anchor scrolling, header
//! restyling, reveal-on-intersection, booking-form validation, an image
//! lightbox, hero parallax, lazy image loading, and cosmetic touches.
//!
//! `Page` wires a document and a window together and drives everything
//! from dispatched events and an advancing timer queue:
//!
//! ```rust,ignore
//! use veranda_dom::Document;
//! use veranda_page::{Page, PageConfig};
//!
//! let doc = build_landing_page();
//! let mut page = Page::new(doc, PageConfig::default())?;
//! page.load();
//! page.scroll_to(400.0);
//! page.advance(500);
//! ```

pub mod booking;
pub mod config;
pub mod cosmetic;
pub mod lightbox;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scrolling;
pub mod util;

pub use booking::{BookingRequest, SubmitOutcome};
pub use config::PageConfig;
pub use page::{Page, PageError};
pub use util::Debouncer;
