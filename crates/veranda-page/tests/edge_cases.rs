//! Edge-case tests for veranda-page

mod common;

use common::{fill_booking, page, set_field, style_of};
use veranda_dom::Document;
use veranda_page::booking::REQUIRED_MESSAGE;
use veranda_page::{Page, PageConfig};
use veranda_runtime::{CivilDate, Clock};

#[test]
fn test_bare_document_degrades_to_skips() {
    let clock = Clock::fixed(CivilDate::new(2026, 1, 1).unwrap());
    let mut page = Page::with_clock(Document::new(), PageConfig::default(), clock).unwrap();

    // Only the load-fade binding had anything to attach to
    assert_eq!(page.listener_count(), 1);
    assert!(!page.nav_is_open());

    // Driving a featureless page is harmless
    page.press_key("Escape");
    page.scroll_to(500.0);
    page.resize(320.0, 600.0);
    page.submit_booking();
    assert!(page.dialogs().is_empty());

    page.load();
    page.advance(100);
    let body = page.document().body();
    assert_eq!(style_of(&page, body, "opacity").as_deref(), Some("1"));
}

#[test]
fn test_escape_without_lightbox_is_noop() {
    let (mut page, _) = page();
    let listeners = page.listener_count();
    page.press_key("Escape");
    page.press_key("Enter");
    assert_eq!(page.listener_count(), listeners);
    assert!(page.lightbox_overlay().is_none());
}

#[test]
fn test_double_escape_schedules_one_removal() {
    let (mut page, nodes) = page();

    page.click(nodes.gallery[0]);
    let before = page.pending_timers(); // fade-in tick

    page.press_key("Escape");
    let after_close = page.pending_timers();
    assert_eq!(after_close, before, "fade-in swapped for removal");

    // The scoped key binding is already gone; a second press must not
    // schedule another removal
    page.press_key("Escape");
    assert_eq!(page.pending_timers(), after_close);

    page.advance(300);
    assert_eq!(page.pending_timers(), 0);
    assert!(page.lightbox_overlay().is_none());
}

#[test]
fn test_backdrop_click_after_close_does_nothing() {
    let (mut page, nodes) = page();

    page.click(nodes.gallery[0]);
    let overlay = page.lightbox_overlay().unwrap();

    page.press_key("Escape");
    let pending = page.pending_timers();

    // Bindings are off; the overlay is inert during its fade-out
    page.click(overlay);
    assert_eq!(page.pending_timers(), pending);

    page.advance(300);
    assert!(page.lightbox_overlay().is_none());
}

#[test]
fn test_reopen_during_fade_out_cancels_stale_removal() {
    let (mut page, nodes) = page();

    page.click(nodes.gallery[0]);
    let first = page.lightbox_overlay().unwrap();
    page.press_key("Escape");

    // Reopen while the first overlay is still fading out
    page.click(nodes.gallery[1]);
    let second = page.lightbox_overlay().unwrap();
    assert_ne!(first, second);
    assert!(!page.document().tree().contains(page.document().body(), first));

    // The first overlay's removal timer was cancelled, so advancing past
    // its deadline must not touch the new overlay
    page.advance(300);
    assert_eq!(page.lightbox_overlay(), Some(second));
    assert!(page.document().tree().contains(page.document().body(), second));
}

#[test]
fn test_listener_count_stable_across_cycles() {
    let (mut page, nodes) = page();
    let baseline = page.listener_count();

    for i in 0..5 {
        page.click(nodes.gallery[i % 2]);
        page.press_key("Escape");
        page.advance(300);
    }

    assert_eq!(page.listener_count(), baseline);
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn test_teardown_cancels_overlay_timers() {
    let (mut page, nodes) = page();

    page.click(nodes.gallery[0]);
    let overlay = page.lightbox_overlay().unwrap();
    assert!(page.pending_timers() > 0);

    page.teardown();
    assert!(page.lightbox_overlay().is_none());
    assert_eq!(page.pending_timers(), 0);
    assert!(!page.document().tree().contains(page.document().body(), overlay));
}

#[test]
fn test_scroll_storm_is_idempotent() {
    let (mut page, nodes) = page();

    for _ in 0..20 {
        page.scroll_to(150.0);
    }
    assert_eq!(
        style_of(&page, nodes.hero, "transform").as_deref(),
        Some("translateY(75px)")
    );
    // The feature came into view on the first scroll and stays latched
    assert_eq!(style_of(&page, nodes.feature, "opacity").as_deref(), Some("1"));
}

#[test]
fn test_whitespace_only_field_rejected() {
    let (mut page, _) = page();

    fill_booking(&mut page);
    set_field(&mut page, "guests", "   ");
    page.submit_booking();

    assert_eq!(page.dialogs().last(), Some(REQUIRED_MESSAGE));
}

#[test]
fn test_rejection_then_correction_accepts() {
    let (mut page, _) = page();

    fill_booking(&mut page);
    set_field(&mut page, "checkout", "2026-08-30"); // before checkin
    page.submit_booking();
    assert_eq!(page.dialogs().len(), 1);

    set_field(&mut page, "checkout", "2026-09-05");
    page.submit_booking();
    assert_eq!(page.dialogs().len(), 2);
    assert!(
        page.dialogs()
            .last()
            .is_some_and(|m| m.starts_with("Thank you"))
    );
}

#[test]
fn test_resize_between_breakpoints_toggles_parallax() {
    let (mut page, nodes) = page();

    page.resize(600.0, 900.0);
    page.scroll_to(400.0);
    assert_eq!(
        style_of(&page, nodes.hero, "transform").as_deref(),
        Some("translateY(0px)")
    );

    page.resize(1024.0, 768.0);
    page.scroll_to(400.0);
    assert_eq!(
        style_of(&page, nodes.hero, "transform").as_deref(),
        Some("translateY(200px)")
    );
}
