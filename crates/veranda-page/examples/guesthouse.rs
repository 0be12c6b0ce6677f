//! Example: a browsing session on the guesthouse landing page

use veranda_dom::{Document, DomTree, FormControl, NodeId, Rect};
use veranda_page::{Page, PageConfig};

fn element(
    tree: &mut DomTree,
    parent: NodeId,
    tag: &str,
    class: Option<&str>,
    rect: Rect,
) -> anyhow::Result<NodeId> {
    let node = tree.create_element(tag);
    {
        let el = tree.element_mut(node)?;
        if let Some(class) = class {
            el.classes.add(class);
        }
        el.rect = rect;
    }
    tree.append_child(parent, node)?;
    Ok(node)
}

fn build_landing_page() -> anyhow::Result<(Document, NodeId, NodeId)> {
    let mut doc = Document::new();
    let body = doc.body();
    let tree = doc.tree_mut();

    let header = element(tree, body, "header", Some("header"), Rect::from_xywh(0.0, 0.0, 1280.0, 80.0))?;
    let hamburger = element(tree, header, "button", Some("hamburger"), Rect::default())?;
    element(tree, header, "ul", Some("nav-menu"), Rect::default())?;

    element(tree, body, "section", Some("hero"), Rect::from_xywh(0.0, 0.0, 1280.0, 600.0))?;
    element(tree, body, "div", Some("feature"), Rect::from_xywh(40.0, 300.0, 300.0, 150.0))?;
    element(tree, body, "div", Some("accommodation-card"), Rect::from_xywh(40.0, 900.0, 560.0, 300.0))?;

    let photo = element(tree, body, "img", Some("gallery-img"), Rect::from_xywh(40.0, 1400.0, 400.0, 250.0))?;
    {
        let el = tree.element_mut(photo)?;
        el.set_attr("src", "images/pond.jpg");
        el.set_attr("alt", "Pond at sunrise");
    }

    let form = element(tree, body, "form", Some("form"), Rect::from_xywh(340.0, 1800.0, 600.0, 500.0))?;
    for name in ["name", "phone", "checkin", "checkout", "guests", "cottage"] {
        let input = element(tree, form, "input", None, Rect::default())?;
        tree.element_mut(input)?.control = Some(FormControl::new(name, ""));
    }

    let footer = element(tree, body, "div", Some("footer-bottom"), Rect::from_xywh(0.0, 2400.0, 1280.0, 60.0))?;
    let note = element(tree, footer, "p", None, Rect::default())?;
    tree.set_text_content(note, "© Sablynska Homestead")?;

    Ok((doc, hamburger, photo))
}

fn fill_field(page: &mut Page, name: &str, value: &str) -> anyhow::Result<()> {
    let form = page.form().ok_or_else(|| anyhow::anyhow!("no booking form"))?;
    let node = page
        .document()
        .tree()
        .descendants(form)
        .find(|(_, n)| {
            n.as_element()
                .and_then(|el| el.control.as_ref())
                .is_some_and(|c| c.name == name)
        })
        .map(|(id, _)| id)
        .ok_or_else(|| anyhow::anyhow!("no control named {name}"))?;
    if let Some(control) = page.document_mut().tree_mut().element_mut(node)?.control.as_mut() {
        control.value = value.to_string();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let (doc, hamburger, photo) = build_landing_page()?;
    let mut page = Page::new(doc, PageConfig::default())?;

    page.load();
    page.advance(100);
    println!("page loaded, {} bindings installed", page.listener_count());

    page.click(hamburger);
    println!("mobile nav open: {}", page.nav_is_open());
    page.click(hamburger);

    page.scroll_to(950.0);
    println!("scrolled to {}px", page.window().scroll_y());

    page.click(photo);
    page.advance(10);
    println!("lightbox open: {}", page.lightbox_overlay().is_some());
    page.press_key("Escape");
    page.advance(300);
    println!("lightbox open: {}", page.lightbox_overlay().is_some());

    fill_field(&mut page, "name", "Ann Kovalenko")?;
    fill_field(&mut page, "phone", "+380501112233")?;
    fill_field(&mut page, "checkin", "2026-09-01")?;
    fill_field(&mut page, "checkout", "2026-09-05")?;
    fill_field(&mut page, "guests", "2")?;
    fill_field(&mut page, "cottage", "riverside")?;
    page.submit_booking();

    for message in page.drain_dialogs() {
        println!("dialog: {message}");
    }
    for line in page.console().lines() {
        println!("console: {line}");
    }
    Ok(())
}
