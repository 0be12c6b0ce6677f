//! Shared guesthouse document fixture for the integration suites.
#![allow(dead_code)]

use veranda_dom::{Document, DomTree, FormControl, NodeId, Rect};
use veranda_page::{Page, PageConfig};
use veranda_runtime::{CivilDate, Clock};

/// Interesting nodes of the fixture document.
pub struct Nodes {
    pub hamburger: NodeId,
    pub nav_menu: NodeId,
    pub nav_links: Vec<NodeId>,
    pub dead_anchor: NodeId,
    pub header: NodeId,
    pub hero: NodeId,
    pub feature: NodeId,
    pub cards: Vec<NodeId>,
    pub gallery: Vec<NodeId>,
    pub lazy_img: NodeId,
    pub form: NodeId,
    pub about: NodeId,
    pub footer_p: NodeId,
}

fn el(tree: &mut DomTree, parent: NodeId, tag: &str, classes: &[&str], rect: Rect) -> NodeId {
    let node = tree.create_element(tag);
    {
        let data = tree.element_mut(node).unwrap();
        for class in classes {
            data.classes.add(class);
        }
        data.rect = rect;
    }
    tree.append_child(parent, node).unwrap();
    node
}

fn control(tree: &mut DomTree, parent: NodeId, tag: &str, name: &str) -> NodeId {
    let node = el(tree, parent, tag, &[], Rect::default());
    tree.element_mut(node).unwrap().control = Some(FormControl::new(name, ""));
    node
}

/// Build the landing-page document the way the markup lays it out:
/// header with mobile nav, hero, content sections, gallery, booking
/// form, and footer, with document-space rects assigned.
pub fn guesthouse() -> (Document, Nodes) {
    let mut doc = Document::new();
    let body = doc.body();
    let tree = doc.tree_mut();

    let header = el(tree, body, "header", &["header"], Rect::from_xywh(0.0, 0.0, 1280.0, 80.0));
    let nav = el(tree, header, "nav", &[], Rect::from_xywh(0.0, 0.0, 1280.0, 80.0));
    let hamburger = el(tree, nav, "button", &["hamburger"], Rect::from_xywh(1200.0, 20.0, 40.0, 40.0));
    let nav_menu = el(tree, nav, "ul", &["nav-menu"], Rect::from_xywh(0.0, 80.0, 1280.0, 200.0));

    let mut nav_links = Vec::new();
    for (label, href) in [("About", "#about"), ("Booking", "#booking")] {
        let li = el(tree, nav_menu, "li", &[], Rect::default());
        let a = el(tree, li, "a", &["nav-link"], Rect::default());
        tree.element_mut(a).unwrap().set_attr("href", href);
        tree.set_text_content(a, label).unwrap();
        nav_links.push(a);
    }

    let hero = el(tree, body, "section", &["hero"], Rect::from_xywh(0.0, 0.0, 1280.0, 600.0));
    let dead_anchor = el(tree, hero, "a", &[], Rect::default());
    tree.element_mut(dead_anchor).unwrap().set_attr("href", "#nowhere");
    tree.set_text_content(dead_anchor, "Hidden corner").unwrap();

    let feature = el(tree, hero, "div", &["feature"], Rect::from_xywh(40.0, 300.0, 300.0, 150.0));

    let about = el(tree, body, "section", &[], Rect::from_xywh(0.0, 700.0, 1280.0, 400.0));
    tree.element_mut(about).unwrap().id = Some("about".to_string());

    let stay = el(tree, body, "section", &[], Rect::from_xywh(0.0, 1200.0, 1280.0, 300.0));
    let cards = vec![
        el(tree, stay, "div", &["accommodation-card"], Rect::from_xywh(40.0, 1200.0, 560.0, 300.0)),
        el(tree, stay, "div", &["accommodation-card"], Rect::from_xywh(680.0, 1200.0, 560.0, 300.0)),
    ];

    let gallery_section = el(tree, body, "section", &[], Rect::from_xywh(0.0, 1600.0, 1280.0, 250.0));
    let mut gallery = Vec::new();
    for (x, src, alt) in [
        (40.0, "images/pond.jpg", "Pond at sunrise"),
        (480.0, "images/orchard.jpg", "Apple orchard"),
    ] {
        let img = el(tree, gallery_section, "img", &["gallery-img"], Rect::from_xywh(x, 1600.0, 400.0, 250.0));
        let data = tree.element_mut(img).unwrap();
        data.set_attr("src", src);
        data.set_attr("alt", alt);
        gallery.push(img);
    }

    let booking_section = el(tree, body, "section", &[], Rect::from_xywh(0.0, 2000.0, 1280.0, 600.0));
    tree.element_mut(booking_section).unwrap().id = Some("booking".to_string());
    let form = el(tree, booking_section, "form", &["form"], Rect::from_xywh(340.0, 2050.0, 600.0, 500.0));
    for (tag, name) in [
        ("input", "name"),
        ("input", "phone"),
        ("input", "checkin"),
        ("input", "checkout"),
        ("select", "guests"),
        ("select", "cottage"),
    ] {
        control(tree, form, tag, name);
    }

    el(tree, body, "div", &["contact-item"], Rect::from_xywh(40.0, 2700.0, 600.0, 200.0));

    let lazy_img = el(tree, body, "img", &["lazy"], Rect::from_xywh(40.0, 3000.0, 600.0, 200.0));
    tree.element_mut(lazy_img).unwrap().set_attr("data-src", "images/winter.jpg");

    let footer = el(tree, body, "footer", &[], Rect::from_xywh(0.0, 3300.0, 1280.0, 120.0));
    let footer_bottom = el(tree, footer, "div", &["footer-bottom"], Rect::from_xywh(0.0, 3360.0, 1280.0, 60.0));
    let footer_p = el(tree, footer_bottom, "p", &[], Rect::default());
    tree.set_text_content(footer_p, "© 2019 Sablynska Homestead. All rights reserved.").unwrap();

    let nodes = Nodes {
        hamburger,
        nav_menu,
        nav_links,
        dead_anchor,
        header,
        hero,
        feature,
        cards,
        gallery,
        lazy_img,
        form,
        about,
        footer_p,
    };
    (doc, nodes)
}

/// Fixture page pinned to 2026-08-08.
pub fn page() -> (Page, Nodes) {
    let (doc, nodes) = guesthouse();
    let clock = Clock::fixed(CivilDate::new(2026, 8, 8).unwrap());
    let page = Page::with_clock(doc, PageConfig::default(), clock).unwrap();
    (page, nodes)
}

/// Set a named control's value.
pub fn set_field(page: &mut Page, name: &str, value: &str) {
    let Some(form) = page.form() else {
        panic!("fixture has a form");
    };
    let node = page
        .document()
        .tree()
        .descendants(form)
        .find(|(_, node)| {
            node.as_element()
                .and_then(|el| el.control.as_ref())
                .is_some_and(|c| c.name == name)
        })
        .map(|(id, _)| id)
        .unwrap_or_else(|| panic!("no control named {name}"));
    let el = page.document_mut().tree_mut().element_mut(node).unwrap();
    el.control.as_mut().unwrap().value = value.to_string();
}

/// Fill every required field with plausible values.
pub fn fill_booking(page: &mut Page) {
    set_field(page, "name", "Ann Kovalenko");
    set_field(page, "phone", "+380501112233");
    set_field(page, "checkin", "2026-09-01");
    set_field(page, "checkout", "2026-09-05");
    set_field(page, "guests", "2");
    set_field(page, "cottage", "riverside");
}

/// Current value of a named control.
pub fn field_value(page: &Page, name: &str) -> String {
    let form = page.form().expect("fixture has a form");
    page.document()
        .tree()
        .descendants(form)
        .find_map(|(_, node)| {
            node.as_element()
                .and_then(|el| el.control.as_ref())
                .filter(|c| c.name == name)
                .map(|c| c.value.clone())
        })
        .unwrap_or_else(|| panic!("no control named {name}"))
}

/// Border color of a named control.
pub fn field_border(page: &Page, name: &str) -> Option<String> {
    let form = page.form().expect("fixture has a form");
    page.document()
        .tree()
        .descendants(form)
        .find(|(_, node)| {
            node.as_element()
                .and_then(|el| el.control.as_ref())
                .is_some_and(|c| c.name == name)
        })
        .and_then(|(id, _)| {
            page.document()
                .tree()
                .element(id)
                .ok()
                .and_then(|el| el.style.get("border-color").map(str::to_string))
        })
}

/// Inline style property of a node.
pub fn style_of(page: &Page, node: NodeId, prop: &str) -> Option<String> {
    page.document()
        .tree()
        .element(node)
        .ok()
        .and_then(|el| el.style.get(prop).map(str::to_string))
}

/// Whether a node carries a class.
pub fn has_class(page: &Page, node: NodeId, class: &str) -> bool {
    page.document()
        .tree()
        .element(node)
        .map(|el| el.classes.contains(class))
        .unwrap_or(false)
}
