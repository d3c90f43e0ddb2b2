//! Mobile menu toggle and navbar shadow

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::dom;
use crate::ui::{HamburgerStyle, navbar_shadow};

pub fn init(window: &Window, document: &Document) {
    let toggle = document.get_element_by_id("navToggle");
    let links = document.get_element_by_id("navLinks");

    if let (Some(toggle), Some(links)) = (toggle.clone(), links.clone()) {
        let toggle_for_click = toggle.clone();
        dom::on(&toggle, "click", move |_event| {
            let open = links.class_list().toggle("active").unwrap_or(false);
            apply_hamburger(&toggle_for_click, open);
        });
    }

    // Any link closes the menu
    if let Some(links) = links {
        for item in dom::query_all::<Element>(&links, "a") {
            let links = links.clone();
            let toggle = toggle.clone();
            dom::on(&item, "click", move |_event| {
                let _ = links.class_list().remove_1("active");
                if let Some(toggle) = &toggle {
                    apply_hamburger(toggle, false);
                }
            });
        }
    }

    if let Some(navbar) = document
        .get_element_by_id("navbar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let win = window.clone();
        dom::on(window, "scroll", move |_event| {
            let scroll_y = win.page_y_offset().unwrap_or(0.0);
            dom::set_style(&navbar, "box-shadow", navbar_shadow(scroll_y));
        });
    }
}

fn apply_hamburger(toggle: &Element, open: bool) {
    let style = HamburgerStyle::for_menu(open);
    let bars = dom::query_all::<HtmlElement>(toggle, "span");
    if let [top, middle, bottom, ..] = bars.as_slice() {
        dom::set_style(top, "transform", style.top_transform);
        dom::set_style(middle, "opacity", style.middle_opacity);
        dom::set_style(bottom, "transform", style.bottom_transform);
    }
}
