//! Smooth scrolling for in-page anchors

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::dom;
use crate::ui::{AnchorAction, route_anchor, scroll_top_for};

pub fn init(window: &Window, document: &Document) {
    for link in dom::query_all_in::<Element>(document, "a[href^=\"#\"]") {
        let window = window.clone();
        let document = document.clone();
        let anchor = link.clone();
        dom::on(&link, "click", move |event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            match route_anchor(&href) {
                AnchorAction::Ignore => event.prevent_default(),
                AnchorAction::ScrollTo(selector) => {
                    // An id that is not a valid selector behaves like a missing target
                    let target = document
                        .query_selector(selector)
                        .ok()
                        .flatten()
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                    if let Some(target) = target {
                        event.prevent_default();
                        let options = ScrollToOptions::new();
                        options.set_top(scroll_top_for(target.offset_top() as f64));
                        options.set_behavior(ScrollBehavior::Smooth);
                        window.scroll_to_with_scroll_to_options(&options);
                    }
                }
                AnchorAction::Default => {}
            }
        });
    }
}
