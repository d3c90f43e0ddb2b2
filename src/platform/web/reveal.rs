//! Fade cards in as they scroll into view

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::error::SetupError;
use crate::ui::reveal::{REVEAL_GROUPS, RevealStyle, hidden, revealed};

fn apply(el: &HtmlElement, style: &RevealStyle) {
    dom::set_style(el, "opacity", style.opacity);
    dom::set_style(el, "transform", &style.transform);
    if let Some(transition) = &style.transition {
        dom::set_style(el, "transition", transition);
    }
}

/// Hide every card and reveal it on first intersection
///
/// Without `IntersectionObserver` the cards are left fully visible.
pub fn init(document: &Document) -> Result<(), SetupError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(card) = entry.target().dyn_ref::<HtmlElement>() {
                    apply(card, &revealed());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| SetupError::Js(format!("{e:?}")))?;
    callback.forget();

    for group in REVEAL_GROUPS {
        for (index, card) in dom::query_all_in::<HtmlElement>(document, group)
            .iter()
            .enumerate()
        {
            apply(card, &hidden(index));
            observer.observe(card);
        }
    }

    Ok(())
}
