//! Small DOM helpers shared by the page behaviors

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::error::SetupError;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

/// Element by id, cast to the expected type
pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

/// Every match of `selector` under `root` that casts to `T`
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    collect_nodes(root.query_selector_all(selector).ok())
}

/// Every match of `selector` in the document that casts to `T`
pub fn query_all_in<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    collect_nodes(document.query_selector_all(selector).ok())
}

fn collect_nodes<T: JsCast>(list: Option<web_sys::NodeList>) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Set an inline style property; an empty value removes it
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("style {}: {:?}", property, e);
    }
}

/// The `value` of an input, select or textarea
pub fn value_of(el: &Element) -> String {
    js_sys::Reflect::get(el, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

pub fn set_value(el: &Element, value: &str) {
    let _ = js_sys::Reflect::set(el, &JsValue::from_str("value"), &JsValue::from_str(value));
}

/// Attach a listener for the page's lifetime
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => closure.forget(),
        Err(e) => log::warn!("Failed to listen for {}: {:?}", event, e),
    }
}
