//! Booking confirmation modal

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::dom;

const MODAL_ID: &str = "confirmationModal";

pub fn show(document: &Document) {
    if let Some(modal) = document.get_element_by_id(MODAL_ID) {
        let _ = modal.class_list().add_1("active");
        if let Some(body) = document.body() {
            dom::set_style(&body, "overflow", "hidden");
        }
    }
}

pub fn hide(document: &Document) {
    if let Some(modal) = document.get_element_by_id(MODAL_ID) {
        let _ = modal.class_list().remove_1("active");
        if let Some(body) = document.body() {
            dom::set_style(&body, "overflow", "");
        }
    }
}

/// Close button and backdrop clicks
pub fn init(document: &Document) {
    if let Some(close) = document.get_element_by_id("modalClose") {
        let document = document.clone();
        dom::on(&close, "click", move |_event| hide(&document));
    }

    if let Some(modal) = document.get_element_by_id(MODAL_ID) {
        let document = document.clone();
        let backdrop = modal.clone();
        dom::on(&modal, "click", move |event| {
            // Only clicks on the overlay itself, not its content
            let on_overlay = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el == backdrop);
            if on_overlay {
                hide(&document);
            }
        });
    }
}
