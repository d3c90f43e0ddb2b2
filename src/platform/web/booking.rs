//! Booking form wiring: date bounds, submit validation, inline errors

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::{dom, modal};
use crate::booking::{self, BookingForm, BookingWindow, CalendarDate, Field, check_on_blur};

const FORM_ID: &str = "bookingForm";
const ERROR_COLOR: &str = "#ef4444";

/// Today's date in the visitor's local time zone
pub fn today() -> Option<CalendarDate> {
    let now = js_sys::Date::new_0();
    CalendarDate::new(
        now.get_full_year() as i32,
        (now.get_month() + 1) as u8,
        now.get_date() as u8,
    )
}

/// Limit `#date` to today through the booking window
pub fn init_date_bounds(document: &Document) {
    let Some(input) = document.get_element_by_id(Field::Date.id()) else {
        return;
    };
    let Some(today) = today() else {
        return;
    };
    let window = BookingWindow::starting(today);
    let _ = input.set_attribute("min", &window.min.to_string());
    let _ = input.set_attribute("max", &window.max.to_string());
}

pub fn init(document: &Document) {
    init_date_bounds(document);
    modal::init(document);
    init_phone_sanitizer(document);
    init_service_log(document);

    let form = match dom::element_by_id::<HtmlFormElement>(document, FORM_ID, "form") {
        Ok(form) => form,
        Err(e) => {
            log::debug!("Booking form disabled: {}", e);
            return;
        }
    };

    {
        let document = document.clone();
        let form_el = form.clone();
        dom::on(&form, "submit", move |event| {
            event.prevent_default();
            handle_submit(&document, &form_el);
        });
    }

    init_live_feedback(&form);
}

fn handle_submit(document: &Document, form: &HtmlFormElement) {
    let required = required_fields(form);
    let values = read_form(document);
    let Some(today) = today() else {
        return;
    };

    for field in Field::ALL {
        if let Some(input) = document.get_element_by_id(field.id()) {
            clear_input_error(&input);
        }
    }

    match booking::submit(values, &required, today, js_sys::Date::now()) {
        Ok(record) => {
            log::info!("Booking data: {}", record.to_json());
            modal::show(document);
            form.reset();
        }
        Err(report) => {
            for (field, error) in report.errors() {
                if let Some(input) = document.get_element_by_id(field.id()) {
                    show_input_error(document, &input, error.message());
                }
            }
        }
    }
}

/// Fields the markup flags `required`
fn required_fields(form: &HtmlFormElement) -> Vec<Field> {
    dom::query_all::<Element>(form, "[required]")
        .iter()
        .filter_map(|el| Field::from_id(&el.id()))
        .collect()
}

fn read_form(document: &Document) -> BookingForm {
    let mut values = BookingForm::default();
    for field in Field::ALL {
        if let Some(el) = document.get_element_by_id(field.id()) {
            values.set(field, dom::value_of(&el));
        }
    }
    values
}

/// Red border plus a message under the field
fn show_input_error(document: &Document, input: &Element, message: &str) {
    clear_input_error(input);

    if let Some(input) = input.dyn_ref::<HtmlElement>() {
        dom::set_style(input, "border-color", ERROR_COLOR);
    }

    let Some(parent) = input.parent_element() else {
        return;
    };
    let Ok(error) = document.create_element("div") else {
        return;
    };
    error.set_class_name("input-error");
    error.set_text_content(Some(message));
    if let Some(error) = error.dyn_ref::<HtmlElement>() {
        dom::set_style(error, "color", ERROR_COLOR);
        dom::set_style(error, "font-size", "0.875rem");
        dom::set_style(error, "margin-top", "0.25rem");
    }
    let _ = parent.append_child(&error);
}

fn clear_input_error(input: &Element) {
    if let Some(existing) = input
        .parent_element()
        .and_then(|parent| parent.query_selector(".input-error").ok().flatten())
    {
        existing.remove();
    }
    if let Some(input) = input.dyn_ref::<HtmlElement>() {
        dom::set_style(input, "border-color", "");
    }
}

/// Focus clears a field's error; blur re-checks filled required fields
fn init_live_feedback(form: &HtmlFormElement) {
    let document = form.owner_document();
    for input in dom::query_all::<Element>(form, "input, select, textarea") {
        {
            let target = input.clone();
            dom::on(&input, "focus", move |_event| clear_input_error(&target));
        }

        if !input.has_attribute("required") {
            continue;
        }
        let Some(field) = Field::from_id(&input.id()) else {
            continue;
        };
        let Some(document) = document.clone() else {
            continue;
        };
        let target = input.clone();
        dom::on(&input, "blur", move |_event| {
            if let Some(error) = check_on_blur(field, &dom::value_of(&target)) {
                show_input_error(&document, &target, error.message());
            }
        });
    }
}

/// Digits only, at most ten, as the visitor types
fn init_phone_sanitizer(document: &Document) {
    let Ok(phone) = dom::element_by_id::<HtmlInputElement>(document, Field::Phone.id(), "input")
    else {
        return;
    };
    let target = phone.clone();
    dom::on(&phone, "input", move |_event| {
        let raw = target.value();
        let cleaned = booking::sanitize_phone(&raw);
        if cleaned != raw {
            target.set_value(&cleaned);
        }
    });
}

fn init_service_log(document: &Document) {
    let Some(service) = document.get_element_by_id(Field::Service.id()) else {
        return;
    };
    let target = service.clone();
    dom::on(&service, "change", move |_event| {
        log::info!("Selected service: {}", dom::value_of(&target));
    });
}
