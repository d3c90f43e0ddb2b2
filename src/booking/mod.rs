//! Booking form
//!
//! Pure decision layer behind the booking page: field rules, the bookable
//! date window, and the record handed to the confirmation modal. DOM
//! wiring lives in `platform::web::booking`.

pub mod dates;
pub mod record;
pub mod validate;

pub use dates::{BookingWindow, CalendarDate, iso_timestamp};
pub use record::BookingRecord;
pub use validate::{
    BookingForm, Field, FieldError, ValidationReport, check_on_blur, is_valid_email,
    is_valid_phone, sanitize_phone, validate,
};

/// Validate a submission and package it on success
pub fn submit(
    form: BookingForm,
    required: &[Field],
    today: CalendarDate,
    now_ms: f64,
) -> Result<BookingRecord, ValidationReport> {
    let report = validate(&form, required, today);
    if !report.is_valid() {
        return Err(report);
    }
    Ok(BookingRecord::new(form, now_ms))
}
