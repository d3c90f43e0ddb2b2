//! Booking form validation rules

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::dates::CalendarDate;
use crate::consts::PHONE_DIGITS;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Booking form inputs, keyed by element id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
    Service,
    Date,
    Time,
    Device,
    Problem,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Service,
        Field::Date,
        Field::Time,
        Field::Device,
        Field::Problem,
    ];

    /// Fields the booking page marks `required`
    pub const DEFAULT_REQUIRED: [Field; 6] = [
        Field::Name,
        Field::Phone,
        Field::Service,
        Field::Date,
        Field::Time,
        Field::Device,
    ];

    /// DOM element id
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Service => "service",
            Field::Date => "date",
            Field::Time => "time",
            Field::Device => "device",
            Field::Problem => "problem",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

/// Raw values as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub device: String,
    pub problem: String,
}

impl BookingForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Device => &self.device,
            Field::Problem => &self.problem,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Service => &mut self.service,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Device => &mut self.device,
            Field::Problem => &mut self.problem,
        };
        *slot = value;
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidPhone,
    InvalidEmail,
    PastDate,
}

impl FieldError {
    /// Inline message shown under the field
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidPhone => "Please enter a valid 10-digit phone number",
            FieldError::InvalidEmail => "Please enter a valid email address",
            FieldError::PastDate => "Please select today or a future date",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// At most one error per field, in the order fields first failed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(Field, FieldError)>,
}

impl ValidationReport {
    /// Record an error, replacing any earlier one for the same field
    pub fn reject(&mut self, field: Field, error: FieldError) {
        match self.errors.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = error,
            None => self.errors.push((field, error)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| *e)
    }

    pub fn errors(&self) -> &[(Field, FieldError)] {
        &self.errors
    }
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check the whole form at submit time
///
/// Rules run in order and a later failure replaces an earlier message:
/// required fields, phone format, email format, date not in the past.
/// An unparseable date is left to the browser's own date input.
pub fn validate(form: &BookingForm, required: &[Field], today: CalendarDate) -> ValidationReport {
    let mut report = ValidationReport::default();

    for &field in required {
        if form.get(field).trim().is_empty() {
            report.reject(field, FieldError::Required);
        }
    }

    if !form.phone.is_empty() && !is_valid_phone(&form.phone) {
        report.reject(Field::Phone, FieldError::InvalidPhone);
    }

    if !form.email.is_empty() && !is_valid_email(&form.email) {
        report.reject(Field::Email, FieldError::InvalidEmail);
    }

    if let Some(selected) = CalendarDate::parse(&form.date) {
        if selected < today {
            report.reject(Field::Date, FieldError::PastDate);
        }
    }

    report
}

/// Real-time check when a required field loses focus
///
/// Blank fields are not flagged here; that waits for a submit attempt.
pub fn check_on_blur(field: Field, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return None;
    }
    match field {
        Field::Phone if !is_valid_phone(value) => Some(FieldError::InvalidPhone),
        Field::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
        _ => None,
    }
}

/// Keep only digits, at most `PHONE_DIGITS` of them
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect()
}
