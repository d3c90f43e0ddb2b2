//! Accepted booking, packaged for the confirmation step

use serde::{Deserialize, Serialize};

use super::dates::iso_timestamp;
use super::validate::BookingForm;

/// A validated booking plus the moment it was submitted
///
/// Nothing is sent anywhere yet; a server integration would take this
/// record as its request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub device: String,
    pub problem: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

impl BookingRecord {
    pub fn new(form: BookingForm, submitted_at_ms: f64) -> Self {
        let BookingForm {
            name,
            phone,
            email,
            service,
            date,
            time,
            device,
            problem,
        } = form;
        Self {
            name,
            phone,
            email,
            service,
            date,
            time,
            device,
            problem,
            timestamp: iso_timestamp(submitted_at_ms),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
