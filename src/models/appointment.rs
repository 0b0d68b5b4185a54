use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::center::Center;

// year-day-month, e.g. 2024-31-01 is 31 January 2024
pub const BOOKING_DATE_FORMAT: &str = "%Y-%d-%m";

static BOOKING_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

/// A stored booking. `date` is kept exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: i32,
    pub client_full_name: String,
    pub date: String,
    pub center_id: i32,
}

/// Body of POST and PUT requests on `/appointments`.
///
/// Missing or `null` fields fall back to empty values so they are reported
/// as validation errors instead of rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentParameters {
    #[serde(deserialize_with = "null_as_default")]
    pub client_full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(alias = "centerID", deserialize_with = "null_as_default")]
    pub center_id: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An appointment with its center attached, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    pub id: i32,
    pub client_full_name: String,
    pub date: String,
    pub center: Option<Center>,
}

impl AppointmentView {
    pub fn new(appointment: Appointment, center: Option<Center>) -> Self {
        AppointmentView {
            id: appointment.id,
            client_full_name: appointment.client_full_name,
            date: appointment.date,
            center,
        }
    }
}

/// Parses a booking date strictly as `yyyy-dd-MM`.
///
/// The string must be exactly four digits, dash, two digits, dash, two
/// digits, and name a real calendar day.
pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    if !BOOKING_DATE_SHAPE.is_match(raw) {
        return None;
    }

    NaiveDate::parse_from_str(raw, BOOKING_DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}
