//! Corporate sponsor registrations.

use crate::service::{is_truthy, text_field};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicI64, Ordering};

/// Checked in order; the first missing one is reported.
pub const COMPANY_REQUIRED_FIELDS: &[&str] = &[
    "companyName",
    "industry",
    "location",
    "province",
    "contactName",
    "position",
    "phone",
    "email",
    "areasOfInterest",
    "budget",
    "motivation",
    "consent",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistration {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    pub location: String,
    pub province: String,
    pub contact_name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub areas_of_interest: String,
    pub budget: String,
    pub motivation: String,
    pub consent: bool,
    pub registered_at: DateTime<Utc>,
}

impl CompanyRegistration {
    /// Builds the record from a validated submission body.
    pub fn from_submission(body: &Map<String, Value>, id: String, registered_at: DateTime<Utc>) -> Self {
        CompanyRegistration {
            id,
            company_name: text_field(body, "companyName"),
            industry: text_field(body, "industry"),
            location: text_field(body, "location"),
            province: text_field(body, "province"),
            contact_name: text_field(body, "contactName"),
            position: text_field(body, "position"),
            phone: text_field(body, "phone"),
            email: text_field(body, "email"),
            areas_of_interest: text_field(body, "areasOfInterest"),
            budget: text_field(body, "budget"),
            motivation: text_field(body, "motivation"),
            consent: is_truthy(body.get("consent")),
            registered_at,
        }
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp as a string, bumped past the previous id when two
/// registrations land in the same millisecond.
pub fn next_company_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = millis.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(actual) => prev = actual,
        }
    }
}

/// Moves the generator past an id found already stored, so the next id is larger.
pub fn skip_past_company_id(taken: &str) {
    if let Ok(taken) = taken.parse::<i64>() {
        LAST_ID.fetch_max(taken, Ordering::AcqRel);
    }
}
