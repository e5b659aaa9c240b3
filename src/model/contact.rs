//! Contact form submission and its email rendering.

use crate::mail::OutgoingMail;
use crate::service::optional_text_field;
use serde_json::{Map, Value};

const MISSING: &str = "N/A";

#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

fn or_missing(v: &Option<String>) -> &str {
    v.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or(MISSING)
}

impl ContactMessage {
    /// Any JSON value is accepted for each field; numbers and lists are rendered as text.
    pub fn from_submission(body: &Map<String, Value>) -> Self {
        ContactMessage {
            name: optional_text_field(body, "name"),
            email: optional_text_field(body, "email"),
            phone: optional_text_field(body, "phone"),
            subject: optional_text_field(body, "subject"),
            message: optional_text_field(body, "message"),
        }
    }

    pub fn to_mail(&self) -> OutgoingMail {
        let subject = match self.subject.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(s) => format!("Website enquiry: {}", s),
            None => format!("Website enquiry from {}", or_missing(&self.name)),
        };
        let body = format!(
            "New contact form submission\n\n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Subject: {}\n\n\
             Message:\n{}\n",
            or_missing(&self.name),
            or_missing(&self.email),
            or_missing(&self.phone),
            or_missing(&self.subject),
            or_missing(&self.message),
        );
        OutgoingMail {
            reply_to: self.email.clone(),
            subject,
            body,
        }
    }
}
