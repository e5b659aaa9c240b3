//! School registrations: submission mapping, stored row, read model and list filter.

use crate::case::object_keys_to_snake_case;
use crate::service::{is_truthy, optional_text_field, text_field};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Checked in order; the first missing one is reported.
pub const SCHOOL_REQUIRED_FIELDS: &[&str] = &[
    "schoolName",
    "location",
    "province",
    "level",
    "contactName",
    "phone",
    "email",
    "schoolFees",
    "areasOfNeed",
    "motivation",
];

/// Column values for one insert into `schools`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub school_name: String,
    pub location: String,
    pub province: String,
    pub level: String,
    pub contact_name: String,
    pub position: Option<String>,
    pub phone: String,
    pub email: String,
    pub school_fees: String,
    pub internet_connectivity: Option<String>,
    pub service_provider: Option<String>,
    pub computer_lab: Option<String>,
    pub computer_count: Option<String>,
    pub areas_of_need: String,
    pub motivation: String,
    pub consent: bool,
}

impl NewSchool {
    /// Maps a camelCase submission onto snake_case columns. Numbers and lists
    /// become text; consent becomes a boolean.
    pub fn from_submission(body: &Map<String, Value>) -> Self {
        let mut cols = body.clone();
        object_keys_to_snake_case(&mut cols);
        NewSchool {
            school_name: text_field(&cols, "school_name"),
            location: text_field(&cols, "location"),
            province: text_field(&cols, "province"),
            level: text_field(&cols, "level"),
            contact_name: text_field(&cols, "contact_name"),
            position: optional_text_field(&cols, "position"),
            phone: text_field(&cols, "phone"),
            email: text_field(&cols, "email"),
            school_fees: text_field(&cols, "school_fees"),
            internet_connectivity: optional_text_field(&cols, "internet_connectivity"),
            service_provider: optional_text_field(&cols, "service_provider"),
            computer_lab: optional_text_field(&cols, "computer_lab"),
            computer_count: optional_text_field(&cols, "computer_count"),
            areas_of_need: text_field(&cols, "areas_of_need"),
            motivation: text_field(&cols, "motivation"),
            consent: is_truthy(cols.get("consent")),
        }
    }
}

/// A stored row, as returned by insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SchoolRow {
    pub id: Uuid,
    pub school_name: String,
    pub location: String,
    pub province: String,
    pub level: String,
    pub contact_name: String,
    pub position: Option<String>,
    pub phone: String,
    pub email: String,
    pub school_fees: String,
    pub internet_connectivity: Option<String>,
    pub service_provider: Option<String>,
    pub computer_lab: Option<String>,
    pub computer_count: Option<String>,
    pub areas_of_need: String,
    pub motivation: String,
    pub consent: bool,
    pub created_at: DateTime<Utc>,
}

impl SchoolRow {
    pub fn new(id: Uuid, school: NewSchool, created_at: DateTime<Utc>) -> Self {
        SchoolRow {
            id,
            school_name: school.school_name,
            location: school.location,
            province: school.province,
            level: school.level,
            contact_name: school.contact_name,
            position: school.position,
            phone: school.phone,
            email: school.email,
            school_fees: school.school_fees,
            internet_connectivity: school.internet_connectivity,
            service_provider: school.service_provider,
            computer_lab: school.computer_lab,
            computer_count: school.computer_count,
            areas_of_need: school.areas_of_need,
            motivation: school.motivation,
            consent: school.consent,
            created_at,
        }
    }
}

/// Listing view: `areas_of_need` split into items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct School {
    pub id: Uuid,
    pub school_name: String,
    pub location: String,
    pub province: String,
    pub level: String,
    pub contact_name: String,
    pub position: Option<String>,
    pub phone: String,
    pub email: String,
    pub school_fees: String,
    pub internet_connectivity: Option<String>,
    pub service_provider: Option<String>,
    pub computer_lab: Option<String>,
    pub computer_count: Option<String>,
    pub areas_of_need: Vec<String>,
    pub motivation: String,
    pub consent: bool,
    pub created_at: DateTime<Utc>,
}

impl From<SchoolRow> for School {
    fn from(row: SchoolRow) -> Self {
        School {
            areas_of_need: split_needs(&row.areas_of_need),
            id: row.id,
            school_name: row.school_name,
            location: row.location,
            province: row.province,
            level: row.level,
            contact_name: row.contact_name,
            position: row.position,
            phone: row.phone,
            email: row.email,
            school_fees: row.school_fees,
            internet_connectivity: row.internet_connectivity,
            service_provider: row.service_provider,
            computer_lab: row.computer_lab,
            computer_count: row.computer_count,
            motivation: row.motivation,
            consent: row.consent,
            created_at: row.created_at,
        }
    }
}

pub fn split_needs(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(d)?;
    Ok(v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Query string for `GET /api/schools`. Filters are conjunctive; blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchoolFilter {
    #[serde(default, deserialize_with = "non_empty")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub need: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub level: Option<String>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl SchoolFilter {
    /// Location and need match as case-insensitive substrings, level exactly.
    pub fn matches(&self, row: &SchoolRow) -> bool {
        self.location
            .as_deref()
            .map_or(true, |l| contains_ignore_case(&row.location, l))
            && self
                .need
                .as_deref()
                .map_or(true, |n| contains_ignore_case(&row.areas_of_need, n))
            && self.level.as_deref().map_or(true, |l| row.level == l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn submission() -> Map<String, Value> {
        json!({
            "schoolName": "Test",
            "location": "Harare",
            "province": "Harare Metropolitan",
            "level": "Primary",
            "contactName": "R. Moyo",
            "phone": "+263 77 000 0000",
            "email": "head@test.school",
            "schoolFees": "USD 50",
            "areasOfNeed": "Laptops, Internet",
            "motivation": "Digital literacy",
            "computerCount": 5,
            "computerLab": false,
            "consent": "true"
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn maps_submission_to_columns() {
        let s = NewSchool::from_submission(&submission());
        assert_eq!(s.school_name, "Test");
        assert_eq!(s.contact_name, "R. Moyo");
        assert_eq!(s.computer_count.as_deref(), Some("5"));
        assert_eq!(s.computer_lab.as_deref(), Some("false"));
        assert_eq!(s.position, None);
        assert!(s.consent);
    }

    #[test]
    fn list_of_needs_is_joined_then_split_back() {
        let mut body = submission();
        body.insert("areasOfNeed".into(), json!(["Laptops", " Internet "]));
        let s = NewSchool::from_submission(&body);
        assert_eq!(s.areas_of_need, "Laptops,  Internet ");
        assert_eq!(split_needs(&s.areas_of_need), vec!["Laptops", "Internet"]);
    }

    #[test]
    fn split_drops_blank_items() {
        assert_eq!(split_needs(" a , ,b,"), vec!["a", "b"]);
        assert!(split_needs("").is_empty());
    }

    #[test]
    fn filter_is_conjunctive() {
        let row = SchoolRow::new(Uuid::new_v4(), NewSchool::from_submission(&submission()), Utc::now());
        let by_location = SchoolFilter { location: Some("harare".into()), ..Default::default() };
        assert!(by_location.matches(&row));

        let both = SchoolFilter { level: Some("Primary".into()), ..by_location.clone() };
        assert!(both.matches(&row));

        let wrong_level = SchoolFilter { level: Some("primary".into()), ..by_location };
        assert!(!wrong_level.matches(&row));

        let need = SchoolFilter { need: Some("INTERNET".into()), ..Default::default() };
        assert!(need.matches(&row));
    }
}
