//! Builds parameterized statements for the `schools` and `company_registrations` tables.

use crate::model::SchoolFilter;

pub const SCHOOLS_TABLE: &str = "schools";
pub const COMPANIES_TABLE: &str = "company_registrations";

const SCHOOL_COLUMNS: &str = "id, school_name, location, province, level, contact_name, position, phone, email, \
     school_fees, internet_connectivity, service_provider, computer_lab, computer_count, areas_of_need, \
     motivation, consent, created_at";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: String) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn like_pattern(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// SELECT with optional conjunctive filters, newest first.
pub fn select_schools(filter: &SchoolFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    if let Some(location) = &filter.location {
        let n = q.push_param(like_pattern(location));
        where_parts.push(format!("location ILIKE ${}", n));
    }
    if let Some(need) = &filter.need {
        let n = q.push_param(like_pattern(need));
        where_parts.push(format!("areas_of_need ILIKE ${}", n));
    }
    if let Some(level) = &filter.level {
        let n = q.push_param(level.clone());
        where_parts.push(format!("level = ${}", n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY created_at DESC",
        SCHOOL_COLUMNS, SCHOOLS_TABLE, where_clause
    );
    q
}

/// SELECT by primary key. Caller binds the id as $1.
pub fn select_school_by_id() -> String {
    format!("SELECT {} FROM {} WHERE id = $1", SCHOOL_COLUMNS, SCHOOLS_TABLE)
}

/// INSERT one school row ($1..$17 in column order), returning the stored row.
pub fn insert_school() -> String {
    let placeholders: Vec<String> = (1..=17).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} (id, school_name, location, province, level, contact_name, position, phone, email, \
         school_fees, internet_connectivity, service_provider, computer_lab, computer_count, areas_of_need, \
         motivation, consent) VALUES ({}) RETURNING {}",
        SCHOOLS_TABLE,
        placeholders.join(", "),
        SCHOOL_COLUMNS
    )
}

/// INSERT one company registration ($1..$14 in column order).
pub fn insert_company() -> String {
    let placeholders: Vec<String> = (1..=14).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} (id, company_name, industry, location, province, contact_name, position, phone, email, \
         areas_of_interest, budget, motivation, consent, registered_at) VALUES ({})",
        COMPANIES_TABLE,
        placeholders.join(", ")
    )
}
