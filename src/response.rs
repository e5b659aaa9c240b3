//! Success bodies for the intake and content routes.

use crate::model::{DiaryEntry, FullDiaryEntry, School, SchoolRow};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ContactSent {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: String,
    pub company_name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct CompanyCreated {
    pub message: &'static str,
    pub company: CompanySummary,
}

#[derive(Serialize)]
pub struct SchoolCreated {
    pub message: &'static str,
    pub data: Vec<SchoolRow>,
}

#[derive(Serialize)]
pub struct SchoolList {
    pub schools: Vec<School>,
}

#[derive(Serialize)]
pub struct SchoolOne {
    pub school: School,
}

#[derive(Serialize)]
pub struct DiaryList {
    pub entries: Vec<DiaryEntry>,
}

#[derive(Serialize)]
pub struct DiaryOne {
    pub entry: FullDiaryEntry,
}

pub fn created<T: Serialize>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(body))
}

pub fn ok<T: Serialize>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(body))
}
