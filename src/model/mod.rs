//! Records that flow through the intake and content routes.

pub mod company;
pub mod contact;
pub mod diary;
pub mod school;

pub use company::{next_company_id, skip_past_company_id, CompanyRegistration, COMPANY_REQUIRED_FIELDS};
pub use contact::ContactMessage;
pub use diary::{DiaryEntry, FullDiaryEntry};
pub use school::{split_needs, NewSchool, School, SchoolFilter, SchoolRow, SCHOOL_REQUIRED_FIELDS};
