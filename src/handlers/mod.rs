//! HTTP handlers for the contact relay, intake routes and diary content.

pub mod company;
pub mod contact;
pub mod diary;
pub mod school;
