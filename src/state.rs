//! Shared application state for all routes: one handle per external collaborator.

use crate::mail::Mailer;
use crate::remote::{CompanyDirectory, DiaryCms};
use crate::store::{CompanyStore, SchoolStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    /// Durable company registrations (write side).
    pub companies: Arc<dyn CompanyStore>,
    /// Upstream companies API (read side).
    pub directory: Arc<dyn CompanyDirectory>,
    pub schools: Arc<dyn SchoolStore>,
    pub cms: Arc<dyn DiaryCms>,
}
