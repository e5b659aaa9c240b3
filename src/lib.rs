//! campus-intake: lead-intake and content API for the school-ERP marketing site.

pub mod case;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mail;
pub mod model;
pub mod remote;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::SiteConfig;
pub use error::{AppError, ConfigError};
pub use mail::{MailError, MailFailure, Mailer, OutgoingMail, SmtpMailer};
pub use remote::{http_client, CompanyDirectory, DiaryCms, HttpCompanyDirectory, RemoteError, SanityClient};
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_tables, CompanyStore, MemoryCompanyStore, MemorySchoolStore, PgCompanyStore,
    PgSchoolStore, SchoolStore, StoreError,
};
