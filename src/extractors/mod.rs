//! Request extractors shared by the intake handlers.

mod form;
pub use form::FormBody;
