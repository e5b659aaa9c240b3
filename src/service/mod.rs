//! Request validation shared by the intake handlers.

mod validation;
pub use validation::{
    as_text, body_to_map, is_truthy, optional_text_field, text_field, RequestValidator,
};
