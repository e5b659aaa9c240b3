//! Statement text for the intake tables; values are always bound as parameters.

mod builder;
pub use builder::*;
