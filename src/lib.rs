//! Local recipe store with ingredient and cooking-time matching.

pub mod config;
pub mod core;
pub mod format;
pub mod matcher;
pub mod session;
pub mod store;
pub mod tokens;
pub mod ui;
pub mod validate;

pub use crate::core::{NewRecipeInput, Outcome, RecipeRecord, StrawberryError};
pub use crate::session::Session;
