use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Step text used when a recipe carries no usable steps.
pub const PLACEHOLDER_STEP: &str = "(Add steps)";

/// A validated recipe. Every value of this type has a non-empty name,
/// `minutes > 0` and at least one lowercase ingredient token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    pub minutes: u64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub area: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Result of a match request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// `max_minutes` fell below the floor; no data was consulted.
    TooShort { max_minutes: u32, floor: u32 },
    /// Wanted ingredients unknown to every record, title-cased and sorted.
    Shortage(Vec<String>),
    NoMatch { max_minutes: u32 },
    Match(&'a RecipeRecord),
}

/// Raw form input for a new recipe, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewRecipeInput {
    pub name: String,
    pub minutes: String,
    /// Comma separated.
    pub ingredients: String,
    pub steps: Vec<String>,
    pub area: String,
    pub category: String,
    pub source_url: Option<String>,
}

#[derive(Error, Debug)]
pub enum StrawberryError {
    #[error("Couldn't find {0}. Create the file and add recipes in JSON format.")]
    MissingStore(PathBuf),

    #[error("Invalid recipe file {path}: {reason}")]
    MalformedStore { path: PathBuf, reason: String },

    #[error("Recipe data error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File system error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigWriteError(#[from] toml::ser::Error),

    #[error("{0}")]
    InvalidRecipe(String),

    #[error("Minutes must be a valid number (got '{0}')")]
    NotANumber(String),

    #[error("Please enter at least one ingredient")]
    EmptyQuery,

    #[error("No recipes loaded. Add recipes to the recipe file first.")]
    NoRecipesLoaded,
}
