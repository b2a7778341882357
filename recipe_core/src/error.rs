//! Error types for the recipe_core library.

use crate::RecipeId;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for recipe_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Recipe records failed validation
    #[error("Recipe validation error: {0}")]
    Validation(String),

    /// Recipe id is not present in the catalog
    #[error("Recipe {0} not found")]
    NotFound(RecipeId),

    /// A record lacks a field the operation depends on
    #[error("Recipe {recipe_id} is missing field '{field}'")]
    MissingField {
        recipe_id: RecipeId,
        field: String,
    },

    /// Random selection from a catalog with no recipes
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// The shared catalog lock was poisoned by a panicking holder
    #[error("Catalog lock poisoned")]
    LockPoisoned,
}
